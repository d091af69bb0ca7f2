//! Human-readable dumps of vectors and matrices, compiled in with the
//! `debug-print` feature. The output format is for people, not for parsing.

use std::io::{self, Write};

use colored::Colorize;

use crate::types::{Matrix4, Vector2, Vector3, Vector4};

#[cfg(test)]
mod test_debug_print {
    use super::DebugPrint;
    use crate::types::{Matrix4, Vector2, Vector3, Vector4};

    fn dump(value: &impl DebugPrint) -> String {
        let mut out = Vec::new();
        value.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn vectors() {
        let out = dump(&Vector2::new(1.0, -2.5));
        assert!(out.contains("vec2"));
        assert!(out.contains("   1.000,   -2.500"));
        let out = dump(&Vector3::new(0.0, 1.0, 2.0));
        assert!(out.contains("vec3"));
        assert!(out.contains("   0.000,    1.000,    2.000"));
        let out = dump(&Vector4::new(1.0, 2.0, 3.0, 4.0));
        assert!(out.contains("vec4"));
        assert!(out.contains("   1.000,    2.000,    3.000,    4.000"));
    }

    #[test]
    fn matrix_is_printed_by_rows() {
        let m = Matrix4::from_array([
            1.0, 2.0, 3.0, 4.0, //
            5.0, 6.0, 7.0, 8.0, //
            9.0, 10.0, 11.0, 12.0, //
            13.0, 14.0, 15.0, 16.0,
        ]);
        let out = dump(&m);
        assert!(out.contains("mat4"));
        assert!(out.contains("   1.000,    5.000,    9.000,   13.000"));
        assert!(out.contains("   4.000,    8.000,   12.000,   16.000"));
        assert_eq!(out.lines().count(), 6);
    }
}

pub trait DebugPrint {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()>;

    fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock())
    }
}

impl DebugPrint for Vector2 {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}: {{", "vec2".cyan().bold())?;
        writeln!(writer, "\t{:8.3}, {:8.3}", self.x, self.y)?;
        writeln!(writer, "}}")
    }
}

impl DebugPrint for Vector3 {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}: {{", "vec3".cyan().bold())?;
        writeln!(writer, "\t{:8.3}, {:8.3}, {:8.3}", self.x, self.y, self.z)?;
        writeln!(writer, "}}")
    }
}

impl DebugPrint for Vector4 {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}: {{", "vec4".cyan().bold())?;
        writeln!(
            writer,
            "\t{:8.3}, {:8.3}, {:8.3}, {:8.3}",
            self.x, self.y, self.z, self.w
        )?;
        writeln!(writer, "}}")
    }
}

impl DebugPrint for Matrix4 {
    fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writeln!(writer, "{}: {{", "mat4".magenta().bold())?;
        for row in 0..4 {
            writeln!(
                writer,
                "\t{:8.3}, {:8.3}, {:8.3}, {:8.3}",
                self.i[row], self.j[row], self.k[row], self.l[row]
            )?;
        }
        writeln!(writer, "}}")
    }
}
