mod matrix;
mod vector;

pub use matrix::Matrix4;
pub use vector::{Vector2, Vector3, Vector4};

use crate::error::{MathError, MathResult};

/// Tolerance used by the `approx_equal` helpers. Absolute for magnitudes up
/// to one, relative above that.
pub const EPS: f32 = 1e-5;



#[inline]
fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= EPS * a.abs().max(b.abs()).max(1.0)
}

fn read_le_f32<const N: usize>(type_name: &'static str, bytes: &[u8]) -> MathResult<[f32; N]> {
    let expected = N * std::mem::size_of::<f32>();
    if bytes.len() != expected {
        return Err(MathError::InvalidByteLength {
            type_name,
            expected,
            found: bytes.len(),
        });
    }
    let mut values = [0.0f32; N];
    for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
        *value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(values)
}
