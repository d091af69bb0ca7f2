pub mod projection;

use strum::{EnumCount, EnumIter};

use crate::types::{Matrix4, Vector3, Vector4};

/// Principal axes of the right-handed world frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumCount)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    #[inline]
    pub const fn unit(self) -> Vector3 {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

#[cfg(test)]
mod test_matrix_4_transforms {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    use strum::{EnumCount, IntoEnumIterator};

    use super::Axis;
    use crate::types::{Matrix4, Vector3, Vector4};

    fn assert_near(lhs: Vector4, rhs: Vector4, epsilon: f32) {
        for (a, b) in lhs.as_array().iter().zip(rhs.as_array()) {
            approx::assert_abs_diff_eq!(*a, *b, epsilon = epsilon);
        }
    }

    #[test]
    fn rotate_x() {
        let m = Matrix4::rotate_x(FRAC_PI_2);
        let p = m * Vector4::point(Vector3::y());
        assert!(p.approx_equal(Vector4::point(Vector3::z())));
    }

    #[test]
    fn rotate_y() {
        let m = Matrix4::rotate_y(FRAC_PI_2);
        let p = m * Vector4::point(Vector3::x());
        assert!(p.approx_equal(Vector4::point(-Vector3::z())));
    }

    #[test]
    fn rotate_z() {
        let m = Matrix4::rotate_z(FRAC_PI_2);
        let p = m * Vector4::point(Vector3::x());
        assert!(p.approx_equal(Vector4::point(Vector3::y())));
    }

    #[test]
    fn rotate_about_principal_axes() {
        assert_eq!(Axis::COUNT, 3);
        for axis in Axis::iter() {
            for rad in [FRAC_PI_4, FRAC_PI_2, -1.3] {
                let general = Matrix4::rotate(axis.unit(), rad);
                assert!(general.approx_equal(Matrix4::rotate_about(axis, rad)));
            }
        }
    }

    #[test]
    fn rotate_normalizes_axis() {
        let m = Matrix4::rotate(Vector3::new(0.0, 0.0, 5.0), FRAC_PI_2);
        assert!(m.approx_equal(Matrix4::rotate_z(FRAC_PI_2)));
    }

    #[test]
    fn rotate_preserves_axis_and_length() {
        let axis = Vector3::new(1.0, -2.0, 0.5);
        let m = Matrix4::rotate(axis, 1.1);
        assert_near(m * Vector4::vector(axis), Vector4::vector(axis), 1e-5);
        let p = m * Vector4::point(Vector3::new(3.0, 1.0, -2.0));
        approx::assert_abs_diff_eq!(
            Vector3::from(p).length(),
            Vector3::new(3.0, 1.0, -2.0).length(),
            epsilon = 1e-5
        );
    }

    #[test]
    fn rotate_around_pivot() {
        let pivot = Vector3::new(1.0, 1.0, 0.0);
        let m = Matrix4::translate(pivot)
            * Matrix4::rotate_z(FRAC_PI_2)
            * Matrix4::translate(-pivot);
        assert!((m * Vector4::point(pivot)).approx_equal(Vector4::point(pivot)));
        let p = m * Vector4::point(Vector3::new(2.0, 1.0, 0.0));
        assert!(p.approx_equal(Vector4::point(Vector3::new(1.0, 2.0, 0.0))));
    }

    #[test]
    fn translate() {
        let m = Matrix4::translate(Vector3::new(5.0, 6.0, 7.0));
        assert_eq!(
            m * Vector4::new(0.0, 0.0, 0.0, 1.0),
            Vector4::new(5.0, 6.0, 7.0, 1.0)
        );
        assert_eq!(&m.as_array()[12..15], &[5.0, 6.0, 7.0]);
        // directions are unaffected
        assert_eq!(m * Vector4::x(), Vector4::x());
    }

    #[test]
    fn scale() {
        let m = Matrix4::scale(Vector3::new(2.0, 3.0, 4.0));
        assert_eq!(
            m * Vector4::new(1.0, 1.0, 1.0, 1.0),
            Vector4::new(2.0, 3.0, 4.0, 1.0)
        );
        let m = Matrix4::scale_uniform(4.0);
        let p = m * Vector4::point(Vector3::new(3.0, 2.0, 1.0));
        assert_eq!(p, Vector4::point(Vector3::new(12.0, 8.0, 4.0)));
    }

    #[test]
    fn look_at() {
        let eye = Vector3::new(2.0, 3.0, 4.0);
        let target = Vector3::new(1.0, 1.0, 1.0);
        let m = Matrix4::look_at(eye, target, Vector3::z());
        assert_near(m * Vector4::point(eye), Vector4::point(Vector3::default()), 1e-5);
        let distance = (eye - target).length();
        assert_near(
            m * Vector4::point(target),
            Vector4::point(Vector3::new(0.0, 0.0, -distance)),
            1e-5,
        );
        // world up stays in the camera's y-z plane
        approx::assert_abs_diff_eq!((m * Vector4::vector(Vector3::z())).x, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn look_at_down_negative_z_is_identity() {
        let m = Matrix4::look_at(Vector3::default(), -Vector3::z(), Vector3::y());
        assert_eq!(m, Matrix4::identity());
    }

    #[test]
    fn look_at_agrees_with_rotate() {
        // a camera turned to face +x is the inverse of a -90 degree yaw
        let m = Matrix4::look_at(Vector3::default(), Vector3::x(), Vector3::y());
        assert!(m.approx_equal(Matrix4::rotate_y(FRAC_PI_2)));
        assert!(m.approx_equal(Matrix4::rotate_y(-FRAC_PI_2).inverse()));
    }
}

impl Matrix4 {
    #[inline]
    pub fn translate(delta: Vector3) -> Matrix4 {
        Matrix4::new(Vector4::x(), Vector4::y(), Vector4::z(), Vector4::point(delta))
    }

    #[inline]
    pub fn scale(factors: Vector3) -> Matrix4 {
        Matrix4::new(
            Vector4::new(factors.x, 0.0, 0.0, 0.0),
            Vector4::new(0.0, factors.y, 0.0, 0.0),
            Vector4::new(0.0, 0.0, factors.z, 0.0),
            Vector4::w(),
        )
    }

    #[inline]
    pub fn scale_uniform(s: f32) -> Matrix4 {
        Self::scale(Vector3::new(s, s, s))
    }

    /// Rotation by `rad` about `axis` through the origin. Positive angles turn
    /// counter-clockwise when looking from the tip of `axis` toward the origin.
    ///
    /// The axis is normalized here; a zero axis yields NaN elements. To rotate
    /// about another pivot, translate it to the origin first and back after.
    #[inline]
    pub fn rotate(axis: Vector3, rad: f32) -> Matrix4 {
        let Vector3 { x, y, z } = axis.normalize();
        let cos = rad.cos();
        let sin = rad.sin();
        let t = 1.0 - cos;
        Matrix4::new(
            Vector4::new(t * x * x + cos, t * x * y + sin * z, t * x * z - sin * y, 0.0),
            Vector4::new(t * x * y - sin * z, t * y * y + cos, t * y * z + sin * x, 0.0),
            Vector4::new(t * x * z + sin * y, t * y * z - sin * x, t * z * z + cos, 0.0),
            Vector4::w(),
        )
    }

    #[inline]
    pub fn rotate_about(axis: Axis, rad: f32) -> Matrix4 {
        match axis {
            Axis::X => Self::rotate_x(rad),
            Axis::Y => Self::rotate_y(rad),
            Axis::Z => Self::rotate_z(rad),
        }
    }

    #[inline]
    pub fn rotate_x(rad: f32) -> Matrix4 {
        let cos = rad.cos();
        let sin = rad.sin();
        Matrix4::new(
            Vector4::x(),
            Vector4::new(0.0, cos, sin, 0.0),
            Vector4::new(0.0, -sin, cos, 0.0),
            Vector4::w(),
        )
    }

    #[inline]
    pub fn rotate_y(rad: f32) -> Matrix4 {
        let cos = rad.cos();
        let sin = rad.sin();
        Matrix4::new(
            Vector4::new(cos, 0.0, -sin, 0.0),
            Vector4::y(),
            Vector4::new(sin, 0.0, cos, 0.0),
            Vector4::w(),
        )
    }

    #[inline]
    pub fn rotate_z(rad: f32) -> Matrix4 {
        let cos = rad.cos();
        let sin = rad.sin();
        Matrix4::new(
            Vector4::new(cos, sin, 0.0, 0.0),
            Vector4::new(-sin, cos, 0.0, 0.0),
            Vector4::z(),
            Vector4::w(),
        )
    }

    /// View matrix for a camera at `eye` looking at `target`. The camera
    /// looks down its local `-z` with `up` projected onto its local `+y`,
    /// which is what [`Matrix4::perspective`] and [`Matrix4::ortho`] expect.
    #[inline]
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Matrix4 {
        let d = (target - eye).normalize();
        let r = d.cross(up).normalize();
        let u = r.cross(d);
        Matrix4 {
            i: Vector4::new(r.x, u.x, -d.x, 0.0),
            j: Vector4::new(r.y, u.y, -d.y, 0.0),
            k: Vector4::new(r.z, u.z, -d.z, 0.0),
            l: Vector4::new(-r.dot(eye), -u.dot(eye), d.dot(eye), 1.0),
        }
    }
}
