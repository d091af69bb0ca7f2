use crate::types::{Matrix4, Vector4};


impl Matrix4 {
    /// Symmetric perspective projection. `z_near` and `z_far` are positive
    /// distances along the view direction (`-z`); they map to NDC depth `-1`
    /// and `1`. Degenerate arguments are not checked.
    #[inline]
    pub fn perspective(fov_y_rad: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Matrix4 {
        let cot = (fov_y_rad / 2.0).tan().recip();
        let dz = z_near - z_far;
        Matrix4 {
            i: Vector4::new(cot / aspect_ratio, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, cot, 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, (z_far + z_near) / dz, -1.0),
            l: Vector4::new(0.0, 0.0, (2.0 * z_far * z_near) / dz, 0.0),
        }
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top]`
    /// between the `z_near` and `z_far` distances onto the clip cube.
    #[inline]
    pub fn ortho(
        left: f32,
        right: f32,
        bottom: f32,
        top: f32,
        z_near: f32,
        z_far: f32,
    ) -> Matrix4 {
        let w = right - left;
        let h = top - bottom;
        let d = z_far - z_near;
        Matrix4 {
            i: Vector4::new(2.0 / w, 0.0, 0.0, 0.0),
            j: Vector4::new(0.0, 2.0 / h, 0.0, 0.0),
            k: Vector4::new(0.0, 0.0, -2.0 / d, 0.0),
            l: Vector4::new(
                -(right + left) / w,
                -(top + bottom) / h,
                -(z_far + z_near) / d,
                1.0,
            ),
        }
    }
}
