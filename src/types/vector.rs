use super::{approx_eq, read_le_f32};
use crate::{error::MathResult, scalar};
use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Neg for Vector2 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl Add for Vector2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Vector2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Mul<Vector2> for f32 {
    type Output = Vector2;
    #[inline]
    fn mul(self, rhs: Vector2) -> Self::Output {
        rhs.scale(self)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self.scale(rhs.recip())
    }
}

impl Index<usize> for Vector2 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 2, "Invalid index {} for Vector2!", index);
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 2, "Invalid index {} for Vector2!", index);
        &mut bytemuck::cast_mut::<Self, [f32; 2]>(self)[index]
    }
}

impl From<[f32; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self { x, y }
    }
}

impl From<Vector2> for [f32; 2] {
    #[inline]
    fn from(value: Vector2) -> Self {
        value.to_array()
    }
}

impl From<Vector3> for Vector2 {
    #[inline]
    fn from(value: Vector3) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

impl From<Vector4> for Vector2 {
    #[inline]
    fn from(value: Vector4) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

impl Vector2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x() -> Self {
        Self { x: 1.0, y: 0.0 }
    }

    #[inline]
    pub const fn y() -> Self {
        Self { x: 0.0, y: 1.0 }
    }

    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f32::<2>("Vector2", bytes).map(Self::from)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 2] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn length_square(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Zero-length input yields non-finite components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(self.length().recip())
    }

    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
        }
    }

    #[inline]
    pub fn component_mul(self, rhs: Self) -> Self {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            x: scalar::abs(self.x),
            y: scalar::abs(self.y),
        }
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self {
            x: scalar::clamp(self.x, min.x, max.x),
            y: scalar::clamp(self.y, min.y, max.y),
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        approx_eq(self.x, rhs.x) && approx_eq(self.y, rhs.y)
    }
}

#[cfg(test)]
mod test_vector_3 {
    use super::{Vector2, Vector3, Vector4};
    use crate::MathError;

    #[test]
    fn cross() {
        assert_eq!(Vector3::x().cross(Vector3::y()), Vector3::z());
        assert_eq!(Vector3::y().cross(Vector3::x()), -Vector3::z());
        assert_eq!(Vector3::y().cross(Vector3::z()), Vector3::x());
        assert_eq!(Vector3::z().cross(Vector3::x()), Vector3::y());
    }

    #[test]
    fn length() {
        let vectors = [
            Vector3::new(1.0, 2.0, 2.0),
            Vector3::new(-3.0, 0.0, 4.0),
            Vector3::new(0.0, -0.5, 0.0),
        ];
        for v in vectors {
            assert!(v.length() > 0.0);
            approx::assert_abs_diff_eq!(v.normalize().length(), 1.0, epsilon = 1e-6);
        }
        assert_eq!(Vector3::new(1.0, 2.0, 2.0).length(), 3.0);
        assert_eq!(Vector3::default().length(), 0.0);
        assert_eq!(Vector3::new(-0.0, 0.0, -0.0).length(), 0.0);
    }

    #[test]
    fn normalize_zero_length() {
        let n = Vector3::default().normalize();
        assert!(!n.is_valid());
        assert!(n.x.is_nan() && n.y.is_nan() && n.z.is_nan());
    }

    #[test]
    fn compare_is_exact() {
        let a = Vector3::new(0.1, 0.2, 0.3);
        let b = Vector3::new(0.1, 0.2, 0.3 + 1e-7);
        assert_eq!(a, a);
        assert_ne!(a, b);
        assert!(a.approx_equal(b));
    }

    #[test]
    fn clamp_and_abs() {
        let v = Vector3::new(-3.0, 0.5, 7.0);
        let lo = Vector3::new(-1.0, -1.0, -1.0);
        let hi = Vector3::new(1.0, 1.0, 1.0);
        assert_eq!(v.clamp(lo, hi), Vector3::new(-1.0, 0.5, 1.0));
        assert_eq!(v.abs(), Vector3::new(3.0, 0.5, 7.0));
    }

    #[test]
    fn convert() {
        let v2 = Vector2::new(1.0, 2.0);
        assert_eq!(Vector3::extend(v2, 3.0), Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(
            Vector3::from(Vector4::new(1.0, 2.0, 3.0, 4.0)),
            Vector3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn index() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v[2], 3.0);
        v[1] = 5.0;
        assert_eq!(v, Vector3::new(1.0, 5.0, 3.0));
    }

    #[test]
    fn le_bytes() {
        let bytes: Vec<u8> = [1.0f32, -2.0, 0.5]
            .iter()
            .flat_map(|s| s.to_le_bytes())
            .collect();
        let v = Vector3::try_from_le_bytes(&bytes).unwrap();
        assert_eq!(v, Vector3::new(1.0, -2.0, 0.5));
        assert_eq!(
            Vector3::try_from_le_bytes(&bytes[..8]),
            Err(MathError::InvalidByteLength {
                type_name: "Vector3",
                expected: 12,
                found: 8,
            })
        );
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Add for Vector3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl Mul<Vector3> for f32 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Self::Output {
        rhs.scale(self)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Div<f32> for Vector3 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self.scale(rhs.recip())
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 3, "Invalid index {} for Vector3!", index);
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 3, "Invalid index {} for Vector3!", index);
        &mut bytemuck::cast_mut::<Self, [f32; 3]>(self)[index]
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(value: Vector3) -> Self {
        value.to_array()
    }
}

impl From<Vector4> for Vector3 {
    #[inline]
    fn from(value: Vector4) -> Self {
        Self {
            x: value.x,
            y: value.y,
            z: value.z,
        }
    }
}

impl Vector3 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn extend(v: Vector2, z: f32) -> Self {
        Self { x: v.x, y: v.y, z }
    }

    #[inline]
    pub const fn x() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub const fn y() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
        }
    }

    #[inline]
    pub const fn z() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
        }
    }

    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f32::<3>("Vector3", bytes).map(Self::from)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 3] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn length_square(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Zero-length input yields non-finite components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(self.length().recip())
    }

    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
        }
    }

    #[inline]
    pub fn component_mul(self, rhs: Self) -> Self {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
        }
    }

    /// Handedness follows the caller's coordinate convention:
    /// `x().cross(y()) == z()`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            x: scalar::abs(self.x),
            y: scalar::abs(self.y),
            z: scalar::abs(self.z),
        }
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self {
            x: scalar::clamp(self.x, min.x, max.x),
            y: scalar::clamp(self.y, min.y, max.y),
            z: scalar::clamp(self.z, min.z, max.z),
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        approx_eq(self.x, rhs.x) && approx_eq(self.y, rhs.y) && approx_eq(self.z, rhs.z)
    }
}


#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Neg for Vector4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}

impl Add for Vector4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
            w: self.w + rhs.w,
        }
    }
}

impl Sub for Vector4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
            w: self.w - rhs.w,
        }
    }
}

impl Mul<Vector4> for f32 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs.scale(self)
    }
}

impl Mul<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f32) -> Self::Output {
        self.scale(rhs)
    }
}

impl Div<f32> for Vector4 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f32) -> Self::Output {
        self.scale(rhs.recip())
    }
}

impl Index<usize> for Vector4 {
    type Output = f32;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Vector4!", index);
        &self.as_array()[index]
    }
}

impl IndexMut<usize> for Vector4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Vector4!", index);
        &mut bytemuck::cast_mut::<Self, [f32; 4]>(self)[index]
    }
}

impl From<[f32; 4]> for Vector4 {
    #[inline]
    fn from([x, y, z, w]: [f32; 4]) -> Self {
        Self { x, y, z, w }
    }
}

impl From<Vector4> for [f32; 4] {
    #[inline]
    fn from(value: Vector4) -> Self {
        value.to_array()
    }
}

impl Vector4 {
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    pub const fn extend(v: Vector3, w: f32) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w,
        }
    }

    #[inline]
    pub const fn from_vector2(v: Vector2, z: f32, w: f32) -> Self {
        Self { x: v.x, y: v.y, z, w }
    }

    #[inline]
    pub const fn concat(xy: Vector2, zw: Vector2) -> Self {
        Self {
            x: xy.x,
            y: xy.y,
            z: zw.x,
            w: zw.y,
        }
    }

    #[inline]
    pub const fn point(p: Vector3) -> Self {
        Self::extend(p, 1.0)
    }

    #[inline]
    pub const fn vector(v: Vector3) -> Self {
        Self::extend(v, 0.0)
    }

    #[inline]
    pub const fn x() -> Self {
        Self {
            x: 1.0,
            y: 0.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[inline]
    pub const fn y() -> Self {
        Self {
            x: 0.0,
            y: 1.0,
            z: 0.0,
            w: 0.0,
        }
    }

    #[inline]
    pub const fn z() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 1.0,
            w: 0.0,
        }
    }

    #[inline]
    pub const fn w() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            w: 1.0,
        }
    }

    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f32::<4>("Vector4", bytes).map(Self::from)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 4] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z + self.w * rhs.w
    }

    #[inline]
    pub fn length_square(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Zero-length input yields non-finite components.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(self.length().recip())
    }

    #[inline]
    pub fn scale(self, s: f32) -> Self {
        Self {
            x: self.x * s,
            y: self.y * s,
            z: self.z * s,
            w: self.w * s,
        }
    }

    #[inline]
    pub fn component_mul(self, rhs: Self) -> Self {
        Self {
            x: self.x * rhs.x,
            y: self.y * rhs.y,
            z: self.z * rhs.z,
            w: self.w * rhs.w,
        }
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self {
            x: scalar::abs(self.x),
            y: scalar::abs(self.y),
            z: scalar::abs(self.z),
            w: scalar::abs(self.w),
        }
    }

    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self {
            x: scalar::clamp(self.x, min.x, max.x),
            y: scalar::clamp(self.y, min.y, max.y),
            z: scalar::clamp(self.z, min.z, max.z),
            w: scalar::clamp(self.w, min.w, max.w),
        }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        approx_eq(self.x, rhs.x)
            && approx_eq(self.y, rhs.y)
            && approx_eq(self.z, rhs.z)
            && approx_eq(self.w, rhs.w)
    }
}
