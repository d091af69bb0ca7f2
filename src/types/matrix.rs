use bytemuck::{Pod, Zeroable};
use std::ops::{Add, Index, IndexMut, Mul, Neg, Sub};

use super::{read_le_f32, Vector4};
use crate::error::MathResult;


/// 4x4 matrix stored as four columns; the flat layout is `m[col * 4 + row]`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Zeroable, Pod)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Matrix4 {
    pub i: Vector4,
    pub j: Vector4,
    pub k: Vector4,
    pub l: Vector4,
}

impl Neg for Matrix4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            i: -self.i,
            j: -self.j,
            k: -self.k,
            l: -self.l,
        }
    }
}

impl Add for Matrix4 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
            k: self.k + rhs.k,
            l: self.l + rhs.l,
        }
    }
}

impl Sub for Matrix4 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            i: self.i - rhs.i,
            j: self.j - rhs.j,
            k: self.k - rhs.k,
            l: self.l - rhs.l,
        }
    }
}

impl Mul<Matrix4> for f32 {
    type Output = Matrix4;
    #[inline]
    fn mul(self, rhs: Matrix4) -> Self::Output {
        Matrix4 {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
            l: self * rhs.l,
        }
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn mul(self, rhs: Vector4) -> Self::Output {
        rhs.x * self.i + rhs.y * self.j + rhs.z * self.k + rhs.w * self.l
    }
}

/// `a * b` applies `b` first, then `a`.
impl Mul<Matrix4> for Matrix4 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self {
            i: self * rhs.i,
            j: self * rhs.j,
            k: self * rhs.k,
            l: self * rhs.l,
        }
    }
}

impl Index<usize> for Matrix4 {
    type Output = Vector4;
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Matrix4!", index);
        &bytemuck::cast_ref::<Self, [Vector4; 4]>(self)[index]
    }
}

impl IndexMut<usize> for Matrix4 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        debug_assert!(index < 4, "Invalid index {} for Matrix4!", index);
        &mut bytemuck::cast_mut::<Self, [Vector4; 4]>(self)[index]
    }
}

impl From<[f32; 16]> for Matrix4 {
    #[inline]
    fn from(value: [f32; 16]) -> Self {
        Self::from_array(value)
    }
}

impl From<Matrix4> for [f32; 16] {
    #[inline]
    fn from(value: Matrix4) -> Self {
        value.to_array()
    }
}

impl Matrix4 {
    #[inline]
    pub fn try_from_le_bytes(bytes: &[u8]) -> MathResult<Self> {
        read_le_f32::<16>("Matrix4", bytes).map(Self::from_array)
    }

    #[inline]
    pub const fn new(i: Vector4, j: Vector4, k: Vector4, l: Vector4) -> Self {
        Self { i, j, k, l }
    }

    /// Builds a matrix from 16 column-major elements.
    #[inline]
    pub fn from_array(m: [f32; 16]) -> Self {
        bytemuck::cast(m)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self)
    }

    #[inline]
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(self)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Element at `col`, `row`, i.e. `m[col * 4 + row]`.
    #[inline]
    pub fn at(&self, col: usize, row: usize) -> f32 {
        self[col][row]
    }

    #[inline]
    pub const fn identity() -> Self {
        Self {
            i: Vector4::x(),
            j: Vector4::y(),
            k: Vector4::z(),
            l: Vector4::w(),
        }
    }

    #[inline]
    pub fn transpose(self) -> Self {
        Self {
            i: Vector4 {
                x: self.i.x,
                y: self.j.x,
                z: self.k.x,
                w: self.l.x,
            },
            j: Vector4 {
                x: self.i.y,
                y: self.j.y,
                z: self.k.y,
                w: self.l.y,
            },
            k: Vector4 {
                x: self.i.z,
                y: self.j.z,
                z: self.k.z,
                w: self.l.z,
            },
            l: Vector4 {
                x: self.i.w,
                y: self.j.w,
                z: self.k.w,
                w: self.l.w,
            },
        }
    }

    /// Cofactor expansion along the first column.
    #[inline]
    pub fn det(self) -> f32 {
        (0usize..4)
            .map(|row| cofactor_sign(0, row) * self[0][row] * det3(self.minor(0, row)))
            .sum()
    }

    /// Adjugate inverse. A matrix with a zero determinant has no inverse and
    /// yields the identity; callers that must detect this should test
    /// [`Matrix4::det`] first.
    #[inline]
    pub fn inverse(self) -> Self {
        let det = self.det();
        if det == 0.0 {
            return Self::identity();
        }
        det.recip() * self.adj()
    }

    #[inline]
    pub fn trace(self) -> f32 {
        self.i.x + self.j.y + self.k.z + self.l.w
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.i.is_valid() && self.j.is_valid() && self.k.is_valid() && self.l.is_valid()
    }

    #[inline]
    pub fn approx_equal(self, rhs: Self) -> bool {
        self.i.approx_equal(rhs.i)
            && self.j.approx_equal(rhs.j)
            && self.k.approx_equal(rhs.k)
            && self.l.approx_equal(rhs.l)
    }

    #[inline]
    fn adj(self) -> Self {
        let mut a = Matrix4::default();
        for col in 0..4 {
            for row in 0..4 {
                a[col][row] = cofactor_sign(col, row) * det3(self.minor(col, row));
            }
        }
        a.transpose()
    }

    #[inline]
    fn minor(self, col: usize, row: usize) -> [[f32; 3]; 3] {
        let mut m = [[0.0f32; 3]; 3];
        let mut k = 0;
        for i in 0..4 {
            if i != col {
                let mut l = 0;
                for j in 0..4 {
                    if j != row {
                        m[k][l] = self[i][j];
                        l += 1;
                    }
                }
                k += 1;
            }
        }
        m
    }
}

#[inline]
fn cofactor_sign(col: usize, row: usize) -> f32 {
    if (col + row) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

#[inline]
fn det3(m: [[f32; 3]; 3]) -> f32 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[1][0] * (m[0][1] * m[2][2] - m[0][2] * m[2][1])
        + m[2][0] * (m[0][1] * m[1][2] - m[0][2] * m[1][1])
}
