//! Vector and 4x4 matrix arithmetic for real-time rendering.
//!
//! All types are plain `#[repr(C)]` values, `Copy` and [`bytemuck::Pod`], so
//! they can be handed to a GPU buffer as is. Matrices are stored column-major:
//! element `m[col * 4 + row]`.
//!
//! The crate uses a single right-handed convention: [`Matrix4::rotate`] turns
//! counter-clockwise for positive angles when looking down the axis toward
//! the origin, [`Matrix4::perspective`] and [`Matrix4::ortho`] look down `-z`,
//! and [`Matrix4::look_at`] produces a view matrix that agrees with both.

#[cfg(feature = "debug-print")]
pub mod debug;
pub mod error;
pub mod scalar;
pub mod transform;
pub mod types;

#[cfg(feature = "debug-print")]
pub use debug::DebugPrint;
pub use error::{MathError, MathResult};
pub use transform::Axis;
pub use types::{Matrix4, Vector2, Vector3, Vector4, EPS};
