//! Geometry helpers for DevTools-style UI panels.
//!
//! Modules
//! - `space`: 3D vectors, DOM-layout 4x4 matrices, projected bounds.
//! - `plane`: 2D points and CSS cubic-bezier timing curves.
//! - `euler`: rotation matrix → Euler angles, with selectable conventions.
//! - `layout`: sizes, insets, rects and min/preferred constraints.
//! - `units`: degree/radian/gradian/turn conversions.
//!
//! Everything here is a pure function over `Copy` values; the single exception
//! is `Vector::normalize`, which updates in place.

pub mod api;
pub mod cfg;
pub mod error;
pub mod euler;
pub mod layout;
pub mod plane;
pub mod space;
pub mod units;

pub use error::GeometryError;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::euler::{EulerAngles, RotationDecoder};
    pub use crate::layout::{Constraints, Insets, Rect, Size};
    pub use crate::plane::{CubicBezier, Point};
    pub use crate::space::{Bounds2, CssMatrix, Vector};
    pub use crate::GeometryError;
}
