//! 3D vectors, DOM-style 4x4 matrices, and the vector helpers built on them.
//!
//! Conventions
//! - `CssMatrix` follows the DOM `CSSMatrix` layout (row vectors, `m41..m43`
//!   translation); see its docs.
//! - Degenerate inputs never panic: zero-length vectors are detected against
//!   `cfg::VECTOR_EPS` and reported as `None` (or the documented fallback).
//!
//! Code cross-refs: `euler::RotationDecoder` consumes `CssMatrix`.

mod bounds;
mod ops;
mod types;

pub use bounds::{bounds_for_transformed_points, Bounds2};
pub use ops::{
    angle_between, calculate_angle, cross_product, multiply_vector_by_matrix_and_normalize,
    scalar_product, subtract,
};
pub use types::{CssMatrix, Vector};
