//! Flat re-export surface.
//!
//! Mirrors the names the DevTools front-end imports from its geometry module,
//! so call sites can `use uigeom::api::*` without knowing the module split.

pub use crate::cfg::VECTOR_EPS;
pub use crate::euler::{EulerAngles, RotationDecoder};
pub use crate::layout::{Constraints, Insets, Operand, Rect, Size};
pub use crate::plane::{CubicBezier, Point, KEYWORD_VALUES};
pub use crate::space::{
    angle_between, bounds_for_transformed_points, calculate_angle, cross_product,
    multiply_vector_by_matrix_and_normalize, scalar_product, subtract, Bounds2, CssMatrix, Vector,
};
pub use crate::units::{
    degrees_to_gradians, degrees_to_radians, degrees_to_turns, gradians_to_radians,
    radians_to_degrees, radians_to_gradians, radians_to_turns, turns_to_radians,
};
pub use crate::GeometryError;
