//! Free vector functions: products, differences, projective transform, angles.

use nalgebra::{RowVector4, Vector3};

use super::types::{CssMatrix, Vector};
use crate::cfg::VECTOR_EPS;
use crate::units::radians_to_degrees;

#[inline]
pub fn scalar_product(u: Vector, v: Vector) -> f64 {
    Vector3::<f64>::from(u).dot(&Vector3::<f64>::from(v))
}

/// Right-hand rule: `(uy·vz − uz·vy, uz·vx − ux·vz, ux·vy − uy·vx)`.
#[inline]
pub fn cross_product(u: Vector, v: Vector) -> Vector {
    Vector3::<f64>::from(u).cross(&Vector3::<f64>::from(v)).into()
}

#[inline]
pub fn subtract(u: Vector, v: Vector) -> Vector {
    (Vector3::<f64>::from(u) - Vector3::<f64>::from(v)).into()
}

/// Transform the point `(x, y, z, 1)` by `m` and divide by the resulting w,
/// `t = x·m14 + y·m24 + z·m34 + m44`.
///
/// No guard on `t`: a zero w yields infinite or NaN components, and
/// `bounds_for_transformed_points` carries them into its result.
pub fn multiply_vector_by_matrix_and_normalize(v: Vector, m: &CssMatrix) -> Vector {
    let h = RowVector4::new(v.x, v.y, v.z, 1.0) * m.as_matrix4();
    let t = h[3];
    Vector::new(h[0] / t, h[1] / t, h[2] / t)
}

/// Angle between `u` and `v` in degrees; `None` when either vector is shorter
/// than `VECTOR_EPS` or rounding pushes the cosine outside [-1, 1].
pub fn angle_between(u: Vector, v: Vector) -> Option<f64> {
    let u_length = u.length();
    let v_length = v.length();
    if u_length <= VECTOR_EPS || v_length <= VECTOR_EPS {
        return None;
    }
    let cos = scalar_product(u, v) / u_length / v_length;
    if cos.abs() > 1.0 {
        return None;
    }
    Some(radians_to_degrees(cos.acos()))
}

/// `angle_between` with 0 for the degenerate cases.
#[inline]
pub fn calculate_angle(u: Vector, v: Vector) -> f64 {
    angle_between(u, v).unwrap_or(0.0)
}
