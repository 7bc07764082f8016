//! The three rotation-matrix decompositions.
//!
//! Each decoder reads a pure rotation given as a `CssMatrix`. Angles are
//! returned in degrees. The matching `compose_*` functions rebuild the matrix
//! from the angles, so every convention can be checked by round trip.
//!
//! `CssMatrix` stores the transpose of the column-vector rotation `R`. The
//! gimbal-safe and clamped-asin decoders invert first, which for a rotation
//! yields `R` itself; their cell formulas are written against `R`.

use std::f64::consts::{FRAC_PI_2, PI};

use super::EulerAngles;
use crate::cfg::{ASIN_LOCK, GIMBAL_EPS};
use crate::error::GeometryError;
use crate::space::CssMatrix;
use crate::units::{radians_to_degrees, round_to};

/// Z-Y-X extraction straight from the matrix cells; no gimbal-lock branch.
pub(super) fn simple(m: &CssMatrix) -> EulerAngles {
    let beta = m.m23().atan2(m.m33());
    let gamma = (-m.m13()).atan2((m.m11() * m.m11() + m.m12() * m.m12()).sqrt());
    let alpha = m.m12().atan2(m.m11());
    EulerAngles::new(
        radians_to_degrees(gamma),
        -radians_to_degrees(beta),
        radians_to_degrees(alpha),
    )
}

pub(super) fn compose_simple(angles: &EulerAngles) -> CssMatrix {
    CssMatrix::rotate_z(angles.gamma)
        .multiply(&CssMatrix::rotate_y(angles.alpha))
        .multiply(&CssMatrix::rotate_x(-angles.beta))
}

/// Device-orientation style Z-X'-Y'' decomposition of the inverse matrix.
///
/// Case analysis on `m33` and `m31` of the inverse:
/// - `m33 == 0 && m31 == 0`: `cos β == 0`, gimbal lock; γ is pinned to 0.
/// - `m33 == 0` otherwise: `cos γ == 0`; γ = −π/2 and the sign of `m31` picks
///   the β branch.
/// - `m33 > 0`: β ∈ (−π/2, π/2); `m33 < 0`: β ∈ [−π, −π/2) ∪ (π/2, π).
///
/// α is moved into [0, 2π). Outputs are rounded to 4 decimals of a degree.
pub(super) fn gimbal_safe(m: &CssMatrix) -> Result<EulerAngles, GeometryError> {
    let a = m.inverse().ok_or(GeometryError::SingularMatrix)?.to_row_major();
    let mut alpha;
    let beta;
    let gamma;
    if a[10].abs() < GIMBAL_EPS {
        if a[8].abs() < GIMBAL_EPS {
            alpha = a[4].atan2(a[0]);
            beta = if a[9] > 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 };
            gamma = 0.0;
        } else if a[8] > 0.0 {
            alpha = (-a[1]).atan2(a[5]);
            beta = a[9].asin();
            gamma = -FRAC_PI_2;
        } else {
            alpha = a[1].atan2(-a[5]);
            beta = obtuse_beta(a[9]);
            gamma = -FRAC_PI_2;
        }
    } else if a[10] > 0.0 {
        alpha = (-a[1]).atan2(a[5]);
        beta = a[9].asin();
        gamma = (-a[8]).atan2(a[10]);
    } else {
        alpha = a[1].atan2(-a[5]);
        beta = obtuse_beta(a[9]);
        gamma = a[8].atan2(-a[10]);
    }

    if alpha < -GIMBAL_EPS {
        alpha += 2.0 * PI;
    }

    Ok(EulerAngles::new(
        round_to(radians_to_degrees(alpha), 4),
        round_to(radians_to_degrees(beta), 4),
        round_to(radians_to_degrees(gamma), 4),
    ))
}

/// β for `cos β < 0`: reflect `asin` into [−π, −π/2) ∪ (π/2, π).
#[inline]
fn obtuse_beta(sin_beta: f64) -> f64 {
    let beta = -sin_beta.asin();
    if beta >= 0.0 {
        beta - PI
    } else {
        beta + PI
    }
}

pub(super) fn compose_gimbal_safe(angles: &EulerAngles) -> CssMatrix {
    CssMatrix::rotate_z(angles.alpha)
        .multiply(&CssMatrix::rotate_x(angles.beta))
        .multiply(&CssMatrix::rotate_y(angles.gamma))
}

/// Y-X-Z decomposition of the inverse matrix with `asin` input clamped to
/// [−1, 1]. At `|m23| >= ASIN_LOCK` the z angle is forced to 0.
pub(super) fn clamped_asin(m: &CssMatrix) -> Result<EulerAngles, GeometryError> {
    let r = m.inverse().ok_or(GeometryError::SingularMatrix)?;
    let x = (-r.m23().clamp(-1.0, 1.0)).asin();
    let (y, z) = if r.m23().abs() < ASIN_LOCK {
        (r.m13().atan2(r.m33()), r.m21().atan2(r.m22()))
    } else {
        ((-r.m31()).atan2(r.m11()), 0.0)
    };
    tracing::debug!(x, y, z, "clamped-asin decode");
    Ok(EulerAngles::new(
        radians_to_degrees(z),
        radians_to_degrees(x),
        radians_to_degrees(y),
    ))
}

pub(super) fn compose_clamped_asin(angles: &EulerAngles) -> CssMatrix {
    CssMatrix::rotate_y(angles.gamma)
        .multiply(&CssMatrix::rotate_x(angles.beta))
        .multiply(&CssMatrix::rotate_z(angles.alpha))
}
