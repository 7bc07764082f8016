//! Euler angles recovered from rotation matrices.
//!
//! Purpose
//! - Turn a `CssMatrix` rotation into three angles for display and for
//!   re-emitting as a CSS transform.
//!
//! Conventions
//! - Three decoders exist because callers need different axis orders; pick one
//!   with `RotationDecoder`. None is "the" answer: angle triples from different
//!   decoders are not comparable, only the rotation they rebuild is.
//! - `RotationDecoder::compose` is the exact inverse of `decode` (up to gimbal
//!   lock and rounding) and documents each axis order in code.
//!
//! Code cross-refs: `space::CssMatrix`, `units::radians_to_degrees`.

mod decode;

use crate::error::GeometryError;
use crate::space::CssMatrix;
use crate::units::format_number;

/// Rotation angles in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EulerAngles {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

/// Selects the axis order used to decompose a rotation matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RotationDecoder {
    /// Plain `atan2` extraction, rebuilt as `rotateZ(γ) rotateY(α) rotateX(−β)`.
    /// Undefined at gimbal lock.
    Simple,
    /// Device-orientation Z-X'-Y'' order, rebuilt as `rotateZ(α) rotateX(β) rotateY(γ)`.
    /// Every lock case is handled explicitly; α ∈ [0, 360), values rounded to 1e-4°.
    #[default]
    GimbalSafe,
    /// Y-X-Z order, rebuilt as `rotateY(γ) rotateX(β) rotateZ(α)`; α is 0 at lock.
    ClampedAsin,
}

impl RotationDecoder {
    pub const ALL: [RotationDecoder; 3] = [
        RotationDecoder::Simple,
        RotationDecoder::GimbalSafe,
        RotationDecoder::ClampedAsin,
    ];

    /// Decompose `m`. Errors only when a decoder that inverts gets a singular matrix.
    pub fn decode(&self, m: &CssMatrix) -> Result<EulerAngles, GeometryError> {
        match self {
            RotationDecoder::Simple => Ok(decode::simple(m)),
            RotationDecoder::GimbalSafe => decode::gimbal_safe(m),
            RotationDecoder::ClampedAsin => decode::clamped_asin(m),
        }
    }

    /// Rebuild the rotation that `decode` would map to `angles`.
    pub fn compose(&self, angles: &EulerAngles) -> CssMatrix {
        match self {
            RotationDecoder::Simple => decode::compose_simple(angles),
            RotationDecoder::GimbalSafe => decode::compose_gimbal_safe(angles),
            RotationDecoder::ClampedAsin => decode::compose_clamped_asin(angles),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RotationDecoder::Simple => "simple",
            RotationDecoder::GimbalSafe => "gimbal-safe",
            RotationDecoder::ClampedAsin => "clamped-asin",
        }
    }
}

impl EulerAngles {
    #[inline]
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    #[inline]
    pub fn from_rotation_matrix(
        m: &CssMatrix,
        decoder: RotationDecoder,
    ) -> Result<Self, GeometryError> {
        decoder.decode(m)
    }

    /// `rotateY(α) rotateX(−β) rotateZ(γ)`.
    ///
    /// The angles use right-handed device-orientation axes while CSS transforms
    /// are left-handed: α maps to Y, γ to Z, and X keeps its direction but turns
    /// the other way, hence the negated β.
    pub fn to_css_rotation_string(&self) -> String {
        format!(
            "rotateY({}deg) rotateX({}deg) rotateZ({}deg)",
            format_number(self.alpha),
            format_number(-self.beta),
            format_number(self.gamma)
        )
    }
}
