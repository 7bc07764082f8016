//! Tolerance defaults (fixed constants).
//!
//! Policy
//! - Values match what the DevTools panels have always used, so angles and
//!   bounds computed here line up with what the UI shows. They are not
//!   configurable; callers that need other thresholds should use the `try_*`
//!   and `Option`-returning companions and apply their own checks.

/// Lengths at or below this are treated as the zero vector (normalize, angles).
pub const VECTOR_EPS: f64 = 1e-5;
/// Zero test for matrix cells in the gimbal-safe decoder (`cos β == 0` etc).
pub const GIMBAL_EPS: f64 = 1e-7;
/// `|m23|` at or above this is treated as gimbal lock by the clamped-asin decoder.
pub const ASIN_LOCK: f64 = 0.9999999;
