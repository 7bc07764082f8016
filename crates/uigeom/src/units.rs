//! Angle unit conversions and the number formatting shared by CSS text output.
//!
//! - Conversions are plain linear scalings between degrees, radians, gradians
//!   and turns.
//! - `round_to` / `format_number` reproduce how the DevTools front-end prints
//!   numbers (`Math.round` half-up rounding, shortest decimal, no `-0`), so
//!   strings such as `cubic-bezier(0.25, 0.1, 0.25, 1)` compare equal to the
//!   canonical keyword table.
//! - `min_or_nan` / `max_or_nan` follow `Math.min` / `Math.max`: a NaN operand
//!   wins, where `f64::min` / `f64::max` would drop it.

use std::f64::consts::PI;

#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

#[inline]
pub fn degrees_to_gradians(deg: f64) -> f64 {
    deg / 9.0 * 10.0
}

#[inline]
pub fn degrees_to_turns(deg: f64) -> f64 {
    deg / 360.0
}

#[inline]
pub fn radians_to_degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

#[inline]
pub fn radians_to_gradians(rad: f64) -> f64 {
    rad * 200.0 / PI
}

#[inline]
pub fn radians_to_turns(rad: f64) -> f64 {
    rad / (2.0 * PI)
}

#[inline]
pub fn gradians_to_radians(grad: f64) -> f64 {
    grad * PI / 200.0
}

#[inline]
pub fn turns_to_radians(turns: f64) -> f64 {
    turns * 2.0 * PI
}

/// Round to `digits` decimal places, halves toward +∞ (ECMAScript `Math.round`).
#[inline]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale + 0.5).floor() / scale
}

/// Smaller of two values; NaN if either is NaN.
#[inline]
pub fn min_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.min(b)
    }
}

/// Larger of two values; NaN if either is NaN.
#[inline]
pub fn max_or_nan(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        a.max(b)
    }
}

/// ECMAScript `Number::toString`: shortest round-trip digits, plain notation
/// for decimal exponents in (−7, 21], `1e-7` / `1e+21` style outside it,
/// `Infinity` / `NaN` spelled out, and negative zero printed as `0`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    // `{:e}` gives the shortest digits as `d.ddde<exp>`.
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    // value = 0.<digits> * 10^n
    let n = exp.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let sign = if n > 0 { '+' } else { '-' };
        if rest.is_empty() {
            format!("{lead}e{sign}{}", (n - 1).abs())
        } else {
            format!("{lead}.{rest}e{sign}{}", (n - 1).abs())
        }
    };
    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}
