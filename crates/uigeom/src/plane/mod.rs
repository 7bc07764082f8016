//! 2D points and CSS cubic-bezier timing curves.
//!
//! - `Point`: distance, projection onto a direction, scaling, `"x, y"` text.
//! - `CubicBezier`: keyword/function parsing, evaluation at parameter t, and
//!   canonical text that round-trips through the keyword table.

mod bezier;
mod point;

pub use bezier::{CubicBezier, KEYWORD_VALUES};
pub use point::Point;
