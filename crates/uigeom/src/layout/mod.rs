//! Layout values used by split panes and toolbars: `Size`, `Insets`, `Rect`,
//! and `Constraints` (minimum + preferred size).
//!
//! Equality helpers take `Option<&T>` so "compare against nothing" is `false`
//! rather than a panic. `Constraints` is the only type with a checked
//! invariant; see `Constraints::new`.

mod constraints;
mod types;

pub use constraints::Constraints;
pub use types::{Insets, Operand, Rect, Size};

#[cfg(test)]
mod tests;
