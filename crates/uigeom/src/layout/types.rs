//! Size, insets and rectangles.

use std::fmt;

use crate::units::{max_or_nan, min_or_nan};

/// Right-hand side of the `*_to_max` / `add_*` combinators: a plain number or
/// a value of the same type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand<T> {
    Scalar(f64),
    Value(T),
}

impl<T> From<f64> for Operand<T> {
    #[inline]
    fn from(v: f64) -> Self {
        Operand::Scalar(v)
    }
}

impl From<Size> for Operand<Size> {
    #[inline]
    fn from(s: Size) -> Self {
        Operand::Value(s)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise minimum with `size`; `self` when no size is given.
    pub fn clip_to(&self, size: Option<Size>) -> Size {
        match size {
            Some(s) => Size::new(
                min_or_nan(self.width, s.width),
                min_or_nan(self.height, s.height),
            ),
            None => *self,
        }
    }

    #[inline]
    pub fn scale(&self, scale: f64) -> Size {
        Size::new(self.width * scale, self.height * scale)
    }

    /// Field-wise equality; `false` for `None`.
    #[inline]
    pub fn is_equal(&self, size: Option<&Size>) -> bool {
        size.is_some_and(|s| self == s)
    }

    pub fn width_to_max(&self, value: impl Into<Operand<Size>>) -> Size {
        Size::new(max_or_nan(self.width, width_of(value.into())), self.height)
    }

    pub fn add_width(&self, value: impl Into<Operand<Size>>) -> Size {
        Size::new(self.width + width_of(value.into()), self.height)
    }

    pub fn height_to_max(&self, value: impl Into<Operand<Size>>) -> Size {
        Size::new(self.width, max_or_nan(self.height, height_of(value.into())))
    }

    pub fn add_height(&self, value: impl Into<Operand<Size>>) -> Size {
        Size::new(self.width, self.height + height_of(value.into()))
    }
}

#[inline]
fn width_of(value: Operand<Size>) -> f64 {
    match value {
        Operand::Scalar(v) => v,
        Operand::Value(s) => s.width,
    }
}

#[inline]
fn height_of(value: Operand<Size>) -> f64 {
    match value {
        Operand::Scalar(v) => v,
        Operand::Value(s) => s.height,
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    #[inline]
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn is_equal(&self, insets: Option<&Insets>) -> bool {
        insets.is_some_and(|i| self == i)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_equal(&self, rect: Option<&Rect>) -> bool {
        rect.is_some_and(|r| self == r)
    }

    /// Scales position and extent alike.
    pub fn scale(&self, scale: f64) -> Rect {
        Rect::new(
            self.left * scale,
            self.top * scale,
            self.width * scale,
            self.height * scale,
        )
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Same rect expressed in coordinates whose origin is `origin`'s top-left.
    pub fn relative_to(&self, origin: &Rect) -> Rect {
        Rect::new(
            self.left - origin.left,
            self.top - origin.top,
            self.width,
            self.height,
        )
    }

    /// Inverse of `relative_to`.
    pub fn rebase_to(&self, origin: &Rect) -> Rect {
        Rect::new(
            self.left + origin.left,
            self.top + origin.top,
            self.width,
            self.height,
        )
    }
}
