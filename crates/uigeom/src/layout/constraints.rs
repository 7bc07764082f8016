use super::types::{Operand, Size};
use crate::error::GeometryError;

/// Minimum and preferred size of a widget, `minimum <= preferred` on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Constraints {
    minimum: Size,
    preferred: Size,
}

impl From<Constraints> for Operand<Constraints> {
    #[inline]
    fn from(c: Constraints) -> Self {
        Operand::Value(c)
    }
}

impl Constraints {
    /// `preferred` defaults to `minimum`. Fails if `minimum` exceeds `preferred`
    /// along either axis.
    pub fn new(minimum: Size, preferred: Option<Size>) -> Result<Self, GeometryError> {
        let preferred = preferred.unwrap_or(minimum);
        if minimum.width > preferred.width || minimum.height > preferred.height {
            return Err(GeometryError::MinimumExceedsPreferred { minimum, preferred });
        }
        Ok(Self { minimum, preferred })
    }

    /// Constraints whose preferred size equals the minimum.
    #[inline]
    pub fn from_minimum(minimum: Size) -> Self {
        Self {
            minimum,
            preferred: minimum,
        }
    }

    #[inline]
    pub fn minimum(&self) -> Size {
        self.minimum
    }

    #[inline]
    pub fn preferred(&self) -> Size {
        self.preferred
    }

    #[inline]
    pub fn is_equal(&self, other: Option<&Constraints>) -> bool {
        other.is_some_and(|c| {
            self.minimum.is_equal(Some(&c.minimum)) && self.preferred.is_equal(Some(&c.preferred))
        })
    }

    pub fn width_to_max(&self, value: impl Into<Operand<Constraints>>) -> Constraints {
        self.combine(value.into(), |s, v| s.width_to_max(v))
    }

    pub fn add_width(&self, value: impl Into<Operand<Constraints>>) -> Constraints {
        self.combine(value.into(), |s, v| s.add_width(v))
    }

    pub fn height_to_max(&self, value: impl Into<Operand<Constraints>>) -> Constraints {
        self.combine(value.into(), |s, v| s.height_to_max(v))
    }

    pub fn add_height(&self, value: impl Into<Operand<Constraints>>) -> Constraints {
        self.combine(value.into(), |s, v| s.add_height(v))
    }

    /// Apply `op` to minimum and preferred independently. Monotone ops on two
    /// valid constraints keep `minimum <= preferred`, so no re-check is needed.
    fn combine(
        &self,
        value: Operand<Constraints>,
        op: fn(&Size, Operand<Size>) -> Size,
    ) -> Constraints {
        let (min_arg, pref_arg) = match value {
            Operand::Scalar(v) => (Operand::Scalar(v), Operand::Scalar(v)),
            Operand::Value(c) => (Operand::Value(c.minimum), Operand::Value(c.preferred)),
        };
        let out = Constraints {
            minimum: op(&self.minimum, min_arg),
            preferred: op(&self.preferred, pref_arg),
        };
        debug_assert!(
            !(out.minimum.width > out.preferred.width || out.minimum.height > out.preferred.height),
            "combinator broke minimum <= preferred"
        );
        out
    }
}
