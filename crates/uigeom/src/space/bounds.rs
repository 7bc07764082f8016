//! Screen-space bounds of projected point batches.

use super::ops::multiply_vector_by_matrix_and_normalize;
use super::types::{CssMatrix, Vector};
use crate::units::{max_or_nan, min_or_nan};

/// 2D axis-aligned bounds; `Default` is the empty box (+∞, −∞, +∞, −∞).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds2 {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for Bounds2 {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }
}

impl Bounds2 {
    #[inline]
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// True until a point has been included.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Grow to cover `(v.x, v.y)`; `z` is ignored. A NaN coordinate turns the
    /// matching pair of edges into NaN for good.
    #[inline]
    pub fn include(&mut self, v: Vector) {
        self.min_x = min_or_nan(self.min_x, v.x);
        self.max_x = max_or_nan(self.max_x, v.x);
        self.min_y = min_or_nan(self.min_y, v.y);
        self.max_y = max_or_nan(self.max_y, v.y);
    }
}

/// Project a flat `[x0, y0, z0, x1, y1, z1, ..]` batch through `matrix` and
/// accumulate the x/y bounds, starting from `aggregate` when given.
///
/// A length that is not a multiple of 3 is logged and the trailing values are
/// skipped. Points that project to NaN (w == 0) make the bounds NaN.
pub fn bounds_for_transformed_points(
    matrix: &CssMatrix,
    points: &[f64],
    aggregate: Option<Bounds2>,
) -> Bounds2 {
    let mut bounds = aggregate.unwrap_or_default();
    if points.len() % 3 != 0 {
        tracing::warn!(len = points.len(), "invalid size of points array");
    }
    for p in points.chunks_exact(3) {
        let v = multiply_vector_by_matrix_and_normalize(Vector::new(p[0], p[1], p[2]), matrix);
        bounds.include(v);
    }
    bounds
}
