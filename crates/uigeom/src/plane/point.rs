use std::fmt;

use nalgebra::Vector2;

use crate::units::{format_number, round_to};

/// 2D point; every operation returns a new value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, p: Point) -> f64 {
        (Vector2::<f64>::from(p) - Vector2::<f64>::from(*self)).norm()
    }

    /// Orthogonal projection onto the line through the origin with direction
    /// `line`; `None` for the zero direction.
    pub fn try_project_on(&self, line: Point) -> Option<Point> {
        if line.x == 0.0 && line.y == 0.0 {
            return None;
        }
        let l = Vector2::<f64>::from(line);
        Some(line.scale(Vector2::<f64>::from(*self).dot(&l) / l.norm_squared()))
    }

    /// `try_project_on`, falling back to the origin for the zero direction.
    #[inline]
    pub fn project_on(&self, line: Point) -> Point {
        self.try_project_on(line).unwrap_or_default()
    }

    #[inline]
    pub fn scale(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

/// `"x, y"` with each coordinate rounded to two decimals.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}",
            format_number(round_to(self.x, 2)),
            format_number(round_to(self.y, 2))
        )
    }
}
