//! 3D value types: `Vector` and the DOM-style `CssMatrix`.

use std::str::FromStr;

use nalgebra::{Matrix4, Vector3};

use crate::cfg::VECTOR_EPS;
use crate::error::GeometryError;
use crate::units::degrees_to_radians;

/// 3D vector.
///
/// All other geometry values are returned by value; `normalize` is the one
/// operation in the crate that mutates its receiver. Prefer `normalized` /
/// `try_normalized` unless the in-place update is what you want.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Scale to unit length in place. Leaves the vector untouched (not zeroed)
    /// when `length() <= VECTOR_EPS`.
    pub fn normalize(&mut self) {
        if let Some(unit) = self.try_normalized() {
            *self = unit;
        }
    }

    /// Unit-length copy, or `self` unchanged when the length is below `VECTOR_EPS`.
    #[inline]
    pub fn normalized(self) -> Self {
        self.try_normalized().unwrap_or(self)
    }

    /// Unit-length copy; `None` when the length is below `VECTOR_EPS`.
    pub fn try_normalized(self) -> Option<Self> {
        let length = self.length();
        if length <= VECTOR_EPS {
            return None;
        }
        Some(Self::new(self.x / length, self.y / length, self.z / length))
    }
}

impl From<Vector3<f64>> for Vector {
    #[inline]
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector> for Vector3<f64> {
    #[inline]
    fn from(v: Vector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// 4x4 homogeneous transform laid out like a DOM `CSSMatrix`.
///
/// Convention
/// - Cell `mRC` is stored at `(R-1, C-1)`; points are row vectors, so
///   `x' = x·m11 + y·m21 + z·m31 + m41` (translation lives in row 4).
/// - `matrix3d(...)` text lists the cells in the same order: m11, m12, …, m44.
/// - `a.multiply(&b)` follows DOMMatrix: the product applies `b` first, then `a`,
///   matching CSS `transform: a b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssMatrix(Matrix4<f64>);

macro_rules! cell_accessors {
    ($($name:ident => ($r:expr, $c:expr)),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&self) -> f64 {
                self.0[($r, $c)]
            }
        )*
    };
}

impl CssMatrix {
    #[inline]
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Build from rows `[[m11, m12, m13, m14], [m21, ..], ..]`.
    pub fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        let cells: Vec<f64> = rows.iter().flatten().copied().collect();
        Self(Matrix4::from_row_slice(&cells))
    }

    /// 2D affine form `matrix(a, b, c, d, e, f)`.
    pub fn new_2d(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self::from_rows([
            [a, b, 0.0, 0.0],
            [c, d, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [e, f, 0.0, 1.0],
        ])
    }

    /// CSS `rotateX(<deg>deg)`.
    pub fn rotate_x(deg: f64) -> Self {
        let (s, c) = degrees_to_radians(deg).sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, s, 0.0],
            [0.0, -s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// CSS `rotateY(<deg>deg)`.
    pub fn rotate_y(deg: f64) -> Self {
        let (s, c) = degrees_to_radians(deg).sin_cos();
        Self::from_rows([
            [c, 0.0, -s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// CSS `rotateZ(<deg>deg)`.
    pub fn rotate_z(deg: f64) -> Self {
        let (s, c) = degrees_to_radians(deg).sin_cos();
        Self::from_rows([
            [c, s, 0.0, 0.0],
            [-s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    cell_accessors! {
        m11 => (0, 0), m12 => (0, 1), m13 => (0, 2), m14 => (0, 3),
        m21 => (1, 0), m22 => (1, 1), m23 => (1, 2), m24 => (1, 3),
        m31 => (2, 0), m32 => (2, 1), m33 => (2, 2), m34 => (2, 3),
        m41 => (3, 0), m42 => (3, 1), m43 => (3, 2), m44 => (3, 3),
    }

    /// Cells in `matrix3d` order (m11, m12, …, m44).
    pub fn to_row_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (k, cell) in out.iter_mut().enumerate() {
            *cell = self.0[(k / 4, k % 4)];
        }
        out
    }

    /// Inverse transform; `None` if the matrix is singular.
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.0.try_inverse().map(Self)
    }

    /// DOMMatrix `multiply`: the result applies `other` first, then `self`.
    #[inline]
    pub fn multiply(&self, other: &CssMatrix) -> Self {
        Self(other.0 * self.0)
    }

    /// Max-abs cell difference is at most `tol`.
    pub fn approx_eq(&self, other: &CssMatrix, tol: f64) -> bool {
        (self.0 - other.0).amax() <= tol
    }

    #[inline]
    pub fn as_matrix4(&self) -> &Matrix4<f64> {
        &self.0
    }
}

impl Default for CssMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix4<f64>> for CssMatrix {
    #[inline]
    fn from(m: Matrix4<f64>) -> Self {
        Self(m)
    }
}

/// Parses `none`, `matrix(a, b, c, d, e, f)` and `matrix3d(<16 numbers>)`.
impl FromStr for CssMatrix {
    type Err = GeometryError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        if value == "none" {
            return Ok(Self::identity());
        }
        let invalid = || GeometryError::InvalidMatrix(text.to_string());
        let (name, rest) = value.split_once('(').ok_or_else(invalid)?;
        let args = rest.strip_suffix(')').ok_or_else(invalid)?;
        let numbers = args
            .split(',')
            .map(|part| part.parse::<f64>().ok().filter(|v| v.is_finite()))
            .collect::<Option<Vec<f64>>>()
            .ok_or_else(invalid)?;
        match (name, numbers.as_slice()) {
            ("matrix", &[a, b, c, d, e, f]) => Ok(Self::new_2d(a, b, c, d, e, f)),
            ("matrix3d", cells) if cells.len() == 16 => {
                Ok(Self(Matrix4::from_row_slice(cells)))
            }
            _ => Err(invalid()),
        }
    }
}
