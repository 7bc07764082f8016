use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::point::Point;

/// CSS easing keywords and their canonical `cubic-bezier()` text, in lookup order.
pub const KEYWORD_VALUES: [(&str, &str); 5] = [
    ("linear", "cubic-bezier(0, 0, 1, 1)"),
    ("ease", "cubic-bezier(0.25, 0.1, 0.25, 1)"),
    ("ease-in", "cubic-bezier(0.42, 0, 1, 1)"),
    ("ease-in-out", "cubic-bezier(0.42, 0, 0.58, 1)"),
    ("ease-out", "cubic-bezier(0, 0, 0.58, 1)"),
];

static FUNCTION_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^cubic-bezier\(([^,]+),([^,]+),([^,]+),([^,]+)\)$")
        .expect("cubic-bezier syntax pattern")
});

// Longer keywords come first so `ease-in-out` is not cut short at `ease`.
static EMBEDDED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"((cubic-bezier\([^)]+\))|\b(linear|ease-in-out|ease-in|ease-out|ease)\b)")
        .expect("embedded easing pattern")
});

/// CSS timing curve with fixed endpoints (0, 0) and (1, 1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub control_points: [Point; 2],
}

impl CubicBezier {
    #[inline]
    pub fn new(point1: Point, point2: Point) -> Self {
        Self {
            control_points: [point1, point2],
        }
    }

    /// Parse a keyword or `cubic-bezier(x1, y1, x2, y2)`.
    ///
    /// Case and whitespace are ignored. Anything else, including arguments that
    /// are not finite numbers, yields `None`.
    pub fn parse(text: &str) -> Option<CubicBezier> {
        let value: String = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if let Some((_, canonical)) = KEYWORD_VALUES.iter().find(|(k, _)| *k == value) {
            return Self::parse(canonical);
        }
        let caps = FUNCTION_SYNTAX.captures(&value)?;
        let mut coords = [0.0; 4];
        for (i, slot) in coords.iter_mut().enumerate() {
            *slot = caps[i + 1].parse::<f64>().ok().filter(|v| v.is_finite())?;
        }
        Some(Self::new(
            Point::new(coords[0], coords[1]),
            Point::new(coords[2], coords[3]),
        ))
    }

    /// Point on the curve at parameter `t` (not at progress `x = t`).
    pub fn evaluate_at(&self, t: f64) -> Point {
        let evaluate = |v1: f64, v2: f64| {
            3.0 * (1.0 - t) * (1.0 - t) * t * v1 + 3.0 * (1.0 - t) * t * t * v2 + t.powi(3)
        };
        let [p1, p2] = self.control_points;
        Point::new(evaluate(p1.x, p2.x), evaluate(p1.y, p2.y))
    }

    /// Canonical CSS text; a keyword when the curve matches one exactly.
    pub fn as_css_text(&self) -> String {
        let [p1, p2] = self.control_points;
        let raw = format!("cubic-bezier({p1}, {p2})");
        KEYWORD_VALUES
            .iter()
            .find(|(_, canonical)| *canonical == raw)
            .map(|(keyword, _)| keyword.to_string())
            .unwrap_or(raw)
    }

    /// Pattern matching `cubic-bezier(...)` calls and bare easing keywords
    /// inside larger CSS text.
    #[inline]
    pub fn pattern() -> &'static Regex {
        &EMBEDDED
    }

    /// Every easing function in `text` that parses, with its byte range.
    pub fn scan(text: &str) -> impl Iterator<Item = (Range<usize>, CubicBezier)> + '_ {
        EMBEDDED
            .find_iter(text)
            .filter_map(|m| Self::parse(m.as_str()).map(|curve| (m.range(), curve)))
    }
}
