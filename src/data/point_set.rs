//! Objective-space points.

/// A single solution's two objective values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// First objective.
    pub f1: f64,
    /// Second objective.
    pub f2: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(f1: f64, f2: f64) -> Self {
        Self { f1, f2 }
    }

    /// Whether the point lies inside the closed box `x_range` x `y_range`.
    pub fn is_within(&self, x_range: (f64, f64), y_range: (f64, f64)) -> bool {
        (x_range.0..=x_range.1).contains(&self.f1) && (y_range.0..=y_range.1).contains(&self.f2)
    }
}

impl From<(f64, f64)> for Point {
    fn from((f1, f2): (f64, f64)) -> Self {
        Self::new(f1, f2)
    }
}

/// Points in the order they were read from the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Create an empty point set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, keeping insertion order.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over points in source order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Points as a slice.
    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    /// Smallest box containing every point, `None` when empty.
    pub fn extent(&self) -> Option<((f64, f64), (f64, f64))> {
        if self.points.is_empty() {
            return None;
        }

        let init = (
            (f64::INFINITY, f64::NEG_INFINITY),
            (f64::INFINITY, f64::NEG_INFINITY),
        );
        Some(self.points.iter().fold(init, |((x0, x1), (y0, y1)), p| {
            ((x0.min(p.f1), x1.max(p.f1)), (y0.min(p.f2), y1.max(p.f2)))
        }))
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
