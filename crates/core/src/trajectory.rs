use std::slice;

use crate::Point;

/// An ordered sequence of points produced by stepping from an initial value.
///
/// A trajectory starts at `(x0, y0)` and ends at or just past the domain
/// endpoint. It may also be empty, which is what the permissive integrator
/// returns for a zero step.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Trajectory(Vec<Point>);

impl Trajectory {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty trajectory with room for `capacity` points.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, point: Point) {
        self.0.push(point);
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point> {
        self.0.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point> {
        self.0.last()
    }

    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.0.iter()
    }

    /// Returns the x-values of every point, in order.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.0.iter().map(|point| point.x).collect()
    }

    /// Returns `true` if every point is finite.
    ///
    /// Non-finite values produced by a derivative are carried through
    /// unmodified, so callers should check this before rendering.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(Point::is_finite)
    }
}

impl From<Vec<Point>> for Trajectory {
    fn from(points: Vec<Point>) -> Self {
        Self(points)
    }
}

impl FromIterator<Point> for Trajectory {
    fn from_iter<T: IntoIterator<Item = Point>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Trajectory {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Point;
    type IntoIter = slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
