mod point;
pub use point::Point;

use super::{HourId, Order, Side};

/// One side of an hour's order book as a cumulative-volume polyline.
///
/// A step curve is an ordered sequence of (volume, price) vertices:
/// - Sell curves are sorted by ascending price (cheapest offers clear first);
/// - Purchase curves are sorted by descending price (highest bids clear first).
///
/// Volumes are taken from the orders as-is; the input already carries the
/// cumulative quantity at each tier, so construction performs no running sum.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "StepCurveDto", into = "StepCurveDto")
)]
pub struct StepCurve(Vec<Point>);

impl StepCurve {
    /// Builds the curve for one (hour, side) bucket of an order snapshot.
    ///
    /// Filters the orders to the bucket and sorts them by price in the
    /// side's clearing direction. The sort is stable, so tiers with equal
    /// prices keep their input order.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::Empty`] when no orders match the bucket. Callers
    /// must treat this as "no clearing possible" for the hour, not as a
    /// run-level failure.
    pub fn from_orders<'a, I>(orders: I, hour: &HourId, side: Side) -> Result<Self, CurveError>
    where
        I: IntoIterator<Item = &'a Order>,
    {
        let mut points: Vec<Point> = orders
            .into_iter()
            .filter(|order| &order.hour == hour && order.side == side)
            .map(|order| Point::new(order.volume, order.price))
            .collect();

        match side {
            Side::Sell => points.sort_by(|a, b| a.price.total_cmp(&b.price)),
            Side::Purchase => points.sort_by(|a, b| b.price.total_cmp(&a.price)),
        }

        Self::new(points)
    }

    /// Creates a curve from pre-ordered vertices, validating the coordinates.
    pub fn new(points: Vec<Point>) -> Result<Self, CurveError> {
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        for point in &points {
            if point.volume.is_nan() || point.price.is_nan() {
                return Err(CurveError::NaN);
            }
        }
        Ok(Self(points))
    }

    /// The vertices, in clearing order.
    pub fn points(&self) -> &[Point] {
        &self.0
    }

    /// The observed volume range `(min, max)` over all vertices.
    pub fn domain(&self) -> (f64, f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for point in &self.0 {
            lo = lo.min(point.volume);
            hi = hi.max(point.volume);
        }
        (lo, hi)
    }

    /// Consecutive vertex pairs, for pairwise segment intersection.
    ///
    /// A single-vertex curve yields one zero-length segment, so a degenerate
    /// curve still participates in intersection tests: it clears only if its
    /// point lies exactly on the other curve.
    pub fn segments(&self) -> Vec<(Point, Point)> {
        match self.0.as_slice() {
            [only] => vec![(*only, *only)],
            points => points.windows(2).map(|pair| (pair[0], pair[1])).collect(),
        }
    }
}

/// DTO to ensure that we always validate when deserializing from an untrusted
/// source.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
#[derive(Debug)]
pub struct StepCurveDto(pub Vec<Point>);

impl From<StepCurve> for StepCurveDto {
    fn from(value: StepCurve) -> Self {
        Self(value.0)
    }
}

impl TryFrom<StepCurveDto> for StepCurve {
    type Error = CurveError;

    fn try_from(value: StepCurveDto) -> Result<Self, Self::Error> {
        Self::new(value.0)
    }
}

/// Errors that can occur when constructing a step curve.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// No orders matched the requested (hour, side) bucket.
    #[error("no orders for the requested hour and side")]
    Empty,
    /// A vertex coordinate is NaN.
    #[error("NaN value encountered")]
    NaN,
}
