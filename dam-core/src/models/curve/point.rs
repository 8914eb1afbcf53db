/// A vertex of a cumulative-volume step curve.
///
/// Each point pairs a cumulative volume (MW) with the price (€/MWh) of the
/// marginal order at that tier. Points are the vertices of the polyline the
/// clearing engine intersects.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The cumulative volume coordinate.
    pub volume: f64,
    /// The price coordinate.
    pub price: f64,
}

impl Point {
    /// Convenience constructor.
    pub fn new(volume: f64, price: f64) -> Self {
        Self { volume, price }
    }
}
