/// The market-clearing result for one hour.
///
/// The system marginal volume and price are the coordinates at which the
/// sell and purchase curves meet. An hour with no intersection, or with an
/// empty side, has no clearing point at all; absence is modelled with
/// `Option<ClearingPoint>` rather than sentinel values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearingPoint {
    /// System marginal volume, in MW.
    pub smv: f64,
    /// System marginal price, in €/MWh.
    pub smp: f64,
}

impl ClearingPoint {
    /// Convenience constructor.
    pub fn new(smv: f64, smp: f64) -> Self {
        Self { smv, smp }
    }
}
