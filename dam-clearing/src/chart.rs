use crate::clear;
use dam_core::models::{ClearingPoint, HourId, Order, ReportConfig, Side, StepCurve};

/// Depth-chart data for one hour: both curves and the clearing point.
///
/// This is the handoff to an external chart renderer. The renderer owns all
/// presentation concerns (axes, coloring, labeling); this struct carries only
/// the data it needs.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DepthChart {
    /// The product label, e.g. `H12`.
    pub product: String,
    /// The sell curve, ascending by price.
    pub sell: StepCurve,
    /// The purchase curve, descending by price.
    pub purchase: StepCurve,
    /// The clearing point, when the curves intersect.
    pub clearing: Option<ClearingPoint>,
}

/// Errors that can occur when assembling depth-chart data.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ChartError {
    /// The requested hour has no orders on the named side.
    #[error("hour {0} has no {1:?} orders")]
    EmptySide(HourId, Side),
}

/// Assembles the depth-chart data for one hour of an order snapshot.
///
/// Unlike the report aggregator, which degrades a one-sided hour to missing
/// cells, a depth chart cannot be drawn without both curves, so an empty side
/// is an error here.
pub fn depth_chart(
    orders: &[Order],
    hour: &HourId,
    config: &ReportConfig,
) -> Result<DepthChart, ChartError> {
    let sell = StepCurve::from_orders(orders, hour, Side::Sell)
        .map_err(|_| ChartError::EmptySide(hour.clone(), Side::Sell))?;
    let purchase = StepCurve::from_orders(orders, hour, Side::Purchase)
        .map_err(|_| ChartError::EmptySide(hour.clone(), Side::Purchase))?;

    let clearing = clear(&sell, &purchase, &config.precision);

    Ok(DepthChart {
        product: hour.label(),
        sell,
        purchase,
        clearing,
    })
}
