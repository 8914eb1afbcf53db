use dam_core::models::{ClearingPoint, StepCurve};

/// Price deviation of the marginal sell offer at a shifted clearing volume.
///
/// Probes the sell curve at `smv + delta` and reports how far the price of
/// the marginal offer at that tier sits from the clearing price. The probe
/// always looks *up* the curve: for either sign of `delta`, the selected
/// offer is the smallest-volume vertex whose volume is at least the shifted
/// volume. A positive result means the marginal price would rise.
///
/// Returns `None` when the shifted volume falls outside the closed volume
/// range observed on the sell curve; no order exists at that tier, so the
/// deviation is undefined. Each probe is a pure function of its arguments,
/// so multiple deltas against the same clearing are non-interacting.
pub fn sensitivity(sell: &StepCurve, clearing: &ClearingPoint, delta: f64) -> Option<f64> {
    let target = clearing.smv + delta;
    let (lo, hi) = sell.domain();
    if target < lo || target > hi {
        return None;
    }

    sell.points()
        .iter()
        .filter(|point| point.volume >= target)
        .min_by(|a, b| a.volume.total_cmp(&b.volume))
        .map(|point| point.price - clearing.smp)
}
