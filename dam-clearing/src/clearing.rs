use crate::geometry::{EPSILON, SegmentIntersection, intersect};
use dam_core::models::{ClearingPoint, Point, Precision, StepCurve};

/// Computes the market-clearing point of a sell and a purchase curve.
///
/// Both curves are treated as polylines in (volume, price) space and
/// intersected pairwise over their consecutive-point segments. The outcome
/// follows the lowest-cost clearing policy:
///
/// - no intersection at all yields `None`;
/// - a single transverse crossing yields that point, rounded to the
///   configured precisions;
/// - several points, or a collinear overlap along a shared tier, yield the
///   minimum volume and the minimum price over every intersection point,
///   unrounded.
///
/// The tie-break is deliberate policy, not an arbitrary "first hit": when the
/// curves agree along a whole flat segment, the market clears at the cheapest
/// end of it.
pub fn clear(
    sell: &StepCurve,
    purchase: &StepCurve,
    precision: &Precision,
) -> Option<ClearingPoint> {
    let mut candidates: Vec<Point> = Vec::new();
    let mut collinear = false;

    for (s0, s1) in sell.segments() {
        for (p0, p1) in purchase.segments() {
            match intersect(s0, s1, p0, p1) {
                SegmentIntersection::Disjoint => {}
                SegmentIntersection::Point(point) => push_candidate(&mut candidates, point),
                SegmentIntersection::Overlap(start, end) => {
                    collinear = true;
                    push_candidate(&mut candidates, start);
                    push_candidate(&mut candidates, end);
                }
            }
        }
    }

    match candidates.as_slice() {
        [] => None,
        [point] if !collinear => Some(ClearingPoint::new(
            precision.round_volume(point.volume),
            precision.round_price(point.price),
        )),
        points => {
            let smv = points
                .iter()
                .map(|point| point.volume)
                .fold(f64::INFINITY, f64::min);
            let smp = points
                .iter()
                .map(|point| point.price)
                .fold(f64::INFINITY, f64::min);
            Some(ClearingPoint::new(smv, smp))
        }
    }
}

// Adjacent segments of the two polylines report a crossing at a shared vertex
// once per segment pair; collapse those into a single candidate.
fn push_candidate(candidates: &mut Vec<Point>, point: Point) {
    let duplicate = candidates.iter().any(|seen| {
        (seen.volume - point.volume).abs() <= EPSILON && (seen.price - point.price).abs() <= EPSILON
    });
    if !duplicate {
        candidates.push(point);
    }
}
