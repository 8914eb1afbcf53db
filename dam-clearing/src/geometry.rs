use dam_core::models::Point;

/// Tolerance for orientation and coincidence tests.
///
/// Small relative to the MW and €/MWh magnitudes of a day-ahead book, so only
/// genuinely parallel or touching segments take the degenerate paths.
pub(crate) const EPSILON: f64 = 1e-9;

/// The intersection of two closed segments in (volume, price) space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not meet.
    Disjoint,
    /// The segments cross or touch at a single point.
    Point(Point),
    /// The segments are collinear and share a sub-segment.
    Overlap(Point, Point),
}

// Signed area of the triangle (a, b, c); positive when c lies to the left of
// the directed line a -> b, zero when the three points are collinear.
fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b.volume - a.volume) * (c.price - a.price) - (b.price - a.price) * (c.volume - a.volume)
}

fn is_degenerate(a: Point, b: Point) -> bool {
    (b.volume - a.volume).abs() <= EPSILON && (b.price - a.price).abs() <= EPSILON
}

// Whether p lies on the closed segment (a, b), within tolerance.
fn on_segment(p: Point, a: Point, b: Point) -> bool {
    orientation(a, b, p).abs() <= EPSILON
        && p.volume >= a.volume.min(b.volume) - EPSILON
        && p.volume <= a.volume.max(b.volume) + EPSILON
        && p.price >= a.price.min(b.price) - EPSILON
        && p.price <= a.price.max(b.price) + EPSILON
}

/// Intersects the closed segments `(a0, a1)` and `(b0, b1)`.
///
/// Handles the degenerate cases a polyline intersection needs explicitly:
/// zero-length segments (a curve built from a single order), parallel but
/// offset segments, and collinear overlap along a shared flat tier.
pub fn intersect(a0: Point, a1: Point, b0: Point, b1: Point) -> SegmentIntersection {
    // Zero-length segments reduce to point-on-segment tests.
    if is_degenerate(a0, a1) {
        return if on_segment(a0, b0, b1) {
            SegmentIntersection::Point(a0)
        } else {
            SegmentIntersection::Disjoint
        };
    }
    if is_degenerate(b0, b1) {
        return if on_segment(b0, a0, a1) {
            SegmentIntersection::Point(b0)
        } else {
            SegmentIntersection::Disjoint
        };
    }

    let da = (a1.volume - a0.volume, a1.price - a0.price);
    let db = (b1.volume - b0.volume, b1.price - b0.price);
    let denom = da.0 * db.1 - da.1 * db.0;

    if denom.abs() > EPSILON {
        // Transverse lines: solve a0 + t*da = b0 + u*db for (t, u).
        let dv = (b0.volume - a0.volume, b0.price - a0.price);
        let t = (dv.0 * db.1 - dv.1 * db.0) / denom;
        let u = (dv.0 * da.1 - dv.1 * da.0) / denom;
        if (-EPSILON..=1.0 + EPSILON).contains(&t) && (-EPSILON..=1.0 + EPSILON).contains(&u) {
            let t = t.clamp(0.0, 1.0);
            SegmentIntersection::Point(Point::new(a0.volume + t * da.0, a0.price + t * da.1))
        } else {
            SegmentIntersection::Disjoint
        }
    } else if orientation(a0, a1, b0).abs() > EPSILON {
        // Parallel but offset.
        SegmentIntersection::Disjoint
    } else {
        // Collinear: project b's endpoints onto a's parameterization and clip
        // the shared range to [0, 1].
        let len2 = da.0 * da.0 + da.1 * da.1;
        let tb0 = ((b0.volume - a0.volume) * da.0 + (b0.price - a0.price) * da.1) / len2;
        let tb1 = ((b1.volume - a0.volume) * da.0 + (b1.price - a0.price) * da.1) / len2;
        let (lo, hi) = if tb0 <= tb1 { (tb0, tb1) } else { (tb1, tb0) };
        let (lo, hi) = (lo.max(0.0), hi.min(1.0));

        let at = |t: f64| Point::new(a0.volume + t * da.0, a0.price + t * da.1);
        let tolerance = EPSILON / len2.sqrt();
        if lo > hi + tolerance {
            SegmentIntersection::Disjoint
        } else if hi - lo <= tolerance {
            SegmentIntersection::Point(at(lo))
        } else {
            SegmentIntersection::Overlap(at(lo), at(hi))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(volume: f64, price: f64) -> Point {
        Point::new(volume, price)
    }

    #[test]
    fn test_crossing_segments() {
        let result = intersect(pt(0.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0), pt(10.0, 0.0));
        assert_eq!(result, SegmentIntersection::Point(pt(5.0, 5.0)));
    }

    #[test]
    fn test_transverse_lines_outside_segments() {
        // The infinite lines cross at (5, 5) but the second segment stops short
        let result = intersect(pt(0.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0), pt(4.0, 6.0));
        assert_eq!(result, SegmentIntersection::Disjoint);
    }

    #[test]
    fn test_touch_at_endpoint() {
        let result = intersect(pt(0.0, 0.0), pt(5.0, 5.0), pt(5.0, 5.0), pt(10.0, 0.0));
        assert_eq!(result, SegmentIntersection::Point(pt(5.0, 5.0)));
    }

    #[test]
    fn test_parallel_offset() {
        let result = intersect(pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 1.0), pt(10.0, 1.0));
        assert_eq!(result, SegmentIntersection::Disjoint);
    }

    #[test]
    fn test_collinear_overlap() {
        let result = intersect(pt(0.0, 5.0), pt(10.0, 5.0), pt(4.0, 5.0), pt(15.0, 5.0));
        assert_eq!(
            result,
            SegmentIntersection::Overlap(pt(4.0, 5.0), pt(10.0, 5.0))
        );
    }

    #[test]
    fn test_collinear_touching_at_one_point() {
        let result = intersect(pt(0.0, 5.0), pt(10.0, 5.0), pt(10.0, 5.0), pt(20.0, 5.0));
        assert_eq!(result, SegmentIntersection::Point(pt(10.0, 5.0)));
    }

    #[test]
    fn test_collinear_disjoint() {
        let result = intersect(pt(0.0, 5.0), pt(10.0, 5.0), pt(11.0, 5.0), pt(20.0, 5.0));
        assert_eq!(result, SegmentIntersection::Disjoint);
    }

    #[test]
    fn test_degenerate_point_on_segment() {
        let result = intersect(pt(5.0, 5.0), pt(5.0, 5.0), pt(0.0, 0.0), pt(10.0, 10.0));
        assert_eq!(result, SegmentIntersection::Point(pt(5.0, 5.0)));

        let result = intersect(pt(5.0, 6.0), pt(5.0, 6.0), pt(0.0, 0.0), pt(10.0, 10.0));
        assert_eq!(result, SegmentIntersection::Disjoint);
    }

    #[test]
    fn test_both_degenerate() {
        let result = intersect(pt(5.0, 5.0), pt(5.0, 5.0), pt(5.0, 5.0), pt(5.0, 5.0));
        assert_eq!(result, SegmentIntersection::Point(pt(5.0, 5.0)));

        let result = intersect(pt(5.0, 5.0), pt(5.0, 5.0), pt(6.0, 5.0), pt(6.0, 5.0));
        assert_eq!(result, SegmentIntersection::Disjoint);
    }

    #[test]
    fn test_vertical_segment_crossing() {
        // Vertical (constant volume) segments are routine in step curves
        let result = intersect(pt(5.0, 0.0), pt(5.0, 10.0), pt(0.0, 5.0), pt(10.0, 5.0));
        assert_eq!(result, SegmentIntersection::Point(pt(5.0, 5.0)));
    }
}
