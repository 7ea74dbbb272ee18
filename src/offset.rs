//! Outline offsetting — perpendicular expansion of closed shapes.
//!
//! Flattens an outline, keeps its outer (positive-area) sub-paths, and
//! walks each one emitting per-vertex join geometry at the requested
//! perpendicular distance. Concave vertices deliberately emit
//! overlapping geometry that routes through the real vertex; the
//! non-zero winding cleanup in `Area::from_contours` resolves it, so no
//! local intersection tests are needed. Holes are dropped, not inset:
//! the engine produces the grown outer silhouette only.
//!
//! The offset distance is the perpendicular magnitude from the original
//! boundary. It must not be negative; callers starting from a stroke
//! width halve it themselves.

use crate::area::{Area, Contour};
use crate::basics::PointD;
use crate::flatten::{flatten, Polygon};
use crate::math::calc_distance;
use crate::outline::Outline;

// ============================================================================
// Join kind and request
// ============================================================================

/// Corner geometry connecting two offset edge-ends at a shared vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JoinKind {
    Bevel,
    #[default]
    Miter,
    Round,
}

/// An offset request: the distance and join kind, plus the tuning
/// values that are usually left at their defaults. Promoting the tuning
/// values to fields keeps them testable across tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetRequest {
    /// Perpendicular offset distance (>= 0; negative is undefined).
    pub distance: f64,
    pub join: JoinKind,
    /// Curve flattening tolerance, in device units.
    pub flatness: f64,
    /// Miter length limit as a multiple of the distance; beyond it the
    /// join falls back to bevel.
    pub miter_limit: f64,
    /// Target chord length of round-join fan segments, in device units.
    pub round_chord: f64,
    /// Upper bound on the round-join angular step, in radians.
    pub max_arc_step: f64,
}

impl OffsetRequest {
    pub fn new(distance: f64, join: JoinKind) -> Self {
        Self {
            distance,
            join,
            ..Self::default()
        }
    }
}

impl Default for OffsetRequest {
    fn default() -> Self {
        Self {
            distance: 0.0,
            join: JoinKind::Miter,
            flatness: 1.0,
            miter_limit: 4.0,
            round_chord: 10.0,
            max_arc_step: 0.5,
        }
    }
}

// ============================================================================
// Offset engine
// ============================================================================

/// Offset a closed outline by `request.distance`.
///
/// Only clockwise-on-screen (positive-area) sub-paths are considered;
/// holes are removed and only the outer silhouette grows. The input is
/// flattened first, so the result is polygonal even when the outline
/// contains curves. Empty input yields an empty area.
pub fn offset(outline: &Outline, request: &OffsetRequest) -> Area {
    let contours: Vec<Contour> = flatten(outline, request.flatness)
        .iter()
        .filter(|p| p.is_outer())
        .map(|p| offset_polygon(p, request))
        .collect();
    Area::from_contours(contours)
}

/// Offset a single outer polygon into one raw (possibly self-
/// overlapping) contour. The caller resolves the overlap with a
/// non-zero winding cleanup.
pub fn offset_polygon(polygon: &Polygon, request: &OffsetRequest) -> Contour {
    let v = polygon.vertices();
    let n = v.len();
    let mut out = Vec::with_capacity(n * 2);
    for i in 0..n {
        let prev = v[(i + n - 1) % n];
        let cur = v[i];
        let next = v[(i + 1) % n];
        calc_join(&mut out, prev, cur, next, request);
    }
    out
}

// ============================================================================
// Segment join resolver
// ============================================================================

/// Emit the offset geometry for the vertex `v1`, joining the incoming
/// edge `v0`→`v1` to the outgoing edge `v1`→`v2`.
pub fn calc_join(out: &mut Vec<PointD>, v0: PointD, v1: PointD, v2: PointD, req: &OffsetRequest) {
    let d = req.distance;

    // Unit directions of the incoming and outgoing edges. The flattener
    // guarantees non-zero edge lengths.
    let clen = calc_distance(v0.x, v0.y, v1.x, v1.y);
    let cdx = (v1.x - v0.x) / clen;
    let cdy = (v1.y - v0.y) / clen;
    let nlen = calc_distance(v1.x, v1.y, v2.x, v2.y);
    let ndx = (v2.x - v1.x) / nlen;
    let ndy = (v2.y - v1.y) / nlen;

    // Left-hand perpendicular offsets of the incoming edge end and the
    // outgoing edge start (y-down coordinates).
    let in_pt = PointD::new(v1.x + cdy * d, v1.y - cdx * d);
    let out_pt = PointD::new(v1.x + ndy * d, v1.y - ndx * d);

    if cdy * ndx - cdx * ndy >= 0.0 {
        // Concave vertex: walk through the real vertex. The loop this
        // creates is removed by the winding cleanup.
        out.push(in_pt);
        out.push(v1);
        out.push(out_pt);
        return;
    }

    // Unit bisector of the two edge normals. Zero length (anti-parallel
    // edges) leaves cos at zero and forces the bevel fallback.
    let mut mdx = cdy + ndy;
    let mut mdy = -(cdx + ndx);
    let mlen = (mdx * mdx + mdy * mdy).sqrt();
    if mlen > 0.0 {
        mdx /= mlen;
        mdy /= mlen;
    }

    // Cosine of the half-angle between the edges.
    let cos = cdy * mdx - cdx * mdy;

    match req.join {
        JoinKind::Bevel => {
            out.push(in_pt);
            out.push(out_pt);
        }
        JoinKind::Miter => {
            // The miter length is distance/cos; allow up to
            // miter_limit * distance before reverting to bevel.
            if cos * req.miter_limit < 1.0 {
                out.push(in_pt);
                out.push(out_pt);
            } else {
                out.push(PointD::new(v1.x + mdx * d / cos, v1.y + mdy * d / cos));
            }
        }
        JoinKind::Round => {
            out.push(in_pt);
            if d > 0.0 {
                let arc = cos.clamp(-1.0, 1.0).acos() * 2.0;
                let increment = (req.round_chord / d).min(req.max_arc_step);

                let mut angle = (-cdx).atan2(cdy);
                let angle_end = angle + arc - increment;

                // Spread the partial increment evenly over both ends of
                // the fan so neither end shows a bias.
                let leftover = arc - (arc / increment + 0.5).floor() * increment;
                angle += leftover / 2.0;

                while angle < angle_end {
                    angle += increment;
                    out.push(PointD::new(
                        angle.cos() * d + v1.x,
                        angle.sin() * d + v1.y,
                    ));
                }
                out.push(out_pt);
            } else {
                out.push(out_pt);
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basics::RectD;

    fn p(x: f64, y: f64) -> PointD {
        PointD::new(x, y)
    }

    fn square(x: f64, y: f64, size: f64) -> Outline {
        Outline::from_rect(RectD::new(x, y, x + size, y + size))
    }

    fn join_output(v0: PointD, v1: PointD, v2: PointD, req: &OffsetRequest) -> Vec<PointD> {
        let mut out = Vec::new();
        calc_join(&mut out, v0, v1, v2, req);
        out
    }

    // A right-angle convex corner in a clockwise (on screen) path:
    // rightward edge into downward edge.
    fn right_angle() -> (PointD, PointD, PointD) {
        (p(0.0, 0.0), p(10.0, 0.0), p(10.0, 10.0))
    }

    #[test]
    fn test_bevel_join_two_points() {
        let (v0, v1, v2) = right_angle();
        let out = join_output(v0, v1, v2, &OffsetRequest::new(2.0, JoinKind::Bevel));
        assert_eq!(out.len(), 2);
        // Offset of the incoming rightward edge points up (y-down: -y)
        assert_eq!(out[0], p(10.0, -2.0));
        // Offset of the outgoing downward edge points right (+x)
        assert_eq!(out[1], p(12.0, 10.0));
    }

    #[test]
    fn test_miter_apex() {
        let (v0, v1, v2) = right_angle();
        let out = join_output(v0, v1, v2, &OffsetRequest::new(2.0, JoinKind::Miter));
        assert_eq!(out.len(), 1);
        // The apex of a right angle sits diagonally out from the corner.
        assert!((out[0].x - 12.0).abs() < 1e-9);
        assert!((out[0].y + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_miter_limit_falls_back_to_bevel() {
        // A nearly-reversed corner: the miter would be far beyond
        // 4 * distance.
        let v0 = p(0.0, 0.0);
        let v1 = p(10.0, 0.0);
        let v2 = p(0.0, 0.5);
        let out = join_output(v0, v1, v2, &OffsetRequest::new(2.0, JoinKind::Miter));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_near_reversal_degenerates_to_bevel() {
        // Outgoing edge almost exactly reverses the incoming edge on
        // the convex side: the bisector collapses and the half-angle
        // cosine vanishes, so the miter must fall back to bevel.
        let v0 = p(0.0, 0.0);
        let v1 = p(10.0, 0.0);
        let v2 = p(0.0, 1e-9);
        let out = join_output(v0, v1, v2, &OffsetRequest::new(2.0, JoinKind::Miter));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_exact_reversal_walks_through_vertex() {
        // A perfect spike has zero cross product and is treated as
        // concave: the walk-through keeps the path connected and the
        // winding cleanup erases the zero-area loop.
        let out = join_output(
            p(0.0, 0.0),
            p(10.0, 0.0),
            p(0.0, 0.0),
            &OffsetRequest::new(2.0, JoinKind::Miter),
        );
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_round_join_fan() {
        let (v0, v1, v2) = right_angle();
        let req = OffsetRequest {
            round_chord: 0.5,
            ..OffsetRequest::new(4.0, JoinKind::Round)
        };
        let out = join_output(v0, v1, v2, &req);
        assert!(out.len() > 4);
        // Every fan vertex lies on the circle of radius d about v1.
        for q in &out {
            let r = calc_distance(q.x, q.y, v1.x, v1.y);
            assert!((r - 4.0).abs() < 1e-9, "radius {r}");
        }
    }

    #[test]
    fn test_concave_walks_through_vertex() {
        // Same corner traversed the other way round is concave.
        let out = join_output(
            p(10.0, 10.0),
            p(10.0, 0.0),
            p(0.0, 0.0),
            &OffsetRequest::new(2.0, JoinKind::Miter),
        );
        assert_eq!(out.len(), 3);
        assert_eq!(out[1], p(10.0, 0.0));
    }

    #[test]
    fn test_offset_square_grows() {
        // 10x10 square offset by 5 with miter joins: a 20x20 square.
        let area = offset(&square(0.0, 0.0, 10.0), &OffsetRequest::new(5.0, JoinKind::Miter));
        assert!((area.measure() - 400.0).abs() < 1e-6);
    }

    #[test]
    fn test_offset_square_bevel_cuts_corners() {
        // Bevel removes 4 right triangles of d^2 / 2 from the miter square.
        let area = offset(&square(0.0, 0.0, 10.0), &OffsetRequest::new(5.0, JoinKind::Bevel));
        let expected = 400.0 - 4.0 * 0.5 * 5.0 * 5.0;
        assert!((area.measure() - expected).abs() < 1e-6);
    }

    #[test]
    fn test_offset_square_round_between_bevel_and_miter() {
        let area = offset(&square(0.0, 0.0, 10.0), &OffsetRequest::new(5.0, JoinKind::Round));
        let bevel = 400.0 - 4.0 * 0.5 * 25.0;
        let miter = 400.0;
        let m = area.measure();
        assert!(m > bevel && m < miter, "measure {m}");
        // Close to the exact rounded-corner area (pi/4 * d^2 per corner)
        let exact = 300.0 + std::f64::consts::PI * 25.0;
        assert!((m - exact).abs() < 6.0, "measure {m}");
    }

    #[test]
    fn test_zero_distance_is_identity() {
        for join in [JoinKind::Bevel, JoinKind::Miter, JoinKind::Round] {
            let shape = square(3.0, 4.0, 20.0);
            let area = offset(&shape, &OffsetRequest::new(0.0, join));
            let original = Area::from_outline(&shape, 1.0);
            assert!(area.xor(&original).measure() < 1e-9, "join {join:?}");
        }
    }

    #[test]
    fn test_hole_subpaths_are_dropped() {
        let mut o = Outline::new();
        // Outer square, clockwise on screen
        o.move_to(0.0, 0.0);
        o.line_to(30.0, 0.0);
        o.line_to(30.0, 30.0);
        o.line_to(0.0, 30.0);
        o.close_polygon();
        // Hole, counter-clockwise
        o.move_to(10.0, 10.0);
        o.line_to(10.0, 20.0);
        o.line_to(20.0, 20.0);
        o.line_to(20.0, 10.0);
        o.close_polygon();

        let area = offset(&o, &OffsetRequest::new(5.0, JoinKind::Miter));
        // 40x40, no hole
        assert!((area.measure() - 1600.0).abs() < 1e-6);
        assert_eq!(area.shapes().len(), 1);
        assert_eq!(area.shapes()[0].len(), 1);
    }

    #[test]
    fn test_disjoint_shapes_superpose() {
        // Separated by more than 2 * distance: areas simply add.
        let d = 5.0;
        let mut both = square(0.0, 0.0, 10.0);
        both.move_to(40.0, 0.0);
        both.line_to(50.0, 0.0);
        both.line_to(50.0, 10.0);
        both.line_to(40.0, 10.0);
        both.close_polygon();

        let req = OffsetRequest::new(d, JoinKind::Miter);
        let together = offset(&both, &req).measure();
        let alone_a = offset(&square(0.0, 0.0, 10.0), &req).measure();
        let alone_b = offset(&square(40.0, 0.0, 10.0), &req).measure();
        assert!((together - (alone_a + alone_b)).abs() < 1e-6);
    }

    #[test]
    fn test_concave_shape_cleanup() {
        // An L-shape: the inner corner generates overlapping geometry
        // that the winding cleanup must resolve to a simple region.
        let mut o = Outline::new();
        o.move_to(0.0, 0.0);
        o.line_to(30.0, 0.0);
        o.line_to(30.0, 10.0);
        o.line_to(10.0, 10.0);
        o.line_to(10.0, 30.0);
        o.line_to(0.0, 30.0);
        o.close_polygon();

        let polys = flatten(&o, 1.0);
        assert!(polys[0].is_outer());

        let area = offset(&o, &OffsetRequest::new(2.0, JoinKind::Miter));
        // Exact: L area 500, perimeter band 120*2, five outer miter
        // corners add d^2 each, the concave corner removes d^2.
        let expected = 500.0 + 120.0 * 2.0 + 5.0 * 4.0 - 4.0;
        assert!((area.measure() - expected).abs() < 1e-6, "{}", area.measure());
    }

    #[test]
    fn test_empty_outline() {
        let area = offset(&Outline::new(), &OffsetRequest::new(5.0, JoinKind::Miter));
        assert!(area.is_empty());
    }
}
