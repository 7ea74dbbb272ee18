//! Geometric math utilities.
//!
//! Distances, cross products, segment intersection, and the closed-form
//! derivative roots used to find interior extrema of Bezier segments.

// ============================================================================
// Constants
// ============================================================================

/// Coinciding points maximal distance (epsilon).
pub const VERTEX_DIST_EPSILON: f64 = 1e-14;

/// Epsilon for intersection calculations.
pub const INTERSECTION_EPSILON: f64 = 1.0e-30;

// ============================================================================
// Cross product
// ============================================================================

/// Cross product of vectors (x2-x1, y2-y1) and (x-x2, y-y2).
/// The sign indicates which side of the line (x1,y1)→(x2,y2) the point (x,y) is on.
#[inline]
pub fn cross_product(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> f64 {
    (x - x2) * (y2 - y1) - (y - y2) * (x2 - x1)
}

// ============================================================================
// Distance calculations
// ============================================================================

/// Euclidean distance between two points.
#[inline]
pub fn calc_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn calc_sq_distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    dx * dx + dy * dy
}

/// Compute the parameter `u` for the projection of point (x, y) onto
/// the line segment (x1,y1)→(x2,y2). Returns 0 if the segment is degenerate.
#[inline]
pub fn calc_segment_point_u(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0.0 && dy == 0.0 {
        return 0.0;
    }

    let pdx = x - x1;
    let pdy = y - y1;

    (pdx * dx + pdy * dy) / (dx * dx + dy * dy)
}

/// Squared distance from point (x, y) to the closest point on segment
/// (x1,y1)→(x2,y2).
#[inline]
pub fn calc_segment_point_sq_distance(x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> f64 {
    let u = calc_segment_point_u(x1, y1, x2, y2, x, y);
    if u <= 0.0 {
        calc_sq_distance(x, y, x1, y1)
    } else if u >= 1.0 {
        calc_sq_distance(x, y, x2, y2)
    } else {
        calc_sq_distance(x, y, x1 + u * (x2 - x1), y1 + u * (y2 - y1))
    }
}

// ============================================================================
// Shoelace area
// ============================================================================

/// Signed area of an implicitly closed vertex ring by the shoelace
/// formula. Positive means clockwise on screen (y-down device
/// coordinates). Fewer than three vertices yield zero.
pub fn shoelace_area(vertices: &[crate::basics::PointD]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[(i + 1) % vertices.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

// ============================================================================
// Intersection
// ============================================================================

/// Calculate the intersection point of the infinite lines through
/// (ax,ay)→(bx,by) and (cx,cy)→(dx,dy).
/// Returns `Some((x, y))` if they intersect, `None` if parallel.
#[inline]
#[allow(clippy::too_many_arguments)]
pub fn calc_intersection(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    cx: f64,
    cy: f64,
    dx: f64,
    dy: f64,
) -> Option<(f64, f64)> {
    let num = (ay - cy) * (dx - cx) - (ax - cx) * (dy - cy);
    let den = (bx - ax) * (dy - cy) - (by - ay) * (dx - cx);
    if den.abs() < INTERSECTION_EPSILON {
        return None;
    }
    let r = num / den;
    Some((ax + r * (bx - ax), ay + r * (by - ay)))
}

// ============================================================================
// Bezier derivative roots (one coordinate at a time)
// ============================================================================

/// Interior extremum parameter of a quadratic Bezier coordinate
/// (p0, p1, p2). The derivative is linear, so there is at most one root;
/// it is returned only when it lies strictly inside (0, 1).
#[inline]
pub fn curve3_extremum(p0: f64, p1: f64, p2: f64) -> Option<f64> {
    let den = p0 - 2.0 * p1 + p2;
    if den.abs() < VERTEX_DIST_EPSILON {
        return None;
    }
    let t = (p0 - p1) / den;
    if t > 0.0 && t < 1.0 {
        Some(t)
    } else {
        None
    }
}

/// Interior extrema parameters of a cubic Bezier coordinate
/// (p0, p1, p2, p3). The derivative is a quadratic; up to two roots are
/// returned, each only when strictly inside (0, 1).
#[inline]
pub fn curve4_extrema(p0: f64, p1: f64, p2: f64, p3: f64) -> (Option<f64>, Option<f64>) {
    // Derivative coefficients of a*t^2 + b*t + c (common factor 3 dropped).
    let a = p3 - 3.0 * p2 + 3.0 * p1 - p0;
    let b = 2.0 * (p2 - 2.0 * p1 + p0);
    let c = p1 - p0;

    let interior = |t: f64| if t > 0.0 && t < 1.0 { Some(t) } else { None };

    if a.abs() < VERTEX_DIST_EPSILON {
        // Degenerates to a linear derivative.
        if b.abs() < VERTEX_DIST_EPSILON {
            return (None, None);
        }
        return (interior(-c / b), None);
    }

    let disc = b * b - 4.0 * a * c;
    if disc < 0.0 {
        return (None, None);
    }
    let sq = disc.sqrt();
    (
        interior((-b - sq) / (2.0 * a)),
        interior((-b + sq) / (2.0 * a)),
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_product_sign() {
        // (0,0)→(10,0), point above (y<0 is "above" in y-down coords)
        let left = cross_product(0.0, 0.0, 10.0, 0.0, 5.0, -1.0);
        let right = cross_product(0.0, 0.0, 10.0, 0.0, 5.0, 1.0);
        assert!(left * right < 0.0);
    }

    #[test]
    fn test_distance() {
        assert!((calc_distance(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-12);
        assert_eq!(calc_sq_distance(0.0, 0.0, 3.0, 4.0), 25.0);
    }

    #[test]
    fn test_segment_point_distance() {
        // Point above the middle of a horizontal segment
        let d = calc_segment_point_sq_distance(0.0, 0.0, 10.0, 0.0, 5.0, 2.0);
        assert!((d - 4.0).abs() < 1e-12);
        // Point beyond the end clamps to the endpoint
        let d = calc_segment_point_sq_distance(0.0, 0.0, 10.0, 0.0, 13.0, 4.0);
        assert!((d - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_intersection() {
        let p = calc_intersection(0.0, 0.0, 10.0, 10.0, 0.0, 10.0, 10.0, 0.0);
        let (x, y) = p.unwrap();
        assert!((x - 5.0).abs() < 1e-12);
        assert!((y - 5.0).abs() < 1e-12);

        // Parallel lines
        assert!(calc_intersection(0.0, 0.0, 10.0, 0.0, 0.0, 1.0, 10.0, 1.0).is_none());
    }

    #[test]
    fn test_curve3_extremum() {
        // Symmetric bulge peaks at t = 0.5
        let t = curve3_extremum(250.0, 265.0, 250.0).unwrap();
        assert!((t - 0.5).abs() < 1e-12);
        // Monotone coordinate has no interior extremum
        assert!(curve3_extremum(0.0, 5.0, 10.0).is_none());
    }

    #[test]
    fn test_curve4_extrema() {
        // Symmetric S-free bulge: extremum at t = 0.5
        let (t1, t2) = curve4_extrema(0.0, 10.0, 10.0, 0.0);
        assert!((t1.unwrap() - 0.5).abs() < 1e-12);
        assert!(t2.is_none());

        // Monotone cubic: none
        let (t1, t2) = curve4_extrema(0.0, 3.0, 7.0, 10.0);
        assert!(t1.is_none() && t2.is_none());
    }
}
