//! Bezier curve flattening (quadratic and cubic).
//!
//! Recursive de Casteljau subdivision that approximates a curve with line
//! segments until the control points deviate from the chord by less than a
//! caller-supplied flatness tolerance. The output is a plain point list,
//! which is all the offset and decoration engines ever need.

use crate::basics::PointD;

const CURVE_RECURSION_LIMIT: u32 = 32;

// ============================================================================
// Point evaluation
// ============================================================================

/// Evaluate a quadratic Bezier at parameter `t`.
pub fn curve3_point(p0: PointD, p1: PointD, p2: PointD, t: f64) -> PointD {
    let mt = 1.0 - t;
    let a = mt * mt;
    let b = 2.0 * mt * t;
    let c = t * t;
    PointD::new(
        a * p0.x + b * p1.x + c * p2.x,
        a * p0.y + b * p1.y + c * p2.y,
    )
}

/// Evaluate a cubic Bezier at parameter `t`.
pub fn curve4_point(p0: PointD, p1: PointD, p2: PointD, p3: PointD, t: f64) -> PointD {
    let mt = 1.0 - t;
    let a = mt * mt * mt;
    let b = 3.0 * mt * mt * t;
    let c = 3.0 * mt * t * t;
    let d = t * t * t;
    PointD::new(
        a * p0.x + b * p1.x + c * p2.x + d * p3.x,
        a * p0.y + b * p1.y + c * p2.y + d * p3.y,
    )
}

// ============================================================================
// Flattening
// ============================================================================

/// Flatten a quadratic Bezier into line segments.
///
/// Appends the approximation to `out`, starting *after* `p0` (the caller
/// has already emitted the current point) and ending exactly at `p2`.
pub fn flatten_curve3(p0: PointD, p1: PointD, p2: PointD, tolerance: f64, out: &mut Vec<PointD>) {
    recurse_curve3(p0, p1, p2, tolerance * tolerance, 0, out);
    out.push(p2);
}

fn recurse_curve3(
    p0: PointD,
    p1: PointD,
    p2: PointD,
    tolerance_sq: f64,
    level: u32,
    out: &mut Vec<PointD>,
) {
    if level >= CURVE_RECURSION_LIMIT {
        return;
    }

    let dx = p2.x - p0.x;
    let dy = p2.y - p0.y;
    let d = ((p1.x - p2.x) * dy - (p1.y - p2.y) * dx).abs();

    if d * d <= tolerance_sq * (dx * dx + dy * dy) {
        return;
    }

    // Subdivide at the midpoint.
    let p01 = mid(p0, p1);
    let p12 = mid(p1, p2);
    let pm = mid(p01, p12);

    recurse_curve3(p0, p01, pm, tolerance_sq, level + 1, out);
    out.push(pm);
    recurse_curve3(pm, p12, p2, tolerance_sq, level + 1, out);
}

/// Flatten a cubic Bezier into line segments.
///
/// Appends the approximation to `out`, starting *after* `p0` and ending
/// exactly at `p3`.
pub fn flatten_curve4(
    p0: PointD,
    p1: PointD,
    p2: PointD,
    p3: PointD,
    tolerance: f64,
    out: &mut Vec<PointD>,
) {
    recurse_curve4(p0, p1, p2, p3, tolerance * tolerance, 0, out);
    out.push(p3);
}

#[allow(clippy::too_many_arguments)]
fn recurse_curve4(
    p0: PointD,
    p1: PointD,
    p2: PointD,
    p3: PointD,
    tolerance_sq: f64,
    level: u32,
    out: &mut Vec<PointD>,
) {
    if level >= CURVE_RECURSION_LIMIT {
        return;
    }

    let dx = p3.x - p0.x;
    let dy = p3.y - p0.y;
    let d1 = ((p1.x - p3.x) * dy - (p1.y - p3.y) * dx).abs();
    let d2 = ((p2.x - p3.x) * dy - (p2.y - p3.y) * dx).abs();
    let d = d1 + d2;

    if d * d <= tolerance_sq * (dx * dx + dy * dy) {
        return;
    }

    let p01 = mid(p0, p1);
    let p12 = mid(p1, p2);
    let p23 = mid(p2, p3);
    let p012 = mid(p01, p12);
    let p123 = mid(p12, p23);
    let pm = mid(p012, p123);

    recurse_curve4(p0, p01, p012, pm, tolerance_sq, level + 1, out);
    out.push(pm);
    recurse_curve4(pm, p123, p23, p3, tolerance_sq, level + 1, out);
}

#[inline]
fn mid(a: PointD, b: PointD) -> PointD {
    PointD::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5)
}

// ============================================================================
// Tests
// ============================================================================
