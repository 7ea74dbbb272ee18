//! Skip-ink decoration region builder.
//!
//! Turns a glyph outline plus a decoration band rectangle into an
//! ordered list of fill shapes that leave the glyph ink untouched.
//! Three strategies: `Straight` paints the whole band, `LargestGap`
//! keeps the horizontal gaps between ink runs (rectangles only),
//! `OffsetMask` subtracts an expanded glyph silhouette from the band
//! (arbitrary region shapes). All three are pure functions of their
//! inputs.

use std::env;
use std::sync::OnceLock;

use crate::area::{append_contour, Area, AreaShape};
use crate::basics::{PointD, RectD};
use crate::curves::{curve3_point, curve4_point};
use crate::intervals::{self, Interval};
use crate::math;
use crate::offset::{offset, JoinKind, OffsetRequest};
use crate::outline::{Outline, PathCmd};

/// Flattening tolerance used when rasterizing glyph outlines into
/// boolean areas. Also bounds how far a true curve point may sit from
/// its flattened contour.
const FLATNESS: f64 = 1.0;

/// Environment variable selecting the underline method at startup.
pub const METHOD_ENV_VAR: &str = "SKIPINK_UNDERLINE_METHOD";

// ============================================================================
// Band
// ============================================================================

/// The decoration band: an axis-aligned rectangle in device units,
/// typically derived from font metrics by the layout collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Band {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Band {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> RectD {
        RectD::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

// ============================================================================
// Method selection
// ============================================================================

/// Underline rendering strategy. Numeric values match the external
/// selector vocabulary (`straight = 0`, `largest-gap = 1`,
/// `offset-mask = 2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnderlineMethod {
    Straight,
    LargestGap,
    #[default]
    OffsetMask,
}

impl UnderlineMethod {
    /// Map the numeric selector; unrecognized values fall back to the
    /// default.
    pub fn from_value(value: u32) -> Self {
        match value {
            0 => UnderlineMethod::Straight,
            1 => UnderlineMethod::LargestGap,
            _ => UnderlineMethod::OffsetMask,
        }
    }

    fn parse(value: &str) -> Self {
        match value.trim() {
            "0" | "straight" => UnderlineMethod::Straight,
            "1" | "largest-gap" => UnderlineMethod::LargestGap,
            _ => UnderlineMethod::OffsetMask,
        }
    }

    /// Read the method override from `SKIPINK_UNDERLINE_METHOD`. The
    /// variable is consulted once per process; later changes have no
    /// effect.
    pub fn from_env() -> Self {
        static METHOD: OnceLock<UnderlineMethod> = OnceLock::new();
        *METHOD.get_or_init(|| match env::var(METHOD_ENV_VAR) {
            Ok(value) => UnderlineMethod::parse(&value),
            Err(_) => UnderlineMethod::default(),
        })
    }
}

// ============================================================================
// FillShape
// ============================================================================

/// One closed shape for the rendering backend to paint with a non-zero
/// winding fill.
#[derive(Debug, Clone, PartialEq)]
pub enum FillShape {
    Rect(RectD),
    /// An outer contour plus zero or more holes.
    Region(AreaShape),
}

impl FillShape {
    /// Render the shape in the generic path-command vocabulary.
    pub fn to_outline(&self) -> Outline {
        match self {
            FillShape::Rect(r) => Outline::from_rect(*r),
            FillShape::Region(shape) => {
                let mut outline = Outline::new();
                for contour in shape {
                    append_contour(&mut outline, contour);
                }
                outline
            }
        }
    }
}

// ============================================================================
// Region builder
// ============================================================================

/// Build the list of fill shapes for `band` given the glyph ink in
/// `outline`.
pub fn build(band: &Band, outline: &Outline, method: UnderlineMethod) -> Vec<FillShape> {
    match method {
        UnderlineMethod::Straight => vec![FillShape::Rect(band.rect())],
        UnderlineMethod::LargestGap => build_largest_gap(band, outline),
        UnderlineMethod::OffsetMask => build_offset_mask(band, outline),
    }
}

/// Rectangles spanning the horizontal gaps between ink runs.
///
/// Each contour of the ink-in-band intersection contributes one
/// interval (its exact horizontal extent); the merged intervals are
/// negated against the band's domain, each gap is then shrunk by
/// `margin = band.height` on every side that faces ink (the outer
/// sides of the first and last gap are left alone), and gaps that end
/// up shorter than the margin are dropped.
fn build_largest_gap(band: &Band, outline: &Outline) -> Vec<FillShape> {
    let band_rect = band.rect();
    let ink = Area::from_outline(outline, FLATNESS).intersect(&Area::from_rect(band_rect));
    let extrema = curve_extrema_in_band(outline, &band_rect);

    let mut spans = Vec::new();
    for contour in ink.contours() {
        if contour.is_empty() {
            continue;
        }
        let mut min = f64::MAX;
        let mut max = f64::MIN;
        for v in contour {
            min = min.min(v.x);
            max = max.max(v.x);
        }
        // Flattened vertices under-reach curved edges; the true curve
        // extrema restore the exact extent.
        for &p in &extrema {
            if contour_sq_distance(contour, p) <= FLATNESS * FLATNESS {
                min = min.min(p.x);
                max = max.max(p.x);
            }
        }
        spans.push(Interval::new(min, max - min));
    }

    let merged = intervals::merge(&spans);
    let gaps = intervals::negate(&merged, band.x, band.width);
    let margin = band.height;
    let last = gaps.len() - 1;

    let mut out = Vec::new();
    for (i, gap) in gaps.iter().enumerate() {
        let mut start = gap.start;
        let mut end = gap.end();
        if i != 0 {
            start += margin;
        }
        if i != last {
            end -= margin;
        }
        if end - start >= margin {
            out.push(FillShape::Rect(RectD::new(
                start,
                band.y,
                end,
                band.y + band.height,
            )));
        }
    }
    out
}

/// The band minus the glyph silhouette expanded by `band.height`.
fn build_offset_mask(band: &Band, outline: &Outline) -> Vec<FillShape> {
    let request = OffsetRequest::new(band.height, JoinKind::Miter);
    let silhouette = offset(outline, &request);
    let result = Area::from_rect(band.rect()).subtract(&silhouette);
    result
        .shapes()
        .iter()
        .cloned()
        .map(FillShape::Region)
        .collect()
}

/// Interior x-extrema of the outline's curve segments that fall inside
/// the band. Quadratics have at most one, cubics at most two.
fn curve_extrema_in_band(outline: &Outline, band: &RectD) -> Vec<PointD> {
    let mut out = Vec::new();
    let mut start = PointD::new(0.0, 0.0);
    let mut cur = start;
    for cmd in outline.iter() {
        match *cmd {
            PathCmd::MoveTo(p) => {
                start = p;
                cur = p;
            }
            PathCmd::LineTo(p) => cur = p,
            PathCmd::Curve3 { ctrl, to } => {
                if let Some(t) = math::curve3_extremum(cur.x, ctrl.x, to.x) {
                    let p = curve3_point(cur, ctrl, to, t);
                    if band.hit_test(p.x, p.y) {
                        out.push(p);
                    }
                }
                cur = to;
            }
            PathCmd::Curve4 { ctrl1, ctrl2, to } => {
                let (t1, t2) = math::curve4_extrema(cur.x, ctrl1.x, ctrl2.x, to.x);
                for t in [t1, t2].into_iter().flatten() {
                    let p = curve4_point(cur, ctrl1, ctrl2, to, t);
                    if band.hit_test(p.x, p.y) {
                        out.push(p);
                    }
                }
                cur = to;
            }
            PathCmd::Close => cur = start,
        }
    }
    out
}

/// Squared distance from a point to a closed polygonal contour.
fn contour_sq_distance(contour: &[PointD], p: PointD) -> f64 {
    let n = contour.len();
    let mut best = f64::MAX;
    for i in 0..n {
        let a = contour[i];
        let b = contour[(i + 1) % n];
        let d = math::calc_segment_point_sq_distance(a.x, a.y, b.x, b.y, p.x, p.y);
        if d < best {
            best = d;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
