//! Area — a boolean-cleaned region of the plane.
//!
//! An `Area` is a set of non-overlapping shapes, each an outer contour
//! plus zero or more holes, resolved under the non-zero winding rule.
//! Construction from raw contours performs the winding cleanup (a
//! self-overlapping input still counts as filled once), which is what
//! makes the concave-vertex handling of the offset engine work.
//!
//! The clipping itself is delegated to the `i_overlay` sweep-line
//! implementation; this module keeps the rest of the crate independent
//! of that choice.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::simplify::SimplifyShape;
use i_overlay::float::single::SingleFloatOverlay;
use i_overlay::i_float::float::compatible::FloatPointCompatible;

use crate::basics::{PointD, RectD};
use crate::flatten::flatten;
use crate::math::shoelace_area;
use crate::outline::Outline;

impl FloatPointCompatible<f64> for PointD {
    fn from_xy(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

/// One closed ring of an area boundary.
pub type Contour = Vec<PointD>;

/// One connected shape: the outer contour first, then its holes
/// (wound opposite to the outer contour).
pub type AreaShape = Vec<Contour>;

// ============================================================================
// Area
// ============================================================================

/// A boolean-cleaned region under the non-zero winding rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Area {
    shapes: Vec<AreaShape>,
}

impl Area {
    /// The empty region.
    pub fn empty() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Build an area from raw closed contours, resolving self-overlap
    /// and mutual overlap with the non-zero winding rule. Contours
    /// keep their winding: a counter-winding ring carves a hole.
    pub fn from_contours(contours: Vec<Contour>) -> Self {
        let contours: Vec<Contour> = contours.into_iter().filter(|c| c.len() >= 3).collect();
        if contours.is_empty() {
            return Self::empty();
        }
        Self {
            shapes: contours.simplify_shape(FillRule::NonZero),
        }
    }

    /// Flatten an outline at `tolerance` and build the filled region it
    /// encloses.
    pub fn from_outline(outline: &Outline, tolerance: f64) -> Self {
        Self::from_contours(
            flatten(outline, tolerance)
                .into_iter()
                .map(|p| p.vertices().to_vec())
                .collect(),
        )
    }

    /// A rectangular region.
    pub fn from_rect(r: RectD) -> Self {
        if !r.is_valid() || r.x1 == r.x2 || r.y1 == r.y2 {
            return Self::empty();
        }
        Self::from_contours(vec![vec![
            PointD::new(r.x1, r.y1),
            PointD::new(r.x2, r.y1),
            PointD::new(r.x2, r.y2),
            PointD::new(r.x1, r.y2),
        ]])
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The shapes of this region (outer contour plus holes each).
    pub fn shapes(&self) -> &[AreaShape] {
        &self.shapes
    }

    /// All contours of this region, outer rings and holes alike.
    pub fn contours(&self) -> impl Iterator<Item = &Contour> {
        self.shapes.iter().flatten()
    }

    // ---------------------------------------------------------------
    // Boolean operations
    // ---------------------------------------------------------------

    pub fn union(&self, other: &Area) -> Area {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        self.overlay(other, OverlayRule::Union)
    }

    pub fn intersect(&self, other: &Area) -> Area {
        if self.is_empty() || other.is_empty() {
            return Area::empty();
        }
        self.overlay(other, OverlayRule::Intersect)
    }

    /// This region minus `other`.
    pub fn subtract(&self, other: &Area) -> Area {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        self.overlay(other, OverlayRule::Difference)
    }

    /// Symmetric difference; the closeness oracle of the tests.
    pub fn xor(&self, other: &Area) -> Area {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        self.overlay(other, OverlayRule::Xor)
    }

    fn overlay(&self, other: &Area, rule: OverlayRule) -> Area {
        Area {
            shapes: self
                .shapes
                .overlay(&other.shapes, rule, FillRule::NonZero),
        }
    }

    // ---------------------------------------------------------------
    // Measure and conversion
    // ---------------------------------------------------------------

    /// Total enclosed area: outer rings minus their holes, summed over
    /// all shapes.
    pub fn measure(&self) -> f64 {
        self.shapes
            .iter()
            .map(|shape| {
                shape
                    .iter()
                    .map(|c| shoelace_area(c))
                    .sum::<f64>()
                    .abs()
            })
            .sum()
    }

    /// Render every contour as a closed sub-path of one outline, to be
    /// painted with a non-zero winding fill.
    pub fn to_outline(&self) -> Outline {
        let mut outline = Outline::new();
        for contour in self.contours() {
            append_contour(&mut outline, contour);
        }
        outline
    }
}

/// Append one closed ring to an outline as a move/line/close sub-path.
pub fn append_contour(outline: &mut Outline, contour: &[PointD]) {
    let mut points = contour.iter();
    if let Some(first) = points.next() {
        outline.move_to(first.x, first.y);
        for p in points {
            outline.line_to(p.x, p.y);
        }
        outline.close_polygon();
    }
}

// ============================================================================
// Tests
// ============================================================================
