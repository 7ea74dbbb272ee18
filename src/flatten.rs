//! Outline flattening — curves to closed polygons.
//!
//! `flatten` turns an `Outline` into a set of `Polygon`s: one per
//! sub-path, curves approximated by line segments at a given flatness
//! tolerance, zero-length edges dropped, closure implicit.

use crate::basics::PointD;
use crate::curves::{flatten_curve3, flatten_curve4};
use crate::outline::{Outline, PathCmd};

// ============================================================================
// Polygon
// ============================================================================

/// A single closed, flattened sub-path. The vertex list is implicitly
/// closed: the edge from the last vertex back to the first is part of
/// the boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<PointD>,
}

impl Polygon {
    pub fn new(vertices: Vec<PointD>) -> Self {
        Self { vertices }
    }

    pub fn vertices(&self) -> &[PointD] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Signed area by the shoelace formula, including the implicit
    /// closing edge. Positive means clockwise on screen (y-down device
    /// coordinates): an outer boundary. Negative means a hole.
    pub fn signed_area(&self) -> f64 {
        crate::math::shoelace_area(&self.vertices)
    }

    /// An outer (positive-area) sub-path, as opposed to a hole.
    pub fn is_outer(&self) -> bool {
        self.signed_area() > 0.0
    }
}

// ============================================================================
// Flattening
// ============================================================================

/// Flatten an outline into closed polygons at the given tolerance.
///
/// Sub-paths are split at each `MoveTo` and `Close`; zero-length edges
/// are dropped before they can produce degenerate directions downstream.
/// Sub-paths with fewer than three vertices are discarded. A drawing
/// command arriving before any `MoveTo` starts a sub-path at its target
/// rather than aborting (partial output beats none).
pub fn flatten(outline: &Outline, tolerance: f64) -> Vec<Polygon> {
    let mut polygons = Vec::new();
    let mut current: Vec<PointD> = Vec::new();
    let mut prev: Option<PointD> = None;

    let mut finish = |current: &mut Vec<PointD>| {
        // Implicit closure: a trailing vertex equal to the start is the
        // same zero-length closing edge Close would produce.
        if current.len() > 1 && current.last() == current.first() {
            current.pop();
        }
        if current.len() >= 3 {
            polygons.push(Polygon::new(std::mem::take(current)));
        } else {
            current.clear();
        }
    };

    for cmd in outline {
        match *cmd {
            PathCmd::MoveTo(p) => {
                finish(&mut current);
                current.push(p);
                prev = Some(p);
            }
            PathCmd::LineTo(p) => {
                match prev {
                    Some(q) if q == p => {} // zero-length edge
                    _ => current.push(p),
                }
                prev = Some(p);
            }
            PathCmd::Curve3 { ctrl, to } => {
                let from = prev.unwrap_or(to);
                if current.is_empty() {
                    current.push(from);
                }
                append_flattened(&mut current, |out| {
                    flatten_curve3(from, ctrl, to, tolerance, out)
                });
                prev = Some(to);
            }
            PathCmd::Curve4 { ctrl1, ctrl2, to } => {
                let from = prev.unwrap_or(to);
                if current.is_empty() {
                    current.push(from);
                }
                append_flattened(&mut current, |out| {
                    flatten_curve4(from, ctrl1, ctrl2, to, tolerance, out)
                });
                prev = Some(to);
            }
            PathCmd::Close => {
                finish(&mut current);
                prev = None;
            }
        }
    }
    finish(&mut current);

    polygons
}

/// Run a curve flattener and append its output, skipping zero-length edges.
fn append_flattened(current: &mut Vec<PointD>, run: impl FnOnce(&mut Vec<PointD>)) {
    let mut segment = Vec::new();
    run(&mut segment);
    for p in segment {
        if current.last() != Some(&p) {
            current.push(p);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
