//! Outline — a closed-curve command sequence.
//!
//! An `Outline` is an ordered list of path commands (move/line/quadratic/
//! cubic/close) in device units, possibly containing several independent
//! closed sub-paths. It is a plain value: built once, then only read.
//! Commands are a tagged enum rather than command codes, so malformed
//! tags cannot exist; defensive handling is limited to commands arriving
//! in an unexpected order (see `flatten`).

use crate::basics::{PointD, RectD};

// ============================================================================
// Path commands
// ============================================================================

/// A single outline command. `Curve3` is a quadratic Bezier, `Curve4` a
/// cubic; both use the current point as their first control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(PointD),
    LineTo(PointD),
    Curve3 { ctrl: PointD, to: PointD },
    Curve4 { ctrl1: PointD, ctrl2: PointD, to: PointD },
    Close,
}

// ============================================================================
// Outline
// ============================================================================

/// An outline: ordered path commands forming zero or more closed sub-paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    cmds: Vec<PathCmd>,
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self { cmds: Vec::new() }
    }

    /// Create a rectangular outline (one clockwise sub-path in y-down
    /// device coordinates, i.e. positive signed area).
    pub fn from_rect(r: RectD) -> Self {
        let mut outline = Self::new();
        outline.move_to(r.x1, r.y1);
        outline.line_to(r.x2, r.y1);
        outline.line_to(r.x2, r.y2);
        outline.line_to(r.x1, r.y2);
        outline.close_polygon();
        outline
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.cmds.push(PathCmd::MoveTo(PointD::new(x, y)));
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        self.cmds.push(PathCmd::LineTo(PointD::new(x, y)));
    }

    /// Add a quadratic Bezier from the current point.
    pub fn curve3(&mut self, x_ctrl: f64, y_ctrl: f64, x_to: f64, y_to: f64) {
        self.cmds.push(PathCmd::Curve3 {
            ctrl: PointD::new(x_ctrl, y_ctrl),
            to: PointD::new(x_to, y_to),
        });
    }

    /// Add a cubic Bezier from the current point.
    #[allow(clippy::too_many_arguments)]
    pub fn curve4(
        &mut self,
        x_ctrl1: f64,
        y_ctrl1: f64,
        x_ctrl2: f64,
        y_ctrl2: f64,
        x_to: f64,
        y_to: f64,
    ) {
        self.cmds.push(PathCmd::Curve4 {
            ctrl1: PointD::new(x_ctrl1, y_ctrl1),
            ctrl2: PointD::new(x_ctrl2, y_ctrl2),
            to: PointD::new(x_to, y_to),
        });
    }

    /// Close the current sub-path.
    pub fn close_polygon(&mut self) {
        self.cmds.push(PathCmd::Close);
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn commands(&self) -> &[PathCmd] {
        &self.cmds
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCmd> {
        self.cmds.iter()
    }

    /// Axis-aligned bounding box over all on-curve and control points,
    /// or `None` for an empty outline. Control points only ever widen the
    /// box, which is the conservative direction for culling.
    pub fn bounding_rect(&self) -> Option<RectD> {
        let mut r: Option<RectD> = None;
        let mut add = |p: PointD| match &mut r {
            None => r = Some(RectD::new(p.x, p.y, p.x, p.y)),
            Some(r) => {
                if p.x < r.x1 {
                    r.x1 = p.x;
                }
                if p.y < r.y1 {
                    r.y1 = p.y;
                }
                if p.x > r.x2 {
                    r.x2 = p.x;
                }
                if p.y > r.y2 {
                    r.y2 = p.y;
                }
            }
        };
        for cmd in &self.cmds {
            match *cmd {
                PathCmd::MoveTo(p) | PathCmd::LineTo(p) => add(p),
                PathCmd::Curve3 { ctrl, to } => {
                    add(ctrl);
                    add(to);
                }
                PathCmd::Curve4 { ctrl1, ctrl2, to } => {
                    add(ctrl1);
                    add(ctrl2);
                    add(to);
                }
                PathCmd::Close => {}
            }
        }
        r
    }
}

impl<'a> IntoIterator for &'a Outline {
    type Item = &'a PathCmd;
    type IntoIter = std::slice::Iter<'a, PathCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.cmds.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
