//! # skipink
//!
//! Skip-ink text decoration geometry: given a glyph outline and an
//! underline (or strike-through) band, compute the fill shapes that
//! paint the band everywhere the glyph ink is not.
//!
//! The crate is a pure computational library — no rasterization, no
//! I/O, no shared state. It features:
//!
//! - A tagged path-command vocabulary (move/line/quad/cubic/close)
//! - Adaptive curve flattening with an explicit tolerance
//! - Outline offsetting with bevel, miter, and round joins
//! - Boolean region algebra (union, intersect, subtract, xor) with
//!   non-zero winding cleanup, backed by `i_overlay`
//! - A one-dimensional interval engine (merge and negate)
//! - Three decoration strategies: straight band, largest-gap
//!   rectangles, and offset-mask regions
//!
//! ## Pipeline
//!
//! 1. **Outline** — the glyph as an immutable command sequence
//! 2. **Flatten** — curves subdivided into closed polygons
//! 3. **Offset / Area** — silhouette expansion and boolean algebra
//! 4. **Intervals / Decoration** — gap computation and fill shapes

// Foundation types and math
pub mod basics;
pub mod curves;
pub mod math;

// Outlines and flattening
pub mod flatten;
pub mod outline;

// Region algebra and offsetting
pub mod area;
pub mod offset;

// Decoration
pub mod decoration;
pub mod intervals;
