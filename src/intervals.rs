//! Interval merge and negate — the sweep half of skip-ink.
//!
//! One-dimensional half-open intervals on a single axis. `merge` is a
//! pure union (overlaps collapse to one covering span, multiplicity is
//! not counted); `negate` tiles the complement within a stated domain.
//! Both are the whole of the decoration interval engine; the offset
//! machinery is deliberately not involved.

// ============================================================================
// Interval
// ============================================================================

/// A half-open interval [start, start + length).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Interval {
    pub start: f64,
    pub length: f64,
}

impl Interval {
    pub fn new(start: f64, length: f64) -> Self {
        Self { start, length }
    }

    pub fn end(&self) -> f64 {
        self.start + self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length <= 0.0
    }
}

// ============================================================================
// Merge
// ============================================================================

/// Union a set of intervals into a sorted, pairwise-disjoint set.
///
/// Sweep over boundary events (+1 at each start, -1 at each end, deltas
/// summed at coinciding coordinates) tracking a depth counter; a span is
/// recorded from each 0→positive transition to the next positive→0
/// transition. Abutting intervals fuse because their touching boundaries
/// cancel. Empty intervals contribute nothing.
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    let mut events: Vec<(f64, i32)> = Vec::with_capacity(intervals.len() * 2);
    for iv in intervals {
        if !iv.is_empty() {
            events.push((iv.start, 1));
            events.push((iv.end(), -1));
        }
    }
    events.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut out = Vec::new();
    let mut depth = 0;
    let mut span_start = 0.0;
    let mut i = 0;
    while i < events.len() {
        let x = events[i].0;
        let mut delta = 0;
        while i < events.len() && events[i].0 == x {
            delta += events[i].1;
            i += 1;
        }
        if delta == 0 {
            continue;
        }
        let next = depth + delta;
        if depth == 0 && next > 0 {
            span_start = x;
        } else if depth > 0 && next == 0 {
            out.push(Interval::new(span_start, x - span_start));
        }
        depth = next;
    }
    out
}

// ============================================================================
// Negate
// ============================================================================

/// The gaps between consecutive merged intervals within the domain
/// [domain_start, domain_start + domain_length), including the leading
/// and trailing gap. Gaps may be zero-length. The input must be sorted
/// and disjoint (`merge` output) and lie within the domain.
pub fn negate(merged: &[Interval], domain_start: f64, domain_length: f64) -> Vec<Interval> {
    let mut out = Vec::with_capacity(merged.len() + 1);
    let mut cursor = domain_start;
    for iv in merged {
        out.push(Interval::new(cursor, iv.start - cursor));
        cursor = iv.end();
    }
    out.push(Interval::new(cursor, domain_start + domain_length - cursor));
    out
}

// ============================================================================
// Tests
// ============================================================================
