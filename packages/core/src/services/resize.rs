//! Column-Span Resize Controller
//!
//! Converts horizontal pointer drag distance into a discrete column span on
//! the 12-unit grid. Pointer-down records the starting x and the module's
//! current span; every move recomputes
//! `start_span + round(dx / (container_width / 12))` and snaps it to the
//! fixed set {3, 4, 6, 8, 12}. The caller applies the returned span live on
//! each move, so pointer-up needs no extra commit step.

use crate::models::SPAN_SNAP_SET;

/// Number of grid columns a full-width module spans.
pub const GRID_COLUMNS: f64 = 12.0;

/// Snap a raw span to the nearest member of {3, 4, 6, 8, 12}.
///
/// Nearest by absolute difference; a tie (e.g. a raw 7 between 6 and 8)
/// resolves to the first candidate in ascending iteration order, so
/// `snap_span(7) == 6`. Idempotent: snapping an already-snapped value
/// returns it unchanged.
pub fn snap_span(raw: i64) -> i64 {
    let mut best = SPAN_SNAP_SET[0];
    let mut best_distance = (raw - best).abs();
    for candidate in SPAN_SNAP_SET {
        let distance = (raw - candidate).abs();
        // Strict comparison keeps the first-encountered candidate on ties.
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// One resize gesture: from pointer-down on the handle to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanResize {
    start_x: f64,
    start_span: i64,
}

impl SpanResize {
    /// Record the starting pointer x and the module's current span.
    pub fn begin(start_x: f64, start_span: i64) -> Self {
        Self {
            start_x,
            start_span,
        }
    }

    /// Compute the snapped span for the current pointer position.
    ///
    /// `container_width` is the pixel width of the full 12-column grid. A
    /// zero or negative width cannot produce a column delta and yields the
    /// starting span (snapped).
    pub fn update(&self, current_x: f64, container_width: f64) -> i64 {
        if container_width <= 0.0 {
            return snap_span(self.start_span);
        }
        let column_width = container_width / GRID_COLUMNS;
        let delta_columns = ((current_x - self.start_x) / column_width).round() as i64;
        snap_span(self.start_span + delta_columns)
    }
}
