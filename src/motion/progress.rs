//! Normalized scroll progress.
//!
//! Progress is the current vertical offset divided by the total scrollable
//! distance of the document, clamped to [0, 1]. The DOM reads live in
//! `motion::hooks`; this module is pure math so it can be tested off-wasm.

pub fn clamp01(value: f64) -> f64 {
    value.clamp(0.0, 1.0)
}

/// Progress of `scroll_top` through a document of `scroll_height` shown in a
/// viewport of `viewport_height`. A document that cannot scroll reports 0.
pub fn page_progress(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() {
        return 0.0;
    }
    clamp01(scroll_top / scrollable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_below_and_above() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.7), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
    }

    #[test]
    fn progress_spans_the_scrollable_distance() {
        // 3000px document in a 1000px viewport: 2000px of travel.
        assert_eq!(page_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(page_progress(500.0, 3000.0, 1000.0), 0.25);
        assert_eq!(page_progress(2000.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        // Rubber-banding can report offsets outside the document.
        assert_eq!(page_progress(-120.0, 3000.0, 1000.0), 0.0);
        assert_eq!(page_progress(2600.0, 3000.0, 1000.0), 1.0);
    }

    #[test]
    fn unscrollable_document_reports_zero() {
        assert_eq!(page_progress(0.0, 800.0, 1000.0), 0.0);
        assert_eq!(page_progress(0.0, 1000.0, 1000.0), 0.0);
    }
}
