pub const SCROLLED_THRESHOLD: f64 = 80.0;
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;
pub const ANCHOR_OFFSET: f64 = 70.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollEffects {
    pub navbar_scrolled: bool,
    pub progress_percent: f64,
    pub show_scroll_top: bool,
}

impl ScrollEffects {
    pub fn compute(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            navbar_scrolled: scroll_y > SCROLLED_THRESHOLD,
            progress_percent: reading_progress(scroll_y, document_height, viewport_height),
            show_scroll_top: scroll_y > SCROLL_TOP_THRESHOLD,
        }
    }

    pub fn progress_width(&self) -> String {
        format!("{}%", self.progress_percent)
    }
}

fn reading_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }

    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Coalesces scroll bursts into one recomputation per animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

/// Fragment selector for an in-page link, or `None` for bare `#` and empty hrefs.
pub fn anchor_selector(href: &str) -> Option<&str> {
    let href = href.trim();
    if href.len() <= 1 || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

pub fn anchor_scroll_top(target_offset_top: f64) -> f64 {
    target_offset_top - ANCHOR_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        let at = ScrollEffects::compute(80.0, 2000.0, 800.0);
        assert!(!at.navbar_scrolled);
        assert!(ScrollEffects::compute(80.5, 2000.0, 800.0).navbar_scrolled);

        assert!(!ScrollEffects::compute(500.0, 2000.0, 800.0).show_scroll_top);
        assert!(ScrollEffects::compute(501.0, 2000.0, 800.0).show_scroll_top);
    }

    #[test]
    fn progress_is_fraction_of_scrollable_height() {
        let effects = ScrollEffects::compute(300.0, 1000.0, 400.0);
        assert_eq!(effects.progress_percent, 50.0);
        assert_eq!(effects.progress_width(), "50%");
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(ScrollEffects::compute(900.0, 1000.0, 400.0).progress_percent, 100.0);
        assert_eq!(ScrollEffects::compute(-20.0, 1000.0, 400.0).progress_percent, 0.0);
    }

    #[test]
    fn short_document_reports_no_progress() {
        assert_eq!(ScrollEffects::compute(0.0, 600.0, 800.0).progress_percent, 0.0);
        assert_eq!(ScrollEffects::compute(0.0, 800.0, 800.0).progress_percent, 0.0);
    }

    #[test]
    fn gate_allows_one_frame_per_burst() {
        let mut gate = FrameGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());

        gate.complete();
        assert!(gate.request());
    }

    #[test]
    fn anchors() {
        assert_eq!(anchor_selector("#events"), Some("#events"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector(""), None);
        assert_eq!(anchor_selector("/tickets#faq"), None);
        assert_eq!(anchor_scroll_top(1270.0), 1200.0);
    }
}
