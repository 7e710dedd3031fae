//! Navigation math: anchor targets, navbar shadow, active-section probing

/// Distance below the viewport top used to probe for the active section
pub const NAV_PROBE_OFFSET_PX: f64 = 100.0;

/// Scroll offset past which the navbar gets its shadow
pub const NAVBAR_SHADOW_THRESHOLD_PX: f64 = 50.0;

/// Ids of the sections the page renders, in document order
pub const PAGE_SECTION_IDS: [&str; 6] = [
    "home",
    "about",
    "projects",
    "skills",
    "experience",
    "contact",
];

/// Document-order position of a rendered section.
pub fn page_position(section_id: &str) -> Option<usize> {
    PAGE_SECTION_IDS.iter().position(|id| *id == section_id)
}

/// Vertical extent of a page section
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Section id an in-page anchor points at. `"#"` alone and non-fragment
/// hrefs have no target.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a section's top just below the fixed navbar.
pub fn scroll_target(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height
}

pub fn navbar_scrolled(scroll_top: f64, threshold: f64) -> bool {
    scroll_top > threshold
}

/// Section containing `scroll_y + probe_offset`. Later sections win on overlap.
pub fn active_section(scroll_y: f64, probe_offset: f64, sections: &[SectionBounds]) -> Option<&str> {
    let probe = scroll_y + probe_offset;
    sections
        .iter()
        .rev()
        .find(|s| s.contains(probe))
        .map(|s| s.id.as_str())
}

/// Active-link state. Keeps the last highlight when the probe falls between
/// sections.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavHighlight {
    active: Option<String>,
}

impl NavHighlight {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }

    /// Recompute from the current scroll position. Returns whether the
    /// highlight changed.
    pub fn update(&mut self, scroll_y: f64, probe_offset: f64, sections: &[SectionBounds]) -> bool {
        let Some(id) = active_section(scroll_y, probe_offset, sections) else {
            return false;
        };
        if self.is_active(id) {
            return false;
        }
        self.active = Some(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 600.0),
            SectionBounds::new("about", 600.0, 400.0),
            SectionBounds::new("projects", 1000.0, 800.0),
        ]
    }

    #[test]
    fn test_page_position() {
        assert_eq!(page_position("home"), Some(0));
        assert_eq!(page_position("contact"), Some(5));
        assert_eq!(page_position("hom"), None);
    }

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("/resume.pdf"), None);
    }

    #[test]
    fn test_scroll_target_subtracts_navbar() {
        assert_eq!(scroll_target(1000.0, 64.0), 936.0);
    }

    #[test]
    fn test_navbar_shadow_threshold_is_strict() {
        assert!(!navbar_scrolled(50.0, NAVBAR_SHADOW_THRESHOLD_PX));
        assert!(navbar_scrolled(51.0, NAVBAR_SHADOW_THRESHOLD_PX));
    }

    #[test]
    fn test_active_section_uses_probe_offset() {
        let s = sections();
        assert_eq!(active_section(0.0, NAV_PROBE_OFFSET_PX, &s), Some("home"));
        // 500 + 100 lands on the top edge of about
        assert_eq!(active_section(500.0, NAV_PROBE_OFFSET_PX, &s), Some("about"));
        assert_eq!(active_section(950.0, NAV_PROBE_OFFSET_PX, &s), Some("projects"));
        assert_eq!(active_section(5000.0, NAV_PROBE_OFFSET_PX, &s), None);
    }

    #[test]
    fn test_last_overlapping_section_wins() {
        let s = vec![
            SectionBounds::new("a", 0.0, 500.0),
            SectionBounds::new("b", 200.0, 500.0),
        ];
        assert_eq!(active_section(200.0, 100.0, &s), Some("b"));
    }

    #[test]
    fn test_highlight_keeps_previous_between_sections() {
        let s = vec![
            SectionBounds::new("a", 0.0, 200.0),
            SectionBounds::new("b", 400.0, 200.0),
        ];
        let mut highlight = NavHighlight::default();
        assert!(highlight.update(0.0, 100.0, &s));
        assert_eq!(highlight.active(), Some("a"));
        // Probe at 250 matches nothing
        assert!(!highlight.update(150.0, 100.0, &s));
        assert_eq!(highlight.active(), Some("a"));
        assert!(highlight.update(350.0, 100.0, &s));
        assert!(highlight.is_active("b"));
        assert!(!highlight.update(360.0, 100.0, &s));
    }
}
