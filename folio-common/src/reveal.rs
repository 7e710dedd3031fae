//! Scroll-driven fade-in decisions

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Viewport bottom inset applied before measuring visibility
pub const REVEAL_BOTTOM_MARGIN_PX: f64 = 50.0;
/// Per-item animation delay for timeline entries, in tenths of a second
const TIMELINE_STAGGER_TENTHS: usize = 2;

/// Fraction of an element (`top` relative to the viewport) inside the
/// viewport after shrinking its bottom by `bottom_margin`.
pub fn visible_ratio(top: f64, height: f64, viewport_height: f64, bottom_margin: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    let view_bottom = viewport_height - bottom_margin;
    let overlap = (top + height).min(view_bottom) - top.max(0.0);
    (overlap / height).clamp(0.0, 1.0)
}

pub fn should_reveal(
    top: f64,
    height: f64,
    viewport_height: f64,
    bottom_margin: f64,
    threshold: f64,
) -> bool {
    let ratio = visible_ratio(top, height, viewport_height, bottom_margin);
    ratio > 0.0 && ratio >= threshold
}

/// Initial pass on page load: anything starting above the viewport bottom.
pub fn visible_on_load(top: f64, viewport_height: f64) -> bool {
    top < viewport_height
}

/// CSS `animation-delay` for the `index`-th timeline item.
pub fn stagger_delay(index: usize) -> String {
    let tenths = index * TIMELINE_STAGGER_TENTHS;
    format!("{}.{}s", tenths / 10, tenths % 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fully_visible() {
        assert_eq!(visible_ratio(100.0, 200.0, 800.0, 50.0), 1.0);
    }

    #[test]
    fn test_below_viewport() {
        assert_eq!(visible_ratio(900.0, 200.0, 800.0, 50.0), 0.0);
        assert!(!should_reveal(900.0, 200.0, 800.0, 50.0, REVEAL_THRESHOLD));
    }

    #[test]
    fn test_bottom_margin_shrinks_viewport() {
        // 30px peeks past the raw viewport edge but sits inside the margin
        assert!(!should_reveal(770.0, 200.0, 800.0, REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD));
        // 30 of 200 visible after the margin: 15%
        assert!(should_reveal(720.0, 200.0, 800.0, REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD));
    }

    #[test]
    fn test_threshold() {
        // 10 of 200 visible: 5%
        assert!(!should_reveal(740.0, 200.0, 800.0, 50.0, REVEAL_THRESHOLD));
    }

    #[test]
    fn test_visible_on_load() {
        assert!(visible_on_load(799.0, 800.0));
        assert!(!visible_on_load(800.0, 800.0));
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.6s");
        assert_eq!(stagger_delay(7), "1.4s");
    }
}
