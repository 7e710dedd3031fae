/// Display sink the lightbox controller renders into.
///
/// Implementations own the overlay's visual state (image element, counter,
/// indicator dots, visibility) and the page scroll lock. The controller
/// never reads back from a surface.
pub trait LightboxSurface {
    /// Rebuild the indicator dots: `count` dots, the one at `active` marked.
    fn render_dots(&mut self, count: usize, active: usize);

    /// Mark the dot at `index` active and clear every other dot.
    fn set_active_dot(&mut self, index: usize);

    /// Display the image at `src`.
    fn set_image(&mut self, src: &str);

    /// Update the one-based `current / total` counter.
    fn set_counter(&mut self, current: usize, total: usize);

    /// Show or hide the overlay, including its `aria-hidden` state.
    fn set_overlay_visible(&mut self, visible: bool);

    /// Lock or restore page scrolling behind the overlay.
    fn set_scroll_locked(&mut self, locked: bool);
}

/// In-memory render model of the lightbox overlay.
///
/// Used directly by the Dioxus view, which renders from it, and by tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LightboxFrame {
    pub visible: bool,
    pub scroll_locked: bool,
    pub image_src: Option<String>,
    /// One-based position of the displayed image
    pub current: usize,
    pub total: usize,
    /// Active flag per indicator dot
    pub dots: Vec<bool>,
}

impl LightboxFrame {
    /// Value for the overlay's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        if self.visible {
            "false"
        } else {
            "true"
        }
    }

    /// Index of the active dot, if exactly one is active.
    pub fn active_dot(&self) -> Option<usize> {
        let mut active = self.dots.iter().enumerate().filter(|(_, a)| **a);
        match (active.next(), active.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }

    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.current, self.total)
    }
}

impl LightboxSurface for LightboxFrame {
    fn render_dots(&mut self, count: usize, active: usize) {
        self.dots = (0..count).map(|i| i == active).collect();
    }

    fn set_active_dot(&mut self, index: usize) {
        for (i, dot) in self.dots.iter_mut().enumerate() {
            *dot = i == index;
        }
    }

    fn set_image(&mut self, src: &str) {
        self.image_src = Some(src.to_string());
    }

    fn set_counter(&mut self, current: usize, total: usize) {
        self.current = current;
        self.total = total;
    }

    fn set_overlay_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dots_marks_single_active() {
        let mut frame = LightboxFrame::default();
        frame.render_dots(4, 2);
        assert_eq!(frame.dots, vec![false, false, true, false]);
        assert_eq!(frame.active_dot(), Some(2));
    }

    #[test]
    fn test_set_active_dot_clears_others() {
        let mut frame = LightboxFrame::default();
        frame.render_dots(3, 0);
        frame.set_active_dot(1);
        assert_eq!(frame.dots, vec![false, true, false]);
    }

    #[test]
    fn test_aria_hidden_follows_visibility() {
        let mut frame = LightboxFrame::default();
        assert_eq!(frame.aria_hidden(), "true");
        frame.set_overlay_visible(true);
        assert_eq!(frame.aria_hidden(), "false");
    }

    #[test]
    fn test_active_dot_none_when_ambiguous() {
        let frame = LightboxFrame {
            dots: vec![true, true],
            ..Default::default()
        };
        assert_eq!(frame.active_dot(), None);
    }
}
