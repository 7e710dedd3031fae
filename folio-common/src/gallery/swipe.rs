/// Minimum horizontal travel, in pixels, for a touch to count as a swipe
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// Direction the finger travelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved toward smaller x (advance)
    Left,
    /// Finger moved toward larger x (go back)
    Right,
}

/// Classify a touch from its start and end x coordinates.
///
/// Travel must strictly exceed `threshold`.
pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    let diff = start_x - end_x;
    if diff.abs() <= threshold {
        return None;
    }
    if diff > 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

/// Tracks a single touch between `touchstart` and `touchend`
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start_x: Option<f64>,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            start_x: None,
            threshold,
        }
    }

    pub fn touch_start(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Finish the touch. Returns `None` for short travel or a
    /// `touchend` without a matching `touchstart`.
    pub fn touch_end(&mut self, x: f64) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        classify_swipe(start, x, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_px_left_is_swipe() {
        assert_eq!(
            classify_swipe(200.0, 140.0, SWIPE_THRESHOLD_PX),
            Some(SwipeDirection::Left)
        );
    }

    #[test]
    fn test_thirty_px_is_noop() {
        assert_eq!(classify_swipe(200.0, 170.0, SWIPE_THRESHOLD_PX), None);
        assert_eq!(classify_swipe(170.0, 200.0, SWIPE_THRESHOLD_PX), None);
    }

    #[test]
    fn test_exact_threshold_is_noop() {
        assert_eq!(classify_swipe(100.0, 50.0, SWIPE_THRESHOLD_PX), None);
    }

    #[test]
    fn test_rightward_swipe() {
        assert_eq!(
            classify_swipe(10.0, 90.0, SWIPE_THRESHOLD_PX),
            Some(SwipeDirection::Right)
        );
    }

    #[test]
    fn test_tracker_consumes_start() {
        let mut tracker = SwipeTracker::default();
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(240.0), Some(SwipeDirection::Left));
        // No pending touch anymore
        assert_eq!(tracker.touch_end(0.0), None);
    }

    #[test]
    fn test_tracker_custom_threshold() {
        let mut tracker = SwipeTracker::new(100.0);
        tracker.touch_start(300.0);
        assert_eq!(tracker.touch_end(240.0), None);
    }
}
