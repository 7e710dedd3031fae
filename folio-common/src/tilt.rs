//! Project card tilt transform

pub const TILT_DIVISOR: f64 = 20.0;

/// Transform restored when the pointer leaves a card
pub const TILT_RESET: &str = "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Tilt for a pointer at (`x`, `y`) relative to a `width` x `height` card.
    pub fn at(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
        let center_x = width / 2.0;
        let center_y = height / 2.0;
        Self {
            rotate_x: (y - center_y) / divisor,
            rotate_y: (center_x - x) / divisor,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-8px)",
            self.rotate_x, self.rotate_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_flat() {
        let tilt = Tilt::at(100.0, 50.0, 200.0, 100.0, TILT_DIVISOR);
        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn test_corner_tilt() {
        let tilt = Tilt::at(0.0, 100.0, 200.0, 100.0, TILT_DIVISOR);
        assert_eq!(tilt.rotate_x, 2.5);
        assert_eq!(tilt.rotate_y, 5.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(2.5deg) rotateY(5deg) translateY(-8px)"
        );
    }
}
