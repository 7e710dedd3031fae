//! Character-by-character text reveal

/// Delay before the first character appears
pub const TYPING_START_DELAY_MS: u64 = 500;
/// Delay between characters
pub const TYPING_SPEED_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    revealed: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveal one more character. Returns false once the text is complete.
    pub fn advance(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.revealed += 1;
        true
    }

    pub fn is_done(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_step() {
        let mut tw = Typewriter::new("Rust");
        assert_eq!(tw.visible_text(), "");
        assert!(tw.advance());
        assert_eq!(tw.visible_text(), "R");
        while tw.advance() {}
        assert_eq!(tw.visible_text(), "Rust");
        assert!(tw.is_done());
        assert!(!tw.advance());
    }

    #[test]
    fn test_multibyte_text() {
        let mut tw = Typewriter::new("héllo");
        tw.advance();
        tw.advance();
        assert_eq!(tw.visible_text(), "hé");
    }

    #[test]
    fn test_empty_text_is_done() {
        assert!(Typewriter::new("").is_done());
    }
}
