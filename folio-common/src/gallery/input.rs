use super::SwipeDirection;

/// Keys the lightbox reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "Escape" => LightboxKey::Escape,
            "ArrowLeft" => LightboxKey::ArrowLeft,
            "ArrowRight" => LightboxKey::ArrowRight,
            _ => LightboxKey::Other,
        }
    }
}

/// Raw user input reaching the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxInput {
    CloseButton,
    PrevButton,
    NextButton,
    /// Click on the overlay background or content wrapper, not the image
    Backdrop,
    Key(LightboxKey),
    Swipe(SwipeDirection),
    Dot(usize),
}

/// Controller operation an input resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Next,
    Prev,
    Show(usize),
}

/// Dispatch table from input to command.
///
/// Keyboard input is only honoured while a session is open.
pub fn command_for(input: LightboxInput, is_open: bool) -> Option<LightboxCommand> {
    match input {
        LightboxInput::CloseButton | LightboxInput::Backdrop => Some(LightboxCommand::Close),
        LightboxInput::PrevButton => Some(LightboxCommand::Prev),
        LightboxInput::NextButton => Some(LightboxCommand::Next),
        LightboxInput::Dot(index) => Some(LightboxCommand::Show(index)),
        LightboxInput::Swipe(SwipeDirection::Left) => Some(LightboxCommand::Next),
        LightboxInput::Swipe(SwipeDirection::Right) => Some(LightboxCommand::Prev),
        LightboxInput::Key(_) if !is_open => None,
        LightboxInput::Key(LightboxKey::Escape) => Some(LightboxCommand::Close),
        LightboxInput::Key(LightboxKey::ArrowRight) => Some(LightboxCommand::Next),
        LightboxInput::Key(LightboxKey::ArrowLeft) => Some(LightboxCommand::Prev),
        LightboxInput::Key(LightboxKey::Other) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(LightboxKey::from_key_name("Escape"), LightboxKey::Escape);
        assert_eq!(LightboxKey::from_key_name("ArrowLeft"), LightboxKey::ArrowLeft);
        assert_eq!(LightboxKey::from_key_name("ArrowRight"), LightboxKey::ArrowRight);
        assert_eq!(LightboxKey::from_key_name("Enter"), LightboxKey::Other);
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        for key in [LightboxKey::Escape, LightboxKey::ArrowLeft, LightboxKey::ArrowRight] {
            assert_eq!(command_for(LightboxInput::Key(key), false), None);
        }
    }

    #[test]
    fn test_controls_map_to_commands() {
        assert_eq!(
            command_for(LightboxInput::CloseButton, true),
            Some(LightboxCommand::Close)
        );
        assert_eq!(
            command_for(LightboxInput::Backdrop, true),
            Some(LightboxCommand::Close)
        );
        assert_eq!(
            command_for(LightboxInput::PrevButton, true),
            Some(LightboxCommand::Prev)
        );
        assert_eq!(
            command_for(LightboxInput::NextButton, true),
            Some(LightboxCommand::Next)
        );
        assert_eq!(
            command_for(LightboxInput::Dot(2), true),
            Some(LightboxCommand::Show(2))
        );
    }

    #[test]
    fn test_swipe_direction_mapping() {
        assert_eq!(
            command_for(LightboxInput::Swipe(SwipeDirection::Left), true),
            Some(LightboxCommand::Next)
        );
        assert_eq!(
            command_for(LightboxInput::Swipe(SwipeDirection::Right), true),
            Some(LightboxCommand::Prev)
        );
    }
}
