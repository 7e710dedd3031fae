//! Shared UI components

pub mod fade_in;
pub mod gallery_trigger;
pub mod icons;
pub mod lightbox;
pub mod navbar;
pub mod project_card;
pub mod typing_text;

pub use fade_in::FadeIn;
pub use gallery_trigger::GalleryTrigger;
pub use icons::{
    BarsIcon, ChevronLeftIcon, ChevronRightIcon, ExternalLinkIcon, ImageIcon, MoonIcon, SunIcon,
    XIcon,
};
pub use lightbox::LightboxView;
pub use navbar::{nav_link_class, NavLink, NavbarView};
pub use project_card::{ProjectCard, ProjectCardView};
pub use typing_text::TypingText;
