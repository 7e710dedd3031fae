//! Lightbox gallery: session state, controller, input dispatch and triggers

mod controller;
mod error;
mod input;
mod surface;
mod swipe;
mod trigger;

pub use controller::{GallerySession, LightboxController};
pub use error::GalleryError;
pub use input::{command_for, LightboxCommand, LightboxInput, LightboxKey};
pub use surface::{LightboxFrame, LightboxSurface};
pub use swipe::{classify_swipe, SwipeDirection, SwipeTracker, SWIPE_THRESHOLD_PX};
pub use trigger::{encode_gallery, parse_gallery, GALLERY_ATTRIBUTE};
