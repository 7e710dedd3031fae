//! folio-common - Pure interaction logic for the portfolio page
//!
//! Nothing here touches the DOM. Browser bindings live in `folio-ui`.

pub mod config;
pub mod debounce;
pub mod gallery;
pub mod menu;
pub mod nav;
pub mod reveal;
pub mod theme;
pub mod tilt;
pub mod typewriter;

pub use config::{ConfigError, InteractionConfig, SiteConfig};
pub use debounce::{DebounceTicket, Debouncer};
pub use gallery::{GalleryError, LightboxController, LightboxFrame, LightboxInput, LightboxSurface};
pub use menu::{MenuIcon, MobileMenu};
pub use nav::{NavHighlight, SectionBounds};
pub use theme::{PreferenceStore, Theme, ThemePreference};
pub use tilt::Tilt;
pub use typewriter::Typewriter;
