use tracing::{debug, warn};

use super::input::{command_for, LightboxCommand, LightboxInput};
use super::{GalleryError, LightboxSurface};

/// One open gallery viewing instance.
///
/// `images` is non-empty and `current_index` always indexes into it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GallerySession {
    images: Vec<String>,
    current_index: usize,
}

impl GallerySession {
    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.current_index]
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn next_index(&self) -> usize {
        if self.current_index + 1 == self.images.len() {
            0
        } else {
            self.current_index + 1
        }
    }

    fn prev_index(&self) -> usize {
        if self.current_index == 0 {
            self.images.len() - 1
        } else {
            self.current_index - 1
        }
    }
}

/// Owns at most one gallery session and keeps the injected surface in sync
/// with it.
pub struct LightboxController<S: LightboxSurface> {
    session: Option<GallerySession>,
    surface: S,
}

impl<S: LightboxSurface> LightboxController<S> {
    pub fn new(surface: S) -> Self {
        Self {
            session: None,
            surface,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn session(&self) -> Option<&GallerySession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.current_index)
    }

    /// Open a new session, replacing any existing one.
    ///
    /// Rejects an empty image list or an out-of-range start index without
    /// touching the current state.
    pub fn open(&mut self, images: Vec<String>, start_index: usize) -> Result<(), GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        if start_index >= images.len() {
            return Err(GalleryError::StartOutOfRange {
                index: start_index,
                len: images.len(),
            });
        }

        debug!("Opening lightbox with {} images at {start_index}", images.len());

        self.surface.render_dots(images.len(), start_index);
        self.session = Some(GallerySession {
            images,
            current_index: start_index,
        });
        self.display(start_index);
        self.surface.set_overlay_visible(true);
        self.surface.set_scroll_locked(true);
        Ok(())
    }

    /// Close the current session. Does nothing when already closed.
    pub fn close(&mut self) {
        if self.session.take().is_none() {
            return;
        }
        debug!("Closing lightbox");
        self.surface.set_overlay_visible(false);
        self.surface.set_scroll_locked(false);
    }

    /// Jump directly to `index`.
    pub fn show_image(&mut self, index: usize) -> Result<(), GalleryError> {
        let session = self.session.as_ref().ok_or(GalleryError::NotOpen)?;
        if index >= session.len() {
            return Err(GalleryError::IndexOutOfRange {
                index,
                len: session.len(),
            });
        }
        self.display(index);
        Ok(())
    }

    /// Advance one image, wrapping from the last to the first.
    pub fn next(&mut self) {
        if let Some(index) = self.session.as_ref().map(GallerySession::next_index) {
            self.display(index);
        }
    }

    /// Step back one image, wrapping from the first to the last.
    pub fn prev(&mut self) {
        if let Some(index) = self.session.as_ref().map(GallerySession::prev_index) {
            self.display(index);
        }
    }

    pub fn apply(&mut self, command: LightboxCommand) -> Result<(), GalleryError> {
        match command {
            LightboxCommand::Close => self.close(),
            LightboxCommand::Next => self.next(),
            LightboxCommand::Prev => self.prev(),
            LightboxCommand::Show(index) => self.show_image(index)?,
        }
        Ok(())
    }

    /// Route a raw input through the dispatch table.
    ///
    /// Returns whether the input mapped to a command.
    pub fn dispatch(&mut self, input: LightboxInput) -> bool {
        let Some(command) = command_for(input, self.is_open()) else {
            return false;
        };
        if let Err(e) = self.apply(command) {
            warn!("Ignoring lightbox input {input:?}: {e}");
        }
        true
    }

    /// Caller guarantees an open session and a valid index.
    fn display(&mut self, index: usize) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.current_index = index;
        let total = session.len();
        self.surface.set_image(&session.images[index]);
        self.surface.set_counter(index + 1, total);
        self.surface.set_active_dot(index);
    }
}
