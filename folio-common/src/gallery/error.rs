use thiserror::Error;

/// Gallery errors
#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Cannot open a gallery with no images")]
    EmptyGallery,
    #[error("Start index {index} out of range for {len} images")]
    StartOutOfRange { index: usize, len: usize },
    #[error("Image index {index} out of range for {len} images")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("No gallery session is open")]
    NotOpen,
    #[error("Malformed gallery trigger data: {0}")]
    MalformedTrigger(#[from] serde_json::Error),
}
