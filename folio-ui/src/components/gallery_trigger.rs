//! Gallery trigger button
//!
//! Carries its image list serialized in a `data-gallery` attribute. On click
//! the attribute value is parsed back; a malformed value aborts the open.

use crate::components::icons::ImageIcon;
use folio_common::gallery::{parse_gallery, GalleryError};
use dioxus::prelude::*;

#[component]
pub fn GalleryTrigger(
    /// JSON array of image URLs, as stored in `data-gallery`
    gallery: String,
    /// Called with the parsed image list
    on_open: EventHandler<Vec<String>>,
    #[props(default = "View screenshots")] label: &'static str,
) -> Element {
    let raw = gallery.clone();

    rsx! {
        button {
            class: "lightbox-trigger",
            r#type: "button",
            "data-gallery": "{gallery}",
            onclick: move |_| match parse_gallery(&raw) {
                Ok(images) => on_open.call(images),
                Err(e @ GalleryError::MalformedTrigger(_)) => {
                    tracing::error!("Gallery trigger has unreadable image list: {e}");
                }
                Err(e) => tracing::error!("Gallery trigger failed: {e}"),
            },
            ImageIcon { class: "icon" }
            span { "{label}" }
        }
    }
}
