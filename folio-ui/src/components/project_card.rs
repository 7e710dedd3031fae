//! Project card with pointer tilt and optional screenshot gallery

use crate::components::icons::ExternalLinkIcon;
use crate::components::GalleryTrigger;
use crate::wasm_utils::element_rect;
use folio_common::config::ProjectConfig;
use folio_common::gallery::encode_gallery;
use folio_common::tilt::{Tilt, TILT_RESET};
use dioxus::prelude::*;

/// Project card data
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCard {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub gallery: Vec<String>,
    pub link: Option<String>,
}

impl From<&ProjectConfig> for ProjectCard {
    fn from(project: &ProjectConfig) -> Self {
        ProjectCard {
            title: project.title.clone(),
            description: project.description.clone(),
            tags: project.tags.clone(),
            gallery: project.gallery.clone(),
            link: project.link.clone(),
        }
    }
}

#[component]
pub fn ProjectCardView(
    /// Unique DOM id, used to measure the card for tilting
    card_id: String,
    project: ProjectCard,
    tilt_divisor: f64,
    on_open_gallery: EventHandler<Vec<String>>,
) -> Element {
    let mut transform = use_signal(|| TILT_RESET.to_string());
    let measure_id = card_id.clone();
    let gallery_attr = encode_gallery(&project.gallery);

    rsx! {
        article {
            id: "{card_id}",
            class: "project-card",
            style: "transform: {transform}",
            onmousemove: move |evt: MouseEvent| {
                let Some(rect) = element_rect(&measure_id) else {
                    return;
                };
                let point = evt.client_coordinates();
                let tilt = Tilt::at(
                    point.x - rect.left,
                    point.y - rect.top,
                    rect.width,
                    rect.height,
                    tilt_divisor,
                );
                transform.set(tilt.transform());
            },
            onmouseleave: move |_| transform.set(TILT_RESET.to_string()),

            h3 { class: "project-title", "{project.title}" }
            p { class: "project-description", "{project.description}" }
            if !project.tags.is_empty() {
                ul { class: "project-tags",
                    for tag in project.tags.iter() {
                        li { key: "{tag}", class: "project-tag", "{tag}" }
                    }
                }
            }
            div { class: "project-actions",
                if !project.gallery.is_empty() {
                    GalleryTrigger {
                        gallery: gallery_attr,
                        on_open: move |images| on_open_gallery.call(images),
                    }
                }
                if let Some(link) = project.link.clone() {
                    a {
                        class: "project-link",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        ExternalLinkIcon { class: "icon" }
                        span { "Source" }
                    }
                }
            }
        }
    }
}
