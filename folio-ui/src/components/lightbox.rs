//! Lightbox overlay view
//!
//! Always rendered; the `active` class and `aria-hidden` follow
//! `frame.visible`. Every interaction is reported as a [`LightboxInput`];
//! state changes belong to the controller.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use folio_common::gallery::{LightboxFrame, LightboxInput, SwipeTracker};
use dioxus::prelude::*;

/// Lightbox overlay (pure, props-based)
#[component]
pub fn LightboxView(
    /// Render model produced by the controller
    frame: LightboxFrame,
    /// Called for every user interaction with the overlay
    on_input: EventHandler<LightboxInput>,
    /// Horizontal travel required for a swipe
    swipe_threshold: f64,
) -> Element {
    let mut swipe = use_signal(|| SwipeTracker::new(swipe_threshold));

    let overlay_class = if frame.visible {
        "lightbox active"
    } else {
        "lightbox"
    };
    let src = frame.image_src.clone().unwrap_or_default();

    rsx! {
        div {
            id: "lightbox",
            class: overlay_class,
            role: "dialog",
            aria_modal: "true",
            aria_hidden: frame.aria_hidden(),
            // Overlay background and content wrapper both count as backdrop
            onclick: move |_| on_input.call(LightboxInput::Backdrop),
            ontouchstart: move |evt: TouchEvent| {
                if let Some(touch) = evt.touches_changed().first() {
                    swipe.write().touch_start(touch.screen_coordinates().x);
                }
            },
            ontouchend: move |evt: TouchEvent| {
                let end_x = match evt.touches_changed().first() {
                    Some(touch) => touch.screen_coordinates().x,
                    None => return,
                };
                if let Some(direction) = swipe.write().touch_end(end_x) {
                    on_input.call(LightboxInput::Swipe(direction));
                }
            },

            button {
                class: "lightbox-close",
                aria_label: "Close gallery",
                onclick: move |e| {
                    e.stop_propagation();
                    on_input.call(LightboxInput::CloseButton);
                },
                XIcon { class: "icon-lg" }
            }

            button {
                class: "lightbox-prev",
                aria_label: "Previous image",
                onclick: move |e| {
                    e.stop_propagation();
                    on_input.call(LightboxInput::PrevButton);
                },
                ChevronLeftIcon { class: "icon-lg", stroke_width: "1.5" }
            }

            div { class: "lightbox-content",
                img {
                    id: "lightbox-img",
                    src: "{src}",
                    alt: "Gallery image {frame.current} of {frame.total}",
                    onclick: move |e| e.stop_propagation(),
                }
            }

            button {
                class: "lightbox-next",
                aria_label: "Next image",
                onclick: move |e| {
                    e.stop_propagation();
                    on_input.call(LightboxInput::NextButton);
                },
                ChevronRightIcon { class: "icon-lg", stroke_width: "1.5" }
            }

            div {
                class: "lightbox-counter",
                onclick: move |e| e.stop_propagation(),
                span { id: "lightbox-current", "{frame.current}" }
                " / "
                span { id: "lightbox-total", "{frame.total}" }
            }

            div {
                id: "lightbox-dots",
                class: "lightbox-dots",
                onclick: move |e| e.stop_propagation(),
                for (i , active) in frame.dots.iter().copied().enumerate() {
                    button {
                        key: "{i}",
                        class: if active { "lightbox-dot active" } else { "lightbox-dot" },
                        aria_label: "Show image {i + 1}",
                        aria_current: if active { "true" } else { "false" },
                        onclick: move |e| {
                            e.stop_propagation();
                            on_input.call(LightboxInput::Dot(i));
                        },
                    }
                }
            }
        }
    }
}
