//! Scroll reveal wrapper
//!
//! Each instance measures itself on scroll and drops its listener once
//! revealed; the `visible` class is sticky.

use crate::wasm_utils::{element_rect, viewport_height, EventListener};
use folio_common::reveal::{should_reveal, visible_on_load};
use dioxus::prelude::*;

#[component]
pub fn FadeIn(
    /// Unique DOM id used for measuring
    id: String,
    threshold: f64,
    bottom_margin: f64,
    /// CSS `animation-delay` for staggered items
    #[props(default)]
    delay: Option<String>,
    #[props(default = "")] class: &'static str,
    children: Element,
) -> Element {
    let mut revealed = use_signal(|| false);
    let mut scroll_listener: Signal<Option<EventListener>> = use_signal(|| None);
    let id_for_effect = id.clone();

    use_effect(move || {
        if revealed() {
            scroll_listener.set(None);
            return;
        }
        if scroll_listener.peek().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };

        // Initial pass once mounted
        if let Some(rect) = element_rect(&id_for_effect) {
            if visible_on_load(rect.top, viewport_height()) {
                revealed.set(true);
                return;
            }
        }

        let measure_id = id_for_effect.clone();
        let listener = EventListener::on_window(window, "scroll", move |_| {
            let Some(rect) = element_rect(&measure_id) else {
                return;
            };
            if should_reveal(rect.top, rect.height, viewport_height(), bottom_margin, threshold) {
                revealed.set(true);
            }
        });
        scroll_listener.set(Some(listener));
    });

    let style = delay
        .as_ref()
        .map(|d| format!("animation-delay: {d}"))
        .unwrap_or_default();

    let wrapper_class = if revealed() {
        format!("fade-in-up visible {class}")
    } else {
        format!("fade-in-up {class}")
    };

    rsx! {
        div {
            id: "{id}",
            class: "{wrapper_class}",
            style: "{style}",
            {children}
        }
    }
}
