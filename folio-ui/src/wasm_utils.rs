//! WASM utilities for browser interop
//!
//! # Event Listener Cleanup Pattern
//!
//! A JavaScript listener backed by a Rust `Closure` must keep that closure
//! alive while attached. `closure.forget()` leaks it and leaves the listener
//! attached forever, so [`EventListener`] owns the closure and removes the
//! listener in `Drop`:
//!
//! ```ignore
//! // Listener is attached when the EventListener is created
//! let listener = EventListener::on_document(document, "keydown", callback);
//!
//! // Listener is removed when `listener` goes out of scope or is dropped
//! drop(listener);
//! ```
//!
//! With Dioxus, keep listeners in a `Signal` (an `Option` or a `Vec`) and
//! clear it to detach.

use folio_common::nav::SectionBounds;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl EventListener {
    /// Attaches `callback` to `target`.
    pub fn new(
        target: web_sys::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        if let Err(e) =
            target.add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach {event_name} listener: {e:?}");
        }

        Self {
            target,
            event_name,
            callback,
        }
    }

    pub fn on_document(
        document: web_sys::Document,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        Self::new(document.into(), event_name, callback)
    }

    pub fn on_window(
        window: web_sys::Window,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        Self::new(window.into(), event_name, callback)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Read a string property (e.g. `key`) off a raw JS event.
pub fn event_string(event: &JsValue, property: &str) -> Option<String> {
    js_sys::Reflect::get(event, &property.into())
        .ok()
        .and_then(|v| v.as_string())
}

pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

fn html_element(id: &str) -> Option<web_sys::HtmlElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

/// Current vertical scroll offset of the page.
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Smoothly scroll the window to `top`.
pub fn scroll_to_smooth(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Layout offset (`offsetTop`) of the element with `id`.
pub fn offset_top(id: &str) -> Option<f64> {
    html_element(id).map(|el| el.offset_top() as f64)
}

pub fn offset_height(id: &str) -> Option<f64> {
    html_element(id).map(|el| el.offset_height() as f64)
}

/// Document-order bounds of every section present in the page.
pub fn section_bounds(ids: &[String]) -> Vec<SectionBounds> {
    ids.iter()
        .filter_map(|id| {
            let el = html_element(id)?;
            Some(SectionBounds::new(
                id.clone(),
                el.offset_top() as f64,
                el.offset_height() as f64,
            ))
        })
        .collect()
}

/// Viewport-relative rectangle of an element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

pub fn element_rect(id: &str) -> Option<ElementRect> {
    let rect = document()?.get_element_by_id(id)?.get_bounding_client_rect();
    Some(ElementRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// Disable or restore page scrolling via `body.style.overflow`.
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        tracing::warn!("Failed to update scroll lock: {e:?}");
    }
}

/// Add or remove a class on `<body>`.
pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.class_list().toggle_with_force(class, enabled);
    }
}

/// Add or remove a class on the document root (`<html>`).
pub fn set_root_class(class: &str, enabled: bool) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.class_list().toggle_with_force(class, enabled);
    }
}

/// Whether the system requests a dark color scheme.
pub fn prefers_dark_scheme() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
