pub mod content;
pub mod pages;

use dioxus::prelude::*;
use pages::Portfolio;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let site = use_hook(|| {
        content::load_site().map_err(|e| {
            tracing::error!("Failed to load site config: {e}");
            e.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match site {
            Ok(site) => rsx! {
                Portfolio { site }
            },
            Err(message) => rsx! {
                div { class: "config-error", "Failed to load site: {message}" }
            },
        }
    }
}
