//! Hero text typing effect

use crate::wasm_utils::sleep_ms;
use folio_common::typewriter::Typewriter;
use dioxus::prelude::*;

/// Reveals `text` one character at a time after `start_delay_ms`.
#[component]
pub fn TypingText(
    text: String,
    start_delay_ms: u64,
    speed_ms: u64,
    #[props(default = "text-accent")] class: &'static str,
) -> Element {
    let initial = text.clone();
    let mut typewriter = use_signal(move || Typewriter::new(&initial));

    use_future(move || async move {
        sleep_ms(start_delay_ms).await;
        while typewriter.write().advance() {
            sleep_ms(speed_ms).await;
        }
        tracing::debug!("Typing effect finished");
    });

    let visible = typewriter.read().visible_text();

    rsx! {
        span { class, aria_label: "{text}", "{visible}" }
    }
}
