//! Portfolio page: owns the page-wide state and wires browser events to it
//!
//! Document and window listeners are held in a signal so they detach when
//! the page unmounts.

use std::time::Duration;

use dioxus::prelude::*;
use folio_common::config::SiteConfig;
use folio_common::debounce::Debouncer;
use folio_common::gallery::{LightboxController, LightboxFrame, LightboxInput, LightboxKey};
use folio_common::menu::MobileMenu;
use folio_common::nav::{anchor_target, navbar_scrolled, scroll_target, NavHighlight};
use folio_common::theme::{Theme, ThemePreference, DARK_CLASS};
use folio_ui::storage::LocalStorage;
use folio_ui::wasm_utils::{
    document, event_string, offset_height, offset_top, prefers_dark_scheme, scroll_to_smooth,
    scroll_y, section_bounds, set_body_class, set_body_scroll_locked, set_root_class, EventListener,
};
use folio_ui::{LightboxView, NavLink, NavbarView};
use gloo_timers::callback::Timeout;
use tracing::{debug, error, info};

use super::sections::{
    AboutSection, ContactSection, ExperienceSection, Footer, HeroSection, ProjectsSection,
    SkillsSection,
};

type Lightbox = LightboxController<LightboxFrame>;

const KEYBOARD_NAVIGATION_CLASS: &str = "keyboard-navigation";

fn apply_theme(theme: Theme) {
    ThemePreference::new(LocalStorage).apply(theme);
    set_root_class(DARK_CLASS, theme.is_dark());
}

/// Recompute the highlighted nav link, writing the signal only on change.
fn refresh_highlight(mut highlight: Signal<NavHighlight>, section_ids: &[String], probe: f64) {
    let bounds = section_bounds(section_ids);
    let mut next = highlight.peek().clone();
    if next.update(scroll_y(), probe, &bounds) {
        debug!("Active section: {:?}", next.active());
        highlight.set(next);
    }
}

#[component]
pub fn Portfolio(site: SiteConfig) -> Element {
    let interaction = site.interaction.clone();
    let section_ids: Vec<String> = site.sections.iter().map(|s| s.id.clone()).collect();

    let mut lightbox: Signal<Lightbox> = use_signal(|| LightboxController::new(LightboxFrame::default()));
    let mut theme = use_signal(Theme::default);
    let mut menu = use_signal(MobileMenu::default);
    let mut scrolled = use_signal(|| false);
    let highlight = use_signal(NavHighlight::default);
    let debounce_wait = interaction.scroll_debounce_ms;
    let mut debouncer = use_signal(move || Debouncer::new(Duration::from_millis(debounce_wait)));
    let mut pending_refresh: Signal<Option<Timeout>> = use_signal(|| None);
    let mut listeners: Signal<Vec<EventListener>> = use_signal(Vec::new);

    // Initial theme (after mount so storage and matchMedia are reachable)
    use_effect(move || {
        let initial = ThemePreference::new(LocalStorage).initial(prefers_dark_scheme());
        apply_theme(initial);
        theme.set(initial);
    });

    // Page scroll follows the overlay
    use_effect(move || {
        let locked = lightbox.read().surface().scroll_locked;
        set_body_scroll_locked(locked);
    });

    // Document and window listeners, attached once
    let listener_section_ids = section_ids.clone();
    let probe = interaction.nav_probe_offset_px;
    let shadow_threshold = interaction.navbar_shadow_threshold_px;
    use_effect(move || {
        if !listeners.peek().is_empty() {
            return;
        }
        let (Some(window), Some(document)) = (web_sys::window(), document()) else {
            return;
        };

        set_body_class("loaded", true);
        info!("Hello, Developer! Built with Rust and WebAssembly.");
        refresh_highlight(highlight, &listener_section_ids, probe);

        let keydown = EventListener::on_document(document.clone(), "keydown", move |e| {
            let Some(key) = event_string(&e, "key") else {
                return;
            };
            if key == "Tab" {
                set_body_class(KEYBOARD_NAVIGATION_CLASS, true);
            }
            if !lightbox.peek().is_open() {
                return;
            }
            lightbox
                .write()
                .dispatch(LightboxInput::Key(LightboxKey::from_key_name(&key)));
        });

        let mousedown = EventListener::on_document(document, "mousedown", |_| {
            set_body_class(KEYBOARD_NAVIGATION_CLASS, false);
        });

        let scroll_section_ids = listener_section_ids.clone();
        let scroll = EventListener::on_window(window, "scroll", move |_| {
            let now_scrolled = navbar_scrolled(scroll_y(), shadow_threshold);
            if *scrolled.peek() != now_scrolled {
                scrolled.set(now_scrolled);
            }

            let ticket = debouncer.write().trigger();
            let wait_ms = debouncer.peek().wait().as_millis() as u32;
            let ids = scroll_section_ids.clone();
            // Dropping the previous Timeout cancels it
            pending_refresh.set(Some(Timeout::new(wait_ms, move || {
                if debouncer.write().settle(ticket) {
                    refresh_highlight(highlight, &ids, probe);
                }
            })));
        });

        listeners.set(vec![keydown, mousedown, scroll]);
    });

    let on_nav_click = move |href: String| {
        let Some(id) = anchor_target(&href) else {
            return;
        };
        let Some(top) = offset_top(id) else {
            debug!("No section for {href}");
            return;
        };
        let navbar_height = offset_height("navbar").unwrap_or(0.0);
        scroll_to_smooth(scroll_target(top, navbar_height));
    };

    let open_gallery = move |images: Vec<String>| {
        if let Err(e) = lightbox.write().open(images, 0) {
            error!("Cannot open gallery: {e}");
        }
    };

    let links: Vec<NavLink> = site
        .sections
        .iter()
        .map(|s| NavLink {
            id: s.id.clone(),
            label: s.label.clone(),
            is_active: highlight.read().is_active(&s.id),
        })
        .collect();
    let frame = lightbox.read().surface().clone();
    let menu_state = *menu.read();

    rsx! {
        NavbarView {
            owner: site.owner.clone(),
            links,
            scrolled: scrolled(),
            theme: theme(),
            on_toggle_theme: move |_| {
                let next = ThemePreference::new(LocalStorage).toggle();
                set_root_class(DARK_CLASS, next.is_dark());
                theme.set(next);
            },
            menu_open: menu_state.is_open(),
            menu_icon: menu_state.icon(),
            on_toggle_menu: move |_| menu.write().toggle(),
            on_nav_click,
            on_mobile_link: move |_| menu.write().close(),
        }

        main {
            HeroSection {
                title: site.hero_title.clone(),
                accent: site.hero_accent.clone(),
                tagline: site.tagline.clone(),
                interaction: interaction.clone(),
            }
            AboutSection { about: site.about.clone(), interaction: interaction.clone() }
            ProjectsSection {
                projects: site.projects.clone(),
                interaction: interaction.clone(),
                on_open_gallery: open_gallery,
            }
            SkillsSection { skills: site.skills.clone(), interaction: interaction.clone() }
            ExperienceSection {
                experience: site.experience.clone(),
                interaction: interaction.clone(),
            }
            ContactSection { email: site.contact_email.clone() }
        }

        Footer { owner: site.owner.clone() }

        LightboxView {
            frame,
            swipe_threshold: interaction.swipe_threshold_px,
            on_input: move |input| {
                lightbox.write().dispatch(input);
            },
        }
    }
}
