//! Navbar view component
//!
//! Pure, props-based: desktop links, theme toggles and the collapsible
//! mobile menu. In-page link clicks are reported with their `href` so the
//! caller can run smooth scrolling.

use crate::components::icons::{BarsIcon, MoonIcon, SunIcon, XIcon};
use folio_common::menu::MenuIcon;
use folio_common::theme::Theme;
use dioxus::prelude::*;

/// Navigation link for one page section
#[derive(Clone, PartialEq)]
pub struct NavLink {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Classes for a nav link in the highlighted or muted state
pub fn nav_link_class(is_active: bool) -> &'static str {
    if is_active {
        "nav-link text-accent"
    } else {
        "nav-link text-muted"
    }
}

#[component]
pub fn NavbarView(
    owner: String,
    links: Vec<NavLink>,
    /// Page scrolled past the shadow threshold
    scrolled: bool,
    theme: Theme,
    on_toggle_theme: EventHandler<()>,
    menu_open: bool,
    menu_icon: MenuIcon,
    on_toggle_menu: EventHandler<()>,
    /// Called with the clicked link's `href`
    on_nav_click: EventHandler<String>,
    /// Called after a link inside the mobile menu was followed
    on_mobile_link: EventHandler<()>,
) -> Element {
    let navbar_class = if scrolled { "navbar scrolled" } else { "navbar" };
    let icon_class = format!("fas {}", menu_icon.class());
    let theme_label = if theme.is_dark() {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    rsx! {
        nav { id: "navbar", class: navbar_class,
            div { class: "navbar-inner",
                a {
                    class: "navbar-brand",
                    href: "#home",
                    onclick: move |evt| {
                        evt.prevent_default();
                        on_nav_click.call("#home".to_string());
                    },
                    "{owner}"
                }

                div { class: "navbar-links",
                    for link in links.iter() {
                        {
                            let href = link.href();
                            let target = href.clone();
                            rsx! {
                                a {
                                    key: "{link.id}",
                                    class: nav_link_class(link.is_active),
                                    href: "{href}",
                                    onclick: move |evt| {
                                        evt.prevent_default();
                                        on_nav_click.call(target.clone());
                                    },
                                    "{link.label}"
                                }
                            }
                        }
                    }
                    button {
                        id: "theme-toggle",
                        class: "theme-toggle",
                        aria_label: theme_label,
                        onclick: move |_| on_toggle_theme.call(()),
                        if theme.is_dark() {
                            SunIcon { class: "icon" }
                        } else {
                            MoonIcon { class: "icon" }
                        }
                    }
                }

                div { class: "navbar-mobile-controls",
                    button {
                        id: "theme-toggle-mobile",
                        class: "theme-toggle",
                        aria_label: theme_label,
                        onclick: move |_| on_toggle_theme.call(()),
                        if theme.is_dark() {
                            SunIcon { class: "icon" }
                        } else {
                            MoonIcon { class: "icon" }
                        }
                    }
                    button {
                        id: "mobile-menu-btn",
                        class: "mobile-menu-btn",
                        aria_label: "Toggle menu",
                        aria_expanded: if menu_open { "true" } else { "false" },
                        onclick: move |_| on_toggle_menu.call(()),
                        i { class: "{icon_class}",
                            match menu_icon {
                                MenuIcon::Bars => rsx! { BarsIcon { class: "icon" } },
                                MenuIcon::Times => rsx! { XIcon { class: "icon" } },
                            }
                        }
                    }
                }
            }

            div {
                id: "mobile-menu",
                class: if menu_open { "mobile-menu" } else { "mobile-menu hidden" },
                for link in links.iter() {
                    {
                        let href = link.href();
                        let target = href.clone();
                        rsx! {
                            a {
                                key: "mobile-{link.id}",
                                class: nav_link_class(link.is_active),
                                href: "{href}",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    on_mobile_link.call(());
                                    on_nav_click.call(target.clone());
                                },
                                "{link.label}"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_targets_section() {
        let link = NavLink {
            id: "projects".into(),
            label: "Projects".into(),
            is_active: false,
        };
        assert_eq!(link.href(), "#projects");
        assert_eq!(
            folio_common::nav::anchor_target(&link.href()),
            Some("projects")
        );
    }

    #[test]
    fn test_link_class_swaps_accent() {
        assert_eq!(nav_link_class(true), "nav-link text-accent");
        assert_eq!(nav_link_class(false), "nav-link text-muted");
    }
}
