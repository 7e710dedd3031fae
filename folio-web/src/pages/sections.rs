//! Page sections rendered from the site config

use chrono::Datelike;
use dioxus::prelude::*;
use folio_common::config::{ExperienceConfig, InteractionConfig, ProjectConfig, SkillCategoryConfig};
use folio_common::reveal::stagger_delay;
use folio_ui::{FadeIn, ProjectCard, ProjectCardView, TypingText};

#[component]
pub fn HeroSection(
    title: String,
    accent: String,
    tagline: String,
    interaction: InteractionConfig,
) -> Element {
    rsx! {
        section { id: "home", class: "section hero",
            h1 { class: "hero-title",
                "{title} "
                TypingText {
                    text: accent,
                    start_delay_ms: interaction.typing_start_delay_ms,
                    speed_ms: interaction.typing_speed_ms,
                }
            }
            if !tagline.is_empty() {
                p { class: "hero-tagline", "{tagline}" }
            }
        }
    }
}

#[component]
pub fn AboutSection(about: String, interaction: InteractionConfig) -> Element {
    rsx! {
        section { id: "about", class: "section",
            h2 { class: "section-title", "About" }
            FadeIn {
                id: "about-body",
                threshold: interaction.reveal_threshold,
                bottom_margin: interaction.reveal_bottom_margin_px,
                p { class: "about-text", "{about}" }
            }
        }
    }
}

#[component]
pub fn ProjectsSection(
    projects: Vec<ProjectConfig>,
    interaction: InteractionConfig,
    on_open_gallery: EventHandler<Vec<String>>,
) -> Element {
    rsx! {
        section { id: "projects", class: "section",
            h2 { class: "section-title", "Projects" }
            div { class: "project-grid",
                for (i , project) in projects.iter().enumerate() {
                    FadeIn {
                        key: "{project.title}",
                        id: "project-{i}",
                        threshold: interaction.reveal_threshold,
                        bottom_margin: interaction.reveal_bottom_margin_px,
                        ProjectCardView {
                            card_id: "project-card-{i}",
                            project: ProjectCard::from(project),
                            tilt_divisor: interaction.tilt_divisor,
                            on_open_gallery: move |images| on_open_gallery.call(images),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsSection(skills: Vec<SkillCategoryConfig>, interaction: InteractionConfig) -> Element {
    rsx! {
        section { id: "skills", class: "section",
            h2 { class: "section-title", "Skills" }
            div { class: "skill-grid",
                for (i , category) in skills.iter().enumerate() {
                    FadeIn {
                        key: "{category.name}",
                        id: "skills-{i}",
                        threshold: interaction.reveal_threshold,
                        bottom_margin: interaction.reveal_bottom_margin_px,
                        class: "skill-category",
                        h3 { "{category.name}" }
                        div { class: "skill-badges",
                            for skill in category.skills.iter() {
                                span { key: "{skill}", class: "skill-badge", "{skill}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ExperienceSection(
    experience: Vec<ExperienceConfig>,
    interaction: InteractionConfig,
) -> Element {
    rsx! {
        section { id: "experience", class: "section",
            h2 { class: "section-title", "Experience" }
            div { class: "timeline",
                for (i , item) in experience.iter().enumerate() {
                    FadeIn {
                        key: "{item.organization}-{item.period}",
                        id: "timeline-{i}",
                        threshold: interaction.reveal_threshold,
                        bottom_margin: interaction.reveal_bottom_margin_px,
                        delay: Some(stagger_delay(i)),
                        class: "timeline-item",
                        h3 { class: "timeline-role", "{item.role}" }
                        p { class: "timeline-meta", "{item.organization} · {item.period}" }
                        p { class: "timeline-summary", "{item.summary}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactSection(email: Option<String>) -> Element {
    rsx! {
        section { id: "contact", class: "section",
            h2 { class: "section-title", "Contact" }
            if let Some(email) = email {
                a { class: "contact-link", href: "mailto:{email}", "{email}" }
            } else {
                p { "Reach out on any of the linked profiles." }
            }
        }
    }
}

#[component]
pub fn Footer(owner: String) -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "footer",
            "© "
            span { id: "copyright-year", "{year}" }
            " {owner}"
        }
    }
}
