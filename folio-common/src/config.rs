//! Site configuration: page content plus interaction tunables

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::debounce::SCROLL_DEBOUNCE_MS;
use crate::gallery::SWIPE_THRESHOLD_PX;
use crate::nav::{page_position, NAVBAR_SHADOW_THRESHOLD_PX, NAV_PROBE_OFFSET_PX};
use crate::reveal::{REVEAL_BOTTOM_MARGIN_PX, REVEAL_THRESHOLD};
use crate::tilt::TILT_DIVISOR;
use crate::typewriter::{TYPING_SPEED_MS, TYPING_START_DELAY_MS};

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

fn default_swipe_threshold() -> f64 {
    SWIPE_THRESHOLD_PX
}
fn default_scroll_debounce_ms() -> u64 {
    SCROLL_DEBOUNCE_MS
}
fn default_typing_start_delay_ms() -> u64 {
    TYPING_START_DELAY_MS
}
fn default_typing_speed_ms() -> u64 {
    TYPING_SPEED_MS
}
fn default_nav_probe_offset() -> f64 {
    NAV_PROBE_OFFSET_PX
}
fn default_navbar_shadow_threshold() -> f64 {
    NAVBAR_SHADOW_THRESHOLD_PX
}
fn default_reveal_threshold() -> f64 {
    REVEAL_THRESHOLD
}
fn default_reveal_bottom_margin() -> f64 {
    REVEAL_BOTTOM_MARGIN_PX
}
fn default_tilt_divisor() -> f64 {
    TILT_DIVISOR
}

/// Timing and distance knobs for the page's event handlers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f64,
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
    #[serde(default = "default_typing_start_delay_ms")]
    pub typing_start_delay_ms: u64,
    #[serde(default = "default_typing_speed_ms")]
    pub typing_speed_ms: u64,
    #[serde(default = "default_nav_probe_offset")]
    pub nav_probe_offset_px: f64,
    #[serde(default = "default_navbar_shadow_threshold")]
    pub navbar_shadow_threshold_px: f64,
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    #[serde(default = "default_reveal_bottom_margin")]
    pub reveal_bottom_margin_px: f64,
    #[serde(default = "default_tilt_divisor")]
    pub tilt_divisor: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            scroll_debounce_ms: SCROLL_DEBOUNCE_MS,
            typing_start_delay_ms: TYPING_START_DELAY_MS,
            typing_speed_ms: TYPING_SPEED_MS,
            nav_probe_offset_px: NAV_PROBE_OFFSET_PX,
            navbar_shadow_threshold_px: NAVBAR_SHADOW_THRESHOLD_PX,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_bottom_margin_px: REVEAL_BOTTOM_MARGIN_PX,
            tilt_divisor: TILT_DIVISOR,
        }
    }
}

/// A navigable page section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Screenshot URLs opened in the lightbox
    #[serde(default)]
    pub gallery: Vec<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategoryConfig {
    pub name: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceConfig {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub summary: String,
}

/// YAML site file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub owner: String,
    /// Hero heading text preceding the accent
    pub hero_title: String,
    /// Accent part of the hero heading, revealed by the typing effect
    pub hero_accent: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub about: String,
    pub sections: Vec<SectionConfig>,
    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
    #[serde(default)]
    pub skills: Vec<SkillCategoryConfig>,
    #[serde(default)]
    pub experience: Vec<ExperienceConfig>,
    pub contact_email: Option<String>,
    #[serde(default)]
    pub interaction: InteractionConfig,
}

impl SiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        info!(
            "Loaded site config for {} ({} sections, {} projects)",
            config.owner,
            config.sections.len(),
            config.projects.len()
        );
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.sections.is_empty() {
            return Err(ConfigError::Config("at least one section is required".into()));
        }
        let mut seen = std::collections::HashSet::new();
        let mut last_position: Option<usize> = None;
        for section in &self.sections {
            if !seen.insert(section.id.as_str()) {
                return Err(ConfigError::Config(format!(
                    "duplicate section id: {}",
                    section.id
                )));
            }
            // Config order must match document order
            let Some(position) = page_position(&section.id) else {
                return Err(ConfigError::Config(format!(
                    "unknown section id: {}",
                    section.id
                )));
            };
            if last_position.is_some_and(|last| position < last) {
                return Err(ConfigError::Config(format!(
                    "section {} is listed out of page order",
                    section.id
                )));
            }
            last_position = Some(position);
        }
        self.interaction.validate()
    }
}

impl InteractionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.swipe_threshold_px < 0.0 {
            return Err(ConfigError::Config(
                "swipe_threshold_px must not be negative".into(),
            ));
        }
        if !(self.tilt_divisor > 0.0 && self.tilt_divisor.is_finite()) {
            return Err(ConfigError::Config(
                "tilt_divisor must be a positive number".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::Config(
                "reveal_threshold must be between 0 and 1".into(),
            ));
        }
        if self.reveal_bottom_margin_px < 0.0 {
            return Err(ConfigError::Config(
                "reveal_bottom_margin_px must not be negative".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
owner: Ada
hero_title: "Hi, I'm"
hero_accent: Ada
sections:
  - id: home
    label: Home
"#;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = SiteConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.owner, "Ada");
        assert!(config.projects.is_empty());
        assert_eq!(config.interaction, InteractionConfig::default());
        assert_eq!(config.interaction.swipe_threshold_px, 50.0);
        assert_eq!(config.interaction.scroll_debounce_ms, 100);
    }

    #[test]
    fn test_partial_interaction_override() {
        let yaml = format!("{MINIMAL}interaction:\n  typing_speed_ms: 40\n");
        let config = SiteConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.interaction.typing_speed_ms, 40);
        assert_eq!(config.interaction.typing_start_delay_ms, 500);
    }

    #[test]
    fn test_project_gallery() {
        let yaml = format!(
            "{MINIMAL}projects:\n  - title: Tracer\n    description: Ray tracer\n    gallery: [/a.png, /b.png]\n"
        );
        let config = SiteConfig::from_yaml(&yaml).unwrap();
        assert_eq!(config.projects[0].gallery, vec!["/a.png", "/b.png"]);
        assert_eq!(config.projects[0].link, None);
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let yaml = format!("{MINIMAL}  - id: home\n    label: Again\n");
        assert!(matches!(
            SiteConfig::from_yaml(&yaml),
            Err(ConfigError::Config(_))
        ));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let yaml = format!("{MINIMAL}  - id: hom\n    label: Typo\n");
        let err = SiteConfig::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("unknown section id: hom"));
    }

    #[test]
    fn test_sections_out_of_page_order_rejected() {
        let yaml = format!(
            "{MINIMAL}  - id: contact\n    label: Contact\n  - id: about\n    label: About\n"
        );
        let err = SiteConfig::from_yaml(&yaml).unwrap_err();
        assert!(err.to_string().contains("section about is listed out of page order"));
    }

    #[test]
    fn test_sections_may_skip_rendered_ids() {
        let yaml = format!(
            "{MINIMAL}  - id: projects\n    label: Work\n  - id: contact\n    label: Contact\n"
        );
        let config = SiteConfig::from_yaml(&yaml).unwrap();
        let ids: Vec<&str> = config.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["home", "projects", "contact"]);
    }

    #[test]
    fn test_zero_tilt_divisor_rejected() {
        let yaml = format!("{MINIMAL}interaction:\n  tilt_divisor: 0\n");
        assert!(matches!(
            SiteConfig::from_yaml(&yaml),
            Err(ConfigError::Config(_))
        ));
    }

    #[test]
    fn test_reveal_bounds_rejected() {
        for interaction in [
            "reveal_threshold: -0.1",
            "reveal_threshold: 1.5",
            "reveal_bottom_margin_px: -5",
            "swipe_threshold_px: -1",
        ] {
            let yaml = format!("{MINIMAL}interaction:\n  {interaction}\n");
            assert!(
                matches!(SiteConfig::from_yaml(&yaml), Err(ConfigError::Config(_))),
                "{interaction} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            SiteConfig::from_yaml("owner: [unterminated"),
            Err(ConfigError::Serialization(_))
        ));
    }
}
