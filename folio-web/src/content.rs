//! Embedded site content

use folio_common::config::{ConfigError, SiteConfig};

/// Site file bundled into the binary
pub const SITE_YAML: &str = include_str!("../folio.yaml");

pub fn load_site() -> Result<SiteConfig, ConfigError> {
    SiteConfig::from_yaml(SITE_YAML)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_common::gallery::{encode_gallery, parse_gallery};

    #[test]
    fn test_bundled_site_parses() {
        let site = load_site().unwrap();
        assert_eq!(site.sections[0].id, "home");
        assert!(site.sections.iter().any(|s| s.id == "projects"));
        assert_eq!(site.interaction.swipe_threshold_px, 50.0);
    }

    #[test]
    fn test_bundled_galleries_survive_trigger_encoding() {
        let site = load_site().unwrap();
        let with_gallery: Vec<_> = site.projects.iter().filter(|p| !p.gallery.is_empty()).collect();
        assert!(!with_gallery.is_empty());
        for project in with_gallery {
            let attr = encode_gallery(&project.gallery);
            assert_eq!(parse_gallery(&attr).unwrap(), project.gallery);
        }
    }
}
