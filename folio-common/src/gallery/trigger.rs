use super::GalleryError;

/// Attribute on trigger elements holding a JSON array of image URLs
pub const GALLERY_ATTRIBUTE: &str = "data-gallery";

/// Parse the value of a trigger's gallery attribute.
///
/// Emptiness is not checked here; `LightboxController::open` rejects it.
pub fn parse_gallery(raw: &str) -> Result<Vec<String>, GalleryError> {
    Ok(serde_json::from_str(raw)?)
}

/// Serialize image URLs for a trigger's gallery attribute.
pub fn encode_gallery(images: &[String]) -> String {
    serde_json::to_string(images).unwrap_or_else(|_| String::from("[]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_gallery_list() {
        let images = parse_gallery(r#"["/a.png", "/b.png"]"#).unwrap();
        assert_eq!(images, vec!["/a.png", "/b.png"]);
    }

    #[test]
    fn test_parse_gallery_malformed() {
        let err = parse_gallery("['/a.png'").unwrap_err();
        assert!(matches!(err, GalleryError::MalformedTrigger(_)));
    }

    #[test]
    fn test_parse_gallery_wrong_shape() {
        assert!(parse_gallery(r#"{"src": "/a.png"}"#).is_err());
        assert!(parse_gallery("[1, 2]").is_err());
    }

    #[test]
    fn test_parse_gallery_empty_list_is_ok() {
        assert!(parse_gallery("[]").unwrap().is_empty());
    }

    #[test]
    fn test_encode_gallery_parses_back() {
        let images = vec!["/shots/one.png".to_string(), "/shots/\"two\".png".to_string()];
        assert_eq!(parse_gallery(&encode_gallery(&images)).unwrap(), images);
    }
}
