//! Loading [`GlobeConfig`] from TOML.
//!
//! Any omitted field falls back to its documented default, so a config
//! file only spells out deviations.

use std::path::Path;

use anyhow::Context as _;

use meridian_core::config::GlobeConfig;

/// Parses a TOML document into a config.
pub fn from_toml_str(text: &str) -> Result<GlobeConfig, toml::de::Error> {
    toml::from_str(text)
}

/// Reads and parses a config file.
pub fn load(path: impl AsRef<Path>) -> anyhow::Result<GlobeConfig> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading globe config from {}", path.display()))?;
    from_toml_str(&text).with_context(|| format!("parsing globe config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = from_toml_str("").unwrap();
        assert_eq!(config, GlobeConfig::default());
    }

    #[test]
    fn omitted_fields_fall_back_per_field() {
        let config = from_toml_str(
            r#"
            auto_rotate_speed = 0.004
            click_threshold = 0.2
            "#,
        )
        .unwrap();
        assert_eq!(config.auto_rotate_speed, 0.004);
        assert_eq!(config.click_threshold, 0.2);
        // untouched fields keep their defaults
        assert_eq!(config.settle_delay_ms, GlobeConfig::default().settle_delay_ms);
        assert_eq!(config.marker_color, GlobeConfig::default().marker_color);
    }

    #[test]
    fn colours_and_urls_parse() {
        let config = from_toml_str(
            r#"
            globe_texture_url = "https://example.com/earth.jpg"

            [marker_color]
            r = 1.0
            g = 0.5
            b = 0.0
            a = 1.0
            "#,
        )
        .unwrap();
        assert_eq!(config.globe_texture_url.as_deref(), Some("https://example.com/earth.jpg"));
        assert_eq!(config.marker_color.g, 0.5);
    }

    #[test]
    fn malformed_input_is_an_error() {
        assert!(from_toml_str("auto_rotate = \"yes\"").is_err());
    }
}
