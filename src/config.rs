//! Embedded Configuration
//!
//! Reads `ShellConfig` JSON from a `<script type="application/json">`
//! element in `index.html`. No element means defaults.

use pane_core::{ConfigError, ShellConfig};

const CONFIG_ELEMENT_ID: &str = "pane-shell-config";

fn embedded_config_text() -> Option<String> {
    web_sys::window()?
        .document()?
        .get_element_by_id(CONFIG_ELEMENT_ID)?
        .text_content()
}

/// Parse `text` if present; blank or missing text yields defaults
pub fn parse_config(text: Option<&str>) -> Result<ShellConfig, ConfigError> {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => ShellConfig::from_json(text),
        _ => Ok(ShellConfig::default()),
    }
}

pub fn load_config() -> Result<ShellConfig, ConfigError> {
    parse_config(embedded_config_text().as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_or_blank_is_default() {
        assert_eq!(parse_config(None).unwrap(), ShellConfig::default());
        assert_eq!(parse_config(Some("  \n ")).unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_embedded_values() {
        let config = parse_config(Some(r#" { "sidebar_width_px": 280 } "#)).unwrap();
        assert_eq!(config.sidebar_width_px, 280);
    }

    #[test]
    fn test_invalid_is_error() {
        assert!(parse_config(Some("[]")).is_err());
    }
}
