//! Page Configuration
//!
//! The host page may carry a JSON block
//! `<script id="desk-config" type="application/json">{...}</script>`.
//! It is read once at startup.

use hospital_records::DeskConfig;

pub const CONFIG_ELEMENT_ID: &str = "desk-config";

/// Read the desk configuration from the page, falling back to defaults
pub fn load_config() -> DeskConfig {
    parse_config_text(config_text().as_deref())
}

fn config_text() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

/// A missing or malformed block yields the defaults; malformed is logged
pub fn parse_config_text(text: Option<&str>) -> DeskConfig {
    let Some(text) = text else {
        log::debug!("[CONFIG] no #{} element, using defaults", CONFIG_ELEMENT_ID);
        return DeskConfig::default();
    };
    match DeskConfig::from_json(text) {
        Ok(config) => {
            log::info!("[CONFIG] loaded: {:?}", config);
            config
        }
        Err(err) => {
            log::warn!("[CONFIG] {}; using defaults", err);
            DeskConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_records::{Section, SubmissionPolicy};

    #[test]
    fn test_missing_block_gives_defaults() {
        assert_eq!(parse_config_text(None), DeskConfig::default());
    }

    #[test]
    fn test_block_overrides_defaults() {
        let config = parse_config_text(Some(
            r#"{"currency_symbol": "Rs. ", "policy": "strict", "initial_section": "reports"}"#,
        ));
        assert_eq!(config.currency_symbol, "Rs. ");
        assert_eq!(config.policy, SubmissionPolicy::Strict);
        assert_eq!(config.initial_section, Section::Reports);
    }

    #[test]
    fn test_malformed_block_falls_back() {
        assert_eq!(parse_config_text(Some("{not json")), DeskConfig::default());
    }
}
