//! Desk configuration.
//!
//! Resolved once when the page starts and handed to [`crate::Hospital`].
//! Every key is optional; a missing key takes its default.

use serde::Deserialize;

use crate::error::RecordResult;
use crate::form::SubmissionPolicy;
use crate::section::Section;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeskConfig {
    /// Glyph prepended to bill amounts
    pub currency_symbol: String,
    pub policy: SubmissionPolicy,
    /// Section visible when the page loads
    pub initial_section: Section,
    /// How long a notice stays up before clearing itself; 0 keeps it
    pub notice_timeout_ms: u32,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            policy: SubmissionPolicy::default(),
            initial_section: Section::default(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl DeskConfig {
    /// Parse a JSON object; blank input yields the defaults
    pub fn from_json(json: &str) -> RecordResult<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecordError;

    #[test]
    fn test_blank_json_is_default() {
        assert_eq!(DeskConfig::from_json("").unwrap(), DeskConfig::default());
        assert_eq!(DeskConfig::from_json("{}").unwrap(), DeskConfig::default());
    }

    #[test]
    fn test_partial_json_overrides_only_given_keys() {
        let config =
            DeskConfig::from_json(r#"{"policy": "strict", "initial_section": "labs"}"#).unwrap();
        assert_eq!(config.policy, SubmissionPolicy::Strict);
        assert_eq!(config.initial_section, Section::LabTests);
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.notice_timeout_ms, DEFAULT_NOTICE_TIMEOUT_MS);
    }

    #[test]
    fn test_unknown_key_or_value_is_rejected() {
        let err = DeskConfig::from_json(r#"{"currency": "$"}"#).expect_err("unknown key");
        assert!(matches!(err, RecordError::InvalidConfig(_)));

        let err = DeskConfig::from_json(r#"{"initial_section": "pharmacy"}"#)
            .expect_err("unknown section");
        assert!(matches!(err, RecordError::InvalidConfig(_)));
    }
}
