// Rule configuration

use crate::errors::{BuildError, Result};
use crate::{MatchRule, ValidationError};
use serde::{Deserialize, Serialize};

/// Declarative description of a [`MatchRule`].
///
/// ```toml
/// pattern = "^[a-z0-9-]+$"
/// invert = false
/// message = "must be a lowercase slug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchRuleConfig {
    /// Regular expression the value is checked against
    pub pattern: String,

    /// Require the value NOT to match
    #[serde(default)]
    pub invert: bool,

    /// Error code; requires `message`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl MatchRuleConfig {
    /// Create a config for a pattern with the default error
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            invert: false,
            code: None,
            message: None,
        }
    }

    /// Parse from a JSON document
    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse from a TOML document
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Compile the pattern and build the rule
    pub fn build(&self) -> Result<MatchRule> {
        let rule = if self.invert {
            MatchRule::not_pattern(&self.pattern)?
        } else {
            MatchRule::pattern(&self.pattern)?
        };

        match (&self.code, &self.message) {
            (Some(code), Some(message)) => {
                Ok(rule.with_error(ValidationError::new(code.as_str(), message.as_str())))
            }
            (None, Some(message)) => Ok(rule.with_message(message.as_str())),
            (Some(code), None) => Err(BuildError::InvalidConfig(format!(
                "error code '{}' given without a message",
                code
            ))),
            (None, None) => Ok(rule),
        }
    }
}

impl TryFrom<MatchRuleConfig> for MatchRule {
    type Error = BuildError;

    fn try_from(config: MatchRuleConfig) -> Result<Self> {
        config.build()
    }
}
