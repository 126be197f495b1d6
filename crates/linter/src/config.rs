//! Rule configuration
//!
//! Mirrors the `rules` section of an ESLint config:
//!
//! ```json
//! { "rules": { "pipedream/source-name": "off", "no-ts-version": 1 } }
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::DiagnosticSeverity;

/// ESLint plugin prefix accepted in front of rule ids
pub const PLUGIN_PREFIX: &str = "pipedream/";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown rule `{0}`")]
    UnknownRule(String),

    #[error("Rule `{0}` is configured more than once")]
    DuplicateRule(String),

    #[error("Invalid rules configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// How a configured rule reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "RawRuleLevel")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

impl RuleLevel {
    /// Severity of diagnostics, or `None` when the rule is disabled
    pub fn severity(self) -> Option<DiagnosticSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(DiagnosticSeverity::Warning),
            Self::Error => Some(DiagnosticSeverity::Error),
        }
    }
}

/// Levels may be written as names or as ESLint's numeric shorthand
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRuleLevel {
    Number(u64),
    Name(String),
}

impl TryFrom<RawRuleLevel> for RuleLevel {
    type Error = String;

    fn try_from(raw: RawRuleLevel) -> Result<Self, String> {
        match raw {
            RawRuleLevel::Number(0) => Ok(Self::Off),
            RawRuleLevel::Number(1) => Ok(Self::Warn),
            RawRuleLevel::Number(2) => Ok(Self::Error),
            RawRuleLevel::Number(n) => Err(format!("invalid rule level {n}, expected 0, 1 or 2")),
            RawRuleLevel::Name(name) => match name.as_str() {
                "off" => Ok(Self::Off),
                "warn" => Ok(Self::Warn),
                "error" => Ok(Self::Error),
                _ => Err(format!(
                    "invalid rule level \"{name}\", expected \"off\", \"warn\" or \"error\""
                )),
            },
        }
    }
}

/// Per-rule level overrides. Rules not listed keep their default level.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RulesConfig {
    #[serde(default)]
    pub rules: FxHashMap<String, RuleLevel>,
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_rule(mut self, name: impl Into<String>, level: RuleLevel) -> Self {
        self.rules.insert(name.into(), level);
        self
    }

    /// Configured levels keyed by rule id with any plugin prefix removed
    pub fn levels(&self) -> impl Iterator<Item = (&str, RuleLevel)> {
        self.rules.iter().map(|(name, level)| {
            (name.strip_prefix(PLUGIN_PREFIX).unwrap_or(name), *level)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RulesConfig::default();
        assert!(config.rules.is_empty());
    }

    #[test]
    fn test_config_deserialize() {
        let json = r#"{"rules": {"pipedream/source-name": "off", "no-ts-version": 1, "props-label": 2}}"#;
        let config = RulesConfig::from_json(json).unwrap();
        let mut levels: Vec<_> = config.levels().collect();
        levels.sort();
        assert_eq!(
            levels,
            vec![
                ("no-ts-version", RuleLevel::Warn),
                ("props-label", RuleLevel::Error),
                ("source-name", RuleLevel::Off),
            ]
        );
    }

    #[test]
    fn test_config_rejects_bad_level() {
        let err = RulesConfig::from_json(r#"{"rules": {"source-name": "loud"}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().contains("loud"));

        let err = RulesConfig::from_json(r#"{"rules": {"source-name": 3}}"#).unwrap_err();
        assert!(err.to_string().contains("invalid rule level 3"));
    }

    #[test]
    fn test_level_severity() {
        assert_eq!(RuleLevel::Off.severity(), None);
        assert_eq!(RuleLevel::Warn.severity(), Some(DiagnosticSeverity::Warning));
        assert_eq!(RuleLevel::Error.severity(), Some(DiagnosticSeverity::Error));
    }
}
