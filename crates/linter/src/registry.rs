//! Rule registry
//!
//! Maps rule ids to rule implementations and the severity they report at.
//! Build one per configuration and hand it to the runner by reference.

use indexmap::IndexMap;
use serde::Serialize;

use crate::config::{ConfigError, RulesConfig};
use crate::rules::{
    DefaultValueRequiredForOptionalProps, NoTsVersion, PropsProperty, RequiredProperty,
    SourceDescription, SourceName,
};
use crate::{DiagnosticSeverity, Rule, RuleCategory};

#[derive(Debug)]
struct RuleEntry {
    rule: Box<dyn Rule>,
    severity: DiagnosticSeverity,
}

/// The set of enabled rules, in registration order
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: IndexMap<&'static str, RuleEntry>,
}

/// Metadata for one enabled rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleInfo {
    pub name: &'static str,
    pub category: RuleCategory,
    pub docs_url: Option<String>,
    pub severity: DiagnosticSeverity,
}

/// Every rule shipped with the linter
pub fn builtin_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(RequiredProperty::key()),
        Box::new(RequiredProperty::component_name()),
        Box::new(RequiredProperty::version()),
        Box::new(RequiredProperty::description()),
        Box::new(RequiredProperty::component_type()),
        Box::new(PropsProperty::label()),
        Box::new(PropsProperty::description()),
        Box::new(DefaultValueRequiredForOptionalProps::new()),
        Box::new(SourceName::new()),
        Box::new(SourceDescription::new()),
        Box::new(NoTsVersion::new()),
    ]
}

impl RuleRegistry {
    /// A registry with no rules enabled
    pub fn empty() -> Self {
        Self::default()
    }

    /// All built-in rules, reporting errors
    pub fn all() -> Self {
        builtin_rules()
            .into_iter()
            .fold(Self::empty(), |registry, rule| {
                registry.with_boxed_rule(rule, DiagnosticSeverity::Error)
            })
    }

    /// All built-in rules with the levels in `config` applied on top
    pub fn from_config(config: &RulesConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::empty();
        let mut overrides: IndexMap<&str, _> = IndexMap::new();
        for (name, level) in config.levels() {
            // `x` and `pipedream/x` name the same rule
            if overrides.insert(name, level).is_some() {
                return Err(ConfigError::DuplicateRule(name.to_string()));
            }
        }

        for rule in builtin_rules() {
            let severity = match overrides.shift_remove(rule.name()) {
                Some(level) => level.severity(),
                None => Some(DiagnosticSeverity::Error),
            };
            if let Some(severity) = severity {
                registry = registry.with_boxed_rule(rule, severity);
            }
        }

        match overrides.into_keys().next() {
            Some(unknown) => Err(ConfigError::UnknownRule(unknown.to_string())),
            None => Ok(registry),
        }
    }

    pub fn with_rule(self, rule: impl Rule + 'static, severity: DiagnosticSeverity) -> Self {
        self.with_boxed_rule(Box::new(rule), severity)
    }

    pub fn with_boxed_rule(mut self, rule: Box<dyn Rule>, severity: DiagnosticSeverity) -> Self {
        self.rules.insert(rule.name(), RuleEntry { rule, severity });
        self
    }

    pub fn get(&self, name: &str) -> Option<&dyn Rule> {
        self.rules.get(name).map(|entry| entry.rule.as_ref())
    }

    pub fn severity(&self, name: &str) -> Option<DiagnosticSeverity> {
        self.rules.get(name).map(|entry| entry.severity)
    }

    /// Enabled rule ids
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// Enabled rules with their severity
    pub fn iter(&self) -> impl Iterator<Item = (&dyn Rule, DiagnosticSeverity)> {
        self.rules
            .values()
            .map(|entry| (entry.rule.as_ref(), entry.severity))
    }

    /// Metadata for every enabled rule, in registration order
    pub fn describe(&self) -> Vec<RuleInfo> {
        self.iter()
            .map(|(rule, severity)| RuleInfo {
                name: rule.name(),
                category: rule.category(),
                docs_url: rule.docs_url(),
                severity,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
