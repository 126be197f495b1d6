//! pipedream/required-properties-*
//!
//! Require the component metadata fields the registry relies on:
//! `key`, `name`, `version`, `description` and `type`.

use crate::component::ExportNode;
use crate::context::RuleContext;
use crate::{guidelines_url, Rule, RuleCategory};

/// required-properties-{field} rule
#[derive(Debug, Clone)]
pub struct RequiredProperty {
    name: &'static str,
    field: &'static str,
    message: Option<&'static str>,
}

impl RequiredProperty {
    fn new(name: &'static str, field: &'static str) -> Self {
        Self {
            name,
            field,
            message: None,
        }
    }

    pub fn key() -> Self {
        Self::new("required-properties-key", "key")
    }

    pub fn component_name() -> Self {
        Self::new("required-properties-name", "name")
    }

    pub fn version() -> Self {
        Self::new("required-properties-version", "version")
    }

    pub fn description() -> Self {
        Self::new("required-properties-description", "description")
    }

    pub fn component_type() -> Self {
        Self {
            message: Some("Components must export a type property (\"source\" or \"action\")"),
            ..Self::new("required-properties-type", "type")
        }
    }

    fn message(&self) -> String {
        match self.message {
            Some(message) => message.to_string(),
            None => format!(
                "Components must export a {} property. See {}",
                self.field,
                guidelines_url("required-metadata")
            ),
        }
    }
}

impl Rule for RequiredProperty {
    fn name(&self) -> &'static str {
        self.name
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Correctness
    }

    fn docs_anchor(&self) -> Option<&'static str> {
        Some("required-metadata")
    }

    fn check(&self, node: ExportNode<'_, '_>, ctx: &mut RuleContext<'_, '_>) {
        let Some(component) = node.component() else {
            return;
        };
        if !component.contains(self.field) {
            ctx.report(node.span(), self.message());
        }
    }
}
