//! pipedream/source-name
//!
//! Source names should start with "New", e.g. "New Message in Channel".

use common::static_string_value;

use crate::component::ExportNode;
use crate::context::RuleContext;
use crate::{guidelines_url, Rule, RuleCategory};

#[derive(Debug, Clone, Default)]
pub struct SourceName;

impl SourceName {
    pub const NAME: &'static str = "source-name";

    pub fn new() -> Self {
        Self
    }
}

impl Rule for SourceName {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Style
    }

    fn docs_anchor(&self) -> Option<&'static str> {
        Some("source-name")
    }

    fn check(&self, node: ExportNode<'_, '_>, ctx: &mut RuleContext<'_, '_>) {
        let Some(name) = node
            .component()
            .and_then(|component| component.source_property("name"))
        else {
            return;
        };
        let Some(value) = static_string_value(&name.value) else {
            return;
        };
        if !value.starts_with("New ") {
            ctx.report(
                name.span,
                format!(
                    "Source names should start with \"New\". See {}",
                    guidelines_url("source-name")
                ),
            );
        }
    }
}
