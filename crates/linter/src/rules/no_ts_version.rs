//! pipedream/no-ts-version
//!
//! Disallow the `{{ts}}` version macro used during development.

use common::static_string_value;

use crate::component::ExportNode;
use crate::context::RuleContext;
use crate::{Rule, RuleCategory};

/// Template macro replaced with a timestamp by the dev tooling
const TS_MACRO: &str = "{{ts}}";

#[derive(Debug, Clone, Default)]
pub struct NoTsVersion;

impl NoTsVersion {
    pub const NAME: &'static str = "no-ts-version";

    pub fn new() -> Self {
        Self
    }
}

impl Rule for NoTsVersion {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Correctness
    }

    fn check(&self, node: ExportNode<'_, '_>, ctx: &mut RuleContext<'_, '_>) {
        let Some(version) = node.component().and_then(|component| component.find("version"))
        else {
            return;
        };
        let Some(value) = static_string_value(&version.value) else {
            return;
        };
        if value.contains(TS_MACRO) {
            ctx.report(version.span, "{{ts}} macro should be removed before committing");
        }
    }
}
