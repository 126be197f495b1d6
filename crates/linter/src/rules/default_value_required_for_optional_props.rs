//! pipedream/default-value-required-for-optional-props
//!
//! Props marked `optional: true` should usually provide a `default`.

use common::literal_truthiness;

use super::prop_display_name;
use crate::component::ExportNode;
use crate::context::RuleContext;
use crate::{guidelines_url, Rule, RuleCategory};

#[derive(Debug, Clone, Default)]
pub struct DefaultValueRequiredForOptionalProps;

impl DefaultValueRequiredForOptionalProps {
    pub const NAME: &'static str = "default-value-required-for-optional-props";

    pub fn new() -> Self {
        Self
    }
}

impl Rule for DefaultValueRequiredForOptionalProps {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Pedantic
    }

    fn docs_anchor(&self) -> Option<&'static str> {
        Some("default-values")
    }

    fn check(&self, node: ExportNode<'_, '_>, ctx: &mut RuleContext<'_, '_>) {
        let Some(component) = node.component() else {
            return;
        };

        for prop in component.prop_definitions() {
            // Only a literal truthy value counts; `optional: isOptional` can't be judged
            let is_optional = prop
                .find("optional")
                .and_then(|optional| literal_truthiness(&optional.value))
                .unwrap_or(false);
            if !is_optional || prop.contains("default") {
                continue;
            }
            let message = format!(
                "Component prop {} is marked \"optional\", so it may need a \"default\" property. See {}",
                prop_display_name(&prop, ctx),
                guidelines_url("default-values")
            );
            ctx.report(prop.span(), message);
        }
    }
}
