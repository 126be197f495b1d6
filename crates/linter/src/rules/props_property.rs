//! pipedream/props-label, pipedream/props-description
//!
//! Require every inline prop definition to have a `label` and a `description`.

use super::prop_display_name;
use crate::component::ExportNode;
use crate::context::RuleContext;
use crate::{guidelines_url, Rule, RuleCategory};

/// props-{field} rule
#[derive(Debug, Clone)]
pub struct PropsProperty {
    name: &'static str,
    field: &'static str,
}

impl PropsProperty {
    pub fn label() -> Self {
        Self {
            name: "props-label",
            field: "label",
        }
    }

    pub fn description() -> Self {
        Self {
            name: "props-description",
            field: "description",
        }
    }
}

impl Rule for PropsProperty {
    fn name(&self) -> &'static str {
        self.name
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Correctness
    }

    fn docs_anchor(&self) -> Option<&'static str> {
        Some("props")
    }

    fn check(&self, node: ExportNode<'_, '_>, ctx: &mut RuleContext<'_, '_>) {
        let Some(component) = node.component() else {
            return;
        };

        for prop in component.prop_definitions() {
            if prop.contains(self.field) {
                continue;
            }
            let message = format!(
                "Component prop {} must have a {}. See {}",
                prop_display_name(&prop, ctx),
                self.field,
                guidelines_url("props")
            );
            ctx.report(prop.span(), message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{messages, run_rule};

    #[test]
    fn test_rule_names() {
        assert_eq!(Rule::name(&PropsProperty::label()), "props-label");
        assert_eq!(Rule::name(&PropsProperty::description()), "props-description");
    }

    #[test]
    fn test_missing_label_reported_at_prop() {
        let source = r#"module.exports = { props: { test: { type: "string", description: "test" } } }"#;
        let diagnostics = run_rule(PropsProperty::label(), source);
        assert_eq!(diagnostics.len(), 1);
        let start = source.find("test:").unwrap();
        assert_eq!(diagnostics[0].start as usize, start);
        insta::assert_snapshot!(
            diagnostics[0].message.as_str(),
            @"Component prop test must have a label. See https://pipedream.com/docs/components/guidelines/#props"
        );
    }

    #[test]
    fn test_one_report_per_prop() {
        let source = r#"export default {
            propDefinitions: {
                first: { type: "string" },
                "second": { type: "string", label: "Second" },
                third: { type: "string" },
            },
        }"#;
        assert_eq!(
            messages(PropsProperty::label(), source),
            vec![
                "Component prop first must have a label. See https://pipedream.com/docs/components/guidelines/#props",
                "Component prop third must have a label. See https://pipedream.com/docs/components/guidelines/#props",
            ]
        );
        assert_eq!(messages(PropsProperty::description(), source).len(), 3);
    }

    #[test]
    fn test_numeric_prop_key_uses_source_text() {
        let source = r#"export default { props: { 42: { type: "string", label: "x" } } }"#;
        let found = messages(PropsProperty::description(), source);
        assert_eq!(found.len(), 1);
        assert!(found[0].starts_with("Component prop 42 must have a description."));
    }

    #[test]
    fn test_skips_indirect_and_reference_props() {
        let source = r#"export default {
            props: {
                app,
                db: "$.service.db",
                channel: { propDefinition: [app, "channel"] },
                quoted: { '"propDefinition"': [app, "channel"] },
            },
        }"#;
        assert!(messages(PropsProperty::label(), source).is_empty());
        assert!(messages(PropsProperty::description(), source).is_empty());
    }

    #[test]
    fn test_props_not_an_object_is_ignored() {
        for source in [
            "export default { props: sharedProps }",
            "export default { props: {} }",
            r#"export default { key: "a" }"#,
        ] {
            assert!(messages(PropsProperty::label(), source).is_empty(), "{source}");
        }
    }
}
