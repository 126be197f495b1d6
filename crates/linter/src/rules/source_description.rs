//! pipedream/source-description
//!
//! Source descriptions should start with "Emit new".

use common::static_string_value;

use crate::component::ExportNode;
use crate::context::RuleContext;
use crate::{guidelines_url, Rule, RuleCategory};

#[derive(Debug, Clone, Default)]
pub struct SourceDescription;

impl SourceDescription {
    pub const NAME: &'static str = "source-description";

    pub fn new() -> Self {
        Self
    }
}

impl Rule for SourceDescription {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Style
    }

    fn docs_anchor(&self) -> Option<&'static str> {
        Some("source-description")
    }

    fn check(&self, node: ExportNode<'_, '_>, ctx: &mut RuleContext<'_, '_>) {
        let Some(description) = node
            .component()
            .and_then(|component| component.source_property("description"))
        else {
            return;
        };
        // Non-string descriptions can't be checked
        let Some(value) = static_string_value(&description.value) else {
            return;
        };
        if !value.starts_with("Emit new ") {
            ctx.report(
                description.span,
                format!(
                    "Source descriptions should start with \"Emit new\". See {}",
                    guidelines_url("source-description")
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{messages, run_rule};

    #[test]
    fn test_rule_name() {
        assert_eq!(SourceDescription::new().name(), "source-description");
    }

    #[test]
    fn test_bad_description_reported_at_description() {
        let source = r#"module.exports = { name: "Test", description: "foo", type: "source" }"#;
        let diagnostics = run_rule(SourceDescription::new(), source);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].start as usize, source.find("description:").unwrap());
        insta::assert_snapshot!(
            diagnostics[0].message.as_str(),
            @r#"Source descriptions should start with "Emit new". See https://pipedream.com/docs/components/guidelines/#source-description"#
        );
    }

    #[test]
    fn test_valid_and_skipped_descriptions() {
        for source in [
            r#"export default { description: "Emit new events", type: "source" }"#,
            r#"export default { "description": "Emit new events", "type": "source" }"#,
            r#"export default { description: "foo", type: "action" }"#,
            r#"export default { description: "foo" }"#,
            r#"export default { description: DESCRIPTION, type: "source" }"#,
            r#"export default { description: `Emit ${what}`, type: "source" }"#,
        ] {
            assert!(messages(SourceDescription::new(), source).is_empty(), "{source}");
        }
    }
}
