//! Component extraction
//!
//! A module exports its component either as `module.exports = { ... }` or as
//! `export default { ... }`. [`ExportNode`] wraps the two statement kinds the
//! runner dispatches on and resolves them to the exported object literal.

use oxc_ast::ast::{
    ExportDefaultDeclaration, Expression, ExpressionStatement, ObjectExpression, ObjectProperty,
    ObjectPropertyKind, Statement,
};
use oxc_span::{GetSpan, Span};

use common::{
    as_default_export, as_object_with_properties, contains_property, find_property, find_props_container,
    is_module_exports, is_object_with_properties, property_key_name, static_string_value,
};

/// Field marking a prop whose definition lives in an app's `propDefinitions`
pub const PROP_DEFINITION_MARKER: &str = "propDefinition";

/// A top-level node that may export a component
#[derive(Debug, Clone, Copy)]
pub enum ExportNode<'n, 'a> {
    /// `module.exports = { ... }`
    ExpressionStatement(&'n ExpressionStatement<'a>),
    /// `export default { ... }`
    ExportDefaultDeclaration(&'n ExportDefaultDeclaration<'a>),
}

impl<'n, 'a> ExportNode<'n, 'a> {
    /// Wrap a statement the runner dispatches on. Other statements give `None`.
    pub fn from_statement(stmt: &'n Statement<'a>) -> Option<Self> {
        match stmt {
            Statement::ExpressionStatement(expr) => Some(Self::ExpressionStatement(&**expr)),
            _ => as_default_export(stmt).map(Self::ExportDefaultDeclaration),
        }
    }

    /// Span of the whole statement or declaration
    pub fn span(&self) -> Span {
        match self {
            Self::ExpressionStatement(stmt) => stmt.span,
            Self::ExportDefaultDeclaration(decl) => decl.span,
        }
    }

    /// The exported value, if this node is one of the two export forms.
    ///
    /// A default export may be any expression, so the result is not
    /// guaranteed to be an object literal. Use [`ExportNode::component`] to
    /// get a validated component.
    pub fn exported_value(&self) -> Option<&'n Expression<'a>> {
        match *self {
            Self::ExportDefaultDeclaration(decl) => decl.declaration.as_expression(),
            Self::ExpressionStatement(stmt) => {
                let Expression::AssignmentExpression(assign) = &stmt.expression else {
                    return None;
                };
                if is_module_exports(&assign.left) && is_object_with_properties(&assign.right) {
                    Some(&assign.right)
                } else {
                    None
                }
            }
        }
    }

    /// The exported component object, if it is an object literal with properties
    pub fn component(&self) -> Option<Component<'n, 'a>> {
        self.exported_value()
            .and_then(as_object_with_properties)
            .map(|object| Component { object })
    }
}

/// The object literal exported by a component module
#[derive(Debug, Clone, Copy)]
pub struct Component<'n, 'a> {
    object: &'n ObjectExpression<'a>,
}

impl<'n, 'a> Component<'n, 'a> {
    pub fn properties(&self) -> &'n [ObjectPropertyKind<'a>] {
        &self.object.properties
    }

    /// Check if the component has a top-level property `name`
    pub fn contains(&self, name: &str) -> bool {
        contains_property(name, self.properties())
    }

    /// Find the top-level property `name`
    pub fn find(&self, name: &str) -> Option<&'n ObjectProperty<'a>> {
        find_property(name, self.properties())
    }

    /// Iterate the inline prop definitions in `props` (or `propDefinitions`).
    ///
    /// Props whose value is not an object literal with properties (a bare
    /// `app` reference, for one) are skipped. So are props that defer to an
    /// external `propDefinition`.
    pub fn prop_definitions(&self) -> impl Iterator<Item = PropDefinition<'n, 'a>> + 'n {
        find_props_container(self.properties())
            .and_then(|container| as_object_with_properties(&container.value))
            .into_iter()
            .flat_map(|props| props.properties.iter())
            .filter_map(|kind| match kind {
                ObjectPropertyKind::ObjectProperty(entry) => {
                    let definition = as_object_with_properties(&entry.value)?;
                    if contains_property(PROP_DEFINITION_MARKER, &definition.properties) {
                        return None;
                    }
                    Some(PropDefinition {
                        entry: &**entry,
                        definition,
                    })
                }
                ObjectPropertyKind::SpreadProperty(_) => None,
            })
    }

    /// For components declared as `type: "source"`, find the property `name`.
    ///
    /// Returns `None` when `type` is missing or is not `"source"`; the
    /// required-properties rules report missing fields.
    pub fn source_property(&self, name: &str) -> Option<&'n ObjectProperty<'a>> {
        let type_prop = self.find("type")?;
        if static_string_value(&type_prop.value) != Some("source") {
            return None;
        }
        self.find(name)
    }
}

/// An inline prop definition, e.g. `channel: { type: "string", label: "Channel" }`
#[derive(Debug, Clone, Copy)]
pub struct PropDefinition<'n, 'a> {
    entry: &'n ObjectProperty<'a>,
    definition: &'n ObjectExpression<'a>,
}

impl<'n, 'a> PropDefinition<'n, 'a> {
    /// Span of the whole `key: { ... }` entry
    pub fn span(&self) -> Span {
        self.entry.span
    }

    pub fn key_span(&self) -> Span {
        self.entry.key.span()
    }

    /// The prop's name, when the key is an identifier or string
    pub fn key_name(&self) -> Option<&'n str> {
        property_key_name(&self.entry.key)
    }

    pub fn contains(&self, name: &str) -> bool {
        contains_property(name, &self.definition.properties)
    }

    pub fn find(&self, name: &str) -> Option<&'n ObjectProperty<'a>> {
        find_property(name, &self.definition.properties)
    }
}

#[cfg(test)]
mod tests {
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    use super::*;

    fn with_last_statement<R>(source: &str, f: impl FnOnce(Option<ExportNode>) -> R) -> R {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::mjs()).parse();
        assert!(ret.errors.is_empty(), "fixture should parse: {source}");
        f(ret.program.body.last().and_then(ExportNode::from_statement))
    }

    fn component_keys(source: &str) -> Option<Vec<String>> {
        with_last_statement(source, |node| {
            let component = node?.component()?;
            Some(
                component
                    .properties()
                    .iter()
                    .filter_map(|kind| match kind {
                        ObjectPropertyKind::ObjectProperty(prop) => {
                            property_key_name(&prop.key).map(str::to_string)
                        }
                        ObjectPropertyKind::SpreadProperty(_) => None,
                    })
                    .collect(),
            )
        })
    }

    #[test]
    fn test_extracts_both_export_forms() {
        let expected = Some(vec!["key".to_string(), "name".to_string()]);
        assert_eq!(component_keys(r#"module.exports = { key: "a", name: "b" }"#), expected);
        assert_eq!(component_keys(r#"export default { key: "a", "name": "b" }"#), expected);
        assert_eq!(
            component_keys(r#"import foo from "bar"; export default { key: "a", name: "b" }"#),
            expected
        );
    }

    #[test]
    fn test_declines_other_statements() {
        assert_eq!(component_keys(r#"exports.foo = { key: "a" }"#), None);
        assert_eq!(component_keys(r#"module.exports = {}"#), None);
        assert_eq!(component_keys(r#"module.exports = foo"#), None);
        assert_eq!(component_keys(r#"export default {}"#), None);
        assert_eq!(component_keys(r#"export default foo"#), None);
        assert_eq!(component_keys(r#"export default function () {}"#), None);
        assert_eq!(component_keys(r#"console.log("hi")"#), None);
    }

    #[test]
    fn test_from_statement_wraps_dispatched_kinds() {
        with_last_statement(r#"export default { key: "a" }"#, |node| {
            assert!(matches!(node, Some(ExportNode::ExportDefaultDeclaration(_))));
        });
        with_last_statement("foo()", |node| {
            assert!(matches!(node, Some(ExportNode::ExpressionStatement(_))));
        });
        with_last_statement("export const x = 1", |node| assert!(node.is_none()));
        with_last_statement("const x = 1", |node| assert!(node.is_none()));
    }

    #[test]
    fn test_default_export_value_is_not_validated() {
        with_last_statement("export default foo", |node| {
            let node = node.unwrap();
            assert!(matches!(node.exported_value(), Some(Expression::Identifier(_))));
            assert!(node.component().is_none());
        });
    }

    #[test]
    fn test_prop_definitions_skip_indirection_and_references() {
        let source = r#"export default {
            props: {
                app,
                channel: { propDefinition: [app, "channel"] },
                text: { type: "string" },
                "quoted": { type: "string", label: "Quoted" },
                empty: {},
            },
        }"#;
        let names = with_last_statement(source, |node| {
            node.unwrap()
                .component()
                .unwrap()
                .prop_definitions()
                .map(|prop| prop.key_name().unwrap().to_string())
                .collect::<Vec<_>>()
        });
        assert_eq!(names, vec!["text", "quoted"]);
    }

    #[test]
    fn test_source_property_requires_source_type() {
        let lookup = |source: &str| {
            with_last_statement(source, |node| {
                node.unwrap()
                    .component()
                    .unwrap()
                    .source_property("name")
                    .is_some()
            })
        };
        assert!(lookup(r#"export default { type: "source", name: "New Thing" }"#));
        assert!(!lookup(r#"export default { type: "action", name: "Thing" }"#));
        assert!(!lookup(r#"export default { name: "Thing" }"#));
        assert!(!lookup(r#"export default { type: "source" }"#));
    }
}
