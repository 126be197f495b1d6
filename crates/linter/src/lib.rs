//! Pipedream component lint rules
//!
//! This crate checks that a module's exported component object follows the
//! Pipedream component guidelines: required metadata, prop definitions and
//! naming conventions. Both `module.exports = { ... }` and
//! `export default { ... }` are recognized.
//!
//! Rules run over an oxc AST; parsing is left to the caller.

pub mod component;
pub mod config;
pub mod registry;
pub mod rules;
pub mod visitor;
mod context;
mod diagnostic;

use oxc_ast::ast::{ExportDefaultDeclaration, ExpressionStatement};
use serde::Serialize;

pub use component::{Component, ExportNode, PropDefinition};
pub use config::{ConfigError, RuleLevel, RulesConfig};
pub use context::{LintContext, RuleContext};
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use registry::{builtin_rules, RuleInfo, RuleRegistry};
pub use rules::*;
pub use visitor::{lint, lint_with_registry, LintResult, LintRunner};

/// Base URL of the component guidelines referenced by diagnostics
pub const GUIDELINES_URL: &str = "https://pipedream.com/docs/components/guidelines/";

/// Build a link to a section of the component guidelines
pub fn guidelines_url(anchor: &str) -> String {
    format!("{GUIDELINES_URL}#{anchor}")
}

/// Rule category for component rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Metadata the component registry cannot do without
    Correctness,
    /// Checks that may flag intentional code
    Pedantic,
    /// Naming conventions
    Style,
}

impl RuleCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Correctness => "correctness",
            Self::Pedantic => "pedantic",
            Self::Style => "style",
        }
    }
}

/// A lint rule.
///
/// The host runner calls one of the two node callbacks for every
/// `ExpressionStatement` and `ExportDefaultDeclaration` it visits. Both forward
/// to [`Rule::check`], so a rule is written once for both export syntaxes.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Rule identifier, e.g. `required-properties-key`
    fn name(&self) -> &'static str;

    fn category(&self) -> RuleCategory;

    /// Section of the component guidelines this rule enforces
    fn docs_anchor(&self) -> Option<&'static str> {
        None
    }

    /// URL to documentation
    fn docs_url(&self) -> Option<String> {
        self.docs_anchor().map(guidelines_url)
    }

    /// Check a node that may export a component
    fn check(&self, node: ExportNode<'_, '_>, ctx: &mut RuleContext<'_, '_>);

    fn expression_statement(&self, stmt: &ExpressionStatement<'_>, ctx: &mut RuleContext<'_, '_>) {
        self.check(ExportNode::ExpressionStatement(stmt), ctx);
    }

    fn export_default_declaration(
        &self,
        decl: &ExportDefaultDeclaration<'_>,
        ctx: &mut RuleContext<'_, '_>,
    ) {
        self.check(ExportNode::ExportDefaultDeclaration(decl), ctx);
    }
}
