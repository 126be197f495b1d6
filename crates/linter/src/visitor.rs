//! Single-pass lint runner
//!
//! `LintRunner` traverses the AST once and hands every `ExpressionStatement`
//! and `ExportDefaultDeclaration`, at any depth, to each enabled rule.

use oxc_ast::ast::{Program, Statement};
use oxc_ast_visit::{walk, Visit};
use tracing::{debug, trace};

use crate::component::ExportNode;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::registry::RuleRegistry;

/// Visitor that runs all registered rules during a single AST traversal
pub struct LintRunner<'r, 'a> {
    ctx: LintContext<'a>,
    registry: &'r RuleRegistry,
}

impl<'r, 'a> LintRunner<'r, 'a> {
    pub fn new(source_text: &'a str, registry: &'r RuleRegistry) -> Self {
        Self {
            ctx: LintContext::new(source_text),
            registry,
        }
    }

    /// Run all registered rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        debug!(rules = self.registry.len(), "linting program");
        self.visit_program(program);
        let diagnostics = self.ctx.into_diagnostics();
        debug!(diagnostics = diagnostics.len(), "lint finished");
        LintResult { diagnostics }
    }

    fn check_export_node(&mut self, node: ExportNode<'_, 'a>) {
        if node.component().is_some() {
            trace!(start = node.span().start, end = node.span().end, "resolved component export");
        }

        let registry = self.registry;
        for (rule, severity) in registry.iter() {
            let mut ctx = self.ctx.for_rule(rule.name(), severity);
            match node {
                ExportNode::ExpressionStatement(stmt) => rule.expression_statement(stmt, &mut ctx),
                ExportNode::ExportDefaultDeclaration(decl) => {
                    rule.export_default_declaration(decl, &mut ctx)
                }
            }
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'_, 'a> {
    fn visit_statement(&mut self, it: &Statement<'a>) {
        if let Some(node) = ExportNode::from_statement(it) {
            self.check_export_node(node);
        }
        walk::walk_statement(self, it);
    }
}

/// Result of running the linter
#[derive(Debug, Default)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(DiagnosticSeverity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(DiagnosticSeverity::Warning)
    }

    fn count(&self, severity: DiagnosticSeverity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Diagnostics produced by one rule
    pub fn for_rule<'s>(&'s self, rule: &'s str) -> impl Iterator<Item = &'s Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }
}

/// Lint a program with every built-in rule enabled
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let registry = RuleRegistry::all();
    LintRunner::new(source_text, &registry).run(program)
}

/// Lint a program with the rules in `registry`
pub fn lint_with_registry<'a>(
    source_text: &'a str,
    program: &Program<'a>,
    registry: &RuleRegistry,
) -> LintResult {
    LintRunner::new(source_text, registry).run(program)
}
