//! Lint context for rule execution

use oxc_span::Span;

use crate::{Diagnostic, DiagnosticSeverity};

/// Context for one lint pass over a source file
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str) -> Self {
        Self {
            source_text,
            diagnostics: Vec::new(),
        }
    }

    /// Reporting context for a single rule
    pub fn for_rule(&mut self, rule: &'static str, severity: DiagnosticSeverity) -> RuleContext<'_, 'a> {
        RuleContext {
            rule,
            severity,
            source_text: self.source_text,
            diagnostics: &mut self.diagnostics,
        }
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

/// Context handed to a rule callback. Reports are tagged with the rule's
/// name and configured severity.
pub struct RuleContext<'c, 'a> {
    rule: &'static str,
    severity: DiagnosticSeverity,
    source_text: &'a str,
    diagnostics: &'c mut Vec<Diagnostic>,
}

impl<'a> RuleContext<'_, 'a> {
    /// Report a problem anchored at `span`
    pub fn report(&mut self, span: Span, message: impl Into<String>) {
        self.diagnostics
            .push(Diagnostic::new(self.rule, span, message).with_severity(self.severity));
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: Span) -> &'a str {
        self.source_text
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }
}
