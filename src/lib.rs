//! Pipedream component linter on OXC
//!
//! Parses a component module and checks its exported metadata against the
//! Pipedream component guidelines.
//!
//! ## Usage
//!
//! ```rust
//! use component_lint_oxc::{lint, LintOptions};
//!
//! let source = r#"export default { key: "demo", name: "Demo", version: "0.0.1" }"#;
//! let result = lint(source, &LintOptions::default()).unwrap();
//! for diagnostic in &result.diagnostics {
//!     println!("{}: {}", diagnostic.rule, diagnostic.message);
//! }
//! ```

mod error;

pub use component_linter::{
    builtin_rules, Diagnostic, DiagnosticSeverity, LintResult, Rule, RuleCategory, RuleInfo,
    RuleLevel, RuleRegistry, RulesConfig,
};
pub use error::LintError;

#[cfg(feature = "napi")]
use napi_derive::napi;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use tracing::debug;

/// Filename assumed when the caller doesn't give one
pub const DEFAULT_FILENAME: &str = "component.mjs";

/// Options for linting one source file
#[derive(Debug, Clone)]
pub struct LintOptions<'a> {
    /// Source filename, used to pick JS/TS/JSX parsing
    pub filename: &'a str,
    /// Rule level overrides
    pub rules: RulesConfig,
}

impl Default for LintOptions<'_> {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME,
            rules: RulesConfig::default(),
        }
    }
}

/// A diagnostic as seen from JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsDiagnostic {
    /// Rule id, e.g. "required-properties-key"
    pub rule: String,
    pub message: String,
    /// "error" or "warning"
    pub severity: String,
    /// 1-based line of the reported node
    pub line: u32,
    /// 1-based column of the reported node
    pub column: u32,
    pub start: u32,
    pub end: u32,
}

/// Lint options exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
#[derive(Default)]
pub struct JsLintOptions {
    /// Source filename
    /// @default "component.mjs"
    pub filename: Option<String>,

    /// Rule levels keyed by rule id: "off", "warn" or "error"
    pub rules: Option<std::collections::HashMap<String, String>>,
}

/// Rule metadata as seen from JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsRuleInfo {
    pub name: String,
    /// "correctness", "pedantic" or "style"
    pub category: String,
    pub docs_url: Option<String>,
}

/// Lint component source code
#[cfg(feature = "napi")]
#[napi]
pub fn lint_component(source: String, options: Option<JsLintOptions>) -> napi::Result<Vec<JsDiagnostic>> {
    let js_options = options.unwrap_or_default();

    let rules = match js_options.rules {
        Some(rules) => RulesConfig::from_json(&serde_json::json!({ "rules": rules }).to_string())
            .map_err(|err| napi::Error::from_reason(err.to_string()))?,
        None => RulesConfig::default(),
    };
    let options = LintOptions {
        filename: js_options.filename.as_deref().unwrap_or(DEFAULT_FILENAME),
        rules,
    };

    let result = lint(&source, &options).map_err(|err| napi::Error::from_reason(err.to_string()))?;

    Ok(result
        .diagnostics
        .into_iter()
        .map(|diagnostic| {
            let (line, column) = line_column(&source, diagnostic.start);
            JsDiagnostic {
                severity: match diagnostic.severity {
                    DiagnosticSeverity::Error => "error".to_string(),
                    DiagnosticSeverity::Warning => "warning".to_string(),
                },
                rule: diagnostic.rule,
                message: diagnostic.message,
                line: line as u32,
                column: column as u32,
                start: diagnostic.start,
                end: diagnostic.end,
            }
        })
        .collect())
}

/// Ids of every built-in rule
#[cfg(feature = "napi")]
#[napi]
pub fn rule_names() -> Vec<String> {
    builtin_rules()
        .iter()
        .map(|rule| rule.name().to_string())
        .collect()
}

/// Name, category and guideline link of every built-in rule
#[cfg(feature = "napi")]
#[napi]
pub fn list_rules() -> Vec<JsRuleInfo> {
    RuleRegistry::all()
        .describe()
        .into_iter()
        .map(|info| JsRuleInfo {
            name: info.name.to_string(),
            category: info.category.as_str().to_string(),
            docs_url: info.docs_url,
        })
        .collect()
}

/// Lint `source` with the rules configured in `options`
pub fn lint(source: &str, options: &LintOptions) -> Result<LintResult, LintError> {
    let registry = RuleRegistry::from_config(&options.rules)?;
    lint_with_registry(source, options.filename, &registry)
}

/// Lint `source` with a prebuilt registry, e.g. when linting many files
pub fn lint_with_registry(
    source: &str,
    filename: &str,
    registry: &RuleRegistry,
) -> Result<LintResult, LintError> {
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(filename).unwrap_or(SourceType::mjs());

    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        debug!(filename, errors = ret.errors.len(), "parse failed");
        return Err(LintError::Parse {
            filename: filename.to_string(),
            messages: ret.errors.iter().map(|err| err.to_string()).collect(),
        });
    }

    let mut result = component_linter::lint_with_registry(source, &ret.program, registry);
    // Report in source order; rules reporting on the same node keep registry order
    result.diagnostics.sort_by_key(|d| (d.start, d.end));
    debug!(filename, diagnostics = result.diagnostics.len(), "linted");
    Ok(result)
}

/// 1-based line and column (in characters) of a byte offset
pub fn line_column(source: &str, offset: u32) -> (usize, usize) {
    let before = source.get(..offset as usize).unwrap_or(source);
    let line = before.matches('\n').count() + 1;
    let column = before
        .rsplit('\n')
        .next()
        .map_or(0, |last| last.chars().count())
        + 1;
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_column() {
        let source = "import foo from \"bar\";\nexport default {\n  key: \"a\"\n}";
        assert_eq!(line_column(source, 0), (1, 1));
        assert_eq!(line_column(source, source.find("export").unwrap() as u32), (2, 1));
        assert_eq!(line_column(source, source.find("key").unwrap() as u32), (3, 3));
        assert_eq!(line_column(source, 10_000), (4, 2));
    }

    #[test]
    fn test_lint_clean_component() {
        let source = r#"export default {
            key: "demo-new-event",
            name: "New Event",
            description: "Emit new events",
            version: "0.0.1",
            type: "source",
        }"#;
        let result = lint(source, &LintOptions::default()).unwrap();
        assert!(result.diagnostics.is_empty());
    }

    #[test]
    fn test_lint_parse_error() {
        let err = lint("export default {", &LintOptions::default()).unwrap_err();
        assert!(matches!(err, LintError::Parse { ref filename, .. } if filename == DEFAULT_FILENAME));
    }

    #[test]
    fn test_lint_unknown_rule() {
        let options = LintOptions {
            rules: RulesConfig::new().with_rule("no-such-rule", RuleLevel::Off),
            ..LintOptions::default()
        };
        let err = lint("module.exports = {}", &options).unwrap_err();
        assert_eq!(err.to_string(), "Unknown rule `no-such-rule`");
    }
}
