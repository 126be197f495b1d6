//! Literal value helpers

use oxc_ast::ast::Expression;

/// Get the value of a string literal or of a template literal without substitutions
pub fn static_string_value<'b>(expr: &'b Expression<'_>) -> Option<&'b str> {
    match expr.without_parentheses() {
        Expression::StringLiteral(lit) => Some(lit.value.as_str()),
        Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() => tpl
            .quasis
            .first()
            .map(|quasi| quasi.value.cooked.as_ref().unwrap_or(&quasi.value.raw).as_str()),
        _ => None,
    }
}

/// JavaScript truthiness of a literal. Non-literal expressions return `None`.
pub fn literal_truthiness(expr: &Expression) -> Option<bool> {
    match expr.without_parentheses() {
        Expression::BooleanLiteral(lit) => Some(lit.value),
        Expression::StringLiteral(lit) => Some(!lit.value.as_str().is_empty()),
        Expression::NumericLiteral(lit) => Some(lit.value != 0.0 && !lit.value.is_nan()),
        Expression::BigIntLiteral(lit) => Some(!lit.is_zero()),
        Expression::NullLiteral(_) => Some(false),
        Expression::RegExpLiteral(_) => Some(true),
        _ => None,
    }
}
