//! Shape predicates for component export nodes

use oxc_ast::ast::{
    AssignmentTarget, ExportDefaultDeclaration, Expression, ObjectExpression, Statement,
};

/// Check if an assignment target is exactly `module.exports`
pub fn is_module_exports(target: &AssignmentTarget) -> bool {
    let AssignmentTarget::StaticMemberExpression(member) = target else {
        return false;
    };
    let Expression::Identifier(object) = &member.object else {
        return false;
    };
    object.name.as_str() == "module" && member.property.name.as_str() == "exports"
}

/// Get the `export default` declaration a statement holds, if it is one
pub fn as_default_export<'b, 'a>(
    stmt: &'b Statement<'a>,
) -> Option<&'b ExportDefaultDeclaration<'a>> {
    match stmt {
        Statement::ExportDefaultDeclaration(decl) => Some(&**decl),
        _ => None,
    }
}

/// Get the object literal behind an expression, if it has at least one property.
/// Parentheses around the literal are ignored.
pub fn as_object_with_properties<'b, 'a>(
    expr: &'b Expression<'a>,
) -> Option<&'b ObjectExpression<'a>> {
    match expr.without_parentheses() {
        Expression::ObjectExpression(obj) if !obj.properties.is_empty() => Some(&**obj),
        _ => None,
    }
}

/// Check if an expression is an object literal with at least one property
pub fn is_object_with_properties(expr: &Expression) -> bool {
    as_object_with_properties(expr).is_some()
}
