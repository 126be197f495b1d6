//! Property lookup on object literal entries
//!
//! Object keys can be written bare (`key`) or quoted (`"key"`). Fixtures built
//! from JSON sometimes carry an extra layer of quotes inside the literal
//! (`'"key"'`), so both spellings count as the same field.

use oxc_ast::ast::{ObjectProperty, ObjectPropertyKind, PropertyKey};

/// Get the static name of a property key.
///
/// Identifiers give their name and string literals their value. Other keys
/// (numbers, private names, computed expressions) have no name.
pub fn property_key_name<'b>(key: &'b PropertyKey<'_>) -> Option<&'b str> {
    match key {
        PropertyKey::StaticIdentifier(ident) => Some(ident.name.as_str()),
        PropertyKey::Identifier(ident) => Some(ident.name.as_str()),
        PropertyKey::StringLiteral(lit) => Some(lit.value.as_str()),
        _ => None,
    }
}

/// Check if a key spells `name`, either as-is or wrapped in double quotes
fn key_matches(key: &str, name: &str) -> bool {
    if key == name {
        return true;
    }
    key.len() == name.len() + 2
        && key.starts_with('"')
        && key.ends_with('"')
        && &key[1..key.len() - 1] == name
}

/// Find the first property whose key is `name`
pub fn find_property<'b, 'a>(
    name: &str,
    properties: &'b [ObjectPropertyKind<'a>],
) -> Option<&'b ObjectProperty<'a>> {
    properties.iter().find_map(|kind| match kind {
        ObjectPropertyKind::ObjectProperty(prop) => property_key_name(&prop.key)
            .filter(|key| key_matches(key, name))
            .map(|_| &**prop),
        ObjectPropertyKind::SpreadProperty(_) => None,
    })
}

/// Check if any property is keyed `name`
pub fn contains_property(name: &str, properties: &[ObjectPropertyKind]) -> bool {
    find_property(name, properties).is_some()
}

/// Find the `props` entry of a component, falling back to `propDefinitions`
pub fn find_props_container<'b, 'a>(
    properties: &'b [ObjectPropertyKind<'a>],
) -> Option<&'b ObjectProperty<'a>> {
    find_property("props", properties).or_else(|| find_property("propDefinitions", properties))
}
