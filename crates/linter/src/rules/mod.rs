//! Component lint rules
//!
//! Rules enforcing the Pipedream component guidelines

pub mod default_value_required_for_optional_props;
pub mod no_ts_version;
pub mod props_property;
pub mod required_property;
pub mod source_description;
pub mod source_name;

// Re-export rule structs
pub use default_value_required_for_optional_props::DefaultValueRequiredForOptionalProps;
pub use no_ts_version::NoTsVersion;
pub use props_property::PropsProperty;
pub use required_property::RequiredProperty;
pub use source_description::SourceDescription;
pub use source_name::SourceName;

use crate::component::PropDefinition;
use crate::context::RuleContext;

/// Name used for a prop in messages: its key, or the key's source text
/// for keys without a static name
fn prop_display_name(prop: &PropDefinition<'_, '_>, ctx: &RuleContext<'_, '_>) -> String {
    match prop.key_name() {
        Some(name) => name.to_string(),
        None => ctx.span_text(prop.key_span()).to_string(),
    }
}
