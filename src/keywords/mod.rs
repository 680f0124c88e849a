pub mod additional_items;
pub mod additional_properties;
pub mod all_of;
pub mod any_of;
pub mod const_;
pub mod contains;
pub mod dependencies;
pub mod enum_;
pub mod exclusive_maximum;
pub mod exclusive_minimum;
pub mod items;
pub mod max_items;
pub mod max_length;
pub mod max_properties;
pub mod maximum;
pub mod min_items;
pub mod min_length;
pub mod min_properties;
pub mod minimum;
pub mod multiple_of;
pub mod not;
pub mod numeric;
pub mod one_of;
pub mod pattern;
pub mod pattern_properties;
pub mod properties;
pub mod required;
pub mod type_;
pub mod unique_items;

use crate::error::CompilationError;
use crate::state::ValidationState;
use serde_json::{Map, Value};

/// Every keyword module exposes a `validate` function with this shape: `value` is the
/// keyword's own value, `schema` is the object it was found in (not necessarily the document
/// root — `additionalProperties`/`additionalItems` need their immediate siblings, wherever in
/// the document they occur).
pub(crate) type Handler = fn(&Value, &Map<String, Value>, &Value, &mut ValidationState) -> Result<(), CompilationError>;

/// Maps a keyword name to its handler. Annotation-only keywords (`$id`, `$schema`, `title`,
/// `description`, `default`, `examples`, `definitions`) and `$ref` (handled directly by the
/// dispatcher before this lookup runs) return `None` and are silently skipped.
pub(crate) fn lookup(keyword: &str) -> Option<Handler> {
    match keyword {
        "additionalItems" => Some(additional_items::validate),
        "additionalProperties" => Some(additional_properties::validate),
        "allOf" => Some(all_of::validate),
        "anyOf" => Some(any_of::validate),
        "const" => Some(const_::validate),
        "contains" => Some(contains::validate),
        "dependencies" => Some(dependencies::validate),
        "enum" => Some(enum_::validate),
        "exclusiveMaximum" => Some(exclusive_maximum::validate),
        "exclusiveMinimum" => Some(exclusive_minimum::validate),
        "items" => Some(items::validate),
        "maxItems" => Some(max_items::validate),
        "maxLength" => Some(max_length::validate),
        "maxProperties" => Some(max_properties::validate),
        "maximum" => Some(maximum::validate),
        "minItems" => Some(min_items::validate),
        "minLength" => Some(min_length::validate),
        "minProperties" => Some(min_properties::validate),
        "minimum" => Some(minimum::validate),
        "multipleOf" => Some(multiple_of::validate),
        "not" => Some(not::validate),
        "oneOf" => Some(one_of::validate),
        "pattern" => Some(pattern::validate),
        "patternProperties" => Some(pattern_properties::validate),
        "properties" => Some(properties::validate),
        "required" => Some(required::validate),
        "type" => Some(type_::validate),
        "uniqueItems" => Some(unique_items::validate),
        _ => None,
    }
}
