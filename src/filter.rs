//! Typed filter expressions for the Folk people query DSL.
//!
//! The Folk API filters people with nested JSON objects (field path ->
//! operator -> value). Rather than passing raw maps around, tools build a
//! small tagged expression and serialize it to the exact wire shape:
//!
//! - group membership: `{"groups": {"in": {"id": "grp_x"}}}`
//! - custom field equality scoped to a group:
//!   `{"customFieldValues": {"grp_x": {"Status": {"in": "Active"}}}}`
//!
//! No validation or escaping happens locally; malformed filters are rejected
//! by the remote API and surface as API errors.

use serde_json::{json, Map, Value};

/// A filter expression over people.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// People that are members of the given group.
    InGroup(String),

    /// People whose group-scoped custom field matches the given value.
    CustomField {
        group_id: String,
        field: String,
        value: Value,
    },

    /// Conjunction of expressions, merged into a single wire object.
    And(Vec<Filter>),
}

impl Filter {
    /// Membership-in-group filter.
    pub fn in_group(group_id: impl Into<String>) -> Self {
        Filter::InGroup(group_id.into())
    }

    /// Custom-field equality filter scoped to a group.
    pub fn custom_field(
        group_id: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        Filter::CustomField {
            group_id: group_id.into(),
            field: field.into(),
            value: value.into(),
        }
    }

    /// Combine expressions; their wire objects are deep-merged in order.
    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And(filters.into_iter().collect())
    }

    /// Serialize to the wire JSON shape.
    pub fn to_value(&self) -> Value {
        match self {
            Filter::InGroup(group_id) => json!({"groups": {"in": {"id": group_id}}}),
            Filter::CustomField {
                group_id,
                field,
                value,
            } => json!({"customFieldValues": {group_id: {field: {"in": value}}}}),
            Filter::And(filters) => {
                let mut merged = Value::Object(Map::new());
                for filter in filters {
                    deep_merge(&mut merged, filter.to_value());
                }
                merged
            }
        }
    }

    /// Serialize to the compact JSON string sent on the query string.
    pub fn to_query_value(&self) -> String {
        self.to_value().to_string()
    }
}

/// Merge `incoming` into `target`. Objects merge key-by-key, later
/// non-object values win.
fn deep_merge(target: &mut Value, incoming: Value) {
    match (target, incoming) {
        (Value::Object(target_map), Value::Object(incoming_map)) => {
            for (key, value) in incoming_map {
                deep_merge(target_map.entry(key).or_insert(Value::Null), value);
            }
        }
        (target_slot, incoming_value) => *target_slot = incoming_value,
    }
}
