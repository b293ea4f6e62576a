//! Person model representing a contact in the Folk CRM.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Custom field values for one person, keyed by group id and then by field
/// name. Values are kept as raw JSON since field types are user-defined
/// (text, number, single-select, ...).
pub type CustomFieldValues = HashMap<String, HashMap<String, serde_json::Value>>;

/// A person in the Folk CRM.
///
/// Read-only from this layer's perspective; every field is sourced from the
/// remote API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    /// Unique identifier (prefixed `per_`)
    pub id: String,

    /// First name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Full name as derived by the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Email addresses, primary first
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,

    /// Group-scoped custom field values: group id -> field name -> value
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub custom_field_values: CustomFieldValues,
}

impl Person {
    /// Best available display name: the API-derived full name, else
    /// first/last joined, else the empty string.
    pub fn display_name(&self) -> String {
        if let Some(full) = &self.full_name {
            if !full.is_empty() {
                return full.clone();
            }
        }
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => String::new(),
        }
    }

    /// Whether this person carries custom field values for the given group,
    /// which is how group membership shows up on the person record.
    pub fn in_group(&self, group_id: &str) -> bool {
        self.custom_field_values.contains_key(group_id)
    }

    /// Look up a custom field value scoped to a group.
    pub fn custom_field(&self, group_id: &str, field: &str) -> Option<&serde_json::Value> {
        self.custom_field_values.get(group_id)?.get(field)
    }
}
