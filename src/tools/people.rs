//! People listing and group-scoped discovery tools.

use crate::client::AsyncFolkClient;
use crate::error::FolkApiResult;
use crate::filter::Filter;
use crate::matching::{resolve_group, MatchTier};
use crate::models::{Group, Person};
use crate::tools::GroupSummary;
use serde::Serialize;
use std::sync::Arc;

/// A person reshaped for agent consumption.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PersonSummary {
    /// Person id (prefixed `per_`)
    pub id: String,

    /// Best available display name
    pub name: String,

    /// Email addresses, primary first
    pub emails: Vec<String>,

    /// Custom field values scoped to the group the query ran against,
    /// when the query was group-scoped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<serde_json::Value>,
}

impl PersonSummary {
    /// Reshape a person, optionally projecting the custom fields of one group.
    pub fn from_person(person: &Person, group_id: Option<&str>) -> Self {
        let custom_fields = group_id
            .and_then(|gid| person.custom_field_values.get(gid))
            .map(|fields| serde_json::to_value(fields).unwrap_or(serde_json::Value::Null));

        Self {
            id: person.id.clone(),
            name: person.display_name(),
            emails: person.emails.clone(),
            custom_fields,
        }
    }
}

/// Parameters for finding people in a group.
#[derive(Debug, Clone, Default)]
pub struct FindPeopleInGroupParams {
    /// Group name to resolve (fuzzy, case-insensitive)
    pub group_name: String,

    /// Custom field name to narrow by, scoped to the resolved group
    pub field: Option<String>,

    /// Value the custom field must match
    pub value: Option<serde_json::Value>,

    /// Maximum number of people to return
    pub limit: Option<usize>,
}

/// Response from find_people_in_group.
///
/// An unresolvable group name is reported, not raised: `group` stays `None`
/// and `people` empty.
#[derive(Debug, Clone, Serialize)]
pub struct FindPeopleInGroupResponse {
    /// The group the name resolved to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupSummary>,

    /// Which tier resolved the group ("exact" or "substring")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_tier: Option<String>,

    /// People in the resolved group
    pub people: Vec<PersonSummary>,
}

/// People tools for listing and group-scoped discovery.
pub struct PersonTools {
    client: Arc<dyn AsyncFolkClient>,
    default_limit: usize,
}

impl PersonTools {
    /// Create new people tools.
    pub fn new(client: Arc<dyn AsyncFolkClient>, default_limit: usize) -> Self {
        Self {
            client,
            default_limit,
        }
    }

    /// List people, optionally narrowed to a fuzzily-resolved group.
    ///
    /// When `group_name` is given but resolves to nothing, an empty listing
    /// with `group: None` is returned rather than an error.
    pub async fn list_people(
        &self,
        limit: Option<usize>,
        group_name: Option<String>,
    ) -> FolkApiResult<FindPeopleInGroupResponse> {
        let limit = limit.unwrap_or(self.default_limit);

        let (filter, group, match_tier) = match group_name {
            Some(name) => match self.resolve(&name).await? {
                Some((group, tier)) => (
                    Some(Filter::in_group(group.id.clone())),
                    Some(group),
                    Some(tier),
                ),
                None => {
                    tracing::info!("No group matched '{}'", name);
                    return Ok(FindPeopleInGroupResponse {
                        group: None,
                        match_tier: None,
                        people: Vec::new(),
                    });
                }
            },
            None => (None, None, None),
        };

        let group_id = group.as_ref().map(|g| g.id.clone());
        let people = self.client.list_people(limit, filter).await?;

        Ok(FindPeopleInGroupResponse {
            group: group.as_ref().map(GroupSummary::from),
            match_tier: match_tier.map(tier_name),
            people: people
                .iter()
                .map(|p| PersonSummary::from_person(p, group_id.as_deref()))
                .collect(),
        })
    }

    /// Find people in a group, optionally narrowed by a custom field value.
    ///
    /// Resolves the group name through the two-tier fuzzy resolver, then
    /// queries people through the filter DSL. Reports an unresolvable group
    /// instead of erroring.
    pub async fn find_people_in_group(
        &self,
        params: FindPeopleInGroupParams,
    ) -> FolkApiResult<FindPeopleInGroupResponse> {
        let limit = params.limit.unwrap_or(self.default_limit);

        let Some((group, tier)) = self.resolve(&params.group_name).await? else {
            tracing::info!("No group matched '{}'", params.group_name);
            return Ok(FindPeopleInGroupResponse {
                group: None,
                match_tier: None,
                people: Vec::new(),
            });
        };

        let filter = match (&params.field, &params.value) {
            (Some(field), Some(value)) => Filter::and([
                Filter::in_group(group.id.clone()),
                Filter::custom_field(group.id.clone(), field.clone(), value.clone()),
            ]),
            _ => Filter::in_group(group.id.clone()),
        };

        let people = self.client.list_people(limit, Some(filter)).await?;

        Ok(FindPeopleInGroupResponse {
            people: people
                .iter()
                .map(|p| PersonSummary::from_person(p, Some(group.id.as_str())))
                .collect(),
            group: Some(GroupSummary::from(&group)),
            match_tier: Some(tier_name(tier)),
        })
    }

    /// Resolve a group name against the workspace's groups.
    async fn resolve(&self, name: &str) -> FolkApiResult<Option<(Group, MatchTier)>> {
        let groups = self.client.list_groups(self.default_limit).await?;
        Ok(resolve_group(name, &groups).map(|m| (m.group, m.tier)))
    }
}

fn tier_name(tier: MatchTier) -> String {
    match tier {
        MatchTier::Exact => "exact".to_string(),
        MatchTier::Substring => "substring".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_person_summary_projects_group_fields() {
        let mut custom = HashMap::new();
        custom.insert(
            "grp_1".to_string(),
            HashMap::from([("Status".to_string(), serde_json::json!("Active"))]),
        );
        let person = Person {
            id: "per_1".to_string(),
            full_name: Some("Ada Lovelace".to_string()),
            emails: vec!["ada@example.com".to_string()],
            custom_field_values: custom,
            ..Default::default()
        };

        let summary = PersonSummary::from_person(&person, Some("grp_1"));
        assert_eq!(summary.name, "Ada Lovelace");
        assert_eq!(summary.custom_fields.unwrap()["Status"], "Active");

        let summary = PersonSummary::from_person(&person, Some("grp_other"));
        assert!(summary.custom_fields.is_none());

        let summary = PersonSummary::from_person(&person, None);
        assert!(summary.custom_fields.is_none());
    }

    #[test]
    fn test_unresolved_response_serialization() {
        let response = FindPeopleInGroupResponse {
            group: None,
            match_tier: None,
            people: Vec::new(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert!(value.get("group").is_none());
        assert_eq!(value["people"], serde_json::json!([]));
    }
}
