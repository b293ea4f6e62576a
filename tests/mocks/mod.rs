//! Mock AsyncFolkClient for tool tests.
//!
//! Stores canned groups/people, applies filters the way the remote query
//! layer would, and records the filters it receives so tests can assert the
//! exact wire shape tools construct.

use async_trait::async_trait;
use folk_mcp_server::client::AsyncFolkClient;
use folk_mcp_server::error::{FolkApiError, FolkApiResult};
use folk_mcp_server::{Filter, Group, Person, Reminder, User, Visibility};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

pub struct MockFolkClient {
    groups: Mutex<Vec<Group>>,
    people: Mutex<Vec<Person>>,
    reminders: Mutex<Vec<Reminder>>,
    current_user: User,
    last_filter: Mutex<Option<serde_json::Value>>,
    list_people_calls: AtomicU64,
    next_reminder_id: AtomicU64,
}

impl MockFolkClient {
    pub fn new() -> Self {
        Self {
            groups: Mutex::new(Vec::new()),
            people: Mutex::new(Vec::new()),
            reminders: Mutex::new(Vec::new()),
            current_user: User {
                id: "usr_me1".to_string(),
                full_name: Some("Mock User".to_string()),
                email: Some("me@example.com".to_string()),
            },
            last_filter: Mutex::new(None),
            list_people_calls: AtomicU64::new(0),
            next_reminder_id: AtomicU64::new(1),
        }
    }

    pub fn add_group(&self, group: Group) {
        self.groups.lock().unwrap().push(group);
    }

    pub fn add_person(&self, person: Person) {
        self.people.lock().unwrap().push(person);
    }

    /// The wire JSON of the last filter passed to list_people, if any.
    pub fn last_filter(&self) -> Option<serde_json::Value> {
        self.last_filter.lock().unwrap().clone()
    }

    pub fn list_people_calls(&self) -> u64 {
        self.list_people_calls.load(Ordering::Relaxed)
    }

    /// Ids of reminders currently stored.
    pub fn reminder_ids(&self) -> Vec<String> {
        self.reminders
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.id.clone())
            .collect()
    }

    /// Apply a filter object the way the remote query layer would.
    fn person_matches(person: &Person, filter: &serde_json::Value) -> bool {
        if let Some(group_id) = filter
            .pointer("/groups/in/id")
            .and_then(|v| v.as_str())
        {
            if !person.in_group(group_id) {
                return false;
            }
        }

        if let Some(by_group) = filter.get("customFieldValues").and_then(|v| v.as_object()) {
            for (group_id, fields) in by_group {
                let Some(fields) = fields.as_object() else {
                    return false;
                };
                for (field, op) in fields {
                    let Some(expected) = op.get("in") else {
                        return false;
                    };
                    if person.custom_field(group_id, field) != Some(expected) {
                        return false;
                    }
                }
            }
        }

        true
    }
}

#[async_trait]
impl AsyncFolkClient for MockFolkClient {
    async fn list_people(
        &self,
        limit: usize,
        filters: Option<Filter>,
    ) -> FolkApiResult<Vec<Person>> {
        self.list_people_calls.fetch_add(1, Ordering::Relaxed);
        let filter_value = filters.map(|f| f.to_value());
        *self.last_filter.lock().unwrap() = filter_value.clone();

        let mut people: Vec<Person> = self.people.lock().unwrap().clone();
        if let Some(filter) = &filter_value {
            people.retain(|p| Self::person_matches(p, filter));
        }
        people.truncate(limit);
        Ok(people)
    }

    async fn list_groups(&self, limit: usize) -> FolkApiResult<Vec<Group>> {
        let mut groups = self.groups.lock().unwrap().clone();
        groups.truncate(limit);
        Ok(groups)
    }

    async fn get_current_user(&self) -> FolkApiResult<User> {
        Ok(self.current_user.clone())
    }

    async fn create_reminder(
        &self,
        entity_id: &str,
        name: &str,
        trigger_time: &str,
        visibility: Visibility,
        assigned_users: Vec<String>,
    ) -> FolkApiResult<Reminder> {
        // The real API rejects public reminders without assignees
        if visibility == Visibility::Public && assigned_users.is_empty() {
            return Err(FolkApiError::Api {
                status: 422,
                message: "assignedUsers is required for public reminders".to_string(),
                details: serde_json::json!({"field": "assignedUsers"}),
            });
        }

        let seq = self.next_reminder_id.fetch_add(1, Ordering::Relaxed);
        let reminder = Reminder {
            id: format!("rmd_{}", seq),
            name: name.to_string(),
            trigger_time: trigger_time.to_string(),
            visibility,
            entity_id: Some(entity_id.to_string()),
            assigned_users,
        };
        self.reminders.lock().unwrap().push(reminder.clone());
        Ok(reminder)
    }

    async fn delete_reminder(&self, id: &str) -> FolkApiResult<bool> {
        let mut reminders = self.reminders.lock().unwrap();
        let before = reminders.len();
        reminders.retain(|r| r.id != id);
        if reminders.len() == before {
            return Err(FolkApiError::NotFound(format!("Reminder {} not found", id)));
        }
        Ok(true)
    }
}
