//! MCP tool implementations.
//!
//! Thin functions over the async Folk client that reshape API results into
//! JSON-serializable values for agent consumption.

pub mod groups;
pub mod people;
pub mod reminders;

pub use groups::{GroupSummary, GroupTools, ListGroupsResponse};
pub use people::{FindPeopleInGroupParams, FindPeopleInGroupResponse, PersonSummary, PersonTools};
pub use reminders::{CreateReminderParams, DeleteReminderResponse, ReminderTools};
