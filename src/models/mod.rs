//! Data models for Folk CRM entities.

pub mod group;
pub mod person;
pub mod reminder;
pub mod user;

pub use group::Group;
pub use person::Person;
pub use reminder::{CreateReminderRequest, Reminder, Visibility};
pub use user::User;
