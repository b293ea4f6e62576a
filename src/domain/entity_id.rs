//! Prefix-validated id value objects.
//!
//! Folk ids are opaque strings with a type-discriminating prefix:
//! `per_` for people, `grp_` for groups, `rmd_` for reminders and `usr_`
//! for workspace users. The wrappers here validate the prefix at
//! construction and at deserialization.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// The id prefix this type accepts.
            pub const PREFIX: &'static str = $prefix;

            /// Create a new id, validating that it's non-empty and carries
            /// the expected prefix.
            ///
            /// # Errors
            ///
            /// Returns `ValidationError::EmptyId` for an empty string and
            /// `ValidationError::WrongPrefix` for a foreign prefix.
            pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
                let id = id.into();
                if id.is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                if !id.starts_with(Self::PREFIX) {
                    return Err(ValidationError::WrongPrefix {
                        expected: Self::PREFIX,
                        actual: id,
                    });
                }
                Ok(Self(id))
            }

            /// Get the id as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        // Serde support - serialize as string
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $name::new(s).map_err(serde::de::Error::custom)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// A type-safe wrapper for person ids (`per_…`).
    PersonId,
    "per_"
);

entity_id!(
    /// A type-safe wrapper for group ids (`grp_…`).
    GroupId,
    "grp_"
);

entity_id!(
    /// A type-safe wrapper for reminder ids (`rmd_…`).
    ReminderId,
    "rmd_"
);

entity_id!(
    /// A type-safe wrapper for workspace user ids (`usr_…`).
    UserId,
    "usr_"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_id_valid() {
        let id = PersonId::new("per_0GfLAHhcbeYOG5K7").unwrap();
        assert_eq!(id.as_str(), "per_0GfLAHhcbeYOG5K7");
    }

    #[test]
    fn test_entity_id_rejects_empty() {
        assert_eq!(PersonId::new(""), Err(ValidationError::EmptyId));
        assert_eq!(GroupId::new(""), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_entity_id_rejects_foreign_prefix() {
        let err = ReminderId::new("per_abc123").unwrap_err();
        assert_eq!(
            err,
            ValidationError::WrongPrefix {
                expected: "rmd_",
                actual: "per_abc123".to_string(),
            }
        );
    }

    #[test]
    fn test_group_id_display() {
        let id = GroupId::new("grp_influencers").unwrap();
        assert_eq!(format!("{}", id), "grp_influencers");
    }

    #[test]
    fn test_entity_id_serialization() {
        let id = UserId::new("usr_me").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"usr_me\"");
    }

    #[test]
    fn test_entity_id_deserialization() {
        let id: ReminderId = serde_json::from_str("\"rmd_123\"").unwrap();
        assert_eq!(id.as_str(), "rmd_123");
    }

    #[test]
    fn test_entity_id_deserialization_wrong_prefix_fails() {
        let result: Result<GroupId, _> = serde_json::from_str("\"per_123\"");
        assert!(result.is_err());
    }
}
