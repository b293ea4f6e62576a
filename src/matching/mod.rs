//! Fuzzy matching utilities for group resolution.

pub mod group_resolver;

pub use group_resolver::{resolve_group, GroupMatch, MatchTier};
