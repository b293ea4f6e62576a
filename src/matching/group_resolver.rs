//! Fuzzy group-name resolution.
//!
//! Agent-supplied group names are unreliable, so resolution is two-tier:
//! exact case-insensitive match on the full name first, then
//! case-insensitive substring containment. No match is an absence, not an
//! error; the caller decides how to report it.

use crate::models::Group;

/// Which tier produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Exact case-insensitive match on the full group name
    Exact,

    /// The target appears as a case-insensitive substring of the group name
    Substring,
}

/// A resolved group together with the tier that matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupMatch {
    /// The matched group
    pub group: Group,

    /// Tier that produced this match
    pub tier: MatchTier,
}

/// Resolve a target name against a list of groups.
///
/// Exact matches win over substring matches regardless of ordering; within
/// a tier the first group in listing order wins. Returns `None` when
/// neither tier matches.
pub fn resolve_group(target: &str, groups: &[Group]) -> Option<GroupMatch> {
    let target = normalize(target);
    if target.is_empty() {
        return None;
    }

    for group in groups {
        if normalize(&group.name) == target {
            return Some(GroupMatch {
                group: group.clone(),
                tier: MatchTier::Exact,
            });
        }
    }

    for group in groups {
        if normalize(&group.name).contains(&target) {
            return Some(GroupMatch {
                group: group.clone(),
                tier: MatchTier::Substring,
            });
        }
    }

    None
}

/// Normalize a name for comparison.
fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
