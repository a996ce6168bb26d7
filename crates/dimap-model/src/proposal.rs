//! The automapper's output: per-target ordered source matches.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Proposed pairing from each target header to its best-matching sources.
///
/// Every target handed to the automapper is present, including those with
/// no qualifying source (empty match list). Matches are ordered best
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingProposal {
    matches: BTreeMap<String, Vec<String>>,
}

impl MappingProposal {
    /// Creates an empty proposal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the ordered matches for a target.
    pub fn insert(&mut self, target_id: impl Into<String>, sources: Vec<String>) {
        self.matches.insert(target_id.into(), sources);
    }

    /// Matched source names for a target, best first.
    #[must_use]
    pub fn matches_for(&self, target_id: &str) -> Option<&[String]> {
        self.matches.get(target_id).map(Vec::as_slice)
    }

    /// Number of targets in the proposal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True when the proposal contains no targets at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Iterates over `(target id, matched sources)` pairs in target-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.matches
            .iter()
            .map(|(target, sources)| (target.as_str(), sources.as_slice()))
    }

    /// Targets for which no source met the threshold.
    ///
    /// Callers typically use this to offer creating the missing source
    /// headers.
    #[must_use]
    pub fn unmatched_targets(&self) -> Vec<&str> {
        self.matches
            .iter()
            .filter(|(_, sources)| sources.is_empty())
            .map(|(target, _)| target.as_str())
            .collect()
    }

    /// Inverts the proposal into the source-to-targets shape used when a
    /// mapping is persisted.
    ///
    /// Only the best match per target participates; targets without a match
    /// are omitted.
    #[must_use]
    pub fn invert(&self) -> BTreeMap<String, Vec<String>> {
        let mut inverted: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (target, sources) in &self.matches {
            if let Some(best) = sources.first() {
                inverted.entry(best.clone()).or_default().push(target.clone());
            }
        }
        inverted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MappingProposal {
        let mut proposal = MappingProposal::new();
        proposal.insert("first_name", vec!["firstname".to_string()]);
        proposal.insert(
            "last_name",
            vec!["lastname".to_string(), "surname".to_string()],
        );
        proposal.insert("age", Vec::new());
        proposal
    }

    #[test]
    fn unmatched_targets_lists_empty_entries() {
        assert_eq!(sample().unmatched_targets(), vec!["age"]);
    }

    #[test]
    fn invert_uses_best_match_only() {
        let inverted = sample().invert();
        assert_eq!(
            inverted.get("firstname"),
            Some(&vec!["first_name".to_string()])
        );
        assert_eq!(
            inverted.get("lastname"),
            Some(&vec!["last_name".to_string()])
        );
        assert!(!inverted.contains_key("surname"));
        assert!(!inverted.contains_key("age"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["first_name"][0], "firstname");
        assert_eq!(json["age"].as_array().unwrap().len(), 0);
    }
}
