//! Header identities on both sides of a mapping.

use serde::{Deserialize, Serialize};

/// A column the target system expects, with any known synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetHeader {
    /// Canonical header name, unique within the target set.
    pub id: String,
    /// Alternative names accepted for this header, in preference order.
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl TargetHeader {
    /// Creates a target header with no alternative names.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            alternatives: Vec::new(),
        }
    }

    /// Adds alternative names accepted for this header.
    #[must_use]
    pub fn with_alternatives<I, S>(mut self, alternatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.alternatives
            .extend(alternatives.into_iter().map(Into::into));
        self
    }
}

/// A column present in the incoming dataset.
///
/// Only `name` participates in matching; `hidden` marks headers the
/// surrounding application has excluded from consideration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceHeader {
    /// Display name, unique within the source set.
    pub name: String,
    /// Whether the header is excluded from matching.
    #[serde(default)]
    pub hidden: bool,
}

impl SourceHeader {
    /// Creates a visible source header.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hidden: false,
        }
    }
}

impl From<&str> for SourceHeader {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for SourceHeader {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Filters out headers flagged hidden, preserving input order.
pub fn visible(headers: &[SourceHeader]) -> Vec<SourceHeader> {
    headers.iter().filter(|h| !h.hidden).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternatives_default_to_empty_on_deserialize() {
        let header: TargetHeader = serde_json::from_str(r#"{"id": "first_name"}"#).unwrap();
        assert_eq!(header.id, "first_name");
        assert!(header.alternatives.is_empty());
    }

    #[test]
    fn visible_drops_hidden_headers() {
        let headers = vec![
            SourceHeader::new("a"),
            SourceHeader {
                name: "b".to_string(),
                hidden: true,
            },
            SourceHeader::new("c"),
        ];
        let names: Vec<_> = visible(&headers).into_iter().map(|h| h.name).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
