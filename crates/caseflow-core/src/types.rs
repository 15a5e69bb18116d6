//! Case record types exchanged with the extraction gateway and case store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lifecycle::CaseStatus;

/// A raw candidate produced by the extraction gateway.
///
/// Sequence order is significant: it is the only signal available for
/// source inheritance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub case_no: String,
    /// Explicit origin, if the gateway found one next to the case number.
    /// The gateway sends `null` (or omits the key) when it found none.
    #[serde(default)]
    pub source: Option<String>,
}

/// Billing category of a case. Wire form is the upper-case string the
/// store records verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "FREE")]
    Free,
    #[serde(rename = "PAID")]
    Paid,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Paid => "PAID",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown category: {0:?} (expected FREE or PAID)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("free") {
            Ok(Self::Free)
        } else if s.eq_ignore_ascii_case("paid") {
            Ok(Self::Paid)
        } else {
            Err(ParseCategoryError(s.to_string()))
        }
    }
}

/// An extracted, not-yet-persisted case record, freely editable before
/// commit. Identity within a draft set is `case_no`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftRecord {
    pub case_no: String,
    /// `None` only when no candidate up to this one in the batch ever
    /// supplied a source — a gap for the reviewer to fill, not an error.
    pub source: Option<String>,
    /// Starts at the batch default; the category chosen at commit time
    /// overrides it in the persisted payload.
    pub category: Category,
}

/// Payload for creating a persisted case in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCase {
    pub case_no: String,
    pub source: Option<String>,
    pub category: Category,
}

/// A case record owned by the store. The core never mutates one directly,
/// only requests transitions through [`crate::session::CaseStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedCase {
    /// Store-assigned identifier, opaque to the core.
    pub id: i64,
    pub case_no: String,
    #[serde(default)]
    pub source: Option<String>,
    pub category: Category,
    pub status: CaseStatus,
    /// ISO 8601 timestamp string, assigned by the store.
    pub create_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_missing_source_key() {
        let c: CandidateRecord = serde_json::from_str(r#"{"case_no": "1234567"}"#).unwrap();
        assert_eq!(c.case_no, "1234567");
        assert!(c.source.is_none());
    }

    #[test]
    fn candidate_null_source() {
        let c: CandidateRecord =
            serde_json::from_str(r#"{"case_no": "1234567", "source": null}"#).unwrap();
        assert!(c.source.is_none());
    }

    #[test]
    fn candidate_explicit_source() {
        let c: CandidateRecord =
            serde_json::from_str(r#"{"case_no": "1234567", "source": "John Doe"}"#).unwrap();
        assert_eq!(c.source.as_deref(), Some("John Doe"));
    }

    #[test]
    fn category_wire_form() {
        assert_eq!(serde_json::to_string(&Category::Free).unwrap(), r#""FREE""#);
        assert_eq!(serde_json::to_string(&Category::Paid).unwrap(), r#""PAID""#);
        let c: Category = serde_json::from_str(r#""PAID""#).unwrap();
        assert_eq!(c, Category::Paid);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("free".parse::<Category>().unwrap(), Category::Free);
        assert_eq!("FREE".parse::<Category>().unwrap(), Category::Free);
        assert_eq!("Paid".parse::<Category>().unwrap(), Category::Paid);
        assert!("gratis".parse::<Category>().is_err());
    }

    #[test]
    fn persisted_case_from_store_json() {
        let json = r#"{
            "id": 7,
            "case_no": "1234567",
            "source": "John Doe",
            "category": "FREE",
            "status": "Pending",
            "create_date": "2026-08-30T12:00:00"
        }"#;
        let case: PersistedCase = serde_json::from_str(json).unwrap();
        assert_eq!(case.id, 7);
        assert_eq!(case.status, CaseStatus::Pending);
        assert_eq!(case.category, Category::Free);
    }

    #[test]
    fn new_case_serialises_null_source() {
        let payload = NewCase {
            case_no: "1234567".into(),
            source: None,
            category: Category::Paid,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""source":null"#));
        assert!(json.contains(r#""category":"PAID""#));
    }
}
