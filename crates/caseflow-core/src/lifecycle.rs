//! Two-state lifecycle of a persisted case: pending → complete, one
//! transition, one direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::types::PersistedCase;

/// Lifecycle state of a persisted case.
///
/// The store historically writes `"Pending"` (capital P, the column
/// default) on create but `"complete"` after transition, so parsing is
/// case-insensitive. Comparison is always on the normalised enum, never
/// on the raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Pending,
    Complete,
}

impl CaseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown case status: {0:?}")]
pub struct ParseStatusError(String);

impl FromStr for CaseStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("pending") {
            Ok(Self::Pending)
        } else if s.eq_ignore_ascii_case("complete") {
            Ok(Self::Complete)
        } else {
            Err(ParseStatusError(s.to_string()))
        }
    }
}

impl Serialize for CaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CaseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Filter a snapshot to the actionable (pending) cases, preserving order.
///
/// Pure function over the latest fetched snapshot; holds no state.
pub fn pending_only(cases: &[PersistedCase]) -> Vec<&PersistedCase> {
    cases
        .iter()
        .filter(|c| c.status == CaseStatus::Pending)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn case(id: i64, status: CaseStatus) -> PersistedCase {
        PersistedCase {
            id,
            case_no: format!("{:07}", id),
            source: None,
            category: Category::Free,
            status,
            create_date: "2026-08-30T12:00:00".into(),
        }
    }

    #[test]
    fn parses_store_spellings() {
        assert_eq!("Pending".parse::<CaseStatus>().unwrap(), CaseStatus::Pending);
        assert_eq!("pending".parse::<CaseStatus>().unwrap(), CaseStatus::Pending);
        assert_eq!("complete".parse::<CaseStatus>().unwrap(), CaseStatus::Complete);
        assert_eq!("COMPLETE".parse::<CaseStatus>().unwrap(), CaseStatus::Complete);
        assert!("done".parse::<CaseStatus>().is_err());
    }

    #[test]
    fn deserialises_capitalised_default() {
        let s: CaseStatus = serde_json::from_str(r#""Pending""#).unwrap();
        assert_eq!(s, CaseStatus::Pending);
    }

    #[test]
    fn serialises_lower_case() {
        assert_eq!(serde_json::to_string(&CaseStatus::Pending).unwrap(), r#""pending""#);
        assert_eq!(serde_json::to_string(&CaseStatus::Complete).unwrap(), r#""complete""#);
    }

    #[test]
    fn pending_only_filters_and_preserves_order() {
        let cases = vec![
            case(1, CaseStatus::Pending),
            case(2, CaseStatus::Complete),
            case(3, CaseStatus::Pending),
        ];
        let pending = pending_only(&cases);
        let ids: Vec<i64> = pending.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn pending_only_empty_snapshot() {
        assert!(pending_only(&[]).is_empty());
    }

    #[test]
    fn completed_case_excluded_from_pending_view() {
        // Scenario: mark id 2 complete, refetch, filter — id 2 is gone.
        let after = vec![case(1, CaseStatus::Pending), case(2, CaseStatus::Complete)];
        let pending = pending_only(&after);
        assert!(pending.iter().all(|c| c.id != 2));
    }
}
