//! The draft set: the reviewable staging area between extraction and
//! commit. Loading replaces the whole set; identity is `case_no`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resolve::inherit_sources;
use crate::types::{CandidateRecord, Category, DraftRecord};

/// Which draft field an edit targets. A closed set so the edit surface
/// stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    CaseNo,
    Source,
    Category,
}

impl DraftField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CaseNo => "case_no",
            Self::Source => "source",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown draft field: {0:?} (expected case_no, source, or category)")]
pub struct ParseFieldError(String);

impl FromStr for DraftField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "case_no" | "caseno" => Ok(Self::CaseNo),
            "source" => Ok(Self::Source),
            "category" => Ok(Self::Category),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}

/// Result of an edit attempt. Editing a `case_no` nobody holds is not an
/// error the caller must handle, but the outcome is explicit so ignoring
/// it is a decision.
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Applied,
    /// No draft with that `case_no` is currently held.
    NotFound,
    /// The value does not parse for the targeted field (category only).
    InvalidValue(String),
}

/// In-memory collection of reviewable drafts.
///
/// One writer at a time; mutation is serialized by the single-threaded
/// caller. Serialisable so a CLI can park it between invocations.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DraftSet {
    drafts: Vec<DraftRecord>,
}

impl DraftSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a candidate batch and replace the held drafts wholesale.
    ///
    /// Never merges with a prior, uncommitted set. Each draft starts at
    /// `default_category`.
    pub fn load(&mut self, candidates: Vec<CandidateRecord>, default_category: Category) {
        self.drafts = inherit_sources(candidates)
            .into_iter()
            .map(|c| DraftRecord {
                case_no: c.case_no,
                source: c.source,
                category: default_category,
            })
            .collect();
    }

    /// Mutate exactly one field of exactly one draft in place.
    pub fn edit(&mut self, case_no: &str, field: DraftField, value: &str) -> EditOutcome {
        let Some(draft) = self.drafts.iter_mut().find(|d| d.case_no == case_no) else {
            return EditOutcome::NotFound;
        };
        match field {
            DraftField::CaseNo => draft.case_no = value.to_string(),
            DraftField::Source => draft.source = Some(value.to_string()),
            DraftField::Category => match value.parse() {
                Ok(category) => draft.category = category,
                Err(_) => return EditOutcome::InvalidValue(value.to_string()),
            },
        }
        EditOutcome::Applied
    }

    /// Remove and return the draft with the given `case_no`, if held.
    pub fn remove(&mut self, case_no: &str) -> Option<DraftRecord> {
        let idx = self.drafts.iter().position(|d| d.case_no == case_no)?;
        Some(self.drafts.remove(idx))
    }

    /// Drain every draft in current order, leaving the set empty.
    pub fn take_all(&mut self) -> Vec<DraftRecord> {
        std::mem::take(&mut self.drafts)
    }

    pub fn get(&self, case_no: &str) -> Option<&DraftRecord> {
        self.drafts.iter().find(|d| d.case_no == case_no)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DraftRecord> {
        self.drafts.iter()
    }

    pub fn as_slice(&self) -> &[DraftRecord] {
        &self.drafts
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}
