//! Core case-intake pipeline: resolving extracted candidate batches into
//! reviewable drafts and committing them into the persisted-case lifecycle.

pub mod drafts;
pub mod error;
pub mod lifecycle;
pub mod resolve;
pub mod session;
pub mod types;

pub use drafts::{DraftField, DraftSet, EditOutcome};
pub use error::{CommitError, ExtractionFailure, StoreFailure};
pub use lifecycle::{pending_only, CaseStatus};
pub use resolve::inherit_sources;
pub use session::{CaseStore, CommitSummary, ExtractionGateway, Session};
pub use types::{CandidateRecord, Category, DraftRecord, NewCase, PersistedCase};
