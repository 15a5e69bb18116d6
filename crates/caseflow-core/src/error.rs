//! Error taxonomy for the two external boundaries.
//!
//! Both families are non-fatal: the relevant in-memory state is left
//! unchanged on failure so the operator can retry the same action. No
//! automatic retries anywhere.

use thiserror::Error;

/// The extraction gateway could not produce a candidate batch.
#[derive(Debug, Error)]
pub enum ExtractionFailure {
    #[error("extraction gateway unreachable: {0}")]
    Unreachable(String),
    #[error("extraction gateway returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed extraction payload: {0}")]
    MalformedPayload(String),
}

/// A case store call failed.
#[derive(Debug, Error)]
pub enum StoreFailure {
    #[error("store request failed: {0}")]
    Request(String),
    #[error("store returned {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("malformed store response: {0}")]
    MalformedResponse(String),
}

/// Why a single-draft commit could not persist its draft.
#[derive(Debug, Error)]
pub enum CommitError {
    #[error("no draft with case_no {0:?}")]
    NoSuchDraft(String),
    #[error(transparent)]
    Store(#[from] StoreFailure),
}
