//! Boundary traits and the operator session gluing the draft set, the
//! persisted-case snapshot, and the two external services together.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::drafts::{DraftField, DraftSet, EditOutcome};
use crate::error::{CommitError, ExtractionFailure, StoreFailure};
use crate::lifecycle::pending_only;
use crate::types::{CandidateRecord, Category, NewCase, PersistedCase};

/// The opaque text/image → candidate extraction service.
#[async_trait]
pub trait ExtractionGateway {
    async fn extract_from_text(
        &self,
        text: &str,
    ) -> Result<Vec<CandidateRecord>, ExtractionFailure>;

    async fn extract_from_image(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<Vec<CandidateRecord>, ExtractionFailure>;
}

/// The persistent case store.
#[async_trait]
pub trait CaseStore {
    async fn list_cases(&self) -> Result<Vec<PersistedCase>, StoreFailure>;

    async fn create_case(&self, case: &NewCase) -> Result<PersistedCase, StoreFailure>;

    async fn set_complete(&self, id: i64) -> Result<PersistedCase, StoreFailure>;
}

/// Per-draft outcomes of a bulk commit, in commit order.
#[derive(Debug)]
pub struct CommitSummary {
    pub outcomes: Vec<(String, Result<PersistedCase, StoreFailure>)>,
}

impl CommitSummary {
    pub fn committed(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_err()).count()
    }
}

/// Operator session: owns the draft set and the persisted-case snapshot,
/// one writer for each, with mutation serialized by the single-threaded
/// caller. Network calls are awaited at the call site; nothing here runs
/// concurrently and nothing retries.
pub struct Session<G, S> {
    gateway: G,
    store: S,
    drafts: DraftSet,
    snapshot: Vec<PersistedCase>,
}

impl<G: ExtractionGateway, S: CaseStore> Session<G, S> {
    pub fn new(gateway: G, store: S) -> Self {
        Self::with_drafts(gateway, store, DraftSet::new())
    }

    /// Resume with a previously parked draft set.
    pub fn with_drafts(gateway: G, store: S, drafts: DraftSet) -> Self {
        Self {
            gateway,
            store,
            drafts,
            snapshot: Vec::new(),
        }
    }

    /// Extract candidates from free-form text and stage them as drafts,
    /// replacing the current set. Returns the staged count. On gateway
    /// failure the draft set is left unchanged.
    pub async fn extract_text(&mut self, text: &str) -> Result<usize, ExtractionFailure> {
        let candidates = self.gateway.extract_from_text(text).await?;
        info!(count = candidates.len(), "extracted candidates from text");
        self.drafts.load(candidates, Category::default());
        Ok(self.drafts.len())
    }

    /// Extract candidates from an image (screenshot or photo) and stage
    /// them as drafts, replacing the current set.
    pub async fn extract_image(
        &mut self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<usize, ExtractionFailure> {
        let candidates = self.gateway.extract_from_image(bytes, filename).await?;
        info!(count = candidates.len(), filename, "extracted candidates from image");
        self.drafts.load(candidates, Category::default());
        Ok(self.drafts.len())
    }

    /// Edit one field of one staged draft.
    pub fn edit_draft(&mut self, case_no: &str, field: DraftField, value: &str) -> EditOutcome {
        self.drafts.edit(case_no, field, value)
    }

    /// Commit one draft to the store. The batch category overrides
    /// whatever the draft carries. On success the draft leaves the set;
    /// on store failure the set is unchanged so the commit can be retried.
    pub async fn commit_one(
        &mut self,
        case_no: &str,
        category: Category,
    ) -> Result<PersistedCase, CommitError> {
        let Some(draft) = self.drafts.get(case_no) else {
            return Err(CommitError::NoSuchDraft(case_no.to_string()));
        };
        let payload = NewCase {
            case_no: draft.case_no.clone(),
            source: draft.source.clone(),
            category,
        };
        let persisted = self.store.create_case(&payload).await?;
        self.drafts.remove(case_no);
        info!(case_no, id = persisted.id, "committed draft");
        Ok(persisted)
    }

    /// Commit every staged draft sequentially in current order, each call
    /// awaited before the next begins. A failed commit does not abort the
    /// rest. The draft set is cleared regardless of individual outcomes;
    /// failures are reported in the summary, never retried here.
    pub async fn commit_all(&mut self, category: Category) -> CommitSummary {
        let drafts = self.drafts.take_all();
        let mut outcomes = Vec::with_capacity(drafts.len());
        for draft in drafts {
            let payload = NewCase {
                case_no: draft.case_no.clone(),
                source: draft.source.clone(),
                category,
            };
            let result = self.store.create_case(&payload).await;
            if let Err(err) = &result {
                warn!(case_no = %draft.case_no, %err, "commit failed");
            }
            outcomes.push((draft.case_no, result));
        }
        CommitSummary { outcomes }
    }

    /// Refetch the persisted snapshot. Never called implicitly: callers
    /// resynchronize after each mutating store call. On failure the held
    /// snapshot is unchanged.
    pub async fn refresh(&mut self) -> Result<&[PersistedCase], StoreFailure> {
        self.snapshot = self.store.list_cases().await?;
        Ok(&self.snapshot)
    }

    /// Request pending → complete for a persisted case. Sent through
    /// unconditionally; the store is the source of truth for legality.
    pub async fn mark_complete(&mut self, id: i64) -> Result<PersistedCase, StoreFailure> {
        let updated = self.store.set_complete(id).await?;
        info!(id, status = %updated.status, "case transition requested");
        Ok(updated)
    }

    pub fn drafts(&self) -> &DraftSet {
        &self.drafts
    }

    pub fn snapshot(&self) -> &[PersistedCase] {
        &self.snapshot
    }

    /// The actionable view: pending cases from the held snapshot.
    pub fn pending(&self) -> Vec<&PersistedCase> {
        pending_only(&self.snapshot)
    }
}
