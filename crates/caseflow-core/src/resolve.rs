//! Source inheritance over an extracted candidate batch.
//!
//! Pasted case lists often name a source once and then list several case
//! numbers under it, so a candidate lacking an explicit source adopts the
//! nearest preceding explicit one in scan order.

use crate::types::CandidateRecord;

/// Fill missing sources by carrying forward the last explicit value.
///
/// Single left-to-right pass with one piece of state, the last source
/// seen. A candidate with an explicit source updates that state and keeps
/// its own value; one without takes the state's value if set, otherwise
/// stays absent. Output length and order always equal the input's.
///
/// Pure and deterministic: no I/O, no failure modes. A batch where no
/// candidate ever names a source comes back all-absent, left for the
/// reviewer to fill manually.
pub fn inherit_sources(mut candidates: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
    let mut last_seen: Option<String> = None;
    for candidate in &mut candidates {
        match &candidate.source {
            Some(source) => last_seen = Some(source.clone()),
            None => candidate.source = last_seen.clone(),
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cand(case_no: &str, source: Option<&str>) -> CandidateRecord {
        CandidateRecord {
            case_no: case_no.to_string(),
            source: source.map(str::to_string),
        }
    }

    fn sources(records: &[CandidateRecord]) -> Vec<Option<&str>> {
        records.iter().map(|r| r.source.as_deref()).collect()
    }

    #[test]
    fn empty_batch() {
        assert!(inherit_sources(vec![]).is_empty());
    }

    #[test]
    fn carries_forward_last_explicit_source() {
        let batch = vec![
            cand("C1", Some("Court X")),
            cand("C2", None),
            cand("C3", Some("Court Y")),
            cand("C4", None),
        ];
        let resolved = inherit_sources(batch);
        assert_eq!(
            sources(&resolved),
            vec![
                Some("Court X"),
                Some("Court X"),
                Some("Court Y"),
                Some("Court Y"),
            ]
        );
    }

    #[test]
    fn no_source_anywhere_stays_absent() {
        let resolved = inherit_sources(vec![cand("C1", None)]);
        assert_eq!(sources(&resolved), vec![None]);
    }

    #[test]
    fn leading_gap_stays_absent_until_first_explicit() {
        let batch = vec![cand("C1", None), cand("C2", Some("Court X")), cand("C3", None)];
        let resolved = inherit_sources(batch);
        assert_eq!(sources(&resolved), vec![None, Some("Court X"), Some("Court X")]);
    }

    #[test]
    fn fully_explicit_batch_is_untouched() {
        let batch = vec![cand("C1", Some("A")), cand("C2", Some("B"))];
        let resolved = inherit_sources(batch.clone());
        assert_eq!(resolved, batch);
    }

    #[test]
    fn resolving_twice_is_a_no_op() {
        let batch = vec![
            cand("C1", Some("Court X")),
            cand("C2", None),
            cand("C3", None),
        ];
        let once = inherit_sources(batch);
        let twice = inherit_sources(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn preserves_length_and_order() {
        let batch = vec![
            cand("C3", None),
            cand("C1", Some("X")),
            cand("C2", None),
            cand("C1", None),
        ];
        let resolved = inherit_sources(batch);
        let case_nos: Vec<&str> = resolved.iter().map(|r| r.case_no.as_str()).collect();
        assert_eq!(case_nos, vec!["C3", "C1", "C2", "C1"]);
    }

    #[test]
    fn explicit_source_is_never_overwritten() {
        let batch = vec![cand("C1", Some("A")), cand("C2", Some("B")), cand("C3", None)];
        let resolved = inherit_sources(batch);
        assert_eq!(sources(&resolved), vec![Some("A"), Some("B"), Some("B")]);
    }
}
