use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rand::Rng;

use super::backend::StorageBackend;
use super::stats::{summarize, SummaryStats};
use super::types::{AssessmentDraft, AssessmentRecord};

/// Repository over the single stored collection of assessments.
///
/// Every mutation is a read-modify-write of the whole collection; the design
/// assumes a single writer at a time (one session), matching the storage it
/// replaces. Reads never fail: missing or unparseable backing data is treated
/// as an empty collection so the dashboard stays usable after a cleared or
/// tampered store. Writes do fail loudly.
pub struct AssessmentStore<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> AssessmentStore<B> {
    pub fn new(backend: B) -> Self {
        AssessmentStore { backend }
    }

    /// Stamp and persist a completed assessment. Returns the generated id.
    pub fn save(&mut self, draft: AssessmentDraft) -> Result<String> {
        let mut records = self.list();

        let mut id = generate_id();
        while records.iter().any(|r| r.id == id) {
            id = generate_id();
        }

        records.push(AssessmentRecord {
            id: id.clone(),
            timestamp: Utc::now(),
            project_info: draft.project_info,
            screening_answers: draft.screening_answers,
            assessment_scores: draft.assessment_scores,
            result: draft.result,
        });

        self.persist(&records)?;
        Ok(id)
    }

    /// All records in insertion order. Missing or corrupt backing data reads
    /// as empty rather than failing.
    pub fn list(&self) -> Vec<AssessmentRecord> {
        match self.backend.read() {
            Ok(Some(data)) => serde_json::from_str(&data).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<AssessmentRecord> {
        self.list().into_iter().find(|r| r.id == id)
    }

    /// Remove the record with the given id. Deleting an absent id is a no-op.
    pub fn delete(&mut self, id: &str) -> Result<()> {
        let mut records = self.list();
        let before = records.len();
        records.retain(|r| r.id != id);

        if records.len() != before {
            self.persist(&records)?;
        }
        Ok(())
    }

    /// Drop the whole collection.
    pub fn clear(&mut self) -> Result<()> {
        self.backend.remove()
    }

    /// Serialize the full collection as pretty-printed JSON for download or
    /// hand inspection.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.list()).context("Failed to serialize assessments")
    }

    /// Parse an exported payload and wholesale-replace the collection.
    /// Returns the number of records imported. Any parse or shape failure
    /// leaves the existing collection untouched.
    pub fn import_json(&mut self, data: &str) -> Result<usize> {
        let value: serde_json::Value =
            serde_json::from_str(data).context("Import file is not valid JSON")?;

        if !value.is_array() {
            anyhow::bail!("Import file must contain a top-level JSON array of assessments");
        }

        let records: Vec<AssessmentRecord> = serde_json::from_value(value)
            .context("Import file does not match the assessment record format")?;

        let count = records.len();
        self.persist(&records)?;
        Ok(count)
    }

    pub fn summary_stats(&self) -> SummaryStats {
        summarize(&self.list())
    }

    fn persist(&mut self, records: &[AssessmentRecord]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(records).context("Failed to serialize assessments")?;
        self.backend.write(&json)
    }
}

/// Suggested filename for an export taken on the given date:
/// `wcc_assessments_<YYYY-MM-DD>.json`.
pub fn export_filename(date: DateTime<Utc>) -> String {
    format!("wcc_assessments_{}.json", date.format("%Y-%m-%d"))
}

/// Collision-resistant id: current millis in base36 plus a random base36
/// suffix. Not globally unique, but save() re-rolls on the rare collision.
fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u128;
    let mut id = to_base36(millis);

    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    for _ in 0..9 {
        id.push(ALPHABET[rng.gen_range(0..ALPHABET.len())] as char);
    }
    id
}

fn to_base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    out.iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::backend::MemoryBackend;
    use crate::store::types::sample_record;

    fn store() -> AssessmentStore<MemoryBackend> {
        AssessmentStore::new(MemoryBackend::new())
    }

    fn draft_from(record: &AssessmentRecord) -> AssessmentDraft {
        AssessmentDraft {
            project_info: record.project_info.clone(),
            screening_answers: record.screening_answers,
            assessment_scores: record.assessment_scores,
            result: record.result.clone(),
        }
    }

    #[test]
    fn test_empty_store_lists_nothing() {
        assert!(store().list().is_empty());
    }

    #[test]
    fn test_save_assigns_id_and_timestamp() {
        let mut store = store();
        let before = Utc::now();

        let id = store.save(draft_from(&sample_record("ignored"))).unwrap();
        assert!(!id.is_empty());

        let records = store.list();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert!(records[0].timestamp >= before);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = store();
        let first = store.save(draft_from(&sample_record("a"))).unwrap();
        let second = store.save(draft_from(&sample_record("b"))).unwrap();

        let ids: Vec<String> = store.list().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_get_by_id() {
        let mut store = store();
        let id = store.save(draft_from(&sample_record("x"))).unwrap();

        assert!(store.get(&id).is_some());
        assert!(store.get("nonexistent").is_none());
    }

    #[test]
    fn test_delete_removes_only_matching_record() {
        let mut store = store();
        let keep = store.save(draft_from(&sample_record("keep"))).unwrap();
        let gone = store.save(draft_from(&sample_record("gone"))).unwrap();

        store.delete(&gone).unwrap();

        let records = store.list();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, keep);
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut store = store();
        let id = store.save(draft_from(&sample_record("stay"))).unwrap();

        let before = store.list();
        store.delete("no-such-id").unwrap();
        assert_eq!(store.list(), before);
        assert!(store.get(&id).is_some());
    }

    #[test]
    fn test_clear_empties_the_store() {
        let mut store = store();
        store.save(draft_from(&sample_record("a"))).unwrap();
        store.save(draft_from(&sample_record("b"))).unwrap();

        store.clear().unwrap();
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_corrupt_backing_data_reads_as_empty() {
        let mut backend = MemoryBackend::new();
        backend.write("{not json").unwrap();

        let store = AssessmentStore::new(backend);
        assert!(store.list().is_empty());
        assert_eq!(store.summary_stats().total, 0);
    }

    #[test]
    fn test_export_import_round_trip() {
        let mut store = store();
        store.save(draft_from(&sample_record("a"))).unwrap();
        store.save(draft_from(&sample_record("b"))).unwrap();
        let original = store.list();

        let exported = store.export_json().unwrap();

        let mut other = AssessmentStore::new(MemoryBackend::new());
        let count = other.import_json(&exported).unwrap();
        assert_eq!(count, 2);
        assert_eq!(other.list(), original);
    }

    #[test]
    fn test_import_replaces_existing_collection() {
        let mut store = store();
        store.save(draft_from(&sample_record("old"))).unwrap();

        let count = store.import_json("[]").unwrap();
        assert_eq!(count, 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_import_invalid_json_leaves_store_untouched() {
        let mut store = store();
        let id = store.save(draft_from(&sample_record("safe"))).unwrap();

        assert!(store.import_json("{broken").is_err());
        assert!(store.get(&id).is_some());
    }

    #[test]
    fn test_import_non_array_is_format_error() {
        let mut store = store();
        let id = store.save(draft_from(&sample_record("safe"))).unwrap();

        let err = store.import_json("{\"assessments\": []}").unwrap_err();
        assert!(err.to_string().contains("top-level JSON array"));
        assert!(store.get(&id).is_some());
    }

    #[test]
    fn test_generated_ids_are_unique_in_practice() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(generate_id()));
        }
    }

    #[test]
    fn test_export_filename_pattern() {
        let date = "2025-03-14T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(export_filename(date), "wcc_assessments_2025-03-14.json");
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(46655), "zzz");
    }
}
