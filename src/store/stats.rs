use std::collections::BTreeMap;

use serde::Serialize;

use crate::scoring::{Decision, Tier, TierLabel};

use super::types::AssessmentRecord;
use super::value::parse_project_value;

/// Per-tier record counts for one side of the matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub development: usize,
    pub leverage: usize,
    pub nuisance: usize,
    pub avoid: usize,
}

impl TierCounts {
    fn bump(&mut self, label: TierLabel) {
        match label.tier() {
            Some(Tier::Development) => self.development += 1,
            Some(Tier::Leverage) => self.leverage += 1,
            Some(Tier::Nuisance) => self.nuisance += 1,
            Some(Tier::Avoid) => self.avoid += 1,
            // Screening-failure records carry no category.
            None => {}
        }
    }
}

/// Dashboard summary over the whole collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub total: usize,
    /// Everything that is not an exact DECLINE.
    pub approved: usize,
    pub declined: usize,
    /// Sum of declared project values run through the lossy value heuristic.
    pub total_value: f64,
    /// Mean total score, rounded to the nearest integer. 0 when empty.
    pub avg_score: i64,
    pub client_categories: TierCounts,
    pub work_categories: TierCounts,
    /// How often each decision string occurred, in stable order.
    pub decisions: BTreeMap<String, usize>,
}

/// Compute summary statistics. An empty collection yields all zeros, never a
/// division error.
pub fn summarize(records: &[AssessmentRecord]) -> SummaryStats {
    let mut stats = SummaryStats {
        total: records.len(),
        ..Default::default()
    };

    if records.is_empty() {
        return stats;
    }

    let mut score_sum: u64 = 0;

    for record in records {
        if record.result.decision == Decision::Decline {
            stats.declined += 1;
        } else {
            stats.approved += 1;
        }

        *stats
            .decisions
            .entry(record.result.decision.as_str().to_string())
            .or_insert(0) += 1;

        stats.total_value += parse_project_value(&record.project_info.value);
        score_sum += u64::from(record.result.total_score);

        stats.client_categories.bump(record.result.client_category);
        stats.work_categories.bump(record.result.work_category);
    }

    stats.avg_score = (score_sum as f64 / records.len() as f64).round() as i64;
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::evaluate;
    use crate::store::types::sample_record;

    fn declined_record(id: &str) -> AssessmentRecord {
        let mut record = sample_record(id);
        record.screening_answers.within_wa = Some(false);
        record.result = evaluate(&record.screening_answers, &record.assessment_scores);
        record
    }

    #[test]
    fn test_empty_collection_is_all_zeros() {
        let stats = summarize(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.approved, 0);
        assert_eq!(stats.declined, 0);
        assert_eq!(stats.total_value, 0.0);
        assert_eq!(stats.avg_score, 0);
        assert!(stats.decisions.is_empty());
    }

    #[test]
    fn test_approved_plus_declined_equals_total() {
        let records = vec![
            sample_record("a"),
            declined_record("b"),
            sample_record("c"),
        ];
        let stats = summarize(&records);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.declined, 1);
    }

    #[test]
    fn test_total_value_uses_heuristic() {
        let mut a = sample_record("a");
        a.project_info.value = "$1.5M".to_string();
        let mut b = sample_record("b");
        b.project_info.value = "200k".to_string();
        let mut c = sample_record("c");
        c.project_info.value = "tbc".to_string();

        let stats = summarize(&[a, b, c]);
        assert_eq!(stats.total_value, 1_200_000.0);
    }

    #[test]
    fn test_avg_score_is_rounded() {
        // Both sample records score 36 total; decline adds a zero.
        let records = vec![sample_record("a"), sample_record("b"), declined_record("c")];
        let stats = summarize(&records);
        // (36 + 36 + 0) / 3 = 24
        assert_eq!(stats.avg_score, 24);
    }

    #[test]
    fn test_tier_counts_skip_na_categories() {
        let records = vec![sample_record("a"), declined_record("b")];
        let stats = summarize(&records);

        // sample_record scores 15/21: client Nuisance, work Nuisance.
        assert_eq!(stats.client_categories.nuisance, 1);
        assert_eq!(stats.work_categories.nuisance, 1);

        let client = &stats.client_categories;
        assert_eq!(
            client.development + client.leverage + client.nuisance + client.avoid,
            1
        );
    }

    #[test]
    fn test_decision_frequency_table() {
        let records = vec![
            sample_record("a"),
            sample_record("b"),
            declined_record("c"),
        ];
        let stats = summarize(&records);

        assert_eq!(stats.decisions.get("PURSUE WITH HIGH MARGIN"), Some(&2));
        assert_eq!(stats.decisions.get("DECLINE"), Some(&1));
    }
}
