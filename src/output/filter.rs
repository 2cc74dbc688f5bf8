use std::cmp::Ordering;
use std::str::FromStr;

use crate::store::{parse_project_value, AssessmentRecord};

/// Sort orders for the assessment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    DateDesc,
    DateAsc,
    ScoreDesc,
    ScoreAsc,
    ValueDesc,
    ValueAsc,
}

impl SortOrder {
    pub const NAMES: [&'static str; 6] = [
        "date-desc",
        "date-asc",
        "score-desc",
        "score-asc",
        "value-desc",
        "value-asc",
    ];
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date-desc" => Ok(SortOrder::DateDesc),
            "date-asc" => Ok(SortOrder::DateAsc),
            "score-desc" => Ok(SortOrder::ScoreDesc),
            "score-asc" => Ok(SortOrder::ScoreAsc),
            "value-desc" => Ok(SortOrder::ValueDesc),
            "value-asc" => Ok(SortOrder::ValueAsc),
            other => Err(format!(
                "unknown sort order '{}' (expected one of: {})",
                other,
                SortOrder::NAMES.join(", ")
            )),
        }
    }
}

/// Keep only records matching the given decision string and/or client tier
/// label. Matching is exact, against the same strings the records persist.
pub fn filter_records(
    records: Vec<AssessmentRecord>,
    decision: Option<&str>,
    client_category: Option<&str>,
) -> Vec<AssessmentRecord> {
    records
        .into_iter()
        .filter(|r| decision.map_or(true, |d| r.result.decision.as_str() == d))
        .filter(|r| client_category.map_or(true, |c| r.result.client_category.as_str() == c))
        .collect()
}

/// Sort records in place. Value ordering runs the declared value strings
/// through the same lossy heuristic the stats use.
pub fn sort_records(records: &mut [AssessmentRecord], order: SortOrder) {
    match order {
        SortOrder::DateDesc => records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp)),
        SortOrder::DateAsc => records.sort_by(|a, b| a.timestamp.cmp(&b.timestamp)),
        SortOrder::ScoreDesc => {
            records.sort_by(|a, b| b.result.total_score.cmp(&a.result.total_score))
        }
        SortOrder::ScoreAsc => {
            records.sort_by(|a, b| a.result.total_score.cmp(&b.result.total_score))
        }
        SortOrder::ValueDesc => records.sort_by(|a, b| cmp_value(b, a)),
        SortOrder::ValueAsc => records.sort_by(|a, b| cmp_value(a, b)),
    }
}

fn cmp_value(a: &AssessmentRecord, b: &AssessmentRecord) -> Ordering {
    let a_value = parse_project_value(&a.project_info.value);
    let b_value = parse_project_value(&b.project_info.value);
    a_value.partial_cmp(&b_value).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::evaluate;
    use crate::store::types::sample_record;
    use chrono::{Duration, Utc};

    fn records() -> Vec<AssessmentRecord> {
        let mut a = sample_record("a");
        a.timestamp = Utc::now() - Duration::hours(2);
        a.project_info.value = "500k".to_string();

        let mut b = sample_record("b");
        b.timestamp = Utc::now() - Duration::hours(1);
        b.project_info.value = "$2M".to_string();
        b.screening_answers.meets_compliance = Some(false);
        b.result = evaluate(&b.screening_answers, &b.assessment_scores);

        let mut c = sample_record("c");
        c.timestamp = Utc::now();
        c.project_info.value = "abc".to_string();

        vec![a, b, c]
    }

    fn ids(records: &[AssessmentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_filter_by_decision() {
        let kept = filter_records(records(), Some("DECLINE"), None);
        assert_eq!(ids(&kept), vec!["b"]);
    }

    #[test]
    fn test_filter_by_client_category() {
        let kept = filter_records(records(), None, Some("Nuisance"));
        assert_eq!(ids(&kept), vec!["a", "c"]);
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        assert_eq!(filter_records(records(), None, None).len(), 3);
    }

    #[test]
    fn test_filters_combine() {
        let kept = filter_records(records(), Some("DECLINE"), Some("Nuisance"));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_sort_by_date() {
        let mut recs = records();
        sort_records(&mut recs, SortOrder::DateDesc);
        assert_eq!(ids(&recs), vec!["c", "b", "a"]);

        sort_records(&mut recs, SortOrder::DateAsc);
        assert_eq!(ids(&recs), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_by_score() {
        // a and c score 36, b declined at 0.
        let mut recs = records();
        sort_records(&mut recs, SortOrder::ScoreAsc);
        assert_eq!(recs[0].id, "b");

        sort_records(&mut recs, SortOrder::ScoreDesc);
        assert_eq!(recs[2].id, "b");
    }

    #[test]
    fn test_sort_by_value_uses_heuristic() {
        let mut recs = records();
        sort_records(&mut recs, SortOrder::ValueDesc);
        // $2M > 500k > unparseable (0)
        assert_eq!(ids(&recs), vec!["b", "a", "c"]);

        sort_records(&mut recs, SortOrder::ValueAsc);
        assert_eq!(ids(&recs), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("date-desc".parse::<SortOrder>().unwrap(), SortOrder::DateDesc);
        assert_eq!("value-asc".parse::<SortOrder>().unwrap(), SortOrder::ValueAsc);
        assert!("by-vibes".parse::<SortOrder>().is_err());
    }
}
