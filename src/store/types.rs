use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{AssessmentScores, DecisionResult, ScreeningAnswers};

/// Free-text project metadata gathered in step one of the wizard.
/// Everything is optional and defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectInfo {
    pub work_scope: String,
    pub client_name: String,
    pub location: String,
    pub work_type: String,
    /// Declared project value as entered, e.g. "$2.5M" or "150k".
    /// Parsed only by the lossy heuristic in [`crate::store::value`].
    pub value: String,
    pub assessed_by: String,
    pub assessment_date: String,
}

/// A completed assessment bundle, not yet persisted. The store assigns the
/// id and timestamp at save time.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentDraft {
    pub project_info: ProjectInfo,
    pub screening_answers: ScreeningAnswers,
    pub assessment_scores: AssessmentScores,
    pub result: DecisionResult,
}

/// The unit of persistence. Field names are fixed for round-trip
/// compatibility with previously exported files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub project_info: ProjectInfo,
    pub screening_answers: ScreeningAnswers,
    pub assessment_scores: AssessmentScores,
    pub result: DecisionResult,
}

/// Test fixture shared by the store test modules.
#[cfg(test)]
pub(crate) fn sample_record(id: &str) -> AssessmentRecord {
    use crate::scoring::evaluate;

    let screening = ScreeningAnswers {
        within_wa: Some(true),
        aligns_with_services: Some(true),
        meets_compliance: Some(true),
    };
    let scores = AssessmentScores {
        client_type: 3,
        client_relationship: 3,
        client_reputation: 3,
        pipeline_potential: 3,
        strategic_importance: 3,
        project_value: 3,
        location: 3,
        risk_profile: 3,
        complexity: 3,
        competition_level: 3,
        internal_capability: 3,
        asset_utilisation: 3,
        ..Default::default()
    };
    AssessmentRecord {
        id: id.to_string(),
        timestamp: Utc::now(),
        project_info: ProjectInfo {
            client_name: "Sample Client".to_string(),
            value: "$1.5M".to_string(),
            ..Default::default()
        },
        screening_answers: screening,
        assessment_scores: scores,
        result: evaluate(&screening, &scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_field_names() {
        let record = sample_record("abc123");
        let json = serde_json::to_value(&record).unwrap();

        assert!(json["id"].is_string());
        assert!(json["timestamp"].is_string());
        assert!(json["projectInfo"].is_object());
        assert!(json["screeningAnswers"].is_object());
        assert!(json["assessmentScores"].is_object());
        assert!(json["result"].is_object());

        assert_eq!(json["projectInfo"]["clientName"], "Sample Client");
        assert_eq!(json["assessmentScores"]["contractTerms"], 0);
        assert_eq!(json["result"]["cssClass"], "high-margin");
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = sample_record("roundtrip1");
        let json = serde_json::to_string_pretty(&record).unwrap();
        let parsed: AssessmentRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_parses_original_export_shape() {
        // Shape as written by the original browser tool, decline variant with
        // its extra reason field and N/A categories.
        let json = r#"{
            "id": "lxyzabc123",
            "timestamp": "2025-03-14T02:10:00.000Z",
            "projectInfo": {
                "workScope": "", "clientName": "Acme", "location": "",
                "workType": "", "value": "300k", "assessedBy": "",
                "assessmentDate": "3/14/2025"
            },
            "screeningAnswers": {
                "withinWA": true, "alignsWithServices": false, "meetsCompliance": true
            },
            "assessmentScores": {
                "clientType": 0, "clientRelationship": 0, "clientReputation": 0,
                "pipelinePotential": 0, "strategicImportance": 0, "contractTerms": 0,
                "projectValue": 0, "location": 0, "riskProfile": 0, "complexity": 0,
                "competitionLevel": 0, "internalCapability": 0, "assetUtilisation": 0
            },
            "result": {
                "decision": "DECLINE",
                "reason": "Failed initial screening criteria",
                "clientCategory": "N/A",
                "workCategory": "N/A",
                "marginGuidance": "Do not pursue - does not meet basic requirements",
                "totalScore": 0, "clientScore": 0, "workScore": 0,
                "cssClass": "decline"
            }
        }"#;

        let record: AssessmentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.project_info.client_name, "Acme");
        assert_eq!(record.result.decision, crate::scoring::Decision::Decline);
        assert_eq!(
            record.result.client_category,
            crate::scoring::TierLabel::NotApplicable
        );
    }
}
