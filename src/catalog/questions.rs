use serde::{Deserialize, Serialize};

use crate::scoring::AssessmentScores;

/// The thirteen fixed question keys. `ContractTerms` exists in stored data
/// but has no question definition and is never summed; it is kept so older
/// exports keep round-tripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    ClientType,
    ClientRelationship,
    ClientReputation,
    PipelinePotential,
    StrategicImportance,
    ContractTerms,
    ProjectValue,
    Location,
    RiskProfile,
    Complexity,
    CompetitionLevel,
    InternalCapability,
    AssetUtilisation,
}

/// Whether a question counts toward the client score or the work score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Client,
    Work,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Client => "client",
            Category::Work => "work",
        }
    }
}

impl QuestionKey {
    pub const ALL: [QuestionKey; 13] = [
        QuestionKey::ClientType,
        QuestionKey::ClientRelationship,
        QuestionKey::ClientReputation,
        QuestionKey::PipelinePotential,
        QuestionKey::StrategicImportance,
        QuestionKey::ContractTerms,
        QuestionKey::ProjectValue,
        QuestionKey::Location,
        QuestionKey::RiskProfile,
        QuestionKey::Complexity,
        QuestionKey::CompetitionLevel,
        QuestionKey::InternalCapability,
        QuestionKey::AssetUtilisation,
    ];

    /// The camelCase key as it appears in stored records and catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKey::ClientType => "clientType",
            QuestionKey::ClientRelationship => "clientRelationship",
            QuestionKey::ClientReputation => "clientReputation",
            QuestionKey::PipelinePotential => "pipelinePotential",
            QuestionKey::StrategicImportance => "strategicImportance",
            QuestionKey::ContractTerms => "contractTerms",
            QuestionKey::ProjectValue => "projectValue",
            QuestionKey::Location => "location",
            QuestionKey::RiskProfile => "riskProfile",
            QuestionKey::Complexity => "complexity",
            QuestionKey::CompetitionLevel => "competitionLevel",
            QuestionKey::InternalCapability => "internalCapability",
            QuestionKey::AssetUtilisation => "assetUtilisation",
        }
    }

    /// Category the key counts toward. `None` for the inert `contractTerms`.
    pub fn category(&self) -> Option<Category> {
        match self {
            QuestionKey::ClientType
            | QuestionKey::ClientRelationship
            | QuestionKey::ClientReputation
            | QuestionKey::PipelinePotential
            | QuestionKey::StrategicImportance => Some(Category::Client),
            QuestionKey::ContractTerms => None,
            _ => Some(Category::Work),
        }
    }

    pub fn assign(&self, scores: &mut AssessmentScores, value: u8) {
        match self {
            QuestionKey::ClientType => scores.client_type = value,
            QuestionKey::ClientRelationship => scores.client_relationship = value,
            QuestionKey::ClientReputation => scores.client_reputation = value,
            QuestionKey::PipelinePotential => scores.pipeline_potential = value,
            QuestionKey::StrategicImportance => scores.strategic_importance = value,
            QuestionKey::ContractTerms => scores.contract_terms = value,
            QuestionKey::ProjectValue => scores.project_value = value,
            QuestionKey::Location => scores.location = value,
            QuestionKey::RiskProfile => scores.risk_profile = value,
            QuestionKey::Complexity => scores.complexity = value,
            QuestionKey::CompetitionLevel => scores.competition_level = value,
            QuestionKey::InternalCapability => scores.internal_capability = value,
            QuestionKey::AssetUtilisation => scores.asset_utilisation = value,
        }
    }

    pub fn value_in(&self, scores: &AssessmentScores) -> u8 {
        match self {
            QuestionKey::ClientType => scores.client_type,
            QuestionKey::ClientRelationship => scores.client_relationship,
            QuestionKey::ClientReputation => scores.client_reputation,
            QuestionKey::PipelinePotential => scores.pipeline_potential,
            QuestionKey::StrategicImportance => scores.strategic_importance,
            QuestionKey::ContractTerms => scores.contract_terms,
            QuestionKey::ProjectValue => scores.project_value,
            QuestionKey::Location => scores.location,
            QuestionKey::RiskProfile => scores.risk_profile,
            QuestionKey::Complexity => scores.complexity,
            QuestionKey::CompetitionLevel => scores.competition_level,
            QuestionKey::InternalCapability => scores.internal_capability,
            QuestionKey::AssetUtilisation => scores.asset_utilisation,
        }
    }
}

/// One selectable answer for a weighted question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreOption {
    pub value: u8,
    pub label: String,
}

/// One weighted question: prompt text, category, and its five options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionDef {
    pub key: QuestionKey,
    pub question: String,
    pub category: Category,
    pub options: Vec<ScoreOption>,
}

/// The full question catalog plus the pick lists the wizard offers for
/// project metadata. Configuration data, not engine logic: the engine only
/// ever sees the resulting `AssessmentScores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    pub questions: Vec<QuestionDef>,
    #[serde(default = "default_work_types")]
    pub work_types: Vec<String>,
    #[serde(default = "default_locations")]
    pub locations: Vec<String>,
}

impl Catalog {
    /// Questions in the given category, catalog order.
    pub fn questions_in(&self, category: Category) -> impl Iterator<Item = &QuestionDef> {
        self.questions.iter().filter(move |q| q.category == category)
    }

    pub fn question(&self, key: QuestionKey) -> Option<&QuestionDef> {
        self.questions.iter().find(|q| q.key == key)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog {
            questions: builtin_questions(),
            work_types: default_work_types(),
            locations: default_locations(),
        }
    }
}

fn default_work_types() -> Vec<String> {
    [
        "Civil Construction",
        "Earthworks & Bulk Excavation",
        "Site Preparation & Clearing",
        "Roadworks & Pavement Construction",
        "Carparks & Hardstands",
        "Drainage & Stormwater Systems",
        "Sewer & Water Infrastructure",
        "Subdivisions & Land Development",
        "Retaining Walls & Soil Stabilisation",
        "Concrete Works",
        "Industrial Construction",
        "Marine & Coastal Civil Works",
    ]
    .map(str::to_string)
    .to_vec()
}

fn default_locations() -> Vec<String> {
    [
        "Perth - North of River",
        "Perth - South of River",
        "Perth Airport",
        "Kwinana",
        "South West WA",
        "Mid West WA",
        "Wheatbelt WA",
        "Goldfields/Esperance WA",
        "Great Southern WA",
        "Pilbara WA",
        "Gascoyne WA",
        "Kimberley WA",
    ]
    .map(str::to_string)
    .to_vec()
}

fn question(key: QuestionKey, category: Category, prompt: &str, labels: [&str; 5]) -> QuestionDef {
    QuestionDef {
        key,
        question: prompt.to_string(),
        category,
        options: labels
            .iter()
            .enumerate()
            .map(|(i, label)| ScoreOption {
                value: (i + 1) as u8,
                label: (*label).to_string(),
            })
            .collect(),
    }
}

fn builtin_questions() -> Vec<QuestionDef> {
    vec![
        question(
            QuestionKey::ClientType,
            Category::Client,
            "Client type?",
            [
                "New – Low Importance (unimportant client, limited potential)",
                "Existing – Low Importance (repeat client but low value/priority)",
                "New – Moderate Importance (some potential but not core)",
                "New – High Importance (strategic new client, high potential)",
                "Existing – High Importance (key existing client, strong strategic value)",
            ],
        ),
        question(
            QuestionKey::ClientRelationship,
            Category::Client,
            "Client Relationship status?",
            [
                "Non-preferred; client has history of issues or poor alignment with WCC",
                "Low preference; occasional engagement, minor concerns in past interactions",
                "Neutral; neither preferred nor non-preferred, standard working relationship",
                "Preferred; generally positive history, good alignment with WCC",
                "Highly preferred; excellent history, very strong alignment, strategic relationship",
            ],
        ),
        question(
            QuestionKey::ClientReputation,
            Category::Client,
            "Client Reputation & Financial Strength?",
            [
                "Poor reputation or financially unstable; high risk of non-payment or disputes",
                "Limited reputation and/or moderate financial stability; some risk with larger contracts",
                "Established reputation and generally stable finances; reliable for standard contracts",
                "Strong reputation and solid financial stability; low risk for large contracts",
                "Excellent reputation and very strong financial position; ideal strategic client",
            ],
        ),
        question(
            QuestionKey::PipelinePotential,
            Category::Client,
            "Work Pipeline Potential?",
            [
                "One-Off Job (limited repeat potential)",
                "Moderate Repeat of Low Value Work",
                "Moderate Repeat of High Value Work",
                "High Repeat of Low Value Work",
                "High Repeat of High Value Work",
            ],
        ),
        question(
            QuestionKey::StrategicImportance,
            Category::Client,
            "Strategic importance?",
            [
                "Low: Non-Priority Market",
                "Low-Medium: Emerging or opportunistic market, some relevance but not core",
                "Medium: Important but Non-Core",
                "Medium-High: Key market with strong potential, partial strategic alignment",
                "High: Strategic Market",
            ],
        ),
        question(
            QuestionKey::ProjectValue,
            Category::Work,
            "Project Value",
            [
                "Low: <$200k",
                "Low–Moderate: $200k–$2 million",
                "Medium: $2–$5 million",
                "Moderate–High: $5–$10 million",
                "High: >$10 million",
            ],
        ),
        question(
            QuestionKey::Location,
            Category::Work,
            "Location Score",
            [
                "Kimberley WA",
                "Pilbara WA, Gascoyne WA",
                "Mid West WA, Wheatbelt WA, Goldfields/Esperance WA, Great Southern WA",
                "Perth – North/South of River, South West WA",
                "Perth Airport & Kwinana",
            ],
        ),
        question(
            QuestionKey::RiskProfile,
            Category::Work,
            "Risk Profile",
            [
                "Very High Risk",
                "High Risk",
                "Moderate Risk",
                "Low Risk",
                "Very Low Risk",
            ],
        ),
        question(
            QuestionKey::Complexity,
            Category::Work,
            "Project Complexity",
            [
                "Very High Complexity",
                "High Complexity",
                "Moderate Complexity",
                "Low Complexity",
                "Very Low Complexity",
            ],
        ),
        question(
            QuestionKey::CompetitionLevel,
            Category::Work,
            "Competition Level",
            [
                "Very High: Intense competition, market saturated",
                "High: Strong competition, multiple established players",
                "Medium: Moderate competition, typical market pressure",
                "Low: Few competitors, some alternatives for clients",
                "Very Low: Minimal competitors, largely uncontested market",
            ],
        ),
        question(
            QuestionKey::InternalCapability,
            Category::Work,
            "Internal Capability",
            [
                "Very Low: Minimal capability, significant gaps",
                "Low: Limited capability, some gaps requiring external support",
                "Medium: Adequate capability, can deliver with moderate support",
                "High: Strong capability, mostly self-sufficient",
                "Very High: Excellent capability, fully self-sufficient",
            ],
        ),
        question(
            QuestionKey::AssetUtilisation,
            Category::Work,
            "Asset Utilisation",
            [
                "Very Poor: Requires significant new assets",
                "Poor: Requires some new assets, low utilisation",
                "Moderate: Mix of existing and new assets",
                "Good: Largely utilises existing assets",
                "Excellent: Fully utilises current assets, no new investment",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::default();
        assert_eq!(catalog.questions.len(), 12);
        assert_eq!(catalog.questions_in(Category::Client).count(), 5);
        assert_eq!(catalog.questions_in(Category::Work).count(), 7);
        assert_eq!(catalog.work_types.len(), 12);
        assert_eq!(catalog.locations.len(), 12);
    }

    #[test]
    fn test_contract_terms_has_no_question() {
        let catalog = Catalog::default();
        assert!(catalog.question(QuestionKey::ContractTerms).is_none());
        assert!(QuestionKey::ContractTerms.category().is_none());
    }

    #[test]
    fn test_every_question_has_five_options() {
        for q in &Catalog::default().questions {
            let values: Vec<u8> = q.options.iter().map(|o| o.value).collect();
            assert_eq!(values, vec![1, 2, 3, 4, 5], "bad options for {}", q.key.as_str());
        }
    }

    #[test]
    fn test_key_assign_and_read_back() {
        let mut scores = AssessmentScores::default();
        QuestionKey::RiskProfile.assign(&mut scores, 4);
        assert_eq!(scores.risk_profile, 4);
        assert_eq!(QuestionKey::RiskProfile.value_in(&scores), 4);
    }

    #[test]
    fn test_key_serializes_camel_case() {
        let json = serde_json::to_string(&QuestionKey::AssetUtilisation).unwrap();
        assert_eq!(json, "\"assetUtilisation\"");
    }

    #[test]
    fn test_catalog_yaml_round_trip() {
        let catalog = Catalog::default();
        let yaml = serde_saphyr::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(catalog, parsed);
    }
}
