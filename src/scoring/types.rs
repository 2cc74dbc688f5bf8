use serde::{Deserialize, Serialize};

/// The three gating eligibility questions answered before scoring.
///
/// `None` means unanswered. An assessment only proceeds past screening when
/// all three are `Some(true)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningAnswers {
    #[serde(rename = "withinWA")]
    pub within_wa: Option<bool>,
    #[serde(rename = "alignsWithServices")]
    pub aligns_with_services: Option<bool>,
    #[serde(rename = "meetsCompliance")]
    pub meets_compliance: Option<bool>,
}

impl ScreeningAnswers {
    /// True only when every screening question was answered "yes".
    pub fn all_passed(&self) -> bool {
        self.within_wa == Some(true)
            && self.aligns_with_services == Some(true)
            && self.meets_compliance == Some(true)
    }
}

/// Raw answers to the thirteen weighted questions, each 0-5 where 0 means
/// unanswered. Five client questions, seven work questions, plus
/// `contract_terms` which is carried for compatibility but never summed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssessmentScores {
    pub client_type: u8,
    pub client_relationship: u8,
    pub client_reputation: u8,
    pub pipeline_potential: u8,
    pub strategic_importance: u8,
    pub contract_terms: u8,
    pub project_value: u8,
    pub location: u8,
    pub risk_profile: u8,
    pub complexity: u8,
    pub competition_level: u8,
    pub internal_capability: u8,
    pub asset_utilisation: u8,
}

impl AssessmentScores {
    /// Sum of the five client-category questions (5-25 when fully answered).
    pub fn client_total(&self) -> u32 {
        u32::from(self.client_type)
            + u32::from(self.client_relationship)
            + u32::from(self.client_reputation)
            + u32::from(self.pipeline_potential)
            + u32::from(self.strategic_importance)
    }

    /// Sum of the seven work-category questions (7-35 when fully answered).
    /// `contract_terms` is deliberately excluded.
    pub fn work_total(&self) -> u32 {
        u32::from(self.project_value)
            + u32::from(self.location)
            + u32::from(self.risk_profile)
            + u32::from(self.complexity)
            + u32::from(self.competition_level)
            + u32::from(self.internal_capability)
            + u32::from(self.asset_utilisation)
    }
}

/// Ordered category derived from a client or work score.
/// Avoid < Nuisance < Leverage < Development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Avoid,
    Nuisance,
    Leverage,
    Development,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Avoid => "Avoid",
            Tier::Nuisance => "Nuisance",
            Tier::Leverage => "Leverage",
            Tier::Development => "Development",
        }
    }
}

/// Tier label as persisted in a result. Screening failures carry "N/A"
/// because no category was ever computed for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierLabel {
    #[serde(rename = "N/A")]
    NotApplicable,
    Avoid,
    Nuisance,
    Leverage,
    Development,
}

impl TierLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TierLabel::NotApplicable => "N/A",
            TierLabel::Avoid => "Avoid",
            TierLabel::Nuisance => "Nuisance",
            TierLabel::Leverage => "Leverage",
            TierLabel::Development => "Development",
        }
    }

    pub fn tier(&self) -> Option<Tier> {
        match self {
            TierLabel::NotApplicable => None,
            TierLabel::Avoid => Some(Tier::Avoid),
            TierLabel::Nuisance => Some(Tier::Nuisance),
            TierLabel::Leverage => Some(Tier::Leverage),
            TierLabel::Development => Some(Tier::Development),
        }
    }
}

impl From<Tier> for TierLabel {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Avoid => TierLabel::Avoid,
            Tier::Nuisance => TierLabel::Nuisance,
            Tier::Leverage => TierLabel::Leverage,
            Tier::Development => TierLabel::Development,
        }
    }
}

/// Final go/no-go outcome. The string forms are load-bearing: they are what
/// gets persisted and what the dashboard filters match against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "DECLINE")]
    Decline,
    #[serde(rename = "PURSUE WITH HIGH MARGIN")]
    PursueHighMargin,
    #[serde(rename = "PURSUE WITH MODERATE MARGIN")]
    PursueModerateMargin,
    #[serde(rename = "PURSUE WITH STANDARD MARGIN")]
    PursueStandardMargin,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Decline => "DECLINE",
            Decision::PursueHighMargin => "PURSUE WITH HIGH MARGIN",
            Decision::PursueModerateMargin => "PURSUE WITH MODERATE MARGIN",
            Decision::PursueStandardMargin => "PURSUE WITH STANDARD MARGIN",
        }
    }

    /// Display-class tag derived 1:1 from the decision, for presentation only.
    pub fn css_class(&self) -> &'static str {
        match self {
            Decision::Decline => "decline",
            Decision::PursueHighMargin => "high-margin",
            Decision::PursueModerateMargin => "moderate-margin",
            Decision::PursueStandardMargin => "standard-margin",
        }
    }
}

/// Outcome of evaluating one assessment. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionResult {
    pub decision: Decision,
    /// Only present on screening-failure declines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub client_category: TierLabel,
    pub work_category: TierLabel,
    pub margin_guidance: String,
    pub client_score: u32,
    pub work_score: u32,
    pub total_score: u32,
    pub css_class: String,
}
