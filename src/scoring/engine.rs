use super::types::{
    AssessmentScores, Decision, DecisionResult, ScreeningAnswers, Tier, TierLabel,
};

const SCREENING_FAIL_REASON: &str = "Failed initial screening criteria";
const SCREENING_FAIL_GUIDANCE: &str = "Do not pursue - does not meet basic requirements";

const GUIDANCE_DECLINE: &str = "Decline – Do not pursue";
const GUIDANCE_HIGH: &str = "High Margin (15–25%+)";
const GUIDANCE_MODERATE: &str = "Moderate Margin (10–15%)";
const GUIDANCE_STANDARD: &str = "Standard Margin (8–12%)";

/// Compute the go/no-go decision for one assessment snapshot.
///
/// Total function: unanswered scores count as 0 and simply drive a low tier,
/// so there is no error path.
pub fn evaluate(screening: &ScreeningAnswers, scores: &AssessmentScores) -> DecisionResult {
    // Screening gate: any non-yes answer declines without consulting scores.
    if !screening.all_passed() {
        return DecisionResult {
            decision: Decision::Decline,
            reason: Some(SCREENING_FAIL_REASON.to_string()),
            client_category: TierLabel::NotApplicable,
            work_category: TierLabel::NotApplicable,
            margin_guidance: SCREENING_FAIL_GUIDANCE.to_string(),
            client_score: 0,
            work_score: 0,
            total_score: 0,
            css_class: Decision::Decline.css_class().to_string(),
        };
    }

    let client_score = scores.client_total();
    let work_score = scores.work_total();
    let total_score = client_score + work_score;

    let client_tier = client_tier(client_score);
    let work_tier = work_tier(work_score);

    let (decision, guidance) = decide(client_tier, work_tier);

    DecisionResult {
        decision,
        reason: None,
        client_category: client_tier.into(),
        work_category: work_tier.into(),
        margin_guidance: guidance.to_string(),
        client_score,
        work_score,
        total_score,
        css_class: decision.css_class().to_string(),
    }
}

/// Client-side tier thresholds over the 5-25 score range.
pub fn client_tier(score: u32) -> Tier {
    match score {
        0..=9 => Tier::Avoid,
        10..=17 => Tier::Nuisance,
        18..=22 => Tier::Leverage,
        _ => Tier::Development,
    }
}

/// Work-side tier thresholds over the 7-35 score range.
pub fn work_tier(score: u32) -> Tier {
    match score {
        0..=14 => Tier::Avoid,
        15..=21 => Tier::Nuisance,
        22..=28 => Tier::Leverage,
        _ => Tier::Development,
    }
}

/// The decision matrix, first match wins.
///
/// Leverage/Development clients always receive standard margin, regardless
/// of work tier.
fn decide(client: Tier, work: Tier) -> (Decision, &'static str) {
    match (client, work) {
        (Tier::Avoid, _) => (Decision::Decline, GUIDANCE_DECLINE),
        (Tier::Nuisance, Tier::Avoid | Tier::Nuisance) => {
            (Decision::PursueHighMargin, GUIDANCE_HIGH)
        }
        (Tier::Nuisance, Tier::Leverage | Tier::Development) => {
            (Decision::PursueModerateMargin, GUIDANCE_MODERATE)
        }
        _ => (Decision::PursueStandardMargin, GUIDANCE_STANDARD),
    }
}
