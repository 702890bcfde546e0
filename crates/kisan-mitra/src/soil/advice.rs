use super::domain::SoilSample;
use super::rules::{FERTILIZER_PLAN_RULES, RECOMMENDATION_RULES, WARNING_RULES};
use super::views::{FertilizerPlan, Recommendation, Warning};

/// Remediation steps for every health index threshold the sample crosses.
pub fn recommend(sample: &SoilSample) -> Vec<Recommendation> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| rule.trigger.fires(sample))
        .map(|rule| rule.recommendation)
        .collect()
}

/// Tiered fertilizer schedule. Secondary and micronutrient entries are always present.
pub fn build_fertilizer_plan(sample: &SoilSample) -> FertilizerPlan {
    let mut plan = FertilizerPlan::default();
    for rule in FERTILIZER_PLAN_RULES
        .iter()
        .filter(|rule| rule.trigger.fires(sample))
    {
        plan.push(rule.tier, rule.item);
    }
    plan
}

pub fn warnings(sample: &SoilSample) -> Vec<Warning> {
    WARNING_RULES
        .iter()
        .filter(|rule| rule.trigger.fires(sample))
        .map(|rule| Warning {
            kind: rule.kind,
            message: rule.message,
        })
        .collect()
}
