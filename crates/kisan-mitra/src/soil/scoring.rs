use super::domain::{HealthBand, SoilSample};
use super::rules::{ADVISORY_RULES, HEALTH_INDEX_RULES};
use super::views::{FertilizerAdvisory, HealthIndex, NutrientFactor};

/// Score a sample with the fertilizer advisory rules.
///
/// Starts at 100 and deducts per failed check; the band is taken before the
/// score is floored at 0.
pub fn score_advisory(sample: &SoilSample) -> FertilizerAdvisory {
    let mut score: i32 = 100;
    let mut strengths = Vec::new();
    let mut issues = Vec::new();
    let mut recommendations = Vec::new();

    for rule in &ADVISORY_RULES {
        let value = sample.value(rule.parameter);
        match rule
            .branches
            .iter()
            .find(|branch| branch.threshold.matches(value))
        {
            Some(branch) => {
                issues.push(branch.issue);
                if let Some(treatment) = branch.treatment {
                    recommendations.push(treatment);
                }
                score -= i32::from(branch.penalty);
            }
            None => strengths.push(rule.strength),
        }
    }

    let overall_health = HealthBand::from_advisory_score(score);

    FertilizerAdvisory {
        health_score: score.clamp(0, 100) as u8,
        overall_health,
        strengths,
        issues,
        recommendations,
    }
}

/// Score a sample with the soil health index rules (sum of per-factor points).
pub fn score_health_index(sample: &SoilSample) -> HealthIndex {
    let mut score: u8 = 0;
    let mut factors = Vec::with_capacity(HEALTH_INDEX_RULES.len());

    for rule in &HEALTH_INDEX_RULES {
        let value = sample.value(rule.parameter);
        let grade = rule
            .bands
            .iter()
            .find(|band| band.threshold.matches(value))
            .map(|band| band.grade)
            .unwrap_or(rule.otherwise);

        score = score.saturating_add(grade.points);
        factors.push(NutrientFactor::new(rule.parameter, value, grade.status));
    }

    let score = score.min(100);

    HealthIndex {
        score,
        band: HealthBand::from_index_score(score),
        factors,
    }
}
