use super::advice::{build_fertilizer_plan, recommend, warnings};
use super::domain::SoilSample;
use super::scoring::{score_advisory, score_health_index};
use super::views::{AdvisorySummary, Assessment};

/// Run both rule sets and every generator over one sample.
///
/// Never fails: degenerate or out-of-range readings produce a degraded
/// assessment, not an error.
pub fn assess(sample: &SoilSample) -> Assessment {
    let index = score_health_index(sample);
    let advisory = score_advisory(sample);
    let summary = advisory.summary();

    Assessment {
        health_score: index.score,
        health_band: index.band,
        factors: index.factors,
        strengths: advisory.strengths,
        issues: advisory.issues,
        advisory: AdvisorySummary {
            health_score: advisory.health_score,
            overall_health: advisory.overall_health,
            summary,
            recommendations: advisory.recommendations,
        },
        recommendations: recommend(sample),
        fertilizer_plan: build_fertilizer_plan(sample),
        warnings: warnings(sample),
    }
}
