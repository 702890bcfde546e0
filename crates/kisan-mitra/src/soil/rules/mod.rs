//! Threshold rule tables for both scoring rule sets.
//!
//! Every rule is plain data evaluated in table order, so each threshold can be
//! audited without reading the interpreters in `scoring` and `advice`.

mod tables;

pub use tables::{
    ADVISORY_RULES, FERTILIZER_PLAN_RULES, HEALTH_INDEX_RULES, RECOMMENDATION_RULES,
    WARNING_RULES,
};

use super::domain::{FactorStatus, SoilParameter, SoilSample, WarningKind};
use super::views::{FertilizerPlanItem, FertilizerRecommendation, PlanTier, Recommendation};

/// Comparison applied to a single reading.
///
/// Every comparison is false for NaN, so unreadable values fall through to the
/// default branch of their rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    Below { limit: f64 },
    Above { limit: f64 },
    AtLeast { limit: f64 },
    Within { min: f64, max: f64 },
}

impl Threshold {
    pub fn matches(self, value: f64) -> bool {
        match self {
            Self::Below { limit } => value < limit,
            Self::Above { limit } => value > limit,
            Self::AtLeast { limit } => value >= limit,
            Self::Within { min, max } => value >= min && value <= max,
        }
    }
}

/// When a table entry fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    Always,
    When {
        parameter: SoilParameter,
        threshold: Threshold,
    },
}

impl Trigger {
    pub fn fires(self, sample: &SoilSample) -> bool {
        match self {
            Self::Always => true,
            Self::When {
                parameter,
                threshold,
            } => threshold.matches(sample.value(parameter)),
        }
    }
}

/// Deduction rule for one parameter of the fertilizer advisory.
///
/// The first matching branch applies; with no match the strength is recorded.
#[derive(Debug, Clone, Copy)]
pub struct AdvisoryRule {
    pub parameter: SoilParameter,
    pub branches: &'static [AdvisoryBranch],
    pub strength: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct AdvisoryBranch {
    pub threshold: Threshold,
    pub issue: &'static str,
    pub penalty: u8,
    pub treatment: Option<FertilizerRecommendation>,
}

/// Accumulation rule for one parameter of the soil health index.
#[derive(Debug, Clone, Copy)]
pub struct IndexRule {
    pub parameter: SoilParameter,
    pub bands: &'static [IndexBand],
    pub otherwise: IndexGrade,
}

#[derive(Debug, Clone, Copy)]
pub struct IndexBand {
    pub threshold: Threshold,
    pub grade: IndexGrade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexGrade {
    pub points: u8,
    pub status: FactorStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct RecommendationRule {
    pub trigger: Trigger,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Copy)]
pub struct PlanRule {
    pub tier: PlanTier,
    pub trigger: Trigger,
    pub item: FertilizerPlanItem,
}

#[derive(Debug, Clone, Copy)]
pub struct WarningRule {
    pub trigger: Trigger,
    pub kind: WarningKind,
    pub message: &'static str,
}
