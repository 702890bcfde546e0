//! Soil health rule engine: two scoring rule sets, remediation generators,
//! and the service seams that expose them.
//!
//! The fertilizer advisory (deduct from 100) and the soil health index
//! (accumulate to 100) disagree on thresholds and are kept as separate rule
//! sets; [`assess`] reports both.

mod advice;
mod assessment;
pub mod domain;
pub mod import;
pub mod repository;
pub mod router;
pub mod rules;
mod scoring;
pub mod service;
pub mod views;

#[cfg(test)]
mod tests;

pub use advice::{build_fertilizer_plan, recommend, warnings};
pub use assessment::assess;
pub use domain::{
    FactorStatus, HealthBand, Priority, SoilParameter, SoilSample, ValidationError, WarningKind,
};
pub use import::{ImportedSample, SoilReportImportError, SoilReportImporter};
pub use repository::{AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError};
pub use router::soil_router;
pub use scoring::{score_advisory, score_health_index};
pub use service::{SoilAssessmentService, SoilServiceError};
pub use views::{
    AdvisorySummary, Assessment, FertilizerAdvisory, FertilizerPlan, FertilizerPlanItem,
    FertilizerRecommendation, HealthIndex, NutrientFactor, PlanTier, Recommendation, Warning,
};
