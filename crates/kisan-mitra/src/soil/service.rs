use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use super::assessment::assess;
use super::domain::{SoilSample, ValidationError};
use super::repository::{AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError};
use super::views::Assessment;
use crate::config::EngineConfig;

/// Service composing sample validation, the rule engine, and storage.
pub struct SoilAssessmentService<R> {
    repository: Arc<R>,
    config: EngineConfig,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("soil-{id:06}"))
}

impl<R> SoilAssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: EngineConfig) -> Self {
        Self { repository, config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Assess a sample without storing the result.
    pub fn preview(&self, sample: &SoilSample) -> Result<Assessment, SoilServiceError> {
        self.check(sample)?;
        Ok(assess(sample))
    }

    /// Assess a sample and persist the record under a fresh id.
    pub fn submit(&self, sample: SoilSample) -> Result<AssessmentRecord, SoilServiceError> {
        self.check(&sample)?;

        let assessment = assess(&sample);
        let record = AssessmentRecord {
            id: next_assessment_id(),
            sample,
            assessment,
            assessed_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            assessment_id = %stored.id,
            health_score = stored.assessment.health_score,
            advisory_score = stored.assessment.advisory.health_score,
            warnings = stored.assessment.warnings.len(),
            "soil assessment stored"
        );
        Ok(stored)
    }

    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, SoilServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    fn check(&self, sample: &SoilSample) -> Result<(), SoilServiceError> {
        if self.config.strict_validation {
            if let Err(err) = sample.validate() {
                debug!(error = %err, "rejected soil sample");
                return Err(err.into());
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SoilServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
