use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::config::EngineConfig;
use crate::soil::domain::SoilSample;
use crate::soil::repository::{
    AssessmentId, AssessmentRecord, AssessmentRepository, RepositoryError,
};
use crate::soil::service::SoilAssessmentService;

pub(super) fn mock_upload() -> SoilSample {
    SoilSample::mock_upload()
}

pub(super) fn all_zero() -> SoilSample {
    SoilSample::default()
}

/// Full marks on the soil health index. The advisory still flags its
/// nitrogen as excessive (> 80 mg/kg).
pub(super) fn healthy_sample() -> SoilSample {
    SoilSample {
        ph: 6.8,
        nitrogen: 120.0,
        phosphorus: 30.0,
        potassium: 200.0,
        organic_matter: 3.0,
        moisture: 25.0,
        temperature: 24.0,
    }
}

pub(super) fn permissive() -> EngineConfig {
    EngineConfig {
        strict_validation: false,
    }
}

pub(super) fn strict() -> EngineConfig {
    EngineConfig {
        strict_validation: true,
    }
}

pub(super) fn memory_service(config: EngineConfig) -> Arc<SoilAssessmentService<MemoryRepository>> {
    Arc::new(SoilAssessmentService::new(
        Arc::new(MemoryRepository::default()),
        config,
    ))
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    records: Mutex<HashMap<AssessmentId, AssessmentRecord>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct ConflictRepository;

impl AssessmentRepository for ConflictRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Ok(None)
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("maintenance window".to_string()))
    }
}
