use std::sync::Arc;

use crate::domain::subject::errors::SubjectError;
use crate::domain::subject::models::Subject;
use crate::domain::subject::ports::SubjectRepository;

/// Domain service for subject management.
pub struct SubjectService {
    repository: Arc<dyn SubjectRepository>,
}

impl SubjectService {
    pub fn new(repository: Arc<dyn SubjectRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_subjects(&self) -> Result<Vec<Subject>, SubjectError> {
        self.repository.list_all().await
    }

    pub async fn create_subject(&self, name: &str) -> Result<Subject, SubjectError> {
        if self.repository.find_by_name(name).await?.is_some() {
            return Err(SubjectError::NameAlreadyExists(name.to_string()));
        }

        self.repository.create(name).await
    }

    pub async fn delete_subject(&self, name: &str) -> Result<(), SubjectError> {
        if self.repository.delete_by_name(name).await? {
            Ok(())
        } else {
            Err(SubjectError::NotFound(name.to_string()))
        }
    }
}
