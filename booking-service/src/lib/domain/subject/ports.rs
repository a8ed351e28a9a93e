use async_trait::async_trait;

use crate::domain::subject::errors::SubjectError;
use crate::domain::subject::models::Subject;

/// Persistence operations for subjects.
#[async_trait]
pub trait SubjectRepository: Send + Sync + 'static {
    async fn create(&self, name: &str) -> Result<Subject, SubjectError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Subject>, SubjectError>;
    async fn list_all(&self) -> Result<Vec<Subject>, SubjectError>;
    async fn delete_by_name(&self, name: &str) -> Result<bool, SubjectError>;
}
