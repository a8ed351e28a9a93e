use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::subject::errors::SubjectError;
use crate::domain::subject::models::Subject;
use crate::domain::subject::models::SubjectId;
use crate::domain::subject::ports::SubjectRepository;

pub struct PostgresSubjectRepository {
    pool: PgPool,
}

impl PostgresSubjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SubjectRow {
    id: i64,
    name: String,
}

impl From<SubjectRow> for Subject {
    fn from(row: SubjectRow) -> Self {
        Subject {
            id: SubjectId(row.id),
            name: row.name,
        }
    }
}

#[async_trait]
impl SubjectRepository for PostgresSubjectRepository {
    async fn create(&self, name: &str) -> Result<Subject, SubjectError> {
        let id = sqlx::query_scalar::<_, i64>("INSERT INTO subjects (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return SubjectError::NameAlreadyExists(name.to_string());
                    }
                }
                SubjectError::DatabaseError(e.to_string())
            })?;

        Ok(Subject {
            id: SubjectId(id),
            name: name.to_string(),
        })
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Subject>, SubjectError> {
        let row = sqlx::query_as::<_, SubjectRow>("SELECT id, name FROM subjects WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| SubjectError::DatabaseError(e.to_string()))?;

        Ok(row.map(Subject::from))
    }

    async fn list_all(&self) -> Result<Vec<Subject>, SubjectError> {
        let rows = sqlx::query_as::<_, SubjectRow>("SELECT id, name FROM subjects ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| SubjectError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Subject::from).collect())
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool, SubjectError> {
        let result = sqlx::query("DELETE FROM subjects WHERE name = $1")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| SubjectError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
