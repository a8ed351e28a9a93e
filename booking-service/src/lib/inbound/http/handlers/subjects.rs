use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::subject::models::Subject;
use crate::inbound::http::guards::AdminUser;
use crate::inbound::http::router::AppState;

pub async fn list_subjects(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<SubjectResponseData>>, ApiError> {
    let subjects = state.subject_service.list_subjects().await?;

    if subjects.is_empty() {
        return Err(ApiError::NotFound("No subjects found".to_string()));
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        subjects.iter().map(SubjectResponseData::from).collect(),
    ))
}

pub async fn create_subject(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<SubjectRequestBody>,
) -> Result<ApiSuccess<SubjectResponseData>, ApiError> {
    let subject = state.subject_service.create_subject(&body.name).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        SubjectResponseData::from(&subject),
    ))
}

pub async fn delete_subject(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(body): Json<SubjectRequestBody>,
) -> Result<ApiSuccess<MessageResponseData>, ApiError> {
    state.subject_service.delete_subject(&body.name).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MessageResponseData {
            message: format!("Subject '{}' deleted successfully", body.name),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SubjectRequestBody {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectResponseData {
    pub name: String,
}

impl From<&Subject> for SubjectResponseData {
    fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponseData {
    pub message: String,
}
