use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

use roster::data::{Activities, Activity, MessageResponse, ParticipantQuery};
use roster::log;

use crate::error::ApiError;

/// Handler to list every activity with its participants
pub async fn list(
    State(state): State<Arc<crate::AppState>>,
) -> Result<Json<Activities>, ApiError> {
    Ok(Json(state.activities.list().await?))
}

/// Handler to get one activity by name
pub async fn get(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
) -> Result<Json<Activity>, ApiError> {
    Ok(Json(state.activities.get(&activity_name).await?))
}

/// Handler to sign a participant up for an activity
pub async fn signup(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(ParticipantQuery { email }) = query?;

    match state.activities.signup(&activity_name, &email).await {
        Ok(_) => {
            let email = email.trim();
            log::info!("Signed up {email} for {activity_name}");
            Ok(Json(MessageResponse::new(format!(
                "Signed up {email} for {activity_name}"
            ))))
        }
        Err(err) => {
            log::warn!("Sign-up rejected: {err}");
            Err(err.into())
        }
    }
}

/// Handler to remove a participant from an activity
pub async fn unregister(
    State(state): State<Arc<crate::AppState>>,
    Path(activity_name): Path<String>,
    query: Result<Query<ParticipantQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(ParticipantQuery { email }) = query?;

    match state.activities.unregister(&activity_name, &email).await {
        Ok(_) => {
            let email = email.trim();
            log::info!("Unregistered {email} from {activity_name}");
            Ok(Json(MessageResponse::new(format!(
                "Unregistered {email} from {activity_name}"
            ))))
        }
        Err(err) => {
            log::warn!("Unregister rejected: {err}");
            Err(err.into())
        }
    }
}
