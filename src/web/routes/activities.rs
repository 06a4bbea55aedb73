use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::database::ActivityStore;
use crate::error::SignupError;
use crate::models::{ActivitiesSnapshot, MessageResponse, SignupQuery};
use crate::services::signup_service;

pub async fn list_activities_handler(
    State(store): State<ActivityStore>,
) -> Json<ActivitiesSnapshot> {
    Json(signup_service::list_activities(&store))
}

pub async fn signup_handler(
    State(store): State<ActivityStore>,
    Path(activity_name): Path<String>,
    query: Result<Query<SignupQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, SignupError> {
    let Query(query) = query.map_err(|e| SignupError::InvalidQuery(e.body_text()))?;
    signup_service::sign_up(&store, &activity_name, &query.email).map(Json)
}
