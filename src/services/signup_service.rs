use tracing::info;

use crate::database::ActivityStore;
use crate::error::SignupError;
use crate::models::{ActivitiesSnapshot, MessageResponse};

pub fn list_activities(store: &ActivityStore) -> ActivitiesSnapshot {
    store.snapshot()
}

pub fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, SignupError> {
    store.sign_up(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "signup accepted");
    Ok(MessageResponse {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}
