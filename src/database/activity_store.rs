use std::sync::Arc;

use parking_lot::RwLock;

use crate::database::seed;
use crate::error::SignupError;
use crate::models::{ActivitiesSnapshot, Activity};

/// Process-wide activity store, shared by cloning the handle.
///
/// Signups take the write lock for the whole check-then-append, so two
/// concurrent requests can never both pass the duplicate or capacity check.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivitiesSnapshot>>,
}

impl ActivityStore {
    pub fn new(activities: ActivitiesSnapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn snapshot(&self) -> ActivitiesSnapshot {
        self.inner.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.inner.read().get(name).cloned()
    }

    pub fn insert(&self, name: impl Into<String>, activity: Activity) {
        self.inner.write().insert(name.into(), activity);
    }

    /// Appends `email` to the activity's participants.
    ///
    /// Checks run in order: existence, duplicate, capacity. A failed check
    /// leaves the store untouched.
    pub fn sign_up(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activities = self.inner.write();
        let activity = activities
            .get_mut(activity_name)
            .ok_or(SignupError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(SignupError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(SignupError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(())
    }
}
