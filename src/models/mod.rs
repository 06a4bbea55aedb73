pub mod activity;
pub mod signup;

pub use activity::{ActivitiesSnapshot, Activity};
pub use signup::{MessageResponse, SignupQuery};
