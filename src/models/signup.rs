use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SignupQuery {
    /// Taken verbatim; not checked for address syntax or case.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
