use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct BlogRequest {
    pub topic: String,
    pub tone: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
