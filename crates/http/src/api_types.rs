use serde::{Deserialize, Serialize};

/// Body of `POST /ask`.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskRequest {
    pub query: String,
}

/// Response of `POST /ask`.
///
/// Failures reuse the same shape with the message embedded in `answer`,
/// prefixed `Error: `.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResponse {
    pub answer: String,
}
