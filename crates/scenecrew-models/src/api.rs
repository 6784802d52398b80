//! HTTP request/response schemas shared by the API server and CLI.

use serde::{Deserialize, Serialize};

use crate::scene::{Scene, SceneBreakdown};

/// Request body for scene generation.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Topic to generate a scene breakdown for
    #[serde(default)]
    pub topic: Option<String>,
}

/// Successful generation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Always "success"
    pub status: String,

    /// Topic echoed from the request
    pub topic: String,

    /// Parsed scene records
    pub scenes: Vec<Scene>,
}

impl GenerateResponse {
    /// Wrap a breakdown in the success envelope.
    pub fn from_breakdown(breakdown: SceneBreakdown) -> Self {
        Self {
            status: "success".to_string(),
            topic: breakdown.topic,
            scenes: breakdown.scenes,
        }
    }
}

/// Uniform error envelope for all failure modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: String,

    /// Human-readable failure description
    pub message: String,
}

impl ErrorResponse {
    /// Create an error envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_missing_topic_deserializes() {
        let request: GenerateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.topic.is_none());
    }

    #[test]
    fn test_success_envelope() {
        let breakdown = SceneBreakdown::new("coffee roasting", vec![Scene::new("Scene 1")]);
        let response = GenerateResponse::from_breakdown(breakdown);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["topic"], "coffee roasting");
        assert_eq!(json["scenes"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_error_envelope() {
        let json = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "boom");
    }
}
