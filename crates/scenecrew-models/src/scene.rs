//! Scene record models.

use serde::{Deserialize, Serialize};

/// A single scene extracted from the model's breakdown text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Scene header line as emitted by the model (e.g. "Scene 1")
    pub number: String,

    /// Scene description
    pub description: String,

    /// Key elements listed for the scene
    pub elements: Vec<String>,
}

impl Scene {
    /// Create a new scene with an empty description and no elements.
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            description: String::new(),
            elements: Vec::new(),
        }
    }
}

/// A complete scene breakdown for a topic.
///
/// Transient per request; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneBreakdown {
    /// Topic the breakdown was generated for, echoed unchanged
    pub topic: String,

    /// Scenes in the order the model emitted them
    pub scenes: Vec<Scene>,
}

impl SceneBreakdown {
    /// Create a new breakdown.
    pub fn new(topic: impl Into<String>, scenes: Vec<Scene>) -> Self {
        Self {
            topic: topic.into(),
            scenes,
        }
    }
}
