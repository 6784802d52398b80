//! Scene breakdown generation.
//!
//! The single generation routine shared by the HTTP and CLI front ends.

use tracing::info;

use scenecrew_models::SceneBreakdown;

use crate::client::{ChatCompletionRequest, OpenAiClient};
use crate::error::LlmResult;
use crate::parse::parse_scenes;
use crate::prompt::build_scene_messages;

/// Model used for scene generation.
const MODEL: &str = "gpt-3.5-turbo";

/// Token cap for the completion.
const MAX_TOKENS: u32 = 1000;

/// Sampling temperature.
const TEMPERATURE: f32 = 0.7;

/// Generate a scene breakdown for a topic.
///
/// Builds the prompt, issues one chat-completion call with fixed
/// parameters, and parses the returned text into scene records. The topic
/// is echoed into the result unchanged.
pub async fn generate_scene_breakdown(
    client: &OpenAiClient,
    topic: &str,
) -> LlmResult<SceneBreakdown> {
    let request = ChatCompletionRequest {
        model: MODEL.to_string(),
        messages: build_scene_messages(topic),
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };

    let text = client.chat_completion(&request).await?;
    let scenes = parse_scenes(&text);

    info!(topic, scene_count = scenes.len(), "Generated scene breakdown");

    Ok(SceneBreakdown::new(topic, scenes))
}
