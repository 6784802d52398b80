//! Prompt construction for scene breakdown generation.

use crate::client::ChatMessage;

/// Build the message pair sent to the chat-completion API for a topic.
pub fn build_scene_messages(topic: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a professional video scene writer."),
        ChatMessage::user(format!(
            "Create a detailed video scene breakdown for a video about {}. \
             Format the output as a list of scenes, each with a scene number, \
             description, and key elements. Make it practical and filmable.",
            topic
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_embedded_in_user_message() {
        let messages = build_scene_messages("urban beekeeping");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("urban beekeeping"));
    }
}
