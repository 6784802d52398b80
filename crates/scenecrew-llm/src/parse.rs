//! Line-oriented parser for model scene breakdown text.
//!
//! The model is asked for "scene number, description, and key elements" but
//! returns freeform prose, so this is a best-effort heuristic rather than a
//! grammar. Content that does not match the expected shape is dropped.

use tracing::debug;

use scenecrew_models::Scene;

/// Parse freeform breakdown text into scene records.
///
/// A line starting with "scene" (case-insensitive) opens a new record and
/// becomes its `number`. Within a record, `Description:` and `Key Elements:`
/// lines fill the corresponding fields (elements are comma-split); a
/// colon-free line fills the description when it is still empty. Lines
/// before the first header are an implicit preamble and are skipped.
/// Zero scenes is a valid outcome.
pub fn parse_scenes(text: &str) -> Vec<Scene> {
    let mut scenes = Vec::new();
    let mut current: Option<Scene> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_scene_header(line) {
            if let Some(scene) = current.take() {
                scenes.push(scene);
            }
            current = Some(Scene::new(line));
            continue;
        }

        let Some(scene) = current.as_mut() else {
            debug!(line, "Skipping preamble line before first scene header");
            continue;
        };

        if let Some((key, value)) = line.split_once(':') {
            match key.trim().to_lowercase().as_str() {
                "description" => scene.description = value.trim().to_string(),
                "key elements" => {
                    scene.elements = value.split(',').map(|e| e.trim().to_string()).collect();
                }
                _ => {}
            }
        } else if scene.description.is_empty() {
            scene.description = line.to_string();
        }
    }

    if let Some(scene) = current {
        scenes.push(scene);
    }

    scenes
}

fn is_scene_header(line: &str) -> bool {
    // get() rather than slicing: byte 5 may fall inside a multi-byte character
    line.get(..5)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("scene"))
}
