use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys tried, in order, when a suggestion is an object.
const LABEL_KEYS: [&str; 4] = ["courseCode", "code", "name", "title"];

/// One item of `GET /api/students/courses/search`.
///
/// The endpoint only promises "a list", so the item is kept as raw JSON and
/// interpreted lazily through [`CourseSuggestion::label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseSuggestion(pub Value);

impl CourseSuggestion {
    /// Text shown in the dropdown and copied into the course code field when picked.
    pub fn label(&self) -> String {
        match &self.0 {
            Value::String(s) => s.clone(),
            Value::Object(map) => LABEL_KEYS
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::to_string)
                .unwrap_or_else(|| self.0.to_string()),
            other => other.to_string(),
        }
    }
}
