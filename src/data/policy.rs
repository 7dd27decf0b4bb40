use serde::Serialize;

/// Static signing policy (`policy.json`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyConfig {
    pub version: String,
    pub intent: String,
    pub content_type: String,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            intent: "production release".to_string(),
            content_type: "macOS payload".to_string(),
        }
    }
}
