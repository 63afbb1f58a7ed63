use serde::{Deserialize, Serialize};

/// Application configuration, overridable by the host page.
/// Every field defaults, so a partial JSON override is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoint receiving the captured frame.
    pub upload_url: String,
    /// Endpoint receiving the cue angle.
    pub sim_url: String,
    /// Degrees of cue rotation per pixel of horizontal drag.
    pub drag_sensitivity: f32,
    /// Starting cue angle in degrees.
    pub initial_angle: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_url: "/upload".to_string(),
            sim_url: "/sim".to_string(),
            drag_sensitivity: 0.5,
            initial_angle: 45.0,
        }
    }
}

impl AppConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_override_keeps_defaults() {
        let config = AppConfig::from_json(r#"{ "sim_url": "http://localhost:4000/sim" }"#).unwrap();
        assert_eq!(config.sim_url, "http://localhost:4000/sim");
        assert_eq!(config.upload_url, "/upload");
        assert_eq!(config.drag_sensitivity, 0.5);
        assert_eq!(config.initial_angle, 45.0);
    }

    #[test]
    fn empty_object_is_the_default() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config.upload_url, AppConfig::default().upload_url);
    }
}
