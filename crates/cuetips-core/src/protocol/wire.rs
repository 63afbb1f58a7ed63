//! JSON bodies exchanged with the detection/simulation service.
//!
//! Two endpoints, both external collaborators:
//! - `POST /upload` — multipart form, field `file` = PNG blob. 200 body is
//!   [`UploadResponse`].
//! - `POST /sim` — [`SimRequest`]. 200 body is [`SimResponse`]; other
//!   statuses carry an [`ErrorBody`].

use serde::{Deserialize, Serialize};

/// Request body for `POST /sim`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimRequest {
    pub cue_angle: f32,
}

impl SimRequest {
    /// Serialize for the request body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Cue-stick placement returned by the simulation service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CueGeometry {
    #[serde(rename = "startX")]
    pub start_x: f32,
    #[serde(rename = "startY")]
    pub start_y: f32,
    pub length: f32,
    /// Degrees; 0 points "up" in screen space.
    pub angle: f32,
}

/// Success body for `POST /sim`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimResponse {
    /// Trajectory overlay markup.
    pub svg: String,
    pub cue: CueGeometry,
}

impl SimResponse {
    /// Parse a response from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Success body for `POST /upload`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Base64-encoded PNG produced by the detection service.
    pub image: String,
}

impl UploadResponse {
    /// Parse a response from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Error body returned on a non-200 status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

impl ErrorBody {
    /// Best-effort extraction of the service's error message: falls back to
    /// the raw body when it is not the expected JSON shape.
    pub fn message_from_json(body: &str) -> String {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(err) if !err.message.is_empty() => err.message,
            _ => body.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sim_request_serializes_the_angle_field() {
        let json = SimRequest { cue_angle: 45.0 }.to_json().unwrap();
        assert_eq!(json, r#"{"cue_angle":45.0}"#);
    }

    #[test]
    fn parse_sim_response() {
        let json = r#"{
            "svg": "<svg xmlns=\"http://www.w3.org/2000/svg\"></svg>",
            "cue": { "startX": 10.0, "startY": 10.0, "length": 100.0, "angle": 90.0 }
        }"#;
        let resp = SimResponse::from_json(json).unwrap();
        assert!(resp.svg.starts_with("<svg"));
        assert_eq!(resp.cue.start_x, 10.0);
        assert_eq!(resp.cue.length, 100.0);
        assert_eq!(resp.cue.angle, 90.0);
    }

    #[test]
    fn parse_upload_response() {
        let resp = UploadResponse::from_json(r#"{ "image": "aGVsbG8=" }"#).unwrap();
        assert_eq!(resp.image, "aGVsbG8=");
    }

    #[test]
    fn sim_response_without_cue_is_rejected() {
        assert!(SimResponse::from_json(r#"{ "svg": "<svg/>" }"#).is_err());
    }

    #[test]
    fn error_message_extraction_falls_back_to_the_raw_body() {
        assert_eq!(
            ErrorBody::message_from_json(r#"{ "message": "Missing cue_angle in request" }"#),
            "Missing cue_angle in request"
        );
        assert_eq!(
            ErrorBody::message_from_json("Internal Server Error"),
            "Internal Server Error"
        );
    }
}
