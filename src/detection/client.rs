// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the detection endpoints.
//!
//! The detection service is an opaque collaborator: one `POST` per analysis,
//! multipart body with a single `file` field, JSON response of the shape
//! `{ success, label?, confidence?, error? }`. The server reports its own
//! failures inside the body with `success: false`, so the response body is
//! parsed regardless of the HTTP status code.
//!
//! No timeout is configured and nothing is retried; an unresponsive endpoint
//! keeps the panel loading until the transport itself gives up.

use super::{DetectionReport, Modality, SelectedFile, SubmitError};
use serde::Deserialize;

/// Default base URL of the detection service.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Wire format of a detection endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub error: Option<String>,
}

impl DetectionResponse {
    /// Converts the wire response into a displayable outcome.
    ///
    /// A `success: true` body missing its label or confidence is malformed
    /// and lands in the transport-error class, like any other unparseable
    /// response.
    pub fn into_report(self) -> Result<DetectionReport, SubmitError> {
        if self.success {
            match (self.label, self.confidence) {
                (Some(label), Some(confidence)) => Ok(DetectionReport { label, confidence }),
                _ => Err(SubmitError::Network(
                    "response is missing label or confidence".to_string(),
                )),
            }
        } else {
            Err(SubmitError::Server(
                self.error.unwrap_or_else(|| "unknown error".to_string()),
            ))
        }
    }
}

/// Client for the detection service, shared by both panels.
///
/// Cloning is cheap; the underlying `reqwest::Client` holds the connection
/// pool.
#[derive(Debug, Clone)]
pub struct DetectionClient {
    base_url: String,
    http: reqwest::Client,
}

impl Default for DetectionClient {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

impl DetectionClient {
    /// Creates a client for the given base URL.
    ///
    /// A trailing slash on the base URL is tolerated so that configured
    /// values like `http://host:5000/` resolve to the same endpoints.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(concat!("VeriLens/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        Self { base_url, http }
    }

    /// Returns the configured base URL (without trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the detection endpoint for a modality.
    #[must_use]
    pub fn endpoint_url(&self, modality: Modality) -> String {
        format!("{}{}", self.base_url, modality.endpoint_path())
    }

    /// Submits a file for analysis and awaits the verdict.
    ///
    /// Exactly one request is issued per call. Server-reported failures map
    /// to [`SubmitError::Server`]; everything else (unreadable file, refused
    /// connection, malformed body) maps to [`SubmitError::Network`].
    pub async fn detect(
        &self,
        modality: Modality,
        file: SelectedFile,
    ) -> Result<DetectionReport, SubmitError> {
        let bytes =
            std::fs::read(&file.path).map_err(|e| SubmitError::Network(e.to_string()))?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)
            .map_err(|e| SubmitError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint_url(modality))
            .multipart(form)
            .send()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        let body: DetectionResponse = response
            .json()
            .await
            .map_err(|e| SubmitError::Network(e.to_string()))?;

        body.into_report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> DetectionResponse {
        serde_json::from_str(json).expect("valid response JSON")
    }

    #[test]
    fn successful_response_parses_into_report() {
        let response = parse(r#"{"success": true, "label": "FAKE", "confidence": 87}"#);
        let report = response.into_report().expect("report");
        assert_eq!(report.label, "FAKE");
        assert_eq!(report.confidence, 87.0);
        assert_eq!(report.verdict(), super::super::Verdict::Fake);
    }

    #[test]
    fn fractional_confidence_is_preserved() {
        let response = parse(r#"{"success": true, "label": "REAL", "confidence": 93.27}"#);
        let report = response.into_report().expect("report");
        assert_eq!(report.confidence, 93.27);
    }

    #[test]
    fn failure_response_carries_server_message() {
        let response = parse(r#"{"success": false, "error": "Image model not loaded"}"#);
        let err = response.into_report().unwrap_err();
        assert_eq!(err, SubmitError::Server("Image model not loaded".into()));
    }

    #[test]
    fn failure_without_message_still_maps_to_server_error() {
        let response = parse(r#"{"success": false}"#);
        let err = response.into_report().unwrap_err();
        assert!(matches!(err, SubmitError::Server(_)));
    }

    #[test]
    fn success_without_label_is_a_malformed_body() {
        let response = parse(r#"{"success": true, "confidence": 40}"#);
        let err = response.into_report().unwrap_err();
        assert!(matches!(err, SubmitError::Network(_)));
    }

    #[test]
    fn empty_body_defaults_to_failure() {
        let response = parse("{}");
        assert!(matches!(
            response.into_report(),
            Err(SubmitError::Server(_))
        ));
    }

    #[test]
    fn endpoint_urls_join_base_and_path() {
        let client = DetectionClient::new("http://localhost:5000");
        assert_eq!(
            client.endpoint_url(Modality::Image),
            "http://localhost:5000/detect/image"
        );
        assert_eq!(
            client.endpoint_url(Modality::Audio),
            "http://localhost:5000/detect/audio"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_trimmed() {
        let client = DetectionClient::new("http://localhost:5000/");
        assert_eq!(client.base_url(), "http://localhost:5000");
        assert_eq!(
            client.endpoint_url(Modality::Audio),
            "http://localhost:5000/detect/audio"
        );
    }

    #[test]
    fn default_client_targets_local_server() {
        let client = DetectionClient::default();
        assert_eq!(client.base_url(), DEFAULT_SERVER_URL);
    }

    #[tokio::test]
    async fn detect_reports_unreadable_file_as_network_error() {
        let client = DetectionClient::default();
        let missing = SelectedFile {
            path: std::path::PathBuf::from("/nonexistent/photo.png"),
            name: "photo.png".to_string(),
            mime_type: "image/png".to_string(),
            size_bytes: 1,
        };

        let err = client
            .detect(Modality::Image, missing)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Network(_)));
    }
}
