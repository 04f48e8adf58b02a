//! Wire types for the screenshot endpoint (`POST /screenshot`).

use serde::{Deserialize, Serialize};

use crate::CaptureOptions;

/// How the service should return the captured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// JSON body with the PNG bytes base64-encoded in `screenshot`
    Base64,
    /// Raw PNG attachment
    File,
}

/// JSON body sent to the screenshot endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenshotRequest {
    pub url: String,
    /// Seconds the service waits after navigation before capturing
    pub wait_time: u64,
    pub full_page: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub format: ResponseFormat,
}

impl ScreenshotRequest {
    /// Build a base64-format request for `url` using `options`.
    pub fn new(url: &str, options: &CaptureOptions) -> Self {
        Self {
            url: url.to_string(),
            wait_time: options.wait_time,
            full_page: options.full_page,
            viewport_width: options.viewport.width,
            viewport_height: options.viewport.height,
            format: ResponseFormat::Base64,
        }
    }
}

/// JSON body returned by the screenshot endpoint.
///
/// Only `success` is guaranteed. `screenshot`, `url` and `size` are present
/// on success; `error` is present on failure. None of the optional fields
/// are inspected on the other branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// URL actually captured (after the service normalized it)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Size of the decoded PNG in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl ScreenshotResponse {
    /// The base64 payload, if the service sent one.
    pub fn payload(&self) -> Option<&str> {
        self.screenshot.as_deref()
    }
}
