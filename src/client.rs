//! The screenshot client: single requests, fetch-and-display, and batches.

use std::time::{SystemTime, UNIX_EPOCH};

use log::{error, info};

use crate::display::{create_downloadable_image, display_base64_image};
use crate::{
    CaptureOptions, ClientConfig, Document, Error, HttpTransport, Result, ScreenshotRequest,
    ScreenshotResponse, Transport,
};

/// One batch result: the URL that was requested and what came back.
///
/// `result` is `None` when that capture failed for any reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchEntry {
    pub url: String,
    pub result: Option<ScreenshotResponse>,
}

/// Client for the `POST /screenshot` endpoint
///
/// Generic over the [`Transport`] so the HTTP layer can be swapped out;
/// [`ScreenshotClient::new`] gives you the reqwest-backed one.
pub struct ScreenshotClient<T = HttpTransport> {
    transport: T,
    config: ClientConfig,
}

impl ScreenshotClient<HttpTransport> {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> ScreenshotClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Request a screenshot and report why it failed, if it did.
    pub async fn try_fetch_screenshot(
        &self,
        url: &str,
        options: &CaptureOptions,
    ) -> Result<ScreenshotResponse> {
        let request = ScreenshotRequest::new(url, options);
        let response = self.transport.send(&self.config.endpoint, &request).await?;
        if response.success {
            Ok(response)
        } else {
            Err(Error::Service(
                response
                    .error
                    .unwrap_or_else(|| "no error message".to_string()),
            ))
        }
    }

    /// Request a screenshot of `url`.
    ///
    /// Returns the service's response unchanged when it reports success.
    /// Every failure (service-side or transport-side) is logged and yields
    /// `None`; this never returns an error.
    pub async fn fetch_screenshot(
        &self,
        url: &str,
        options: &CaptureOptions,
    ) -> Option<ScreenshotResponse> {
        match self.try_fetch_screenshot(url, options).await {
            Ok(response) => Some(response),
            Err(Error::Service(msg)) => {
                error!("Screenshot failed for {}: {}", url, msg);
                None
            }
            Err(e) => {
                error!("Request failed for {}: {}", url, e);
                None
            }
        }
    }

    /// Fetch a screenshot and, on success, append it to `doc` twice: as a
    /// plain image and as a downloadable one named `screenshot_<millis>.png`.
    pub async fn fetch_and_display(
        &self,
        doc: &mut Document,
        url: &str,
        options: &CaptureOptions,
    ) -> Option<ScreenshotResponse> {
        let response = self.fetch_screenshot(url, options).await?;
        let payload = response.payload().unwrap_or_default();

        display_base64_image(doc, payload);
        let filename = format!("screenshot_{}.png", unix_millis());
        doc.append(create_downloadable_image(payload, Some(&filename)));

        Some(response)
    }

    /// Capture `urls` one after another with default options.
    ///
    /// Requests never overlap; `config.batch_delay` is slept between
    /// consecutive requests. The result has one entry per input URL, in input
    /// order.
    pub async fn batch_screenshots<S: AsRef<str>>(&self, urls: &[S]) -> Vec<BatchEntry> {
        let options = self.config.defaults;
        let mut results = Vec::with_capacity(urls.len());

        for (i, url) in urls.iter().enumerate() {
            let url = url.as_ref();
            if i > 0 && !self.config.batch_delay.is_zero() {
                tokio::time::sleep(self.config.batch_delay).await;
            }
            info!("Capturing {}/{}: {}", i + 1, urls.len(), url);
            let result = self.fetch_screenshot(url, &options).await;
            results.push(BatchEntry {
                url: url.to_string(),
                result,
            });
        }

        results
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
