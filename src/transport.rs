//! Transport seam between the client and the screenshot service.
//!
//! `HttpTransport` is the real thing; tests and embedders can plug in any
//! other `Transport` (a recorded fixture, an in-process service, ...).

use std::time::Duration;

use futures::future::BoxFuture;
use log::debug;
use reqwest::Client;

use crate::{ClientConfig, Error, Result, ScreenshotRequest, ScreenshotResponse};

/// Something that can deliver a [`ScreenshotRequest`] and hand back the
/// service's answer.
pub trait Transport: Send + Sync {
    /// Send `request` to `endpoint` and return the parsed response body.
    ///
    /// A response with `success: false` is still `Ok`; only failures to get
    /// a well-formed answer are errors.
    fn send<'a>(
        &'a self,
        endpoint: &'a str,
        request: &'a ScreenshotRequest,
    ) -> BoxFuture<'a, Result<ScreenshotResponse>>;
}

/// JSON-over-HTTP transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(ms));
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send<'a>(
        &'a self,
        endpoint: &'a str,
        request: &'a ScreenshotRequest,
    ) -> BoxFuture<'a, Result<ScreenshotResponse>> {
        Box::pin(async move {
            debug!("POST {} url={}", endpoint, request.url);
            let res = self.client.post(endpoint).json(request).send().await?;

            // The service reports failures as JSON with a 4xx/5xx status,
            // so the body is parsed regardless of status.
            let status = res.status();
            let body = res.bytes().await?;
            serde_json::from_slice::<ScreenshotResponse>(&body).map_err(|e| {
                Error::Protocol(format!("HTTP {} with unparseable body: {}", status, e))
            })
        })
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send<'a>(
        &'a self,
        endpoint: &'a str,
        request: &'a ScreenshotRequest,
    ) -> BoxFuture<'a, Result<ScreenshotResponse>> {
        (**self).send(endpoint, request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send<'a>(
        &'a self,
        endpoint: &'a str,
        request: &'a ScreenshotRequest,
    ) -> BoxFuture<'a, Result<ScreenshotResponse>> {
        (**self).send(endpoint, request)
    }
}
