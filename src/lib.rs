//! WebSnap client
//!
//! A client for a web page screenshot service together with helpers that
//! turn the returned base64 payloads into something you can look at:
//! data-URI images, download links, canvas surfaces and grid galleries.
//!
//! # Features
//!
//! - **Request helper**: one JSON-over-HTTP call per capture; failures are
//!   logged and collapse into `None`
//! - **Batch sequencing**: strictly one request at a time with a fixed pause
//! - **Display helpers**: build an HTML [`Document`] that embeds screenshots
//!   as data URIs
//!
//! # Example
//!
//! ```no_run
//! use websnap::{CaptureOptions, ClientConfig, Document, ScreenshotClient, Viewport};
//!
//! # async fn run() -> websnap::Result<()> {
//! let client = ScreenshotClient::new(ClientConfig::default())?;
//! let options = CaptureOptions {
//!     viewport: Viewport { width: 1280, height: 720 },
//!     ..Default::default()
//! };
//!
//! let mut page = Document::new("Screenshots");
//! if let Some(resp) = client.fetch_and_display(&mut page, "https://example.com", &options).await {
//!     println!("captured {} bytes", resp.size.unwrap_or_default());
//! }
//! std::fs::write("screenshots.html", page.to_html())?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod canvas;
pub mod client;
pub mod config;
pub mod display;
pub mod dom;
pub mod export;
pub mod gallery;
pub mod protocol;
pub mod transport;
pub mod validate;

pub use canvas::{draw_base64_image_on_canvas, Canvas};
pub use client::{BatchEntry, ScreenshotClient};
pub use config::ClientConfig;
pub use display::{
    create_downloadable_image, data_uri, display_base64_image, screenshot_page,
    update_image_element, DEFAULT_DOWNLOAD_FILENAME,
};
pub use dom::{Document, Element};
pub use gallery::{create_image_gallery, GalleryItem};
pub use protocol::{ResponseFormat, ScreenshotRequest, ScreenshotResponse};
pub use transport::{HttpTransport, Transport};

/// Capture parameters sent with every screenshot request
///
/// The defaults match what the screenshot service itself assumes when a
/// field is omitted: wait three seconds, capture the full page, use a
/// 1920x1080 viewport.
///
/// # Examples
///
/// ```
/// let opts = websnap::CaptureOptions::default();
/// assert_eq!(opts.wait_time, 3);
/// assert!(opts.full_page);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Seconds to wait after page load before capturing
    pub wait_time: u64,
    /// Capture the whole scrollable page instead of the viewport only
    pub full_page: bool,
    /// Browser viewport used for the capture
    pub viewport: Viewport,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            wait_time: 3,
            full_page: true,
            viewport: Viewport::default(),
        }
    }
}

impl CaptureOptions {
    /// Check the options against the limits the service enforces.
    pub fn validate(&self) -> Result<()> {
        validate::validate_wait_time(self.wait_time)?;
        validate::validate_viewport(self.viewport)
    }
}

/// Viewport dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}
