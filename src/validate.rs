//! Parameter checks mirroring the limits of the screenshot service.

use crate::{Error, Result, Viewport};

/// Largest viewport edge the service accepts, in pixels
pub const MAX_VIEWPORT_EDGE: u32 = 4096;
/// Longest wait the service accepts, in seconds
pub const MAX_WAIT_TIME: u64 = 60;

/// Prepend `https://` when `url` carries no http(s) scheme.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Validate a target URL and return it in normalized form.
pub fn validate_url(url: &str) -> Result<String> {
    if url.trim().is_empty() {
        return Err(Error::Validation("URL must not be empty".into()));
    }

    let normalized = normalize_url(url);
    let parsed = url::Url::parse(&normalized)
        .map_err(|e| Error::Validation(format!("Malformed URL {}: {}", url, e)))?;

    match parsed.host() {
        Some(url::Host::Domain(domain)) => {
            if !domain.split('.').all(is_valid_label) {
                return Err(Error::Validation(format!("Invalid domain: {}", domain)));
            }
        }
        Some(_) => {} // IP literal
        None => return Err(Error::Validation(format!("URL has no host: {}", url))),
    }

    Ok(normalized)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

pub fn validate_viewport(viewport: Viewport) -> Result<()> {
    if viewport.width == 0 || viewport.height == 0 {
        return Err(Error::Validation("Viewport dimensions must be greater than 0".into()));
    }
    if viewport.width > MAX_VIEWPORT_EDGE || viewport.height > MAX_VIEWPORT_EDGE {
        return Err(Error::Validation(format!(
            "Viewport must not exceed {}px (got {}x{})",
            MAX_VIEWPORT_EDGE, viewport.width, viewport.height
        )));
    }
    Ok(())
}

pub fn validate_wait_time(wait_time: u64) -> Result<()> {
    if wait_time > MAX_WAIT_TIME {
        return Err(Error::Validation(format!(
            "Wait time must not exceed {} seconds (got {})",
            MAX_WAIT_TIME, wait_time
        )));
    }
    Ok(())
}
