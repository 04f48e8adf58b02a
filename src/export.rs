//! Turning payloads back into bytes, images and files.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};
use log::{error, info};

use crate::{BatchEntry, Result};

/// Outcome of saving one batch entry to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedScreenshot {
    pub url: String,
    pub path: Option<PathBuf>,
    pub success: bool,
}

/// Decode a base64 payload (standard alphabet, surrounding whitespace ignored).
pub fn decode_payload(payload: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(payload.trim())?)
}

pub fn encode_payload(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Write the decoded payload to `path`.
pub fn save_base64_image(payload: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = decode_payload(payload)?;
    fs::write(path, bytes)?;
    info!("Saved image: {}", path.display());
    Ok(())
}

pub fn decode_base64_image(payload: &str) -> Result<DynamicImage> {
    let bytes = decode_payload(payload)?;
    Ok(image::load_from_memory(&bytes)?)
}

/// Encode `image` as PNG and return it base64-encoded.
pub fn image_to_base64(image: &DynamicImage) -> Result<String> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    Ok(encode_payload(buf.get_ref()))
}

/// `screenshot_<index>_<url without scheme, separators replaced>.png`
pub fn screenshot_filename(index: usize, url: &str) -> String {
    let bare = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let safe: String = bare
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '?' | '&' | '=' | '#' | '*' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect();
    format!("screenshot_{}_{}.png", index, safe)
}

/// Save every successful entry of a batch under `out_dir`.
///
/// Entries are numbered from 1 in batch order. A failed capture or a payload
/// that cannot be written is reported as unsuccessful; only failing to create
/// `out_dir` itself is an error.
pub fn save_batch(entries: &[BatchEntry], out_dir: impl AsRef<Path>) -> Result<Vec<SavedScreenshot>> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut saved = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        let payload = entry.result.as_ref().and_then(|r| r.payload());
        let path = match payload {
            Some(payload) => {
                let path = out_dir.join(screenshot_filename(i + 1, &entry.url));
                match save_base64_image(payload, &path) {
                    Ok(()) => Some(path),
                    Err(e) => {
                        error!("Failed to save screenshot for {}: {}", entry.url, e);
                        None
                    }
                }
            }
            None => None,
        };
        saved.push(SavedScreenshot {
            url: entry.url.clone(),
            success: path.is_some(),
            path,
        });
    }
    Ok(saved)
}
