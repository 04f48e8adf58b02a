//! Canvas surface and the base64-to-canvas draw helper.

use std::io::Cursor;

use image::{imageops, ImageFormat, Rgba, RgbaImage};

use crate::{export, Document, Error, Result};

/// An RGBA drawing surface, the pixel store behind a `<canvas>` element
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pixels: RgbaImage,
}

impl Canvas {
    /// A transparent canvas of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Resize the canvas. Like assigning `canvas.width`, this clears it.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.pixels = RgbaImage::new(width, height);
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x < self.width() && y < self.height() {
            Some(*self.pixels.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Draw `image` with its top-left corner at (`x`, `y`), clipped to the canvas.
    pub fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        imageops::overlay(&mut self.pixels, image, x, y);
    }

    /// Encode the current canvas contents as PNG.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buf = Cursor::new(Vec::new());
        self.pixels.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }
}

/// Decode a base64 payload into pixels on the blocking pool.
///
/// This is the equivalent of waiting for an image's `load` event: the
/// caller suspends until the decode has finished.
pub async fn load_base64_image(payload: &str) -> Result<RgbaImage> {
    let payload = payload.to_string();
    tokio::task::spawn_blocking(move || {
        export::decode_base64_image(&payload).map(|img| img.to_rgba8())
    })
    .await
    .map_err(|e| Error::Other(format!("Image decode task failed: {}", e)))?
}

/// Decode `payload` and draw it onto the canvas `canvas_id` of `doc`.
///
/// The canvas is resized to the image's natural dimensions first, and the
/// `<canvas>` element's `width`/`height` attributes follow.
pub async fn draw_base64_image_on_canvas(
    doc: &mut Document,
    canvas_id: &str,
    payload: &str,
) -> Result<()> {
    if doc.canvas(canvas_id).is_none() {
        return Err(Error::NotFound(format!("canvas #{}", canvas_id)));
    }

    let image = load_base64_image(payload).await?;
    let (width, height) = image.dimensions();

    let canvas = doc
        .canvas_mut(canvas_id)
        .ok_or_else(|| Error::NotFound(format!("canvas #{}", canvas_id)))?;
    canvas.resize(width, height);
    canvas.draw_image(&image, 0, 0);

    if let Some(el) = doc.element_by_id_mut(canvas_id) {
        el.set_attr("width", width.to_string());
        el.set_attr("height", height.to_string());
    }
    Ok(())
}
