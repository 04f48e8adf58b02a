//! Helpers that embed base64 screenshots in HTML.
//!
//! None of these look inside the payload: a malformed one produces a broken
//! image in the browser, not an error here.

use crate::{Document, Element};

/// Filename offered by [`create_downloadable_image`] when none is given
pub const DEFAULT_DOWNLOAD_FILENAME: &str = "screenshot.png";

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// `data:image/png;base64,<payload>`
pub fn data_uri(payload: &str) -> String {
    format!("{}{}", DATA_URI_PREFIX, payload)
}

/// Append an `<img>` showing `payload` to the document body.
pub fn display_base64_image<'a>(doc: &'a mut Document, payload: &str) -> &'a mut Element {
    doc.append(
        Element::new("img")
            .with_attr("src", data_uri(payload))
            .with_attr("alt", "Web page screenshot"),
    )
}

/// Point an existing image element at a new payload.
pub fn update_image_element(img: &mut Element, payload: &str) {
    img.set_attr("src", data_uri(payload));
}

/// An image that downloads itself as `filename` when clicked.
///
/// Rendered as `<a download=".." href="data:..."><img ...></a>`, which is
/// what the click handler in a live page ends up synthesizing anyway.
pub fn create_downloadable_image(payload: &str, filename: Option<&str>) -> Element {
    let src = data_uri(payload);
    let img = Element::new("img")
        .with_attr("src", src.clone())
        .with_attr("title", "Click to download image")
        .with_style("cursor", "pointer");

    Element::new("a")
        .with_attr("download", filename.unwrap_or(DEFAULT_DOWNLOAD_FILENAME))
        .with_attr("href", src)
        .with_child(img)
}

const PAGE_CSS: &str = "body {
    font-family: Arial, sans-serif;
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
    background-color: #f5f5f5;
}
.container {
    background: white;
    padding: 30px;
    border-radius: 10px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    text-align: center;
}
img {
    max-width: 100%;
    height: auto;
    border: 1px solid #ddd;
    border-radius: 5px;
    box-shadow: 0 2px 5px rgba(0,0,0,0.1);
}
.info {
    margin-top: 20px;
    color: #666;
    font-size: 14px;
}";

/// A standalone page presenting a single screenshot.
pub fn screenshot_page(payload: &str, title: &str) -> Document {
    let mut doc = Document::new(title);
    doc.set_stylesheet(PAGE_CSS);
    doc.append(
        Element::new("div")
            .with_attr("class", "container")
            .with_child(Element::new("h1").with_text(title))
            .with_child(
                Element::new("img")
                    .with_attr("src", data_uri(payload))
                    .with_attr("alt", title),
            )
            .with_child(
                Element::new("div").with_attr("class", "info").with_child(
                    Element::new("p").with_text(format!("Image size: {} characters", payload.len())),
                ),
            ),
    );
    doc
}
