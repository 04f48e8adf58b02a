/// Responsive grid gallery of captured pages

use crate::display::data_uri;
use crate::{BatchEntry, Element};

/// One gallery card: the page URL and its base64 screenshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    pub url: String,
    pub base64_data: String,
}

impl GalleryItem {
    pub fn new(url: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            base64_data: base64_data.into(),
        }
    }

    /// Gallery items for every batch entry that produced a payload.
    pub fn from_batch(entries: &[BatchEntry]) -> Vec<GalleryItem> {
        entries
            .iter()
            .filter_map(|e| {
                let payload = e.result.as_ref()?.payload()?;
                Some(GalleryItem::new(e.url.clone(), payload))
            })
            .collect()
    }
}

/// Lay `items` out as a grid of captioned cards, in input order.
pub fn create_image_gallery(items: &[GalleryItem]) -> Element {
    let mut gallery = Element::new("div")
        .with_attr("class", "gallery")
        .with_style("display", "grid")
        .with_style("grid-template-columns", "repeat(auto-fit, minmax(300px, 1fr))")
        .with_style("gap", "20px")
        .with_style("padding", "20px");

    for (index, item) in items.iter().enumerate() {
        let img = Element::new("img")
            .with_attr("src", data_uri(&item.base64_data))
            .with_style("width", "100%")
            .with_style("height", "auto")
            .with_style("display", "block");

        let caption = Element::new("div")
            .with_attr("class", "caption")
            .with_style("padding", "10px")
            .with_style("background-color", "#f8f9fa")
            .with_text(format!("Screenshot {}: {}", index + 1, item.url));

        let card = Element::new("div")
            .with_attr("class", "card")
            .with_style("border", "1px solid #ddd")
            .with_style("border-radius", "8px")
            .with_style("overflow", "hidden")
            .with_style("box-shadow", "0 2px 4px rgba(0,0,0,0.1)")
            .with_child(img)
            .with_child(caption);

        gallery.append_child(card);
    }

    gallery
}
