//! Generated HTML, checked by parsing it back

use scraper::{Html, Selector};
use websnap::{
    create_downloadable_image, create_image_gallery, display_base64_image, screenshot_page,
    update_image_element, Document, GalleryItem,
};

const PIXEL: &str = "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8/5+hHgAHggJ/PchI7wAAAABJRU5ErkJggg==";

fn select<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
    let sel = Selector::parse(css).unwrap();
    doc.select(&sel).collect()
}

#[test]
fn displayed_image_source_is_exact_data_uri() {
    let mut page = Document::new("Display");
    display_base64_image(&mut page, PIXEL);

    let html = Html::parse_document(&page.to_html());
    let imgs = select(&html, "body > img");
    assert_eq!(imgs.len(), 1);
    assert_eq!(
        imgs[0].value().attr("src"),
        Some(format!("data:image/png;base64,{}", PIXEL).as_str())
    );
    assert_eq!(imgs[0].value().attr("alt"), Some("Web page screenshot"));
}

#[test]
fn updated_image_renders_new_source() {
    let mut page = Document::new("Update");
    let mut el = websnap::Element::new("img").with_attr("id", "shot").with_attr("src", "old.png");
    update_image_element(&mut el, PIXEL);
    page.append(el);

    let html = Html::parse_document(&page.to_html());
    let shot = select(&html, "#shot");
    assert_eq!(
        shot[0].value().attr("src"),
        Some(format!("data:image/png;base64,{}", PIXEL).as_str())
    );
}

#[test]
fn download_link_carries_filename() {
    let mut page = Document::new("Download");
    page.append(create_downloadable_image(PIXEL, None));
    page.append(create_downloadable_image(PIXEL, Some("example-home.png")));

    let html = Html::parse_document(&page.to_html());
    let links = select(&html, "a[download]");
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].value().attr("download"), Some("screenshot.png"));
    assert_eq!(links[1].value().attr("download"), Some("example-home.png"));

    let inner = select(&html, "a[download] > img");
    assert_eq!(inner.len(), 2);
    assert_eq!(inner[0].value().attr("title"), Some("Click to download image"));
}

#[test]
fn gallery_has_one_captioned_card_per_item() {
    let items = vec![
        GalleryItem::new("https://one.test", "QQ=="),
        GalleryItem::new("https://two.test/?a=1&b=2", "Qg=="),
        GalleryItem::new("https://three.test", "Qw=="),
    ];
    let mut page = Document::new("Gallery");
    page.append(create_image_gallery(&items));

    let html = Html::parse_document(&page.to_html());
    let grid = select(&html, "div.gallery");
    assert_eq!(grid.len(), 1);
    let style = grid[0].value().attr("style").unwrap();
    assert!(style.contains("grid-template-columns: repeat(auto-fit, minmax(300px, 1fr))"));

    let captions: Vec<String> = select(&html, "div.card > div.caption")
        .iter()
        .map(|c| c.text().collect::<String>())
        .collect();
    assert_eq!(
        captions,
        vec![
            "Screenshot 1: https://one.test",
            "Screenshot 2: https://two.test/?a=1&b=2",
            "Screenshot 3: https://three.test",
        ]
    );

    let srcs: Vec<&str> = select(&html, "div.card > img")
        .iter()
        .filter_map(|i| i.value().attr("src"))
        .collect();
    assert_eq!(srcs[1], "data:image/png;base64,Qg==");
}

#[test]
fn standalone_page_embeds_screenshot() {
    let page = screenshot_page(PIXEL, "Example <home>");
    let html = Html::parse_document(&page.to_html());

    let title = select(&html, "title")[0].text().collect::<String>();
    assert_eq!(title, "Example <home>");

    let img = select(&html, "div.container > img");
    assert_eq!(img[0].value().attr("alt"), Some("Example <home>"));
    assert!(img[0].value().attr("src").unwrap().ends_with(PIXEL));

    let info = select(&html, "div.info p")[0].text().collect::<String>();
    assert_eq!(info, format!("Image size: {} characters", PIXEL.len()));
}
