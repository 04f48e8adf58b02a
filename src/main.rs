use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};

use websnap::{
    create_image_gallery, export, screenshot_page, validate, CaptureOptions, ClientConfig,
    Document, GalleryItem, ScreenshotClient, Viewport,
};

#[derive(Parser)]
#[command(name = "websnap", version, about = "Capture web pages through a screenshot service")]
struct Cli {
    /// Screenshot endpoint (overrides WEBSNAP_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Request timeout in milliseconds (overrides WEBSNAP_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capture a single page
    Capture {
        url: String,
        /// Seconds to wait before capturing
        #[arg(long)]
        wait_time: Option<u64>,
        /// Capture only the viewport
        #[arg(long)]
        no_full_page: bool,
        #[arg(long)]
        width: Option<u32>,
        #[arg(long)]
        height: Option<u32>,
        /// Write the PNG here
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write an HTML page embedding the screenshot here
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Capture several pages, one at a time
    Batch {
        #[arg(required = true)]
        urls: Vec<String>,
        /// Directory for the PNG files
        #[arg(long, default_value = "screenshots")]
        out_dir: PathBuf,
        /// Write an HTML gallery of the captures here
        #[arg(long)]
        gallery: Option<PathBuf>,
        /// Pause between requests in milliseconds (overrides WEBSNAP_BATCH_DELAY_MS)
        #[arg(long)]
        delay_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("reading WEBSNAP_* environment")?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(ms) = cli.timeout_ms {
        config.timeout_ms = Some(ms);
    }

    match cli.command {
        Commands::Capture {
            url,
            wait_time,
            no_full_page,
            width,
            height,
            output,
            html,
        } => {
            let defaults = config.defaults;
            let options = CaptureOptions {
                wait_time: wait_time.unwrap_or(defaults.wait_time),
                full_page: !no_full_page,
                viewport: Viewport {
                    width: width.unwrap_or(defaults.viewport.width),
                    height: height.unwrap_or(defaults.viewport.height),
                },
            };
            capture(config, &url, options, output, html).await
        }
        Commands::Batch {
            urls,
            out_dir,
            gallery,
            delay_ms,
        } => {
            if let Some(ms) = delay_ms {
                config.batch_delay = Duration::from_millis(ms);
            }
            batch(config, &urls, out_dir, gallery).await
        }
    }
}

async fn capture(
    config: ClientConfig,
    url: &str,
    options: CaptureOptions,
    output: Option<PathBuf>,
    html: Option<PathBuf>,
) -> Result<()> {
    let url = validate::validate_url(url)?;
    options.validate()?;

    let client = ScreenshotClient::new(config)?;
    let Some(response) = client.fetch_screenshot(&url, &options).await else {
        bail!("capture of {} failed", url);
    };
    let Some(payload) = response.payload() else {
        bail!("service reported success for {} but sent no image", url);
    };
    info!(
        "Captured {} ({} bytes)",
        response.url.as_deref().unwrap_or(&url),
        response.size.unwrap_or_default()
    );

    let output = output.unwrap_or_else(|| PathBuf::from(export::screenshot_filename(1, &url)));
    export::save_base64_image(payload, &output)
        .with_context(|| format!("saving {}", output.display()))?;

    if let Some(html) = html {
        let page = screenshot_page(payload, &url);
        std::fs::write(&html, page.to_html()).with_context(|| format!("writing {}", html.display()))?;
        info!("Wrote {}", html.display());
    }
    Ok(())
}

async fn batch(
    config: ClientConfig,
    urls: &[String],
    out_dir: PathBuf,
    gallery: Option<PathBuf>,
) -> Result<()> {
    config.defaults.validate()?;
    let urls = urls
        .iter()
        .map(|u| validate::validate_url(u))
        .collect::<websnap::Result<Vec<_>>>()?;

    let client = ScreenshotClient::new(config)?;
    let entries = client.batch_screenshots(&urls).await;

    let saved = export::save_batch(&entries, &out_dir)
        .with_context(|| format!("saving into {}", out_dir.display()))?;
    for s in &saved {
        match &s.path {
            Some(path) => println!("ok     {}  ->  {}", s.url, path.display()),
            None => println!("failed {}", s.url),
        }
    }

    if let Some(path) = gallery {
        let mut doc = Document::new("Screenshots");
        doc.append(create_image_gallery(&GalleryItem::from_batch(&entries)));
        std::fs::write(&path, doc.to_html()).with_context(|| format!("writing {}", path.display()))?;
        info!("Wrote gallery {}", path.display());
    }

    let failed = saved.iter().filter(|s| !s.success).count();
    if failed > 0 {
        warn!("{} of {} captures failed", failed, saved.len());
    }
    Ok(())
}
