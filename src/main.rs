#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::SiteContent;
use tracing_subscriber::EnvFilter;

/// Site content, set once at startup
static CONTENT: OnceLock<SiteContent> = OnceLock::new();

/// Page shown first, set from command line
static START_PAGE: OnceLock<StartPage> = OnceLock::new();

/// Get the loaded site content (built-in content if none was loaded)
pub fn get_site_content() -> SiteContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Get the page requested with --page
pub fn get_start_page() -> StartPage {
    START_PAGE.get().copied().unwrap_or_default()
}

/// Which page draft to open on launch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StartPage {
    /// Portfolio with projects grid
    #[default]
    Home,
    /// Timeline draft with the tracing beam
    Journal,
}

/// Folio - personal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - personal portfolio site")]
struct Args {
    /// JSON content file (defaults to <config dir>/folio/content.json if present)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Page to open first
    #[arg(short, long, value_enum, default_value_t = StartPage::Home)]
    page: StartPage,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn default_content_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("folio").join("content.json"))
        .filter(|path| path.is_file())
}

fn load_content(explicit: Option<&Path>) -> anyhow::Result<SiteContent> {
    match explicit.map(Path::to_path_buf).or_else(default_content_path) {
        Some(path) => SiteContent::load(&path)
            .with_context(|| format!("failed to load content from {}", path.display())),
        None => {
            tracing::info!("No content file, using built-in content");
            Ok(SiteContent::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let content = load_content(args.content.as_deref())?;
    let title = format!("{} - Portfolio", content.name);

    let _ = CONTENT.set(content);
    let _ = START_PAGE.set(args.page);

    tracing::info!("Starting '{}' on {:?} page", title, args.page);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
