//! # ghost-render
//!
//! Builds the static Ghost Protocol website and prints its SEO artifacts.
//!
//! ## Usage
//!
//! ```bash
//! # Write every page, sitemap.xml and robots.txt into ./dist
//! ghost-render build --out dist
//!
//! # Preview deployment with its own origin
//! ghost-render build --out dist --base-url https://preview.ghostprotocol.lk
//!
//! # Inspect
//! ghost-render sitemap
//! ghost-render metadata
//! ghost-render content
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use ghost_render::export_site;
use ghost_site::sitemap::Sitemap;
use ghost_site::{PageMetadata, SiteConfig, SiteContent};
use tracing::{debug, info};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "ghost-render")]
#[command(about = "Static site builder for the Ghost Protocol website")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Site config file (default: ./site.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the site into a directory
    Build {
        /// Output directory
        #[arg(long, short, default_value = "dist")]
        out: PathBuf,

        /// Date stamped into the sitemap and footer (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print sitemap.xml to stdout
    Sitemap {
        /// Date stamped into every entry (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print home page metadata as JSON
    Metadata,
    /// Print the site content as JSON
    Content,
}

// ============================================================================
// Commands
// ============================================================================

/// An explicit `--config` must load; the implicit `./site.toml` may be absent.
fn load_config(args: &Args) -> Result<SiteConfig> {
    let config = match &args.config {
        Some(path) => SiteConfig::from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::load(Path::new(".")),
    };
    Ok(match &args.base_url {
        Some(url) => config.with_base_url(url.clone()),
        None => config,
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    let content = SiteContent::default();
    debug!(base_url = config.base_url(), "config loaded");

    match args.command {
        Command::Build { out, date } => {
            let date = date.unwrap_or_else(today);
            let summary = export_site(&out, &content, &config, date)
                .with_context(|| format!("building site into {}", out.display()))?;
            info!(
                files = summary.files.len(),
                pages = summary.pages,
                sitemap_entries = summary.sitemap_entries,
                year = date.year(),
                "site built"
            );
            for file in &summary.files {
                println!("{}", file.display());
            }
        }
        Command::Sitemap { date } => {
            let sitemap = Sitemap::for_site(config.base_url(), &content, date.unwrap_or_else(today));
            print!("{}", sitemap.to_xml());
        }
        Command::Metadata => {
            let metadata = PageMetadata::for_home(&config);
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Command::Content => {
            println!("{}", serde_json::to_string_pretty(&content)?);
        }
    }
    Ok(())
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[ghost-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
