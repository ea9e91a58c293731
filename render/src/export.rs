//! Static site export.
//!
//! Writes a directory any static host can serve:
//!
//! ```text
//! out/
//! ├── index.html                      (home page, SEO head, inline script)
//! ├── portfolio/index.html
//! ├── portfolio/<id>/index.html
//! ├── knowledge/index.html
//! ├── knowledge/<id>/index.html
//! ├── knowledge/category/<id>/index.html
//! ├── sitemap.xml
//! └── robots.txt
//! ```
//!
//! Pages come from [`Page::all`], the same list the sitemap is built from.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use ghost_site::error::DisclosureError;
use ghost_site::pages::Page;
use ghost_site::sitemap::Sitemap;
use ghost_site::{PageMetadata, SiteConfig, SiteContent};
use thiserror::Error;

use crate::render_page;

pub use ghost_site::pages::INDEX_FILE;
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const ROBOTS_FILE: &str = "robots.txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A page names a project, article or category the content lacks.
    #[error("no content for page {path}")]
    MissingPage { path: String },
    /// A configured accordion default does not exist in the content.
    #[error("{section}: {source}")]
    Disclosure {
        section: String,
        #[source]
        source: DisclosureError,
    },
}

/// What [`export_site`] wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
    pub pages: usize,
    pub sitemap_entries: usize,
}

/// Reject configurations the lenient renderer would silently collapse.
pub fn validate(content: &SiteContent, config: &SiteConfig) -> Result<(), ExportError> {
    config
        .faq
        .try_build(content.faq.clone())
        .map_err(|source| ExportError::Disclosure {
            section: "faq".into(),
            source,
        })?;
    for project in &content.projects {
        config
            .portfolio
            .try_build(project.detail_entries())
            .map_err(|source| ExportError::Disclosure {
                section: format!("portfolio/{}", project.id),
                source,
            })?;
    }
    Ok(())
}

/// Render and write the site into `out`, creating it if needed.
///
/// `today` stamps the sitemap and the footer copyright year.
pub fn export_site(
    out: &Path,
    content: &SiteContent,
    config: &SiteConfig,
    today: NaiveDate,
) -> Result<ExportSummary, ExportError> {
    validate(content, config)?;

    fs::create_dir_all(out).map_err(|source| ExportError::Io {
        path: out.to_path_buf(),
        source,
    })?;

    let year = today.year();
    let pages = Page::all(content);
    let sitemap = Sitemap::for_site(config.base_url(), content, today);
    let metadata = PageMetadata::for_home(config);

    let mut files = Vec::with_capacity(pages.len() + 2);
    for page in &pages {
        let html = render_page(page, content, config, year).ok_or_else(|| {
            ExportError::MissingPage {
                path: page.path(),
            }
        })?;
        files.push(write(out, &page.output_file(), html)?);
    }
    files.push(write(out, Path::new(SITEMAP_FILE), sitemap.to_xml())?);
    files.push(write(out, Path::new(ROBOTS_FILE), metadata.robots_txt())?);

    Ok(ExportSummary {
        files,
        pages: pages.len(),
        sitemap_entries: sitemap.len(),
    })
}

/// Write `body` to `out/relative`, creating parent directories.
fn write(out: &Path, relative: &Path, body: String) -> Result<PathBuf, ExportError> {
    let path = out.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ExportError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&path, body).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "wrote");
    Ok(path)
}
