//! # ghost-render
//!
//! Leptos components for the Ghost Protocol website.
//!
//! The same component tree serves two targets:
//!
//! - **`ssr`** (default) - renders each page to a static HTML document,
//!   exports a deployable directory and ships the `ghost-render` CLI
//! - **`csr`** - mounted in the browser by the `ghost-landing` crate, where
//!   the disclosure groups, the mobile menu and the hero hover effect are live
//!
//! ## Quick Start
//!
//! ```rust
//! # #[cfg(feature = "ssr")] {
//! use ghost_render::render_home;
//! use ghost_site::{SiteConfig, SiteContent};
//!
//! let html = render_home(&SiteContent::default(), &SiteConfig::default(), 2025);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Ghost Protocol"));
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`components`] - one Leptos component per page section
//! - [`styles`] - the site stylesheet
//! - `export` - writes every page plus `sitemap.xml` and `robots.txt` (`ssr`)
//!
//! Interactive state lives in `ghost-site`; components only hold it in
//! signals and redraw from it.

#![doc(html_root_url = "https://docs.rs/ghost-render/0.3.2")]

pub mod components;
pub mod styles;

#[cfg(feature = "ssr")]
pub mod export;

#[cfg(feature = "ssr")]
pub use export::{ExportError, ExportSummary, export_site};

#[cfg(feature = "ssr")]
use components::{
    ArticlePage, CategoryPage, HomePage, KnowledgeIndexPage, PortfolioIndexPage, ProjectPage,
    SiteDocument,
};
#[cfg(feature = "ssr")]
use ghost_site::{Page, PageMetadata, SiteConfig, SiteContent};
#[cfg(feature = "ssr")]
use leptos::prelude::*;
#[cfg(feature = "ssr")]
use leptos::tachys::view::RenderHtml;

/// Render the complete home page, `<!DOCTYPE html>` included.
///
/// `year` is printed in the footer copyright line.
#[cfg(feature = "ssr")]
pub fn render_home(content: &SiteContent, config: &SiteConfig, year: i32) -> String {
    render_document(config, PageMetadata::for_home(config), || {
        view! { <HomePage content=content.clone() config=config.clone() year=year /> }.into_any()
    })
}

/// Render any published page. `None` when the page names a project,
/// article or category the content does not have.
#[cfg(feature = "ssr")]
pub fn render_page(
    page: &Page,
    content: &SiteContent,
    config: &SiteConfig,
    year: i32,
) -> Option<String> {
    let html = match page {
        Page::Home => render_home(content, config, year),
        Page::Portfolio => render_document(config, PageMetadata::for_portfolio(config), || {
            view! { <PortfolioIndexPage content=content.clone() config=config.clone() year=year /> }
                .into_any()
        }),
        Page::Project(id) => {
            let project = content.project(id)?.clone();
            render_document(config, PageMetadata::for_project(config, &project), || {
                view! { <ProjectPage content=content.clone() project=project year=year /> }
                    .into_any()
            })
        }
        Page::Knowledge => render_document(config, PageMetadata::for_knowledge(config), || {
            view! { <KnowledgeIndexPage content=content.clone() year=year /> }.into_any()
        }),
        Page::Article(id) => {
            let article = content.article(id)?.clone();
            render_document(config, PageMetadata::for_article(config, &article), || {
                view! { <ArticlePage content=content.clone() article=article year=year /> }
                    .into_any()
            })
        }
        Page::Category(id) => {
            let category = content.category(id)?.clone();
            render_document(config, PageMetadata::for_category(config, &category), || {
                view! { <CategoryPage content=content.clone() category=category year=year /> }
                    .into_any()
            })
        }
    };
    Some(html)
}

/// Wrap a page body in [`SiteDocument`] under a fresh reactive owner.
#[cfg(feature = "ssr")]
fn render_document(
    config: &SiteConfig,
    metadata: PageMetadata,
    body: impl FnOnce() -> AnyView,
) -> String {
    let lang = config
        .site
        .locale
        .split('_')
        .next()
        .unwrap_or("en")
        .to_string();
    let html = Owner::new().with(|| {
        let body = body();
        view! { <SiteDocument lang=lang metadata=metadata>{body}</SiteDocument> }.to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}
