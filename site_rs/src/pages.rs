//! Every page the site publishes.
//!
//! The home page carries most sections in place; only the portfolio and
//! the knowledge base have pages of their own. The sitemap and the static
//! exporter both walk [`Page::all`], so a listed URL always has a file.
//!
//! ```rust
//! use std::path::Path;
//! use ghost_site::pages::{Page, output_file};
//!
//! let page = Page::Project("real-estate-platform".into());
//! assert_eq!(page.path(), "/portfolio/real-estate-platform");
//! assert_eq!(page.output_file(), Path::new("portfolio/real-estate-platform/index.html"));
//! assert_eq!(output_file("/#contact"), Path::new("index.html"));
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::content::SiteContent;
use crate::sitemap::ChangeFrequency;

/// File name every page directory is served from.
pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Page {
    Home,
    Portfolio,
    /// Case study for one portfolio project
    Project(String),
    Knowledge,
    Article(String),
    Category(String),
}

impl Page {
    /// Home, the two listings, then one page per project, article and
    /// category, in content order.
    pub fn all(content: &SiteContent) -> Vec<Page> {
        let mut pages = vec![Page::Home, Page::Portfolio, Page::Knowledge];
        pages.extend(content.projects.iter().map(|p| Page::Project(p.id.clone())));
        pages.extend(content.articles.iter().map(|a| Page::Article(a.id.clone())));
        pages.extend(content.categories.iter().map(|c| Page::Category(c.id.clone())));
        pages
    }

    /// Site-relative URL path.
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".into(),
            Page::Portfolio => "/portfolio".into(),
            Page::Project(id) => format!("/portfolio/{id}"),
            Page::Knowledge => "/knowledge".into(),
            Page::Article(id) => format!("/knowledge/{id}"),
            Page::Category(id) => format!("/knowledge/category/{id}"),
        }
    }

    /// Where the exporter writes this page, relative to the output root.
    pub fn output_file(&self) -> PathBuf {
        output_file(&self.path())
    }

    /// Sitemap hints: how often the page changes and how much it matters.
    pub fn crawl_hint(&self) -> (ChangeFrequency, f32) {
        match self {
            Page::Home => (ChangeFrequency::Weekly, 1.0),
            Page::Portfolio => (ChangeFrequency::Weekly, 0.9),
            Page::Knowledge => (ChangeFrequency::Weekly, 0.8),
            Page::Project(_) | Page::Article(_) => (ChangeFrequency::Monthly, 0.7),
            Page::Category(_) => (ChangeFrequency::Monthly, 0.6),
        }
    }
}

/// Map a site-relative URL path to the file that serves it.
///
/// `/` is `index.html`, `/a/b` is `a/b/index.html`. Query strings and
/// fragments are ignored.
pub fn output_file(path: &str) -> PathBuf {
    let path = path.split(['#', '?']).next().unwrap_or_default();
    let mut file: PathBuf = path.split('/').filter(|s| !s.is_empty()).collect();
    file.push(INDEX_FILE);
    file
}
