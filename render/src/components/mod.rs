//! Leptos UI components for the website.
//!
//! One component per page section, composed by [`HomePage`] and the
//! portfolio and knowledge pages. Each takes owned `ghost-site` content as
//! props, so the tree renders the same way on the server and in the browser.
//!
//! # Component Hierarchy
//!
//! ```text
//! SiteDocument (ssr only: <html>, SEO head, inline script)
//! └── HomePage / PortfolioIndexPage / ProjectPage /
//!     KnowledgeIndexPage / ArticlePage / CategoryPage
//!     └── SiteLayout
//!         ├── Header (NavState signal)
//!         ├── <main> page sections
//!         └── Footer
//!
//! HomePage sections:
//!     ├── Hero (hover signal)
//!     ├── About
//!     ├── Features / Services
//!     │   └── CardGrid
//!     ├── Portfolio
//!     │   └── ProjectCard
//!     │       └── DisclosureList (multiple mode)
//!     ├── Stats
//!     ├── Knowledge
//!     │   └── ArticleCard
//!     ├── Faq
//!     │   └── DisclosureList (single mode)
//!     └── Contact
//! ```

mod about;
mod contact;
mod disclosure;
#[cfg(feature = "ssr")]
mod document;
mod faq;
mod features;
mod footer;
mod header;
mod hero;
mod home;
mod icons;
mod knowledge;
mod knowledge_pages;
mod layout;
mod portfolio;
mod portfolio_pages;
mod section_header;
mod stats;

pub use about::About;
pub use contact::Contact;
pub use disclosure::DisclosureList;
#[cfg(feature = "ssr")]
pub use document::SiteDocument;
pub use faq::Faq;
pub use features::{Features, Services};
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use home::HomePage;
pub use icons::{Icon, icon_path};
pub use knowledge::Knowledge;
pub use knowledge_pages::{ArticlePage, CategoryPage, KnowledgeIndexPage};
pub use layout::SiteLayout;
pub use portfolio::Portfolio;
pub use portfolio_pages::{PortfolioIndexPage, ProjectPage};
pub use section_header::SectionHeader;
pub use stats::Stats;
