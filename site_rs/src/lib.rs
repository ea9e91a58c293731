//! # ghost-site
//!
//! Core model of the Ghost Protocol website: the typed content every page
//! section renders, the disclosure (accordion) state machine, the mobile
//! navigation toggle, and the metadata search engines and social previews
//! read.
//!
//! Nothing here touches the DOM. The `ghost-render` crate turns these types
//! into Leptos views, either server-side into static HTML or in the browser.
//!
//! ## Disclosure groups
//!
//! ```rust
//! use ghost_site::disclosure::{DisclosureEntry, DisclosureGroup, ExpandMode};
//!
//! let entries = vec![
//!     DisclosureEntry::new("How long does a website take?", "Usually four to six weeks."),
//!     DisclosureEntry::new("Do we own the code?", "Yes, everything we build is yours."),
//! ];
//! let mut faq = DisclosureGroup::from_entries(entries, ExpandMode::Single, Some("item-0")).unwrap();
//!
//! let transition = faq.toggle("item-1").unwrap();
//! assert_eq!(transition.collapsed.as_deref(), Some("item-0"));
//! assert!(faq.is_expanded("item-1"));
//! assert!(!faq.is_expanded("item-0"));
//! ```
//!
//! ## Site content
//!
//! ```rust
//! use ghost_site::content::SiteContent;
//!
//! let content = SiteContent::default();
//! assert_eq!(content.stats.len(), 4);
//! assert!(content.home_articles().len() <= 4);
//! ```

#![doc(html_root_url = "https://docs.rs/ghost-site/0.3.2")]

// ============================================================================
// Interactive state
// ============================================================================

/// Accordion state machine with single and multiple expansion modes.
pub mod disclosure;

/// Open/closed state of the mobile navigation menu.
pub mod nav;

// ============================================================================
// Static content and metadata
// ============================================================================

/// Site configuration loaded from `site.toml`.
pub mod config;

/// Typed content for every page section plus knowledge-base lookups.
pub mod content;

/// Error types shared by the crate.
pub mod error;

/// Page metadata: title, description, Open Graph, Twitter card, robots.
pub mod metadata;

/// The pages the site publishes and the files that serve them.
pub mod pages;

/// `sitemap.xml` generation.
pub mod sitemap;

pub use config::SiteConfig;
pub use content::SiteContent;
pub use disclosure::{DisclosureGroup, ExpandMode};
pub use error::{ConfigError, DisclosureError};
pub use metadata::PageMetadata;
pub use nav::NavState;
pub use pages::Page;
