//! Typed site content.
//!
//! Every section of the home page renders one of these records. The types
//! are:
//!
//! - **Serializable** - dumped as JSON by `ghost-render content`
//! - **Clone-friendly** - components take owned copies as props
//! - **Default-able** - `SiteContent::default()` is the live site copy
//!
//! # Example
//!
//! ```rust
//! use ghost_site::content::SiteContent;
//!
//! let content = SiteContent::default();
//! let project = content.project("real-estate-platform").unwrap();
//! assert_eq!(project.category, "Real Estate");
//! assert_eq!(project.highlight_features().len(), 3);
//! ```

mod data;
mod knowledge;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::disclosure::DisclosureEntry;
use crate::pages::Page;

/// Icons the sections reference; the renderer maps each to SVG path data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    ArrowLeft,
    ArrowRight,
    Award,
    BookOpen,
    Calendar,
    CaretDown,
    CheckCircle,
    CheckSquare,
    Clock,
    Close,
    Code,
    Globe,
    Layers,
    Mail,
    MapPin,
    Menu,
    Monitor,
    Paintbrush,
    Phone,
    Settings,
    Shield,
    Target,
    TrendingUp,
    Users,
    Wrench,
    Zap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub name: String,
    pub href: String,
}

impl Link {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    /// Links leaving the site open in a new tab.
    pub fn is_external(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Eyebrow, heading and lead paragraph shown above a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionIntro {
    pub eyebrow: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub logo: Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub icon: IconKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    pub badge: String,
    pub title: String,
    /// Second headline line, drawn with the accent gradient
    pub title_accent: String,
    pub description: String,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    pub highlights: Vec<Highlight>,
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    pub intro: SectionIntro,
    pub paragraphs: Vec<String>,
    pub cta: Link,
    pub image: Image,
}

/// Icon + title + blurb; used by the features and services grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub icon: IconKind,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image: String,
    pub features: Vec<String>,
    pub technologies: Vec<String>,
    pub client: String,
    pub year: String,
    pub challenge: String,
    pub solution: String,
    pub results: Vec<String>,
}

impl PortfolioProject {
    /// Features shown on the card; the case study page lists them all.
    pub fn highlight_features(&self) -> &[String] {
        &self.features[..self.features.len().min(3)]
    }

    /// Challenge, solution and results as accordion records.
    pub fn detail_entries(&self) -> Vec<DisclosureEntry> {
        vec![
            DisclosureEntry::new("The Challenge", self.challenge.clone()),
            DisclosureEntry::new("Our Solution", self.solution.clone()),
            DisclosureEntry::new("Results", self.results.join("\n")),
        ]
    }

    pub fn href(&self) -> String {
        Page::Project(self.id.clone()).path()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: IconKind,
}

impl KnowledgeCategory {
    pub fn href(&self) -> String {
        Page::Category(self.id.clone()).path()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeArticle {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    /// Id of a [`KnowledgeCategory`]
    pub category: String,
    pub author: String,
    pub date: NaiveDate,
    pub read_time: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl KnowledgeArticle {
    /// `Jan 15, 2025`
    pub fn display_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    pub fn href(&self) -> String {
        Page::Article(self.id.clone()).path()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub address: String,
    pub email: String,
    /// Human-formatted, e.g. `+94 77 106 2770`
    pub phone: String,
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with the spaces stripped.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{digits}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterContent {
    pub blurb: String,
    pub services: Vec<Link>,
    pub company: Vec<Link>,
    pub resources: Vec<Link>,
    pub location: String,
    pub credits: String,
}

/// Everything the home page shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    pub brand: Brand,
    pub nav: Vec<Link>,
    pub nav_cta: Link,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub features_intro: SectionIntro,
    pub features: Vec<Card>,
    pub services_intro: SectionIntro,
    pub services: Vec<Card>,
    pub portfolio_intro: SectionIntro,
    pub projects: Vec<PortfolioProject>,
    pub stats_intro: SectionIntro,
    pub stats: Vec<Stat>,
    pub knowledge_intro: SectionIntro,
    pub categories: Vec<KnowledgeCategory>,
    pub articles: Vec<KnowledgeArticle>,
    pub faq_intro: SectionIntro,
    pub faq: Vec<DisclosureEntry>,
    pub contact_intro: SectionIntro,
    pub contact: ContactInfo,
    pub footer: FooterContent,
}

impl Default for SiteContent {
    fn default() -> Self {
        data::ghost_protocol()
    }
}
