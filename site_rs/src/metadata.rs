//! Search and social metadata for every published page.
//!
//! [`PageMetadata`] is plain data; [`PageMetadata::meta_tags`] flattens it
//! into the `<meta>` tags the renderer writes into `<head>`.

use serde::{Deserialize, Serialize};

use crate::config::SiteConfig;
use crate::content::{KnowledgeArticle, KnowledgeCategory, PortfolioProject};
use crate::pages::Page;

const HOME_TITLE_SUFFIX: &str = "IT Solutions & Web Development";
const HOME_DESCRIPTION: &str = "Explore Ghost Protocol's innovative IT solutions, web development, \
     creative design, and digital services from Sri Lanka.";
const PORTFOLIO_DESCRIPTION: &str = "View our portfolio of professional websites and applications \
     across web development, app development, and business solutions.";
const KNOWLEDGE_DESCRIPTION: &str = "Guides on enterprise security, web development, digital \
     marketing, and technology infrastructure from the Ghost Protocol team.";
const GENERATOR: &str = "ghost-render";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub generator: String,
    pub base_url: String,
    /// Site-relative path of the page, `/` for home
    pub path: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    /// `og:type`
    pub kind: String,
    pub locale: String,
    pub url: String,
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleBot {
    pub index: bool,
    pub follow: bool,
    /// `-1` means no limit
    pub max_snippet: i32,
    pub max_image_preview: ImagePreview,
    pub max_video_preview: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePreview {
    None,
    Standard,
    Large,
}

impl ImagePreview {
    pub fn as_str(self) -> &'static str {
        match self {
            ImagePreview::None => "none",
            ImagePreview::Standard => "standard",
            ImagePreview::Large => "large",
        }
    }
}

/// One `<meta>` tag. `name` for plain/twitter tags, `property` for Open Graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    Name { name: String, content: String },
    Property { property: String, content: String },
}

impl MetaTag {
    fn name(name: &str, content: impl Into<String>) -> Self {
        MetaTag::Name {
            name: name.into(),
            content: content.into(),
        }
    }

    fn property(property: &str, content: impl Into<String>) -> Self {
        MetaTag::Property {
            property: property.into(),
            content: content.into(),
        }
    }

    /// The `name` or `property` attribute value.
    pub fn key(&self) -> &str {
        match self {
            MetaTag::Name { name, .. } => name,
            MetaTag::Property { property, .. } => property,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            MetaTag::Name { content, .. } | MetaTag::Property { content, .. } => content,
        }
    }
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            google_bot: GoogleBot {
                index: true,
                follow: true,
                max_snippet: -1,
                max_image_preview: ImagePreview::Large,
                max_video_preview: -1,
            },
        }
    }
}

impl Robots {
    /// `index, follow` / `noindex, nofollow`
    pub fn directive(&self) -> String {
        directive(self.index, self.follow)
    }

    pub fn googlebot_directive(&self) -> String {
        let bot = &self.google_bot;
        format!(
            "{}, max-snippet:{}, max-image-preview:{}, max-video-preview:{}",
            directive(bot.index, bot.follow),
            bot.max_snippet,
            bot.max_image_preview.as_str(),
            bot.max_video_preview,
        )
    }
}

fn directive(index: bool, follow: bool) -> String {
    format!(
        "{}, {}",
        if index { "index" } else { "noindex" },
        if follow { "follow" } else { "nofollow" }
    )
}

impl PageMetadata {
    /// Metadata for the home page.
    pub fn for_home(config: &SiteConfig) -> Self {
        Self::build(
            config,
            &Page::Home,
            format!("{} | {HOME_TITLE_SUFFIX}", config.site.name),
            HOME_DESCRIPTION.into(),
        )
    }

    pub fn for_portfolio(config: &SiteConfig) -> Self {
        Self::build(
            config,
            &Page::Portfolio,
            format!("Portfolio | {}", config.site.name),
            PORTFOLIO_DESCRIPTION.into(),
        )
    }

    pub fn for_knowledge(config: &SiteConfig) -> Self {
        Self::build(
            config,
            &Page::Knowledge,
            format!("Knowledge Base | {}", config.site.name),
            KNOWLEDGE_DESCRIPTION.into(),
        )
    }

    pub fn for_project(config: &SiteConfig, project: &PortfolioProject) -> Self {
        Self::build(
            config,
            &Page::Project(project.id.clone()),
            format!("{} | {}", project.title, config.site.name),
            project.description.clone(),
        )
    }

    /// Articles are `og:type` `article`.
    pub fn for_article(config: &SiteConfig, article: &KnowledgeArticle) -> Self {
        let mut meta = Self::build(
            config,
            &Page::Article(article.id.clone()),
            format!("{} | {} Knowledge Base", article.title, config.site.name),
            article.excerpt.clone(),
        );
        meta.open_graph.kind = "article".into();
        meta
    }

    pub fn for_category(config: &SiteConfig, category: &KnowledgeCategory) -> Self {
        Self::build(
            config,
            &Page::Category(category.id.clone()),
            format!("{} | {} Knowledge Base", category.name, config.site.name),
            category.description.clone(),
        )
    }

    fn build(config: &SiteConfig, page: &Page, title: String, description: String) -> Self {
        let base_url = config.base_url().to_string();
        let path = page.path();
        Self {
            open_graph: OpenGraph {
                title: title.clone(),
                description: description.clone(),
                kind: "website".into(),
                locale: config.site.locale.clone(),
                url: format!("{base_url}{path}"),
                site_name: config.site.name.clone(),
            },
            twitter: TwitterCard {
                card: "summary_large_image".into(),
                title: title.clone(),
                description: description.clone(),
            },
            robots: Robots::default(),
            generator: GENERATOR.into(),
            title,
            description,
            base_url,
            path,
        }
    }

    /// Absolute URL of the page; the home page keeps its trailing slash.
    pub fn canonical(&self) -> String {
        format!("{}{}", self.base_url, self.path)
    }

    /// Tags in head order.
    pub fn meta_tags(&self) -> Vec<MetaTag> {
        let og = &self.open_graph;
        vec![
            MetaTag::name("description", &self.description),
            MetaTag::name("generator", &self.generator),
            MetaTag::name("robots", self.robots.directive()),
            MetaTag::name("googlebot", self.robots.googlebot_directive()),
            MetaTag::property("og:title", &og.title),
            MetaTag::property("og:description", &og.description),
            MetaTag::property("og:type", &og.kind),
            MetaTag::property("og:locale", &og.locale),
            MetaTag::property("og:url", &og.url),
            MetaTag::property("og:site_name", &og.site_name),
            MetaTag::name("twitter:card", &self.twitter.card),
            MetaTag::name("twitter:title", &self.twitter.title),
            MetaTag::name("twitter:description", &self.twitter.description),
        ]
    }

    /// `robots.txt` allowing everything and pointing at the sitemap.
    pub fn robots_txt(&self) -> String {
        format!(
            "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
            self.base_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SiteContent;
    use pretty_assertions::assert_eq;

    fn tag<'a>(meta: &'a [MetaTag], key: &str) -> &'a str {
        meta.iter()
            .find(|tag| tag.key() == key)
            .map(MetaTag::content)
            .unwrap_or_else(|| panic!("missing meta tag {key}"))
    }

    #[test]
    fn home_metadata_uses_site_name() {
        let meta = PageMetadata::for_home(&SiteConfig::default());
        assert_eq!(meta.title, "Ghost Protocol | IT Solutions & Web Development");
        assert_eq!(meta.open_graph.site_name, "Ghost Protocol");
        assert_eq!(meta.open_graph.url, "https://ghostprotocol.lk/");
        assert_eq!(meta.canonical(), "https://ghostprotocol.lk/");
    }

    #[test]
    fn detail_pages_carry_their_own_url_and_copy() {
        let config = SiteConfig::default();
        let content = SiteContent::default();

        let project = &content.projects[0];
        let meta = PageMetadata::for_project(&config, project);
        assert_eq!(meta.title, format!("{} | Ghost Protocol", project.title));
        assert_eq!(meta.description, project.description);
        assert_eq!(
            meta.canonical(),
            format!("https://ghostprotocol.lk{}", project.href())
        );
        assert_eq!(meta.open_graph.url, meta.canonical());
        assert_eq!(meta.open_graph.kind, "website");

        let article = &content.articles[0];
        let meta = PageMetadata::for_article(&config, article);
        assert_eq!(meta.open_graph.kind, "article");
        assert!(meta.title.ends_with("Ghost Protocol Knowledge Base"));
        assert_eq!(meta.description, article.excerpt);

        let meta = PageMetadata::for_category(&config, &content.categories[0]);
        assert!(meta.canonical().contains("/knowledge/category/"));

        assert_eq!(
            PageMetadata::for_portfolio(&config).canonical(),
            "https://ghostprotocol.lk/portfolio"
        );
        assert_eq!(
            PageMetadata::for_knowledge(&config).title,
            "Knowledge Base | Ghost Protocol"
        );
    }

    #[test]
    fn robots_directives_match_search_policy() {
        let robots = Robots::default();
        assert_eq!(robots.directive(), "index, follow");
        assert_eq!(
            robots.googlebot_directive(),
            "index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1"
        );
    }

    #[test]
    fn noindex_directive() {
        let robots = Robots {
            index: false,
            follow: false,
            ..Robots::default()
        };
        assert_eq!(robots.directive(), "noindex, nofollow");
    }

    #[test]
    fn meta_tags_cover_search_and_social() {
        let meta = PageMetadata::for_home(&SiteConfig::default());
        let tags = meta.meta_tags();
        assert_eq!(tag(&tags, "robots"), "index, follow");
        assert_eq!(tag(&tags, "og:type"), "website");
        assert_eq!(tag(&tags, "og:locale"), "en_US");
        assert_eq!(tag(&tags, "twitter:card"), "summary_large_image");
        assert_eq!(tag(&tags, "generator"), "ghost-render");
        assert!(tags
            .iter()
            .filter(|t| t.key().starts_with("og:"))
            .all(|t| matches!(t, MetaTag::Property { .. })));
    }

    #[test]
    fn base_url_override_flows_everywhere() {
        let config = SiteConfig::default().with_base_url("https://staging.example.lk/");
        let meta = PageMetadata::for_home(&config);
        assert_eq!(meta.open_graph.url, "https://staging.example.lk/");
        assert_eq!(
            meta.robots_txt(),
            "User-agent: *\nAllow: /\n\nSitemap: https://staging.example.lk/sitemap.xml\n"
        );
    }

    #[test]
    fn metadata_serializes_to_json() {
        let meta = PageMetadata::for_home(&SiteConfig::default());
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["robots"]["google_bot"]["max_image_preview"], "large");
        assert_eq!(json["open_graph"]["kind"], "website");
    }
}
