//! Server-rendered home page checks.

use ghost_render::render_home;
use ghost_site::config::DisclosureConfig;
use ghost_site::disclosure::DisclosureEntry;
use ghost_site::{ExpandMode, SiteConfig, SiteContent};
use pretty_assertions::assert_eq;

fn render(content: &SiteContent, config: &SiteConfig) -> String {
    render_home(content, config, 2025)
}

#[test]
fn sections_appear_in_page_order() {
    let html = render(&SiteContent::default(), &SiteConfig::default());
    let ids = [
        "home",
        "about",
        "features",
        "services",
        "portfolio",
        "stats",
        "knowledge",
        "faq",
        "contact",
    ];
    let mut positions: Vec<(usize, &str)> = ids
        .iter()
        .map(|id| {
            let needle = format!("<section id=\"{id}\"");
            (html.find(&needle).unwrap_or_else(|| panic!("no {id}")), *id)
        })
        .collect();
    positions.sort();
    let ordered: Vec<&str> = positions.into_iter().map(|(_, id)| id).collect();
    assert_eq!(ordered, ids.to_vec());
}

#[test]
fn knowledge_shows_home_selection_only() {
    let content = SiteContent::default();
    let html = render(&content, &SiteConfig::default());

    let shown = content.home_articles();
    for article in &shown {
        assert!(html.contains(&article.href()), "{} missing", article.id);
    }
    for article in content
        .articles
        .iter()
        .filter(|a| !shown.iter().any(|s| s.id == a.id))
    {
        assert!(!html.contains(&format!("href=\"{}\"", article.href())));
    }
}

#[test]
fn portfolio_default_opens_one_item_per_project() {
    let config = SiteConfig {
        portfolio: DisclosureConfig {
            mode: ExpandMode::Multiple,
            default_open: Some("item-0".into()),
        },
        ..SiteConfig::default()
    };
    let content = SiteContent::default();
    let html = render(&content, &config);
    assert_eq!(
        html.matches("aria-expanded=\"true\"").count(),
        content.projects.len()
    );
}

#[test]
fn invalid_default_renders_collapsed() {
    let config = SiteConfig {
        faq: DisclosureConfig {
            mode: ExpandMode::Single,
            default_open: Some("item-404".into()),
        },
        ..SiteConfig::default()
    };
    let html = render(&SiteContent::default(), &config);
    assert!(html.contains("id=\"faq\""));
    assert_eq!(html.matches("aria-expanded=\"true\"").count(), 0);
}

#[test]
fn multi_line_answers_become_paragraphs() {
    let content = SiteContent {
        faq: vec![DisclosureEntry::new("Steps?", "Plan\nBuild\nShip")],
        ..SiteContent::default()
    };
    let html = render(&content, &SiteConfig::default());
    for line in ["<p>Plan</p>", "<p>Build</p>", "<p>Ship</p>"] {
        assert!(html.contains(line), "{line}");
    }
}
