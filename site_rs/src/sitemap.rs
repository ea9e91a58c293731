use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::content::SiteContent;
use crate::pages::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub last_modified: NaiveDate,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

impl Sitemap {
    /// One entry per published page, in [`Page::all`] order.
    /// Every entry is stamped with `today`.
    pub fn for_site(base_url: &str, content: &SiteContent, today: NaiveDate) -> Self {
        let base = base_url.trim_end_matches('/');
        let entries: Vec<_> = Page::all(content)
            .into_iter()
            .map(|page| {
                let (change_frequency, priority) = page.crawl_hint();
                let loc = match page {
                    Page::Home => base.to_string(),
                    _ => format!("{base}{}", page.path()),
                };
                SitemapEntry {
                    loc,
                    last_modified: today,
                    change_frequency,
                    priority,
                }
            })
            .collect();

        tracing::debug!(entries = entries.len(), "built sitemap");
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for entry in &self.entries {
            xml.push_str("  <url>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&entry.loc)));
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                entry.last_modified.format("%Y-%m-%d")
            ));
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                entry.change_frequency.as_str()
            ));
            xml.push_str(&format!("    <priority>{:.1}</priority>\n", entry.priority));
            xml.push_str("  </url>\n");
        }
        xml.push_str("</urlset>\n");
        xml
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    #[test]
    fn lists_pages_projects_and_articles() {
        let content = SiteContent::default();
        let sitemap = Sitemap::for_site("https://ghostprotocol.lk/", &content, today());

        assert_eq!(sitemap.len(), Page::all(&content).len());
        let home = &sitemap.entries[0];
        assert_eq!(home.loc, "https://ghostprotocol.lk");
        assert_eq!(home.change_frequency, ChangeFrequency::Weekly);
        assert_eq!(home.priority, 1.0);

        let project = &content.projects[0];
        let entry = sitemap
            .entries
            .iter()
            .find(|e| e.loc.ends_with(&project.href()))
            .unwrap();
        assert_eq!(entry.change_frequency, ChangeFrequency::Monthly);
        assert_eq!(entry.priority, 0.7);
    }

    #[test]
    fn lists_only_published_pages() {
        let content = SiteContent::default();
        let sitemap = Sitemap::for_site("https://ghostprotocol.lk", &content, today());
        let published: Vec<String> = Page::all(&content)
            .iter()
            .map(|page| page.path())
            .collect();

        for entry in &sitemap.entries {
            let path = entry.loc.trim_start_matches("https://ghostprotocol.lk");
            let path = if path.is_empty() { "/" } else { path };
            assert!(published.iter().any(|p| p == path), "{} is not a page", entry.loc);
        }
        for section in ["/services", "/about", "/contact"] {
            assert!(!published.iter().any(|p| p == section));
        }
    }

    #[test]
    fn every_entry_uses_build_date() {
        let sitemap = Sitemap::for_site("https://ghostprotocol.lk", &SiteContent::default(), today());
        assert!(sitemap.entries.iter().all(|e| e.last_modified == today()));
    }

    #[test]
    fn xml_has_one_url_per_entry() {
        let sitemap = Sitemap::for_site("https://ghostprotocol.lk", &SiteContent::default(), today());
        let xml = sitemap.to_xml();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert_eq!(xml.matches("<url>").count(), sitemap.len());
        assert!(xml.contains("<loc>https://ghostprotocol.lk/knowledge</loc>"));
        assert!(xml.contains("<lastmod>2025-02-01</lastmod>"));
        assert!(xml.contains("<priority>0.9</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn xml_escapes_locations() {
        let sitemap = Sitemap {
            entries: vec![SitemapEntry {
                loc: "https://example.lk/?a=1&b=<2>".into(),
                last_modified: today(),
                change_frequency: ChangeFrequency::Daily,
                priority: 0.5,
            }],
        };
        let xml = sitemap.to_xml();
        assert!(xml.contains("<loc>https://example.lk/?a=1&amp;b=&lt;2&gt;</loc>"));
        assert!(!xml.contains("&b="));
    }

    #[test]
    fn empty_sitemap_is_still_valid() {
        let xml = Sitemap::default().to_xml();
        assert!(Sitemap::default().is_empty());
        assert!(xml.contains("<urlset"));
        assert!(!xml.contains("<url>"));
    }
}
