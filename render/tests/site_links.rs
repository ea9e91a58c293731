//! Every link in the exported site lands on a file the export wrote.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use ghost_render::export_site;
use ghost_site::pages::output_file;
use ghost_site::sitemap::Sitemap;
use ghost_site::{SiteConfig, SiteContent};
use tempfile::TempDir;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
}

/// `href` values of every `<a>` element.
fn anchor_hrefs(html: &str) -> Vec<&str> {
    html.split("<a ")
        .skip(1)
        .filter_map(|tag| {
            let tag = &tag[..tag.find('>')?];
            let start = tag.find("href=\"")? + "href=\"".len();
            let end = tag[start..].find('"')?;
            Some(&tag[start..start + end])
        })
        .collect()
}

fn is_internal(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

fn export(root: &Path) -> Vec<std::path::PathBuf> {
    export_site(root, &SiteContent::default(), &SiteConfig::default(), today())
        .unwrap()
        .files
}

#[test]
fn internal_links_resolve_to_exported_pages() {
    let temp = TempDir::new().expect("temp dir");
    let files = export(temp.path());

    let mut checked = 0;
    for file in files.iter().filter(|f| f.extension().is_some_and(|e| e == "html")) {
        let html = fs::read_to_string(file).unwrap();
        for href in anchor_hrefs(&html).into_iter().filter(|h| is_internal(h)) {
            let target = temp.path().join(output_file(href));
            assert!(
                target.exists(),
                "{} links to {href}, which was not exported",
                file.display()
            );

            if let Some((_, fragment)) = href.split_once('#') {
                let page = fs::read_to_string(&target).unwrap();
                assert!(
                    page.contains(&format!("id=\"{fragment}\"")),
                    "{} links to {href}, which has no #{fragment}",
                    file.display()
                );
            }
            checked += 1;
        }
    }
    assert!(checked > 50, "only {checked} links checked");
}

#[test]
fn nav_sections_are_anchors_on_the_home_page() {
    let content = SiteContent::default();
    for link in content.nav.iter().chain([&content.nav_cta]) {
        let file = output_file(&link.href);
        if link.href.contains('#') {
            assert_eq!(file, Path::new("index.html"), "{}", link.href);
        }
    }
}

#[test]
fn sitemap_lists_exactly_the_exported_pages() {
    let temp = TempDir::new().expect("temp dir");
    let files = export(temp.path());
    let config = SiteConfig::default();

    let sitemap = Sitemap::for_site(config.base_url(), &SiteContent::default(), today());
    let mut listed: Vec<_> = sitemap
        .entries
        .iter()
        .map(|entry| {
            let path = entry.loc.strip_prefix(config.base_url()).unwrap();
            temp.path().join(output_file(path))
        })
        .collect();
    listed.sort();

    let mut pages: Vec<_> = files
        .into_iter()
        .filter(|f| f.file_name().is_some_and(|n| n == "index.html"))
        .collect();
    pages.sort();

    assert_eq!(listed, pages);
}
