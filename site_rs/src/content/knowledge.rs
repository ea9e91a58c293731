//! Lookups over projects and the knowledge base.

use std::cmp::Reverse;

use super::{KnowledgeArticle, KnowledgeCategory, PortfolioProject, SiteContent};

/// Articles shown in the home page knowledge section.
pub const HOME_ARTICLE_LIMIT: usize = 4;
/// Category chips shown above them.
pub const HOME_CATEGORY_LIMIT: usize = 5;

const HOME_FEATURED: usize = 2;
const HOME_RECENT: usize = 2;

impl SiteContent {
    pub fn project(&self, id: &str) -> Option<&PortfolioProject> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Up to `count` other projects in the same category as `id`.
    pub fn related_projects(&self, id: &str, count: usize) -> Vec<&PortfolioProject> {
        let Some(current) = self.project(id) else {
            return Vec::new();
        };
        self.projects
            .iter()
            .filter(|project| project.id != id && project.category == current.category)
            .take(count)
            .collect()
    }

    pub fn article(&self, id: &str) -> Option<&KnowledgeArticle> {
        self.articles.iter().find(|article| article.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&KnowledgeCategory> {
        self.categories.iter().find(|category| category.id == id)
    }

    /// Display name of a category; unknown ids are shown as-is.
    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.category(id).map_or(id, |category| category.name.as_str())
    }

    pub fn articles_in_category(&self, category: &str) -> Vec<&KnowledgeArticle> {
        self.articles
            .iter()
            .filter(|article| article.category == category)
            .collect()
    }

    /// Up to `count` other articles from the same category as `id`.
    pub fn related_articles(&self, id: &str, count: usize) -> Vec<&KnowledgeArticle> {
        let Some(current) = self.article(id) else {
            return Vec::new();
        };
        self.articles
            .iter()
            .filter(|article| article.id != id && article.category == current.category)
            .take(count)
            .collect()
    }

    /// The first `count` articles flagged as featured, in content order.
    pub fn featured_articles(&self, count: usize) -> Vec<&KnowledgeArticle> {
        self.articles
            .iter()
            .filter(|article| article.featured)
            .take(count)
            .collect()
    }

    /// Articles newest first; equal dates keep content order.
    pub fn recent_articles(&self, count: usize) -> Vec<&KnowledgeArticle> {
        let mut sorted: Vec<_> = self.articles.iter().collect();
        sorted.sort_by_key(|article| Reverse(article.date));
        sorted.truncate(count);
        sorted
    }

    /// Home page selection: two featured articles, then the two most recent
    /// ones not already picked, capped at [`HOME_ARTICLE_LIMIT`].
    pub fn home_articles(&self) -> Vec<&KnowledgeArticle> {
        let mut picked = self.featured_articles(HOME_FEATURED);
        for article in self.recent_articles(HOME_RECENT) {
            if !picked.iter().any(|p| p.id == article.id) {
                picked.push(article);
            }
        }
        picked.truncate(HOME_ARTICLE_LIMIT);
        picked
    }

    pub fn home_categories(&self) -> &[KnowledgeCategory] {
        &self.categories[..self.categories.len().min(HOME_CATEGORY_LIMIT)]
    }
}

#[cfg(test)]
mod tests {
    use super::super::IconKind;
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn article(id: &str, category: &str, date: (i32, u32, u32), featured: bool) -> KnowledgeArticle {
        KnowledgeArticle {
            id: id.into(),
            title: format!("Title {id}"),
            excerpt: String::new(),
            category: category.into(),
            author: "Team".into(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            read_time: "5 min read".into(),
            image: None,
            tags: vec![],
            featured,
        }
    }

    fn with_articles(articles: Vec<KnowledgeArticle>) -> SiteContent {
        SiteContent {
            articles,
            ..SiteContent::default()
        }
    }

    fn ids(articles: &[&KnowledgeArticle]) -> Vec<String> {
        articles.iter().map(|a| a.id.clone()).collect()
    }

    #[test]
    fn home_articles_put_featured_first_then_recent() {
        let content = with_articles(vec![
            article("old-featured", "security", (2024, 1, 1), true),
            article("newest", "security", (2025, 3, 1), false),
            article("second-newest", "security", (2025, 2, 1), false),
            article("third-newest", "security", (2025, 1, 1), false),
        ]);
        assert_eq!(
            ids(&content.home_articles()),
            vec!["old-featured", "newest", "second-newest"]
        );
    }

    #[test]
    fn home_articles_skip_recent_duplicates_of_featured() {
        let content = with_articles(vec![
            article("a", "security", (2025, 3, 1), true),
            article("b", "security", (2025, 2, 1), true),
            article("c", "security", (2025, 1, 1), false),
        ]);
        assert_eq!(ids(&content.home_articles()), vec!["a", "b"]);
    }

    #[test]
    fn home_articles_never_exceed_limit() {
        let content = with_articles(vec![
            article("f1", "security", (2020, 1, 1), true),
            article("f2", "security", (2020, 1, 2), true),
            article("f3", "security", (2020, 1, 3), true),
            article("r1", "security", (2025, 1, 1), false),
            article("r2", "security", (2025, 1, 2), false),
        ]);
        let picked = content.home_articles();
        assert_eq!(picked.len(), HOME_ARTICLE_LIMIT);
        assert_eq!(ids(&picked), vec!["f1", "f2", "r2", "r1"]);
    }

    #[test]
    fn home_articles_without_featured_are_just_recent() {
        let content = with_articles(vec![
            article("a", "security", (2024, 1, 1), false),
            article("b", "security", (2025, 1, 1), false),
            article("c", "security", (2023, 1, 1), false),
        ]);
        assert_eq!(ids(&content.home_articles()), vec!["b", "a"]);
    }

    #[test]
    fn related_articles_share_category_and_exclude_self() {
        let content = with_articles(vec![
            article("a", "security", (2025, 1, 1), false),
            article("b", "security", (2025, 1, 2), false),
            article("c", "web-development", (2025, 1, 3), false),
            article("d", "security", (2025, 1, 4), false),
        ]);
        assert_eq!(ids(&content.related_articles("a", 3)), vec!["b", "d"]);
        assert_eq!(ids(&content.related_articles("a", 1)), vec!["b"]);
        assert!(content.related_articles("missing", 3).is_empty());
    }

    #[test]
    fn related_projects_share_category() {
        let mut content = SiteContent::default();
        let mut twin = content.projects[0].clone();
        twin.id = "twin".into();
        content.projects.push(twin);

        let first = content.projects[0].id.clone();
        let related = content.related_projects(&first, 2);
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, "twin");
        assert!(content.related_projects("missing", 2).is_empty());
    }

    #[test]
    fn category_name_falls_back_to_id() {
        let content = SiteContent {
            categories: vec![KnowledgeCategory {
                id: "security".into(),
                name: "Security".into(),
                description: String::new(),
                icon: IconKind::Shield,
            }],
            ..SiteContent::default()
        };
        assert_eq!(content.category_name("security"), "Security");
        assert_eq!(content.category_name("cooking"), "cooking");
    }

    #[test]
    fn home_categories_are_capped() {
        let content = SiteContent::default();
        assert!(content.categories.len() > HOME_CATEGORY_LIMIT);
        assert_eq!(content.home_categories().len(), HOME_CATEGORY_LIMIT);
    }

    #[test]
    fn articles_in_category_filters_by_id() {
        let content = SiteContent::default();
        let security = content.articles_in_category("security");
        assert!(!security.is_empty());
        assert!(security.iter().all(|a| a.category == "security"));
    }
}
