//! `/knowledge`, `/knowledge/<id>` and `/knowledge/category/<id>`.

use ghost_site::SiteContent;
use ghost_site::content::{IconKind, KnowledgeArticle, KnowledgeCategory};
use leptos::prelude::*;

use super::knowledge::ArticleCard;
use super::{Icon, SectionHeader, SiteLayout};

const RELATED_ARTICLES: usize = 3;

/// Articles paired with their category display names.
fn with_category_names(
    content: &SiteContent,
    articles: Vec<&KnowledgeArticle>,
) -> Vec<(KnowledgeArticle, String)> {
    articles
        .into_iter()
        .map(|article| {
            let category = content.category_name(&article.category).to_string();
            (article.clone(), category)
        })
        .collect()
}

#[component]
fn ArticleGrid(articles: Vec<(KnowledgeArticle, String)>) -> impl IntoView {
    view! {
        <div class="article-grid">
            {articles
                .into_iter()
                .map(|(article, category)| view! { <ArticleCard article=article category=category /> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Every category with its article count, then every article newest first.
#[component]
pub fn KnowledgeIndexPage(content: SiteContent, year: i32) -> impl IntoView {
    let intro = content.knowledge_intro.clone();
    let categories: Vec<(KnowledgeCategory, usize)> = content
        .categories
        .iter()
        .map(|category| {
            let count = content.articles_in_category(&category.id).len();
            (category.clone(), count)
        })
        .collect();
    let articles = with_category_names(&content, content.recent_articles(content.articles.len()));

    view! {
        <SiteLayout content=content year=year>
            <section id="knowledge" class="knowledge page">
                <div class="container">
                    <SectionHeader intro=intro />
                    <div class="category-grid">
                        {categories
                            .into_iter()
                            .map(|(category, count)| {
                                let href = category.href();
                                view! {
                                    <a href=href class="category-card">
                                        <Icon kind=category.icon size="24" class="accent" />
                                        <h3>{category.name}</h3>
                                        <p>{category.description}</p>
                                        <span class="category-count">
                                            {format!("{count} articles")}
                                        </span>
                                    </a>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <ArticleGrid articles=articles />
                </div>
            </section>
        </SiteLayout>
    }
}

/// One article with breadcrumb, byline, tags and related reading.
#[component]
pub fn ArticlePage(content: SiteContent, article: KnowledgeArticle, year: i32) -> impl IntoView {
    let category = content.category_name(&article.category).to_string();
    let category_href = content
        .category(&article.category)
        .map(KnowledgeCategory::href)
        .unwrap_or_else(|| "/knowledge".into());
    let related = with_category_names(
        &content,
        content.related_articles(&article.id, RELATED_ARTICLES),
    );
    let date = article.display_date();
    let crumb = article.title.clone();
    let badge = category.clone();

    view! {
        <SiteLayout content=content year=year>
            <article class="article page">
                <div class="container container-narrow">
                    <nav class="breadcrumb" aria-label="Breadcrumb">
                        <a href="/knowledge">"Knowledge Base"</a>
                        " / "
                        <a href=category_href>{category}</a>
                        " / "
                        <span>{crumb}</span>
                    </nav>
                    <a href="/knowledge" class="back-link">
                        <Icon kind=IconKind::ArrowLeft size="16" />
                        "Back to Knowledge Base"
                    </a>
                    <span class="tag">{badge}</span>
                    <h1 class="page-title">{article.title}</h1>
                    <p class="page-lead">{article.excerpt}</p>
                    <div class="article-meta">
                        <span>
                            <Icon kind=IconKind::Users size="14" />
                            {article.author}
                        </span>
                        <span>
                            <Icon kind=IconKind::Calendar size="14" />
                            {date}
                        </span>
                        <span>
                            <Icon kind=IconKind::Clock size="14" />
                            {article.read_time}
                        </span>
                    </div>
                    <div class="project-tech">
                        {article
                            .tags
                            .into_iter()
                            .map(|tag| view! { <span class="chip">{tag}</span> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
                {(!related.is_empty())
                    .then(|| {
                        view! {
                            <section class="related">
                                <div class="container">
                                    <h2>"Related Articles"</h2>
                                    <ArticleGrid articles=related />
                                </div>
                            </section>
                        }
                    })}
            </article>
        </SiteLayout>
    }
}

/// All articles filed under one category.
#[component]
pub fn CategoryPage(content: SiteContent, category: KnowledgeCategory, year: i32) -> impl IntoView {
    let articles = with_category_names(&content, content.articles_in_category(&category.id));
    let crumb = category.name.clone();

    view! {
        <SiteLayout content=content year=year>
            <section class="category page">
                <div class="container">
                    <nav class="breadcrumb" aria-label="Breadcrumb">
                        <a href="/knowledge">"Knowledge Base"</a>
                        " / "
                        <span>{crumb}</span>
                    </nav>
                    <a href="/knowledge" class="back-link">
                        <Icon kind=IconKind::ArrowLeft size="16" />
                        "All Categories"
                    </a>
                    <h1 class="page-title">
                        <Icon kind=category.icon size="32" class="accent" />
                        {category.name}
                    </h1>
                    <p class="page-lead">{category.description}</p>
                    {if articles.is_empty() {
                        view! { <p class="empty">"No articles in this category yet."</p> }.into_any()
                    } else {
                        view! { <ArticleGrid articles=articles /> }.into_any()
                    }}
                </div>
            </section>
        </SiteLayout>
    }
}
