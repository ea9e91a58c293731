use ghost_site::content::{
    IconKind, KnowledgeArticle, KnowledgeCategory, SectionIntro, SiteContent,
};
use leptos::prelude::*;

use super::{Icon, SectionHeader};

/// Knowledge base teaser: category chips plus the home article selection.
#[component]
pub fn Knowledge(content: SiteContent) -> impl IntoView {
    let intro: SectionIntro = content.knowledge_intro.clone();
    let categories: Vec<KnowledgeCategory> = content.home_categories().to_vec();
    let articles: Vec<(KnowledgeArticle, String)> = content
        .home_articles()
        .into_iter()
        .map(|article| {
            let category = content.category_name(&article.category).to_string();
            (article.clone(), category)
        })
        .collect();

    view! {
        <section id="knowledge" class="knowledge">
            <div class="container">
                <SectionHeader intro=intro />
                <div class="category-chips">
                    {categories
                        .into_iter()
                        .map(|category| {
                            let href = category.href();
                            view! {
                                <a href=href class="chip" title=category.description>
                                    <Icon kind=category.icon size="16" />
                                    {category.name}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="article-grid">
                    {articles
                        .into_iter()
                        .map(|(article, category)| view! { <ArticleCard article=article category=category /> })
                        .collect::<Vec<_>>()}
                </div>
                <a href="/knowledge" class="btn btn-outline">
                    "Browse the Knowledge Base"
                    <Icon kind=IconKind::BookOpen size="18" />
                </a>
            </div>
        </section>
    }
}

#[component]
pub(super) fn ArticleCard(article: KnowledgeArticle, category: String) -> impl IntoView {
    let href = article.href();
    let date = article.display_date();
    let alt = article.title.clone();

    view! {
        <article class="article-card" class:featured=article.featured>
            {article
                .image
                .map(|src| view! { <img src=src alt=alt loading="lazy" /> })}
            <div class="article-body">
                <span class="article-category">{category}</span>
                <h3 class="article-title">
                    <a href=href>{article.title}</a>
                </h3>
                <p class="article-excerpt">{article.excerpt}</p>
                <div class="article-meta">
                    <span>
                        <Icon kind=IconKind::Calendar size="14" />
                        {date}
                    </span>
                    <span>
                        <Icon kind=IconKind::Clock size="14" />
                        {article.read_time}
                    </span>
                </div>
            </div>
        </article>
    }
}
