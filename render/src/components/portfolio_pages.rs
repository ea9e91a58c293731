//! `/portfolio` and `/portfolio/<id>`.

use ghost_site::content::{IconKind, PortfolioProject};
use ghost_site::{SiteConfig, SiteContent};
use leptos::prelude::*;

use super::portfolio::ProjectCard;
use super::{Icon, SectionHeader, SiteLayout};

const RELATED_PROJECTS: usize = 2;

/// Every project card, accordions included.
#[component]
pub fn PortfolioIndexPage(content: SiteContent, config: SiteConfig, year: i32) -> impl IntoView {
    let intro = content.portfolio_intro.clone();
    let projects = content.projects.clone();
    let details = config.portfolio;

    view! {
        <SiteLayout content=content year=year>
            <section id="portfolio" class="portfolio page">
                <div class="container">
                    <SectionHeader intro=intro />
                    <div class="portfolio-grid">
                        {projects
                            .into_iter()
                            .map(|project| view! { <ProjectCard project=project details=details.clone() /> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </section>
        </SiteLayout>
    }
}

/// Case study: challenge, solution and results with a details sidebar.
#[component]
pub fn ProjectPage(content: SiteContent, project: PortfolioProject, year: i32) -> impl IntoView {
    let related: Vec<PortfolioProject> = content
        .related_projects(&project.id, RELATED_PROJECTS)
        .into_iter()
        .cloned()
        .collect();
    let alt = project.title.clone();
    let industry = project.category.clone();

    view! {
        <SiteLayout content=content year=year>
            <article class="case-study page">
                <div class="container">
                    <a href="/portfolio" class="back-link">
                        <Icon kind=IconKind::ArrowLeft size="16" />
                        "Back to Portfolio"
                    </a>
                    <img src=project.image alt=alt class="case-study-image" />
                    <div class="case-study-grid">
                        <div class="case-study-body">
                            <span class="tag">{project.category}</span>
                            <h1 class="page-title">{project.title}</h1>
                            <p class="page-lead">{project.description}</p>

                            <h2>"The Challenge"</h2>
                            <p>{project.challenge}</p>
                            <h2>"Our Solution"</h2>
                            <p>{project.solution}</p>
                            <h2>"Results"</h2>
                            <ul class="check-list">
                                {project
                                    .results
                                    .into_iter()
                                    .map(|result| view! { <li>{result}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                        <aside class="case-study-sidebar">
                            <div class="sidebar-card">
                                <h3>"Project Details"</h3>
                                <dl>
                                    <dt>"Client"</dt>
                                    <dd>{project.client}</dd>
                                    <dt>"Year"</dt>
                                    <dd>{project.year}</dd>
                                    <dt>"Industry"</dt>
                                    <dd>{industry}</dd>
                                </dl>
                            </div>
                            <div class="sidebar-card">
                                <h3>"Key Features"</h3>
                                <ul>
                                    {project
                                        .features
                                        .into_iter()
                                        .map(|feature| view! { <li>{feature}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                            <div class="sidebar-card">
                                <h3>"Technologies"</h3>
                                <div class="project-tech">
                                    {project
                                        .technologies
                                        .into_iter()
                                        .map(|tech| view! { <span class="tag">{tech}</span> })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                            <a href="/#contact" class="btn btn-primary">"Start Your Project"</a>
                        </aside>
                    </div>
                    {(!related.is_empty())
                        .then(|| {
                            view! {
                                <section class="related">
                                    <h2>"Related Projects"</h2>
                                    <ul class="related-list">
                                        {related
                                            .into_iter()
                                            .map(|other| {
                                                let href = other.href();
                                                view! {
                                                    <li>
                                                        <a href=href>{other.title}</a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </section>
                            }
                        })}
                </div>
            </article>
        </SiteLayout>
    }
}
