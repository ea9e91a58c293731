use ghost_site::config::DisclosureConfig;
use ghost_site::content::{IconKind, PortfolioProject, SectionIntro};
use leptos::prelude::*;

use super::{DisclosureList, Icon, SectionHeader};

/// Project cards, each with its own challenge / solution / results accordion.
#[component]
pub fn Portfolio(
    intro: SectionIntro,
    projects: Vec<PortfolioProject>,
    details: DisclosureConfig,
) -> impl IntoView {
    view! {
        <section id="portfolio" class="portfolio">
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
    }
}

#[component]
pub(super) fn ProjectCard(project: PortfolioProject, details: DisclosureConfig) -> impl IntoView {
    let group = details.build(project.detail_entries());
    let id_prefix = format!("project-{}", project.id);
    let href = project.href();
    let features = project.highlight_features().to_vec();
    let alt = project.title.clone();

    view! {
        <article class="project-card">
            <div class="project-image">
                <img src=project.image alt=alt loading="lazy" />
                <span class="project-category">{project.category}</span>
            </div>
            <div class="project-body">
                <p class="project-meta">{project.client}" · "{project.year}</p>
                <h3 class="project-title">{project.title}</h3>
                <p class="project-description">{project.description}</p>
                <ul class="project-features">
                    {features
                        .into_iter()
                        .map(|feature| view! { <li>{feature}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <div class="project-tech">
                    {project
                        .technologies
                        .into_iter()
                        .map(|tech| view! { <span class="tag">{tech}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <DisclosureList group=group id_prefix=id_prefix class="project-details" />
                <a href=href class="project-link">
                    "View Case Study"
                    <Icon kind=IconKind::ArrowRight size="16" />
                </a>
            </div>
        </article>
    }
}
