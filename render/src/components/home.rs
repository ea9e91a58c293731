use ghost_site::{SiteConfig, SiteContent};
use leptos::prelude::*;

use super::{
    About, Contact, Faq, Features, Hero, Knowledge, Portfolio, Services, SiteLayout, Stats,
};

/// The whole home page body, in display order.
#[component]
pub fn HomePage(content: SiteContent, config: SiteConfig, year: i32) -> impl IntoView {
    let faq = config.faq.build(content.faq.clone());
    tracing::debug!(
        items = faq.len(),
        expanded = ?faq.expanded_ids(),
        "rendering home page"
    );

    let shell = content.clone();

    view! {
        <SiteLayout content=shell year=year>
            <Hero hero=content.hero.clone() />
            <About about=content.about.clone() />
            <Features intro=content.features_intro.clone() features=content.features.clone() />
            <Services intro=content.services_intro.clone() services=content.services.clone() />
            <Portfolio
                intro=content.portfolio_intro.clone()
                projects=content.projects.clone()
                details=config.portfolio.clone()
            />
            <Stats intro=content.stats_intro.clone() stats=content.stats.clone() />
            <Knowledge content=content.clone() />
            <Faq intro=content.faq_intro.clone() group=faq />
            <Contact intro=content.contact_intro.clone() contact=content.contact.clone() />
        </SiteLayout>
    }
}
