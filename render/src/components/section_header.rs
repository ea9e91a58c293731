use ghost_site::content::SectionIntro;
use leptos::prelude::*;

/// Eyebrow, heading and optional lead paragraph above a section.
#[component]
pub fn SectionHeader(intro: SectionIntro) -> impl IntoView {
    view! {
        <div class="section-header">
            <p class="section-eyebrow">{intro.eyebrow}</p>
            <h2 class="section-title">{intro.title}</h2>
            {intro
                .description
                .map(|description| view! { <p class="section-description">{description}</p> })}
        </div>
    }
}
