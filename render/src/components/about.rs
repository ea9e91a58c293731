use ghost_site::content::{AboutContent, IconKind};
use leptos::prelude::*;

use super::Icon;

#[component]
pub fn About(about: AboutContent) -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container about-grid">
                <div class="about-visual">
                    <img src=about.image.src alt=about.image.alt class="about-image" />
                </div>
                <div class="about-copy">
                    <p class="section-eyebrow">{about.intro.eyebrow}</p>
                    <h2 class="section-title">{about.intro.title}</h2>
                    {about
                        .paragraphs
                        .into_iter()
                        .map(|paragraph| view! { <p class="about-text">{paragraph}</p> })
                        .collect::<Vec<_>>()}
                    <a href=about.cta.href class="btn btn-outline">
                        {about.cta.name}
                        <Icon kind=IconKind::ArrowRight size="18" />
                    </a>
                </div>
            </div>
        </section>
    }
}
