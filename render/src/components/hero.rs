use ghost_site::content::{HeroContent, IconKind};
use leptos::prelude::*;

use super::Icon;

#[component]
pub fn Hero(hero: HeroContent) -> impl IntoView {
    // Glitch effect on the headline while the pointer is over it.
    let hovered = RwSignal::new(false);

    view! {
        <section id="home" class="hero">
            <div class="container hero-grid">
                <div class="hero-copy">
                    <span class="hero-badge">{hero.badge}</span>
                    <h1
                        class="hero-title"
                        class:glitch=move || hovered.get()
                        on:mouseenter=move |_| hovered.set(true)
                        on:mouseleave=move |_| hovered.set(false)
                    >
                        {hero.title}
                        <span class="hero-title-accent">{hero.title_accent}</span>
                    </h1>
                    <p class="hero-description">{hero.description}</p>
                    <div class="hero-actions">
                        <a href=hero.primary_cta.href class="btn btn-primary">
                            {hero.primary_cta.name}
                            <Icon kind=IconKind::ArrowRight size="18" />
                        </a>
                        <a href=hero.secondary_cta.href class="btn btn-outline">
                            {hero.secondary_cta.name}
                        </a>
                    </div>
                    <ul class="hero-highlights">
                        {hero
                            .highlights
                            .into_iter()
                            .map(|highlight| {
                                view! {
                                    <li>
                                        <Icon kind=highlight.icon size="18" class="accent" />
                                        <span>{highlight.label}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="hero-visual">
                    <img src=hero.image.src alt=hero.image.alt class="hero-image" />
                </div>
            </div>
        </section>
    }
}
