//! Icon card grids: "why choose us" and the service list.

use ghost_site::content::{Card, IconKind, SectionIntro};
use leptos::prelude::*;

use super::{Icon, SectionHeader};

#[component]
pub fn Features(intro: SectionIntro, features: Vec<Card>) -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <SectionHeader intro=intro />
                <CardGrid cards=features class="features-grid" />
            </div>
        </section>
    }
}

#[component]
pub fn Services(intro: SectionIntro, services: Vec<Card>) -> impl IntoView {
    view! {
        <section id="services" class="services">
            <div class="container">
                <SectionHeader intro=intro />
                <CardGrid cards=services class="services-grid" />
            </div>
        </section>
    }
}

#[component]
fn CardGrid(cards: Vec<Card>, class: &'static str) -> impl IntoView {
    view! {
        <div class=format!("card-grid {class}")>
            {cards
                .into_iter()
                .map(|card| {
                    view! {
                        <FeatureCard
                            icon=card.icon
                            title=card.title
                            description=card.description
                        />
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn FeatureCard(
    icon: IconKind,
    title: String,
    description: String,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">
                <Icon kind=icon size="24" />
            </div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </div>
    }
}
