use ghost_site::content::{SectionIntro, Stat};
use leptos::prelude::*;

use super::SectionHeader;

#[component]
pub fn Stats(intro: SectionIntro, stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section id="stats" class="stats">
            <div class="container">
                <SectionHeader intro=intro />
                <div class="stats-grid">
                    {stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="stat">
                                    <div class="stat-value">{stat.value}</div>
                                    <div class="stat-label">{stat.label}</div>
                                    {stat
                                        .description
                                        .map(|text| view! { <p class="stat-description">{text}</p> })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
