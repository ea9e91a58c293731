use ghost_site::DisclosureGroup;
use ghost_site::content::SectionIntro;
use leptos::prelude::*;

use super::{DisclosureList, SectionHeader};

#[component]
pub fn Faq(intro: SectionIntro, group: DisclosureGroup) -> impl IntoView {
    view! {
        <section id="faq" class="faq">
            <div class="container container-narrow">
                <SectionHeader intro=intro />
                <DisclosureList group=group id_prefix="faq" />
            </div>
        </section>
    }
}
