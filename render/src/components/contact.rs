use ghost_site::content::{ContactInfo, IconKind, SectionIntro};
use leptos::prelude::*;

use super::{Icon, SectionHeader};

#[component]
pub fn Contact(intro: SectionIntro, contact: ContactInfo) -> impl IntoView {
    let mailto = contact.mailto();
    let tel = contact.tel();

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <SectionHeader intro=intro />
                <div class="contact-grid">
                    <div class="contact-card">
                        <Icon kind=IconKind::MapPin size="24" class="accent" />
                        <h3>"Visit Us"</h3>
                        <p>{contact.address}</p>
                    </div>
                    <div class="contact-card">
                        <Icon kind=IconKind::Mail size="24" class="accent" />
                        <h3>"Email"</h3>
                        <a href=mailto>{contact.email}</a>
                    </div>
                    <div class="contact-card">
                        <Icon kind=IconKind::Phone size="24" class="accent" />
                        <h3>"Call"</h3>
                        <a href=tel>{contact.phone}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
