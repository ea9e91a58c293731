use ghost_site::SiteContent;
use leptos::prelude::*;

use super::{Footer, Header};

/// Header, `<main>` and footer shared by every page.
#[component]
pub fn SiteLayout(content: SiteContent, year: i32, children: Children) -> impl IntoView {
    view! {
        <Header brand=content.brand.clone() links=content.nav.clone() cta=content.nav_cta.clone() />
        <main>{children()}</main>
        <Footer brand=content.brand footer=content.footer year=year />
    }
}
