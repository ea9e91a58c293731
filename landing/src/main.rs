// Ghost Protocol website, browser build.
// Built with trunk; the static export comes from `ghost-render build`.

use chrono::Datelike;
use ghost_render::components::HomePage;
use ghost_render::styles::SITE_CSS;
use ghost_site::{SiteConfig, SiteContent};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let year = chrono::Local::now().year();
    view! {
        <style>{SITE_CSS}</style>
        <HomePage content=SiteContent::default() config=SiteConfig::default() year=year />
    }
}
