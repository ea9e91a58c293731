use ghost_site::NavState;
use ghost_site::content::{Brand, IconKind, Link};
use leptos::prelude::*;

use super::Icon;

/// Fixed top bar: logo, desktop links, call to action and the mobile menu.
#[component]
pub fn Header(brand: Brand, links: Vec<Link>, cta: Link) -> impl IntoView {
    let nav = RwSignal::new(NavState::default());
    let is_open = move || nav.with(|state| state.is_open());
    let close = move |_| nav.update(NavState::close);

    let mobile_links = links.clone();
    let mobile_cta = cta.clone();

    view! {
        <header class="site-header">
            <div class="container header-inner">
                <a href="/" class="brand">
                    <img src=brand.logo.src alt=brand.logo.alt class="brand-logo" width="40" height="40" />
                    <span class="brand-name">{brand.name}</span>
                </a>

                <nav class="nav-desktop" aria-label="Main">
                    {links
                        .into_iter()
                        .map(|link| view! { <a href=link.href class="nav-link">{link.name}</a> })
                        .collect::<Vec<_>>()}
                </nav>

                <a href=cta.href class="btn btn-primary nav-cta">{cta.name}</a>

                <button
                    type="button"
                    class="nav-toggle"
                    aria-controls="mobile-menu"
                    aria-expanded=move || is_open().to_string()
                    aria-label=move || nav.with(|state| state.toggle_label())
                    on:click=move |_| nav.update(NavState::toggle)
                >
                    <Show
                        when=is_open
                        fallback=|| view! { <Icon kind=IconKind::Menu size="24" /> }
                    >
                        <Icon kind=IconKind::Close size="24" />
                    </Show>
                </button>
            </div>

            <nav id="mobile-menu" class="nav-mobile" aria-label="Mobile" hidden=move || !is_open()>
                {mobile_links
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class="nav-mobile-link" on:click=close>
                                {link.name}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <a href=mobile_cta.href class="btn btn-primary" on:click=close>
                    {mobile_cta.name}
                </a>
            </nav>
        </header>
    }
}
