use ghost_site::content::{Brand, FooterContent, Link};
use leptos::prelude::*;

#[component]
pub fn Footer(brand: Brand, footer: FooterContent, year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <span class="brand-name">{brand.name.clone()}</span>
                    <p>{footer.blurb}</p>
                    <p class="footer-location">{footer.location}</p>
                </div>
                <LinkColumn title="Services" links=footer.services />
                <LinkColumn title="Company" links=footer.company />
                <LinkColumn title="Resources" links=footer.resources />
            </div>
            <div class="container footer-bottom">
                <p>{format!("© {year} {}. All rights reserved.", brand.name)}</p>
                <p class="footer-credits">{footer.credits}</p>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: Vec<Link>) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4>{title}</h4>
            <ul>
                {links
                    .into_iter()
                    .map(|link| {
                        let external = link.is_external();
                        view! {
                            <li>
                                <a
                                    href=link.href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                >
                                    {link.name}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}
