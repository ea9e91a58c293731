//! Root document component - the complete static HTML page.

use ghost_site::metadata::{MetaTag, PageMetadata};
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;

use crate::styles::SITE_CSS;

/// `<html>` with the SEO head; `children` is the page body.
///
/// Static exports have no wasm bundle, so [`PAGE_SCRIPT`] wires the same
/// interactions onto the server-rendered markup.
#[component]
pub fn SiteDocument(
    /// `lang` attribute, e.g. `en`
    #[prop(into)]
    lang: String,
    metadata: PageMetadata,
    children: Children,
) -> impl IntoView {
    let canonical = metadata.canonical();
    let tags = metadata.meta_tags();

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{metadata.title}</title>
                {tags.into_iter().map(|tag| view! { <MetaTagView tag=tag /> }).collect::<Vec<_>>()}
                <link rel="canonical" href=canonical />
                <link rel="icon" href="/favicon.ico" />
                <style>{SITE_CSS}</style>
            </head>
            <body>
                {children()}
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

#[component]
fn MetaTagView(tag: MetaTag) -> impl IntoView {
    match tag {
        MetaTag::Name { name, content } => view! { <meta name=name content=content /> }.into_any(),
        MetaTag::Property { property, content } => {
            view! { <meta /> }
                .attr("property", property)
                .attr("content", content)
                .into_any()
        }
    }
}

/// Accordions, mobile menu and headline hover for the static page.
pub(crate) const PAGE_SCRIPT: &str = r#"
(() => {
  // 1. Disclosure groups; single-mode groups keep at most one item open
  const setOpen = (btn, open) => {
    btn.setAttribute('aria-expanded', open ? 'true' : 'false');
    const panel = document.getElementById(btn.getAttribute('aria-controls'));
    if (panel) panel.hidden = !open;
    btn.closest('.disclosure-item')?.classList.toggle('open', open);
  };
  document.querySelectorAll('.disclosure').forEach(group => {
    const single = group.dataset.mode === 'single';
    const triggers = group.querySelectorAll('.disclosure-trigger');
    triggers.forEach(btn => {
      btn.addEventListener('click', () => {
        const open = btn.getAttribute('aria-expanded') === 'true';
        if (single && !open) {
          triggers.forEach(other => { if (other !== btn) setOpen(other, false); });
        }
        setOpen(btn, !open);
      });
    });
  });

  // 2. Mobile menu: toggle button flips, any link inside closes
  const toggle = document.querySelector('.nav-toggle');
  const menu = document.getElementById('mobile-menu');
  const setMenu = open => {
    if (!toggle || !menu) return;
    menu.hidden = !open;
    toggle.setAttribute('aria-expanded', open ? 'true' : 'false');
    toggle.setAttribute('aria-label', open ? 'Close menu' : 'Open menu');
  };
  toggle?.addEventListener('click', () => setMenu(menu.hidden));
  menu?.querySelectorAll('a').forEach(a => a.addEventListener('click', () => setMenu(false)));

  // 3. Headline glitch while hovered
  const title = document.querySelector('.hero-title');
  title?.addEventListener('mouseenter', () => title.classList.add('glitch'));
  title?.addEventListener('mouseleave', () => title.classList.remove('glitch'));
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use ghost_site::config::DisclosureConfig;
    use ghost_site::{ExpandMode, SiteConfig, SiteContent};

    use crate::render_home;

    /// Every value of `attr="..."` in `html`.
    fn attr_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
        let needle = format!("{attr}=\"");
        html.match_indices(&needle)
            .filter_map(|(at, _)| {
                let rest = &html[at + needle.len()..];
                rest.find('"').map(|end| &rest[..end])
            })
            .collect()
    }

    fn home() -> String {
        let config = SiteConfig {
            faq: DisclosureConfig {
                mode: ExpandMode::Single,
                default_open: Some("item-0".into()),
            },
            ..SiteConfig::default()
        };
        render_home(&SiteContent::default(), &config, 2025)
    }

    #[test]
    fn script_hooks_exist_in_markup() {
        let html = home();
        for (hook, markup) in [
            ("'.disclosure'", "class=\"disclosure "),
            ("'.disclosure-trigger'", "class=\"disclosure-trigger\""),
            ("'.disclosure-item'", "class=\"disclosure-item"),
            ("'.nav-toggle'", "class=\"nav-toggle\""),
            ("'mobile-menu'", "id=\"mobile-menu\""),
            ("'.hero-title'", "class=\"hero-title"),
        ] {
            assert!(PAGE_SCRIPT.contains(hook), "script lost {hook}");
            assert!(html.contains(markup), "markup lost {markup}");
        }
    }

    #[test]
    fn every_group_declares_a_mode_the_script_knows() {
        let html = home();
        let modes = attr_values(&html, "data-mode");
        let groups = html.matches("class=\"disclosure ").count();
        assert_eq!(modes.len(), groups);
        assert!(modes.iter().all(|m| *m == "single" || *m == "multiple"));
        assert!(modes.contains(&"single"));
        assert!(PAGE_SCRIPT.contains("dataset.mode === 'single'"));
    }

    #[test]
    fn every_trigger_controls_an_existing_panel() {
        let html = home();
        let controlled = attr_values(&html, "aria-controls");
        assert!(controlled.len() > 1);
        for id in controlled {
            assert_eq!(
                html.matches(&format!("id=\"{id}\"")).count(),
                1,
                "aria-controls={id} has no unique target"
            );
        }
        assert!(PAGE_SCRIPT.contains("getAttribute('aria-controls')"));
    }

    #[test]
    fn open_panels_match_expanded_triggers() {
        let html = home();
        let expanded = html.matches("aria-expanded=\"true\"").count();
        let panels = html.matches("class=\"disclosure-panel\"").count();
        let hidden = html
            .split("class=\"disclosure-panel\"")
            .skip(1)
            .filter(|rest| rest[..rest.find('>').unwrap_or(0)].contains("hidden"))
            .count();
        assert_eq!(expanded, 1);
        assert_eq!(panels - hidden, expanded);
    }
}
