//! CSS for the website.
//!
//! Inlined into the static document by `SiteDocument` and mounted as a
//! `<style>` element by the browser build.
//!
//! ```rust
//! use ghost_render::styles::SITE_CSS;
//!
//! assert!(SITE_CSS.contains(".disclosure-panel"));
//! ```

/// Complete stylesheet - dark theme with an electric-blue accent.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #05070d;
    --bg-raised: #0c111c;
    --bg-card: #111827;
    --text: #e5e7eb;
    --text-dim: #9ca3af;
    --border: rgba(148, 163, 184, 0.15);
    --accent: #3b82f6;
    --accent-strong: #60a5fa;
    --accent-glow: rgba(59, 130, 246, 0.35);
    --font-sans: 'Inter', system-ui, -apple-system, sans-serif;
    --container-max: 1200px;
    --radius: 12px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    margin: 0;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    max-width: 100%;
    display: block;
}

/* Layout */
.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.container-narrow {
    max-width: 800px;
}

section {
    padding: 96px 0;
    border-bottom: 1px solid var(--border);
}

.section-header {
    text-align: center;
    max-width: 720px;
    margin: 0 auto 56px;
}

.section-eyebrow {
    color: var(--accent-strong);
    text-transform: uppercase;
    letter-spacing: 0.12em;
    font-size: 13px;
    font-weight: 600;
}

.section-title {
    font-size: clamp(28px, 4vw, 44px);
    line-height: 1.15;
    margin: 8px 0 16px;
}

.section-description {
    color: var(--text-dim);
}

.accent {
    color: var(--accent);
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 24px;
    border-radius: 999px;
    font-weight: 600;
    transition: background 0.2s, box-shadow 0.2s;
}

.btn-primary {
    background: var(--accent);
    color: #fff;
}

.btn-primary:hover {
    box-shadow: 0 0 24px var(--accent-glow);
}

.btn-outline {
    border: 1px solid var(--border);
}

.btn-outline:hover {
    border-color: var(--accent);
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    background: rgba(5, 7, 13, 0.85);
    backdrop-filter: blur(12px);
    border-bottom: 1px solid var(--border);
}

.header-inner {
    display: flex;
    align-items: center;
    gap: 32px;
    height: 72px;
}

.brand {
    display: flex;
    align-items: center;
    gap: 12px;
    font-weight: 700;
}

.brand-logo {
    border-radius: 8px;
}

.nav-desktop {
    display: flex;
    gap: 24px;
    margin-left: auto;
}

.nav-link {
    color: var(--text-dim);
}

.nav-link:hover {
    color: var(--text);
}

.nav-toggle {
    display: none;
    background: none;
    border: 0;
    color: var(--text);
    cursor: pointer;
}

.nav-mobile {
    display: flex;
    flex-direction: column;
    gap: 16px;
    padding: 16px 24px 24px;
    border-top: 1px solid var(--border);
}

.nav-mobile[hidden] {
    display: none;
}

@media (max-width: 900px) {
    .nav-desktop, .nav-cta {
        display: none;
    }
    .nav-toggle {
        display: block;
        margin-left: auto;
    }
}

@media (min-width: 901px) {
    .nav-mobile {
        display: none;
    }
}

/* Hero */
.hero-grid, .about-grid {
    display: grid;
    grid-template-columns: 1.2fr 1fr;
    gap: 48px;
    align-items: center;
}

.hero-badge {
    display: inline-block;
    padding: 6px 14px;
    border: 1px solid var(--border);
    border-radius: 999px;
    font-size: 13px;
    color: var(--accent-strong);
}

.hero-title {
    font-size: clamp(40px, 6vw, 68px);
    line-height: 1.05;
    margin: 24px 0;
}

.hero-title-accent {
    display: block;
    background: linear-gradient(90deg, var(--accent), var(--accent-strong));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-title.glitch {
    animation: glitch 0.3s steps(2) infinite;
}

@keyframes glitch {
    0% { text-shadow: 2px 0 #ef4444, -2px 0 var(--accent); }
    50% { text-shadow: -2px 0 #ef4444, 2px 0 var(--accent); }
    100% { text-shadow: 2px 0 #ef4444, -2px 0 var(--accent); }
}

.hero-description, .about-text {
    color: var(--text-dim);
    font-size: 18px;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
    margin: 32px 0;
}

.hero-highlights {
    display: flex;
    flex-wrap: wrap;
    gap: 24px;
    list-style: none;
    padding: 0;
}

.hero-highlights li {
    display: flex;
    align-items: center;
    gap: 8px;
}

@media (max-width: 900px) {
    .hero-grid, .about-grid {
        grid-template-columns: 1fr;
    }
}

/* Cards */
.card-grid, .portfolio-grid, .article-grid, .contact-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
    gap: 24px;
}

.feature-card, .project-card, .article-card, .contact-card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    overflow: hidden;
}

.feature-card, .contact-card {
    padding: 28px;
}

.feature-card:hover, .project-card:hover, .article-card:hover {
    border-color: var(--accent);
}

.feature-icon {
    display: inline-flex;
    padding: 12px;
    border-radius: 10px;
    background: var(--accent-glow);
    color: var(--accent-strong);
}

.feature-description, .project-description, .article-excerpt {
    color: var(--text-dim);
}

/* Portfolio */
.project-image {
    position: relative;
}

.project-category {
    position: absolute;
    top: 12px;
    left: 12px;
    padding: 4px 10px;
    border-radius: 999px;
    background: var(--accent);
    font-size: 12px;
}

.project-body, .article-body {
    padding: 24px;
}

.project-meta {
    color: var(--text-dim);
    font-size: 13px;
}

.project-tech {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-bottom: 16px;
}

.tag, .chip {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    padding: 4px 12px;
    border: 1px solid var(--border);
    border-radius: 999px;
    font-size: 13px;
}

.project-link {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    margin-top: 16px;
    color: var(--accent-strong);
}

/* Disclosure */
.disclosure {
    display: flex;
    flex-direction: column;
    gap: 8px;
}

.disclosure-item {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--bg-raised);
}

.disclosure-item.open {
    border-color: var(--accent);
}

.disclosure-heading {
    margin: 0;
    font-size: 16px;
}

.disclosure-trigger {
    width: 100%;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 16px;
    padding: 16px 20px;
    background: none;
    border: 0;
    color: var(--text);
    font: inherit;
    font-weight: 600;
    text-align: left;
    cursor: pointer;
}

.disclosure-caret {
    transition: transform 0.2s;
}

.disclosure-item.open .disclosure-caret {
    transform: rotate(180deg);
}

.disclosure-panel {
    padding: 0 20px 16px;
    color: var(--text-dim);
}

.disclosure-panel[hidden] {
    display: none;
}

.project-details .disclosure-trigger {
    padding: 12px 16px;
    font-size: 14px;
}

/* Stats */
.stats-grid {
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 24px;
    text-align: center;
}

.stat-value {
    font-size: 48px;
    font-weight: 800;
    color: var(--accent-strong);
}

.stat-description {
    color: var(--text-dim);
    font-size: 14px;
}

@media (max-width: 900px) {
    .stats-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

/* Knowledge */
.category-chips {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 12px;
    margin-bottom: 40px;
}

.article-card.featured {
    border-color: var(--accent-glow);
}

.article-category {
    color: var(--accent-strong);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.08em;
}

.article-meta {
    display: flex;
    gap: 16px;
    color: var(--text-dim);
    font-size: 13px;
}

.article-meta span {
    display: inline-flex;
    align-items: center;
    gap: 6px;
}

.knowledge .btn {
    margin: 40px auto 0;
    display: flex;
    width: fit-content;
}

/* Footer */
.site-footer {
    padding: 64px 0 32px;
}

.footer-grid {
    display: grid;
    grid-template-columns: 2fr repeat(3, 1fr);
    gap: 32px;
}

.footer-column ul {
    list-style: none;
    padding: 0;
}

.footer-column a {
    color: var(--text-dim);
}

.footer-column a:hover {
    color: var(--text);
}

.footer-bottom {
    display: flex;
    justify-content: space-between;
    flex-wrap: wrap;
    gap: 16px;
    margin-top: 48px;
    padding-top: 24px;
    border-top: 1px solid var(--border);
    color: var(--text-dim);
    font-size: 14px;
}

@media (max-width: 900px) {
    .footer-grid {
        grid-template-columns: 1fr 1fr;
    }
}

/* Detail pages */
.page {
    padding-top: 48px;
}

.page-title {
    display: flex;
    align-items: center;
    gap: 16px;
    font-size: clamp(32px, 5vw, 52px);
    line-height: 1.1;
    margin: 16px 0;
}

.page-lead {
    color: var(--text-dim);
    font-size: 18px;
    max-width: 720px;
}

.back-link {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    margin-bottom: 24px;
    color: var(--accent-strong);
}

.breadcrumb {
    color: var(--text-dim);
    font-size: 14px;
    margin-bottom: 24px;
}

.breadcrumb a:hover {
    color: var(--text);
}

.case-study-image {
    width: 100%;
    max-height: 480px;
    object-fit: cover;
    border-radius: var(--radius);
    margin-bottom: 40px;
}

.case-study-grid {
    display: grid;
    grid-template-columns: 2fr 1fr;
    gap: 48px;
}

.case-study-body h2 {
    margin-top: 40px;
}

.case-study-body p, .check-list li {
    color: var(--text-dim);
}

.case-study-sidebar {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.sidebar-card, .category-card {
    background: var(--bg-card);
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 24px;
}

.sidebar-card dt {
    color: var(--text-dim);
    font-size: 12px;
    text-transform: uppercase;
    letter-spacing: 0.08em;
}

.sidebar-card dd {
    margin: 0 0 16px;
    font-weight: 600;
}

.category-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
    gap: 24px;
    margin-bottom: 56px;
}

.category-card:hover {
    border-color: var(--accent);
}

.category-card p, .category-count, .empty {
    color: var(--text-dim);
}

.category-count {
    font-size: 13px;
}

.related {
    border-bottom: 0;
}

.related-list {
    list-style: none;
    padding: 0;
}

@media (max-width: 900px) {
    .case-study-grid {
        grid-template-columns: 1fr;
    }
}
"#;
