//! HTML rendering.
//!
//! Every page is a maud document: shared chrome (navbar, footer) around the
//! sections its [`PageKind`] composes. Rendering a page mounts a
//! [`PageScope`]; each section stages its motion on the scope while it
//! renders, and the finished plan is embedded at the end of `<body>`:
//!
//! ```html
//! <script type="application/json" id="motion-plan">{"route":"careers",...}</script>
//! <script src="../motion.3f9a1c02be.js" defer></script>
//! ```
//!
//! Targets carry their own timing in inline custom properties, so the page
//! is fully styled before the driver runs and stays readable without it.
//!
//! ## Modules
//!
//! - [`icons`] — inline SVG table
//! - [`sections`] — sections shared between pages (hero, clients, services, industries)
//! - [`pages`] — per-kind page bodies

pub mod icons;
pub mod pages;
pub mod sections;

use crate::content::SiteContent;
use crate::motion::{
    Ease, MotionPlan, MotionRuntime, PageScope, Repeat, StyleState, TargetList, TweenSpec,
};
use crate::naming;
use crate::site::Manifest;
use crate::types::{PageKind, Route};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

/// Fingerprinted file names of the shared bundles.
#[derive(Debug, Clone)]
pub struct Bundles {
    pub css: String,
    pub js: String,
}

/// One page being rendered: where it lives and what it can link to.
pub struct Page<'a> {
    pub manifest: &'a Manifest,
    pub route: &'a Route,
}

impl<'a> Page<'a> {
    pub fn new(manifest: &'a Manifest, route: &'a Route) -> Self {
        Self { manifest, route }
    }

    pub fn content(&self) -> &'a SiteContent {
        &self.manifest.content
    }

    pub fn slug(&self) -> &'a str {
        &self.route.slug
    }

    /// Relative link to another route.
    pub fn href(&self, to: &str) -> String {
        naming::href(&self.route.slug, to)
    }

    /// Relative link to a file at the output root.
    pub fn asset(&self, path: &str) -> String {
        naming::asset_href(&self.route.slug, path)
    }

    /// `<img>` with width/height when the file's dimensions are known.
    pub fn img(&self, path: &str, alt: &str, class: &str) -> Markup {
        let dims = self.manifest.dimensions(path);
        html! {
            img class=(class) src=(self.asset(path)) alt=(alt)
                width=[dims.map(|d| d.0)] height=[dims.map(|d| d.1)] loading="lazy";
        }
    }
}

/// Output of rendering one route.
#[derive(Debug)]
pub struct RenderedPage {
    pub html: String,
    pub plan: MotionPlan,
}

/// Render a complete page and return it with the motion plan it embeds.
pub fn render_page(
    manifest: &Manifest,
    route: &Route,
    runtime: &MotionRuntime,
    bundles: &Bundles,
    year: i32,
) -> Result<RenderedPage, serde_json::Error> {
    let page = Page::new(manifest, route);
    let mut scope = runtime.mount(&route.slug);

    let nav = navbar(&page, &mut scope);
    let body = pages::body(&page, &mut scope);
    let foot = footer(&page, &mut scope, year);

    let plan = scope.into_plan();
    let plan_json = plan.to_embedded_json()?;
    let doc = base_document(&page, bundles, &plan_json, html! {
        (nav)
        main id="main" class={ "page page-" (kind_class(route.kind)) } { (body) }
        (foot)
    });
    Ok(RenderedPage {
        html: doc.into_string(),
        plan,
    })
}

/// Plan for a route without keeping the markup.
pub fn plan_for(
    manifest: &Manifest,
    route: &Route,
    runtime: &MotionRuntime,
) -> Result<MotionPlan, serde_json::Error> {
    let bundles = Bundles {
        css: String::new(),
        js: String::new(),
    };
    render_page(manifest, route, runtime, &bundles, 0).map(|r| r.plan)
}

fn kind_class(kind: PageKind) -> &'static str {
    match kind {
        PageKind::Landing => "landing",
        PageKind::About => "about",
        PageKind::Services => "services",
        PageKind::Industries => "industries",
        PageKind::Team => "team",
        PageKind::Life => "life",
        PageKind::Careers => "careers",
        PageKind::Contact => "contact",
        PageKind::AppDev => "app-dev",
        PageKind::Vertical => "vertical",
    }
}

/// `<title>` text: route title plus the configured suffix.
pub fn page_title(route_title: &str, suffix: &str) -> String {
    if suffix.is_empty() || route_title == suffix {
        route_title.to_string()
    } else {
        format!("{route_title} | {suffix}")
    }
}

fn base_document(page: &Page, bundles: &Bundles, plan_json: &str, content: Markup) -> Markup {
    let site = &page.manifest.config.site;
    let title = page_title(&page.route.title, &site.title_suffix);
    let canonical = (!site.base_url.is_empty()).then(|| {
        format!(
            "{}{}",
            site.base_url.trim_end_matches('/'),
            naming::page_path(page.slug())
        )
    });
    html! {
        (DOCTYPE)
        html lang=(site.language) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @if let Some(url) = &canonical {
                    link rel="canonical" href=(url);
                }
                link rel="stylesheet" href=(page.asset(&bundles.css));
                // Hides motion targets before first paint; without JS they stay visible.
                script { (PreEscaped("document.documentElement.classList.add('js')")) }
            }
            body id="top" {
                (content)
                script type="application/json" id="motion-plan" { (PreEscaped(plan_json)) }
                script src=(page.asset(&bundles.js)) defer {}
            }
        }
    }
}

/// Legacy path stub that forwards to its canonical route.
pub fn render_redirect(to_slug: &str, title_suffix: &str, base_url: &str) -> Markup {
    // Stubs live one directory deep, like every non-root route.
    let target = naming::href("_", to_slug);
    let canonical = if base_url.is_empty() {
        target.clone()
    } else {
        format!("{}{}", base_url.trim_end_matches('/'), naming::page_path(to_slug))
    };
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (page_title("Redirecting", title_suffix)) }
                meta http-equiv="refresh" content={ "0; url=" (target) };
                link rel="canonical" href=(canonical);
            }
            body {
                p { "This page has moved to " a href=(target) { (target) } "." }
            }
        }
    }
}

/// Markdown to HTML for trusted `site.toml` text.
pub fn markdown(text: &str) -> Markup {
    let mut out = String::new();
    md_html::push_html(&mut out, Parser::new(text));
    PreEscaped(out)
}

/// Section heading with an optional lead paragraph.
pub fn section_head(heading: &str, intro: &str) -> Markup {
    html! {
        header.section-head {
            h2 { (heading) }
            @if !intro.is_empty() {
                p.lead { (intro) }
            }
        }
    }
}

// ============================================================================
// Chrome
// ============================================================================

fn navbar(page: &Page, scope: &mut PageScope) -> Markup {
    let content = page.content();
    let entrance = scope.reveal_one(
        "navbar",
        100.0,
        TweenSpec::entrance(StyleState::hidden().offset(0.0, -80.0), 0.9, Ease::Power3Out)
            .delay(0.3),
    );
    html! {
        header #navbar .navbar data-m=[entrance.marker(0)] style=[entrance.style(0)] {
            div.nav-inner {
                a.brand href=(page.href("")) {
                    (page.img(&content.company.logo, &content.company.name, "brand-logo"))
                }
                input.nav-toggle type="checkbox" id="nav-toggle";
                label.nav-hamburger for="nav-toggle" aria-label="Menu" {
                    span.hamburger-line {}
                    span.hamburger-line {}
                    span.hamburger-line {}
                }
                nav.nav-panel aria-label="Main" {
                    ul {
                        @for link in &page.manifest.navigation {
                            @let current = link.route == page.slug();
                            li class=[current.then_some("current")] {
                                a href=(page.href(&link.route))
                                    aria-current=[current.then_some("page")] { (link.label) }
                            }
                        }
                    }
                    a.btn.nav-cta href=(page.href(&content.navbar.cta.route)) {
                        (content.navbar.cta.label)
                    }
                }
            }
        }
    }
}

fn footer(page: &Page, scope: &mut PageScope, year: i32) -> Markup {
    let content = page.content();
    let company = &content.company;
    let cols = scope.reveal(
        "footer-cols",
        85.0,
        Repeat::Once,
        TargetList::numbered("footer-col", 4),
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 60.0), 1.2, Ease::Power3Out)
            .stagger(0.15),
    );
    html! {
        footer.site-footer {
            div #footer-cols .footer-grid {
                div.footer-col data-m=[cols.marker(0)] style=[cols.style(0)] {
                    h3 { "Contact Info" }
                    address {
                        p {
                            @for (i, line) in company.address.iter().enumerate() {
                                @if i > 0 { br; }
                                (line)
                            }
                        }
                        p { a href={ "mailto:" (company.email) } { (company.email) } }
                        @for phone in &company.phones {
                            p { a href={ "tel:" (phone.tel) } { (phone.display) } }
                        }
                    }
                    (social_links(company))
                }
                div.footer-col data-m=[cols.marker(1)] style=[cols.style(1)] {
                    h3 { "Services" }
                    ul {
                        @for name in &content.footer.services {
                            li { (name) }
                        }
                    }
                }
                div.footer-col data-m=[cols.marker(2)] style=[cols.style(2)] {
                    h3 { "Quick Links" }
                    ul {
                        @for link in &content.footer.quick_links {
                            li { a href=(page.href(&link.route)) { (link.label) } }
                        }
                    }
                }
                div.footer-col data-m=[cols.marker(3)] style=[cols.style(3)] {
                    h3 { "Industries" }
                    ul {
                        @for name in &content.footer.industries {
                            li {
                                @match vertical_route(page.manifest, name) {
                                    Some(slug) => { a href=(page.href(slug)) { (name) } }
                                    None => { (name) }
                                }
                            }
                        }
                    }
                }
            }
            div.footer-bottom {
                p {
                    "Reg. Office : " (company.registered_office)
                    br;
                    "CIN : " (company.cin)
                }
                p {
                    "All Rights Reserved. Copyright © " (year) " "
                    span.accent { (company.legal_name) }
                }
                a.back-to-top href="#top" aria-label="Back to top" {
                    @if let Some(svg) = icons::icon("arrow-up") { (svg) }
                }
            }
        }
    }
}

pub fn social_links(company: &crate::content::Company) -> Markup {
    html! {
        ul.socials {
            @for social in &company.socials {
                li {
                    a href=(social.url) aria-label=(social.network) rel="noopener" target="_blank" {
                        @if let Some(svg) = icons::social(&social.network) { (svg) }
                    }
                }
            }
        }
    }
}

/// Slug of the vertical page an industry name refers to, matched by title
/// or by slug.
pub fn vertical_route<'m>(manifest: &'m Manifest, name: &str) -> Option<&'m str> {
    let slug = naming::slugify(name);
    manifest
        .routes
        .iter()
        .filter(|r| r.kind == PageKind::Vertical)
        .find(|r| r.title == name || r.slug == slug)
        .map(|r| r.slug.as_str())
}
