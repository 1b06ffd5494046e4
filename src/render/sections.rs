//! Sections that appear on more than one page.
//!
//! The landing page stacks all four; `services/` and `industries/` render
//! one each, and `about/` reuses the clients marquee.

use super::{Page, section_head};
use crate::motion::{
    Direction, Ease, PageScope, Repeat, StyleState, TargetList, Tilt, TweenSpec, marquee,
};
use maud::{Markup, html};

/// Hero: masked headline lines, description, CTAs and the stacked layer
/// cards, which lean toward the pointer.
pub fn hero(page: &Page, scope: &mut PageScope) -> Markup {
    let hero = &page.content().hero;
    let lines = hero.headline.len() + 1;
    let title = scope.reveal(
        "hero-title",
        100.0,
        Repeat::Once,
        TargetList::numbered("hero-line", lines),
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 120.0), 1.4, Ease::Power4Out)
            .stagger(0.1),
    );
    let desc = scope.reveal_one(
        "hero-desc",
        100.0,
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 60.0), 1.2, Ease::Power3Out)
            .delay(0.6),
    );
    let ctas = scope.reveal(
        "hero-ctas",
        100.0,
        Repeat::Once,
        TargetList::numbered("hero-cta", hero.ctas.len()),
        TweenSpec::entrance(
            StyleState::hidden().offset(0.0, 50.0).scaled(0.92),
            1.0,
            Ease::BackOut(1.4),
        )
        .delay(0.9)
        .stagger(0.15),
    );
    let layers: Vec<_> = (0..hero.layers.len())
        .map(|i| {
            scope.reveal_one(
                &format!("hero-layer-{i}"),
                70.0,
                TweenSpec::entrance(
                    StyleState::hidden().offset(0.0, 80.0).scaled(0.85),
                    1.4,
                    Ease::Power3Out,
                )
                .delay(0.8 + i as f64 * 0.2),
            )
        })
        .collect();
    scope.tilt("hero-visual", Tilt::HERO);

    html! {
        section.hero {
            div.hero-copy {
                h1 #hero-title .hero-title {
                    @for (i, line) in hero.headline.iter().enumerate() {
                        span.line-mask {
                            span.hero-line data-m=[title.marker(i)] style=[title.style(i)] { (line) }
                        }
                    }
                    span.line-mask {
                        span.hero-line.highlight
                            data-m=[title.marker(lines - 1)] style=[title.style(lines - 1)] {
                            span.aws-gradient { (hero.highlight) }
                        }
                    }
                }
                p #hero-desc .hero-desc data-m=[desc.marker(0)] style=[desc.style(0)] {
                    (hero.description)
                }
                div #hero-ctas .hero-ctas {
                    @for (i, cta) in hero.ctas.iter().enumerate() {
                        a.btn.btn-ghost[i > 0] href=(page.href(&cta.route))
                            data-m=[ctas.marker(i)] style=[ctas.style(i)] {
                            (cta.label)
                        }
                    }
                }
            }
            div #hero-visual .hero-layers data-tilt {
                @for (i, layer) in hero.layers.iter().enumerate() {
                    div.layer id={ "hero-layer-" (i) }
                        data-m=[layers[i].marker(0)] style=[layers[i].style(0)] {
                        span.layer-number { (layer.number) }
                        div {
                            h3 { (layer.title) }
                            p { (layer.desc) }
                        }
                    }
                }
            }
        }
    }
}

/// Client logos: heading plus two marquee rows running in opposite
/// directions. Each row holds the logo list twice so the loop is seamless.
pub fn clients(page: &Page, scope: &mut PageScope) -> Markup {
    let clients = &page.content().clients;
    let reveal_at = scope.default_threshold();
    let head = scope.reveal(
        "clients-head",
        reveal_at,
        Repeat::Once,
        TargetList::numbered("clients-head", 2),
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 60.0), 1.2, Ease::Power4Out),
    );
    let tracks = scope.marquee("clients-marquee", &[Direction::Left, Direction::Right]);
    let logos = marquee::track(&clients.logos);

    html! {
        section.clients {
            header #clients-head .section-head {
                h2 data-m=[head.marker(0)] style=[head.style(0)] { (clients.heading) }
                p.lead data-m=[head.marker(1)] style=[head.style(1)] { (clients.tagline) }
            }
            div #clients-marquee .marquee data-marquee {
                @for track in &tracks {
                    div.marquee-row {
                        div.marquee-track id=(track.id)
                            data-direction=(direction_name(track.direction))
                            style={ "--loop:" (track.loop_seconds) "s" } {
                            @for (i, logo) in logos.iter().enumerate() {
                                // Second copy is decorative.
                                div.logo-tile aria-hidden=[(i >= clients.logos.len()).then_some("true")] {
                                    (page.img(&logo.image, &logo.name, "client-logo"))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn direction_name(direction: Direction) -> &'static str {
    match direction {
        Direction::Left => "left",
        Direction::Right => "right",
    }
}

/// Service cards, tilted in from alternating sides.
pub fn services(page: &Page, scope: &mut PageScope) -> Markup {
    let services = &page.content().services;
    let cards = scope.reveal(
        "services-grid",
        75.0,
        Repeat::Once,
        TargetList::numbered("service", services.items.len()),
        TweenSpec::entrance(
            StyleState::hidden().offset(0.0, 60.0).scaled(0.92).rotated(-2.0),
            1.2,
            Ease::Power3Out,
        )
        .stagger(0.18)
        .alternate(-30.0, 30.0),
    );
    html! {
        section.services {
            (section_head(&services.heading, &services.intro))
            div #services-grid .card-grid {
                @for (i, item) in services.items.iter().enumerate() {
                    article.service-card data-m=[cards.marker(i)] style=[cards.style(i)] {
                        (page.img(&item.image, &item.title, "service-image"))
                        h3 { (item.title) }
                        p { (item.desc) }
                    }
                }
            }
        }
    }
}

/// Industry rows: numbered visual on one side, copy on the other, swapping
/// sides every row. Each row links to its vertical page.
pub fn industries(page: &Page, scope: &mut PageScope) -> Markup {
    let industries = &page.content().industries;
    let rows: Vec<_> = (0..industries.items.len())
        .map(|i| {
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
            let visual = scope.reveal_one(
                &format!("industry-{i}-visual"),
                75.0,
                TweenSpec::entrance(
                    StyleState::hidden().offset(-120.0 * dir, 0.0).scaled(0.92),
                    1.4,
                    Ease::Power4Out,
                ),
            );
            let copy = scope.reveal_one(
                &format!("industry-{i}-content"),
                75.0,
                TweenSpec::entrance(
                    StyleState::hidden().offset(100.0 * dir, 40.0),
                    1.3,
                    Ease::Power3Out,
                ),
            );
            (visual, copy)
        })
        .collect();

    html! {
        section.industries {
            (section_head(&industries.heading, &industries.intro))
            @for (i, item) in industries.items.iter().enumerate() {
                @let (visual, copy) = &rows[i];
                div.industry.reverse[i % 2 == 1] {
                    div.industry-visual id={ "industry-" (i) "-visual" }
                        data-m=[visual.marker(0)] style=[visual.style(0)] {
                        span.industry-number { (format!("{:02}", i + 1)) }
                        span.industry-emoji aria-hidden="true" { (item.emoji) }
                    }
                    div.industry-content id={ "industry-" (i) "-content" }
                        data-m=[copy.marker(0)] style=[copy.style(0)] {
                        h3 { (item.name) }
                        p { (item.desc) }
                        a.link-arrow href=(page.href(&item.vertical)) { (industries.link_label) " →" }
                    }
                }
            }
        }
    }
}
