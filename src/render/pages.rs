//! Page bodies, one function per [`PageKind`].

use super::{Page, icons, markdown, section_head, sections, social_links};
use crate::contact::{FIELDS, InputKind};
use crate::content::{Card, Closing, CtaBlock, Side, Vertical};
use crate::motion::{
    Ease, PageScope, Repeat, ScrubProperty, StyleState, TargetList, TweenSpec,
};
use crate::types::PageKind;
use maud::{Markup, html};

pub fn body(page: &Page, scope: &mut PageScope) -> Markup {
    match page.route.kind {
        PageKind::Landing => landing(page, scope),
        PageKind::About => about(page, scope),
        PageKind::Services => sections::services(page, scope),
        PageKind::Industries => sections::industries(page, scope),
        PageKind::Team => team(page, scope),
        PageKind::Life => life(page, scope),
        PageKind::Careers => careers(page, scope),
        PageKind::Contact => contact(page, scope),
        PageKind::AppDev => app_dev(page, scope),
        PageKind::Vertical => match page
            .route
            .vertical
            .and_then(|i| page.content().verticals.get(i))
        {
            Some(vertical) => vertical_page(page, scope, vertical),
            None => html! {},
        },
    }
}

/// Icon for a card: a named outline icon, or the key itself when it is an
/// emoji. Unknown names render nothing.
fn card_icon(key: &str) -> Markup {
    html! {
        @if let Some(svg) = icons::icon(key) {
            span.card-icon { (svg) }
        } @else if !key.is_ascii() {
            span.card-icon.emoji aria-hidden="true" { (key) }
        }
    }
}

fn closing(id: &str, block: &Closing, scope: &mut PageScope) -> Markup {
    let staged = scope.reveal_one(
        id,
        85.0,
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 60.0), 1.2, Ease::Power3Out),
    );
    html! {
        section.closing id=(id) data-m=[staged.marker(0)] style=[staged.style(0)] {
            h2 { (block.heading) }
            p { (block.body) }
        }
    }
}

fn cta_block(page: &Page, id: &str, block: &CtaBlock, staged: Option<&crate::motion::Staged>) -> Markup {
    html! {
        section.cta-block id=(id)
            data-m=[staged.and_then(|s| s.marker(0))] style=[staged.and_then(|s| s.style(0))] {
            h2 { (block.heading) }
            p { (block.body) }
            a.btn href=(page.href(&block.link.route)) { (block.link.label) }
        }
    }
}

// ============================================================================
// Landing
// ============================================================================

/// Hero, clients, services and industries. Each section fades in whenever
/// it scrolls into view and out again when scrolled back below the line.
fn landing(page: &Page, scope: &mut PageScope) -> Markup {
    let parts: [fn(&Page, &mut PageScope) -> Markup; 4] = [
        sections::hero,
        sections::clients,
        sections::services,
        sections::industries,
    ];
    let reveal_at = scope.default_threshold();
    html! {
        @for (i, render) in parts.iter().enumerate() {
            @let id = format!("landing-{i}");
            @let fade = scope.reveal(
                &id,
                reveal_at,
                Repeat::EveryTime,
                TargetList::numbered(&id, 1),
                TweenSpec::entrance(StyleState::hidden(), 1.0, Ease::Power2Out),
            );
            div.landing-section id=(id) data-m=[fade.marker(0)] style=[fade.style(0)] {
                (render(page, scope))
            }
        }
    }
}

// ============================================================================
// About
// ============================================================================

fn about(page: &Page, scope: &mut PageScope) -> Markup {
    let about = &page.content().about;
    let line = scope.scrub("about-timeline", 65.0, 90.0, ScrubProperty::Height);
    let cards: Vec<_> = (0..about.entries.len())
        .map(|i| {
            scope.reveal_one(
                &format!("about-card-{i}"),
                82.0,
                TweenSpec::entrance(
                    StyleState::hidden().offset(0.0, 90.0).scaled(0.94),
                    1.2,
                    Ease::Power3Out,
                )
                .delay(i as f64 * 0.15),
            )
        })
        .collect();
    let entries = html! {
        section.about {
            header.page-head {
                h1 { (about.heading) }
                p.lead { (about.intro) }
            }
            div #about-timeline .timeline {
                div.timeline-line { div.timeline-progress data-scrub=(line) {} }
                @for (i, entry) in about.entries.iter().enumerate() {
                    article
                        class={ "timeline-card " (match entry.side { Side::Left => "left", Side::Right => "right" }) }
                        id={ "about-card-" (i) }
                        data-m=[cards[i].marker(0)] style=[cards[i].style(0)] {
                        div.timeline-dot { (card_icon(&entry.icon)) }
                        div.timeline-body {
                            h3 { (entry.title) }
                            (markdown(&entry.body))
                        }
                    }
                }
            }
        }
    };
    html! {
        (entries)
        (sections::clients(page, scope))
    }
}

// ============================================================================
// Team
// ============================================================================

/// Leadership strip: the section pins while vertical scroll moves the card
/// row sideways by its overflow width.
fn team(page: &Page, scope: &mut PageScope) -> Markup {
    let team = &page.content().team;
    let strip = scope.scrub("team-strip", 0.0, 100.0, ScrubProperty::TranslateX);
    let reveal_at = scope.default_threshold();
    let cards = scope.reveal(
        "team-cards",
        reveal_at,
        Repeat::Once,
        TargetList::numbered("member", team.members.len()),
        TweenSpec::entrance(StyleState::hidden().offset(200.0, 0.0), 1.4, Ease::Power3Out)
            .stagger(0.15),
    );
    html! {
        section.team {
            header.page-head {
                p.eyebrow { (team.eyebrow) }
                h1 { (team.heading) }
                p.lead { (team.intro) }
            }
            div #team-strip .pin-strip style={ "--cards:" (team.members.len()) } {
                div.pin-viewport {
                    div #team-cards .pin-track data-scrub=(strip) {
                        @for (i, member) in team.members.iter().enumerate() {
                            article.member-card data-m=[cards.marker(i)] style=[cards.style(i)] {
                                div.member-photo {
                                    (page.img(&member.image, &member.name, "member-image"))
                                    div.member-overlay {
                                        p.member-role { (member.role) }
                                        @if let Some(tagline) = &member.tagline {
                                            p.member-tagline { (tagline) }
                                        }
                                    }
                                }
                                h3 { (member.name) }
                                p.role { (member.role) }
                            }
                        }
                    }
                }
            }
            (closing("team-closing", &team.closing, scope))
        }
    }
}

// ============================================================================
// Life
// ============================================================================

fn life(page: &Page, scope: &mut PageScope) -> Markup {
    let life = &page.content().life;
    let n = life.moments.len();
    let rotating = scope.carousel("moments", n);
    let reveal_at = scope.default_threshold();
    let cards = scope.reveal(
        "moments",
        reveal_at,
        Repeat::Once,
        TargetList::numbered("moment", n),
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 40.0), 0.9, Ease::Power3Out)
            .stagger(0.15),
    );
    html! {
        section.life {
            header.page-head {
                h1 { (life.heading) }
                p.lead { (life.intro) }
            }
            div #moments .carousel data-carousel[rotating] {
                div.carousel-viewport {
                    div.carousel-track data-carousel-track {
                        @for (i, moment) in life.moments.iter().enumerate() {
                            article.slide data-m=[cards.marker(i)] style=[cards.style(i)] {
                                // Lifts on hover; kept apart from the slide's entrance transform.
                                div.moment-card {
                                    @match &moment.image {
                                        Some(image) => { (page.img(image, &moment.title, "moment-image")) }
                                        None => { div.moment-placeholder aria-hidden="true" { (moment.title) } }
                                    }
                                    h3 { (moment.title) }
                                    p { (moment.description) }
                                }
                            }
                        }
                    }
                }
                @if rotating {
                    div.carousel-dots {
                        @for i in 0..n {
                            button type="button" data-carousel-dot=(i)
                                class=[(i == 0).then_some("active")]
                                aria-label={ "Show slide " (i + 1) } {}
                        }
                    }
                }
            }
            (closing("life-closing", &life.closing, scope))
        }
    }
}

// ============================================================================
// Careers
// ============================================================================

fn careers(page: &Page, scope: &mut PageScope) -> Markup {
    let careers = &page.content().careers;
    let reveal_at = scope.default_threshold();
    let hero = scope.reveal_one(
        "careers-hero",
        reveal_at,
        TweenSpec::entrance(StyleState::REST.clipped(100.0), 2.0, Ease::Power4Out),
    );
    let why_line = scope.scrub("careers-why", 70.0, 90.0, ScrubProperty::Height);
    let benefits: Vec<_> = (0..careers.benefits.len())
        .map(|i| {
            let x = if i % 2 == 0 { -80.0 } else { 80.0 };
            scope.reveal_one(
                &format!("benefit-{i}"),
                85.0,
                TweenSpec::entrance(
                    StyleState::hidden().offset(x, 0.0).scaled(0.92),
                    1.1,
                    Ease::BackOut(1.4),
                )
                .delay(i as f64 * 0.18),
            )
        })
        .collect();
    scope.accordion("jobs", careers.jobs.len());
    let jobs: Vec<_> = (0..careers.jobs.len())
        .map(|i| {
            scope.reveal_one(
                &format!("job-{i}"),
                85.0,
                TweenSpec::entrance(StyleState::hidden().offset(0.0, 60.0), 1.0, Ease::Power3Out)
                    .delay(i as f64 * 0.15),
            )
        })
        .collect();
    let counted: Vec<bool> = careers
        .stats
        .iter()
        .enumerate()
        .map(|(i, stat)| scope.counter(&format!("stat-{i}"), &stat.value, 85.0))
        .collect();
    let cta = scope.reveal_one(
        "careers-cta",
        85.0,
        TweenSpec::entrance(StyleState::hidden().scaled(0.9), 1.3, Ease::BackOut(1.6)),
    );

    html! {
        section #careers-hero .careers-hero data-m=[hero.marker(0)] style=[hero.style(0)] {
            h1 { (careers.heading) }
            p.lead { (careers.tagline) }
        }
        section.why {
            h2 { (careers.why_heading) }
            div #careers-why .timeline {
                div.timeline-line { div.timeline-progress data-scrub=(why_line) {} }
                @for (i, card) in careers.benefits.iter().enumerate() {
                    article
                        class={ "timeline-card " (if i % 2 == 0 { "left" } else { "right" }) }
                        id={ "benefit-" (i) }
                        data-m=[benefits[i].marker(0)] style=[benefits[i].style(0)] {
                        div.timeline-dot { (card_icon(&card.icon)) }
                        div.timeline-body {
                            h3 { (card.title) }
                            p { (card.desc) }
                        }
                    }
                }
            }
        }
        section.jobs {
            h2 { (careers.jobs_heading) }
            div #jobs .job-list data-accordion {
                @for (i, job) in careers.jobs.iter().enumerate() {
                    div.job id={ "job-" (i) } data-m=[jobs[i].marker(0)] style=[jobs[i].style(0)] {
                        button.job-toggle type="button" data-accordion-toggle=(i)
                            aria-expanded="false" aria-controls={ "job-panel-" (i) } {
                            span.job-title { (job.title) }
                            span.pill { (job.experience) }
                            span.chevron aria-hidden="true" { "+" }
                        }
                        div.job-panel id={ "job-panel-" (i) } {
                            p { strong { "Experience: " } (job.experience) }
                            ul.skills {
                                @for skill in &job.skills {
                                    li { (skill) }
                                }
                            }
                            a.btn href=(page.href(&careers.apply.route)) { (careers.apply.label) }
                        }
                    }
                }
            }
        }
        section.stats {
            @for (i, stat) in careers.stats.iter().enumerate() {
                div.stat {
                    p.stat-value id=[counted[i].then(|| format!("stat-{i}"))]
                        data-counter[counted[i]] { (stat.value) }
                    h3 { (stat.label) }
                    p { (stat.desc) }
                }
            }
        }
        (cta_block(page, "careers-cta", &careers.cta, Some(&cta)))
    }
}

// ============================================================================
// Contact
// ============================================================================

fn contact(page: &Page, scope: &mut PageScope) -> Markup {
    let contact = &page.content().contact;
    let company = &page.content().company;
    let endpoint = page.manifest.config.contact.endpoint.as_deref();
    let info = scope.reveal_one(
        "contact-info",
        70.0,
        TweenSpec::entrance(StyleState::hidden().offset(-80.0, 0.0), 1.4, Ease::Power4Out),
    );
    let form = scope.reveal_one(
        "contact-form-card",
        70.0,
        TweenSpec::entrance(StyleState::hidden().offset(80.0, 0.0), 1.4, Ease::Power4Out),
    );
    html! {
        section.contact {
            header.page-head {
                h1 {
                    (contact.heading) " "
                    span.highlight { (contact.highlight) }
                    @if !contact.heading_tail.is_empty() { " " (contact.heading_tail) }
                }
                p.lead { (contact.intro) }
            }
            div.contact-grid {
                div #contact-info .contact-info data-m=[info.marker(0)] style=[info.style(0)] {
                    h2 { (contact.info_heading) }
                    div.info-item {
                        span.map-pin { (card_icon("location")) }
                        div {
                            h3 { (contact.office_label) }
                            p {
                                @for (i, line) in company.address.iter().enumerate() {
                                    @if i > 0 { br; }
                                    (line)
                                }
                            }
                        }
                    }
                    div.info-item {
                        (card_icon("phone"))
                        div {
                            h3 { "Phone" }
                            @for phone in &company.phones {
                                p { a href={ "tel:" (phone.tel) } { (phone.display) } }
                            }
                        }
                    }
                    div.info-item {
                        (card_icon("mail"))
                        div {
                            h3 { "Email" }
                            p { a href={ "mailto:" (company.email) } { (company.email) } }
                        }
                    }
                    div.social-row {
                        h3 { (contact.socials_label) }
                        (social_links(company))
                    }
                }
                div #contact-form-card .contact-form-card data-m=[form.marker(0)] style=[form.style(0)] {
                    h2 { (contact.form_heading) }
                    form #contact-form novalidate
                        data-endpoint=[endpoint]
                        data-sending=(contact.sending_label)
                        data-success=(contact.success_message)
                        data-failure=(contact.failure_message) {
                        @for field in &FIELDS {
                            @let id = format!("field-{}", field.name);
                            div.field.field-wide[field.kind == InputKind::Textarea] {
                                @match field.kind.input_type() {
                                    Some(kind) => {
                                        input id=(id) name=(field.name) type=(kind)
                                            placeholder=" " required[field.required];
                                    }
                                    None => {
                                        textarea id=(id) name=(field.name) rows="5"
                                            placeholder=" " required[field.required] {}
                                    }
                                }
                                label for=(id) { (field.label) }
                            }
                        }
                        button.btn type="submit" { (contact.submit_label) }
                        p.form-status role="status" aria-live="polite" {}
                    }
                }
            }
        }
    }
}

// ============================================================================
// Application development
// ============================================================================

fn app_dev(page: &Page, scope: &mut PageScope) -> Markup {
    let app = &page.content().app_dev;
    let reveal_at = scope.default_threshold();
    let heading = scope.reveal_one(
        "app-heading",
        reveal_at,
        TweenSpec::entrance(StyleState::REST.clipped(100.0), 2.5, Ease::Power3InOut),
    );
    let line = scope.scrub("process", 70.0, 90.0, ScrubProperty::Width);
    let steps: Vec<_> = (0..app.steps.len())
        .map(|i| {
            scope.reveal_one(
                &format!("step-{i}"),
                85.0,
                TweenSpec::entrance(
                    StyleState::hidden().offset(0.0, 40.0).scaled(0.7),
                    1.0,
                    Ease::BackOut(1.6),
                )
                .delay(i as f64 * 0.25),
            )
        })
        .collect();
    let stack = scope.reveal(
        "stack",
        reveal_at,
        Repeat::Once,
        TargetList::numbered("tech", app.stack.len()),
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 30.0), 1.0, Ease::Power3Out)
            .stagger(0.15),
    );
    html! {
        section.app-hero {
            div.app-copy {
                h1 #app-heading .typed data-m=[heading.marker(0)] style=[heading.style(0)] {
                    (app.heading)
                }
                @for para in &app.intro {
                    p { (para) }
                }
                a.btn href=(page.href(&app.link.route)) { (app.link.label) }
            }
            div.app-visual {
                h3 { (app.visual_title) }
                p { (app.visual_caption) }
            }
        }
        section.process {
            h2 { (app.process_heading) }
            div #process .process-steps {
                div.process-line { div.process-progress data-scrub=(line) {} }
                @for (i, step) in app.steps.iter().enumerate() {
                    (step_card(i, step, &steps[i]))
                }
            }
        }
        section.stack {
            h2 { (app.stack_heading) }
            div #stack .stack-grid {
                @for (i, tech) in app.stack.iter().enumerate() {
                    div.tech data-m=[stack.marker(i)] style=[stack.style(i)] {
                        span.tech-icon aria-hidden="true" { (tech.icon) }
                        span { (tech.name) }
                    }
                }
            }
        }
        (cta_block(page, "app-cta", &app.cta, None))
    }
}

fn step_card(i: usize, step: &Card, staged: &crate::motion::Staged) -> Markup {
    html! {
        div.step id={ "step-" (i) } data-m=[staged.marker(0)] style=[staged.style(0)] {
            (card_icon(&step.icon))
            h3 { (step.title) }
            p { (step.desc) }
        }
    }
}

// ============================================================================
// Verticals
// ============================================================================

/// Shared template for every industry vertical.
fn vertical_page(page: &Page, scope: &mut PageScope, vertical: &Vertical) -> Markup {
    // Title, each intro paragraph, then the accent rule.
    let hero_len = vertical.intro.len() + 2;
    let reveal_at = scope.default_threshold();
    let hero = scope.reveal(
        "vertical-hero",
        reveal_at,
        Repeat::Once,
        TargetList::numbered("vertical-hero", hero_len),
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 50.0), 1.3, Ease::Power4Out)
            .stagger(0.2),
    );
    let cards: Vec<_> = (0..vertical.challenges.len())
        .map(|i| {
            scope.reveal_one(
                &format!("challenge-{i}"),
                85.0,
                TweenSpec::entrance(StyleState::hidden().offset(0.0, 60.0), 1.0, Ease::Power3Out)
                    .delay(i as f64 * 0.12),
            )
        })
        .collect();
    let cta = scope.reveal_one(
        "vertical-cta",
        85.0,
        TweenSpec::entrance(StyleState::hidden().scaled(0.92), 1.2, Ease::BackOut(1.4)),
    );
    let rule = hero_len - 1;
    html! {
        section #vertical-hero .vertical-hero {
            h1 data-m=[hero.marker(0)] style=[hero.style(0)] { (vertical.title) }
            @for (i, para) in vertical.intro.iter().enumerate() {
                p.lead data-m=[hero.marker(i + 1)] style=[hero.style(i + 1)] { (para) }
            }
            hr.accent-rule data-m=[hero.marker(rule)] style=[hero.style(rule)];
        }
        section.challenges {
            h2 { (vertical.challenges_heading) }
            div.card-grid {
                @for (i, card) in vertical.challenges.iter().enumerate() {
                    article.challenge-card id={ "challenge-" (i) }
                        data-m=[cards[i].marker(0)] style=[cards[i].style(0)] {
                        (card_icon(&card.icon))
                        h3 { (card.title) }
                        p { (card.desc) }
                    }
                }
            }
        }
        (cta_block(page, "vertical-cta", &vertical.cta, Some(&cta)))
    }
}
