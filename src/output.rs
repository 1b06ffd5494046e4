//! CLI output formatting for all pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Every page is shown
//! by its position and title first, with its URL path or output file as
//! secondary context. The load and generate listings use the same header
//! line for the same route so the two stages read as one inventory.
//!
//! # Output Format
//!
//! ## Load
//!
//! ```text
//! Pages
//! 001 Home → /
//! 002 About → /about/
//! ...
//! 010 Oil & Gas → /oil-gas/
//!     Vertical: 4 of 6
//!
//! Redirects
//!     /Oil/ → /oil-gas/
//!
//! Assets
//!     31 files (29 images)
//!     Missing: assets/team/T4.jpg
//! ```
//!
//! ## Generate
//!
//! ```text
//! 001 Home → index.html (52 motion targets)
//! 002 About → about/index.html (9 motion targets)
//!
//! Bundles
//!     site.5d41402abc.css
//!     motion.7d793037a0.js
//!
//! Redirects
//!     Oil → oil-gas/
//!     Contact → contact/ (skipped: same directory as a page)
//!
//! Generated 15 pages, 11 redirects, 31 assets
//! ```
//!
//! ## Plan
//!
//! ```text
//! Motion plan for /careers/
//! Reveals
//!     careers-hero at 80% (once)
//!         careers-hero-0 +0s 2s power4-out
//! Scrubs
//!     careers-why 70% → 90% (height)
//! ```
//!
//! # Architecture
//!
//! Each report has a `format_*` function returning `Vec<String>` and a
//! `print_*` wrapper that writes those lines to stdout. Tests call the
//! former.

use crate::generate::GenerateReport;
use crate::motion::style::fmt_num;
use crate::motion::{MotionPlan, Repeat, ScrubProperty};
use crate::naming;
use crate::site::Manifest;
use crate::types::{PageKind, Route};

// ============================================================================
// Shared entity display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Route header: positional index, title, then where it lives.
///
/// ```text
/// 003 Services → /services/
/// ```
fn route_header(index: usize, route: &Route, location: &str) -> String {
    format!("{} {} → {}", format_index(index), route.title, location)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

// ============================================================================
// Load
// ============================================================================

pub fn format_load_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    let verticals = manifest.content.verticals.len();
    for (i, route) in manifest.routes.iter().enumerate() {
        lines.push(route_header(i + 1, route, &naming::page_path(&route.slug)));
        if route.kind == PageKind::Vertical
            && let Some(n) = route.vertical
        {
            lines.push(format!("{}Vertical: {} of {}", indent(1), n + 1, verticals));
        }
    }

    if !manifest.redirects.is_empty() {
        lines.push(String::new());
        lines.push("Redirects".to_string());
        for redirect in &manifest.redirects {
            lines.push(format!(
                "{}/{}/ → {}",
                indent(1),
                redirect.from,
                naming::page_path(&redirect.to)
            ));
        }
    }

    let images = manifest
        .assets
        .iter()
        .filter(|a| a.dimensions.is_some())
        .count();
    lines.push(String::new());
    lines.push("Assets".to_string());
    lines.push(format!(
        "{}{} ({})",
        indent(1),
        plural(manifest.assets.len(), "file", "files"),
        plural(images, "image", "images")
    ));
    for missing in manifest.missing_images() {
        lines.push(format!("{}Missing: {}", indent(1), missing));
    }
    lines
}

pub fn print_load_output(manifest: &Manifest) {
    for line in format_load_output(manifest) {
        println!("{}", line);
    }
}

// ============================================================================
// Generate
// ============================================================================

pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, page) in report.pages.iter().enumerate() {
        lines.push(format!(
            "{} {} → {} ({})",
            format_index(i + 1),
            page.title,
            page.file,
            plural(page.targets, "motion target", "motion targets")
        ));
    }

    lines.push(String::new());
    lines.push("Bundles".to_string());
    lines.push(format!("{}{}", indent(1), report.css));
    lines.push(format!("{}{}", indent(1), report.js));

    if !report.redirects.is_empty() {
        lines.push(String::new());
        lines.push("Redirects".to_string());
        for r in &report.redirects {
            let target = naming::page_file(&r.to);
            let target = target.trim_end_matches("index.html");
            if r.written {
                lines.push(format!("{}{} → {}", indent(1), r.from, target));
            } else {
                lines.push(format!(
                    "{}{} → {} (skipped: same directory as a page)",
                    indent(1),
                    r.from,
                    target
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}",
        plural(report.pages.len(), "page", "pages"),
        plural(
            report.redirects.iter().filter(|r| r.written).count(),
            "redirect",
            "redirects"
        ),
        plural(report.assets_copied, "asset", "assets")
    ));
    lines
}

pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}

// ============================================================================
// Plan
// ============================================================================

fn repeat_name(repeat: Repeat) -> &'static str {
    match repeat {
        Repeat::Once => "once",
        Repeat::EveryTime => "every time",
    }
}

fn scrub_name(property: ScrubProperty) -> &'static str {
    match property {
        ScrubProperty::Height => "height",
        ScrubProperty::Width => "width",
        ScrubProperty::TranslateX => "translate-x",
    }
}

/// Human-readable summary of one page's motion plan.
pub fn format_plan_output(plan: &MotionPlan) -> Vec<String> {
    let mut lines = vec![format!("Motion plan for {}", naming::page_path(&plan.route))];

    if !plan.reveals.is_empty() {
        lines.push("Reveals".to_string());
        for reveal in &plan.reveals {
            lines.push(format!(
                "{}{} at {}% ({})",
                indent(1),
                reveal.trigger,
                fmt_num(reveal.threshold),
                repeat_name(reveal.repeat)
            ));
            for t in &reveal.targets {
                let ease = serde_json::to_value(t.ease)
                    .ok()
                    .map(|v| match v {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    })
                    .unwrap_or_default();
                lines.push(format!(
                    "{}{} +{}s {}s {}",
                    indent(2),
                    t.key,
                    fmt_num(t.start),
                    fmt_num(t.duration),
                    ease
                ));
            }
        }
    }

    if !plan.scrubs.is_empty() {
        lines.push("Scrubs".to_string());
        for s in &plan.scrubs {
            lines.push(format!(
                "{}{} {}% → {}% ({})",
                indent(1),
                s.trigger,
                fmt_num(s.start),
                fmt_num(s.end),
                scrub_name(s.property)
            ));
        }
    }

    if !plan.carousels.is_empty() {
        lines.push("Carousels".to_string());
        for c in &plan.carousels {
            lines.push(format!(
                "{}{} {} every {}ms",
                indent(1),
                c.id,
                plural(c.len, "slide", "slides"),
                c.interval_ms
            ));
        }
    }

    if !plan.marquees.is_empty() {
        lines.push("Marquees".to_string());
        for m in &plan.marquees {
            lines.push(format!("{}{}", indent(1), m.region));
            for t in &m.tracks {
                lines.push(format!(
                    "{}{} {:?} {}s loop",
                    indent(2),
                    t.id,
                    t.direction,
                    fmt_num(t.loop_seconds)
                ));
            }
        }
    }

    if !plan.accordions.is_empty() {
        lines.push("Accordions".to_string());
        for a in &plan.accordions {
            lines.push(format!("{}{} {}", indent(1), a.id, plural(a.len, "item", "items")));
        }
    }

    if !plan.counters.is_empty() {
        lines.push("Counters".to_string());
        for c in &plan.counters {
            lines.push(format!(
                "{}{} → {} at {}%",
                indent(1),
                c.id,
                c.display,
                fmt_num(c.threshold)
            ));
        }
    }

    if !plan.tilts.is_empty() {
        lines.push("Tilts".to_string());
        for t in &plan.tilts {
            lines.push(format!(
                "{}{} ±{}° over {}s",
                indent(1),
                t.id,
                fmt_num(t.strength / 2.0),
                fmt_num(t.duration)
            ));
        }
    }

    lines
}

pub fn print_plan_output(plan: &MotionPlan) {
    for line in format_plan_output(plan) {
        println!("{}", line);
    }
}
