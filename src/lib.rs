//! # Newel Site
//!
//! Static site generator and headless motion engine for the Newel
//! Technologies corporate website. All copy, contact details and lists live
//! in one `site.toml`; the build turns it into fifteen-odd static pages with
//! scroll-driven animation.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Load      content/  →  manifest.json    (site.toml + assets → structured data)
//! 2. Generate  manifest  →  dist/            (HTML, bundles, assets, redirect stubs)
//! ```
//!
//! The manifest is human-readable JSON written to the temp directory, so a
//! build can be inspected between the two stages, and `generate` can run on
//! its own against a manifest from an earlier `scan`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Stage 1: loads `site.toml` and `config.toml`, discovers assets, builds the route table |
//! | [`generate`] | Stage 2: renders every route in parallel and writes the output tree |
//! | [`render`] | Maud templates: document shell, navbar, footer, sections and page bodies |
//! | [`motion`] | Headless motion engine: reveals, scrubs, marquees, carousel, accordion, counters, tilt |
//! | [`content`] | Typed `site.toml` records and their cross-reference validation |
//! | [`contact`] | Contact form field table, validation and submission state |
//! | [`config`] | `config.toml` loading, validation, merging, and CSS color generation |
//! | [`types`] | Shared route and link types serialized in the manifest |
//! | [`naming`] | Slugs, output paths and relative links |
//! | [`output`] | CLI output formatting for every stage |
//!
//! # Design Decisions
//!
//! ## Motion Is Planned at Build Time
//!
//! Each page's animations are declared while it renders, on a page-scoped
//! [`motion::PageScope`]. The scope bakes every target's start offset, duration
//! and easing into inline CSS custom properties and embeds the remaining
//! trigger wiring as a JSON plan. The shipped driver (`static/motion.js`)
//! watches trigger lines and toggles classes; it never computes timing. The
//! same scope replays scroll and pointer events in tests, so behavior is
//! checked without a browser.
//!
//! ## Content Is One File
//!
//! Every list on the site (services, industries, team, jobs, verticals,
//! redirects) is a table array in `site.toml`. Pages iterate over records
//! instead of repeating markup, and cross-references (nav links, industry →
//! vertical, redirect targets) are validated before anything is written.
//!
//! ## Relative Links Everywhere
//!
//! Pages link to each other and to bundles with relative paths
//! (`../careers/`, `./site.5d41402abc.css`). The output can be served from
//! any sub-path or opened straight from disk.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/):
//!
//! - **Compile-time checking**: malformed HTML is a build error, not a runtime surprise.
//! - **Type-safe**: template variables are Rust expressions, not string lookups.
//! - **XSS-safe by default**: all interpolation is auto-escaped.

pub mod config;
pub mod contact;
pub mod content;
pub mod generate;
pub mod motion;
pub mod naming;
pub mod output;
pub mod render;
pub mod site;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
