//! Static site generation.
//!
//! Stage 2 of the build pipeline. Takes the manifest from the load stage and
//! writes the finished site.
//!
//! ## Generated Files
//!
//! - **Pages**: one `index.html` per route, rendered in parallel
//! - **Bundles**: `site.{hash}.css` (color variables + base styles) and
//!   `motion.{hash}.js` (the browser driver), named by content hash so a
//!   changed bundle never hits a stale cache
//! - **Assets**: everything under `content/assets/`, copied as-is
//! - **Redirect stubs**: legacy mixed-case paths forwarding to their routes
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # Landing page
//! ├── site.5d41402abc.css
//! ├── motion.7d793037a0.js
//! ├── about/index.html
//! ├── careers/index.html
//! ├── oil-gas/index.html         # One directory per vertical
//! ├── Oil/index.html             # Redirect stub → ../oil-gas/
//! └── assets/
//!     ├── Logo.png
//!     └── clients/...
//! ```
//!
//! Every link in the output is relative, so the site works from any
//! sub-path and straight from `file://`.
//!
//! ## Redirect Stubs
//!
//! On a case-insensitive filesystem `Contact/` and `contact/` are the same
//! directory. A stub whose directory already holds a page written by this
//! run is skipped and reported instead of overwriting the real page.

use crate::config;
use chrono::{DateTime, Datelike, Utc};
use crate::motion::MotionRuntime;
use crate::naming;
use crate::render::{self, Bundles};
use crate::site::Manifest;
use rayon::prelude::*;
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Asset {path} could not be copied: {source}")]
    Asset {
        path: String,
        source: std::io::Error,
    },
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS_STATIC: &str = include_str!("../static/motion.js");

/// Hex digits kept from the SHA-256 of a bundle.
const FINGERPRINT_LEN: usize = 10;

/// What a generate run wrote, for CLI output.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub css: String,
    pub js: String,
    pub pages: Vec<PageReport>,
    pub assets_copied: usize,
    pub redirects: Vec<RedirectReport>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageReport {
    pub slug: String,
    pub title: String,
    pub file: String,
    /// Motion targets staged on the page.
    pub targets: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RedirectReport {
    pub from: String,
    pub to: String,
    /// `false` when the stub would have replaced a page (case-insensitive
    /// filesystem).
    pub written: bool,
}

/// Generate from a manifest file written by the load stage.
pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    let runtime = MotionRuntime::init(&manifest.config.motion);
    generate_site(&manifest, &runtime, source_root, output_dir)
}

/// Write the full site for `manifest` into `output_dir`.
pub fn generate_site(
    manifest: &Manifest,
    runtime: &MotionRuntime,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    // Bundles
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&manifest.config.colors),
        CSS_STATIC
    );
    let bundles = Bundles {
        css: fingerprint("site", "css", css.as_bytes()),
        js: fingerprint("motion", "js", JS_STATIC.as_bytes()),
    };
    fs::write(output_dir.join(&bundles.css), &css)?;
    fs::write(output_dir.join(&bundles.js), JS_STATIC)?;

    // Pages
    let year = build_year();
    let pages = manifest
        .routes
        .par_iter()
        .map(|route| {
            let rendered = render::render_page(manifest, route, runtime, &bundles, year)?;
            let file = naming::page_file(&route.slug);
            let path = output_dir.join(&file);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, rendered.html)?;
            Ok(PageReport {
                slug: route.slug.clone(),
                title: route.title.clone(),
                file,
                targets: rendered.plan.target_count(),
            })
        })
        .collect::<Result<Vec<_>, GenerateError>>()?;

    // Assets
    for asset in &manifest.assets {
        let dst = output_dir.join(&asset.path);
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source_root.join(&asset.path), &dst).map_err(|source| GenerateError::Asset {
            path: asset.path.clone(),
            source,
        })?;
    }

    // Redirect stubs
    let route_dirs: HashSet<String> = manifest
        .routes
        .iter()
        .map(|r| r.slug.to_lowercase())
        .collect();
    let mut redirects = Vec::new();
    for redirect in &manifest.redirects {
        let file = output_dir.join(&redirect.from).join("index.html");
        let collides = route_dirs.contains(&redirect.from.to_lowercase()) && file.exists();
        if !collides {
            fs::create_dir_all(output_dir.join(&redirect.from))?;
            let html = render::render_redirect(
                &redirect.to,
                &manifest.config.site.title_suffix,
                &manifest.config.site.base_url,
            );
            fs::write(&file, html.into_string())?;
        }
        redirects.push(RedirectReport {
            from: redirect.from.clone(),
            to: redirect.to.clone(),
            written: !collides,
        });
    }

    Ok(GenerateReport {
        css: bundles.css,
        js: bundles.js,
        pages,
        assets_copied: manifest.assets.len(),
        redirects,
    })
}

/// `{stem}.{hash}.{ext}` where `hash` is the first hex digits of the
/// content's SHA-256.
pub fn fingerprint(stem: &str, ext: &str, content: &[u8]) -> String {
    let digest = format!("{:x}", Sha256::digest(content));
    format!("{stem}.{}.{ext}", &digest[..FINGERPRINT_LEN])
}

/// Year for the footer copyright. `SOURCE_DATE_EPOCH` pins it for
/// reproducible builds.
fn build_year() -> i32 {
    pinned_year(std::env::var("SOURCE_DATE_EPOCH").ok().as_deref())
        .unwrap_or_else(|| Utc::now().year())
}

/// UTC year of a `SOURCE_DATE_EPOCH` value, or `None` if it isn't a
/// representable Unix timestamp.
fn pinned_year(epoch: Option<&str>) -> Option<i32> {
    let secs = epoch?.trim().parse::<i64>().ok()?;
    DateTime::from_timestamp(secs, 0).map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn build(content: &TempDir) -> (TempDir, GenerateReport) {
        let manifest = site::load(content.path()).unwrap();
        let runtime = MotionRuntime::init(&manifest.config.motion);
        let out = TempDir::new().unwrap();
        let report = generate_site(&manifest, &runtime, content.path(), out.path()).unwrap();
        (out, report)
    }

    #[test]
    fn writes_every_route() {
        let content = setup_content();
        let (out, report) = build(&content);
        assert_eq!(report.pages.len(), 10);
        assert!(out.path().join("index.html").is_file());
        assert!(out.path().join("about/index.html").is_file());
        assert!(out.path().join("oil-gas/index.html").is_file());
        let careers = report.pages.iter().find(|p| p.slug == "careers").unwrap();
        assert_eq!(careers.file, "careers/index.html");
        assert!(careers.targets > 0);
    }

    #[test]
    fn pages_keep_route_order() {
        let content = setup_content();
        let (_out, report) = build(&content);
        let slugs: Vec<&str> = report.pages.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs.first(), Some(&""));
        assert_eq!(slugs.last(), Some(&"oil-gas"));
    }

    #[test]
    fn bundles_are_fingerprinted_and_linked() {
        let content = setup_content();
        let (out, report) = build(&content);
        assert!(report.css.starts_with("site.") && report.css.ends_with(".css"));
        assert_eq!(report.css.len(), "site.".len() + FINGERPRINT_LEN + ".css".len());
        let css = fs::read_to_string(out.path().join(&report.css)).unwrap();
        assert!(css.contains("--color-brand"));
        let about = fs::read_to_string(out.path().join("about/index.html")).unwrap();
        assert!(about.contains(&format!("href=\"../{}\"", report.css)));
        assert!(about.contains(&format!("src=\"../{}\"", report.js)));
    }

    #[test]
    fn fingerprint_follows_content() {
        let a = fingerprint("site", "css", b"body{}");
        assert_eq!(a, fingerprint("site", "css", b"body{}"));
        assert_ne!(a, fingerprint("site", "css", b"body{ }"));
        // sha256("") = e3b0c44298fc1c14...
        assert_eq!(fingerprint("x", "js", b""), "x.e3b0c44298.js");
    }

    #[test]
    fn assets_copied() {
        let content = setup_content();
        write_png(&content.path().join("assets/clients/Alpha.png"), 8, 4);
        let (out, report) = build(&content);
        assert_eq!(report.assets_copied, 1);
        assert!(out.path().join("assets/clients/Alpha.png").is_file());
        let landing = fs::read_to_string(out.path().join("index.html")).unwrap();
        assert!(landing.contains("src=\"./assets/clients/Alpha.png\" alt=\"Alpha\" width=\"8\" height=\"4\""));
    }

    #[test]
    fn redirect_stubs_written() {
        let content = setup_content();
        let (out, report) = build(&content);
        let oil = report.redirects.iter().find(|r| r.from == "Oil").unwrap();
        assert!(oil.written);
        let stub = fs::read_to_string(out.path().join("Oil/index.html")).unwrap();
        assert!(stub.contains("url=../oil-gas/"));
    }

    #[test]
    fn redirect_does_not_replace_page_on_collision() {
        let content = setup_content();
        let (out, report) = build(&content);
        let stub = report.redirects.iter().find(|r| r.from == "Contact").unwrap();
        // Whatever the filesystem's case rules, the contact page survives.
        let page = fs::read_to_string(out.path().join("contact/index.html")).unwrap();
        assert!(page.contains("id=\"contact-form\""));
        if !stub.written {
            assert!(out.path().join("Contact/index.html").exists());
        }
    }

    #[test]
    fn generate_reads_manifest_file() {
        let content = setup_content();
        let manifest = site::load(content.path()).unwrap();
        let temp = TempDir::new().unwrap();
        let manifest_path = temp.path().join("manifest.json");
        fs::write(&manifest_path, serde_json::to_string(&manifest).unwrap()).unwrap();
        let out = TempDir::new().unwrap();
        let report = generate(&manifest_path, content.path(), out.path()).unwrap();
        assert_eq!(report.pages.len(), manifest.routes.len());
    }

    #[test]
    fn source_date_epoch_pins_year() {
        assert_eq!(pinned_year(Some("0")), Some(1970));
        // 2024-02-29T12:00:00Z
        assert_eq!(pinned_year(Some("1709208000")), Some(2024));
        // 2025-12-31T23:59:59Z
        assert_eq!(pinned_year(Some("1767225599")), Some(2025));
        assert_eq!(pinned_year(Some(" 1767225600\n")), Some(2026));
        assert_eq!(pinned_year(Some("-86400")), Some(1969));
    }

    #[test]
    fn unusable_epoch_falls_back() {
        assert_eq!(pinned_year(None), None);
        assert_eq!(pinned_year(Some("yesterday")), None);
        // Far outside chrono's date range.
        assert_eq!(pinned_year(Some(&i64::MAX.to_string())), None);
    }
}
