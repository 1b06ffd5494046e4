//! Content loading and manifest generation.
//!
//! Stage 1 of the build pipeline. Reads the content directory and produces a
//! [`Manifest`] that the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/
//! ├── site.toml               # All page text and lists (required)
//! ├── config.toml             # Site configuration (optional)
//! └── assets/                 # Logos, photos, icons → copied to dist/assets/
//!     ├── Logo.png
//!     ├── clients/
//!     │   ├── Bajaj.png
//!     │   └── ...
//!     └── team/
//!         └── T1.jpg
//! ```
//!
//! ## Output
//!
//! The [`Manifest`] holds:
//! - the route table (fixed pages, then one page per vertical)
//! - navigation links and legacy redirects
//! - every discovered asset with its pixel dimensions when it is an image
//! - the parsed content and the resolved configuration
//!
//! Images referenced from `site.toml` but missing on disk are not an error:
//! assets are supplied externally. They are listed by
//! [`Manifest::missing_images`] and reported by the CLI.

use crate::config::{self, SiteConfig};
use crate::content::{self, SiteContent};
use crate::types::{NavLink, PageKind, Redirect, Route};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content error: {0}")]
    Content(#[from] content::ContentError),
    #[error("No site.toml found in {0}")]
    MissingContent(PathBuf),
}

/// Manifest output from the load stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub routes: Vec<Route>,
    pub navigation: Vec<NavLink>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redirects: Vec<Redirect>,
    #[serde(default)]
    pub assets: Vec<Asset>,
    pub content: SiteContent,
    pub config: SiteConfig,
}

/// A file under `assets/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Relative to the content root, forward slashes (`assets/team/T1.jpg`).
    pub path: String,
    pub bytes: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<(u32, u32)>,
}

const CONTENT_FILE: &str = "site.toml";
const ASSETS_DIR: &str = "assets";
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

pub fn load(root: &Path) -> Result<Manifest, LoadError> {
    let content_path = root.join(CONTENT_FILE);
    if !content_path.is_file() {
        return Err(LoadError::MissingContent(root.to_path_buf()));
    }

    let config = config::load_config(root)?;
    let content = content::load_content(&content_path)?;
    content.validate()?;

    let assets = discover_assets(root)?;
    let routes = build_routes(&content);

    Ok(Manifest {
        routes,
        navigation: content.navbar.links.clone(),
        redirects: content.redirects.clone(),
        assets,
        content,
        config,
    })
}

/// Route table: fixed pages in their fixed order, then verticals in
/// content order.
///
/// A route's title is its navbar label when it has one (so the `<title>`
/// matches what visitors clicked), otherwise its section heading.
pub fn build_routes(content: &SiteContent) -> Vec<Route> {
    let nav_label = |slug: &str| {
        content
            .navbar
            .links
            .iter()
            .find(|l| l.route == slug)
            .map(|l| l.label.clone())
    };

    let mut routes: Vec<Route> = PageKind::FIXED
        .iter()
        .filter_map(|&kind| {
            let slug = kind.fixed_slug()?;
            let heading = match kind {
                PageKind::Landing => &content.company.name,
                PageKind::About => &content.about.heading,
                PageKind::Services => &content.services.heading,
                PageKind::Industries => &content.industries.heading,
                PageKind::Team => &content.team.heading,
                PageKind::Life => &content.life.heading,
                PageKind::Careers => &content.careers.heading,
                PageKind::Contact => &content.contact.info_heading,
                PageKind::AppDev => &content.app_dev.heading,
                PageKind::Vertical => return None,
            };
            Some(Route {
                slug: slug.to_string(),
                title: nav_label(slug).unwrap_or_else(|| heading.clone()),
                kind,
                vertical: None,
            })
        })
        .collect();

    routes.extend(content.verticals.iter().enumerate().map(|(i, v)| Route {
        slug: v.route_slug(),
        title: v.title.clone(),
        kind: PageKind::Vertical,
        vertical: Some(i),
    }));
    routes
}

/// Walk `assets/` and probe image dimensions.
///
/// Hidden files are skipped. Output is sorted by path.
fn discover_assets(root: &Path) -> Result<Vec<Asset>, LoadError> {
    let dir = root.join(ASSETS_DIR);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut assets = Vec::new();
    let walker = WalkDir::new(&dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let rel = path.strip_prefix(root).unwrap_or(path);
        let rel = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let is_image = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .is_some_and(|e| IMAGE_EXTENSIONS.contains(&e.as_str()));
        let dimensions = if is_image {
            image::image_dimensions(path).ok()
        } else {
            None
        };
        assets.push(Asset {
            path: rel,
            bytes: entry.metadata()?.len(),
            dimensions,
        });
    }
    Ok(assets)
}

impl Manifest {
    pub fn asset(&self, path: &str) -> Option<&Asset> {
        self.assets.iter().find(|a| a.path == path)
    }

    pub fn dimensions(&self, path: &str) -> Option<(u32, u32)> {
        self.asset(path).and_then(|a| a.dimensions)
    }

    /// Images referenced from content that are not on disk.
    pub fn missing_images(&self) -> Vec<&str> {
        self.content
            .image_refs()
            .into_iter()
            .filter(|r| self.asset(r).is_none())
            .collect()
    }

    pub fn route(&self, slug: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.slug == slug)
    }
}
