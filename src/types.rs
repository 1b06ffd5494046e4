//! Shared types used across both pipeline stages.
//!
//! These types are serialized into `manifest.json` by the load stage and read
//! back by the generate stage.

use serde::{Deserialize, Serialize};

/// Which page template a route renders with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageKind {
    Landing,
    About,
    Services,
    Industries,
    Team,
    Life,
    Careers,
    Contact,
    AppDev,
    /// Industry vertical; `Route::vertical` indexes `SiteContent::verticals`.
    Vertical,
}

impl PageKind {
    /// The fixed pages, in the order they are generated.
    pub const FIXED: [PageKind; 9] = [
        PageKind::Landing,
        PageKind::About,
        PageKind::Services,
        PageKind::Industries,
        PageKind::Team,
        PageKind::Life,
        PageKind::Careers,
        PageKind::Contact,
        PageKind::AppDev,
    ];

    /// Route slug of a fixed page. Verticals derive theirs from content.
    pub fn fixed_slug(self) -> Option<&'static str> {
        Some(match self {
            PageKind::Landing => "",
            PageKind::About => "about",
            PageKind::Services => "services",
            PageKind::Industries => "industries",
            PageKind::Team => "our-team",
            PageKind::Life => "life-at-newel",
            PageKind::Careers => "careers",
            PageKind::Contact => "contact",
            PageKind::AppDev => "app-development",
            PageKind::Vertical => return None,
        })
    }
}

/// One generated page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Empty for the landing page.
    pub slug: String,
    /// Page title, before the site-wide suffix.
    pub title: String,
    pub kind: PageKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<usize>,
}

/// Navigation entry pointing at a route slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub label: String,
    pub route: String,
}

/// A legacy path that forwards to a canonical route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Redirect {
    /// Single path segment, kept as written (`OurTeam`).
    pub from: String,
    /// Canonical route slug.
    pub to: String,
}
