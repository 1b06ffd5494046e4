//! Route slugs and output paths.
//!
//! Every page lives at a single-segment route (`about`, `oil-gas`) or at the
//! site root (empty slug). Slugs are derived from display names with
//! [`slugify`], and all links between generated pages are relative so the
//! output works from any base path, including `file://` previews.
//!
//! ```text
//! "Oil & Gas"                 → oil-gas
//! "BFSI"                      → bfsi
//! "Life @ Newel"              → life-newel
//! "Application Development"   → application-development
//! ```

/// Lowercase `name`, keep letters and digits, collapse every other run of
/// characters into a single dash, and trim dashes from both ends.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;
    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Whether `slug` is already in canonical form (and therefore usable as a
/// single path segment). The empty slug is the site root.
pub fn is_canonical_slug(slug: &str) -> bool {
    slugify(slug) == slug
}

/// Whether `segment` can be written as one output directory: non-empty, no
/// separators, no dot segments. Legacy mixed-case paths like `OurTeam` pass.
pub fn is_single_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\'])
}

/// Absolute URL path of a route, for display and canonical links.
pub fn page_path(slug: &str) -> String {
    if slug.is_empty() {
        "/".to_string()
    } else {
        format!("/{slug}/")
    }
}

/// Output file of a route, relative to the output directory.
pub fn page_file(slug: &str) -> String {
    if slug.is_empty() {
        "index.html".to_string()
    } else {
        format!("{slug}/index.html")
    }
}

/// Prefix that leads from the page at `slug` back to the output root.
pub fn root_prefix(slug: &str) -> &'static str {
    if slug.is_empty() { "./" } else { "../" }
}

/// Relative link from the page at `from` to the page at `to`.
pub fn href(from: &str, to: &str) -> String {
    let root = root_prefix(from);
    if to.is_empty() {
        root.to_string()
    } else {
        format!("{root}{to}/")
    }
}

/// Relative link from the page at `from` to a file at the output root.
pub fn asset_href(from: &str, file: &str) -> String {
    format!("{}{}", root_prefix(from), file.trim_start_matches('/'))
}
