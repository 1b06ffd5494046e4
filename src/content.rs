//! Site content: every text, list and asset reference the pages show.
//!
//! All content lives in `content/site.toml` as literal data. It is parsed
//! once by the load stage into [`SiteContent`] and never mutated afterwards.
//! Every record uses `deny_unknown_fields` so a misspelled key fails the
//! build instead of silently dropping text from a page.
//!
//! ```toml
//! [company]
//! name = "Newel Technologies"
//! ...
//!
//! [[services.items]]
//! title = "Application Development"
//! desc = "We build scalable, secure, and high-performance applications ..."
//! image = "assets/services/s1.png"
//!
//! [[verticals]]
//! slug = "epc"                      # optional, derived from the title otherwise
//! title = "EPC (Engineering, Procurement & Construction)"
//! ...
//! ```
//!
//! ## Validation
//!
//! [`SiteContent::validate`] checks what serde can't:
//! - vertical slugs are canonical and unique
//! - every link (`route = "..."`) points at a generated page
//! - redirects are single path segments that don't shadow a page
//! - the moments carousel has at least one slide
//!
//! Unknown icon keys are deliberately not an error; they render no icon.

use crate::naming;
use crate::types::{NavLink, PageKind, Redirect};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Duplicate route slug '{0}'")]
    DuplicateSlug(String),
    #[error("Invalid route slug '{0}': use lowercase words joined by dashes")]
    InvalidSlug(String),
    #[error("{context} links to unknown route '{route}'")]
    UnknownRoute { context: String, route: String },
    #[error("Redirect source '{0}' must be a single path segment")]
    InvalidRedirect(String),
    #[error("Redirect source '{0}' is already a page")]
    RedirectShadowsRoute(String),
    #[error("Life moments carousel has no slides")]
    EmptyCarousel,
    #[error("{0} must not be empty")]
    Empty(&'static str),
}

/// Everything in `site.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteContent {
    pub company: Company,
    pub navbar: Navbar,
    pub hero: Hero,
    pub clients: ClientsSection,
    pub services: ServicesSection,
    pub industries: IndustriesSection,
    pub about: AboutSection,
    pub team: TeamSection,
    pub life: LifeSection,
    pub careers: CareersSection,
    pub contact: ContactSection,
    pub app_dev: AppDevSection,
    #[serde(default)]
    pub verticals: Vec<Vertical>,
    pub footer: FooterSection,
    #[serde(default)]
    pub redirects: Vec<Redirect>,
}

// ============================================================================
// Shared records
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Company {
    pub name: String,
    pub legal_name: String,
    /// Path relative to the content root.
    pub logo: String,
    pub email: String,
    pub phones: Vec<Phone>,
    pub address: Vec<String>,
    pub registered_office: String,
    pub cin: String,
    #[serde(default)]
    pub socials: Vec<Social>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Phone {
    pub display: String,
    /// Digits for the `tel:` link.
    pub tel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Social {
    /// Icon key: `facebook`, `twitter`, `linkedin`, `instagram`.
    pub network: String,
    pub url: String,
}

/// A heading, a short paragraph and one button.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CtaBlock {
    pub heading: String,
    pub body: String,
    pub link: NavLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Closing {
    pub heading: String,
    pub body: String,
}

/// Title + description + icon key; the shape of most card grids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Card {
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub icon: String,
}

// ============================================================================
// Sections
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Navbar {
    pub links: Vec<NavLink>,
    pub cta: NavLink,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Hero {
    /// Headline lines, revealed one after another.
    pub headline: Vec<String>,
    /// Final, accented headline line.
    pub highlight: String,
    pub description: String,
    pub ctas: Vec<NavLink>,
    pub layers: Vec<HeroLayer>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeroLayer {
    pub number: String,
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientsSection {
    pub heading: String,
    pub tagline: String,
    pub logos: Vec<Logo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServicesSection {
    pub heading: String,
    pub intro: String,
    pub items: Vec<Service>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Service {
    pub title: String,
    pub desc: String,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndustriesSection {
    pub heading: String,
    pub intro: String,
    pub link_label: String,
    pub items: Vec<Industry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Industry {
    pub name: String,
    pub emoji: String,
    pub desc: String,
    /// Route of the matching vertical page.
    pub vertical: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutSection {
    pub heading: String,
    pub intro: String,
    pub entries: Vec<AboutEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Side {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AboutEntry {
    pub title: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub side: Side,
    /// Markdown.
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TeamSection {
    pub eyebrow: String,
    pub heading: String,
    pub intro: String,
    pub members: Vec<Member>,
    pub closing: Closing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub image: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LifeSection {
    pub heading: String,
    pub intro: String,
    pub moments: Vec<Moment>,
    pub closing: Closing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Moment {
    pub title: String,
    pub description: String,
    /// Externally supplied photo. Absent renders a gradient placeholder.
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareersSection {
    pub heading: String,
    pub tagline: String,
    pub why_heading: String,
    pub benefits: Vec<Card>,
    pub jobs_heading: String,
    pub jobs: Vec<Job>,
    pub apply: NavLink,
    pub stats: Vec<Stat>,
    pub cta: CtaBlock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub title: String,
    pub experience: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Stat {
    pub label: String,
    /// Displayed value; its numeric part is counted up to (`"120+"`).
    pub value: String,
    pub desc: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactSection {
    pub heading: String,
    pub highlight: String,
    #[serde(default)]
    pub heading_tail: String,
    pub intro: String,
    pub info_heading: String,
    pub office_label: String,
    pub form_heading: String,
    pub submit_label: String,
    pub sending_label: String,
    pub success_message: String,
    pub failure_message: String,
    pub socials_label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppDevSection {
    pub heading: String,
    pub intro: Vec<String>,
    pub link: NavLink,
    pub visual_title: String,
    pub visual_caption: String,
    pub process_heading: String,
    pub steps: Vec<Card>,
    pub stack_heading: String,
    pub stack: Vec<Tech>,
    pub cta: CtaBlock,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tech {
    pub name: String,
    pub icon: String,
}

/// An industry vertical page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Vertical {
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    pub intro: Vec<String>,
    pub challenges_heading: String,
    pub challenges: Vec<Card>,
    pub cta: CtaBlock,
}

impl Vertical {
    /// Explicit slug, or the title slugified.
    pub fn route_slug(&self) -> String {
        self.slug
            .clone()
            .unwrap_or_else(|| naming::slugify(&self.title))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FooterSection {
    pub services: Vec<String>,
    pub quick_links: Vec<NavLink>,
    pub industries: Vec<String>,
}

// ============================================================================
// Loading and validation
// ============================================================================

/// Read and parse `site.toml`. Does not validate.
pub fn load_content(path: &Path) -> Result<SiteContent, ContentError> {
    let text = fs::read_to_string(path)?;
    parse_content(&text)
}

pub fn parse_content(text: &str) -> Result<SiteContent, ContentError> {
    Ok(toml::from_str(text)?)
}

impl SiteContent {
    /// Slugs of every generated page: the fixed pages followed by verticals.
    pub fn route_slugs(&self) -> Vec<String> {
        PageKind::FIXED
            .iter()
            .filter_map(|k| k.fixed_slug())
            .map(str::to_string)
            .chain(self.verticals.iter().map(Vertical::route_slug))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        if self.hero.headline.is_empty() {
            return Err(ContentError::Empty("hero.headline"));
        }
        if self.navbar.links.is_empty() {
            return Err(ContentError::Empty("navbar.links"));
        }
        if self.life.moments.is_empty() {
            return Err(ContentError::EmptyCarousel);
        }

        let mut seen = HashSet::new();
        for slug in self.route_slugs() {
            if !naming::is_canonical_slug(&slug) {
                return Err(ContentError::InvalidSlug(slug));
            }
            if !seen.insert(slug.clone()) {
                return Err(ContentError::DuplicateSlug(slug));
            }
        }

        for (context, link) in self.links() {
            if !seen.contains(&link.route) {
                return Err(ContentError::UnknownRoute {
                    context,
                    route: link.route.clone(),
                });
            }
        }
        for item in &self.industries.items {
            if !seen.contains(&item.vertical) {
                return Err(ContentError::UnknownRoute {
                    context: format!("industry '{}'", item.name),
                    route: item.vertical.clone(),
                });
            }
        }

        for redirect in &self.redirects {
            if !naming::is_single_segment(&redirect.from) {
                return Err(ContentError::InvalidRedirect(redirect.from.clone()));
            }
            if seen.contains(&redirect.from) {
                return Err(ContentError::RedirectShadowsRoute(redirect.from.clone()));
            }
            if !seen.contains(&redirect.to) {
                return Err(ContentError::UnknownRoute {
                    context: format!("redirect '{}'", redirect.from),
                    route: redirect.to.clone(),
                });
            }
        }
        Ok(())
    }

    /// Every internal link with a label for error messages.
    fn links(&self) -> Vec<(String, &NavLink)> {
        let mut links: Vec<(String, &NavLink)> = Vec::new();
        for link in &self.navbar.links {
            links.push((format!("navbar link '{}'", link.label), link));
        }
        links.push(("navbar call to action".into(), &self.navbar.cta));
        for link in &self.hero.ctas {
            links.push((format!("hero button '{}'", link.label), link));
        }
        for link in &self.footer.quick_links {
            links.push((format!("footer link '{}'", link.label), link));
        }
        links.push(("careers apply button".into(), &self.careers.apply));
        links.push(("careers call to action".into(), &self.careers.cta.link));
        links.push(("app development button".into(), &self.app_dev.link));
        links.push(("app development call to action".into(), &self.app_dev.cta.link));
        for v in &self.verticals {
            links.push((format!("vertical '{}' call to action", v.title), &v.cta.link));
        }
        links
    }

    /// Content-root-relative paths of every referenced image.
    pub fn image_refs(&self) -> Vec<&str> {
        let mut refs = vec![self.company.logo.as_str()];
        refs.extend(self.clients.logos.iter().map(|l| l.image.as_str()));
        refs.extend(self.services.items.iter().map(|s| s.image.as_str()));
        refs.extend(self.team.members.iter().map(|m| m.image.as_str()));
        refs.extend(self.life.moments.iter().filter_map(|m| m.image.as_deref()));
        refs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::minimal_site_toml;

    fn sample() -> SiteContent {
        parse_content(&minimal_site_toml()).unwrap()
    }

    #[test]
    fn minimal_content_is_valid() {
        sample().validate().unwrap();
    }

    #[test]
    fn unknown_key_rejected() {
        let text = minimal_site_toml().replace(
            "[company]\n",
            "[company]\nslogan = \"nope\"\n",
        );
        assert!(matches!(parse_content(&text), Err(ContentError::Toml(_))));
    }

    #[test]
    fn vertical_slug_derived_from_title() {
        let content = sample();
        let slugs = content.route_slugs();
        assert!(slugs.contains(&"oil-gas".to_string()));
        assert_eq!(slugs[0], "");
        assert_eq!(slugs.len(), PageKind::FIXED.len() + content.verticals.len());
    }

    #[test]
    fn duplicate_vertical_slug_rejected() {
        let mut content = sample();
        let mut dup = content.verticals[0].clone();
        dup.slug = None;
        dup.title = "Oil & Gas".into();
        content.verticals.push(dup);
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateSlug(s)) if s == "oil-gas"
        ));
    }

    #[test]
    fn vertical_cannot_take_fixed_slug() {
        let mut content = sample();
        content.verticals[0].slug = Some("careers".into());
        assert!(matches!(
            content.validate(),
            Err(ContentError::DuplicateSlug(s)) if s == "careers"
        ));
    }

    #[test]
    fn non_canonical_slug_rejected() {
        let mut content = sample();
        content.verticals[0].slug = Some("Oil".into());
        assert!(matches!(content.validate(), Err(ContentError::InvalidSlug(_))));
    }

    #[test]
    fn unknown_nav_route_rejected() {
        let mut content = sample();
        content.navbar.links[0].route = "blog".into();
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("unknown route 'blog'"));
    }

    #[test]
    fn unknown_industry_vertical_rejected() {
        let mut content = sample();
        content.industries.items[0].vertical = "mining".into();
        assert!(matches!(
            content.validate(),
            Err(ContentError::UnknownRoute { route, .. }) if route == "mining"
        ));
    }

    #[test]
    fn empty_carousel_rejected() {
        let mut content = sample();
        content.life.moments.clear();
        assert!(matches!(content.validate(), Err(ContentError::EmptyCarousel)));
    }

    #[test]
    fn redirect_rules() {
        let mut content = sample();
        content.redirects = vec![Redirect {
            from: "a/b".into(),
            to: "contact".into(),
        }];
        assert!(matches!(content.validate(), Err(ContentError::InvalidRedirect(_))));

        content.redirects[0].from = "contact".into();
        assert!(matches!(
            content.validate(),
            Err(ContentError::RedirectShadowsRoute(_))
        ));

        content.redirects[0].from = "Contact".into();
        content.validate().unwrap();

        content.redirects[0].to = "nowhere".into();
        assert!(matches!(content.validate(), Err(ContentError::UnknownRoute { .. })));
    }

    #[test]
    fn missing_life_image_is_none() {
        let content = sample();
        assert!(content.life.moments[0].image.is_none());
    }

    #[test]
    fn image_refs_skip_absent_moment_images() {
        let content = sample();
        let refs = content.image_refs();
        assert_eq!(refs[0], content.company.logo);
        assert_eq!(
            refs.len(),
            1 + content.clients.logos.len()
                + content.services.items.len()
                + content.team.members.len()
        );
    }
}
