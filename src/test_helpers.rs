//! Shared test utilities for the newel-site test suite.
//!
//! Provides a small but complete `site.toml`, temp-dir setup, and lookup
//! helpers that panic with a useful message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_content();
//! let manifest = site::load(tmp.path()).unwrap();
//!
//! let route = find_route(&manifest, "oil-gas");
//! assert_eq!(route.title, "Oil & Gas");
//! ```

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::site::Manifest;
use crate::types::Route;

// =========================================================================
// Fixture setup
// =========================================================================

/// Smallest `site.toml` that passes validation. Two of everything that is
/// a list, one vertical (`Oil & Gas`, slug derived), no moment images.
pub fn minimal_site_toml() -> String {
    r##"
[company]
name = "Newel Technologies"
legal_name = "Newel Technologies Pvt Ltd."
logo = "assets/Logo.png"
email = "enquiry@example.com"
address = ["504, Sunrise Business Park", "Thane West"]
registered_office = "B-9, Phase 2, Thane"
cin = "U00000MH0000PTC000000"

[[company.phones]]
display = "+91 96643 23316"
tel = "+919664323316"

[[company.socials]]
network = "linkedin"
url = "https://www.linkedin.com/"

[navbar]
links = [
    { label = "Home", route = "" },
    { label = "About", route = "about" },
    { label = "Contact", route = "contact" },
]
cta = { label = "Get a Quote", route = "contact" }

[hero]
headline = ["The Future", "of Cloud is"]
highlight = "AWS"
description = "Enterprise-grade migration."
ctas = [{ label = "Start", route = "contact" }]

[[hero.layers]]
number = "01"
title = "Migration"
desc = "Zero-downtime lift & shift"

[clients]
heading = "Our Clients"
tagline = "Trusted by innovators"
logos = [
    { name = "Alpha", image = "assets/clients/Alpha.png" },
    { name = "Beta", image = "assets/clients/Beta.png" },
]

[services]
heading = "Our Core Services"
intro = "What we do."

[[services.items]]
title = "Application Development"
desc = "Scalable apps."
image = "assets/services/s1.png"

[[services.items]]
title = "Data Analytics"
desc = "Insights from data."
image = "assets/services/s3.png"

[industries]
heading = "Industries We Serve"
intro = "Sectors."
link_label = "Explore Solutions"

[[industries.items]]
name = "Oil & Gas"
emoji = "⛽"
desc = "Energy."
vertical = "oil-gas"

[about]
heading = "About Us"
intro = "Our story."

[[about.entries]]
title = "Vision"
icon = "vision"
body = "Grow.\n\n- one\n- two"

[[about.entries]]
title = "Mission"
icon = "mission"
side = "right"
body = "Deliver."

[team]
eyebrow = "The Leadership"
heading = "Behind Newel"
intro = "Experts."
closing = { heading = "One Team.", body = "United." }

[[team.members]]
name = "Mr. A"
role = "CEO"
image = "assets/team/T1.jpg"
tagline = "Leads."

[[team.members]]
name = "Mr. B"
role = "COO"
image = "assets/team/T2.png"

[life]
heading = "Life @ Newel"
intro = "Together."
closing = { heading = "Work Hard", body = "Celebrate." }

[[life.moments]]
title = "Diwali Celebration"
description = "Lights and sweets."

[[life.moments]]
title = "Team Outings"
description = "Trips."

[careers]
heading = "Careers at Newel"
tagline = "Want to work with us?"
why_heading = "Why Newel?"
jobs_heading = "We Are Hiring"
apply = { label = "Apply Now →", route = "contact" }

[[careers.benefits]]
title = "Cutting-Edge Projects"
desc = "Modern stacks."
icon = "rocket"

[[careers.benefits]]
title = "Rapid Growth Path"
desc = "Grow fast."
icon = "sprout"

[[careers.jobs]]
title = "Business Analyst"
experience = "2+ Years"
skills = ["Agile", "Data Analysis"]

[[careers.jobs]]
title = ".NET Core Developer"
experience = "3+ Years"
skills = ["C#"]

[[careers.stats]]
label = "Projects Delivered"
value = "120+"
desc = "In last 3 years"

[[careers.stats]]
label = "Employee Satisfaction"
value = "94%"
desc = "From surveys"

[careers.cta]
heading = "Ready?"
body = "Join us."
link = { label = "Apply Today →", route = "contact" }

[contact]
heading = "Why Wait?"
highlight = "Let's Connect"
heading_tail = "Now"
intro = "Drop us a message."
info_heading = "Reach Us Directly"
office_label = "Registered & Head Office"
form_heading = "Let's Connect Now"
submit_label = "Send Message →"
sending_label = "Sending..."
success_message = "Thank you!"
failure_message = "Could not send."
socials_label = "Follow Us On"

[app_dev]
heading = "Application Development"
intro = ["Apps connect you to clients."]
link = { label = "Contact Us →", route = "contact" }
visual_title = "Build Once"
visual_caption = "Cross-Platform"
process_heading = "Our Process"
stack_heading = "Technologies"
steps = [
    { title = "IDEA", desc = "Analysis", icon = "💡" },
    { title = "TEST", desc = "Testing", icon = "🧪" },
]
stack = [{ name = "Flutter", icon = "🐦" }]

[app_dev.cta]
heading = "Ready to Build?"
body = "Let's go."
link = { label = "Get Started →", route = "contact" }

[[verticals]]
title = "Oil & Gas"
intro = ["Energy needs talent."]
challenges_heading = "Challenges We Solve"

[[verticals.challenges]]
title = "Safety & Compliance"
desc = "Standards."
icon = "shield"

[[verticals.challenges]]
title = "Unknown Icon"
desc = "Renders without an icon."
icon = "no-such-icon"

[verticals.cta]
heading = "Ready to Transform?"
body = "Partner with us."
link = { label = "Start the Conversation →", route = "contact" }

[footer]
services = ["Application Development", "Data Analytics"]
quick_links = [{ label = "Home", route = "" }, { label = "Contact Us", route = "contact" }]
industries = ["BFSI", "Oil & Gas"]

[[redirects]]
from = "Oil"
to = "oil-gas"

[[redirects]]
from = "Contact"
to = "contact"
"##
    .to_string()
}

/// Temp content root containing [`minimal_site_toml`] and an empty
/// `assets/` directory.
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("site.toml"), minimal_site_toml()).unwrap();
    fs::create_dir_all(tmp.path().join("assets")).unwrap();
    tmp
}

/// Write a solid-color PNG of the given size, creating parent directories.
pub fn write_png(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::from_pixel(width, height, image::Rgb([80, 153, 255]))
        .save(path)
        .unwrap();
}

// =========================================================================
// Manifest lookups: panic with a clear message on miss
// =========================================================================

/// Find a route by slug. Panics if not found.
pub fn find_route<'a>(manifest: &'a Manifest, slug: &str) -> &'a Route {
    manifest.route(slug).unwrap_or_else(|| {
        let slugs = route_slugs(manifest);
        panic!("route '{slug}' not found. Available: {slugs:?}")
    })
}

/// All route slugs in manifest order.
pub fn route_slugs(manifest: &Manifest) -> Vec<&str> {
    manifest.routes.iter().map(|r| r.slug.as_str()).collect()
}

// =========================================================================
// HTML assertions
// =========================================================================

/// Number of non-overlapping occurrences of `needle` in `html`.
pub fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

/// Assert that `needles` appear in `html` in the given order.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{needle}' not found after byte {from}"),
        }
    }
}
