//! Serializable per-page motion plans.
//!
//! A [`MotionPlan`] is everything the browser driver needs to run a page's
//! motion: which elements trigger what, at which viewport line, with which
//! timing. It is embedded in each page as
//! `<script type="application/json" id="motion-plan">` and is also what
//! `newel-site plan <route>` prints.
//!
//! Per-target timing (delay, duration, easing, starting transform) is not
//! repeated here; it is baked into each target's inline CSS custom
//! properties by [`target_style`] so CSS transitions do the interpolation.

use super::easing::Ease;
use super::marquee::Direction;
use super::style::{StyleState, fmt_num};
use super::tilt::Tilt;
use super::timeline::ScheduledTween;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionPlan {
    pub route: String,
    /// Pixels of scroll after which the navbar gets its scrolled style.
    pub nav_scroll_threshold: f64,
    /// Whether the driver should skip motion for `prefers-reduced-motion`.
    pub reduced_motion: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reveals: Vec<RevealPlan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scrubs: Vec<ScrubPlan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub carousels: Vec<CarouselPlan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub marquees: Vec<MarqueePlan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub accordions: Vec<AccordionPlan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub counters: Vec<CounterPlan>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tilts: Vec<TiltPlan>,
}

impl MotionPlan {
    pub fn new(route: &str, nav_scroll_threshold: f64, reduced_motion: bool) -> Self {
        Self {
            route: route.to_string(),
            nav_scroll_threshold,
            reduced_motion,
            reveals: Vec::new(),
            scrubs: Vec::new(),
            carousels: Vec::new(),
            marquees: Vec::new(),
            accordions: Vec::new(),
            counters: Vec::new(),
            tilts: Vec::new(),
        }
    }

    /// Number of animated targets across all reveals.
    pub fn target_count(&self) -> usize {
        self.reveals.iter().map(|r| r.targets.len()).sum()
    }

    /// JSON for embedding inside a `<script>` element.
    ///
    /// `<` is escaped so no string value can close the script early.
    pub fn to_embedded_json(&self) -> Result<String, serde_json::Error> {
        Ok(serde_json::to_string(self)?.replace('<', "\\u003c"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Repeat {
    Once,
    EveryTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealPlan {
    /// Element whose position is checked against the line.
    pub trigger: String,
    /// Percent of viewport height.
    pub threshold: f64,
    pub repeat: Repeat,
    pub targets: Vec<TargetPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetPlan {
    pub key: String,
    pub start: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl From<&ScheduledTween> for TargetPlan {
    fn from(slot: &ScheduledTween) -> Self {
        Self {
            key: slot.key.clone(),
            start: slot.start,
            duration: slot.duration(),
            ease: slot.ease,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScrubProperty {
    /// Vertical line drawn from 0 to 100 % of its container.
    Height,
    /// Horizontal line drawn from 0 to 100 % of its container.
    Width,
    /// Horizontal strip translated by its overflow width.
    TranslateX,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrubPlan {
    pub trigger: String,
    pub start: f64,
    pub end: f64,
    pub property: ScrubProperty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselPlan {
    pub id: String,
    pub len: usize,
    pub interval_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarqueePlan {
    /// Hover region that pauses every track in the group.
    pub region: String,
    pub tracks: Vec<MarqueeTrackPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarqueeTrackPlan {
    pub id: String,
    pub direction: Direction,
    pub loop_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccordionPlan {
    pub id: String,
    pub len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterPlan {
    pub id: String,
    /// Text shown once the count finishes.
    pub display: String,
    pub target: f64,
    pub prefix: String,
    pub suffix: String,
    pub threshold: f64,
    pub duration: f64,
    pub ease: Ease,
}

/// A container that follows the pointer. The driver listens on the window
/// and eases the container toward the angles [`Tilt::angles`] gives.
///
/// [`Tilt::angles`]: super::tilt::Tilt::angles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TiltPlan {
    pub id: String,
    pub strength: f64,
    pub perspective: f64,
    pub duration: f64,
    pub ease: Ease,
    /// CSS timing function for `ease`.
    pub ease_css: String,
}

impl TiltPlan {
    pub fn new(id: &str, tilt: &Tilt) -> Self {
        Self {
            id: id.to_string(),
            strength: tilt.strength,
            perspective: tilt.perspective,
            duration: tilt.duration,
            ease: tilt.ease,
            ease_css: tilt.ease.to_css(),
        }
    }
}

/// Inline style carrying one target's baked transition.
///
/// ```text
/// --m-delay:0.18s;--m-duration:1.2s;--m-ease:cubic-bezier(...);--m-from:translate(-30px, 60px);--m-opacity:0
/// ```
pub fn target_style(slot: &ScheduledTween) -> String {
    let mut vars = vec![
        format!("--m-delay:{}s", fmt_num(slot.start)),
        format!("--m-duration:{}s", fmt_num(slot.duration())),
        format!("--m-ease:{}", slot.ease.to_css()),
        format!("--m-from:{}", slot.from.to_css_transform()),
        format!("--m-opacity:{}", fmt_num(slot.from.opacity)),
    ];
    if slot.from.clip > 0.0 {
        vars.push(format!("--m-clip:{}", slot.from.to_css_clip()));
    }
    if slot.to != StyleState::REST {
        vars.push(format!("--m-to:{}", slot.to.to_css_transform()));
        vars.push(format!("--m-to-opacity:{}", fmt_num(slot.to.opacity)));
    }
    vars.join(";")
}
