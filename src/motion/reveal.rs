//! Scroll-position triggers.
//!
//! A [`RevealTrigger`] watches one target against a horizontal line drawn at
//! a percentage of the viewport height. Each scroll observation hands it the
//! target's current bounding box (or `None` when the target is not in the
//! document) and gets back at most one [`RevealEvent`].
//!
//! | Policy      | Emits                                              |
//! |-------------|----------------------------------------------------|
//! | `Once`      | a single `Enter`, the first time the line is crossed |
//! | `EveryTime` | `Enter` / `Leave` on every crossing                |
//! | `Scrub`     | `Progress(p)` whenever the scroll-linked value moves |

use serde::{Deserialize, Serialize};

/// Trigger line as a percentage of viewport height, measured from the top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Threshold(pub f64);

impl Threshold {
    pub fn new(percent: f64) -> Self {
        Threshold(percent.clamp(0.0, 100.0))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Pixel position of the line in a viewport of the given height.
    pub fn line(self, viewport: &Viewport) -> f64 {
        viewport.height * self.0 / 100.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum RepeatPolicy {
    Once,
    EveryTime,
    /// Progress runs from 0 when the target's top reaches `start` to 1 when
    /// its bottom reaches `end`.
    Scrub { start: Threshold, end: Threshold },
}

impl RepeatPolicy {
    pub fn scrub(start: f64, end: f64) -> Self {
        RepeatPolicy::Scrub {
            start: Threshold::new(start),
            end: Threshold::new(end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub height: f64,
}

/// A target's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealEvent {
    Enter,
    Leave,
    Progress(f64),
}

#[derive(Debug, Clone)]
pub struct RevealTrigger {
    threshold: Threshold,
    policy: RepeatPolicy,
    inside: bool,
    fired: u32,
    last_progress: Option<f64>,
    detached: bool,
}

impl RevealTrigger {
    pub fn new(threshold: Threshold, policy: RepeatPolicy) -> Self {
        Self {
            threshold,
            policy,
            inside: false,
            fired: 0,
            last_progress: None,
            detached: false,
        }
    }

    pub fn once(percent: f64) -> Self {
        Self::new(Threshold::new(percent), RepeatPolicy::Once)
    }

    pub fn every_time(percent: f64) -> Self {
        Self::new(Threshold::new(percent), RepeatPolicy::EveryTime)
    }

    pub fn scrub(start: f64, end: f64) -> Self {
        Self::new(Threshold::new(start), RepeatPolicy::scrub(start, end))
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn policy(&self) -> RepeatPolicy {
        self.policy
    }

    /// Number of `Enter` events emitted so far.
    pub fn fired(&self) -> u32 {
        self.fired
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Stop observing. Every later observation is a no-op.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    /// Check the target against the trigger line.
    pub fn observe(&mut self, viewport: &Viewport, target: Option<Rect>) -> Option<RevealEvent> {
        if self.detached {
            return None;
        }
        let rect = target?;
        let crossed = rect.top <= self.threshold.line(viewport);

        match self.policy {
            RepeatPolicy::Once => {
                if crossed && self.fired == 0 {
                    self.fired = 1;
                    self.inside = true;
                    Some(RevealEvent::Enter)
                } else {
                    None
                }
            }
            RepeatPolicy::EveryTime => {
                if crossed && !self.inside {
                    self.inside = true;
                    self.fired += 1;
                    Some(RevealEvent::Enter)
                } else if !crossed && self.inside {
                    self.inside = false;
                    Some(RevealEvent::Leave)
                } else {
                    None
                }
            }
            RepeatPolicy::Scrub { start, end } => {
                let p = scrub_progress(rect, start.line(viewport), end.line(viewport));
                if self.last_progress == Some(p) {
                    None
                } else {
                    self.last_progress = Some(p);
                    Some(RevealEvent::Progress(p))
                }
            }
        }
    }
}

/// Linear progress between "top reaches `start_px`" and "bottom reaches
/// `end_px`", clamped to `[0, 1]`.
///
/// Expressed as positions of the target's top edge, progress is 0 at
/// `from_top` and 1 at `to_top`. A range whose end comes before its start is
/// swapped; an empty range is a step at the start line.
pub fn scrub_progress(rect: Rect, start_px: f64, end_px: f64) -> f64 {
    let mut from_top = start_px;
    let mut to_top = end_px - rect.height;
    if to_top > from_top {
        std::mem::swap(&mut from_top, &mut to_top);
    }
    let distance = from_top - to_top;
    if distance <= 0.0 {
        return if rect.top <= from_top { 1.0 } else { 0.0 };
    }
    ((from_top - rect.top) / distance).clamp(0.0, 1.0)
}
