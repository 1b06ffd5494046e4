//! Animatable visual properties of a single target.

use serde::{Deserialize, Serialize};

/// The subset of visual properties the site animates.
///
/// Offsets are in pixels except `x_percent`, which is relative to the
/// target's own width (used by marquee tracks). `clip` is the percentage of
/// the target hidden from the right edge, driving wipe-style headline reveals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub x_percent: f64,
    pub scale: f64,
    pub rotation: f64,
    pub clip: f64,
}

impl StyleState {
    /// Resting state: fully visible, untransformed.
    pub const REST: StyleState = StyleState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        x_percent: 0.0,
        scale: 1.0,
        rotation: 0.0,
        clip: 0.0,
    };

    /// Invisible but otherwise at rest. Starting point for most entrances.
    pub fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn scaled(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn clipped(mut self, percent: f64) -> Self {
        self.clip = percent.clamp(0.0, 100.0);
        self
    }

    /// Linear interpolation between two states; `t` is clamped to `[0, 1]`.
    ///
    /// Callers apply easing to `t` first.
    pub fn lerp(&self, to: &StyleState, t: f64) -> StyleState {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        StyleState {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            x_percent: mix(self.x_percent, to.x_percent),
            scale: mix(self.scale, to.scale),
            rotation: mix(self.rotation, to.rotation),
            clip: mix(self.clip, to.clip),
        }
    }

    /// CSS `transform` value, omitting identity components. `none` at rest.
    pub fn to_css_transform(&self) -> String {
        let mut parts = Vec::new();
        if self.x_percent != 0.0 {
            parts.push(format!("translateX({}%)", fmt_num(self.x_percent)));
        }
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!(
                "translate({}px, {}px)",
                fmt_num(self.x),
                fmt_num(self.y)
            ));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", fmt_num(self.scale)));
        }
        if self.rotation != 0.0 {
            parts.push(format!("rotate({}deg)", fmt_num(self.rotation)));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// CSS `clip-path` value.
    pub fn to_css_clip(&self) -> String {
        format!("inset(0 {}% 0 0)", fmt_num(self.clip))
    }
}

impl Default for StyleState {
    fn default() -> Self {
        Self::REST
    }
}

/// Format a number for CSS: integers without a fractional part, everything
/// else trimmed to at most three decimals.
pub fn fmt_num(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.3}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_has_no_transform() {
        assert_eq!(StyleState::REST.to_css_transform(), "none");
    }

    #[test]
    fn transform_lists_only_changed_components() {
        let s = StyleState::hidden().offset(-30.0, 60.0).scaled(0.92).rotated(-2.0);
        assert_eq!(
            s.to_css_transform(),
            "translate(-30px, 60px) scale(0.92) rotate(-2deg)"
        );
    }

    #[test]
    fn lerp_halfway() {
        let from = StyleState::hidden().offset(0.0, 100.0);
        let mid = from.lerp(&StyleState::REST, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.y, 50.0);
        assert_eq!(mid.scale, 1.0);
    }

    #[test]
    fn lerp_clamps_progress() {
        let from = StyleState::hidden();
        assert_eq!(from.lerp(&StyleState::REST, 3.0), StyleState::REST);
        assert_eq!(from.lerp(&StyleState::REST, -1.0), from);
    }

    #[test]
    fn clip_is_bounded() {
        assert_eq!(StyleState::REST.clipped(140.0).clip, 100.0);
        assert_eq!(StyleState::REST.clipped(100.0).to_css_clip(), "inset(0 100% 0 0)");
    }

    #[test]
    fn number_formatting() {
        assert_eq!(fmt_num(2.0), "2");
        assert_eq!(fmt_num(0.18), "0.18");
        assert_eq!(fmt_num(1.0 / 3.0), "0.333");
        assert_eq!(fmt_num(-50.0), "-50");
    }
}
