//! Easing curves shared by the headless engine and the generated CSS.
//!
//! Each curve has two renditions: [`Ease::apply`] evaluates the exact curve
//! (used when sampling a timeline or a counter in Rust), and [`Ease::to_css`]
//! gives the CSS timing function the browser uses when it interpolates the
//! baked transition. The "powerN" names follow the usual animation-library
//! convention: `power2` is cubic, `power3` quartic, `power4` quintic.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Overshoot used by the stock `back.out` curve.
const BACK_DEFAULT: f64 = 1.70158;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// Constant velocity. Used by marquees.
    None,
    Power2Out,
    #[default]
    Power3Out,
    Power4Out,
    Power3InOut,
    SineInOut,
    /// Overshoots the end value by the given amount before settling.
    BackOut(f64),
}

impl Ease {
    /// Evaluate the curve at `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::None => t,
            Ease::Power2Out => 1.0 - (1.0 - t).powi(3),
            Ease::Power3Out => 1.0 - (1.0 - t).powi(4),
            Ease::Power4Out => 1.0 - (1.0 - t).powi(5),
            Ease::Power3InOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Ease::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
            Ease::BackOut(s) => {
                let u = t - 1.0;
                1.0 + (s + 1.0) * u.powi(3) + s * u.powi(2)
            }
        }
    }

    /// CSS `transition-timing-function` equivalent.
    ///
    /// `BackOut` is approximated by scaling the overshoot handle of the
    /// standard `easeOutBack` bezier in proportion to the requested amount.
    pub fn to_css(self) -> String {
        match self {
            Ease::None => "linear".to_string(),
            Ease::Power2Out => "cubic-bezier(0.215, 0.61, 0.355, 1)".to_string(),
            Ease::Power3Out => "cubic-bezier(0.165, 0.84, 0.44, 1)".to_string(),
            Ease::Power4Out => "cubic-bezier(0.23, 1, 0.32, 1)".to_string(),
            Ease::Power3InOut => "cubic-bezier(0.77, 0, 0.175, 1)".to_string(),
            Ease::SineInOut => "cubic-bezier(0.445, 0.05, 0.55, 0.95)".to_string(),
            Ease::BackOut(s) => {
                let y1 = 1.0 + 0.56 * (s / BACK_DEFAULT);
                format!("cubic-bezier(0.34, {:.2}, 0.64, 1)", y1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 7] = [
        Ease::None,
        Ease::Power2Out,
        Ease::Power3Out,
        Ease::Power4Out,
        Ease::Power3InOut,
        Ease::SineInOut,
        Ease::BackOut(1.4),
    ];

    #[test]
    fn every_curve_starts_at_zero_and_ends_at_one() {
        for ease in ALL {
            assert!(ease.apply(0.0).abs() < 1e-9, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-9, "{ease:?} at 1");
        }
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Ease::Power3Out.apply(-2.0), 0.0);
        assert_eq!(Ease::Power3Out.apply(5.0), 1.0);
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Ease::Power2Out.apply(0.5) > 0.5);
        assert!(Ease::Power4Out.apply(0.5) > Ease::Power2Out.apply(0.5));
    }

    #[test]
    fn back_out_overshoots() {
        let peak = (1..100)
            .map(|i| Ease::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(0.0_f64, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn sine_in_out_is_symmetric() {
        let a = Ease::SineInOut.apply(0.25);
        let b = Ease::SineInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-9);
    }

    #[test]
    fn css_names() {
        assert_eq!(Ease::None.to_css(), "linear");
        assert!(Ease::Power3Out.to_css().starts_with("cubic-bezier("));
        assert_eq!(
            Ease::BackOut(BACK_DEFAULT).to_css(),
            "cubic-bezier(0.34, 1.56, 0.64, 1)"
        );
    }
}
