//! Pointer tilt: a container leans in 3D toward the pointer.
//!
//! The pointer position is taken relative to the container's box, centered
//! so the middle is `(0, 0)` and the edges are `±0.5`, then scaled by
//! [`Tilt::strength`]. Horizontal offset turns the box around its Y axis,
//! vertical offset around its X axis (inverted, so the near edge dips).
//! Positions outside the box are clamped to its edges.

use super::easing::Ease;
use super::style::fmt_num;

/// A box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Degrees of rotation across the full width (or height) of the box.
    pub strength: f64,
    /// CSS perspective distance in pixels.
    pub perspective: f64,
    /// Seconds the box takes to settle on a new angle.
    pub duration: f64,
    pub ease: Ease,
}

impl Tilt {
    /// The landing hero's layer stack.
    pub const HERO: Tilt = Tilt {
        strength: 25.0,
        perspective: 1400.0,
        duration: 0.8,
        ease: Ease::Power2Out,
    };

    /// Angles for a pointer at `(x, y)`. `None` when the box has no area.
    pub fn angles(&self, x: f64, y: f64, bounds: Bounds) -> Option<TiltAngles> {
        if !(bounds.width > 0.0 && bounds.height > 0.0) {
            return None;
        }
        let dx = ((x - bounds.left) / bounds.width - 0.5).clamp(-0.5, 0.5);
        let dy = ((y - bounds.top) / bounds.height - 0.5).clamp(-0.5, 0.5);
        Some(TiltAngles {
            x: -dy * self.strength,
            y: dx * self.strength,
        })
    }
}

/// Rotation around each axis, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltAngles {
    pub x: f64,
    pub y: f64,
}

impl TiltAngles {
    pub const LEVEL: TiltAngles = TiltAngles { x: 0.0, y: 0.0 };

    pub fn to_css(self, perspective: f64) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            fmt_num(perspective),
            fmt_num(self.x),
            fmt_num(self.y)
        )
    }
}
