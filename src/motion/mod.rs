//! Headless motion engine.
//!
//! Every temporal behavior on the site (scroll reveals, staggered entrances,
//! scroll-drawn lines, logo marquees, the moments carousel, job-card
//! accordions, statistic counters, the hero's pointer tilt) is modelled here
//! as plain state machines with no browser dependency. The few endless
//! decorative loops (gradient shift, map-pin pulse) and the moment-card
//! hover lift are plain CSS and need no state.
//!
//! Pages are rendered once at build time, so the engine runs in two roles:
//!
//! - At build time a [`PageScope`] collects each page's effects into a
//!   [`MotionPlan`] and bakes every target's timing into inline CSS custom
//!   properties.
//! - In tests the same scope replays scroll, frame and pointer events to
//!   check the behavior the plan describes.
//!
//! The browser side (`static/motion.js`) only reads the plan, watches the
//! trigger lines and flips classes; it makes no timing decisions of its own.
//!
//! ## Modules
//!
//! - [`easing`] — curves and their CSS equivalents
//! - [`style`] — animatable properties of one target
//! - [`timeline`] — staggered from/to tweens over ordered targets
//! - [`reveal`] — threshold triggers (`once`, `every-time`, `scrub`)
//! - [`marquee`] — endless duplicated tracks with pause/resume
//! - [`carousel`] — timer-driven slide index
//! - [`expand`] — at-most-one-open lists
//! - [`counter`] — count-up statistics
//! - [`tilt`] — pointer-following 3D lean
//! - [`plan`] — the serialized per-page plan
//! - [`scope`] — per-page ownership, staging and replay

pub mod carousel;
pub mod counter;
pub mod easing;
pub mod expand;
pub mod marquee;
pub mod plan;
pub mod reveal;
pub mod scope;
pub mod style;
pub mod tilt;
pub mod timeline;

pub use easing::Ease;
pub use marquee::Direction;
pub use plan::{MotionPlan, Repeat, ScrubProperty};
pub use scope::{MotionRuntime, PageScope, Staged};
pub use style::StyleState;
pub use tilt::Tilt;
pub use timeline::{TargetList, TweenSpec};
