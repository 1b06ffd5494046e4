//! Staggered from/to timelines over an ordered list of targets.
//!
//! A [`Timeline`] transitions every registered target from one
//! [`StyleState`] to another. Target `i` starts at `delay + i * stagger`,
//! and may take a parity-dependent horizontal offset ([`Alternate`]) so even
//! items enter from one side and odd items from the other.
//!
//! Targets are collected up front through a [`TargetList`]: each child
//! registers itself once, in render order, and the list is sealed before the
//! timeline reads it. Nothing writes into the list after sealing.
//!
//! Playback is idempotent within a page lifetime: calling [`Timeline::play`]
//! on a timeline that is already running or finished does nothing.

use super::easing::Ease;
use super::style::StyleState;
use serde::Serialize;

/// Ordered, append-only collection of target keys.
#[derive(Debug, Default, Clone)]
pub struct TargetList {
    keys: Vec<String>,
}

impl TargetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the next child. Returns its index in the list.
    pub fn register(&mut self, key: impl Into<String>) -> usize {
        self.keys.push(key.into());
        self.keys.len() - 1
    }

    /// Register `count` children named `{prefix}-{i}`.
    pub fn numbered(prefix: &str, count: usize) -> Self {
        let mut list = Self::new();
        for i in 0..count {
            list.register(format!("{prefix}-{i}"));
        }
        list
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Freeze the list. The timeline only ever sees sealed targets.
    pub fn seal(self) -> Targets {
        Targets(self.keys)
    }
}

/// A sealed, read-only list of target keys.
#[derive(Debug, Clone, PartialEq)]
pub struct Targets(Vec<String>);

impl Targets {
    pub fn keys(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Horizontal start offsets that alternate by index parity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alternate {
    pub even_x: f64,
    pub odd_x: f64,
}

impl Alternate {
    pub fn x_for(&self, index: usize) -> f64 {
        if index % 2 == 0 { self.even_x } else { self.odd_x }
    }
}

/// Declarative description of one tween applied to every target.
#[derive(Debug, Clone, PartialEq)]
pub struct TweenSpec {
    pub from: StyleState,
    pub to: StyleState,
    /// Seconds.
    pub duration: f64,
    pub ease: Ease,
    /// Seconds before the first target starts.
    pub delay: f64,
    /// Seconds between consecutive targets.
    pub stagger: f64,
    pub alternate: Option<Alternate>,
}

impl TweenSpec {
    /// Entrance from `from` to rest.
    pub fn entrance(from: StyleState, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to: StyleState::REST,
            duration,
            ease,
            delay: 0.0,
            stagger: 0.0,
            alternate: None,
        }
    }

    pub fn delay(mut self, seconds: f64) -> Self {
        self.delay = seconds;
        self
    }

    pub fn stagger(mut self, seconds: f64) -> Self {
        self.stagger = seconds;
        self
    }

    pub fn alternate(mut self, even_x: f64, odd_x: f64) -> Self {
        self.alternate = Some(Alternate { even_x, odd_x });
        self
    }

    /// This tween as it applies to the target at `index`, folded into a
    /// single-target tween: stagger becomes extra delay and the alternate
    /// offset is written into `from`.
    pub fn for_index(&self, index: usize) -> TweenSpec {
        let mut from = self.from;
        if let Some(alt) = self.alternate {
            from.x = alt.x_for(index);
        }
        TweenSpec {
            from,
            to: self.to,
            duration: self.duration,
            ease: self.ease,
            delay: self.delay + self.stagger * index as f64,
            stagger: 0.0,
            alternate: None,
        }
    }
}

/// One target's resolved slot in the timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledTween {
    pub index: usize,
    pub key: String,
    /// Seconds from timeline start.
    pub start: f64,
    pub end: f64,
    pub from: StyleState,
    pub to: StyleState,
    pub ease: Ease,
}

impl ScheduledTween {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// State of this target `elapsed` seconds after the timeline started.
    pub fn state_at(&self, elapsed: f64) -> StyleState {
        if elapsed <= self.start {
            return self.from;
        }
        if elapsed >= self.end || self.duration() <= 0.0 {
            return self.to;
        }
        let t = (elapsed - self.start) / self.duration();
        self.from.lerp(&self.to, self.ease.apply(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayState {
    Idle,
    Playing { elapsed: f64 },
    Finished,
}

#[derive(Debug, Clone)]
pub struct Timeline {
    targets: Targets,
    spec: TweenSpec,
    state: PlayState,
}

impl Timeline {
    pub fn new(targets: Targets, spec: TweenSpec) -> Self {
        Self {
            targets,
            spec,
            state: PlayState::Idle,
        }
    }

    /// Timeline over a single target.
    pub fn single(key: impl Into<String>, spec: TweenSpec) -> Self {
        let mut list = TargetList::new();
        list.register(key);
        Self::new(list.seal(), spec)
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn spec(&self) -> &TweenSpec {
        &self.spec
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    /// Resolve every target's start, end and starting state, in index order.
    pub fn schedule(&self) -> Vec<ScheduledTween> {
        self.targets
            .keys()
            .iter()
            .enumerate()
            .map(|(index, key)| {
                let slot = self.spec.for_index(index);
                ScheduledTween {
                    index,
                    key: key.clone(),
                    start: slot.delay,
                    end: slot.delay + slot.duration,
                    from: slot.from,
                    to: slot.to,
                    ease: slot.ease,
                }
            })
            .collect()
    }

    /// Time at which the last target comes to rest.
    pub fn total_duration(&self) -> f64 {
        self.schedule()
            .iter()
            .map(|s| s.end)
            .fold(0.0, f64::max)
    }

    /// Start playback. No-op when already playing or finished.
    pub fn play(&mut self) -> bool {
        if self.state == PlayState::Idle {
            self.state = PlayState::Playing { elapsed: 0.0 };
            true
        } else {
            false
        }
    }

    /// Return to the idle state so the next `play` starts over.
    ///
    /// Used by repeatable triggers when their target scrolls back out.
    pub fn rewind(&mut self) {
        self.state = PlayState::Idle;
    }

    /// Advance the playhead by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if let PlayState::Playing { elapsed } = self.state {
            let elapsed = elapsed + dt.max(0.0);
            self.state = if elapsed >= self.total_duration() {
                PlayState::Finished
            } else {
                PlayState::Playing { elapsed }
            };
        }
    }

    /// State of target `index` at `elapsed` seconds, or `None` if there is
    /// no such target.
    pub fn sample(&self, index: usize, elapsed: f64) -> Option<StyleState> {
        self.schedule()
            .get(index)
            .map(|slot| slot.state_at(elapsed))
    }

    /// Current state of target `index` given the playhead.
    pub fn current(&self, index: usize) -> Option<StyleState> {
        let elapsed = match self.state {
            PlayState::Idle => 0.0,
            PlayState::Playing { elapsed } => elapsed,
            PlayState::Finished => f64::INFINITY,
        };
        self.sample(index, elapsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services_spec() -> TweenSpec {
        TweenSpec::entrance(
            StyleState::hidden().offset(0.0, 60.0).scaled(0.92).rotated(-2.0),
            1.2,
            Ease::Power3Out,
        )
        .stagger(0.18)
        .alternate(-30.0, 30.0)
    }

    #[test]
    fn register_preserves_order() {
        let mut list = TargetList::new();
        assert_eq!(list.register("a"), 0);
        assert_eq!(list.register("b"), 1);
        let targets = list.seal();
        assert_eq!(targets.keys(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn stagger_offsets_each_start_by_index() {
        let tl = Timeline::new(TargetList::numbered("svc", 8).seal(), services_spec());
        let slots = tl.schedule();
        assert_eq!(slots.len(), 8);
        for (i, slot) in slots.iter().enumerate() {
            assert_eq!(slot.index, i);
            assert!((slot.start - 0.18 * i as f64).abs() < 1e-9);
            assert!((slot.duration() - 1.2).abs() < 1e-9);
        }
    }

    #[test]
    fn starts_fire_in_index_order() {
        let tl = Timeline::new(TargetList::numbered("svc", 5).seal(), services_spec());
        let starts: Vec<f64> = tl.schedule().iter().map(|s| s.start).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn alternate_flips_direction_by_parity() {
        let tl = Timeline::new(TargetList::numbered("svc", 4).seal(), services_spec());
        let xs: Vec<f64> = tl.schedule().iter().map(|s| s.from.x).collect();
        assert_eq!(xs, vec![-30.0, 30.0, -30.0, 30.0]);
    }

    #[test]
    fn total_duration_covers_last_target() {
        let tl = Timeline::new(TargetList::numbered("svc", 8).seal(), services_spec());
        assert!((tl.total_duration() - (0.18 * 7.0 + 1.2)).abs() < 1e-9);
    }

    #[test]
    fn play_is_idempotent() {
        let mut tl = Timeline::single("hero", services_spec());
        assert!(tl.play());
        tl.advance(0.5);
        assert!(!tl.play(), "re-entry while playing must not restart");
        assert_eq!(tl.state(), PlayState::Playing { elapsed: 0.5 });
        tl.advance(10.0);
        assert_eq!(tl.state(), PlayState::Finished);
        assert!(!tl.play(), "re-entry after finishing must not replay");
        assert_eq!(tl.current(0), Some(StyleState::REST));
    }

    #[test]
    fn rewind_allows_replay() {
        let mut tl = Timeline::single("section", services_spec());
        tl.play();
        tl.advance(5.0);
        tl.rewind();
        assert!(tl.play());
    }

    #[test]
    fn sample_interpolates_between_from_and_to() {
        let tl = Timeline::single(
            "x",
            TweenSpec::entrance(StyleState::hidden(), 1.0, Ease::None),
        );
        assert_eq!(tl.sample(0, 0.0).unwrap().opacity, 0.0);
        assert!((tl.sample(0, 0.25).unwrap().opacity - 0.25).abs() < 1e-9);
        assert_eq!(tl.sample(0, 2.0).unwrap(), StyleState::REST);
    }

    #[test]
    fn sample_before_start_holds_from_state() {
        let tl = Timeline::new(
            TargetList::numbered("c", 3).seal(),
            TweenSpec::entrance(StyleState::hidden(), 1.0, Ease::None).stagger(0.5),
        );
        assert_eq!(tl.sample(2, 0.9).unwrap().opacity, 0.0);
    }

    #[test]
    fn sample_missing_target_is_none() {
        let tl = Timeline::single("only", services_spec());
        assert_eq!(tl.sample(3, 0.0), None);
    }

    #[test]
    fn idle_timeline_shows_from_state() {
        let tl = Timeline::single("x", TweenSpec::entrance(StyleState::hidden(), 1.0, Ease::None));
        assert_eq!(tl.current(0).unwrap().opacity, 0.0);
    }

    #[test]
    fn for_index_folds_stagger_and_alternate() {
        let spec = services_spec().delay(0.3);
        let third = spec.for_index(3);
        assert!((third.delay - (0.3 + 0.54)).abs() < 1e-9);
        assert_eq!(third.from.x, 30.0);
        assert_eq!(third.stagger, 0.0);
        assert!(third.alternate.is_none());
    }
}
