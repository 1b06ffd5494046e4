//! Page-scoped motion: one owner per mounted page.
//!
//! [`MotionRuntime::init`] is called once by the composition root before any
//! page is rendered. Each page then gets its own [`PageScope`] from
//! [`MotionRuntime::mount`]. The scope is used in two phases:
//!
//! 1. **Staging.** Section renderers declare their motion (`reveal`, `scrub`,
//!    `carousel`, `marquee`, `accordion`, `counter`, `tilt`). Each call
//!    acquires the subscriptions the effect needs and returns the per-target
//!    attributes the markup carries. The accumulated [`MotionPlan`] is what the browser
//!    driver runs.
//! 2. **Running.** The same scope replays the page headlessly: scroll,
//!    frame, pointer and click events go in, effect state comes out. This is
//!    how the plan's behavior is tested without a browser.
//!
//! [`PageScope::unmount`] releases every subscription unconditionally and
//! turns all later events into no-ops. Dropping the scope does the same.
//!
//! Effects are addressed by the id given at staging time. Events for an id
//! the scope doesn't know, or for a target that is absent from the layout,
//! are ignored.

use super::carousel::Carousel;
use super::counter::CounterValue;
use super::easing::Ease;
use super::expand::Accordion;
use super::marquee::{Direction, Marquee};
use super::plan::{
    AccordionPlan, CarouselPlan, CounterPlan, MarqueePlan, MarqueeTrackPlan, MotionPlan, Repeat,
    RevealPlan, ScrubPlan, ScrubProperty, TargetPlan, TiltPlan, target_style,
};
use super::reveal::{Rect, RepeatPolicy, RevealEvent, RevealTrigger, Threshold, Viewport};
use super::tilt::{Bounds, Tilt, TiltAngles};
use super::timeline::{TargetList, Timeline, TweenSpec};
use crate::config::MotionConfig;
use std::collections::HashMap;
use std::time::Duration;

/// Count-up length for statistics, in seconds.
const COUNTER_SECONDS: f64 = 2.5;

/// Explicit one-time initialization of the motion system.
#[derive(Debug, Clone)]
pub struct MotionRuntime {
    config: MotionConfig,
}

impl MotionRuntime {
    pub fn init(config: &MotionConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Open a scope for one page.
    pub fn mount(&self, route: &str) -> PageScope {
        PageScope::new(route, self.config.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionKind {
    ScrollObserver,
    Timer,
    FrameLoop,
    PointerListener,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

#[derive(Debug, Clone)]
struct Subscription {
    kind: SubscriptionKind,
    owner: String,
    active: bool,
}

/// Element geometry for headless scroll events.
pub trait Layout {
    /// Bounding box of the element with this id, or `None` if it is not in
    /// the document.
    fn rect(&self, id: &str) -> Option<Rect>;

    /// Full box of the element, for pointer effects. Layouts that only track
    /// vertical geometry have none.
    fn bounds(&self, _id: &str) -> Option<Bounds> {
        None
    }
}

impl Layout for HashMap<String, Rect> {
    fn rect(&self, id: &str) -> Option<Rect> {
        self.get(id).copied()
    }
}

impl Layout for HashMap<String, Bounds> {
    fn rect(&self, id: &str) -> Option<Rect> {
        self.get(id).map(|b| Rect::new(b.top, b.height))
    }

    fn bounds(&self, id: &str) -> Option<Bounds> {
        self.get(id).copied()
    }
}

/// Attributes for the targets of one staged reveal, by index.
///
/// Indices past the staged count return `None`, so markup for a missing
/// target simply carries no motion.
#[derive(Debug, Clone, Default)]
pub struct Staged {
    group: String,
    styles: Vec<String>,
}

impl Staged {
    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Value for the target's `data-m` attribute.
    pub fn marker(&self, index: usize) -> Option<&str> {
        (index < self.styles.len()).then_some(self.group.as_str())
    }

    /// Value for the target's `style` attribute.
    pub fn style(&self, index: usize) -> Option<&str> {
        self.styles.get(index).map(String::as_str)
    }
}

/// Something that happened while replaying events.
#[derive(Debug, Clone, PartialEq)]
pub enum ScopeEvent {
    Revealed(String),
    Hidden(String),
    Scrubbed(String, f64),
    CounterStarted(String),
    NavScrolled(bool),
}

#[derive(Debug)]
struct RevealEntry {
    trigger: RevealTrigger,
    timeline: Timeline,
    sub: SubscriptionId,
}

#[derive(Debug)]
struct ScrubEntry {
    trigger: RevealTrigger,
    progress: f64,
}

#[derive(Debug)]
struct MarqueeGroup {
    tracks: Vec<(String, Marquee)>,
}

#[derive(Debug)]
struct CounterEntry {
    value: CounterValue,
    trigger: RevealTrigger,
    elapsed: Option<f64>,
}

#[derive(Debug)]
struct TiltEntry {
    tilt: Tilt,
    angles: TiltAngles,
}

#[derive(Debug)]
pub struct PageScope {
    config: MotionConfig,
    plan: MotionPlan,
    subscriptions: Vec<Subscription>,
    reveals: HashMap<String, RevealEntry>,
    scrubs: HashMap<String, ScrubEntry>,
    carousels: HashMap<String, Carousel>,
    marquees: HashMap<String, MarqueeGroup>,
    accordions: HashMap<String, Accordion>,
    counters: HashMap<String, CounterEntry>,
    tilts: HashMap<String, TiltEntry>,
    nav_scrolled: bool,
    mounted: bool,
}

impl PageScope {
    fn new(route: &str, config: MotionConfig) -> Self {
        let plan = MotionPlan::new(
            route,
            config.nav_scroll_threshold,
            config.honor_reduced_motion,
        );
        let mut scope = Self {
            config,
            plan,
            subscriptions: Vec::new(),
            reveals: HashMap::new(),
            scrubs: HashMap::new(),
            carousels: HashMap::new(),
            marquees: HashMap::new(),
            accordions: HashMap::new(),
            counters: HashMap::new(),
            tilts: HashMap::new(),
            nav_scrolled: false,
            mounted: true,
        };
        // The navbar's scrolled flag listens for the page's whole lifetime.
        scope.acquire(SubscriptionKind::ScrollObserver, "navbar");
        scope
    }

    pub fn route(&self) -> &str {
        &self.plan.route
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Reveal line used when a section doesn't pick its own.
    pub fn default_threshold(&self) -> f64 {
        self.config.default_threshold
    }

    pub fn plan(&self) -> &MotionPlan {
        &self.plan
    }

    pub fn into_plan(mut self) -> MotionPlan {
        std::mem::replace(&mut self.plan, MotionPlan::new("", 0.0, false))
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    pub fn acquire(&mut self, kind: SubscriptionKind, owner: &str) -> SubscriptionId {
        self.subscriptions.push(Subscription {
            kind,
            owner: owner.to_string(),
            active: self.mounted,
        });
        SubscriptionId(self.subscriptions.len() - 1)
    }

    pub fn release(&mut self, id: SubscriptionId) {
        if let Some(sub) = self.subscriptions.get_mut(id.0) {
            sub.active = false;
        }
    }

    pub fn live_subscriptions(&self) -> usize {
        self.subscriptions.iter().filter(|s| s.active).count()
    }

    /// Live subscriptions of one kind held for `owner`.
    pub fn live_for(&self, owner: &str, kind: SubscriptionKind) -> usize {
        self.subscriptions
            .iter()
            .filter(|s| s.active && s.kind == kind && s.owner == owner)
            .count()
    }

    // -------------------------------------------------------------------------
    // Staging
    // -------------------------------------------------------------------------

    /// Stage an entrance for every target in `targets`, triggered when the
    /// element `id` reaches `threshold` percent of the viewport.
    pub fn reveal(
        &mut self,
        id: &str,
        threshold: f64,
        repeat: Repeat,
        targets: TargetList,
        spec: TweenSpec,
    ) -> Staged {
        let timeline = Timeline::new(targets.seal(), spec);
        let schedule = timeline.schedule();
        let styles = schedule.iter().map(target_style).collect();

        self.plan.reveals.push(RevealPlan {
            trigger: id.to_string(),
            threshold,
            repeat,
            targets: schedule.iter().map(TargetPlan::from).collect(),
        });

        let policy = match repeat {
            Repeat::Once => RepeatPolicy::Once,
            Repeat::EveryTime => RepeatPolicy::EveryTime,
        };
        let sub = self.acquire(SubscriptionKind::ScrollObserver, id);
        self.reveals.insert(
            id.to_string(),
            RevealEntry {
                trigger: RevealTrigger::new(Threshold::new(threshold), policy),
                timeline,
                sub,
            },
        );

        Staged {
            group: id.to_string(),
            styles,
        }
    }

    /// Stage a single-element entrance that plays once.
    pub fn reveal_one(&mut self, id: &str, threshold: f64, spec: TweenSpec) -> Staged {
        let mut targets = TargetList::new();
        targets.register(id);
        self.reveal(id, threshold, Repeat::Once, targets, spec)
    }

    /// Stage a scroll-linked effect on the element `id`.
    pub fn scrub(&mut self, id: &str, start: f64, end: f64, property: ScrubProperty) -> String {
        self.plan.scrubs.push(ScrubPlan {
            trigger: id.to_string(),
            start,
            end,
            property,
        });
        self.acquire(SubscriptionKind::ScrollObserver, id);
        self.scrubs.insert(
            id.to_string(),
            ScrubEntry {
                trigger: RevealTrigger::scrub(start, end),
                progress: 0.0,
            },
        );
        id.to_string()
    }

    /// Stage an auto-advancing carousel of `len` slides. Returns `false` when
    /// there is nothing to rotate.
    pub fn carousel(&mut self, id: &str, len: usize) -> bool {
        let interval = Duration::from_millis(self.config.carousel_interval_ms);
        let Some(carousel) = Carousel::new(len, interval) else {
            return false;
        };
        self.plan.carousels.push(CarouselPlan {
            id: id.to_string(),
            len,
            interval_ms: self.config.carousel_interval_ms,
        });
        self.acquire(SubscriptionKind::Timer, id);
        self.acquire(SubscriptionKind::PointerListener, id);
        self.carousels.insert(id.to_string(), carousel);
        true
    }

    /// Stage a group of marquee tracks that pause together while the pointer
    /// is over `region`. Track ids are `{region}-{i}`.
    pub fn marquee(&mut self, region: &str, directions: &[Direction]) -> Vec<MarqueeTrackPlan> {
        let tracks: Vec<MarqueeTrackPlan> = directions
            .iter()
            .enumerate()
            .map(|(i, &direction)| MarqueeTrackPlan {
                id: format!("{region}-{i}"),
                direction,
                loop_seconds: match direction {
                    Direction::Left => self.config.marquee_left_seconds,
                    Direction::Right => self.config.marquee_right_seconds,
                },
            })
            .collect();

        for track in &tracks {
            self.acquire(SubscriptionKind::FrameLoop, &track.id);
        }
        // Enter and leave.
        self.acquire(SubscriptionKind::PointerListener, region);
        self.acquire(SubscriptionKind::PointerListener, region);

        self.marquees.insert(
            region.to_string(),
            MarqueeGroup {
                tracks: tracks
                    .iter()
                    .map(|t| (t.id.clone(), Marquee::new(t.direction, t.loop_seconds)))
                    .collect(),
            },
        );
        self.plan.marquees.push(MarqueePlan {
            region: region.to_string(),
            tracks: tracks.clone(),
        });
        tracks
    }

    /// Stage an at-most-one-open list.
    pub fn accordion(&mut self, id: &str, len: usize) {
        self.plan.accordions.push(AccordionPlan {
            id: id.to_string(),
            len,
        });
        self.acquire(SubscriptionKind::PointerListener, id);
        self.accordions.insert(id.to_string(), Accordion::new(len));
    }

    /// Stage a count-up for a displayed statistic. Returns `false` when the
    /// value has no number in it; such values render as plain text.
    pub fn counter(&mut self, id: &str, display: &str, threshold: f64) -> bool {
        let Some(value) = CounterValue::parse(display) else {
            return false;
        };
        self.plan.counters.push(CounterPlan {
            id: id.to_string(),
            display: value.display.clone(),
            target: value.target,
            prefix: value.prefix.clone(),
            suffix: value.suffix.clone(),
            threshold,
            duration: COUNTER_SECONDS,
            ease: Ease::Power2Out,
        });
        self.acquire(SubscriptionKind::ScrollObserver, id);
        self.counters.insert(
            id.to_string(),
            CounterEntry {
                value,
                trigger: RevealTrigger::once(threshold),
                elapsed: None,
            },
        );
        true
    }

    /// Stage a pointer tilt on the element `id`. The pointer listener is
    /// owned by this scope, so it goes away with the page.
    pub fn tilt(&mut self, id: &str, tilt: Tilt) {
        self.plan.tilts.push(TiltPlan::new(id, &tilt));
        self.acquire(SubscriptionKind::PointerListener, id);
        self.tilts.insert(
            id.to_string(),
            TiltEntry {
                tilt,
                angles: TiltAngles::LEVEL,
            },
        );
    }

    // -------------------------------------------------------------------------
    // Running
    // -------------------------------------------------------------------------

    /// Replay one scroll event. `scroll_y` drives the navbar flag; `layout`
    /// supplies each trigger's current bounding box.
    pub fn on_scroll(
        &mut self,
        scroll_y: f64,
        viewport: &Viewport,
        layout: &impl Layout,
    ) -> Vec<ScopeEvent> {
        let mut events = Vec::new();
        if !self.mounted {
            return events;
        }

        let scrolled = scroll_y > self.config.nav_scroll_threshold;
        if scrolled != self.nav_scrolled {
            self.nav_scrolled = scrolled;
            events.push(ScopeEvent::NavScrolled(scrolled));
        }

        let mut released = Vec::new();
        let mut ids: Vec<String> = self.reveals.keys().cloned().collect();
        ids.sort();
        for id in ids {
            let Some(entry) = self.reveals.get_mut(&id) else {
                continue;
            };
            match entry.trigger.observe(viewport, layout.rect(&id)) {
                Some(RevealEvent::Enter) => {
                    entry.timeline.play();
                    if entry.trigger.policy() == RepeatPolicy::Once {
                        entry.trigger.detach();
                        released.push(entry.sub);
                    }
                    events.push(ScopeEvent::Revealed(id));
                }
                Some(RevealEvent::Leave) => {
                    entry.timeline.rewind();
                    events.push(ScopeEvent::Hidden(id));
                }
                _ => {}
            }
        }

        let mut ids: Vec<String> = self.scrubs.keys().cloned().collect();
        ids.sort();
        for id in ids {
            let Some(entry) = self.scrubs.get_mut(&id) else {
                continue;
            };
            if let Some(RevealEvent::Progress(p)) = entry.trigger.observe(viewport, layout.rect(&id))
            {
                entry.progress = p;
                events.push(ScopeEvent::Scrubbed(id, p));
            }
        }

        let mut ids: Vec<String> = self.counters.keys().cloned().collect();
        ids.sort();
        for id in ids {
            let Some(entry) = self.counters.get_mut(&id) else {
                continue;
            };
            if entry.trigger.observe(viewport, layout.rect(&id)) == Some(RevealEvent::Enter) {
                entry.elapsed = Some(0.0);
                events.push(ScopeEvent::CounterStarted(id));
            }
        }

        for sub in released {
            self.release(sub);
        }
        events
    }

    /// Advance every running effect by `dt`.
    pub fn on_frame(&mut self, dt: Duration) {
        if !self.mounted {
            return;
        }
        let secs = dt.as_secs_f64();
        for entry in self.reveals.values_mut() {
            entry.timeline.advance(secs);
        }
        for group in self.marquees.values_mut() {
            for (_, marquee) in &mut group.tracks {
                marquee.advance(secs);
            }
        }
        for carousel in self.carousels.values_mut() {
            carousel.advance(dt);
        }
        for counter in self.counters.values_mut() {
            if let Some(elapsed) = counter.elapsed.as_mut() {
                *elapsed += secs;
            }
        }
    }

    /// Pointer entered a marquee region: pause its tracks.
    pub fn pointer_enter(&mut self, region: &str) {
        if !self.mounted {
            return;
        }
        if let Some(group) = self.marquees.get_mut(region) {
            for (_, marquee) in &mut group.tracks {
                marquee.pause();
            }
        }
    }

    /// Pointer left a marquee region: resume its tracks.
    pub fn pointer_leave(&mut self, region: &str) {
        if !self.mounted {
            return;
        }
        if let Some(group) = self.marquees.get_mut(region) {
            for (_, marquee) in &mut group.tracks {
                marquee.resume();
            }
        }
    }

    /// Pointer moved to `(x, y)` in viewport coordinates. Every tilt whose
    /// element has a box in `layout` turns toward it; the rest keep their
    /// angle.
    pub fn pointer_move(&mut self, x: f64, y: f64, layout: &impl Layout) {
        if !self.mounted {
            return;
        }
        for (id, entry) in &mut self.tilts {
            if let Some(angles) = layout
                .bounds(id)
                .and_then(|b| entry.tilt.angles(x, y, b))
            {
                entry.angles = angles;
            }
        }
    }

    /// Manual slide selection (dot click).
    pub fn select_slide(&mut self, id: &str, index: usize) {
        if !self.mounted {
            return;
        }
        if let Some(carousel) = self.carousels.get_mut(id) {
            carousel.select(index);
        }
    }

    /// Accordion header click.
    pub fn toggle(&mut self, id: &str, index: usize) {
        if !self.mounted {
            return;
        }
        if let Some(accordion) = self.accordions.get_mut(id) {
            accordion.select(index);
        }
    }

    /// Tear down the page: detach observers, cancel timers, stop marquees and
    /// release every subscription.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        for entry in self.reveals.values_mut() {
            entry.trigger.detach();
        }
        for entry in self.scrubs.values_mut() {
            entry.trigger.detach();
        }
        for entry in self.counters.values_mut() {
            entry.trigger.detach();
        }
        for carousel in self.carousels.values_mut() {
            carousel.cancel();
        }
        for group in self.marquees.values_mut() {
            for (_, marquee) in &mut group.tracks {
                marquee.stop();
            }
        }
        for entry in self.tilts.values_mut() {
            entry.angles = TiltAngles::LEVEL;
        }
        for sub in &mut self.subscriptions {
            sub.active = false;
        }
        self.mounted = false;
    }

    // -------------------------------------------------------------------------
    // Inspection
    // -------------------------------------------------------------------------

    pub fn nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    pub fn timeline(&self, id: &str) -> Option<&Timeline> {
        self.reveals.get(id).map(|e| &e.timeline)
    }

    pub fn reveal_count(&self, id: &str) -> Option<u32> {
        self.reveals.get(id).map(|e| e.trigger.fired())
    }

    pub fn scrub_progress(&self, id: &str) -> Option<f64> {
        self.scrubs.get(id).map(|e| e.progress)
    }

    pub fn carousel_state(&self, id: &str) -> Option<&Carousel> {
        self.carousels.get(id)
    }

    pub fn marquee_track(&self, track_id: &str) -> Option<&Marquee> {
        self.marquees
            .values()
            .flat_map(|g| g.tracks.iter())
            .find(|(id, _)| id == track_id)
            .map(|(_, m)| m)
    }

    pub fn accordion_state(&self, id: &str) -> Option<&Accordion> {
        self.accordions.get(id)
    }

    pub fn tilt_angles(&self, id: &str) -> Option<TiltAngles> {
        self.tilts.get(id).map(|e| e.angles)
    }

    /// Text a counter currently shows, or `None` for an unknown id.
    pub fn counter_text(&self, id: &str) -> Option<String> {
        self.counters.get(id).map(|c| {
            let t = c.elapsed.map_or(0.0, |e| e / COUNTER_SECONDS);
            c.value.display_at(t, Ease::Power2Out)
        })
    }
}

impl Drop for PageScope {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::style::StyleState;
    use crate::motion::timeline::PlayState;

    const VP: Viewport = Viewport { height: 1000.0 };

    fn scope() -> PageScope {
        MotionRuntime::init(&MotionConfig::default()).mount("careers")
    }

    fn layout(entries: &[(&str, f64, f64)]) -> HashMap<String, Rect> {
        entries
            .iter()
            .map(|(id, top, h)| (id.to_string(), Rect::new(*top, *h)))
            .collect()
    }

    fn fade() -> TweenSpec {
        TweenSpec::entrance(StyleState::hidden().offset(0.0, 40.0), 0.9, Ease::Power3Out)
            .stagger(0.15)
    }

    #[test]
    fn staged_reveal_bakes_per_target_styles() {
        let mut s = scope();
        let staged = s.reveal("moments", 80.0, Repeat::Once, TargetList::numbered("m", 8), fade());
        assert_eq!(staged.len(), 8);
        assert_eq!(staged.marker(7), Some("moments"));
        assert!(staged.style(3).unwrap().contains("--m-delay:0.45s"));
        assert_eq!(staged.marker(8), None);
        assert_eq!(staged.style(8), None);
        assert_eq!(s.plan().reveals[0].targets.len(), 8);
    }

    #[test]
    fn once_reveal_plays_once_and_releases_its_observer() {
        let mut s = scope();
        s.reveal_one("hero", 80.0, fade());
        assert_eq!(s.live_for("hero", SubscriptionKind::ScrollObserver), 1);

        let below = layout(&[("hero", 900.0, 300.0)]);
        let inside = layout(&[("hero", 500.0, 300.0)]);
        assert!(s.on_scroll(0.0, &VP, &below).is_empty());
        assert_eq!(
            s.on_scroll(0.0, &VP, &inside),
            vec![ScopeEvent::Revealed("hero".into())]
        );
        s.on_scroll(0.0, &VP, &below);
        s.on_scroll(0.0, &VP, &inside);
        assert_eq!(s.reveal_count("hero"), Some(1));
        assert_eq!(s.live_for("hero", SubscriptionKind::ScrollObserver), 0);
    }

    #[test]
    fn every_time_reveal_rewinds_on_leave() {
        let mut s = scope();
        s.reveal("cta", 80.0, Repeat::EveryTime, TargetList::numbered("c", 1), fade());
        s.on_scroll(0.0, &VP, &layout(&[("cta", 500.0, 100.0)]));
        s.on_frame(Duration::from_secs(5));
        assert_eq!(s.timeline("cta").unwrap().state(), PlayState::Finished);
        let ev = s.on_scroll(0.0, &VP, &layout(&[("cta", 950.0, 100.0)]));
        assert_eq!(ev, vec![ScopeEvent::Hidden("cta".into())]);
        assert_eq!(s.timeline("cta").unwrap().state(), PlayState::Idle);
    }

    #[test]
    fn missing_layout_target_is_ignored() {
        let mut s = scope();
        s.reveal_one("ghost", 80.0, fade());
        let empty: HashMap<String, Rect> = HashMap::new();
        let ev = s.on_scroll(0.0, &VP, &empty);
        assert!(ev.is_empty());
        assert_eq!(s.reveal_count("ghost"), Some(0));
    }

    #[test]
    fn navbar_flag_follows_scroll_threshold() {
        let mut s = scope();
        let empty: HashMap<String, Rect> = HashMap::new();
        assert!(s.on_scroll(40.0, &VP, &empty).is_empty());
        assert_eq!(
            s.on_scroll(41.0, &VP, &empty),
            vec![ScopeEvent::NavScrolled(true)]
        );
        assert!(s.nav_scrolled());
        assert_eq!(
            s.on_scroll(0.0, &VP, &empty),
            vec![ScopeEvent::NavScrolled(false)]
        );
    }

    #[test]
    fn scrub_tracks_scroll_position() {
        let mut s = scope();
        s.scrub("why-line", 70.0, 90.0, ScrubProperty::Height);
        // start 700px, end 900px, 400px tall: top runs 700 → 500.
        s.on_scroll(0.0, &VP, &layout(&[("why-line", 600.0, 400.0)]));
        assert!((s.scrub_progress("why-line").unwrap() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn carousel_auto_advances_and_accepts_selection() {
        let mut s = scope();
        assert!(s.carousel("life", 8));
        s.on_frame(Duration::from_millis(5000));
        assert_eq!(s.carousel_state("life").unwrap().showing(), 1);
        s.select_slide("life", 6);
        assert_eq!(s.carousel_state("life").unwrap().showing(), 6);
        s.select_slide("life", 42);
        assert_eq!(s.carousel_state("life").unwrap().showing(), 6);
    }

    #[test]
    fn empty_carousel_is_not_staged() {
        let mut s = scope();
        assert!(!s.carousel("none", 0));
        assert!(s.plan().carousels.is_empty());
    }

    #[test]
    fn hover_pauses_every_track_in_region() {
        let mut s = scope();
        let tracks = s.marquee("clients", &[Direction::Left, Direction::Right]);
        assert_eq!(tracks[0].loop_seconds, 28.0);
        assert_eq!(tracks[1].loop_seconds, 35.0);

        s.on_frame(Duration::from_secs(7));
        let left = s.marquee_track("clients-0").unwrap().offset_percent();
        let right = s.marquee_track("clients-1").unwrap().offset_percent();
        s.pointer_enter("clients");
        s.on_frame(Duration::from_secs(3));
        assert_eq!(s.marquee_track("clients-0").unwrap().offset_percent(), left);
        assert_eq!(s.marquee_track("clients-1").unwrap().offset_percent(), right);
        s.pointer_leave("clients");
        s.on_frame(Duration::from_secs(7));
        assert!((s.marquee_track("clients-0").unwrap().offset_percent() + 25.0).abs() < 1e-9);
    }

    #[test]
    fn accordion_toggles_through_scope() {
        let mut s = scope();
        s.accordion("jobs", 3);
        s.toggle("jobs", 1);
        s.toggle("jobs", 2);
        assert_eq!(s.accordion_state("jobs").unwrap().expanded(), Some(2));
        s.toggle("jobs", 2);
        assert_eq!(s.accordion_state("jobs").unwrap().expanded(), None);
        s.toggle("unknown", 0);
    }

    #[test]
    fn counter_counts_after_reveal() {
        let mut s = scope();
        assert!(s.counter("stat-2", "120+", 85.0));
        assert!(!s.counter("stat-x", "many", 85.0));
        assert_eq!(s.counter_text("stat-2").as_deref(), Some("0+"));
        s.on_scroll(0.0, &VP, &layout(&[("stat-2", 800.0, 100.0)]));
        s.on_frame(Duration::from_secs(3));
        assert_eq!(s.counter_text("stat-2").as_deref(), Some("120+"));
    }

    #[test]
    fn counter_ends_on_source_text() {
        let mut s = scope();
        assert!(s.counter("stat-9", "4.75x", 85.0));
        assert_eq!(s.plan().counters[0].display, "4.75x");
        s.on_scroll(0.0, &VP, &layout(&[("stat-9", 100.0, 50.0)]));
        s.on_frame(Duration::from_secs(1));
        assert_ne!(s.counter_text("stat-9").as_deref(), Some("4.75x"));
        s.on_frame(Duration::from_secs(2));
        assert_eq!(s.counter_text("stat-9").as_deref(), Some("4.75x"));
    }

    #[test]
    fn counter_fires_when_already_scrolled_past() {
        let mut s = scope();
        s.counter("stat-0", "28%", 85.0);
        s.on_scroll(4000.0, &VP, &layout(&[("stat-0", -900.0, 100.0)]));
        s.on_frame(Duration::from_secs(3));
        assert_eq!(s.counter_text("stat-0").as_deref(), Some("28%"));
    }

    #[test]
    fn tilt_follows_pointer_through_scoped_listener() {
        let mut s = scope();
        s.tilt("hero-visual", Tilt::HERO);
        assert_eq!(s.live_for("hero-visual", SubscriptionKind::PointerListener), 1);
        assert_eq!(s.plan().tilts[0].strength, 25.0);
        assert_eq!(s.plan().tilts[0].perspective, 1400.0);

        let boxes: HashMap<String, Bounds> =
            [("hero-visual".to_string(), Bounds::new(600.0, 100.0, 400.0, 400.0))].into();
        s.pointer_move(1000.0, 300.0, &boxes);
        assert_eq!(
            s.tilt_angles("hero-visual"),
            Some(TiltAngles { x: 0.0, y: 12.5 })
        );

        // Without a box the last angle stays.
        s.pointer_move(600.0, 300.0, &layout(&[]));
        assert_eq!(s.tilt_angles("hero-visual").unwrap().y, 12.5);

        s.unmount();
        assert_eq!(s.live_for("hero-visual", SubscriptionKind::PointerListener), 0);
        s.pointer_move(600.0, 300.0, &boxes);
        assert_eq!(s.tilt_angles("hero-visual"), Some(TiltAngles::LEVEL));
    }

    #[test]
    fn unmount_releases_everything_and_silences_events() {
        let mut s = scope();
        s.reveal_one("hero", 80.0, fade());
        s.scrub("line", 65.0, 90.0, ScrubProperty::Height);
        s.carousel("life", 8);
        s.marquee("clients", &[Direction::Left, Direction::Right]);
        s.accordion("jobs", 3);
        assert!(s.live_subscriptions() > 0);

        s.unmount();
        assert_eq!(s.live_subscriptions(), 0);
        assert!(!s.is_mounted());

        let ev = s.on_scroll(500.0, &VP, &layout(&[("hero", 0.0, 100.0)]));
        assert!(ev.is_empty());
        s.on_frame(Duration::from_secs(60));
        s.select_slide("life", 3);
        s.toggle("jobs", 0);
        s.pointer_leave("clients");
        assert_eq!(s.carousel_state("life").unwrap().showing(), 0);
        assert!(s.carousel_state("life").unwrap().is_cancelled());
        assert_eq!(s.accordion_state("jobs").unwrap().expanded(), None);
        assert_eq!(s.marquee_track("clients-0").unwrap().offset_percent(), 0.0);
        assert_eq!(s.reveal_count("hero"), Some(0));
    }

    #[test]
    fn scopes_are_independent_per_page() {
        let runtime = MotionRuntime::init(&MotionConfig::default());
        let mut a = runtime.mount("about");
        let mut b = runtime.mount("careers");
        a.carousel("c", 3);
        b.carousel("c", 3);
        a.unmount();
        b.on_frame(Duration::from_secs(5));
        assert_eq!(b.carousel_state("c").unwrap().showing(), 1);
        assert!(b.live_subscriptions() > 0);
    }
}
