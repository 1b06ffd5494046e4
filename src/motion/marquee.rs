//! Endless logo strips.
//!
//! The track holds the item list twice, so translating it by half its own
//! width lands on a frame identical to the start. Wrapping at that point is
//! invisible.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeState {
    Running,
    Paused,
    Stopped,
}

/// Duplicate `items` for seamless looping: `[L1..Ln, L1..Ln]`.
pub fn track<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * 2);
    out.extend_from_slice(items);
    out.extend_from_slice(items);
    out
}

#[derive(Debug, Clone)]
pub struct Marquee {
    direction: Direction,
    /// Seconds for one full loop (half the track).
    loop_seconds: f64,
    /// Position within the loop, in `[0, 1)`.
    progress: f64,
    state: MarqueeState,
}

impl Marquee {
    pub fn new(direction: Direction, loop_seconds: f64) -> Self {
        Self {
            direction,
            loop_seconds,
            progress: 0.0,
            state: MarqueeState::Running,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn loop_seconds(&self) -> f64 {
        self.loop_seconds
    }

    pub fn state(&self) -> MarqueeState {
        self.state
    }

    /// Track offset as a percentage of its own width.
    ///
    /// Leftward strips run 0 → −50; rightward strips start at −50 and run
    /// back to 0.
    pub fn offset_percent(&self) -> f64 {
        match self.direction {
            Direction::Left => -50.0 * self.progress,
            Direction::Right => -50.0 + 50.0 * self.progress,
        }
    }

    /// Move the track at constant velocity. Only a running marquee moves.
    pub fn advance(&mut self, dt: f64) {
        if self.state != MarqueeState::Running || self.loop_seconds <= 0.0 {
            return;
        }
        self.progress = (self.progress + dt.max(0.0) / self.loop_seconds).fract();
    }

    pub fn pause(&mut self) {
        if self.state == MarqueeState::Running {
            self.state = MarqueeState::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.state == MarqueeState::Paused {
            self.state = MarqueeState::Running;
        }
    }

    /// Terminal. A stopped marquee never moves again.
    pub fn stop(&mut self) {
        self.state = MarqueeState::Stopped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifteen_logos_become_thirty_in_order() {
        let logos: Vec<String> = (1..=15).map(|i| format!("L{i}")).collect();
        let t = track(&logos);
        assert_eq!(t.len(), 30);
        assert_eq!(&t[..15], &logos[..]);
        assert_eq!(&t[15..], &logos[..]);
    }

    #[test]
    fn left_strip_moves_toward_minus_fifty() {
        let mut m = Marquee::new(Direction::Left, 28.0);
        assert_eq!(m.offset_percent(), 0.0);
        m.advance(14.0);
        assert!((m.offset_percent() + 25.0).abs() < 1e-9);
    }

    #[test]
    fn right_strip_starts_at_minus_fifty() {
        let mut m = Marquee::new(Direction::Right, 35.0);
        assert_eq!(m.offset_percent(), -50.0);
        m.advance(17.5);
        assert!((m.offset_percent() + 25.0).abs() < 1e-9);
    }

    #[test]
    fn wraps_at_the_halfway_point() {
        let mut m = Marquee::new(Direction::Left, 10.0);
        m.advance(12.5);
        assert!((m.offset_percent() + 12.5).abs() < 1e-9);
        assert!(m.offset_percent() > -50.0);
    }

    #[test]
    fn pause_keeps_offset_and_resume_continues() {
        let mut m = Marquee::new(Direction::Left, 20.0);
        m.advance(5.0);
        let before = m.offset_percent();
        m.pause();
        m.advance(7.0);
        assert_eq!(m.offset_percent(), before);
        m.resume();
        m.advance(5.0);
        assert!((m.offset_percent() - (before - 12.5)).abs() < 1e-9);
    }

    #[test]
    fn stop_is_terminal() {
        let mut m = Marquee::new(Direction::Right, 20.0);
        m.stop();
        m.resume();
        m.advance(3.0);
        assert_eq!(m.state(), MarqueeState::Stopped);
        assert_eq!(m.offset_percent(), -50.0);
    }
}
