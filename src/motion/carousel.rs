//! Auto-advancing slide carousel.
//!
//! The carousel is always `showing(i)` for some `i` in `[0, N)`. A fixed
//! interval timer advances it modulo `N`; a manual `select(j)` jumps straight
//! to `j` and leaves the timer phase alone. All slides stay in the layout;
//! only the track offset changes.

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    index: usize,
    interval: Duration,
    elapsed: Duration,
    cancelled: bool,
}

impl Carousel {
    /// Returns `None` for an empty slide list: there is nothing to show.
    pub fn new(len: usize, interval: Duration) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            len,
            index: 0,
            interval,
            elapsed: Duration::ZERO,
            cancelled: false,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the slide currently shown.
    pub fn showing(&self) -> usize {
        self.index
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// `showing(i) → showing((i + 1) mod N)`.
    pub fn tick(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Jump to slide `j`. Out-of-range indices are ignored.
    pub fn select(&mut self, j: usize) -> bool {
        if j < self.len {
            self.index = j;
            true
        } else {
            false
        }
    }

    /// Feed elapsed wall time to the auto-advance timer. Returns the number
    /// of ticks fired, saturating at `u32::MAX`. A cancelled carousel never
    /// ticks.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.cancelled || self.interval.is_zero() {
            return 0;
        }
        let elapsed = self.elapsed.as_nanos() + dt.as_nanos();
        let interval = self.interval.as_nanos();
        let ticks = elapsed / interval;
        self.elapsed = duration_from_nanos(elapsed % interval);
        // `ticks % len` is below `len`, so it fits in usize.
        let step = (ticks % self.len as u128) as usize;
        self.index = (self.index + step) % self.len;
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Horizontal track offset in percent of the viewport width.
    pub fn offset_percent(&self) -> f64 {
        -(self.index as f64) * 100.0
    }

    /// Cancel the auto-advance timer. Manual selection still works.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }
}

/// The remainder is below the interval, which is itself a `Duration`, so
/// the seconds always fit.
fn duration_from_nanos(nanos: u128) -> Duration {
    const NANOS_PER_SEC: u128 = 1_000_000_000;
    let secs = u64::try_from(nanos / NANOS_PER_SEC).unwrap_or(u64::MAX);
    Duration::new(secs, (nanos % NANOS_PER_SEC) as u32)
}
