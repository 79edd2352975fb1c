//! # Trace Playback
//!
//! Walks a [`Timeline`] one step at a time with transport controls: start,
//! pause, step forward, step backward and a speed selector.
//!
//! The controller owns no thread or timer. It keeps at most one pending
//! deadline, and a driver calls [`PlaybackController::poll`] with the current
//! time; every deadline that has passed advances the cursor by one step.
//! Starting, pausing, resetting or loading a new trace replaces or clears that
//! deadline, so advances can never pile up.
//!
//! ## States
//! - **Idle**: nothing shown yet, not playing.
//! - **Playing**: the cursor advances on each elapsed deadline.
//! - **Paused**: the cursor is fixed, stopped by `pause` or by reaching the end.
//!
//! Playback stops by itself on the last step rather than looping.
//!
//! ## Example
//! ```rust
//! use std::time::{Duration, Instant};
//! use dptrace::cs::dynamic::build_fibonacci_trace;
//! use dptrace::cs::playback::{PlaybackController, PlaybackState, Speed};
//!
//! let mut player = PlaybackController::new(build_fibonacci_trace(2), Speed::Fast);
//! let t0 = Instant::now();
//! player.start(t0);
//! assert_eq!(player.cursor(), None);
//!
//! player.poll(t0 + Duration::from_millis(500));
//! assert_eq!(player.cursor(), Some(0));
//!
//! player.poll(t0 + Duration::from_millis(1500));
//! assert_eq!(player.cursor(), Some(2));
//! assert_eq!(player.state(), PlaybackState::Paused);
//! ```

use std::time::{Duration, Instant};

use crate::cs::dynamic::trace::{Timeline, Trace};
use crate::error::{Error, Result};

/// Delay between automatic advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
    VeryFast,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Slow, Speed::Normal, Speed::Fast, Speed::VeryFast];

    pub fn millis(self) -> u64 {
        match self {
            Speed::Slow => 2000,
            Speed::Normal => 1000,
            Speed::Fast => 500,
            Speed::VeryFast => 200,
        }
    }

    pub fn interval(self) -> Duration {
        Duration::from_millis(self.millis())
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
            Speed::VeryFast => "Very Fast",
        }
    }
}

impl TryFrom<u64> for Speed {
    type Error = Error;

    fn try_from(millis: u64) -> Result<Self> {
        Speed::ALL
            .into_iter()
            .find(|s| s.millis() == millis)
            .ok_or(Error::UnknownSpeed(millis))
    }
}

/// Configuration for a playback controller.
#[derive(Debug, Clone, Default)]
pub struct PlaybackConfig {
    /// Initial speed
    pub speed: Speed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
    Paused,
}

/// Cursor and transport state over a single timeline.
///
/// The cursor is `None` before the first step is shown, otherwise an index in
/// `0..len`.
#[derive(Debug, Clone)]
pub struct PlaybackController<T: Timeline> {
    timeline: T,
    cursor: Option<usize>,
    playing: bool,
    // Set by an explicit pause, so pausing before the first advance is Paused.
    paused: bool,
    speed: Speed,
    next_advance: Option<Instant>,
}

impl<T: Timeline> PlaybackController<T> {
    pub fn new(timeline: T, speed: Speed) -> Self {
        Self {
            timeline,
            cursor: None,
            playing: false,
            paused: false,
            speed,
            next_advance: None,
        }
    }

    pub fn with_config(timeline: T, config: &PlaybackConfig) -> Self {
        Self::new(timeline, config.speed)
    }

    pub fn timeline(&self) -> &T {
        &self.timeline
    }

    pub fn trace(&self) -> &Trace<T::Step> {
        self.timeline.trace()
    }

    fn len(&self) -> usize {
        self.timeline.trace().len()
    }

    fn last_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// When the pending advance is due, if one is scheduled.
    pub fn next_advance(&self) -> Option<Instant> {
        self.next_advance
    }

    pub fn state(&self) -> PlaybackState {
        match (self.playing, self.paused, self.cursor) {
            (true, _, _) => PlaybackState::Playing,
            (false, false, None) => PlaybackState::Idle,
            (false, true, _) | (false, false, Some(_)) => PlaybackState::Paused,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_some() && self.cursor == self.last_index()
    }

    /// The step under the cursor.
    pub fn current_step(&self) -> Option<&T::Step> {
        self.cursor.and_then(|c| self.timeline.trace().get(c))
    }

    /// Every step shown so far, oldest first.
    pub fn revealed(&self) -> &[T::Step] {
        self.timeline.trace().revealed(self.cursor)
    }

    /// Rewinds to the beginning and starts playing.
    ///
    /// Ignored while already playing. An empty timeline stays idle.
    pub fn start(&mut self, now: Instant) {
        if self.playing {
            log::debug!("start ignored, already playing");
            return;
        }
        self.cursor = None;
        self.paused = false;
        if self.len() == 0 {
            self.next_advance = None;
            log::debug!("start ignored, nothing to play");
            return;
        }
        self.playing = true;
        self.next_advance = Some(now + self.speed.interval());
        log::debug!(
            "playback started over {} steps at {}ms",
            self.len(),
            self.speed.millis()
        );
    }

    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.playing = false;
        self.paused = true;
        self.next_advance = None;
        log::debug!("playback paused at {:?}", self.cursor);
    }

    /// Moves one step ahead; no-op on the last step.
    pub fn step_forward(&mut self) {
        let Some(last) = self.last_index() else {
            return;
        };
        let next = self.cursor.map_or(0, |c| (c + 1).min(last));
        if self.cursor != Some(next) {
            log::trace!("cursor {:?} -> {next}", self.cursor);
            self.cursor = Some(next);
        }
        if next == last {
            self.finish();
        }
    }

    /// Moves one step back; no-op before the first step.
    pub fn step_backward(&mut self) {
        let prev = match self.cursor {
            Some(0) | None => None,
            Some(c) => Some(c - 1),
        };
        log::trace!("cursor {:?} -> {prev:?}", self.cursor);
        self.cursor = prev;
    }

    /// Applies to the next scheduled advance, not the one already pending.
    pub fn set_speed(&mut self, speed: Speed) {
        log::debug!("speed {}ms -> {}ms", self.speed.millis(), speed.millis());
        self.speed = speed;
    }

    /// Advances once for every deadline that has passed by `now`.
    ///
    /// Returns how many steps were taken.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut advanced = 0;
        while self.playing {
            let Some(due) = self.next_advance else {
                break;
            };
            if now < due {
                break;
            }
            self.step_forward();
            advanced += 1;
            if self.playing {
                self.next_advance = Some(due + self.speed.interval());
            }
        }
        advanced
    }

    /// Back to idle, cancelling any pending advance.
    pub fn reset(&mut self) {
        self.cursor = None;
        self.playing = false;
        self.paused = false;
        self.next_advance = None;
        log::debug!("playback reset");
    }

    /// Swaps in a freshly built timeline and returns to idle.
    pub fn load(&mut self, timeline: T) {
        self.timeline = timeline;
        self.reset();
    }

    fn finish(&mut self) {
        if self.playing {
            log::debug!("playback reached the last step");
            self.paused = true;
        }
        self.playing = false;
        self.next_advance = None;
    }
}
