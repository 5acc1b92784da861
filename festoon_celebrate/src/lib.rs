// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Festoon Celebrate: the page's one-shot confetti moment.
//!
//! The first time the visitor scrolls past a small threshold — whether by
//! hand or because the hero's "start" button scrolled them there — the page
//! fires a single multi-second confetti burst. This crate owns everything
//! stateful about that moment:
//!
//! - [`CelebrationState`]: a session-scoped monotonic latch. One boolean,
//!   set exactly once, never reset. It is an explicit value owned by the
//!   page session, not a hidden global, and its idempotent check-and-set is
//!   what makes redundant trigger checks safe.
//! - [`CelebrationTrigger`]: the discrete scroll check. It runs on the raw
//!   event path (a one-shot comparison is cheap enough to skip frame
//!   coalescing) and converts the first threshold crossing into a
//!   [`Burst`].
//! - [`Burst`]: the deterministic launch plan — two symmetric shots per
//!   step, one from each page edge, stepped at the host's frame rate until
//!   a 2.5 second deadline passes. Shots are handed to a [`ParticleSink`],
//!   the opaque particle-renderer capability; nothing about the particles
//!   themselves lives here.
//!
//! ```rust
//! use festoon_celebrate::{CelebrationState, CelebrationTrigger, ParticleSink, ConfettiShot};
//!
//! struct CountingSink(usize);
//! impl ParticleSink for CountingSink {
//!     fn fire(&mut self, _shot: &ConfettiShot) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut state = CelebrationState::new();
//! let trigger = CelebrationTrigger::new();
//!
//! // Top of the page: nothing yet.
//! assert!(trigger.on_scroll(40.0, 800.0, &mut state).is_none());
//!
//! // Past 10% of the viewport: the one and only burst.
//! let mut burst = trigger.on_scroll(120.0, 800.0, &mut state).unwrap();
//! assert!(trigger.on_scroll(400.0, 800.0, &mut state).is_none());
//!
//! // Host steps the burst from its frame loop.
//! let mut sink = CountingSink(0);
//! assert!(burst.step(0.0, &mut sink));
//! assert_eq!(sink.0, 2); // left and right edge shots
//! assert!(!burst.step(2500.0, &mut sink)); // deadline passed
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

use festoon_frame::FrameBudget;

/// Fraction of the viewport height that must scroll past before the
/// celebration fires.
pub const TRIGGER_VIEWPORT_FRACTION: f64 = 0.1;

/// Total confetti burst duration, in milliseconds.
pub const BURST_DURATION_MS: f64 = 2500.0;

/// Particles per shot. The burst fires every frame, so small shots stack
/// into a steady stream.
pub const SHOT_PARTICLE_COUNT: u32 = 3;

/// Launch spread of each shot, in degrees.
pub const SHOT_SPREAD: f64 = 55.0;

/// Theme palette: rose, gold, white.
pub const SHOT_COLORS: [&str; 5] = ["#f43f5e", "#fb7185", "#fecdd3", "#fbbf24", "#ffffff"];

/// The session-scoped celebration latch.
///
/// Initialized unfired at page load; [`mark_fired`](Self::mark_fired) flips
/// it exactly once and it never resets. Redundant calls within the same
/// synchronous turn are harmless: only the call that performs the
/// transition reports `true`.
#[derive(Clone, Debug, Default)]
pub struct CelebrationState {
    fired: bool,
}

impl CelebrationState {
    /// Creates an unfired latch.
    #[must_use]
    pub const fn new() -> Self {
        Self { fired: false }
    }

    /// Returns `true` once the celebration has fired.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        self.fired
    }

    /// Latches the state. Returns `true` only for the call that performed
    /// the transition.
    pub fn mark_fired(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Discrete scroll check that launches the celebration exactly once.
///
/// Runs on the raw event path, independent of the frame-coalesced
/// controllers: the latch, not scheduling, is what prevents duplicates.
#[derive(Copy, Clone, Debug, Default)]
pub struct CelebrationTrigger;

impl CelebrationTrigger {
    /// Creates a trigger using [`TRIGGER_VIEWPORT_FRACTION`].
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Checks one scroll notification.
    ///
    /// Fires when the offset exceeds a tenth of the viewport height and the
    /// latch is still unfired — catching both manual scrolls leaving the top
    /// and the programmatic scroll from the hero's call-to-action. Returns
    /// the burst to run on the transition, `None` on every other call for
    /// the rest of the session.
    pub fn on_scroll(
        &self,
        offset_y: f64,
        viewport_height: f64,
        state: &mut CelebrationState,
    ) -> Option<Burst> {
        if !offset_y.is_finite() || !viewport_height.is_finite() {
            return None;
        }
        if offset_y <= viewport_height * TRIGGER_VIEWPORT_FRACTION {
            return None;
        }
        state.mark_fired().then(Burst::new)
    }
}

/// One fire-and-forget confetti launch request.
///
/// Mirrors the particle capability's configuration surface: the core fills
/// these in deterministically and never observes a result.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiShot {
    /// Number of particles in this shot.
    pub particle_count: u32,
    /// Launch angle in degrees (90 is straight up).
    pub angle: f64,
    /// Spread around the launch angle, in degrees.
    pub spread: f64,
    /// Launch origin in normalized page coordinates (`0..1` on each axis).
    pub origin: (f64, f64),
    /// Particle colors, as CSS color strings.
    pub colors: &'static [&'static str],
}

/// The opaque particle-renderer capability.
///
/// Implementations render the shot however they like; the burst only calls
/// [`fire`](Self::fire) and never reads anything back.
pub trait ParticleSink {
    /// Launches one shot.
    fn fire(&mut self, shot: &ConfettiShot);
}

/// Deterministic bidirectional confetti plan.
///
/// Each step launches two symmetric shots — from the left page edge at 60°
/// and the right page edge at 120°, both slightly below center height — and
/// the host keeps stepping from its frame loop (~60 steps/second) until the
/// 2.5 second budget is spent.
#[derive(Clone, Debug)]
pub struct Burst {
    budget: FrameBudget,
    steps_taken: u32,
}

impl Burst {
    /// Creates a burst with the standard duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            budget: FrameBudget::new(BURST_DURATION_MS),
            steps_taken: 0,
        }
    }

    /// The left-edge shot fired on every step.
    #[must_use]
    pub const fn left_shot() -> ConfettiShot {
        ConfettiShot {
            particle_count: SHOT_PARTICLE_COUNT,
            angle: 60.0,
            spread: SHOT_SPREAD,
            origin: (0.0, 0.6),
            colors: &SHOT_COLORS,
        }
    }

    /// The right-edge shot fired on every step.
    #[must_use]
    pub const fn right_shot() -> ConfettiShot {
        ConfettiShot {
            particle_count: SHOT_PARTICLE_COUNT,
            angle: 120.0,
            spread: SHOT_SPREAD,
            origin: (1.0, 0.6),
            colors: &SHOT_COLORS,
        }
    }

    /// Runs one step of the plan at `elapsed_ms` since launch.
    ///
    /// Fires the symmetric shot pair while the deadline has not passed and
    /// returns `true`; once the budget is spent it fires nothing and
    /// returns `false`, telling the host to stop scheduling steps.
    pub fn step(&mut self, elapsed_ms: f64, sink: &mut impl ParticleSink) -> bool {
        if !self.budget.is_active(elapsed_ms) {
            return false;
        }
        sink.fire(&Self::left_shot());
        sink.fire(&Self::right_shot());
        self.steps_taken = self.steps_taken.saturating_add(1);
        true
    }

    /// Returns how many steps have fired so far.
    #[must_use]
    pub const fn steps_taken(&self) -> u32 {
        self.steps_taken
    }

    /// Returns `true` while the burst still has budget at `elapsed_ms`.
    #[must_use]
    pub fn is_active(&self, elapsed_ms: f64) -> bool {
        self.budget.is_active(elapsed_ms)
    }
}

impl Default for Burst {
    fn default() -> Self {
        Self::new()
    }
}
