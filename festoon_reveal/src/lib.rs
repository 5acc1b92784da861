// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Festoon Reveal: one-shot visibility latches for scroll-triggered content.
//!
//! Sections and cards on the celebration page start hidden and reveal the
//! first time enough of them scrolls into view — and then stay revealed,
//! even if they scroll back out. [`RevealSet`] is the state machine behind
//! that: a set of independent per-key latches, each `Pending` until its
//! visible fraction first meets its threshold, then terminally `Revealed`.
//!
//! The manager is host-agnostic in the `festoon` way: it accepts
//! pre-computed visible fractions (from an intersection observer, a
//! [`CardStrip`](https://docs.rs/festoon_carousel), or any other geometry
//! source) keyed by an application-chosen `Copy + Eq + Hash` id, and reports
//! transitions for the host to apply as class toggles or style writes.
//!
//! Latching a key also removes it from observation: the caller is told
//! exactly once, and afterwards intersection reports for that key are
//! ignored without doing any work. This mirrors the deregister-on-fire
//! contract of the discrete dispatch path — the latch, not scheduling, is
//! what makes redundant checks safe.
//!
//! ```rust
//! use festoon_reveal::{RevealSet, SECTION_THRESHOLD};
//!
//! let mut reveals = RevealSet::new();
//! reveals.observe(1_u32, SECTION_THRESHOLD);
//!
//! assert!(!reveals.on_intersection(1, 0.05)); // not enough visible yet
//! assert!(reveals.on_intersection(1, 0.2));   // latches, exactly once
//! assert!(!reveals.on_intersection(1, 0.9));  // already revealed: ignored
//! assert!(reveals.is_revealed(1));
//! ```
//!
//! When intersection observation is unavailable, call
//! [`RevealSet::reveal_all`] so content defaults to visible — observation is
//! an enhancement, never the thing standing between the visitor and the
//! page.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::{HashMap, HashSet};

/// Visible fraction required to reveal a page section.
pub const SECTION_THRESHOLD: f64 = 0.15;

/// Visible fraction required to reveal a photo card inside its strip.
pub const PHOTO_CARD_THRESHOLD: f64 = 0.4;

/// Visible fraction required to reveal a quote card inside its strip.
///
/// Deliberately low so cards never present as blank space mid-scroll.
pub const QUOTE_CARD_THRESHOLD: f64 = 0.1;

/// Presentation delay between adjacent cards in a staggered reveal, in
/// milliseconds.
pub const STAGGER_STEP_MS: u64 = 150;

/// Returns the presentation delay for the card at `index` in its list.
///
/// The delay is visual only: the latch transition itself is immediate when
/// the threshold is crossed, and the host applies this delay to the CSS
/// transition (or equivalent) it plays afterwards.
#[must_use]
pub fn stagger_delay_ms(index: usize) -> u64 {
    index as u64 * STAGGER_STEP_MS
}

/// Lifecycle of one reveal target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RevealPhase {
    /// Observed, waiting for the threshold crossing.
    Pending,
    /// Latched visible. Terminal: never returns to [`RevealPhase::Pending`].
    Revealed,
}

/// Independent one-shot reveal latches keyed by host ids.
///
/// # Type Parameters
///
/// - `K`: The target key, typically a section or card id. Must be
///   `Copy + Eq + Hash` and stable for the life of the element.
///
/// # Example
///
/// ```rust
/// use festoon_reveal::{RevealSet, PHOTO_CARD_THRESHOLD};
///
/// let mut reveals = RevealSet::new();
/// for id in 0_u32..10 {
///     reveals.observe(id, PHOTO_CARD_THRESHOLD);
/// }
///
/// // 35% visible at a 0.4 threshold: no reveal.
/// assert!(!reveals.on_intersection(3, 0.35));
/// // 41% visible: latches.
/// assert!(reveals.on_intersection(3, 0.41));
/// // Scrolling back out does not un-reveal.
/// assert!(!reveals.on_intersection(3, 0.0));
/// assert!(reveals.is_revealed(3));
///
/// // Firing one target never affects another.
/// assert!(!reveals.is_revealed(4));
/// ```
#[derive(Clone, Debug)]
pub struct RevealSet<K>
where
    K: Copy + Eq + Hash,
{
    /// Threshold per observed, not-yet-revealed target.
    pending: HashMap<K, f64>,
    /// Keys that have latched.
    revealed: HashSet<K>,
}

impl<K> Default for RevealSet<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> RevealSet<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            revealed: HashSet::new(),
        }
    }

    /// Registers a target with the given visible-fraction threshold.
    ///
    /// The threshold is clamped into `[0, 1]` (non-finite values clamp to
    /// `0`, which latches on the first report). Returns `false` without
    /// changing anything if the key has already revealed — a remounted
    /// element that latched earlier stays visible.
    pub fn observe(&mut self, key: K, threshold: f64) -> bool {
        if self.revealed.contains(&key) {
            return false;
        }
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.pending.insert(key, threshold);
        true
    }

    /// Reports a target's current visible fraction.
    ///
    /// Returns `true` exactly when this report latches the target: the first
    /// time the fraction meets the threshold. The target is removed from
    /// observation at that moment, so later reports for the key — higher,
    /// lower, or repeated crossings in either direction — return `false`
    /// and do no work. Unknown keys are ignored.
    pub fn on_intersection(&mut self, key: K, visible_fraction: f64) -> bool {
        let Some(&threshold) = self.pending.get(&key) else {
            return false;
        };
        if !visible_fraction.is_finite() || visible_fraction < threshold {
            return false;
        }
        self.pending.remove(&key);
        self.revealed.insert(key);
        true
    }

    /// Stops observing a pending target (element unmount).
    ///
    /// Returns `true` if the key was pending. Reveal memory is kept, so a
    /// key that already latched remains [`RevealPhase::Revealed`].
    pub fn unobserve(&mut self, key: K) -> bool {
        self.pending.remove(&key).is_some()
    }

    /// Latches every pending target at once, returning the keys revealed.
    ///
    /// This is the degraded path for hosts without intersection observation:
    /// content defaults to visible rather than staying permanently hidden.
    /// The returned order is unspecified.
    pub fn reveal_all(&mut self) -> Vec<K> {
        let keys: Vec<K> = self.pending.drain().map(|(key, _)| key).collect();
        for &key in &keys {
            self.revealed.insert(key);
        }
        keys
    }

    /// Returns the target's phase, or `None` if it was never observed (or
    /// was unobserved before latching).
    #[must_use]
    pub fn phase(&self, key: K) -> Option<RevealPhase> {
        if self.revealed.contains(&key) {
            Some(RevealPhase::Revealed)
        } else if self.pending.contains_key(&key) {
            Some(RevealPhase::Pending)
        } else {
            None
        }
    }

    /// Returns `true` if the key has latched.
    #[must_use]
    pub fn is_revealed(&self, key: K) -> bool {
        self.revealed.contains(&key)
    }

    /// Returns the number of targets still waiting to reveal.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Returns the number of targets that have latched.
    #[must_use]
    pub fn revealed_len(&self) -> usize {
        self.revealed.len()
    }

    /// Drops every registration and all reveal memory (view teardown).
    pub fn clear(&mut self) {
        self.pending.clear();
        self.revealed.clear();
    }
}
