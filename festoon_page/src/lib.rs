// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Festoon Page: the assembled celebration page session.
//!
//! The lower `festoon_*` crates each model one concern — progress sampling,
//! frame coalescing, tint, parallax, reveals, card strips, the celebration,
//! the oracle. This crate is where a concrete page mounts them all
//! concurrently and gives them one lifecycle:
//!
//! - [`PageSession`] wires the continuous controllers (background tint over
//!   the celebration palette, hero parallax, oracle-panel parallax) behind a
//!   single frame gate, owns the one-shot reveal sets for the message
//!   section and both card strips, holds the session-scoped celebration
//!   latch, and carries the oracle form's state machine.
//! - [`assets`](crate::assets) holds the read-only photo and quote tables
//!   the galleries are built from; stable ids in those tables key the
//!   reveal latches.
//!
//! The host (a browser shell, a native canvas, a test harness) remains
//! responsible for real event sources and real style writes: it forwards
//! scroll/intersection events in, and binds the
//! [`Surface`](festoon_choreo::Surface) /
//! [`ParticleSink`](festoon_celebrate::ParticleSink) seams out. The
//! `festoon_demos` member shows a complete scripted host.

pub mod assets;
mod session;

pub use session::{
    CardReveal, PHOTO_CARD_EXTENT, PHOTO_CARD_GAP, PageLayer, PageSession, QUOTE_CARD_EXTENT,
    QUOTE_CARD_GAP, STRIP_NUDGE, ScrollOutcome, Section,
};
