// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Festoon Scroll: progress sampling and viewport visibility primitives.
//!
//! This crate provides the pure, stateless geometry layer underneath the
//! Festoon choreography crates. It answers two questions on demand:
//!
//! - How far through the scrollable document is the viewport right now?
//!   ([`ScrollSample`] → [`Progress`])
//! - How much of a given element is currently visible inside a viewport?
//!   ([`visible_fraction`], [`intersects`], [`distance_into_view`])
//!
//! Nothing here caches, subscribes, or schedules. Hosts capture a fresh
//! [`ScrollSample`] from their scroll source whenever they need one and hand
//! it to the downstream controllers; rate limiting is the caller's concern
//! (see `festoon_frame` for the coalescing half of that contract).
//!
//! ## Degenerate geometry
//!
//! Scroll geometry arrives from the outside world and can be briefly
//! nonsensical: a document shorter than its viewport, a zero-height window
//! mid-layout, non-finite values from an uninitialized measurement. All
//! entry points clamp such input to a safe result — progress `0`, fraction
//! `0` — rather than letting NaN or infinity propagate into style writes.
//!
//! ```rust
//! use festoon_scroll::ScrollSample;
//!
//! // Document no taller than the viewport: nothing to scroll.
//! let sample = ScrollSample::new(0.0, 800.0, 800.0);
//! assert_eq!(sample.progress().get(), 0.0);
//!
//! // Halfway through an 800px scrollable range.
//! let sample = ScrollSample::new(400.0, 800.0, 1600.0);
//! assert_eq!(sample.progress().get(), 0.5);
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

mod geometry;
mod sample;

pub use geometry::{distance_into_view, intersects, visible_fraction};
pub use sample::{Progress, ScrollSample};
