// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Festoon Choreo: frame-driven continuous scroll effects.
//!
//! This crate holds the continuous half of the choreography engine: effects
//! whose output is a pure function of the current scroll position, recomputed
//! once per rendered frame and written to presentation layers. Three effect
//! families cover the celebration page:
//!
//! - [`BackgroundTint`]: global scroll progress through a color stop table,
//!   written as the page background.
//! - [`HeroParallax`]: raw scroll offset split into a slow backdrop
//!   translation, a slower content translation, and a content fade.
//! - [`LocalParallax`]: a panel-local effect, active only while its owning
//!   element intersects the viewport, drifting two decorative layers in
//!   opposite directions.
//!
//! None of these subscribe to anything. The [`Director`] owns a
//! [`FrameGate`](festoon_frame::FrameGate) and the controller set; hosts
//! forward raw scroll events to [`Director::on_scroll`] (which answers
//! "request a frame now?") and call [`Director::flush`] from the frame
//! callback. A flush takes **one** [`ScrollSample`] and drives every
//! controller from that snapshot, so coupled effects can never tear against
//! each other within a frame.
//!
//! Presentation writes go through the [`Surface`] trait — an idempotent
//! set-this-property seam the host binds to real style writes, reactive
//! bindings, or a test recorder. Element geometry comes from a
//! [`GeometryProbe`]; a probe that returns `None` (element unmounted) simply
//! skips that controller for the frame.
//!
//! ```rust
//! use festoon_choreo::{Director, HeroParallax, Surface, GeometryProbe};
//! use festoon_scroll::ScrollSample;
//! use festoon_tint::{ColorStops, Rgb8};
//! # use kurbo::Rect;
//! # #[derive(Default)]
//! # struct Styles;
//! # impl Surface<&'static str> for Styles {
//! #     fn set_background(&mut self, _color: Rgb8) {}
//! #     fn set_translation_y(&mut self, _layer: &'static str, _y: f64) {}
//! #     fn set_opacity(&mut self, _layer: &'static str, _opacity: f64) {}
//! # }
//! # struct NoProbe;
//! # impl GeometryProbe<&'static str> for NoProbe {
//! #     fn element_rect(&self, _key: &'static str) -> Option<Rect> { None }
//! # }
//!
//! let mut director = Director::new();
//! director.set_background_tint(ColorStops::celebration());
//! director.set_hero(HeroParallax::new("hero-backdrop", "hero-content"));
//!
//! // Scroll events pour in; the first one asks for a frame.
//! assert!(director.on_scroll());
//! assert!(!director.on_scroll());
//!
//! // The frame arrives: sample once, drive everything.
//! let mut styles = Styles::default();
//! let sample = ScrollSample::new(300.0, 800.0, 2400.0);
//! assert!(director.flush(sample, &NoProbe, &mut styles));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

mod director;
mod parallax;
mod surface;
mod tint;

pub use director::Director;
pub use parallax::{HeroParallax, LocalParallax};
pub use surface::{GeometryProbe, Surface};
pub use tint::BackgroundTint;
