// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The director: frame gate plus controller fan-out.

use festoon_frame::FrameGate;
use festoon_scroll::ScrollSample;
use smallvec::SmallVec;

use crate::parallax::{HeroParallax, LocalParallax};
use crate::surface::{GeometryProbe, Surface};
use crate::tint::BackgroundTint;

/// Owns the continuous controllers and the frame gate that drives them.
///
/// The director is the composition point for the continuous dispatch path:
/// raw scroll events go to [`on_scroll`](Self::on_scroll) (at any rate), and
/// the host's frame callback goes to [`flush`](Self::flush), which samples
/// scroll geometry **once** and fans out to every attached controller from
/// that snapshot. Controllers never see different samples within one frame.
///
/// Mount-time note: the gate starts quiet, so hosts that want an initial
/// paint before the first scroll event call [`on_scroll`](Self::on_scroll)
/// once during mount, exactly as they would for a real event.
///
/// # Example
///
/// See the [crate docs](crate).
#[derive(Clone, Debug)]
pub struct Director<K> {
    gate: FrameGate,
    tint: Option<BackgroundTint>,
    hero: Option<HeroParallax<K>>,
    locals: SmallVec<[LocalParallax<K>; 2]>,
}

impl<K: Copy> Director<K> {
    /// Creates a director with no controllers attached.
    #[must_use]
    pub fn new() -> Self {
        Self {
            gate: FrameGate::new(),
            tint: None,
            hero: None,
            locals: SmallVec::new(),
        }
    }

    /// Attaches (or replaces) the background tint controller.
    pub fn set_background_tint(&mut self, stops: festoon_tint::ColorStops) {
        self.tint = Some(BackgroundTint::new(stops));
    }

    /// Attaches (or replaces) the hero parallax controller.
    pub fn set_hero(&mut self, hero: HeroParallax<K>) {
        self.hero = Some(hero);
    }

    /// Attaches a panel-local parallax controller.
    pub fn push_local(&mut self, local: LocalParallax<K>) {
        self.locals.push(local);
    }

    /// Forwards one scroll notification to the frame gate.
    ///
    /// Returns `true` exactly when the host must request an animation frame;
    /// see [`FrameGate::notify`].
    pub fn on_scroll(&mut self) -> bool {
        self.gate.notify()
    }

    /// Returns `true` if a flush is scheduled but has not run yet.
    #[must_use]
    pub fn is_frame_pending(&self) -> bool {
        self.gate.is_pending()
    }

    /// Runs the frame flush, if one is pending.
    ///
    /// Returns `false` (doing nothing) when no notification arrived since
    /// the last flush — a stale frame callback is harmless. Otherwise every
    /// controller is driven from the single `sample` snapshot: tint from its
    /// normalized progress, hero from its raw offset, locals from element
    /// geometry supplied by `probe`.
    pub fn flush(
        &mut self,
        sample: ScrollSample,
        probe: &impl GeometryProbe<K>,
        surface: &mut impl Surface<K>,
    ) -> bool {
        if !self.gate.begin_frame() {
            return false;
        }

        if let Some(tint) = &mut self.tint {
            let _ = tint.drive(sample.progress(), surface);
        }
        if let Some(hero) = &self.hero {
            hero.drive(sample.offset_y, surface);
        }
        for local in &self.locals {
            local.drive(sample.viewport_height, probe, surface);
        }
        true
    }

    /// Detaches every controller and cancels any pending flush.
    ///
    /// After teardown the director holds no registrations: a frame callback
    /// that was already scheduled will find nothing pending.
    pub fn teardown(&mut self) {
        self.gate.cancel();
        self.tint = None;
        self.hero = None;
        self.locals.clear();
    }
}

impl<K: Copy> Default for Director<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use festoon_tint::{ColorStops, Rgb8};
    use kurbo::Rect;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Op {
        Background(Rgb8),
        Translate(&'static str, f64),
        Opacity(&'static str, f64),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl Surface<&'static str> for Recorder {
        fn set_background(&mut self, color: Rgb8) {
            self.ops.push(Op::Background(color));
        }

        fn set_translation_y(&mut self, layer: &'static str, y: f64) {
            self.ops.push(Op::Translate(layer, y));
        }

        fn set_opacity(&mut self, layer: &'static str, opacity: f64) {
            self.ops.push(Op::Opacity(layer, opacity));
        }
    }

    struct NoProbe;

    impl GeometryProbe<&'static str> for NoProbe {
        fn element_rect(&self, _key: &'static str) -> Option<Rect> {
            None
        }
    }

    struct PanelProbe;

    impl GeometryProbe<&'static str> for PanelProbe {
        fn element_rect(&self, key: &'static str) -> Option<Rect> {
            (key == "panel").then(|| Rect::new(0.0, 400.0, 600.0, 1100.0))
        }
    }

    fn full_director() -> Director<&'static str> {
        let mut director = Director::new();
        director.set_background_tint(ColorStops::celebration());
        director.set_hero(HeroParallax::new("backdrop", "content"));
        director.push_local(LocalParallax::new("panel", "lift", "drift"));
        director
    }

    #[test]
    fn scroll_burst_produces_one_flush() {
        let mut director = full_director();
        let mut surface = Recorder::default();

        let mut frame_requests = 0;
        for _ in 0..50 {
            if director.on_scroll() {
                frame_requests += 1;
            }
        }
        assert_eq!(frame_requests, 1);

        let sample = ScrollSample::new(400.0, 800.0, 1600.0);
        assert!(director.flush(sample, &PanelProbe, &mut surface));
        let ops_after_first = surface.ops.len();

        // The same frame callback firing again is a no-op.
        assert!(!director.flush(sample, &PanelProbe, &mut surface));
        assert_eq!(surface.ops.len(), ops_after_first);
    }

    #[test]
    fn flush_drives_all_controllers_from_one_sample() {
        let mut director = full_director();
        let mut surface = Recorder::default();

        let _ = director.on_scroll();
        let sample = ScrollSample::new(400.0, 800.0, 1600.0);
        assert!(director.flush(sample, &PanelProbe, &mut surface));

        // Tint from progress 0.5, hero from offset 400, local from the
        // panel at 400px: one consistent snapshot.
        assert_eq!(surface.ops[0], Op::Background(Rgb8::new(249, 235, 234)));
        assert_eq!(surface.ops[1], Op::Translate("backdrop", 200.0));
        assert_eq!(surface.ops[2], Op::Translate("content", 80.0));
        assert!(matches!(surface.ops[3], Op::Opacity("content", _)));
        assert!(matches!(surface.ops[4], Op::Translate("lift", _)));
        assert!(matches!(surface.ops[5], Op::Translate("drift", _)));
    }

    #[test]
    fn unmounted_panel_skips_only_the_local_effect() {
        let mut director = full_director();
        let mut surface = Recorder::default();

        let _ = director.on_scroll();
        let sample = ScrollSample::new(100.0, 800.0, 1600.0);
        assert!(director.flush(sample, &NoProbe, &mut surface));

        assert!(
            !surface
                .ops
                .iter()
                .any(|op| matches!(op, Op::Translate("lift" | "drift", _))),
            "local layers must not be written when the panel is unmounted"
        );
        assert!(matches!(surface.ops[0], Op::Background(_)));
    }

    #[test]
    fn teardown_leaves_nothing_pending() {
        let mut director = full_director();
        let mut surface = Recorder::default();

        let _ = director.on_scroll();
        director.teardown();

        assert!(!director.is_frame_pending());
        let sample = ScrollSample::new(100.0, 800.0, 1600.0);
        assert!(!director.flush(sample, &PanelProbe, &mut surface));
        assert!(surface.ops.is_empty());
    }

    #[test]
    fn background_writes_are_skipped_when_static() {
        let mut director = full_director();
        let mut surface = Recorder::default();
        let sample = ScrollSample::new(400.0, 800.0, 1600.0);

        let _ = director.on_scroll();
        let _ = director.flush(sample, &NoProbe, &mut surface);
        let _ = director.on_scroll();
        let _ = director.flush(sample, &NoProbe, &mut surface);

        let backgrounds = surface
            .ops
            .iter()
            .filter(|op| matches!(op, Op::Background(_)))
            .count();
        assert_eq!(backgrounds, 1);
    }
}
