// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared scaffolding for the Festoon demos: console-backed hosts.

use festoon_celebrate::{ConfettiShot, ParticleSink};
use festoon_choreo::{GeometryProbe, Surface};
use festoon_page::PageLayer;
use festoon_tint::Rgb8;
use kurbo::Rect;

/// A [`Surface`] that prints every style write to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSurface;

impl Surface<PageLayer> for ConsoleSurface {
    fn set_background(&mut self, color: Rgb8) {
        println!("    style: page background = {}", color.to_css());
    }

    fn set_translation_y(&mut self, layer: PageLayer, y: f64) {
        println!("    style: {layer:?} translateY = {y:.1}px");
    }

    fn set_opacity(&mut self, layer: PageLayer, opacity: f64) {
        println!("    style: {layer:?} opacity = {opacity:.2}");
    }
}

/// A [`ParticleSink`] that prints each confetti shot.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    shots: usize,
}

impl ConsoleSink {
    /// Returns how many shots have been fired.
    #[must_use]
    pub fn shots(&self) -> usize {
        self.shots
    }
}

impl ParticleSink for ConsoleSink {
    fn fire(&mut self, shot: &ConfettiShot) {
        self.shots += 1;
        println!(
            "    confetti: {} particles at {}deg from ({:.1}, {:.1})",
            shot.particle_count, shot.angle, shot.origin.0, shot.origin.1
        );
    }
}

/// Fixed page layout for the scripted demo, in document coordinates.
///
/// Answers geometry queries the way a real host would answer them from
/// layout: element rects are reported relative to the current viewport.
#[derive(Debug, Clone, Copy)]
pub struct DemoLayout {
    /// Document-space top of the oracle panel.
    pub oracle_top: f64,
    /// Height of the oracle panel.
    pub oracle_height: f64,
    /// Current scroll offset, updated by the demo as it scrolls.
    pub scroll_offset: f64,
}

impl GeometryProbe<PageLayer> for DemoLayout {
    fn element_rect(&self, key: PageLayer) -> Option<Rect> {
        if key != PageLayer::OraclePanel {
            return None;
        }
        let top = self.oracle_top - self.scroll_offset;
        Some(Rect::new(0.0, top, 800.0, top + self.oracle_height))
    }
}
