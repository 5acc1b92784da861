// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Background tint controller.

use festoon_scroll::Progress;
use festoon_tint::{ColorStops, Rgb8};

use crate::surface::Surface;

/// Maps global scroll progress through a color stop table to the page
/// background.
///
/// The controller remembers the last color it applied and skips the write
/// when a frame resolves to the same rounded color — scrolling within a
/// fraction of a percent should not touch the style system at all.
#[derive(Clone, Debug)]
pub struct BackgroundTint {
    stops: ColorStops,
    applied: Option<Rgb8>,
}

impl BackgroundTint {
    /// Creates a controller over the given stop table.
    #[must_use]
    pub fn new(stops: ColorStops) -> Self {
        Self {
            stops,
            applied: None,
        }
    }

    /// Returns the stop table.
    #[must_use]
    pub fn stops(&self) -> &ColorStops {
        &self.stops
    }

    /// Returns the color most recently written, if any.
    #[must_use]
    pub fn applied(&self) -> Option<Rgb8> {
        self.applied
    }

    /// Computes and applies the background for this frame's progress.
    ///
    /// Returns the color written, or `None` if the frame was skipped because
    /// the color did not change.
    pub fn drive<K>(&mut self, progress: Progress, surface: &mut impl Surface<K>) -> Option<Rgb8> {
        let color = self.stops.sample(progress.get());
        if self.applied == Some(color) {
            return None;
        }
        surface.set_background(color);
        self.applied = Some(color);
        Some(color)
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        backgrounds: Vec<Rgb8>,
    }

    impl Surface<u8> for Recorder {
        fn set_background(&mut self, color: Rgb8) {
            self.backgrounds.push(color);
        }

        fn set_translation_y(&mut self, _layer: u8, _y: f64) {}

        fn set_opacity(&mut self, _layer: u8, _opacity: f64) {}
    }

    #[test]
    fn first_drive_always_applies() {
        let mut tint = BackgroundTint::new(ColorStops::celebration());
        let mut surface = Recorder::default();

        let written = tint.drive(Progress::ZERO, &mut surface);
        assert_eq!(written, Some(Rgb8::new(255, 241, 242)));
        assert_eq!(surface.backgrounds.len(), 1);
    }

    #[test]
    fn unchanged_color_skips_the_write() {
        let mut tint = BackgroundTint::new(ColorStops::celebration());
        let mut surface = Recorder::default();

        let _ = tint.drive(Progress::new(0.5), &mut surface);
        // A hair of movement that rounds to the same color.
        let _ = tint.drive(Progress::new(0.5000001), &mut surface);
        assert_eq!(surface.backgrounds.len(), 1);

        let _ = tint.drive(Progress::ONE, &mut surface);
        assert_eq!(surface.backgrounds.len(), 2);
    }

    #[test]
    fn midpoint_matches_the_documented_rounding() {
        let mut tint = BackgroundTint::new(ColorStops::celebration());
        let mut surface = Recorder::default();

        let _ = tint.drive(Progress::new(0.5), &mut surface);
        assert_eq!(surface.backgrounds, [Rgb8::new(249, 235, 234)]);
    }
}
