// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Festoon Tint: scroll-indexed color stop interpolation.
//!
//! The celebratory page's background drifts through a table of pastel colors
//! as the visitor scrolls. This crate owns that mapping: an ordered table of
//! RGB stops ([`ColorStops`]) sampled by a normalized scroll fraction,
//! producing one [`Rgb8`] per frame for the host to write as the page
//! background.
//!
//! Sampling is piecewise-linear between adjacent stops. A fraction `t` in
//! `[0, 1]` lands at position `t * (len - 1)` along the table; the integer
//! part selects the segment and the fractional part blends the two bounding
//! stops per channel. Interpolated channels never overshoot the bounds of
//! the two stops they blend.
//!
//! ## Rounding
//!
//! Channel math happens in `f64` and the result is rounded **half away from
//! zero** (for these non-negative channel values, round-half-up). This is the
//! one place the mapping is not fully dictated by the geometry, so it is
//! fixed here for reproducibility: sampling the default table at `0.5` is
//! exactly `rgb(249, 235, 234)`.
//!
//! ```rust
//! use festoon_tint::{ColorStops, Rgb8};
//!
//! let stops = ColorStops::celebration();
//! assert_eq!(stops.sample(0.0), Rgb8::new(255, 241, 242));
//! assert_eq!(stops.sample(0.5), Rgb8::new(249, 235, 234));
//! assert_eq!(stops.sample(0.5).to_css(), "rgb(249, 235, 234)");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// A packed 8-bit-per-channel RGB color.
///
/// This is the unit the background tint controller hands to hosts. Convert
/// to [`peniko::Color`] for renderers, or use [`Rgb8::to_css`] for style
/// sinks that take CSS color strings.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats as a CSS `rgb(r, g, b)` string.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl fmt::Debug for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgb8({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<Rgb8> for peniko::Color {
    fn from(color: Rgb8) -> Self {
        Self::from_rgb8(color.r, color.g, color.b)
    }
}

impl From<peniko::Color> for Rgb8 {
    /// Converts from a render color, discarding alpha.
    fn from(color: peniko::Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

/// Error returned when a stop table is too short to interpolate.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct TooFewStops {
    /// The number of stops that were provided.
    pub provided: usize,
}

impl fmt::Debug for TooFewStops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooFewStops")
            .field("provided", &self.provided)
            .finish()
    }
}

impl fmt::Display for TooFewStops {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a color stop table needs at least 2 stops, got {}",
            self.provided
        )
    }
}

impl core::error::Error for TooFewStops {}

/// An ordered table of color stops sampled by a `[0, 1]` fraction.
///
/// # Example
///
/// ```rust
/// use festoon_tint::{ColorStops, Rgb8};
///
/// let stops = ColorStops::new([Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255)]).unwrap();
/// assert_eq!(stops.sample(0.5), Rgb8::new(128, 128, 128));
///
/// // Fewer than two stops cannot be interpolated.
/// assert!(ColorStops::new([Rgb8::new(0, 0, 0)]).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ColorStops {
    stops: Vec<Rgb8>,
}

impl ColorStops {
    /// Creates a stop table.
    ///
    /// # Errors
    ///
    /// Returns [`TooFewStops`] unless at least two stops are provided.
    pub fn new(stops: impl Into<Vec<Rgb8>>) -> Result<Self, TooFewStops> {
        let stops = stops.into();
        if stops.len() < 2 {
            return Err(TooFewStops {
                provided: stops.len(),
            });
        }
        Ok(Self { stops })
    }

    /// The celebration page's pastel table: rose, purple, orange, indigo.
    #[must_use]
    pub fn celebration() -> Self {
        Self {
            stops: alloc::vec![
                Rgb8::new(255, 241, 242),
                Rgb8::new(243, 232, 255),
                Rgb8::new(255, 237, 213),
                Rgb8::new(224, 231, 255),
            ],
        }
    }

    /// Returns the stops in order.
    #[must_use]
    pub fn stops(&self) -> &[Rgb8] {
        &self.stops
    }

    /// Returns the number of stops (always at least 2).
    #[must_use]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Samples the table at a fraction in `[0, 1]`.
    ///
    /// Out-of-range and non-finite fractions clamp to the nearest end of the
    /// table. Channels round half away from zero (see the [crate docs](crate)).
    #[must_use]
    pub fn sample(&self, fraction: f64) -> Rgb8 {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };

        let last = self.stops.len() - 1;
        let position = fraction * last as f64;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "position is non-negative and bounded by the stop count"
        )]
        let index = (libm::floor(position) as usize).min(last);
        let next = (index + 1).min(last);
        let factor = position - index as f64;

        let start = self.stops[index];
        let end = self.stops[next];
        Rgb8::new(
            blend_channel(start.r, end.r, factor),
            blend_channel(start.g, end.g, factor),
            blend_channel(start.b, end.b, factor),
        )
    }
}

fn blend_channel(start: u8, end: u8, factor: f64) -> u8 {
    let value = f64::from(start) + (f64::from(end) - f64::from(start)) * factor;
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the blend stays within the two stops' u8 channel range"
    )]
    {
        libm::round(value) as u8
    }
}
