// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The presentation seam between controllers and the host.

use festoon_tint::Rgb8;
use kurbo::Rect;

/// Host-side sink for the visual properties controllers compute.
///
/// Each controller owns the layers it writes; no layer is shared between two
/// controllers. Implementations must make every setter **idempotent** —
/// writing the same value twice is indistinguishable from writing it once —
/// because controllers recompute absolute values each frame rather than
/// accumulating deltas. Beyond that the binding mechanism is the host's
/// business: direct style mutation, a reactive store, or a diffed view tree
/// all satisfy the contract.
///
/// # Type Parameters
///
/// - `K`: The host's layer key type, typically a small id or enum.
pub trait Surface<K> {
    /// Sets the page background color.
    fn set_background(&mut self, color: Rgb8);

    /// Sets a layer's vertical translation, in logical pixels.
    fn set_translation_y(&mut self, layer: K, y: f64);

    /// Sets a layer's opacity in `[0, 1]`.
    fn set_opacity(&mut self, layer: K, opacity: f64);
}

/// Host-side source of element geometry, queried at flush time.
///
/// Rects are in viewport coordinates (the viewport's top-left is the
/// origin), matching what a `getBoundingClientRect`-style measurement
/// returns. Returning `None` means the element is unmounted; controllers
/// gated on an element treat that as "skip this frame", never as an error.
pub trait GeometryProbe<K> {
    /// Returns the element's current bounds, or `None` if it is unmounted.
    fn element_rect(&self, key: K) -> Option<Rect>;
}
