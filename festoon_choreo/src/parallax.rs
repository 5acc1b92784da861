// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hero and panel-local parallax controllers.

use festoon_scroll::distance_into_view;
use kurbo::Rect;

use crate::surface::{GeometryProbe, Surface};

/// Fraction of the scroll offset applied to the hero backdrop layer.
const BACKDROP_FACTOR: f64 = 0.5;

/// Fraction of the scroll offset applied to the hero content layer.
const CONTENT_FACTOR: f64 = 0.2;

/// Scroll distance over which the hero content fades out completely.
const FADE_DISTANCE: f64 = 600.0;

/// Scale from an element's distance-into-view to its local parallax travel.
const LOCAL_SCALE: f64 = 0.1;

/// Travel factor for the first decorative layer (moves against the scroll).
const LIFT_FACTOR: f64 = -0.5;

/// Travel factor for the second decorative layer (moves with the scroll).
const DRIFT_FACTOR: f64 = 0.3;

/// Full-viewport hero parallax: slow backdrop, slower content, content fade.
///
/// Driven by the raw scroll offset (not normalized progress): the hero sits
/// at the top of the page, so its displacement is anchored to absolute
/// pixels scrolled. The backdrop translates at half scroll speed, the
/// content at a fifth, and the content fades out linearly over the first
/// 600 px.
#[derive(Copy, Clone, Debug)]
pub struct HeroParallax<K> {
    backdrop: K,
    content: K,
}

impl<K: Copy> HeroParallax<K> {
    /// Creates a controller writing to the given backdrop and content layers.
    #[must_use]
    pub const fn new(backdrop: K, content: K) -> Self {
        Self { backdrop, content }
    }

    /// Applies this frame's translations and fade for the given offset.
    pub fn drive(&self, offset_y: f64, surface: &mut impl Surface<K>) {
        surface.set_translation_y(self.backdrop, offset_y * BACKDROP_FACTOR);
        surface.set_translation_y(self.content, offset_y * CONTENT_FACTOR);
        surface.set_opacity(self.content, (1.0 - offset_y / FADE_DISTANCE).max(0.0));
    }
}

/// Panel-local parallax for a pair of decorative layers.
///
/// Active only while the owning element intersects the viewport. The
/// element's distance past the viewport's bottom edge, scaled by 0.1,
/// becomes a travel value pushed onto two layers with opposite-signed
/// factors, so they drift apart as the panel scrolls through the view.
///
/// Driving the controller while the element is off-screen or unmounted is a
/// no-op by design — frame flushes keep running for the rest of the page.
#[derive(Copy, Clone, Debug)]
pub struct LocalParallax<K> {
    element: K,
    lift: K,
    drift: K,
}

impl<K: Copy> LocalParallax<K> {
    /// Creates a controller gated on `element`, writing to the `lift` and
    /// `drift` layers.
    #[must_use]
    pub const fn new(element: K, lift: K, drift: K) -> Self {
        Self {
            element,
            lift,
            drift,
        }
    }

    /// Applies this frame's layer travel, if the element is on screen.
    pub fn drive(
        &self,
        viewport_height: f64,
        probe: &impl GeometryProbe<K>,
        surface: &mut impl Surface<K>,
    ) {
        let Some(rect) = probe.element_rect(self.element) else {
            return;
        };
        if !vertically_intersects(rect, viewport_height) {
            return;
        }
        let travel = distance_into_view(rect.y0, viewport_height) * LOCAL_SCALE;
        surface.set_translation_y(self.lift, travel * LIFT_FACTOR);
        surface.set_translation_y(self.drift, travel * DRIFT_FACTOR);
    }
}

/// Vertical-only intersection test against a viewport of the given height.
///
/// The rect is in viewport coordinates, so the viewport spans
/// `0..viewport_height` on the y axis.
fn vertically_intersects(rect: Rect, viewport_height: f64) -> bool {
    rect.y0 < viewport_height && rect.y1 > 0.0
}
