// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-vs-viewport visibility queries.

use kurbo::Rect;

/// Returns the fraction of `element` that lies inside `viewport`, in `[0, 1]`.
///
/// This is the quantity reveal thresholds are expressed in: a card that is
/// 40% scrolled into its strip has a visible fraction of `0.4`. Degenerate
/// elements (zero or non-finite area) report `0`.
///
/// # Example
///
/// ```rust
/// use kurbo::Rect;
/// use festoon_scroll::visible_fraction;
///
/// let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
/// let element = Rect::new(0.0, 450.0, 800.0, 750.0);
/// assert_eq!(visible_fraction(element, viewport), 0.5);
/// ```
#[must_use]
pub fn visible_fraction(element: Rect, viewport: Rect) -> f64 {
    let element = element.abs();
    let area = element.area();
    if !area.is_finite() || area <= 0.0 {
        return 0.0;
    }
    let overlap = element.intersect(viewport.abs()).area();
    if overlap.is_finite() {
        (overlap / area).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Returns `true` if any part of `element` overlaps `viewport`.
///
/// Edge-adjacent rectangles (sharing only a boundary) do not count as
/// overlapping.
#[must_use]
pub fn intersects(element: Rect, viewport: Rect) -> bool {
    visible_fraction(element, viewport) > 0.0
}

/// Distance an element's top edge has travelled past the viewport's bottom.
///
/// `element_top` is in viewport coordinates (0 at the top of the viewport).
/// The result grows as the element scrolls further into view and is negative
/// while the element is still below the fold. Local parallax effects scale
/// this distance to displace their decorative layers.
#[must_use]
pub fn distance_into_view(element_top: f64, viewport_height: f64) -> f64 {
    viewport_height - element_top
}
