// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page session: every controller mounted concurrently, independent.

use festoon_carousel::CardStrip;
use festoon_celebrate::{Burst, CelebrationState, CelebrationTrigger, ParticleSink};
use festoon_choreo::{Director, GeometryProbe, HeroParallax, LocalParallax, Surface};
use festoon_oracle::OraclePanel;
use festoon_reveal::{
    PHOTO_CARD_THRESHOLD, QUOTE_CARD_THRESHOLD, RevealSet, SECTION_THRESHOLD, stagger_delay_ms,
};
use festoon_scroll::ScrollSample;
use festoon_tint::ColorStops;

use crate::assets::{PHOTOS, QUOTES};

/// Width of a photo card in the photobooth strip, in logical pixels.
pub const PHOTO_CARD_EXTENT: f64 = 350.0;

/// Gap between photo cards.
pub const PHOTO_CARD_GAP: f64 = 64.0;

/// Width of a quote card in the wisdom strip.
pub const QUOTE_CARD_EXTENT: f64 = 380.0;

/// Gap between quote cards.
pub const QUOTE_CARD_GAP: f64 = 24.0;

/// Distance the strip "scroll right" affordance nudges by.
pub const STRIP_NUDGE: f64 = 300.0;

/// Sections observed for one-shot reveals.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// The "special note" message panel.
    Message,
    /// The photobooth gallery as a whole (its cards reveal individually).
    PhotoGallery,
}

/// Presentation layers the continuous controllers write to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageLayer {
    /// The hero's slow-scrolling backdrop image.
    HeroBackdrop,
    /// The hero's headline content block.
    HeroContent,
    /// The oracle panel element (geometry key for its local parallax).
    OraclePanel,
    /// The oracle panel's first decorative blob.
    OracleBlobLift,
    /// The oracle panel's second decorative blob.
    OracleBlobDrift,
}

/// What one discrete scroll notification asked of the host.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollOutcome {
    /// Request an animation frame and call [`PageSession::on_frame`] from it.
    pub request_frame: bool,
    /// The celebration just latched; start stepping
    /// [`PageSession::step_celebration`] from the frame loop.
    pub celebration_started: bool,
}

/// A card that latched revealed during a strip poll.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CardReveal {
    /// The card's stable asset id.
    pub id: u32,
    /// Presentation delay for the card's transition, from its strip index.
    pub stagger_ms: u64,
}

/// The assembled page: choreography, reveals, galleries, celebration, and
/// the oracle, owned together for the life of one page view.
///
/// Components stay fully decoupled — none reads another's state — but the
/// session gives them a single mount/teardown lifecycle and routes the two
/// dispatch paths:
///
/// - **Discrete** (per event, unthrottled): [`on_scroll`](Self::on_scroll)
///   for the celebration check and frame-gate notify;
///   [`on_section_intersection`](Self::on_section_intersection),
///   [`poll_photo_reveals`](Self::poll_photo_reveals), and
///   [`poll_quote_reveals`](Self::poll_quote_reveals) for the one-shot
///   latches.
/// - **Continuous** (frame-coalesced): [`on_frame`](Self::on_frame), which
///   drives all continuous controllers from one scroll snapshot.
///
/// # Example
///
/// ```rust
/// use festoon_page::{PageSession, Section};
/// use festoon_scroll::ScrollSample;
///
/// let mut session = PageSession::new();
///
/// // A scroll event arrives from the host.
/// let sample = ScrollSample::new(120.0, 800.0, 4000.0);
/// let outcome = session.on_scroll(sample);
/// assert!(outcome.request_frame);
/// assert!(outcome.celebration_started); // 120 > 10% of 800
///
/// // The message section scrolls into view.
/// assert!(session.on_section_intersection(Section::Message, 0.2));
/// assert!(session.section_revealed(Section::Message));
/// ```
#[derive(Debug)]
pub struct PageSession {
    director: Director<PageLayer>,
    sections: RevealSet<Section>,
    photo_reveals: RevealSet<u32>,
    quote_reveals: RevealSet<u32>,
    photo_strip: CardStrip,
    quote_strip: CardStrip,
    celebration: CelebrationState,
    trigger: CelebrationTrigger,
    burst: Option<Burst>,
    oracle: OraclePanel,
}

impl PageSession {
    /// Mounts the whole page.
    ///
    /// Strip viewports start at zero extent; hosts report real container
    /// sizes via [`set_photo_viewport`](Self::set_photo_viewport) and
    /// [`set_quote_viewport`](Self::set_quote_viewport) once layout has run.
    #[must_use]
    pub fn new() -> Self {
        let mut director = Director::new();
        director.set_background_tint(ColorStops::celebration());
        director.set_hero(HeroParallax::new(
            PageLayer::HeroBackdrop,
            PageLayer::HeroContent,
        ));
        director.push_local(LocalParallax::new(
            PageLayer::OraclePanel,
            PageLayer::OracleBlobLift,
            PageLayer::OracleBlobDrift,
        ));

        let mut sections = RevealSet::new();
        sections.observe(Section::Message, SECTION_THRESHOLD);
        sections.observe(Section::PhotoGallery, SECTION_THRESHOLD);

        let mut photo_reveals = RevealSet::new();
        for photo in &PHOTOS {
            photo_reveals.observe(photo.id, PHOTO_CARD_THRESHOLD);
        }

        let mut quote_reveals = RevealSet::new();
        for quote in &QUOTES {
            quote_reveals.observe(quote.id, QUOTE_CARD_THRESHOLD);
        }

        Self {
            director,
            sections,
            photo_reveals,
            quote_reveals,
            photo_strip: CardStrip::new(PHOTOS.len(), PHOTO_CARD_EXTENT, PHOTO_CARD_GAP, 0.0),
            quote_strip: CardStrip::new(QUOTES.len(), QUOTE_CARD_EXTENT, QUOTE_CARD_GAP, 0.0),
            celebration: CelebrationState::new(),
            trigger: CelebrationTrigger::new(),
            burst: None,
            oracle: OraclePanel::new(),
        }
    }

    /// Handles one raw scroll notification (the discrete path).
    ///
    /// Checks the celebration trigger — programmatic scrolls included, since
    /// they arrive here like any other — and notifies the frame gate.
    pub fn on_scroll(&mut self, sample: ScrollSample) -> ScrollOutcome {
        let mut outcome = ScrollOutcome {
            request_frame: self.director.on_scroll(),
            celebration_started: false,
        };
        if let Some(burst) =
            self.trigger
                .on_scroll(sample.offset_y, sample.viewport_height, &mut self.celebration)
        {
            self.burst = Some(burst);
            outcome.celebration_started = true;
        }
        outcome
    }

    /// Runs the coalesced frame flush (the continuous path).
    ///
    /// Returns `false` when no scroll notification arrived since the last
    /// flush. All controllers observe the same `sample`.
    pub fn on_frame(
        &mut self,
        sample: ScrollSample,
        probe: &impl GeometryProbe<PageLayer>,
        surface: &mut impl Surface<PageLayer>,
    ) -> bool {
        self.director.flush(sample, probe, surface)
    }

    /// Steps the running celebration burst, if any.
    ///
    /// Returns `true` while the burst is still active; once the deadline
    /// passes the burst is dropped and further calls are no-ops.
    pub fn step_celebration(&mut self, elapsed_ms: f64, sink: &mut impl ParticleSink) -> bool {
        let Some(burst) = &mut self.burst else {
            return false;
        };
        let active = burst.step(elapsed_ms, sink);
        if !active {
            self.burst = None;
        }
        active
    }

    /// Returns `true` once the celebration has fired this session.
    #[must_use]
    pub fn celebration_has_fired(&self) -> bool {
        self.celebration.has_fired()
    }

    /// Reports a section's visible fraction; `true` when it latches.
    pub fn on_section_intersection(&mut self, section: Section, visible_fraction: f64) -> bool {
        self.sections.on_intersection(section, visible_fraction)
    }

    /// Returns `true` if the section has revealed.
    #[must_use]
    pub fn section_revealed(&self, section: Section) -> bool {
        self.sections.is_revealed(section)
    }

    /// Reports the photo strip container's extent along its scroll axis.
    pub fn set_photo_viewport(&mut self, extent: f64) {
        self.photo_strip.set_viewport_extent(extent);
    }

    /// Reports the quote strip container's extent along its scroll axis.
    pub fn set_quote_viewport(&mut self, extent: f64) {
        self.quote_strip.set_viewport_extent(extent);
    }

    /// Scrolls the photo strip (the "scroll right" button passes
    /// [`STRIP_NUDGE`]).
    pub fn scroll_photos_by(&mut self, delta: f64) {
        self.photo_strip.scroll_by(delta);
    }

    /// Scrolls the quote strip.
    pub fn scroll_quotes_by(&mut self, delta: f64) {
        self.quote_strip.scroll_by(delta);
    }

    /// Returns the photo strip's geometry.
    #[must_use]
    pub fn photo_strip(&self) -> &CardStrip {
        &self.photo_strip
    }

    /// Returns the quote strip's geometry.
    #[must_use]
    pub fn quote_strip(&self) -> &CardStrip {
        &self.quote_strip
    }

    /// Checks every photo card against the strip viewport, latching and
    /// returning the ones that just revealed (discrete path, run after any
    /// strip scroll or resize).
    pub fn poll_photo_reveals(&mut self) -> Vec<CardReveal> {
        poll_strip(&self.photo_strip, &mut self.photo_reveals, |index| {
            PHOTOS[index].id
        })
    }

    /// Checks every quote card against the strip viewport, latching and
    /// returning the ones that just revealed.
    pub fn poll_quote_reveals(&mut self) -> Vec<CardReveal> {
        poll_strip(&self.quote_strip, &mut self.quote_reveals, |index| {
            QUOTES[index].id
        })
    }

    /// Returns `true` if the photo card with this id has revealed.
    #[must_use]
    pub fn photo_revealed(&self, id: u32) -> bool {
        self.photo_reveals.is_revealed(id)
    }

    /// Returns `true` if the quote card with this id has revealed.
    #[must_use]
    pub fn quote_revealed(&self, id: u32) -> bool {
        self.quote_reveals.is_revealed(id)
    }

    /// Latches every pending reveal at once.
    ///
    /// The degraded path for hosts without intersection observation: all
    /// content defaults to visible. Returns how many targets latched.
    pub fn reveal_everything(&mut self) -> usize {
        self.sections.reveal_all().len()
            + self.photo_reveals.reveal_all().len()
            + self.quote_reveals.reveal_all().len()
    }

    /// Returns the oracle panel.
    #[must_use]
    pub fn oracle(&self) -> &OraclePanel {
        &self.oracle
    }

    /// Returns the oracle panel mutably.
    pub fn oracle_mut(&mut self) -> &mut OraclePanel {
        &mut self.oracle
    }

    /// Unmounts the page: cancels the pending flush, drops every observer
    /// registration and the running burst, and resets the oracle form.
    ///
    /// After teardown no outstanding callback, timer, or registration
    /// remains — a frame or intersection callback that still fires finds
    /// nothing to do.
    pub fn teardown(&mut self) {
        self.director.teardown();
        self.sections.clear();
        self.photo_reveals.clear();
        self.quote_reveals.clear();
        self.burst = None;
        self.oracle.reset();
    }
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new()
    }
}

fn poll_strip(
    strip: &CardStrip,
    reveals: &mut RevealSet<u32>,
    id_of: impl Fn(usize) -> u32,
) -> Vec<CardReveal> {
    let mut latched = Vec::new();
    for index in strip.visible_range() {
        let id = id_of(index);
        if reveals.on_intersection(id, strip.visible_fraction(index)) {
            latched.push(CardReveal {
                id,
                stagger_ms: stagger_delay_ms(index),
            });
        }
    }
    latched
}

#[cfg(test)]
mod tests {
    use festoon_celebrate::ConfettiShot;
    use festoon_tint::Rgb8;
    use kurbo::Rect;

    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        backgrounds: Vec<Rgb8>,
        translations: Vec<(PageLayer, f64)>,
        opacities: Vec<(PageLayer, f64)>,
    }

    impl Surface<PageLayer> for RecordingSurface {
        fn set_background(&mut self, color: Rgb8) {
            self.backgrounds.push(color);
        }

        fn set_translation_y(&mut self, layer: PageLayer, y: f64) {
            self.translations.push((layer, y));
        }

        fn set_opacity(&mut self, layer: PageLayer, opacity: f64) {
            self.opacities.push((layer, opacity));
        }
    }

    struct OracleOnScreen;

    impl GeometryProbe<PageLayer> for OracleOnScreen {
        fn element_rect(&self, key: PageLayer) -> Option<Rect> {
            (key == PageLayer::OraclePanel).then(|| Rect::new(0.0, 300.0, 800.0, 1000.0))
        }
    }

    #[derive(Default)]
    struct CountingSink {
        shots: Vec<ConfettiShot>,
    }

    impl ParticleSink for CountingSink {
        fn fire(&mut self, shot: &ConfettiShot) {
            self.shots.push(shot.clone());
        }
    }

    #[test]
    fn scroll_events_coalesce_into_one_frame() {
        let mut session = PageSession::new();
        let sample = ScrollSample::new(5.0, 800.0, 4000.0);

        assert!(session.on_scroll(sample).request_frame);
        assert!(!session.on_scroll(sample).request_frame);

        let mut surface = RecordingSurface::default();
        assert!(session.on_frame(sample, &OracleOnScreen, &mut surface));
        assert!(!session.on_frame(sample, &OracleOnScreen, &mut surface));
    }

    #[test]
    fn frame_flush_writes_all_layers_from_one_snapshot() {
        let mut session = PageSession::new();
        let sample = ScrollSample::new(300.0, 800.0, 4000.0);

        let _ = session.on_scroll(sample);
        let mut surface = RecordingSurface::default();
        assert!(session.on_frame(sample, &OracleOnScreen, &mut surface));

        assert_eq!(surface.backgrounds.len(), 1);
        assert!(
            surface
                .translations
                .contains(&(PageLayer::HeroBackdrop, 150.0))
        );
        assert!(
            surface
                .translations
                .contains(&(PageLayer::HeroContent, 60.0))
        );
        assert_eq!(surface.opacities, [(PageLayer::HeroContent, 0.5)]);
        // The oracle panel is on screen, so its blobs moved too.
        assert!(
            surface
                .translations
                .iter()
                .any(|(layer, _)| *layer == PageLayer::OracleBlobLift)
        );
    }

    #[test]
    fn celebration_fires_once_per_session() {
        let mut session = PageSession::new();
        let viewport = 800.0;

        // Top of the page: no burst.
        let quiet = session.on_scroll(ScrollSample::new(10.0, viewport, 4000.0));
        assert!(!quiet.celebration_started);

        // Past 10% of the viewport (manual or programmatic, same path).
        let crossing = session.on_scroll(ScrollSample::new(120.0, viewport, 4000.0));
        assert!(crossing.celebration_started);
        assert!(session.celebration_has_fired());

        // Run the burst to completion.
        let mut sink = CountingSink::default();
        assert!(session.step_celebration(0.0, &mut sink));
        assert!(!session.step_celebration(3000.0, &mut sink));
        assert_eq!(sink.shots.len(), 2);

        // Later crossings never restart it.
        let again = session.on_scroll(ScrollSample::new(900.0, viewport, 4000.0));
        assert!(!again.celebration_started);
        assert!(!session.step_celebration(0.0, &mut sink));
    }

    #[test]
    fn message_section_latches_once() {
        let mut session = PageSession::new();

        assert!(!session.on_section_intersection(Section::Message, 0.1));
        assert!(session.on_section_intersection(Section::Message, 0.2));
        assert!(!session.on_section_intersection(Section::Message, 0.9));
        assert!(session.section_revealed(Section::Message));
        assert!(!session.section_revealed(Section::PhotoGallery));
    }

    #[test]
    fn photo_cards_reveal_with_stagger_as_the_strip_scrolls() {
        let mut session = PageSession::new();
        session.set_photo_viewport(1000.0);

        // Cards 0 and 1 fully visible, card 2 at ~49%: all clear the 0.4
        // threshold.
        let first = session.poll_photo_reveals();
        let ids: Vec<u32> = first.iter().map(|reveal| reveal.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert_eq!(first[0].stagger_ms, 0);
        assert_eq!(first[1].stagger_ms, 150);
        assert_eq!(first[2].stagger_ms, 300);

        // Nothing new until the strip moves far enough.
        assert!(session.poll_photo_reveals().is_empty());

        session.scroll_photos_by(STRIP_NUDGE);
        session.scroll_photos_by(STRIP_NUDGE);
        let more = session.poll_photo_reveals();
        assert!(!more.is_empty());
        for reveal in &more {
            assert!(session.photo_revealed(reveal.id));
        }
    }

    #[test]
    fn quote_cards_use_the_low_threshold() {
        let mut session = PageSession::new();
        session.set_quote_viewport(1000.0);

        let first = session.poll_quote_reveals();
        // Cards 0 and 1 fully visible; card 2 is ~50% visible, well past the
        // 0.1 threshold.
        let ids: Vec<u32> = first.iter().map(|reveal| reveal.id).collect();
        assert_eq!(ids, [1, 2, 3]);
    }

    #[test]
    fn reveal_everything_is_the_degraded_path() {
        let mut session = PageSession::new();
        let latched = session.reveal_everything();
        assert_eq!(latched, 2 + PHOTOS.len() + QUOTES.len());
        assert!(session.section_revealed(Section::Message));
        assert!(session.photo_revealed(10));
        assert!(session.quote_revealed(18));

        // Idempotent: everything already latched.
        assert_eq!(session.reveal_everything(), 0);
    }

    #[test]
    fn teardown_leaves_no_outstanding_work() {
        let mut session = PageSession::new();
        let sample = ScrollSample::new(200.0, 800.0, 4000.0);
        let _ = session.on_scroll(sample);
        let _ = session.oracle_mut().submit("what now?");

        session.teardown();

        let mut surface = RecordingSurface::default();
        assert!(!session.on_frame(sample, &OracleOnScreen, &mut surface));
        assert!(surface.backgrounds.is_empty());

        let mut sink = CountingSink::default();
        assert!(!session.step_celebration(0.0, &mut sink));
        assert!(!session.on_section_intersection(Section::Message, 1.0));
        assert_eq!(
            session.oracle().status(),
            festoon_oracle::AskStatus::Idle
        );
    }
}
