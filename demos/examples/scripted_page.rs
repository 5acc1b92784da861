// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives a full page session through a scripted scroll, printing every
//! style write, reveal, and confetti shot the engine produces.
//!
//! Run with `cargo run -p festoon_demos --example scripted_page`.

use festoon_demos::{ConsoleSink, ConsoleSurface, DemoLayout};
use festoon_oracle::WisdomSource;
use festoon_page::{PageSession, STRIP_NUDGE, Section};
use festoon_reveal::SECTION_THRESHOLD;
use festoon_scroll::{ScrollSample, visible_fraction};
use kurbo::Rect;

const VIEWPORT_HEIGHT: f64 = 800.0;
const DOCUMENT_HEIGHT: f64 = 4800.0;

/// Document-space top of the message section.
const MESSAGE_TOP: f64 = 900.0;
const MESSAGE_HEIGHT: f64 = 800.0;

/// An offline stand-in for the remote wisdom service.
struct PocketOracle;

impl WisdomSource for PocketOracle {
    fn request_wisdom(&self, topic: &str) -> String {
        format!("About \"{topic}\": trust yourself, and read the instructions twice.")
    }
}

fn main() {
    let mut session = PageSession::new();
    let mut surface = ConsoleSurface;
    let mut sink = ConsoleSink::default();
    let mut layout = DemoLayout {
        oracle_top: 3600.0,
        oracle_height: 700.0,
        scroll_offset: 0.0,
    };

    session.set_photo_viewport(1000.0);
    session.set_quote_viewport(1000.0);

    let mut celebration_clock = 0.0;

    // Scripted scroll: 120px per "event", top to bottom.
    for step in 0..=40 {
        let offset = f64::from(step) * 120.0;
        layout.scroll_offset = offset;
        let sample = ScrollSample::new(offset, VIEWPORT_HEIGHT, DOCUMENT_HEIGHT);
        println!("scroll -> {offset}px (progress {:.2})", sample.progress().get());

        let outcome = session.on_scroll(sample);
        if outcome.celebration_started {
            println!("  celebration latched!");
        }
        if outcome.request_frame {
            // The frame callback the host scheduled for this burst of events.
            session.on_frame(sample, &layout, &mut surface);
        }

        // The celebration burst runs on the frame clock while it lasts.
        while session.step_celebration(celebration_clock, &mut sink) {
            celebration_clock += 500.0; // print sparsely; a real host steps every frame
        }

        // Discrete intersection reports, as an observer would deliver them.
        let viewport = Rect::new(0.0, 0.0, 800.0, VIEWPORT_HEIGHT);
        let message = Rect::new(
            0.0,
            MESSAGE_TOP - offset,
            800.0,
            MESSAGE_TOP - offset + MESSAGE_HEIGHT,
        );
        let fraction = visible_fraction(message, viewport);
        if fraction >= SECTION_THRESHOLD
            && session.on_section_intersection(Section::Message, fraction)
        {
            println!("  reveal: message section ({:.0}% visible)", fraction * 100.0);
        }
    }

    // The visitor flips through both galleries.
    println!("\nphotobooth:");
    loop {
        for reveal in session.poll_photo_reveals() {
            println!("  reveal: photo {} (+{}ms)", reveal.id, reveal.stagger_ms);
        }
        if session.photo_strip().scroll_offset() >= session.photo_strip().max_scroll() {
            break;
        }
        session.scroll_photos_by(STRIP_NUDGE);
    }

    println!("\nwords of wisdom:");
    loop {
        for reveal in session.poll_quote_reveals() {
            println!("  reveal: quote {} (+{}ms)", reveal.id, reveal.stagger_ms);
        }
        if session.quote_strip().scroll_offset() >= session.quote_strip().max_scroll() {
            break;
        }
        session.scroll_quotes_by(STRIP_NUDGE);
    }

    // One question for the oracle, answered offline.
    println!("\noracle:");
    let asked = session.oracle_mut().ask_with(&PocketOracle, "How do I cook?");
    assert!(asked, "the panel was idle and the topic non-blank");
    println!("  reply: {}", session.oracle().reply().unwrap());

    println!(
        "\ndone: {} confetti shots, celebration fired = {}",
        sink.shots(),
        session.celebration_has_fired()
    );

    session.teardown();
}
