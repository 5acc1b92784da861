// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The page's read-only asset tables: photos and quotes.
//!
//! These are collaborator data, consumed by the gallery reveal machinery.
//! The only structural requirement is a stable `id` per record, used to key
//! the one-shot reveal latches; everything else is presentation flavor the
//! host is free to interpret.

/// Source substituted when a photo fails to load.
///
/// A missing asset degrades that one card, never the gallery: the reveal
/// state machine runs regardless of what the card ends up showing.
pub const PHOTO_PLACEHOLDER: &str = "https://via.placeholder.com/600x800?text=Photo+Missing";

/// Pastel frame color assigned to a photo card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameVariant {
    /// Pastel rose.
    Rose,
    /// Pastel indigo.
    Indigo,
    /// Pastel lime.
    Lime,
    /// Pastel orange.
    Orange,
    /// Pastel teal.
    Teal,
    /// Pastel fuchsia.
    Fuchsia,
    /// Pastel blue.
    Blue,
    /// Pastel amber.
    Amber,
    /// Pastel emerald.
    Emerald,
    /// Pastel violet.
    Violet,
}

/// One photo card in the photobooth strip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Photo {
    /// Stable identity, used to key the card's reveal latch.
    pub id: u32,
    /// Image source.
    pub source: &'static str,
    /// Frame color for the card.
    pub frame: FrameVariant,
    /// Resting tilt of the card, in degrees.
    pub tilt_degrees: f64,
}

impl Photo {
    /// Returns the source to display, substituting the placeholder when the
    /// image failed to load.
    #[must_use]
    pub const fn resolved_source(&self, loaded: bool) -> &'static str {
        if loaded { self.source } else { PHOTO_PLACEHOLDER }
    }
}

/// The ten timeline photos, in display order.
pub const PHOTOS: [Photo; 10] = [
    Photo {
        id: 1,
        source: "/photos/photo-1.jpg",
        frame: FrameVariant::Rose,
        tilt_degrees: -2.0,
    },
    Photo {
        id: 2,
        source: "/photos/photo-2.jpg",
        frame: FrameVariant::Indigo,
        tilt_degrees: 1.0,
    },
    Photo {
        id: 3,
        source: "/photos/photo-3.jpg",
        frame: FrameVariant::Lime,
        tilt_degrees: -1.0,
    },
    Photo {
        id: 4,
        source: "/photos/photo-4.jpg",
        frame: FrameVariant::Orange,
        tilt_degrees: 2.0,
    },
    Photo {
        id: 5,
        source: "/photos/photo-5.jpg",
        frame: FrameVariant::Teal,
        tilt_degrees: -2.0,
    },
    Photo {
        id: 6,
        source: "/photos/photo-6.jpg",
        frame: FrameVariant::Fuchsia,
        tilt_degrees: 1.0,
    },
    Photo {
        id: 7,
        source: "/photos/photo-7.jpg",
        frame: FrameVariant::Blue,
        tilt_degrees: -3.0,
    },
    Photo {
        id: 8,
        source: "/photos/photo-8.jpg",
        frame: FrameVariant::Amber,
        tilt_degrees: 2.0,
    },
    Photo {
        id: 9,
        source: "/photos/photo-9.jpg",
        frame: FrameVariant::Emerald,
        tilt_degrees: -1.0,
    },
    Photo {
        id: 10,
        source: "/photos/photo-10.jpg",
        frame: FrameVariant::Violet,
        tilt_degrees: 3.0,
    },
];

/// Visual theme of a quote card.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum QuoteTheme {
    /// Orange-to-purple gradient.
    SunsetVibes,
    /// Emerald-to-teal gradient.
    FreshMint,
    /// Amber-to-orange gradient.
    GoldenHour,
    /// Near-black with a rose accent.
    DarkMode,
    /// Cyan-to-blue gradient.
    ElectricBlue,
    /// Purple-to-violet gradient.
    MysticPurple,
    /// Light rose on rose.
    SoftRose,
    /// Frosted glass over the page background.
    ClassicGlass,
}

/// One card in the words-of-wisdom strip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Quote {
    /// Stable identity, used to key the card's reveal latch.
    pub id: u32,
    /// The quote itself.
    pub text: &'static str,
    /// Attribution line.
    pub author: &'static str,
    /// Visual theme for the card.
    pub theme: QuoteTheme,
}

/// The eighteen quote cards, in display order.
pub const QUOTES: [Quote; 18] = [
    Quote {
        id: 1,
        text: "The future belongs to those who believe in the beauty of their dreams.",
        author: "Eleanor Roosevelt",
        theme: QuoteTheme::SunsetVibes,
    },
    Quote {
        id: 2,
        text: "Adulthood is mostly just googling how to do stuff.",
        author: "Fact of Life",
        theme: QuoteTheme::FreshMint,
    },
    Quote {
        id: 3,
        text: "Remember that time we laughed so hard you snorted soda?",
        author: "Classic Us",
        theme: QuoteTheme::GoldenHour,
    },
    Quote {
        id: 4,
        text: "Don't grow up. It's a trap.",
        author: "Peter Pan (probably)",
        theme: QuoteTheme::DarkMode,
    },
    Quote {
        id: 5,
        text: "You have brains in your head. You have feet in your shoes.",
        author: "Dr. Seuss",
        theme: QuoteTheme::ElectricBlue,
    },
    Quote {
        id: 6,
        text: "18 is the age where you can legally do everything you've been doing since 15.",
        author: "Shhh...",
        theme: QuoteTheme::MysticPurple,
    },
    Quote {
        id: 7,
        text: "Live for the moments you can't put into words.",
        author: "Anonymous",
        theme: QuoteTheme::SoftRose,
    },
    Quote {
        id: 8,
        text: "We'll always have that disastrous road trip.",
        author: "Inside Joke #2",
        theme: QuoteTheme::ClassicGlass,
    },
    Quote {
        id: 9,
        text: "Go confidently in the direction of your dreams.",
        author: "Thoreau",
        theme: QuoteTheme::FreshMint,
    },
    Quote {
        id: 10,
        text: "Act as young as you feel. You're not getting older, you're leveling up.",
        author: "Gamer Wisdom",
        theme: QuoteTheme::DarkMode,
    },
    Quote {
        id: 11,
        text: "I am not a girl, not yet a woman.",
        author: "Britney Spears",
        theme: QuoteTheme::SunsetVibes,
    },
    Quote {
        id: 12,
        text: "Thirty is the new twenty, so eighteen is basically a toddler.",
        author: "Perspective",
        theme: QuoteTheme::ElectricBlue,
    },
    Quote {
        id: 13,
        text: "That inside joke about the pineapple.",
        author: "You know the one",
        theme: QuoteTheme::GoldenHour,
    },
    Quote {
        id: 14,
        text: "With great power comes great electricity bills.",
        author: "Real Adulthood",
        theme: QuoteTheme::ClassicGlass,
    },
    Quote {
        id: 15,
        text: "Your time is limited, so don't waste it living someone else's life.",
        author: "Steve Jobs",
        theme: QuoteTheme::MysticPurple,
    },
    Quote {
        id: 16,
        text: "She turned her cant's into cans and her dreams into plans.",
        author: "Kobi Yamada",
        theme: QuoteTheme::SoftRose,
    },
    Quote {
        id: 17,
        text: "Friends don't let friends do silly things alone.",
        author: "My Promise",
        theme: QuoteTheme::SunsetVibes,
    },
    Quote {
        id: 18,
        text: "The best is yet to come.",
        author: "Frank Sinatra",
        theme: QuoteTheme::DarkMode,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_ids_are_unique_and_stable() {
        let mut ids: Vec<u32> = PHOTOS.iter().map(|photo| photo.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), PHOTOS.len());
    }

    #[test]
    fn quote_ids_are_unique_and_stable() {
        let mut ids: Vec<u32> = QUOTES.iter().map(|quote| quote.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), QUOTES.len());
    }

    #[test]
    fn missing_photo_resolves_to_the_placeholder() {
        let photo = PHOTOS[0];
        assert_eq!(photo.resolved_source(true), "/photos/photo-1.jpg");
        assert_eq!(photo.resolved_source(false), PHOTO_PLACEHOLDER);
    }
}
