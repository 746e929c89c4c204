//! OS variant buckets
//! Maps free-form `os_variant` values onto the five tracked variants.

use std::fmt;

/// A tracked OS flavor. Declaration order is the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    Silverblue,
    Kinoite,
    Bluefin,
    Bazzite,
    Aurora,
}

impl Variant {
    pub const ALL: [Variant; 5] = [
        Variant::Silverblue,
        Variant::Kinoite,
        Variant::Bluefin,
        Variant::Bazzite,
        Variant::Aurora,
    ];

    /// Display name, also stored in the derived `variant` column.
    pub fn name(self) -> &'static str {
        match self {
            Variant::Silverblue => "Silverblue",
            Variant::Kinoite => "Kinoite",
            Variant::Bluefin => "Bluefin",
            Variant::Bazzite => "Bazzite",
            Variant::Aurora => "Aurora",
        }
    }

    /// Lower-cased substring searched for in raw values.
    pub fn match_key(self) -> &'static str {
        match self {
            Variant::Silverblue => "silverblue",
            Variant::Kinoite => "kinoite",
            Variant::Bluefin => "bluefin",
            Variant::Bazzite => "bazzite",
            Variant::Aurora => "aurora",
        }
    }

    /// Classify a raw `os_variant` value.
    ///
    /// Matching is case-insensitive containment. If a value ever contains more
    /// than one key, the first variant in canonical order wins.
    pub fn classify(raw: &str) -> Option<Variant> {
        let lowered = raw.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| lowered.contains(v.match_key()))
    }

    /// Parse a display name back into a variant.
    pub fn from_name(name: &str) -> Option<Variant> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
