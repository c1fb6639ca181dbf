//! Named character sets used as identifier dictionaries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Decimal digits.
pub const NUMBER: &str = "0123456789";

/// ASCII letters, upper case first.
pub const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digits followed by ASCII letters.
pub const ALPHANUM: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Digits and letters minus glyphs that are easy to misread
/// (`0 O o`, `1 I l`, `5 S s`, `u v`).
pub const ALPHANUM_NO_SIMILAR: &str = "2346789abcdefghijkmnpqrtwxyzABCDEFGHJKLMNPQRTUVWXYZ";

/// A closed set of identifier alphabets.
///
/// Every preset is non-empty ASCII, so one random byte maps to exactly one
/// output character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Alphabet {
    /// `0-9`
    #[serde(rename = "number")]
    Number,
    /// `A-Z a-z`
    #[serde(rename = "alpha")]
    Alpha,
    /// `0-9 A-Z a-z`
    #[default]
    #[serde(rename = "alphanum")]
    AlphaNum,
    /// [`ALPHANUM_NO_SIMILAR`]
    #[serde(rename = "alphanumnosim")]
    AlphaNumNoSimilar,
}

impl Alphabet {
    /// Every preset, in registry order.
    pub const ALL: [Alphabet; 4] = [
        Alphabet::Number,
        Alphabet::Alpha,
        Alphabet::AlphaNum,
        Alphabet::AlphaNumNoSimilar,
    ];

    /// The characters of this alphabet.
    pub fn chars(self) -> &'static str {
        match self {
            Self::Number => NUMBER,
            Self::Alpha => ALPHA,
            Self::AlphaNum => ALPHANUM,
            Self::AlphaNumNoSimilar => ALPHANUM_NO_SIMILAR,
        }
    }

    /// The characters as bytes, for index lookups.
    pub fn as_bytes(self) -> &'static [u8] {
        self.chars().as_bytes()
    }

    /// Number of characters in the alphabet.
    pub fn len(self) -> usize {
        self.chars().len()
    }

    /// Always `false`; kept for the `len`/`is_empty` pair.
    pub fn is_empty(self) -> bool {
        self.chars().is_empty()
    }

    /// Registry name, as accepted by [`Alphabet::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Alpha => "alpha",
            Self::AlphaNum => "alphanum",
            Self::AlphaNumNoSimilar => "alphanumnosim",
        }
    }

    /// Whether `c` belongs to this alphabet.
    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Resolves a preset by name or by its literal character set.
    ///
    /// Surrounding whitespace is ignored and names are case-insensitive.
    /// Anything unrecognised resolves to [`Alphabet::AlphaNum`] rather than
    /// failing.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name) || a.chars() == name)
            .unwrap_or_default()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<&str> for Alphabet {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}
