//! Letter-to-value table and name normalization
//!
//! The Pythagorean cipher maps a closed alphabet (Latin plus the Turkish
//! letters ç, ğ, ı, ö, ş, ü) onto the values 1-9. Characters outside the
//! alphabet carry no value and are dropped during normalization.

use serde::{Deserialize, Serialize};

/// The vowels of the alphabet. Everything else with a letter value is a
/// consonant.
pub const VOWELS: [char; 8] = ['a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü'];

/// Pythagorean value of a letter, or `None` for characters outside the
/// alphabet (digits, whitespace, punctuation, unmapped scripts).
pub const fn letter_value(ch: char) -> Option<u8> {
    let value = match ch {
        'a' | 'j' | 's' | 'ş' => 1,
        'b' | 'k' | 't' => 2,
        'c' | 'ç' | 'l' | 'u' | 'ü' => 3,
        'd' | 'm' | 'v' => 4,
        'e' | 'n' | 'w' => 5,
        'f' | 'o' | 'ö' | 'x' => 6,
        'g' | 'ğ' | 'p' | 'y' => 7,
        'h' | 'q' | 'z' => 8,
        'ı' | 'i' | 'r' => 9,
        _ => return None,
    };
    Some(value)
}

/// Returns true for the vowels of the fixed alphabet.
///
/// Only meaningful for already-normalized (lower-case) characters; an
/// upper-case letter is not a member of the alphabet.
pub fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch)
}

/// Normalize a name: lower-case it and keep only characters that have a
/// letter value.
///
/// Unicode lower-casing may expand a single character ('İ' becomes 'i' plus
/// a combining dot); the combining mark has no letter value and is dropped
/// like any other unmapped character.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(|ch| letter_value(*ch).is_some())
        .collect()
}

/// Which letters of a normalized name participate in a name-number sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LetterFilter {
    /// Every letter of the alphabet (Destiny / Expression number)
    #[default]
    All,
    /// Vowels only (Soul Urge number)
    Vowels,
    /// Consonants only (Personality number)
    Consonants,
}

impl LetterFilter {
    /// Whether a normalized alphabet character passes this filter.
    pub fn matches(&self, ch: char) -> bool {
        match self {
            LetterFilter::All => true,
            LetterFilter::Vowels => is_vowel(ch),
            LetterFilter::Consonants => !is_vowel(ch),
        }
    }
}

impl std::fmt::Display for LetterFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LetterFilter::All => write!(f, "all"),
            LetterFilter::Vowels => write!(f, "vowels"),
            LetterFilter::Consonants => write!(f, "consonants"),
        }
    }
}
