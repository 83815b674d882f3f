//! Name numbers: Destiny, Soul Urge, Personality
//!
//! A name number is the sum of the letter values selected by a
//! [`LetterFilter`], reduced without finalizing - so a name can resolve to a
//! Master Number.

use crate::alphabet::{letter_value, normalize_name, LetterFilter};
use crate::reduce::NumerologyNumber;

/// Compute the name number for `name` under `filter`.
///
/// Returns `None` when the name has no letters that pass the filter - an
/// empty sum is "no signal", not a value. Callers that need a hard error
/// instead use [`crate::profile::NumerologyProfile::compute`].
pub fn name_number(name: &str, filter: LetterFilter) -> Option<NumerologyNumber> {
    let mut total: u64 = 0;
    let mut matched = false;

    for ch in normalize_name(name).chars() {
        if !filter.matches(ch) {
            continue;
        }
        // Normalized characters always carry a value.
        if let Some(value) = letter_value(ch) {
            total += value as u64;
            matched = true;
        }
    }

    matched.then(|| NumerologyNumber::reduce_from(total, false))
}

/// Destiny (Expression) number: every letter of the full name.
pub fn destiny_number(name: &str) -> Option<NumerologyNumber> {
    name_number(name, LetterFilter::All)
}

/// Soul Urge number: vowels only.
pub fn soul_urge_number(name: &str) -> Option<NumerologyNumber> {
    name_number(name, LetterFilter::Vowels)
}

/// Personality number: consonants only.
pub fn personality_number(name: &str) -> Option<NumerologyNumber> {
    name_number(name, LetterFilter::Consonants)
}
