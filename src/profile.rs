//! Profile composition
//!
//! Bundles the scalar numbers into composite records for downstream
//! presentation. No interpretation text lives here - pairing numbers with
//! narrative is the caller's job, behind [`crate::interpret`].

use serde::Serialize;

use crate::alphabet::LetterFilter;
use crate::cycles::life_path_number;
use crate::date::BirthDate;
use crate::error::{NumeraError, NumeraResult};
use crate::name::name_number;
use crate::reduce::{reduce, NumerologyNumber};

/// The four core numbers of one person, computed on demand from a name and
/// date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumerologyProfile {
    pub life_path: NumerologyNumber,
    pub destiny: NumerologyNumber,
    pub soul_urge: NumerologyNumber,
    pub personality: NumerologyNumber,
}

impl NumerologyProfile {
    /// Compute the full profile.
    ///
    /// Errors with [`NumeraError::DegenerateName`] when the name yields no
    /// signal under any of the three letter filters (for example a name
    /// without vowels has no Soul Urge number).
    pub fn compute(name: &str, dob: &BirthDate) -> NumeraResult<Self> {
        let require = |filter: LetterFilter| {
            name_number(name, filter).ok_or_else(|| NumeraError::DegenerateName {
                name: name.to_string(),
                filter,
            })
        };

        Ok(Self {
            life_path: life_path_number(dob),
            destiny: require(LetterFilter::All)?,
            soul_urge: require(LetterFilter::Vowels)?,
            personality: require(LetterFilter::Consonants)?,
        })
    }
}

/// Love-compatibility score for two Life Path values, in 30..=100.
///
/// The distance between the finalized (single-digit) life paths sets the
/// base score. The floor clamp applies before the same-parity bonus, and
/// parity is compared on the values as passed, Master Numbers included.
pub fn compatibility_score(life_path_a: u8, life_path_b: u8) -> u8 {
    let a = reduce(life_path_a as u64, true) as i32;
    let b = reduce(life_path_b as u64, true) as i32;

    let mut score = 100 - (a - b).abs() * 10;
    if score < 30 {
        score = 30;
    }
    if life_path_a % 2 == life_path_b % 2 {
        score += 10;
    }
    if score > 100 {
        score = 100;
    }
    score as u8
}
