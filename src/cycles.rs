//! Date-derived numbers: Life Path and the day cycles
//!
//! Four calculators share one shape - reduce the date components, sum,
//! reduce again - but differ in reduction discipline. The Life Path keeps
//! Master Numbers at every step; the cyclical numbers (universal day,
//! personal year, personal day) are always forced to a single digit.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::BirthDate;
use crate::reduce::{reduce, NumerologyNumber};

/// Life Path number from a date of birth.
///
/// Day, month and year are each reduced without finalizing (any of them may
/// resolve to a Master Number), summed, and the sum is reduced without
/// finalizing again - so the Life Path itself may be a Master Number.
pub fn life_path_number(dob: &BirthDate) -> NumerologyNumber {
    let day = reduce(dob.day() as u64, false);
    let month = reduce(dob.month() as u64, false);
    let year = reduce(dob.year() as u64, false);
    NumerologyNumber::reduce_from(day as u64 + month as u64 + year as u64, false)
}

/// Universal Day number for a calendar date.
///
/// Same shape as the Life Path but every reduction finalizes, so the result
/// is always a single digit.
pub fn universal_day_number(date: NaiveDate) -> u8 {
    let day = reduce(date.day() as u64, true);
    let month = reduce(date.month() as u64, true);
    let year = reduce(date.year().unsigned_abs() as u64, true);
    reduce(day as u64 + month as u64 + year as u64, true)
}

/// Role of one component in a Personal Year breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CycleRole {
    #[serde(rename = "birth day")]
    BirthDay,
    #[serde(rename = "birth month")]
    BirthMonth,
    #[serde(rename = "universal year")]
    UniversalYear,
}

impl std::fmt::Display for CycleRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleRole::BirthDay => write!(f, "birth day"),
            CycleRole::BirthMonth => write!(f, "birth month"),
            CycleRole::UniversalYear => write!(f, "universal year"),
        }
    }
}

/// One reduced component of a Personal Year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CycleComponent {
    pub role: CycleRole,
    pub value: u8,
}

/// A Personal Year number with its ordered component breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalYear {
    /// The final single-digit Personal Year number.
    pub value: u8,
    /// Birth day, birth month and universal year, in that order, each
    /// already reduced to a single digit.
    pub breakdown: [CycleComponent; 3],
}

/// Personal Year number for a date of birth and a target year.
///
/// Birth day, birth month and the target year are each forced to a single
/// digit, summed, and the sum forced to a single digit. A negative target
/// year contributes the digits of its absolute value.
pub fn personal_year_number(dob: &BirthDate, target_year: i32) -> PersonalYear {
    let day = reduce(dob.day() as u64, true);
    let month = reduce(dob.month() as u64, true);
    let year = reduce(target_year.unsigned_abs() as u64, true);

    PersonalYear {
        value: reduce(day as u64 + month as u64 + year as u64, true),
        breakdown: [
            CycleComponent {
                role: CycleRole::BirthDay,
                value: day,
            },
            CycleComponent {
                role: CycleRole::BirthMonth,
                value: month,
            },
            CycleComponent {
                role: CycleRole::UniversalYear,
                value: year,
            },
        ],
    }
}

/// Personal Day number: the universal day shifted by the Life Path, forced
/// to a single digit.
pub fn personal_day_number(life_path: NumerologyNumber, date: NaiveDate) -> u8 {
    let universal = universal_day_number(date);
    reduce(life_path.value() as u64 + universal as u64, true)
}
