//! Birth-date parsing and formatting
//!
//! Dates of birth travel as `DD.MM.YYYY` strings; calendar dates for the
//! day-cycle numbers are `chrono::NaiveDate`. Parsing checks shape and
//! component ranges only - calendar correctness is not enforced, so
//! `30.02.2001` parses. Numerology operates on the written digits, not
//! the calendar.

use std::str::FromStr;

use crate::error::{NumeraError, NumeraResult};

/// Expected shape of a date-of-birth string, for error messages.
const DOB_FORMAT: &str = "DD.MM.YYYY";

/// Expected shape of an ISO date string, for error messages.
const ISO_FORMAT: &str = "YYYY-MM-DD";

/// A date of birth: day, month and year as written.
///
/// Invariants: day in 1..=31, month in 1..=12, year >= 1. Nothing more -
/// see the module docs for why February 30th is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BirthDate {
    day: u32,
    month: u32,
    year: u32,
}

impl BirthDate {
    /// Create a birth date from components, checking ranges.
    pub fn new(day: u32, month: u32, year: u32) -> NumeraResult<Self> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) || year == 0 {
            return Err(NumeraError::InvalidDateFormat {
                input: format!("{day:02}.{month:02}.{year:04}"),
                expected: DOB_FORMAT,
            });
        }
        Ok(Self { day, month, year })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> u32 {
        self.year
    }
}

impl FromStr for BirthDate {
    type Err = NumeraError;

    /// Parse a `DD.MM.YYYY` string.
    ///
    /// Components must be unsigned decimal digits; widths are not enforced,
    /// so `1.6.1990` parses like `01.06.1990`.
    fn from_str(s: &str) -> NumeraResult<Self> {
        let invalid = || NumeraError::InvalidDateFormat {
            input: s.to_string(),
            expected: DOB_FORMAT,
        };

        let mut parts = s.split('.');
        let (day, month, year) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(d), Some(m), Some(y), None) => (d, m, y),
            _ => return Err(invalid()),
        };

        let day = parse_component(day).ok_or_else(invalid)?;
        let month = parse_component(month).ok_or_else(invalid)?;
        let year = parse_component(year).ok_or_else(invalid)?;

        BirthDate::new(day, month, year).map_err(|_| invalid())
    }
}

impl std::fmt::Display for BirthDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}.{:02}.{:04}", self.day, self.month, self.year)
    }
}

/// Parse one date component: non-empty, ASCII digits only. Rejects the `+`
/// and `-` signs that `u32::from_str` would otherwise tolerate.
fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Reshape an ISO `YYYY-MM-DD` string into `DD.MM.YYYY`.
///
/// Pure string surgery with a strict shape check (four-two-two digit
/// groups); no calendar interpretation happens here.
pub fn format_birth_date(iso: &str) -> NumeraResult<String> {
    let invalid = || NumeraError::InvalidDateFormat {
        input: iso.to_string(),
        expected: ISO_FORMAT,
    };

    let bytes = iso.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return Err(invalid());
    }
    let (year, month, day) = (&iso[0..4], &iso[5..7], &iso[8..10]);
    for group in [year, month, day] {
        if !group.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
    }

    Ok(format!("{day}.{month}.{year}"))
}
