//! Character chart: a raw histogram over letter values
//!
//! Counts how often each value 1..=9 occurs in a normalized name. No
//! reduction is applied - the chart shows which digits dominate a name.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::alphabet::{letter_value, normalize_name};

/// Frequency of each letter value 1..=9 in a name.
///
/// Always has exactly nine bins; the counts sum to the number of
/// normalized-name characters that carry a letter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharacterChart {
    counts: [u32; 9],
}

impl CharacterChart {
    /// Build the chart for a name.
    pub fn for_name(name: &str) -> Self {
        let mut chart = Self::default();
        for ch in normalize_name(name).chars() {
            if let Some(value) = letter_value(ch) {
                chart.counts[(value - 1) as usize] += 1;
            }
        }
        chart
    }

    /// Count for a letter value. Returns 0 for values outside 1..=9.
    pub fn count(&self, value: u8) -> u32 {
        value
            .checked_sub(1)
            .and_then(|i| self.counts.get(i as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Iterate `(value, count)` pairs in value order 1..=9.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, count)| (i as u8 + 1, *count))
    }

    /// Total number of counted characters.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

// Serializes as a map with string keys "1".."9", the shape downstream
// chart renderers consume.
impl Serialize for CharacterChart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(9))?;
        for (value, count) in self.iter() {
            map.serialize_entry(&value.to_string(), &count)?;
        }
        map.end()
    }
}
