//! Numera - Pythagorean numerology engine
//!
//! Numera turns a person's name and date of birth into their numerology
//! numbers: Life Path, Destiny, Soul Urge, Personality, plus the cyclical
//! Personal Year, Personal Day and Universal Day numbers and a per-letter
//! value histogram. Every operation is a pure, stateless function; the
//! engine emits numbers and structured breakdowns only, and narrative
//! interpretation is injected by callers through [`interpret`].

pub mod alphabet;
pub mod chart;
pub mod cycles;
pub mod date;
pub mod error;
pub mod interpret;
pub mod name;
pub mod profile;
pub mod reduce;

// Re-exports for convenience
pub use alphabet::{letter_value, normalize_name, LetterFilter};
pub use chart::CharacterChart;
pub use cycles::{
    life_path_number, personal_day_number, personal_year_number, universal_day_number,
    CycleComponent, CycleRole, PersonalYear,
};
pub use date::{format_birth_date, BirthDate};
pub use error::{NumeraError, NumeraResult};
pub use interpret::{InterpretationProvider, NoInterpretations, NumberKind};
pub use name::{destiny_number, name_number, personality_number, soul_urge_number};
pub use profile::{compatibility_score, NumerologyProfile};
pub use reduce::{is_master_number, reduce, NumerologyNumber, MASTER_NUMBERS};
