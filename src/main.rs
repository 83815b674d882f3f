//! Numera CLI - Pythagorean numerology calculator
//!
//! Usage: numera <COMMAND>
//!
//! Commands:
//!   profile  Full numerology profile for a name and date of birth
//!   love     Love-compatibility score for two people
//!   year     Personal Year number with its component breakdown
//!   day      Personal Day and Universal Day numbers
//!   chart    Letter-value histogram for a name

use anyhow::Result;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};

use numera::{
    compatibility_score, format_birth_date, life_path_number, personal_day_number,
    personal_year_number, universal_day_number, BirthDate, CharacterChart, InterpretationProvider,
    NumberKind, NumeraError, NumerologyNumber, NumerologyProfile,
};

/// Numera - Pythagorean numerology calculator
#[derive(Parser, Debug)]
#[command(name = "numera")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output one-line JSON records instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Full numerology profile for a name and date of birth
    Profile {
        /// Full name (unrecognized characters are ignored)
        #[arg(short, long)]
        name: String,

        /// Date of birth as DD.MM.YYYY
        #[arg(short, long)]
        dob: String,
    },

    /// Love-compatibility score for two people
    Love {
        /// First person's full name
        #[arg(long)]
        name_a: String,

        /// First person's date of birth (DD.MM.YYYY)
        #[arg(long)]
        dob_a: String,

        /// Second person's full name
        #[arg(long)]
        name_b: String,

        /// Second person's date of birth (DD.MM.YYYY)
        #[arg(long)]
        dob_b: String,
    },

    /// Personal Year number with its component breakdown
    Year {
        /// Date of birth as DD.MM.YYYY
        #[arg(short, long)]
        dob: String,

        /// Target year (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Personal Day and Universal Day numbers
    Day {
        /// Date of birth as DD.MM.YYYY
        #[arg(short, long)]
        dob: String,

        /// Calendar date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Letter-value histogram for a name
    Chart {
        /// Full name (unrecognized characters are ignored)
        #[arg(short, long)]
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Profile { name, dob } => cmd_profile(&name, &dob, cli.json),
        Commands::Love {
            name_a,
            dob_a,
            name_b,
            dob_b,
        } => cmd_love(&name_a, &dob_a, &name_b, &dob_b, cli.json),
        Commands::Year { dob, year } => cmd_year(&dob, year, cli.json),
        Commands::Day { dob, date } => cmd_day(&dob, date.as_deref(), cli.json),
        Commands::Chart { name } => cmd_chart(&name, cli.json),
    }
}

/// Archetype titles for the core numbers - the only content shipped with
/// the binary. Richer narrative comes from an external provider.
struct ArchetypeTitles;

const TITLES: &[(u8, &str)] = &[
    (1, "Lider"),
    (2, "Diplomat"),
    (3, "İletişimci"),
    (4, "Mimar"),
    (5, "Maceracı"),
    (6, "Koruyucu"),
    (7, "Mistik"),
    (8, "Güç Sahibi"),
    (9, "Hümanist"),
    (11, "Aydınlatıcı"),
    (22, "Usta Mimar"),
    (33, "Usta Öğretmen"),
];

impl InterpretationProvider for ArchetypeTitles {
    fn interpretation(&self, _kind: NumberKind, value: NumerologyNumber) -> Option<&str> {
        TITLES
            .iter()
            .find(|(n, _)| *n == value.value())
            .map(|(_, title)| *title)
    }
}

/// "4 (Mimar)" when a title exists, "4" otherwise.
fn titled(kind: NumberKind, number: NumerologyNumber) -> String {
    match ArchetypeTitles.interpretation(kind, number) {
        Some(title) => format!("{number} ({title})"),
        None => number.to_string(),
    }
}

fn cmd_profile(name: &str, dob: &str, json: bool) -> Result<()> {
    let dob: BirthDate = dob.parse()?;
    let profile = NumerologyProfile::compute(name, &dob)?;
    let chart = CharacterChart::for_name(name);

    if json {
        let output = serde_json::json!({
            "event": "profile",
            "name": name,
            "dob": dob.to_string(),
            "life_path": profile.life_path,
            "destiny": profile.destiny,
            "soul_urge": profile.soul_urge,
            "personality": profile.personality,
            "chart": chart,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🔢 Numera Profile");
        println!("Name: {name}");
        println!("Birth: {dob}");
        println!();
        println!(
            "  Life Path:   {}",
            titled(NumberKind::LifePath, profile.life_path)
        );
        println!(
            "  Destiny:     {}",
            titled(NumberKind::Destiny, profile.destiny)
        );
        println!(
            "  Soul Urge:   {}",
            titled(NumberKind::SoulUrge, profile.soul_urge)
        );
        println!(
            "  Personality: {}",
            titled(NumberKind::Personality, profile.personality)
        );
        println!();
        print_chart(&chart);
    }

    Ok(())
}

fn cmd_love(name_a: &str, dob_a: &str, name_b: &str, dob_b: &str, json: bool) -> Result<()> {
    let dob_a: BirthDate = dob_a.parse()?;
    let dob_b: BirthDate = dob_b.parse()?;
    let path_a = life_path_number(&dob_a);
    let path_b = life_path_number(&dob_b);
    let score = compatibility_score(path_a.value(), path_b.value());

    if json {
        let output = serde_json::json!({
            "event": "love",
            "name_a": name_a,
            "name_b": name_b,
            "life_path_a": path_a,
            "life_path_b": path_b,
            "score": score,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("💞 Numera Love Compatibility");
        println!(
            "{name_a}: Life Path {}",
            titled(NumberKind::LifePath, path_a)
        );
        println!(
            "{name_b}: Life Path {}",
            titled(NumberKind::LifePath, path_b)
        );
        println!();
        println!("Score: {score}/100");
    }

    Ok(())
}

fn cmd_year(dob: &str, year: Option<i32>, json: bool) -> Result<()> {
    let dob: BirthDate = dob.parse()?;
    let target_year = year.unwrap_or_else(|| Local::now().year());
    let result = personal_year_number(&dob, target_year);

    if json {
        let output = serde_json::json!({
            "event": "year",
            "dob": dob.to_string(),
            "target_year": target_year,
            "personal_year": result.value,
            "breakdown": result.breakdown,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("📅 Numera Personal Year {target_year}");
        println!("Birth: {dob}");
        println!();
        for component in &result.breakdown {
            println!("  {:>14}: {}", component.role.to_string(), component.value);
        }
        println!();
        println!("Personal Year: {}", result.value);
    }

    Ok(())
}

fn cmd_day(dob: &str, date: Option<&str>, json: bool) -> Result<()> {
    let dob: BirthDate = dob.parse()?;
    let date = match date {
        Some(s) => {
            NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| NumeraError::InvalidDateFormat {
                input: s.to_string(),
                expected: "YYYY-MM-DD",
            })?
        }
        None => Local::now().date_naive(),
    };

    let life_path = life_path_number(&dob);
    let universal = universal_day_number(date);
    let personal = personal_day_number(life_path, date);
    let display_date = format_birth_date(&date.to_string())?;

    if json {
        let output = serde_json::json!({
            "event": "day",
            "dob": dob.to_string(),
            "date": display_date,
            "life_path": life_path,
            "universal_day": universal,
            "personal_day": personal,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("🌞 Numera Day Numbers for {display_date}");
        println!("Life Path: {}", titled(NumberKind::LifePath, life_path));
        println!();
        println!("  Universal Day: {universal}");
        println!("  Personal Day:  {personal}");
    }

    Ok(())
}

fn cmd_chart(name: &str, json: bool) -> Result<()> {
    let chart = CharacterChart::for_name(name);

    if json {
        let output = serde_json::json!({
            "event": "chart",
            "name": name,
            "chart": chart,
            "total": chart.total(),
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("📊 Numera Character Chart");
        println!("Name: {name}");
        println!();
        print_chart(&chart);
    }

    Ok(())
}

fn print_chart(chart: &CharacterChart) {
    println!("Character chart ({} letters):", chart.total());
    for (value, count) in chart.iter() {
        let bar = "▇".repeat(count as usize);
        println!("  {value}: {count} {bar}");
    }
}
