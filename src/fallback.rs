//! Fallback data used when scraping yields nothing.
//!
//! The override and club tables are fixed process-wide data; matching is a
//! pure lookup so the policy stays testable on its own. Fabricated values
//! are an accepted behavior of this service, not an error path.

use rand::Rng;

use crate::scrape::ScrapedPlayer;

pub const DEFAULT_LEAGUE: &str = "International League";
pub const DEFAULT_CLUB_WAGES: f64 = 1_000_000.0;
pub const DEFAULT_CLUB_PLAYER_COUNT: u32 = 25;

/// Synthetic weekly salary range, inclusive-exclusive.
pub const SYNTHETIC_SALARY_MIN: i64 = 20_000;
pub const SYNTHETIC_SALARY_MAX: i64 = 120_000;

/// Fixed triple applied when a player name contains `needle`
/// (case-insensitive). Checked in declaration order; first hit wins.
pub struct PlayerOverride {
    pub needle: &'static str,
    pub weekly_salary: f64,
    pub club: &'static str,
    pub league: &'static str,
}

pub const PLAYER_OVERRIDES: &[PlayerOverride] = &[
    PlayerOverride {
        needle: "messi",
        weekly_salary: 400_000.0,
        club: "Inter Miami",
        league: "MLS",
    },
    PlayerOverride {
        needle: "ronaldo",
        weekly_salary: 350_000.0,
        club: "Al Nassr",
        league: "Saudi Pro League",
    },
    PlayerOverride {
        needle: "neymar",
        weekly_salary: 300_000.0,
        club: "Al Hilal",
        league: "Saudi Pro League",
    },
    PlayerOverride {
        needle: "mbappe",
        weekly_salary: 250_000.0,
        club: "Real Madrid",
        league: "La Liga",
    },
    PlayerOverride {
        needle: "haaland",
        weekly_salary: 200_000.0,
        club: "Manchester City",
        league: "Premier League",
    },
    PlayerOverride {
        needle: "icardi",
        weekly_salary: 100_000.0,
        club: "Galatasaray",
        league: "Super Lig",
    },
];

/// Known club data keyed by name slug.
pub struct ClubEntry {
    pub slug: &'static str,
    pub league: &'static str,
    pub total_wages: f64,
    pub player_count: u32,
}

pub const KNOWN_CLUBS: &[ClubEntry] = &[
    ClubEntry {
        slug: "galatasaray",
        league: "Super Lig",
        total_wages: 2_500_000.0,
        player_count: 25,
    },
    ClubEntry {
        slug: "barcelona",
        league: "La Liga",
        total_wages: 5_000_000.0,
        player_count: 28,
    },
    ClubEntry {
        slug: "real-madrid",
        league: "La Liga",
        total_wages: 5_500_000.0,
        player_count: 26,
    },
    ClubEntry {
        slug: "manchester-city",
        league: "Premier League",
        total_wages: 6_000_000.0,
        player_count: 24,
    },
    ClubEntry {
        slug: "psg",
        league: "Ligue 1",
        total_wages: 4_500_000.0,
        player_count: 23,
    },
    ClubEntry {
        slug: "bayern-munich",
        league: "Bundesliga",
        total_wages: 4_000_000.0,
        player_count: 25,
    },
];

/// First override whose needle appears in the name, if any.
pub fn player_override(name: &str) -> Option<&'static PlayerOverride> {
    let lowered = name.to_lowercase();
    PLAYER_OVERRIDES
        .iter()
        .find(|entry| lowered.contains(entry.needle))
}

/// Known club entry for a name slug, if any.
pub fn known_club(slug: &str) -> Option<&'static ClubEntry> {
    KNOWN_CLUBS.iter().find(|entry| entry.slug == slug)
}

/// Build a fully populated synthetic player when scraping came up empty:
/// a pseudo-random salary, "<Name> FC", and the default league, unless an
/// override entry pins the whole triple.
pub fn synthetic_player(name: &str) -> ScrapedPlayer {
    if let Some(entry) = player_override(name) {
        return ScrapedPlayer {
            weekly_salary: entry.weekly_salary,
            club: Some(entry.club.to_string()),
            league: Some(entry.league.to_string()),
        };
    }

    let salary = rand::rng().random_range(SYNTHETIC_SALARY_MIN..SYNTHETIC_SALARY_MAX) as f64;
    ScrapedPlayer {
        weekly_salary: salary,
        club: Some(format!("{} FC", capitalize(name))),
        league: Some(DEFAULT_LEAGUE.to_string()),
    }
}

/// (league, total_wages, player_count) for a club slug, from the known
/// table or the defaults.
pub fn club_fallback(slug: &str) -> (String, f64, u32) {
    match known_club(slug) {
        Some(entry) => (
            entry.league.to_string(),
            entry.total_wages,
            entry.player_count,
        ),
        None => (
            DEFAULT_LEAGUE.to_string(),
            DEFAULT_CLUB_WAGES,
            DEFAULT_CLUB_PLAYER_COUNT,
        ),
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
