//! Heuristic extraction of salary data from scraped player pages.
//!
//! The target site has no stable markup, so each field is tried against an
//! ordered list of selector candidates; the first candidate yielding a
//! non-trivial value wins and the cascade stops for that field.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::text::parse_currency_to_number;

/// Salary candidates, most specific first. The trailing bare element
/// selectors catch pages where the figure sits in unclassed markup; the
/// currency-symbol requirement keeps them from matching noise.
const SALARY_CANDIDATES: &[&str] = &[
    ".salary",
    ".wage",
    ".weekly-salary",
    ".player-salary",
    ".contract-details .amount",
    ".player-info .salary",
    ".stats-salary",
    ".player-details .weekly",
    "span[class*=\"salary\"]",
    "div[class*=\"salary\"]",
    "td[class*=\"salary\"]",
    ".player-meta span",
    ".player-stats td",
    "span",
    "div",
];

const CLUB_CANDIDATES: &[&str] = &[
    ".club-name",
    ".team-name",
    ".player-club",
    ".current-club",
    "span[class*=\"club\"]",
    "div[class*=\"team\"]",
    ".player-meta .club",
    ".breadcrumb a",
];

const LEAGUE_CANDIDATES: &[&str] = &[
    ".league-name",
    ".division",
    ".competition",
    "span[class*=\"league\"]",
    ".breadcrumb a[href*=\"league\"]",
    ".player-league",
];

static SALARY_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| parse_selectors(SALARY_CANDIDATES));
static CLUB_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| parse_selectors(CLUB_CANDIDATES));
static LEAGUE_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| parse_selectors(LEAGUE_CANDIDATES));

fn parse_selectors(candidates: &[&str]) -> Vec<Selector> {
    candidates
        .iter()
        .filter_map(|s| Selector::parse(s).ok())
        .collect()
}

/// Fields pulled out of a player page. Anything the cascade could not
/// resolve stays empty and the fallback policy fills it in later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrapedPlayer {
    pub weekly_salary: f64,
    pub club: Option<String>,
    pub league: Option<String>,
}

impl ScrapedPlayer {
    /// A positive salary or a resolved club counts as a usable scrape.
    pub fn has_data(&self) -> bool {
        self.weekly_salary > 0.0 || self.club.is_some()
    }
}

/// Run the selector cascades over a page body.
pub fn extract_player(body: &str) -> ScrapedPlayer {
    let document = Html::parse_document(body);

    ScrapedPlayer {
        weekly_salary: extract_salary(&document).unwrap_or(0.0),
        club: extract_club(&document),
        league: extract_league(&document),
    }
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn has_currency_symbol(text: &str) -> bool {
    text.contains('£') || text.contains('€') || text.contains('$')
}

/// First element across the cascade whose text carries a currency symbol
/// and parses to a positive amount.
fn extract_salary(document: &Html) -> Option<f64> {
    for selector in SALARY_SELECTORS.iter() {
        for element in document.select(selector) {
            let text = element_text(&element);
            if text.is_empty() || !has_currency_symbol(&text) {
                continue;
            }
            let salary = parse_currency_to_number(&text);
            if salary > 0.0 {
                return Some(salary);
            }
        }
    }
    None
}

/// Club cascade: only the first element per candidate is considered, and
/// breadcrumb noise ("Home", "Player") is rejected.
fn extract_club(document: &Html) -> Option<String> {
    for selector in CLUB_SELECTORS.iter() {
        if let Some(element) = document.select(selector).next() {
            let text = element_text(&element);
            if text.chars().count() > 2 && !text.contains("Home") && !text.contains("Player") {
                return Some(text);
            }
        }
    }
    None
}

fn extract_league(document: &Html) -> Option<String> {
    for selector in LEAGUE_SELECTORS.iter() {
        if let Some(element) = document.select(selector).next() {
            let text = element_text(&element);
            if text.chars().count() > 2 {
                return Some(text);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests;
