//! Player refresh: cache check, scrape-with-retry, fallback, upsert.

use std::sync::Mutex;
use std::time::Duration;

use tokio::time::sleep;

use super::{blocked_delay_ms, is_fresh, now_unix, retry_delay_ms, Attempt, MAX_ATTEMPTS};
use crate::fallback;
use crate::fetch::PageFetcher;
use crate::scrape::{extract_player, ScrapedPlayer};
use crate::storage::{PlayerRecord, SalaryDatabase};
use crate::text::to_slug;
use crate::Result;

pub const PLAYER_URL_BASE: &str = "https://salarysport.com/football/player";

const UNKNOWN: &str = "Unknown";

/// Return the cached record for `name` if it is fresh, otherwise refresh
/// it and return the upserted result.
///
/// Scrape failures degrade to fallback data; the only error this returns
/// is a persistence failure from the lookup or upsert.
pub async fn get_or_refresh<F: PageFetcher>(
    store: &Mutex<SalaryDatabase>,
    fetcher: &F,
    name: &str,
) -> Result<PlayerRecord> {
    let existing = store.lock().unwrap().find_player(name)?;

    if let Some(record) = existing {
        if is_fresh(record.last_fetched, now_unix()?) {
            return Ok(record);
        }
    }

    let scraped = scrape_with_retry(fetcher, name).await;
    let data = match scraped {
        Some(data) => data,
        None => {
            eprintln!("All scrape attempts failed for {name}, using fallback data");
            fallback::synthetic_player(name)
        }
    };

    let record = PlayerRecord {
        name: name.to_string(),
        club: data.club.unwrap_or_else(|| UNKNOWN.to_string()),
        league: data.league.unwrap_or_else(|| UNKNOWN.to_string()),
        weekly_salary: data.weekly_salary,
        last_fetched: now_unix()?,
    };

    store.lock().unwrap().upsert_player(&record)?;
    Ok(record)
}

/// Up to [`MAX_ATTEMPTS`] sequential attempts with linear backoff between
/// them; blocked responses add an extended delay before the next attempt.
async fn scrape_with_retry<F: PageFetcher>(fetcher: &F, name: &str) -> Option<ScrapedPlayer> {
    let url = format!("{}/{}", PLAYER_URL_BASE, to_slug(name));

    for attempt in 1..=MAX_ATTEMPTS {
        let delay = retry_delay_ms(attempt);
        if delay > 0 {
            sleep(Duration::from_millis(delay)).await;
        }

        match attempt_scrape(fetcher, &url).await {
            Attempt::Success(data) => return Some(data),
            Attempt::Blocked(status) => {
                eprintln!("Scrape attempt {attempt} for {name} blocked (HTTP {status})");
                sleep(Duration::from_millis(blocked_delay_ms(attempt))).await;
            }
            Attempt::Retryable(reason) => {
                eprintln!("Scrape attempt {attempt} for {name} failed: {reason}");
            }
        }
    }

    None
}

async fn attempt_scrape<F: PageFetcher>(fetcher: &F, url: &str) -> Attempt {
    let page = match fetcher.fetch_page(url).await {
        Ok(page) => page,
        Err(e) => return Attempt::Retryable(e.to_string()),
    };

    match page.status {
        200 => {
            let data = extract_player(&page.body);
            if data.has_data() {
                Attempt::Success(data)
            } else {
                Attempt::Retryable("no salary or club found in page".to_string())
            }
        }
        403 | 429 => Attempt::Blocked(page.status),
        status => Attempt::Retryable(format!("unexpected HTTP status {status}")),
    }
}
