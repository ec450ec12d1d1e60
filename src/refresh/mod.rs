//! Refresh orchestration: cache-or-refetch decisions for players and clubs.
//!
//! Both entity kinds share the same lifecycle: serve the cached record while
//! it is under the staleness threshold, otherwise scrape, fall back to
//! synthetic data on total failure, and upsert the result. Scrape and
//! network failures never leave this module; only persistence errors
//! propagate to the caller.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::scrape::ScrapedPlayer;
use crate::Result;

pub mod club;
pub mod player;

#[cfg(test)]
mod tests;

/// Cached records older than this many whole days are refreshed.
pub const STALENESS_DAYS: u64 = 7;

/// Scrape attempts per player refresh.
pub const MAX_ATTEMPTS: u32 = 3;

const SECONDS_PER_DAY: u64 = 86_400;

/// Current unix time in seconds.
pub fn now_unix() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

/// Whole days elapsed between two unix timestamps (floor).
pub fn days_since(then: u64, now: u64) -> u64 {
    now.saturating_sub(then) / SECONDS_PER_DAY
}

/// True while a record is still within the staleness window.
pub fn is_fresh(last_fetched: u64, now: u64) -> bool {
    days_since(last_fetched, now) < STALENESS_DAYS
}

/// Linear pre-attempt backoff: nothing before the first attempt, then
/// 2000ms * attempt number.
pub fn retry_delay_ms(attempt: u32) -> u64 {
    if attempt <= 1 {
        0
    } else {
        2_000 * attempt as u64
    }
}

/// Extra backoff after a blocked response, on top of the regular delay.
pub fn blocked_delay_ms(attempt: u32) -> u64 {
    5_000 * attempt as u64
}

/// Outcome of a single scrape attempt. Keeping this a tagged value makes
/// the backoff policy a function of the outcome, not of caught exceptions.
#[derive(Debug)]
pub enum Attempt {
    /// Page yielded a positive salary or a resolved club name.
    Success(ScrapedPlayer),
    /// Network failure, bad status, or a page with no usable data.
    Retryable(String),
    /// HTTP 403/429 from the scrape target; retried with extended backoff.
    Blocked(u16),
}
