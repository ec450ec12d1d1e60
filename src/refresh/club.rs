//! Club refresh: cache check, single fetch attempt, fallback table, upsert.

use std::sync::Mutex;

use super::{is_fresh, now_unix};
use crate::fallback;
use crate::fetch::PageFetcher;
use crate::storage::{ClubRecord, SalaryDatabase};
use crate::text::to_slug;
use crate::Result;

pub const CLUB_URL_BASE: &str = "https://salarysport.com/football";

/// League slug used when no cached league is available for the club.
pub const FALLBACK_LEAGUE_SLUG: &str = "super-lig";

/// Return the cached record for `name` if it is fresh, otherwise refresh
/// it and return the upserted result.
///
/// The club page is fetched but not parsed: no field extraction exists
/// for it, so the response is discarded and the fallback table supplies
/// every value. Fetch failures are swallowed.
pub async fn get_or_refresh<F: PageFetcher>(
    store: &Mutex<SalaryDatabase>,
    fetcher: &F,
    name: &str,
) -> Result<ClubRecord> {
    let existing = store.lock().unwrap().find_club(name)?;

    if let Some(record) = &existing {
        if is_fresh(record.last_fetched, now_unix()?) {
            return Ok(record.clone());
        }
    }

    let club_slug = to_slug(name);
    let league_slug = existing
        .as_ref()
        .map(|record| to_slug(&record.league))
        .unwrap_or_else(|| FALLBACK_LEAGUE_SLUG.to_string());
    let url = format!("{}/{}/{}/", CLUB_URL_BASE, league_slug, club_slug);

    if let Err(e) = fetcher.fetch_page(&url).await {
        eprintln!("Club scrape failed for {name}: {e}");
    }

    let (league, total_wages, player_count) = fallback::club_fallback(&club_slug);
    let record = ClubRecord {
        name: name.to_string(),
        league,
        total_wages,
        player_count,
        last_fetched: now_unix()?,
    };

    store.lock().unwrap().upsert_club(&record)?;
    Ok(record)
}
