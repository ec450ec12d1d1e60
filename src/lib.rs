//! Football salary API library
//!
//! A small Rust service that answers player and club salary lookups from a
//! local SQLite cache, refreshing stale entries from salarysport.com with a
//! best-effort scraper and deterministic fallback data when scraping fails.
//!
//! ## Components
//!
//! - **Text normalization**: URL slugs and currency parsing (`text`)
//! - **Fetch client**: browser-like HTTP GET with a bounded timeout (`fetch`)
//! - **Scrape heuristics**: selector-cascade extraction of salary/club/league (`scrape`)
//! - **Fallback tables**: hardcoded player overrides and known clubs (`fallback`)
//! - **Storage**: SQLite-backed record cache keyed by name (`storage`)
//! - **Refresh orchestration**: staleness check, retry loop, fallback, upsert (`refresh`)
//! - **HTTP API**: axum routes serving the records (`server`)
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::{Arc, Mutex};
//! use wagewatch::{refresh, storage::SalaryDatabase, fetch::FetchClient};
//!
//! # async fn example() -> wagewatch::Result<()> {
//! let db = Arc::new(Mutex::new(SalaryDatabase::new()?));
//! let client = FetchClient::new()?;
//! let record = refresh::player::get_or_refresh(&db, &client, "Lionel Messi").await?;
//! println!("{} earns {}/week", record.name, record.weekly_salary);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod fallback;
pub mod fetch;
pub mod refresh;
pub mod scrape;
pub mod server;
pub mod storage;
pub mod text;

// Re-export commonly used types
pub use error::{Result, WageError};
pub use fetch::{FetchClient, Page, PageFetcher};
pub use storage::{ClubRecord, PlayerRecord, SalaryDatabase};

pub const PORT_ENV_VAR: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;
