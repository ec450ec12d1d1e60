//! Storage layer: the SQLite cache of player and club records.
//!
//! Organized the same way as the rest of the crate's persistence concerns:
//! - `models`: record structures
//! - `schema`: database connection and schema management
//! - `queries`: lookup and upsert operations

pub mod models;
pub mod queries;
pub mod schema;


pub use models::{ClubRecord, PlayerRecord};
pub use schema::SalaryDatabase;
