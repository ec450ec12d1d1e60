//! Lookup and upsert operations, keyed on exact entity name.

use rusqlite::params;

use super::{models::*, schema::SalaryDatabase};
use crate::Result;

impl SalaryDatabase {
    /// Look up a player by exact name
    pub fn find_player(&self, name: &str) -> Result<Option<PlayerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, club, league, weekly_salary, last_fetched
             FROM players WHERE name = ?",
        )?;

        let result = stmt.query_row(params![name], |row| {
            Ok(PlayerRecord {
                name: row.get(0)?,
                club: row.get(1)?,
                league: row.get(2)?,
                weekly_salary: row.get(3)?,
                last_fetched: row.get(4)?,
            })
        });

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert or fully overwrite a player record
    pub fn upsert_player(&mut self, record: &PlayerRecord) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players (name, club, league, weekly_salary, last_fetched)
             VALUES (?, ?, ?, ?, ?)",
            params![
                record.name,
                record.club,
                record.league,
                record.weekly_salary,
                record.last_fetched
            ],
        )?;
        Ok(())
    }

    /// Look up a club by exact name
    pub fn find_club(&self, name: &str) -> Result<Option<ClubRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT name, league, total_wages, player_count, last_fetched
             FROM clubs WHERE name = ?",
        )?;

        let result = stmt.query_row(params![name], |row| {
            Ok(ClubRecord {
                name: row.get(0)?,
                league: row.get(1)?,
                total_wages: row.get(2)?,
                player_count: row.get(3)?,
                last_fetched: row.get(4)?,
            })
        });

        match result {
            Ok(record) => Ok(Some(record)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Insert or fully overwrite a club record
    pub fn upsert_club(&mut self, record: &ClubRecord) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO clubs (name, league, total_wages, player_count, last_fetched)
             VALUES (?, ?, ?, ?, ?)",
            params![
                record.name,
                record.league,
                record.total_wages,
                record.player_count,
                record.last_fetched
            ],
        )?;
        Ok(())
    }
}
