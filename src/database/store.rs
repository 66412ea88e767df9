use anyhow::Result;
use chrono::Utc;
use log::info;
use serde_json::{Map, Value};

use super::connection::{create_pool, get_connection, DbConn, DbPool};
use super::models::{MatchRecord, Overview, StoredTeam};
use super::{matches, setup, stats, teams};
use crate::domain::{Team, TeamNumber, TeamSource};

/// Keyed team/match store backed by a pooled SQLite file.
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path` and makes sure the schema exists.
    pub fn open(path: &str) -> Result<Self> {
        let pool = create_pool(path)?;
        let mut conn = get_connection(&pool)?;
        setup::ensure_schema(&mut conn)?;
        info!("Opened store at {}", path);
        Ok(Self { pool })
    }

    fn connection(&self) -> Result<DbConn> {
        get_connection(&self.pool)
    }

    pub fn upsert_team(&self, team: &Team) -> Result<StoredTeam> {
        let mut conn = self.connection()?;
        teams::upsert_team(&mut conn, team, Utc::now().naive_utc())
    }

    pub fn find_team(&self, team_number: TeamNumber) -> Result<Option<StoredTeam>> {
        let mut conn = self.connection()?;
        teams::find_by_number(&mut conn, team_number)
    }

    pub fn list_teams(&self) -> Result<Vec<StoredTeam>> {
        let mut conn = self.connection()?;
        teams::list_all(&mut conn)
    }

    pub fn insert_match(&self, payload: Map<String, Value>) -> Result<MatchRecord> {
        let mut conn = self.connection()?;
        matches::insert_match(&mut conn, payload, Utc::now().naive_utc())
    }

    pub fn recent_matches(&self, limit: usize) -> Result<Vec<MatchRecord>> {
        let mut conn = self.connection()?;
        matches::list_recent(&mut conn, limit)
    }

    pub fn overview(&self) -> Result<Overview> {
        let mut conn = self.connection()?;
        stats::overview(&mut conn)
    }
}

impl TeamSource for SqliteStore {
    fn all_teams(&self) -> Result<Vec<Team>> {
        Ok(self.list_teams()?.into_iter().map(|stored| stored.team).collect())
    }

    fn team_by_number(&self, number: TeamNumber) -> Result<Option<Team>> {
        Ok(self.find_team(number)?.map(|stored| stored.team))
    }
}
