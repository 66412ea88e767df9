use anyhow::{Context, Result};
use rusqlite::OptionalExtension;

use super::connection::DbConn;
use super::matches;
use super::models::Overview;
use crate::domain::TeamNumber;

pub fn overview(conn: &mut DbConn) -> Result<Overview> {
    let (total_teams, avg_rating): (i64, Option<f64>) = conn
        .query_row("SELECT COUNT(*), AVG(rating) FROM teams", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .context("Failed to aggregate team ratings")?;

    let top_team: Option<TeamNumber> = conn
        .query_row(
            "SELECT team_number FROM teams ORDER BY rating DESC, team_number ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()
        .context("Failed to find top team")?;

    Ok(Overview {
        total_teams: total_teams as usize,
        avg_rating: avg_rating.unwrap_or(0.0).round(),
        top_team,
        data_points: matches::count_all(conn)?,
    })
}
