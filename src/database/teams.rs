use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::{params, OptionalExtension};

use super::connection::DbConn;
use super::models::StoredTeam;
use crate::domain::{Team, TeamNumber};

const TEAM_COLUMNS: &str = "team_number, name, rating, matches, avg_score, reliability, auto, teleop, endgame, created_at, updated_at";

/// Inserts the team or replaces its stats, keeping the original `created_at`.
pub fn upsert_team(conn: &mut DbConn, team: &Team, now: NaiveDateTime) -> Result<StoredTeam> {
    let sql = format!(
        "INSERT INTO teams ({TEAM_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?10) \
         ON CONFLICT(team_number) DO UPDATE SET \
         name = excluded.name, rating = excluded.rating, matches = excluded.matches, \
         avg_score = excluded.avg_score, reliability = excluded.reliability, \
         auto = excluded.auto, teleop = excluded.teleop, endgame = excluded.endgame, \
         updated_at = excluded.updated_at \
         RETURNING {TEAM_COLUMNS}"
    );

    conn.query_row(
        &sql,
        params![
            team.team_number,
            team.name,
            team.rating,
            team.matches,
            team.avg_score,
            team.reliability,
            team.auto,
            team.teleop,
            team.endgame,
            now
        ],
        parse_team_row,
    )
    .with_context(|| format!("Failed to upsert team {}", team.team_number))
}

pub fn find_by_number(conn: &mut DbConn, team_number: TeamNumber) -> Result<Option<StoredTeam>> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM teams WHERE team_number = ?1");

    conn.query_row(&sql, params![team_number], parse_team_row)
        .optional()
        .context("Failed to query team by number")
}

/// All teams, strongest rating first, ties by ascending team number.
pub fn list_all(conn: &mut DbConn) -> Result<Vec<StoredTeam>> {
    let sql = format!("SELECT {TEAM_COLUMNS} FROM teams ORDER BY rating DESC, team_number ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map([], parse_team_row)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list teams")?;

    Ok(rows)
}

fn parse_team_row(row: &rusqlite::Row) -> rusqlite::Result<StoredTeam> {
    Ok(StoredTeam {
        team: Team {
            team_number: row.get(0)?,
            name: row.get(1)?,
            rating: row.get(2)?,
            matches: row.get(3)?,
            avg_score: row.get(4)?,
            reliability: row.get(5)?,
            auto: row.get(6)?,
            teleop: row.get(7)?,
            endgame: row.get(8)?,
        },
        created_at: row.get(9)?,
        updated_at: row.get(10)?,
    })
}
