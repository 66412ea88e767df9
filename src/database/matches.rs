use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use rusqlite::params;
use serde_json::{Map, Value};

use super::connection::DbConn;
use super::models::MatchRecord;

/// Keys assigned by the store; client-supplied values for them are dropped.
const RESERVED_KEYS: [&str; 2] = ["id", "createdAt"];

pub fn insert_match(
    conn: &mut DbConn,
    mut payload: Map<String, Value>,
    now: NaiveDateTime,
) -> Result<MatchRecord> {
    for key in RESERVED_KEYS {
        payload.remove(key);
    }
    let json = serde_json::to_string(&payload).context("Failed to serialize match payload")?;

    let id = conn
        .query_row(
            "INSERT INTO matches (payload, created_at) VALUES (?1, ?2) RETURNING id",
            params![json, now],
            |row| row.get(0),
        )
        .context("Failed to insert match")?;

    Ok(MatchRecord { id, payload, created_at: now })
}

/// The newest `limit` matches, newest first.
pub fn list_recent(conn: &mut DbConn, limit: usize) -> Result<Vec<MatchRecord>> {
    let sql = "SELECT id, payload, created_at FROM matches ORDER BY id DESC LIMIT ?1";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?, row.get::<_, NaiveDateTime>(2)?))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()
        .context("Failed to list matches")?;

    rows.into_iter()
        .map(|(id, payload, created_at)| {
            let payload = serde_json::from_str(&payload)
                .with_context(|| format!("Corrupt payload for match {}", id))?;
            Ok(MatchRecord { id, payload, created_at })
        })
        .collect()
}

pub fn count_all(conn: &mut DbConn) -> Result<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM matches", [], |row| row.get(0))
        .context("Failed to count matches")?;
    Ok(count as usize)
}
