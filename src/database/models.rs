use chrono::NaiveDateTime;
use serde_json::{Map, Value};

use crate::domain::{Team, TeamNumber};

#[derive(Debug, Clone, PartialEq)]
pub struct StoredTeam {
    pub team: Team,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchRecord {
    pub id: i64,
    pub payload: Map<String, Value>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub total_teams: usize,
    pub avg_rating: f64,
    pub top_team: Option<TeamNumber>,
    pub data_points: usize,
}
