use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::settings::RatingThresholds;
use crate::database::{MatchRecord, Overview, StoredTeam};
use crate::domain::{loose_number_list, LooseNumber, RatingClass, Team, TeamNumber};

#[derive(Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ImportResponse {
    pub ok: bool,
    pub inserted: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    #[serde(flatten)]
    pub team: Team,
    pub rating_class: RatingClass,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TeamResponse {
    pub fn from_stored(stored: StoredTeam, thresholds: &RatingThresholds) -> Self {
        Self {
            rating_class: stored.team.rating_class(thresholds),
            team: stored.team,
            created_at: stored.created_at,
            updated_at: stored.updated_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResponse {
    pub id: i64,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
    pub created_at: NaiveDateTime,
}

impl From<MatchRecord> for MatchResponse {
    fn from(record: MatchRecord) -> Self {
        Self {
            id: record.id,
            payload: record.payload,
            created_at: record.created_at,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewResponse {
    pub total_teams: usize,
    pub avg_rating: f64,
    pub top_team: Option<TeamNumber>,
    pub data_points: usize,
}

impl From<Overview> for OverviewResponse {
    fn from(overview: Overview) -> Self {
        Self {
            total_teams: overview.total_teams,
            avg_rating: overview.avg_rating,
            top_team: overview.top_team,
            data_points: overview.data_points,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllianceCalcRequest {
    #[serde(default, deserialize_with = "loose_number_list")]
    pub team_numbers: Vec<LooseNumber>,
}
