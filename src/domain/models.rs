use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::settings::RatingThresholds;

pub type TeamNumber = u32;

/// Scouted statistics for one team, as consumed by the alliance ranker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_number: TeamNumber,
    pub name: String,
    pub rating: f64,
    pub matches: f64,
    pub avg_score: f64,
    /// Conventionally a 0-1 fraction
    pub reliability: f64,
    pub auto: f64,
    pub teleop: f64,
    pub endgame: f64,
}

impl Team {
    pub fn rating_class(&self, thresholds: &RatingThresholds) -> RatingClass {
        RatingClass::from_rating(self.rating, thresholds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingClass {
    Excellent,
    Good,
    Average,
    Poor,
}

impl RatingClass {
    pub fn from_rating(rating: f64, thresholds: &RatingThresholds) -> Self {
        if rating >= thresholds.excellent {
            RatingClass::Excellent
        } else if rating >= thresholds.good {
            RatingClass::Good
        } else if rating >= thresholds.average {
            RatingClass::Average
        } else {
            RatingClass::Poor
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RatingClass::Excellent => "excellent",
            RatingClass::Good => "good",
            RatingClass::Average => "average",
            RatingClass::Poor => "poor",
        }
    }
}

// --- Boundary Structures ---

/// A numeric cell coming from a form, JSON body or spreadsheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
}

impl LooseNumber {
    /// Finite value of the cell; blank or unparsable text yields `None`.
    pub fn value(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    /// A strictly positive whole number that fits a team number.
    pub fn as_team_number(&self) -> Option<TeamNumber> {
        let value = self.value()?;
        if value < 1.0 || value.fract() != 0.0 || value > TeamNumber::MAX as f64 {
            return None;
        }
        Some(value as TeamNumber)
    }
}

impl LooseNumber {
    /// Numbers and strings become cells; any other JSON value has no number in it.
    pub fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(LooseNumber::Number),
            Value::String(s) => Some(LooseNumber::Text(s)),
            _ => None,
        }
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        LooseNumber::Number(value)
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_string())
    }
}

/// Loosely-typed team record as submitted by clients or importers.
///
/// Every field is optional; `into_team` fills the gaps so the ranker only
/// ever sees complete records.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamInput {
    pub team_number: Option<LooseNumber>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    pub rating: Option<LooseNumber>,
    pub matches: Option<LooseNumber>,
    pub avg_score: Option<LooseNumber>,
    pub reliability: Option<LooseNumber>,
    pub auto: Option<LooseNumber>,
    pub teleop: Option<LooseNumber>,
    pub endgame: Option<LooseNumber>,
}

impl TeamInput {
    pub fn team_number(&self) -> Option<TeamNumber> {
        self.team_number.as_ref().and_then(LooseNumber::as_team_number)
    }

    pub fn into_team(self) -> Result<Team> {
        let Some(team_number) = self.team_number() else {
            bail!("Team number must be a positive integer");
        };

        Ok(Team {
            team_number,
            name: self.name.unwrap_or_default(),
            rating: or_zero(&self.rating),
            matches: or_zero(&self.matches),
            avg_score: or_zero(&self.avg_score),
            reliability: or_zero(&self.reliability),
            auto: or_zero(&self.auto),
            teleop: or_zero(&self.teleop),
            endgame: or_zero(&self.endgame),
        })
    }
}

fn or_zero(field: &Option<LooseNumber>) -> f64 {
    field.as_ref().and_then(LooseNumber::value).unwrap_or(0.0)
}

/// Accepts any JSON scalar as text; `null` and containers become `None`.
fn scalar_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// A list of loose team numbers. `null` is an empty list and entries that
/// are neither numbers nor strings are dropped.
pub fn loose_number_list<'de, D>(deserializer: D) -> std::result::Result<Vec<LooseNumber>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<Value>> = Option::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .filter_map(LooseNumber::from_json)
        .collect())
}
