use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::database::SqliteStore;
use crate::domain::{LooseNumber, TeamInput};

/// One roster row as exported by the scouting spreadsheet.
#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Team Number")]
    team_number: Option<String>,
    #[serde(rename = "Team Name")]
    team_name: Option<String>,
    #[serde(rename = "Rating")]
    rating: Option<String>,
    #[serde(rename = "Matches")]
    matches: Option<String>,
    #[serde(rename = "Avg Score")]
    avg_score: Option<String>,
    #[serde(rename = "Average Score")]
    average_score: Option<String>,
    #[serde(rename = "Reliability")]
    reliability: Option<String>,
    #[serde(rename = "Auto Points")]
    auto_points: Option<String>,
    #[serde(rename = "Teleop Points")]
    teleop_points: Option<String>,
    #[serde(rename = "Endgame Points")]
    endgame_points: Option<String>,
}

impl RosterRow {
    fn into_input(self) -> TeamInput {
        TeamInput {
            team_number: cell(self.team_number),
            name: self.team_name,
            rating: cell(self.rating),
            matches: cell(self.matches),
            avg_score: cell(self.avg_score).or_else(|| cell(self.average_score)),
            reliability: cell(self.reliability),
            auto: cell(self.auto_points),
            teleop: cell(self.teleop_points),
            endgame: cell(self.endgame_points),
        }
    }
}

fn cell(value: Option<String>) -> Option<LooseNumber> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(LooseNumber::Text)
}

/// Parses a CSV roster. Rows without a team number are skipped.
pub fn read_roster<R: Read>(reader: R) -> Result<Vec<TeamInput>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut inputs = Vec::new();
    for (idx, record) in csv_reader.deserialize::<RosterRow>().enumerate() {
        let row = record.with_context(|| format!("Failed to parse roster row {}", idx + 1))?;
        let input = row.into_input();
        if input.team_number.is_none() {
            continue;
        }
        inputs.push(input);
    }

    Ok(inputs)
}

pub struct ImportService {
    store: SqliteStore,
}

impl ImportService {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    /// Imports a CSV roster file, returning the number of teams written.
    pub fn run(&self, path: &Path) -> Result<usize> {
        info!("=== Importing roster from {} ===", path.display());

        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open roster file {}", path.display()))?;
        let inserted = self.import_reader(file)?;

        info!("=== Import Complete: {} teams ===", inserted);
        Ok(inserted)
    }

    /// Imports CSV roster data from any reader, e.g. an uploaded file.
    pub fn import_reader<R: Read>(&self, reader: R) -> Result<usize> {
        let inputs = read_roster(reader)?;
        info!("  → Parsed {} rows with team numbers", inputs.len());
        self.store_inputs(inputs)
    }

    pub fn store_inputs(&self, inputs: Vec<TeamInput>) -> Result<usize> {
        let mut inserted = 0;
        for input in inputs {
            match input.into_team() {
                Ok(team) => {
                    self.store.upsert_team(&team)?;
                    inserted += 1;
                }
                Err(e) => warn!("Skipping roster row: {}", e),
            }
        }
        Ok(inserted)
    }
}
