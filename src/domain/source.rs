use anyhow::Result;

use super::models::{Team, TeamNumber};

/// Anything that can hand the ranker the current roster.
pub trait TeamSource {
    /// Every known team. Order is not significant.
    fn all_teams(&self) -> Result<Vec<Team>>;

    fn team_by_number(&self, number: TeamNumber) -> Result<Option<Team>>;
}

impl TeamSource for [Team] {
    fn all_teams(&self) -> Result<Vec<Team>> {
        Ok(self.to_vec())
    }

    fn team_by_number(&self, number: TeamNumber) -> Result<Option<Team>> {
        Ok(self.iter().find(|t| t.team_number == number).cloned())
    }
}

impl TeamSource for Vec<Team> {
    fn all_teams(&self) -> Result<Vec<Team>> {
        self.as_slice().all_teams()
    }

    fn team_by_number(&self, number: TeamNumber) -> Result<Option<Team>> {
        self.as_slice().team_by_number(number)
    }
}
