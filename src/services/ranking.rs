use anyhow::Result;
use log::{debug, info};

use crate::alliance::{self, Alliance};
use crate::config::settings::AllianceSettings;
use crate::domain::{LooseNumber, Team, TeamNumber, TeamSource};

/// Answers alliance queries against whatever roster the source holds.
///
/// Every call reads the roster afresh; nothing is cached between calls.
pub struct RankingService<S> {
    source: S,
    settings: AllianceSettings,
}

impl<S: TeamSource> RankingService<S> {
    pub fn new(source: S, settings: AllianceSettings) -> Self {
        Self { source, settings }
    }

    /// The strongest alliances, `requested` resolved against the configured limits.
    pub fn top(&self, requested: Option<usize>) -> Result<Vec<Alliance>> {
        let limit = self.settings.resolve_limit(requested);
        let teams = self.source.all_teams()?;
        info!(
            "Ranking {} alliances from {} teams (top {})",
            alliance::combination_count(teams.len()),
            teams.len(),
            limit
        );
        Ok(alliance::top_alliances(&teams, limit))
    }

    /// The alliance of the first three known, distinct teams in `numbers`.
    ///
    /// Unknown or malformed numbers are skipped. `None` if fewer than three remain.
    pub fn for_team_numbers(&self, numbers: &[LooseNumber]) -> Result<Option<Alliance>> {
        let members = self.resolve_members(numbers)?;
        Ok(alliance::alliance_for(&members))
    }

    fn resolve_members(&self, numbers: &[LooseNumber]) -> Result<Vec<Team>> {
        let mut seen: Vec<TeamNumber> = Vec::with_capacity(3);
        let mut members = Vec::with_capacity(3);

        for number in numbers.iter().filter_map(LooseNumber::as_team_number) {
            if members.len() == 3 {
                break;
            }
            if seen.contains(&number) {
                continue;
            }
            seen.push(number);
            match self.source.team_by_number(number)? {
                Some(team) => members.push(team),
                None => debug!("Ignoring unknown team {}", number),
            }
        }

        Ok(members)
    }
}
