use serde::Serialize;

use crate::domain::TeamNumber;

/// Three distinct roster entries scored as one unit.
///
/// `teams` keeps the order in which the members appeared in the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alliance {
    pub teams: [TeamNumber; 3],
    pub strength: f64,
}

impl Alliance {
    /// Team numbers in ascending order, used as the tie-break key.
    pub fn sorted_teams(&self) -> [TeamNumber; 3] {
        let mut teams = self.teams;
        teams.sort_unstable();
        teams
    }
}
