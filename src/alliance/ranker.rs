use log::debug;
use std::cmp::Ordering;

use super::strength::trio_strength;
use super::types::Alliance;
use crate::domain::Team;

/// Number of 3-team combinations drawn from `n` teams, C(n, 3).
pub fn combination_count(n: usize) -> usize {
    if n < 3 {
        return 0;
    }
    n * (n - 1) * (n - 2) / 6
}

/// Scores every unordered trio of the roster and orders them strongest first.
///
/// Trios are generated over roster positions (i < j < k), so each combination
/// appears exactly once even if team numbers or stats repeat. Equal strengths
/// are ordered by the ascending team-number triple; remaining ties keep
/// roster order. Fewer than three teams produce an empty ranking.
///
/// The work is cubic in the roster size (200 teams is ~1.3M trios), so async
/// callers should run this on a blocking thread.
pub fn rank_alliances(teams: &[Team]) -> Vec<Alliance> {
    debug!(
        "Ranking {} alliances from {} teams",
        combination_count(teams.len()),
        teams.len()
    );

    let mut alliances = enumerate_trios(teams);
    alliances.sort_by(compare_alliances);
    alliances
}

/// The `limit` strongest alliances of the roster.
pub fn top_alliances(teams: &[Team], limit: usize) -> Vec<Alliance> {
    let mut alliances = rank_alliances(teams);
    alliances.truncate(limit);
    alliances
}

/// The alliance formed by exactly the given three teams.
pub fn alliance_for(teams: &[Team]) -> Option<Alliance> {
    match teams {
        [a, b, c] => Some(build_alliance(a, b, c)),
        _ => None,
    }
}

fn enumerate_trios(teams: &[Team]) -> Vec<Alliance> {
    let n = teams.len();
    let mut alliances = Vec::with_capacity(combination_count(n));

    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                alliances.push(build_alliance(&teams[i], &teams[j], &teams[k]));
            }
        }
    }

    alliances
}

fn build_alliance(a: &Team, b: &Team, c: &Team) -> Alliance {
    Alliance {
        teams: [a.team_number, b.team_number, c.team_number],
        strength: trio_strength(a, b, c),
    }
}

fn compare_alliances(a: &Alliance, b: &Alliance) -> Ordering {
    b.strength
        .total_cmp(&a.strength)
        .then_with(|| a.sorted_teams().cmp(&b.sorted_teams()))
}
