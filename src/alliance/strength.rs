use crate::domain::Team;

/// Mean reliability (a 0-1 fraction) is scaled onto 0-10.
const RELIABILITY_BONUS_SCALE: f64 = 10.0;
/// Role balance (a 0-1 ratio) is scaled onto 0-5.
const SYNERGY_BONUS_SCALE: f64 = 5.0;
/// Floor for the balance denominator so an alliance with no role output scores 0.
const MIN_BALANCE_DENOMINATOR: f64 = 1.0;

const ALLIANCE_SIZE: f64 = 3.0;

/// Strength of an alliance formed by exactly three teams.
///
/// strength = sum(rating) + mean(reliability) * 10 + balance * 5, where
/// balance is the weakest mean role contribution over the strongest one.
/// Any other number of teams scores 0.
pub fn alliance_strength(teams: &[Team]) -> f64 {
    match teams {
        [a, b, c] => trio_strength(a, b, c),
        _ => 0.0,
    }
}

pub(crate) fn trio_strength(a: &Team, b: &Team, c: &Team) -> f64 {
    let base = a.rating + b.rating + c.rating;
    let reliability_bonus = reliability_bonus(a, b, c);
    let synergy_bonus = role_balance(a, b, c) * SYNERGY_BONUS_SCALE;
    base + reliability_bonus + synergy_bonus
}

fn reliability_bonus(a: &Team, b: &Team, c: &Team) -> f64 {
    (a.reliability + b.reliability + c.reliability) / ALLIANCE_SIZE * RELIABILITY_BONUS_SCALE
}

fn role_balance(a: &Team, b: &Team, c: &Team) -> f64 {
    let auto = mean_of(a, b, c, |t| t.auto);
    let teleop = mean_of(a, b, c, |t| t.teleop);
    let endgame = mean_of(a, b, c, |t| t.endgame);

    let weakest = auto.min(teleop).min(endgame);
    let strongest = auto.max(teleop).max(endgame);
    weakest / MIN_BALANCE_DENOMINATOR.max(strongest)
}

fn mean_of(a: &Team, b: &Team, c: &Team, role: impl Fn(&Team) -> f64) -> f64 {
    (role(a) + role(b) + role(c)) / ALLIANCE_SIZE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(number: u32, rating: f64, reliability: f64, auto: f64, teleop: f64, endgame: f64) -> Team {
        Team {
            team_number: number,
            name: format!("Team {number}"),
            rating,
            reliability,
            auto,
            teleop,
            endgame,
            ..Team::default()
        }
    }

    fn reference_trio() -> Vec<Team> {
        vec![
            team(254, 95.0, 0.92, 15.0, 65.0, 5.0),
            team(118, 88.0, 0.89, 12.0, 58.0, 8.0),
            team(1678, 92.0, 0.91, 14.0, 60.0, 8.0),
        ]
    }

    #[test]
    fn test_reference_alliance_strength() {
        let strength = alliance_strength(&reference_trio());

        let expected = 275.0 + (0.92 + 0.89 + 0.91) / 3.0 * 10.0 + (21.0 / 3.0) / (183.0 / 3.0) * 5.0;
        assert!((strength - expected).abs() < 1e-9);
        assert!((strength - 284.64).abs() < 0.01);
    }

    #[test]
    fn test_strength_is_symmetric() {
        let trio = reference_trio();
        let expected = alliance_strength(&trio);

        let permutations = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for [i, j, k] in permutations {
            let permuted = vec![trio[i].clone(), trio[j].clone(), trio[k].clone()];
            assert!((alliance_strength(&permuted) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_wrong_team_count_scores_zero() {
        let trio = reference_trio();

        assert_eq!(alliance_strength(&[]), 0.0);
        assert_eq!(alliance_strength(&trio[..2]), 0.0);

        let mut four = trio.clone();
        four.push(team(971, 99.0, 1.0, 20.0, 20.0, 20.0));
        assert_eq!(alliance_strength(&four), 0.0);
    }

    #[test]
    fn test_no_role_output_gives_zero_balance() {
        let trio = vec![
            team(1, 50.0, 0.5, 0.0, 0.0, 0.0),
            team(2, 50.0, 0.5, 0.0, 0.0, 0.0),
            team(3, 50.0, 0.5, 0.0, 0.0, 0.0),
        ];

        assert!((alliance_strength(&trio) - 155.0).abs() < 1e-9);
    }

    #[test]
    fn test_even_roles_earn_full_synergy() {
        let trio = vec![
            team(1, 0.0, 0.0, 10.0, 10.0, 10.0),
            team(2, 0.0, 0.0, 10.0, 10.0, 10.0),
            team(3, 0.0, 0.0, 10.0, 10.0, 10.0),
        ];

        assert!((alliance_strength(&trio) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_small_role_means_use_floored_denominator() {
        // Means of 0.5 each: balance = 0.5 / max(1, 0.5) = 0.5
        let trio = vec![
            team(1, 0.0, 0.0, 0.5, 0.5, 0.5),
            team(2, 0.0, 0.0, 0.5, 0.5, 0.5),
            team(3, 0.0, 0.0, 0.5, 0.5, 0.5),
        ];

        assert!((alliance_strength(&trio) - 2.5).abs() < 1e-9);
    }
}
