// MVP score formula.
//
// The input CSV normally carries a precomputed MVP_Score column, but the
// score can be re-derived from the counting stats when that column is stale
// or hand-filled.

use crate::player::PlayerRecord;

/// Weighted composite over the five counting stats:
/// PTS*0.4 + AST*0.2 + TRB*0.2 + STL*0.1 + BLK*0.1.
pub fn basic_score(record: &PlayerRecord) -> f64 {
    record.points * 0.4
        + record.assists * 0.2
        + record.rebounds * 0.2
        + record.steals * 0.1
        + record.blocks * 0.1
}

/// Return copies of the records with `mvp_score` recomputed from
/// `basic_score`. Input order is preserved and the input is not mutated.
pub fn rescore(records: &[PlayerRecord]) -> Vec<PlayerRecord> {
    records
        .iter()
        .map(|record| PlayerRecord {
            mvp_score: basic_score(record),
            ..record.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::PlayerRecord;

    fn jokic() -> PlayerRecord {
        PlayerRecord {
            name: "Nikola Jokic".to_string(),
            team: "DEN".to_string(),
            points: 26.4,
            assists: 9.0,
            rebounds: 12.4,
            steals: 1.4,
            blocks: 0.9,
            mvp_score: 0.0,
        }
    }

    #[test]
    fn weights_sum_as_expected() {
        // 26.4*0.4 + 9.0*0.2 + 12.4*0.2 + 1.4*0.1 + 0.9*0.1 = 15.07
        let score = basic_score(&jokic());
        assert!((score - 15.07).abs() < 1e-9);
    }

    #[test]
    fn rescore_replaces_only_the_score() {
        let original = vec![jokic()];
        let rescored = rescore(&original);
        assert_eq!(rescored.len(), 1);
        assert!((rescored[0].mvp_score - 15.07).abs() < 1e-9);
        assert_eq!(rescored[0].name, original[0].name);
        assert!((rescored[0].points - original[0].points).abs() < f64::EPSILON);
        // Input untouched.
        assert_eq!(original[0].mvp_score, 0.0);
    }

    #[test]
    fn zero_stats_score_zero() {
        let mut record = jokic();
        record.points = 0.0;
        record.assists = 0.0;
        record.rebounds = 0.0;
        record.steals = 0.0;
        record.blocks = 0.0;
        assert_eq!(basic_score(&record), 0.0);
    }
}
