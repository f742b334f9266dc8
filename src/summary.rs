// Summary statistics over a record list (the status-bar numbers).

use crate::player::PlayerRecord;

/// Aggregate view of a record list.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    /// Arithmetic mean of `mvp_score`; 0.0 for an empty list.
    pub average_score: f64,
    /// First record of the given list. The caller is expected to have sorted
    /// by score descending when "top" should mean the leader.
    pub top: Option<PlayerRecord>,
}

/// Pure computation over the input list; no error conditions.
pub fn summarize(records: &[PlayerRecord]) -> Summary {
    let count = records.len();
    let average_score = if count == 0 {
        0.0
    } else {
        records.iter().map(|p| p.mvp_score).sum::<f64>() / count as f64
    };
    Summary {
        count,
        average_score,
        top: records.first().cloned(),
    }
}
