// Core data model: one player's season line plus the precomputed MVP score.

/// A single row of input data. Immutable after load; every consumer works on
/// clones or read-only slices, never mutating records in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub points: f64,
    pub assists: f64,
    pub rebounds: f64,
    pub steals: f64,
    pub blocks: f64,
    /// Composite ranking statistic. Treated as opaque by the pipeline;
    /// `score::basic_score` can re-derive it from the counting stats.
    pub mvp_score: f64,
}
