// Filter-sort pipeline: recomputes the visible view from the canonical list.
//
// Every interaction (search edit, team change, sort change, direction
// toggle) re-runs `apply` against the full store, never against a previously
// filtered list, so filters compose statelessly.

use crate::player::PlayerRecord;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// View state
// ---------------------------------------------------------------------------

/// Team selection: either every team, or one exact team code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TeamFilter {
    #[default]
    All,
    Team(String),
}

/// The seven sortable fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    MvpScore,
    Points,
    Assists,
    Rebounds,
    Steals,
    Blocks,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 7] = [
        SortKey::MvpScore,
        SortKey::Points,
        SortKey::Assists,
        SortKey::Rebounds,
        SortKey::Steals,
        SortKey::Blocks,
        SortKey::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::MvpScore => "mvp-score",
            SortKey::Points => "points",
            SortKey::Assists => "assists",
            SortKey::Rebounds => "rebounds",
            SortKey::Steals => "steals",
            SortKey::Blocks => "blocks",
            SortKey::Name => "name",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mvp-score" | "mvp_score" | "score" => Ok(SortKey::MvpScore),
            "points" | "pts" => Ok(SortKey::Points),
            "assists" | "ast" => Ok(SortKey::Assists),
            "rebounds" | "trb" => Ok(SortKey::Rebounds),
            "steals" | "stl" => Ok(SortKey::Steals),
            "blocks" | "blk" => Ok(SortKey::Blocks),
            "name" | "player" => Ok(SortKey::Name),
            other => Err(format!(
                "unknown sort key '{other}' (expected one of: mvp-score, points, \
                 assists, rebounds, steals, blocks, name)"
            )),
        }
    }
}

/// Transient, UI-held view parameters. Not persisted; `Default` is the reset
/// state: no search, all teams, MVP score descending (the original viewer's
/// defaults).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    /// Case-insensitive substring match against the player name.
    pub search: String,
    pub team: TeamFilter,
    pub sort_key: SortKey,
    pub ascending: bool,
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Produce the ordered view list for the given view state.
///
/// Fixed order: name filter, team filter, then a stable sort by the selected
/// key. Ties keep the relative order the records had after filtering, in both
/// directions. The input is never mutated; empty input or no matches yields
/// an empty output, not a failure.
pub fn apply(records: &[PlayerRecord], view: &ViewState) -> Vec<PlayerRecord> {
    let needle = view.search.trim().to_lowercase();

    let mut filtered: Vec<PlayerRecord> = records
        .iter()
        .filter(|p| needle.is_empty() || p.name.to_lowercase().contains(&needle))
        .filter(|p| match &view.team {
            TeamFilter::All => true,
            TeamFilter::Team(team) => p.team == *team,
        })
        .cloned()
        .collect();

    // sort_by is stable; applying the direction inside the comparator (rather
    // than reversing the sorted list) keeps ties in filter order either way.
    filtered.sort_by(|a, b| {
        let ordering = compare_by_key(a, b, view.sort_key);
        if view.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    filtered
}

fn compare_by_key(a: &PlayerRecord, b: &PlayerRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.cmp(&b.name),
        _ => {
            let (x, y) = match key {
                SortKey::MvpScore => (a.mvp_score, b.mvp_score),
                SortKey::Points => (a.points, b.points),
                SortKey::Assists => (a.assists, b.assists),
                SortKey::Rebounds => (a.rebounds, b.rebounds),
                SortKey::Steals => (a.steals, b.steals),
                SortKey::Blocks => (a.blocks, b.blocks),
                SortKey::Name => unreachable!(),
            };
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
