// Snapshot exporters: CSV and JSON renditions of a view list.
//
// Both functions return the serialized text; writing it anywhere is the
// caller's job. Ranks are assigned 1-based in input order, so the caller
// controls ranking by controlling the order (normally the pipeline output).

use crate::player::PlayerRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV writer flush failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// CSV export
// ---------------------------------------------------------------------------

const CSV_HEADER: [&str; 9] = [
    "Rank", "Player", "Team", "Points", "Assists", "Rebounds", "Steals", "Blocks", "MVP_Score",
];

/// Serialize records to CSV text, one row per record in input order.
///
/// Numbers are formatted with at most two fractional digits, trailing zeros
/// trimmed (`45.0` prints as `45`, `45.50` as `45.5`). Fields containing
/// commas or quotes are quoted by the csv writer.
pub fn to_csv(records: &[PlayerRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for (i, p) in records.iter().enumerate() {
        writer.write_record([
            (i + 1).to_string(),
            p.name.clone(),
            p.team.clone(),
            format_stat(p.points),
            format_stat(p.assists),
            format_stat(p.rebounds),
            format_stat(p.steals),
            format_stat(p.blocks),
            format_stat(p.mvp_score),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Format a stat with up to two fractional digits, trimming trailing zeros.
fn format_stat(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

// ---------------------------------------------------------------------------
// JSON export
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct JsonDocument {
    mvp_analysis: MvpAnalysis,
}

#[derive(Debug, Serialize)]
struct MvpAnalysis {
    export_date: String,
    total_players: usize,
    players: Vec<JsonPlayer>,
}

#[derive(Debug, Serialize)]
struct JsonPlayer {
    rank: usize,
    player: String,
    team: String,
    points: f64,
    assists: f64,
    rebounds: f64,
    steals: f64,
    blocks: f64,
    mvp_score: f64,
}

/// Serialize records to a pretty-printed JSON document.
///
/// Numeric fields are rounded to two decimal places and emitted as JSON
/// numbers; text fields are escaped by serde_json.
pub fn to_json(records: &[PlayerRecord], exported_at: DateTime<Utc>) -> Result<String, ExportError> {
    let players = records
        .iter()
        .enumerate()
        .map(|(i, p)| JsonPlayer {
            rank: i + 1,
            player: p.name.clone(),
            team: p.team.clone(),
            points: round2(p.points),
            assists: round2(p.assists),
            rebounds: round2(p.rebounds),
            steals: round2(p.steals),
            blocks: round2(p.blocks),
            mvp_score: round2(p.mvp_score),
        })
        .collect();

    let document = JsonDocument {
        mvp_analysis: MvpAnalysis {
            export_date: exported_at.to_rfc3339(),
            total_players: records.len(),
            players,
        },
    };

    Ok(serde_json::to_string_pretty(&document)?)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
