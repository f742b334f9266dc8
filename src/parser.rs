// CSV parsing for player statistics.
//
// Input format (positional, header names not validated):
//   Player, Team, PTS, AST, TRB, STL, BLK, MVP_Score
//
// Rows are parsed through the csv crate, so quoted fields with embedded
// commas are handled correctly. A row that cannot be parsed is dropped and
// reported, never inserted as a partial record.

use crate::player::PlayerRecord;
use std::fmt;
use tracing::warn;

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Result of parsing one CSV document: the records that parsed cleanly plus
/// every rejected row. Rejections are data, not errors; a load with rejected
/// rows still succeeds with whatever parsed.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<PlayerRecord>,
    pub rejected: Vec<RejectedRow>,
}

/// A row dropped during parsing, with enough context to report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based line number in the source text (0 when unknown).
    pub line: u64,
    /// The row text as read (fields rejoined after CSV unquoting).
    pub raw: String,
    pub reason: String,
}

impl fmt::Display for RejectedRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.raw, self.reason)
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Number of fields a row must have: name, team, and six numeric stats.
const MIN_FIELDS: usize = 8;

/// Parse newline-delimited CSV text into player records.
///
/// The first line is a header and is discarded unconditionally; its content
/// is not checked against the expected column names. Each remaining row needs
/// at least eight fields, mapped positionally. All six numeric fields must
/// parse as finite reals or the whole row is rejected and parsing moves on to
/// the next row. Performs no file access.
pub fn parse(raw: &str) -> ParseOutcome {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let mut outcome = ParseOutcome::default();

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map_or(0, |p| p.line());
                warn!("skipping unreadable row at line {}: {}", line, e);
                outcome.rejected.push(RejectedRow {
                    line,
                    raw: String::new(),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        let line = record.position().map_or(0, |p| p.line());
        match parse_record(&record) {
            Ok(player) => outcome.records.push(player),
            Err(reason) => {
                let raw = record.iter().collect::<Vec<_>>().join(",");
                warn!("skipping row at line {}: {}", line, reason);
                outcome.rejected.push(RejectedRow { line, raw, reason });
            }
        }
    }

    outcome
}

/// Map one CSV row onto a `PlayerRecord`, or explain why it cannot be.
fn parse_record(record: &csv::StringRecord) -> Result<PlayerRecord, String> {
    if record.len() < MIN_FIELDS {
        return Err(format!(
            "expected at least {MIN_FIELDS} fields, got {}",
            record.len()
        ));
    }

    let name = record[0].trim().to_string();
    if name.is_empty() {
        return Err("empty player name".to_string());
    }
    let team = record[1].trim().to_string();

    let stats = [
        ("PTS", &record[2]),
        ("AST", &record[3]),
        ("TRB", &record[4]),
        ("STL", &record[5]),
        ("BLK", &record[6]),
        ("MVP_Score", &record[7]),
    ];
    let mut values = [0.0f64; 6];
    for (slot, (column, field)) in values.iter_mut().zip(stats) {
        *slot = parse_stat(column, field)?;
    }
    let [points, assists, rebounds, steals, blocks, mvp_score] = values;

    Ok(PlayerRecord {
        name,
        team,
        points,
        assists,
        rebounds,
        steals,
        blocks,
        mvp_score,
    })
}

fn parse_stat(column: &str, field: &str) -> Result<f64, String> {
    let value: f64 = field
        .trim()
        .parse()
        .map_err(|_| format!("invalid {column} value '{}'", field.trim()))?;
    if !value.is_finite() {
        return Err(format!("non-finite {column} value '{}'", field.trim()));
    }
    Ok(value)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Player,Team,PTS,AST,TRB,STL,BLK,MVP_Score";

    #[test]
    fn parses_well_formed_rows() {
        let csv_data = format!(
            "{HEADER}\n\
             Nikola Jokic,DEN,26.4,9.0,12.4,1.4,0.9,58.9\n\
             Luka Doncic,DAL,33.9,9.8,9.2,1.4,0.5,60.1"
        );

        let outcome = parse(&csv_data);
        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.records.len(), 2);

        let jokic = &outcome.records[0];
        assert_eq!(jokic.name, "Nikola Jokic");
        assert_eq!(jokic.team, "DEN");
        assert!((jokic.points - 26.4).abs() < f64::EPSILON);
        assert!((jokic.assists - 9.0).abs() < f64::EPSILON);
        assert!((jokic.rebounds - 12.4).abs() < f64::EPSILON);
        assert!((jokic.steals - 1.4).abs() < f64::EPSILON);
        assert!((jokic.blocks - 0.9).abs() < f64::EPSILON);
        assert!((jokic.mvp_score - 58.9).abs() < f64::EPSILON);
    }

    #[test]
    fn header_content_is_not_validated() {
        let csv_data = "anything,at,all,in,the,first,line,here\n\
                        Alice,TeamA,30,5,10,2,1,45.0";

        let outcome = parse(csv_data);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "Alice");
    }

    #[test]
    fn malformed_numeric_field_rejects_row_and_parsing_continues() {
        let csv_data = format!(
            "{HEADER}\n\
             Alice,TeamA,30,5,10,2,1,45.0\n\
             Broken,TeamB,25,oops,6,1,2,42.0\n\
             Bob,TeamB,25,8,6,1,2,42.0"
        );

        let outcome = parse(&csv_data);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].name, "Alice");
        assert_eq!(outcome.records[1].name, "Bob");

        assert_eq!(outcome.rejected.len(), 1);
        let rejected = &outcome.rejected[0];
        assert_eq!(rejected.line, 3);
        assert!(rejected.raw.starts_with("Broken,TeamB"));
        assert!(rejected.reason.contains("AST"));
    }

    #[test]
    fn short_row_is_rejected() {
        let csv_data = format!(
            "{HEADER}\n\
             Alice,TeamA,30,5,10\n\
             Bob,TeamB,25,8,6,1,2,42.0"
        );

        let outcome = parse(&csv_data);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "Bob");
        assert_eq!(outcome.rejected.len(), 1);
        assert!(outcome.rejected[0].reason.contains("at least 8 fields"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let csv_data = format!(
            "{HEADER},Pos,G\n\
             Alice,TeamA,30,5,10,2,1,45.0,C,72"
        );

        let outcome = parse(&csv_data);
        assert_eq!(outcome.records.len(), 1);
        assert!((outcome.records[0].mvp_score - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let csv_data = format!(
            "{HEADER}\n\
             NaN Player,TeamA,30,5,10,2,1,NaN\n\
             Inf Player,TeamA,inf,5,10,2,1,45.0\n\
             Alice,TeamA,30,5,10,2,1,45.0"
        );

        let outcome = parse(&csv_data);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "Alice");
        assert_eq!(outcome.rejected.len(), 2);
        assert!(outcome.rejected[0].reason.contains("MVP_Score"));
        assert!(outcome.rejected[1].reason.contains("PTS"));
    }

    #[test]
    fn empty_name_is_rejected() {
        let csv_data = format!(
            "{HEADER}\n\
             ,TeamA,30,5,10,2,1,45.0"
        );

        let outcome = parse(&csv_data);
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.rejected.len(), 1);
        assert!(outcome.rejected[0].reason.contains("empty player name"));
    }

    #[test]
    fn quoted_name_with_comma_parses() {
        let csv_data = format!(
            "{HEADER}\n\
             \"Jr., Derrick\",CHA,12.5,2.0,4.1,0.7,0.4,16.6"
        );

        let outcome = parse(&csv_data);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.records[0].name, "Jr., Derrick");
    }

    #[test]
    fn names_and_teams_are_trimmed() {
        let csv_data = format!(
            "{HEADER}\n\
             \"  Alice  \", TeamA ,30,5,10,2,1,45.0"
        );

        let outcome = parse(&csv_data);
        assert_eq!(outcome.records[0].name, "Alice");
        assert_eq!(outcome.records[0].team, "TeamA");
    }

    #[test]
    fn header_only_input_yields_nothing() {
        let outcome = parse(HEADER);
        assert!(outcome.records.is_empty());
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn empty_input_yields_nothing() {
        let outcome = parse("");
        assert!(outcome.records.is_empty());
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn rejected_row_display_includes_line_and_reason() {
        let row = RejectedRow {
            line: 7,
            raw: "Bad,Row".to_string(),
            reason: "invalid PTS value 'x'".to_string(),
        };
        assert_eq!(row.to_string(), "line 7: Bad,Row (invalid PTS value 'x')");
    }
}
