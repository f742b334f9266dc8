// mvpstat entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr)
// 2. Load config, merge CLI flags over it
// 3. Read and parse the input CSV, load the store
// 4. Run the filter-sort pipeline for the requested view
// 5. Print the ranked table and summary line
// 6. Write CSV/JSON exports if requested

use mvp_analyzer::config::{self, Config};
use mvp_analyzer::export;
use mvp_analyzer::parser;
use mvp_analyzer::pipeline::{self, SortKey, TeamFilter, ViewState};
use mvp_analyzer::player::PlayerRecord;
use mvp_analyzer::score;
use mvp_analyzer::store::PlayerStore;
use mvp_analyzer::summary;

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "mvpstat")]
#[command(about = "Load, filter, sort, and export NBA MVP candidate statistics")]
struct Cli {
    /// Input CSV file (default: from config, then mvp_candidates.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Keep only players whose name contains this text (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Keep only players on this exact team code
    #[arg(long)]
    team: Option<String>,

    /// Sort key: mvp-score, points, assists, rebounds, steals, blocks, name
    #[arg(long)]
    sort: Option<SortKey>,

    /// Sort ascending instead of descending
    #[arg(long)]
    ascending: bool,

    /// Number of rows to display
    #[arg(short, long)]
    top: Option<usize>,

    /// Recompute MVP scores from the counting stats instead of trusting
    /// the MVP_Score column
    #[arg(long)]
    rescore: bool,

    /// Write the current view as CSV to this path
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Write the current view as JSON to this path
    #[arg(long, value_name = "PATH")]
    export_json: Option<PathBuf>,

    /// Skip the table display; only run exports
    #[arg(long)]
    export_only: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = config::load_config().context("failed to load configuration")?;

    let input = cli
        .input
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.data.input));
    let raw = std::fs::read_to_string(&input)
        .with_context(|| format!("failed to read input file {}", input.display()))?;

    let outcome = parser::parse(&raw);
    info!(
        "parsed {} records from {} ({} rejected)",
        outcome.records.len(),
        input.display(),
        outcome.rejected.len()
    );
    if !outcome.rejected.is_empty() {
        warn!("{} rows were rejected during parsing", outcome.rejected.len());
    }

    let mut store = PlayerStore::new();
    let records = if cli.rescore {
        score::rescore(&outcome.records)
    } else {
        outcome.records
    };
    store.load(records);

    let view_state = view_state(&cli, &config);
    let view = pipeline::apply(store.all(), &view_state);

    if !cli.export_only {
        let top = cli.top.unwrap_or(config.display.top);
        print_table(&view, top);
        print_summary(&view);
        if !outcome.rejected.is_empty() {
            println!("({} malformed rows skipped; see log)", outcome.rejected.len());
        }
    }

    if let Some(path) = &cli.export_csv {
        let text = export::to_csv(&view).context("CSV export failed")?;
        std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("exported {} records to {}", view.len(), path.display());
        println!("Exported CSV to {}", path.display());
    }

    if let Some(path) = &cli.export_json {
        let text = export::to_json(&view, Utc::now()).context("JSON export failed")?;
        std::fs::write(path, text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("exported {} records to {}", view.len(), path.display());
        println!("Exported JSON to {}", path.display());
    }

    Ok(())
}

/// Assemble the view state: CLI flags win over config, config over defaults.
fn view_state(cli: &Cli, config: &Config) -> ViewState {
    ViewState {
        search: cli.search.clone().unwrap_or_default(),
        team: match &cli.team {
            Some(team) => TeamFilter::Team(team.clone()),
            None => TeamFilter::All,
        },
        sort_key: cli.sort.unwrap_or_else(|| config.sort_key()),
        ascending: cli.ascending || config.display.ascending,
    }
}

fn print_table(view: &[PlayerRecord], top: usize) {
    if view.is_empty() {
        println!("No players match the current filters.");
        return;
    }

    println!(
        "{:>4}  {:<25} {:<5} {:>6} {:>6} {:>6} {:>6} {:>6} {:>9}",
        "Rank", "Player", "Team", "PTS", "AST", "TRB", "STL", "BLK", "MVP Score"
    );
    for (i, p) in view.iter().take(top).enumerate() {
        println!(
            "{:>4}  {:<25} {:<5} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>9.2}",
            i + 1,
            p.name,
            p.team,
            p.points,
            p.assists,
            p.rebounds,
            p.steals,
            p.blocks,
            p.mvp_score
        );
    }
    if view.len() > top {
        println!("... and {} more", view.len() - top);
    }
}

fn print_summary(view: &[PlayerRecord]) {
    let summary = summary::summarize(view);
    match &summary.top {
        Some(top) => println!(
            "Loaded {} players | Avg MVP Score: {:.1} | Top: {} ({:.1})",
            summary.count, summary.average_score, top.name, top.mvp_score
        ),
        None => println!("No data loaded"),
    }
}

/// Initialize tracing to stderr so stdout stays clean for the table output.
fn init_tracing() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mvp_analyzer=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    // Ignore the error if a subscriber is already installed (tests).
    let _ = tracing::subscriber::set_global_default(subscriber);
}
