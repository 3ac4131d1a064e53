//! CLI argument definitions for tickerdeck.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `view` | Full dashboard view for one symbol |
//! | `chart` | Timeframe-reduced chart series |
//! | `search` | Symbol suggestions for a free-form query |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `json` | Output format (json, table) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--base-url` | env/`http://localhost:8000` | Backend base address |
//! | `--timeout-ms` | `3000` | Per-request timeout in ms |
//! | `--verbose` | `false` | Debug-level tracing to stderr |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tickerdeck - stock dashboard data CLI
///
/// Aggregates stock prices, fundamentals, AI recommendations, and news from
/// the analysis backend into a single renderable view.
#[derive(Debug, Parser)]
#[command(
    name = "tickerdeck",
    author,
    version,
    about = "Stock dashboard data CLI",
    long_about = "Tickerdeck fetches stock prices, fundamentals, AI buy/sell recommendations, \
and news headlines from the analysis backend and composes them into one view.\n\
\n\
The backend address defaults to http://localhost:8000 and can be overridden \
with --base-url or the TICKERDECK_API_URL environment variable.\n\
\n\
Use 'tickerdeck <command> --help' for command-specific help."
)]
pub struct Cli {
    /// Output format for results.
    ///
    /// - json: Single JSON object (default)
    /// - table: Plain text lines for terminal display
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Backend base address, overriding TICKERDECK_API_URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Per-request timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 3000)]
    pub timeout_ms: u64,

    /// Emit debug-level tracing to stderr.
    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Single JSON object output.
    Json,
    /// Plain text lines for terminal display.
    Table,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full dashboard view for one symbol.
    ///
    /// Fetches stock data, prediction, and news in parallel, then renders
    /// company, latest price, fundamentals, rating, recommendation, and
    /// headlines. Exit code 3 when the view carries an error state.
    ///
    /// # Examples
    ///
    ///   tickerdeck view RELIANCE.BSE
    ///   tickerdeck view INFY --timeframe 30D --pretty
    View(ViewArgs),

    /// Timeframe-reduced chart series for one symbol.
    ///
    /// Outputs daily OHLCV bars in chronological order, filtered to the
    /// requested lookback window.
    ///
    /// # Examples
    ///
    ///   tickerdeck chart RELIANCE.BSE
    ///   tickerdeck chart TCS --timeframe 6M
    Chart(ChartArgs),

    /// Search for symbols by ticker or company name.
    ///
    /// # Examples
    ///
    ///   tickerdeck search tata
    ///   tickerdeck search "reliance" --limit 5
    Search(SearchArgs),
}

/// Arguments for the `view` command.
#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Market symbol, optionally exchange-qualified (e.g. RELIANCE.BSE).
    pub symbol: String,

    /// Chart timeframe label.
    ///
    /// One of 1D, 7D, 15D, 30D, 6M, 1Y, 5Y. Unrecognized labels fall back
    /// to 1Y.
    #[arg(long, default_value = "1Y")]
    pub timeframe: String,
}

/// Arguments for the `chart` command.
#[derive(Debug, Args)]
pub struct ChartArgs {
    /// Market symbol to chart.
    pub symbol: String,

    /// Chart timeframe label (see `view --help`).
    #[arg(long, default_value = "1Y")]
    pub timeframe: String,
}

/// Arguments for the `search` command.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Free-form search query (symbol or company name), at least one character.
    pub query: String,

    /// Maximum number of suggestions to display.
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}
