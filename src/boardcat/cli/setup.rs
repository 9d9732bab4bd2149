use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for checkout builds.
/// Format: "0.3.2" or "0.3.2@abc1234"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("BOARDCAT_GIT_HASH");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "boardcat", bin_name = "boardcat", version = get_version())]
#[command(about = "Faceted search over a board and shield catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file (defaults to the configured one)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub catalog: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Filter the catalog and print the matching cards
    #[command(alias = "f")]
    Filter(FilterArgs),

    /// Show the choices each facet offers
    #[command(alias = "o")]
    Options {
        /// URL fragment to start from (e.g. "#soc=nrf52840")
        fragment: Option<String>,

        /// Only offer series/SoCs under these families
        #[arg(long, value_delimiter = ',')]
        family: Vec<String>,

        /// Only offer SoCs under these series
        #[arg(long, value_delimiter = ',')]
        series: Vec<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Suggest hardware feature tags
    Tags {
        /// Part of the tag name (case-insensitive)
        query: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (catalog, show-hidden)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// URL fragment to start from (e.g. "#vendor=nordic&features=gpio")
    pub fragment: Option<String>,

    /// Part of the card name (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Architecture
    #[arg(long)]
    pub arch: Option<String>,

    /// Vendor
    #[arg(long)]
    pub vendor: Option<String>,

    /// SoC families (narrow the series/SoC choices)
    #[arg(long, value_delimiter = ',')]
    pub family: Vec<String>,

    /// SoC series (narrow the SoC choices)
    #[arg(long, value_delimiter = ',')]
    pub series: Vec<String>,

    /// SoCs; a card matches if it has any of them
    #[arg(long, value_delimiter = ',')]
    pub soc: Vec<String>,

    /// Hardware feature tags; a card matches if it has all of them
    #[arg(long = "feature", value_delimiter = ',')]
    pub features: Vec<String>,

    /// Compatible pattern, `*` matches anything (repeatable)
    #[arg(long = "compatible")]
    pub compatibles: Vec<String>,

    /// Hide boards
    #[arg(long)]
    pub hide_boards: bool,

    /// Hide shields
    #[arg(long)]
    pub hide_shields: bool,

    /// Also list hidden cards
    #[arg(short, long)]
    pub all: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
