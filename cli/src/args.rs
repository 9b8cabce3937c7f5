use citypath_core::{Algorithm, SearchConfig};
use clap::Parser;
use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

/// Which strategies a query runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    Single(Algorithm),
    All,
}

impl AlgorithmChoice {
    pub fn algorithms(&self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Single(algorithm) => vec![*algorithm],
            AlgorithmChoice::All => Algorithm::ALL.to_vec(),
        }
    }
}

impl Default for AlgorithmChoice {
    fn default() -> Self {
        AlgorithmChoice::Single(Algorithm::default())
    }
}

impl FromStr for AlgorithmChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(AlgorithmChoice::All);
        }
        s.parse::<Algorithm>()
            .map(AlgorithmChoice::Single)
            .map_err(|e| e.to_string())
    }
}

impl fmt::Display for AlgorithmChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmChoice::Single(algorithm) => write!(f, "{}", algorithm),
            AlgorithmChoice::All => f.write_str("all"),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "citypath", version)]
#[command(about = "Find and compare routes between cities in a weighted adjacency matrix")]
pub struct Args {
    /// CSV adjacency matrix (header row of city names, 99999 = no connection)
    pub matrix: PathBuf,

    /// Starting city
    #[arg(required_unless_present_any = ["list", "benchmark"])]
    pub from: Option<String>,

    /// Destination city
    #[arg(required_unless_present_any = ["list", "benchmark"])]
    pub to: Option<String>,

    /// Search strategy: dfs, dfs-shortest, dijkstra or all
    #[arg(short, long, value_name = "ALGORITHM", default_value = "dijkstra")]
    pub algorithm: AlgorithmChoice,

    /// List the cities in the matrix and exit
    #[arg(short, long)]
    pub list: bool,

    /// Compare all strategies on this many random unconnected city pairs
    #[arg(short, long, value_name = "PAIRS")]
    pub benchmark: Option<usize>,

    /// Seed for benchmark pair selection
    #[arg(long, value_name = "SEED", default_value_t = 42)]
    pub seed: u64,

    /// Stop a search after this many expansions
    #[arg(long, value_name = "COUNT")]
    pub max_expansions: Option<u64>,

    /// Stop a search after this many milliseconds
    #[arg(long, value_name = "MS")]
    pub time_limit_ms: Option<u64>,

    /// Output results as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info, timings and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new(
            self.max_expansions,
            self.time_limit_ms.map(Duration::from_millis),
        )
    }
}
