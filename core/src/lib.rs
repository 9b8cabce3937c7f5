pub mod algorithm;
pub mod benchmark;
pub mod graph;
pub mod parsing;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod string_normalization;

// Re-export commonly used items
pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use benchmark::{BenchmarkReport, Comparison, compare, run_benchmark, select_pairs};
pub use graph::{Distance, Edge, Graph, NO_CONNECTION, Weight};
pub use parsing::{MatrixError, find_location, load_matrix, parse_matrix};
pub use pathfinding::{
    ExhaustiveSearch, PathOutcome, PathResult, PathSearch, ShortestPathSearch, UnguidedSearch,
};
pub use pathfinding_config::SearchConfig;
