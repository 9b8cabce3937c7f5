use citypath::{AlgorithmChoice, Args};
use citypath_core::Algorithm;
use clap::Parser;
use std::time::Duration;

#[test]
fn test_defaults_to_dijkstra() {
    let args = Args::try_parse_from(["citypath", "cities.csv", "Adana", "Bursa"]).unwrap();

    assert_eq!(args.algorithm, AlgorithmChoice::Single(Algorithm::Dijkstra));
    assert_eq!(args.from.as_deref(), Some("Adana"));
    assert_eq!(args.to.as_deref(), Some("Bursa"));
    assert_eq!(args.seed, 42);
    assert!(args.search_config().is_unlimited());
}

#[test]
fn test_algorithm_flag_accepts_all_and_aliases() {
    let all = Args::try_parse_from(["citypath", "m.csv", "A", "B", "-a", "all"]).unwrap();
    assert_eq!(all.algorithm, AlgorithmChoice::All);
    assert_eq!(all.algorithm.algorithms(), Algorithm::ALL.to_vec());

    let exhaustive =
        Args::try_parse_from(["citypath", "m.csv", "A", "B", "--algorithm", "DFS_SHORTEST"])
            .unwrap();
    assert_eq!(exhaustive.algorithm, AlgorithmChoice::Single(Algorithm::DfsShortest));
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let result = Args::try_parse_from(["citypath", "m.csv", "A", "B", "-a", "bfs"]);
    assert!(result.is_err());
}

#[test]
fn test_endpoints_required_for_search() {
    assert!(Args::try_parse_from(["citypath", "m.csv", "A"]).is_err());
    assert!(Args::try_parse_from(["citypath", "m.csv", "--list"]).is_ok());
    assert!(Args::try_parse_from(["citypath", "m.csv", "--benchmark", "5"]).is_ok());
}

#[test]
fn test_quiet_conflicts_with_verbose() {
    let result = Args::try_parse_from(["citypath", "m.csv", "A", "B", "-q", "-v"]);
    assert!(result.is_err());
}

#[test]
fn test_search_config_from_limits() {
    let args = Args::try_parse_from([
        "citypath",
        "m.csv",
        "A",
        "B",
        "--max-expansions",
        "500",
        "--time-limit-ms",
        "250",
    ])
    .unwrap();

    let config = args.search_config();
    assert_eq!(config.max_expansions, Some(500));
    assert_eq!(config.time_limit, Some(Duration::from_millis(250)));
}

#[test]
fn test_algorithm_choice_display_round_trips() {
    for choice in [
        AlgorithmChoice::All,
        AlgorithmChoice::Single(Algorithm::Dfs),
        AlgorithmChoice::Single(Algorithm::DfsShortest),
    ] {
        assert_eq!(choice.to_string().parse::<AlgorithmChoice>(), Ok(choice));
    }
}
