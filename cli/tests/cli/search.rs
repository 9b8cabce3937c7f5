use crate::fixtures::{load_sample, matrix_file, parse_args};
use citypath::{CityPathApp, create_search_request, execute_search};
use citypath_core::{Algorithm, PathOutcome};

#[test]
fn test_request_resolves_accented_names() {
    let file = matrix_file();
    let graph = load_sample(&file);
    let args = parse_args(&file, &["adana", "izmir"]);

    let request = create_search_request(&args, &graph).unwrap();

    assert_eq!(request.from_name, "Adana");
    assert_eq!(request.to_name, "İzmir");
    assert_eq!(request.algorithms, vec![Algorithm::Dijkstra]);
    assert!(!request.is_comparison());
}

#[test]
fn test_request_rejects_unknown_city() {
    let file = matrix_file();
    let graph = load_sample(&file);
    let args = parse_args(&file, &["Adana", "Atlantis"]);

    let error = create_search_request(&args, &graph).err().unwrap();
    assert!(error.contains("Atlantis"));
}

#[test]
fn test_execute_all_algorithms_agree_on_sample() {
    let file = matrix_file();
    let graph = load_sample(&file);
    let args = parse_args(&file, &["Adana", "İzmir", "-a", "all"]);

    let request = create_search_request(&args, &graph).unwrap();
    assert!(request.is_comparison());

    let runs = execute_search(&request, &graph);
    assert_eq!(runs.len(), 3);
    for run in &runs {
        assert_eq!(run.result.outcome(), PathOutcome::Found);
        assert_eq!(run.result.path(), ["Adana", "Ankara", "İzmir"]);
        assert_eq!(run.result.total_weight(), 1070);
    }
}

#[test]
fn test_execute_same_city_is_trivial() {
    let file = matrix_file();
    let graph = load_sample(&file);
    let args = parse_args(&file, &["Bursa", "bursa", "-a", "dfs"]);

    let request = create_search_request(&args, &graph).unwrap();
    let runs = execute_search(&request, &graph);

    assert_eq!(runs[0].algorithm, Algorithm::Dfs);
    assert_eq!(runs[0].result.outcome(), PathOutcome::Trivial);
    assert_eq!(runs[0].result.path(), ["Bursa"]);
}

#[test]
fn test_app_rejects_missing_matrix() {
    let file = matrix_file();
    let mut args = parse_args(&file, &["Adana", "Bursa"]);
    args.matrix = file.path().with_extension("missing");

    assert!(CityPathApp::new(args).is_err());
}

#[test]
fn test_app_loads_matrix() {
    let file = matrix_file();
    let args = parse_args(&file, &["Adana", "Bursa"]);

    let app = CityPathApp::new(args).unwrap();
    assert_eq!(app.graph.location_count(), 4);
}
