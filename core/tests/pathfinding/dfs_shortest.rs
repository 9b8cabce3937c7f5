use super::fixtures::{triangle_graph, two_route_graph};
use citypath_core::{ExhaustiveSearch, Graph, PathOutcome, SearchConfig};

#[test]
fn test_exhaustive_finds_cheapest_route() {
    let graph = triangle_graph();
    let result = ExhaustiveSearch::new(&graph).find_shortest_path("A", "C");

    assert_eq!(result.path(), ["A", "B", "C"]);
    assert_eq!(result.total_weight(), 10);
    assert_eq!(result.outcome(), PathOutcome::Found);
}

#[test]
fn test_exhaustive_ignores_neighbor_order() {
    for cheap_branch_first in [true, false] {
        let graph = two_route_graph(cheap_branch_first);
        let result = ExhaustiveSearch::new(&graph).find_shortest_path("A", "C");

        assert_eq!(result.path(), ["A", "B", "C"]);
        assert_eq!(result.total_weight(), 4);
    }
}

#[test]
fn test_exhaustive_branches_keep_separate_visited_sets() {
    // Both routes to E pass through C. If one branch marked C as visited for
    // its sibling, the cheaper route through B would be lost.
    let mut graph = Graph::new();
    let a = graph.add_location("A");
    let b = graph.add_location("B");
    let c = graph.add_location("C");
    let d = graph.add_location("D");
    let e = graph.add_location("E");

    graph.add_edge(a, b, 1);
    graph.add_edge(a, d, 1);
    graph.add_edge(b, c, 1);
    graph.add_edge(d, c, 30);
    graph.add_edge(c, e, 1);

    let result = ExhaustiveSearch::new(&graph).find_shortest_path("A", "E");

    assert_eq!(result.path(), ["A", "B", "C", "E"]);
    assert_eq!(result.total_weight(), 3);
}

#[test]
fn test_exhaustive_handles_cycles() {
    let mut graph = Graph::new();
    let a = graph.add_location("A");
    let b = graph.add_location("B");
    let c = graph.add_location("C");

    graph.add_edge(a, b, 1);
    graph.add_edge(b, a, 1);
    graph.add_edge(b, c, 4);
    graph.add_edge(c, b, 4);

    let result = ExhaustiveSearch::new(&graph).find_shortest_path("A", "C");

    assert_eq!(result.path(), ["A", "B", "C"]);
    assert_eq!(result.total_weight(), 5);
}

#[test]
fn test_exhaustive_boundaries() {
    let graph = triangle_graph();
    let search = ExhaustiveSearch::new(&graph);

    let trivial = search.find_shortest_path("C", "C");
    assert_eq!(trivial.path(), ["C"]);
    assert_eq!(trivial.total_weight(), 0);

    let unknown = search.find_shortest_path("A", "Nowhere");
    assert!(unknown.is_no_path());
    assert_eq!(unknown.total_weight(), 0);

    let disconnected = search.find_shortest_path("A", "D");
    assert!(disconnected.is_no_path());
    assert_eq!(disconnected.outcome(), PathOutcome::NoPath);
}

#[test]
fn test_exhaustive_budget_keeps_best_so_far() {
    let graph = triangle_graph();
    let search = ExhaustiveSearch::with_config(&graph, SearchConfig::new(Some(1), None));

    // Expanding A pushes B then C; C is popped first and completes a route,
    // then expanding B needs a second expansion and hits the cap.
    let result = search.find_shortest_path("A", "C");

    assert_eq!(result.outcome(), PathOutcome::Aborted);
    assert_eq!(result.path(), ["A", "C"]);
    assert_eq!(result.total_weight(), 20);
}

#[test]
fn test_exhaustive_prunes_branches_no_cheaper_than_best() {
    // Complete graph of 12 cities, every road 10 km except a 1 km direct road
    // from the first to the last city, which is also the last one pushed and
    // so the first route completed. Every other branch is already at 10 km and
    // must stop there; exploring them all would need millions of expansions.
    let mut graph = Graph::new();
    let cities: Vec<usize> = (0..12)
        .map(|i| graph.add_location(format!("City{:02}", i)))
        .collect();
    for &from in &cities {
        for &to in &cities {
            if from != to {
                let weight = if (from, to) == (cities[0], cities[11]) { 1 } else { 10 };
                graph.add_edge(from, to, weight);
            }
        }
    }

    let config = SearchConfig::new(Some(50), None);
    let result =
        ExhaustiveSearch::with_config(&graph, config).find_shortest_path("City00", "City11");

    assert_eq!(result.outcome(), PathOutcome::Found);
    assert_eq!(result.path(), ["City00", "City11"]);
    assert_eq!(result.total_weight(), 1);
}

#[test]
fn test_exhaustive_keeps_first_of_equal_routes() {
    // A -> B -> D and A -> C -> D both cost 4; C is pushed last and wins,
    // the later equal route through B must not replace it
    let mut graph = Graph::new();
    let a = graph.add_location("A");
    let b = graph.add_location("B");
    let c = graph.add_location("C");
    let d = graph.add_location("D");

    graph.add_edge(a, b, 2);
    graph.add_edge(a, c, 2);
    graph.add_edge(b, d, 2);
    graph.add_edge(c, d, 2);

    let result = ExhaustiveSearch::new(&graph).find_shortest_path("A", "D");
    assert_eq!(result.path(), ["A", "C", "D"]);
    assert_eq!(result.total_weight(), 4);
}
