use crate::graph::{Graph, NO_CONNECTION, Weight};
use crate::string_normalization::clean_str;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    #[error("failed to read adjacency matrix: {0}")]
    Io(#[from] std::io::Error),
    #[error("header column {column} has an empty location name")]
    EmptyLocationName { column: usize },
    #[error("location '{name}' appears more than once in the header")]
    DuplicateLocation { name: String },
}

/// Loads a weighted adjacency matrix from a CSV file.
pub fn load_matrix(matrix_path: &Path) -> Result<Graph, MatrixError> {
    let file = File::open(matrix_path)?;
    let graph = parse_matrix(BufReader::new(file))?;

    tracing::info!(
        path = %matrix_path.display(),
        locations = graph.location_count(),
        edges = graph.edge_count(),
        "loaded adjacency matrix"
    );
    Ok(graph)
}

/// Parses a weighted adjacency matrix.
///
/// The header's first cell is ignored and the remaining cells name the
/// locations in column order. Each following row starts with the name of the
/// `from` location, then one weight per column. Reading stops at the first
/// blank line. Rows for unknown locations, cells that are not integers, the
/// no-connection sentinel, non-positive weights and the diagonal are skipped.
pub fn parse_matrix<R: BufRead>(reader: R) -> Result<Graph, MatrixError> {
    let mut lines = reader.lines();

    let header_line = match lines.next() {
        Some(line) => line?,
        None => return Ok(Graph::new()),
    };
    let location_names = parse_header(&header_line)?;

    let mut graph = Graph::with_capacity(location_names.len());
    for name in &location_names {
        graph.add_location(name.as_str());
    }

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        parse_row(&line, &mut graph, location_names.len());
    }

    Ok(graph)
}

fn parse_header(header_line: &str) -> Result<Vec<String>, MatrixError> {
    let header_line = header_line.trim_start_matches('\u{feff}');
    let mut location_names: Vec<String> = Vec::new();

    for (column, cell) in header_line.split(',').enumerate().skip(1) {
        let name = cell.trim();
        if name.is_empty() {
            return Err(MatrixError::EmptyLocationName { column });
        }
        if location_names.iter().any(|existing| existing == name) {
            return Err(MatrixError::DuplicateLocation {
                name: name.to_string(),
            });
        }
        location_names.push(name.to_string());
    }

    Ok(location_names)
}

fn parse_row(line: &str, graph: &mut Graph, column_count: usize) {
    let mut cells = line.split(',');
    let from_name = cells.next().unwrap_or_default().trim();

    let Some(from_index) = graph.index_of(from_name) else {
        tracing::debug!(location = from_name, "skipping row for unknown location");
        return;
    };

    for (to_index, cell) in cells.enumerate().take(column_count) {
        if let Some(weight) = parse_weight(cell) {
            if to_index != from_index {
                graph.add_edge(from_index, to_index, weight);
            }
        }
    }
}

fn parse_weight(cell: &str) -> Option<Weight> {
    let value: i64 = cell.trim().parse().ok()?;
    let weight = Weight::try_from(value).ok()?;
    (weight > 0 && weight != NO_CONNECTION).then_some(weight)
}

/// Resolves a user supplied name to a location index.
///
/// Exact names win; otherwise the query is compared against the locations
/// after accent folding, case folding and whitespace collapsing.
pub fn find_location(query: &str, graph: &Graph) -> Result<usize, String> {
    if let Some(index) = graph.index_of(query.trim()) {
        return Ok(index);
    }

    let clean_query = clean_str(query);
    if clean_query.is_empty() {
        return Err("Location name is empty".to_string());
    }

    graph
        .locations()
        .iter()
        .position(|name| clean_str(name) == clean_query)
        .ok_or_else(|| format!("Location '{}' not found in matrix", query))
}
