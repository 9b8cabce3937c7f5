use rustc_hash::FxHashMap;

/// Weight of a single directed connection.
pub type Weight = u32;

/// Accumulated weight along a path.
pub type Distance = u64;

/// Reserved weight meaning "not directly connected". Never stored as an edge.
pub const NO_CONNECTION: Weight = 99_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: Weight,
}

/// Directed, positively weighted network of named locations.
///
/// Locations get a stable index on insertion; every search works on those
/// indices and only converts back to names when building a result. Once
/// loaded the graph is only ever borrowed immutably, so queries may run on
/// several threads at once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    locations: Vec<String>,
    adjacency: Vec<Vec<Edge>>,
    location_index: FxHashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(location_count: usize) -> Self {
        Self {
            locations: Vec::with_capacity(location_count),
            adjacency: Vec::with_capacity(location_count),
            location_index: FxHashMap::with_capacity_and_hasher(location_count, Default::default()),
        }
    }

    /// Appends a location and returns its index.
    ///
    /// Names are unique: adding a name twice returns the index it already has.
    pub fn add_location(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        if let Some(&existing) = self.location_index.get(&name) {
            tracing::warn!(location = %name, index = existing, "location already present");
            return existing;
        }

        let index = self.locations.len();
        self.location_index.insert(name.clone(), index);
        self.locations.push(name);
        self.adjacency.push(Vec::new());
        index
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.location_index.get(name).copied()
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.locations.get(index).map(String::as_str)
    }

    /// Adds a directed edge and reports whether it was stored.
    ///
    /// The sentinel, zero weights, self-loops and unknown indices are ignored.
    /// A second edge for the same ordered pair overwrites the weight of the
    /// first one in place, keeping its position in the neighbor order.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) -> bool {
        if weight == NO_CONNECTION || weight == 0 || from == to {
            return false;
        }
        if to >= self.locations.len() {
            return false;
        }

        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };

        match edges.iter_mut().find(|edge| edge.to == to) {
            Some(existing) => existing.weight = weight,
            None => edges.push(Edge { to, weight }),
        }
        true
    }

    /// Outgoing edges of `index` in insertion order.
    pub fn neighbors(&self, index: usize) -> &[Edge] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the direct edge `from -> to`, or `None` when not connected.
    pub fn weight_between(&self, from: usize, to: usize) -> Option<Weight> {
        self.neighbors(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    pub fn are_adjacent(&self, from: usize, to: usize) -> bool {
        self.weight_between(from, to).is_some()
    }

    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }
}
