use std::error::Error;

use citypath_core::{Graph, load_matrix, run_benchmark, select_pairs};

use crate::args::Args;
use crate::colors::ColorScheme;
use crate::display;
use crate::json_output::{create_benchmark_json, create_json_output, print_json_output};
use crate::report::display_benchmark;
use crate::search::{create_search_request, execute_search};

pub struct CityPathApp {
    pub graph: Graph,
    pub args: Args,
}

impl CityPathApp {
    pub fn new(args: Args) -> Result<Self, Box<dyn Error>> {
        if !args.matrix.exists() {
            return Err(format!("Matrix file does not exist: {:?}", args.matrix).into());
        }

        let graph = load_matrix(&args.matrix)?;
        if graph.is_empty() {
            return Err(format!("Matrix file {:?} contains no cities", args.matrix).into());
        }

        Ok(Self { graph, args })
    }

    pub fn run(&self, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
        if self.args.list {
            display::display_locations(&self.graph, colors);
            return Ok(());
        }

        if let Some(pair_count) = self.args.benchmark {
            return self.run_benchmark(pair_count, colors);
        }

        self.run_search(colors)
    }

    fn run_search(&self, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
        let request = create_search_request(&self.args, &self.graph)?;

        if self.args.verbose && !self.args.json {
            display::display_search_info(&request, &self.graph, colors);
        }

        let runs = execute_search(&request, &self.graph);

        if self.args.json {
            print_json_output(&create_json_output(&request, &runs, &self.graph))?;
        } else {
            display::display_search_results(&request, &runs, &self.graph, &self.args, colors);
        }
        Ok(())
    }

    fn run_benchmark(&self, pair_count: usize, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
        let pairs = select_pairs(&self.graph, pair_count, self.args.seed);
        if pairs.is_empty() {
            return Err("No unconnected city pairs available for a benchmark".into());
        }

        tracing::debug!(
            requested = pair_count,
            selected = pairs.len(),
            seed = self.args.seed,
            "running benchmark"
        );
        let report = run_benchmark(&self.graph, &pairs, self.args.search_config());

        if self.args.json {
            print_json_output(&create_benchmark_json(&report, self.args.seed))?;
        } else {
            display_benchmark(&report, colors);
        }
        Ok(())
    }
}
