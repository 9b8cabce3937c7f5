pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod json_output;
pub mod logging;
pub mod report;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use app::CityPathApp;
pub use args::{AlgorithmChoice, Args};
pub use colors::ColorScheme;
pub use search::{SearchRequest, create_search_request, execute_search};
pub use utils::format_number;
