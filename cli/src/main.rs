use citypath::logging::init_logging;
use citypath::{Args, CityPathApp, ColorScheme};
use clap::Parser;
use colored::Colorize;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    let result = CityPathApp::new(args).and_then(|app| app.run(&colors));

    if let Err(error) = result {
        eprintln!("{} {}", "❌ Error:".red(), error);
        std::process::exit(1);
    }
}
