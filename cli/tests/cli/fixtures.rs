use citypath::Args;
use citypath_core::{Graph, load_matrix};
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

pub const SAMPLE_MATRIX: &str = "\
City,Adana,Ankara,Bursa,İzmir
Adana,0,490,99999,99999
Ankara,490,0,385,580
Bursa,99999,385,0,330
İzmir,99999,580,330,0
";

pub fn matrix_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_MATRIX.as_bytes()).unwrap();
    file
}

pub fn load_sample(file: &NamedTempFile) -> Graph {
    load_matrix(file.path()).unwrap()
}

pub fn parse_args(file: &NamedTempFile, extra: &[&str]) -> Args {
    let mut argv = vec!["citypath".to_string(), file.path().display().to_string()];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    Args::try_parse_from(argv).unwrap()
}
