use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tfm-convert")]
#[command(about = "Rewrites legacy target framework monikers in project.json files")]
pub struct Cli {
    /// project.json files to convert, processed in order
    #[arg(required = true, value_name = "FILE")]
    pub paths: Vec<PathBuf>,
}
