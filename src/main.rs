use clap::Parser;
use colored::Colorize;
use log::info;

use tfm_convert::cli::Cli;
use tfm_convert::rewriter;

fn main() {
    env_logger::Builder::from_default_env().init();

    let cli = Cli::parse();
    info!("Starting tfm-convert");

    println!("{}", "Starting version updates...".dimmed());
    println!();
    println!("Updating versions for:");
    for path in &cli.paths {
        println!("  {}", path.display());
    }
    println!();

    // Unlike the original converter this exits non-zero on failure, see
    // README.md.
    if let Err(e) = rewriter::run(&cli.paths) {
        eprintln!("{} {:#}", "Error:".red(), e);
        std::process::exit(1);
    }

    println!("{}", "✓ All project files updated".green());
}
