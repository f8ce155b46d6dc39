use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use devenv::{logging, RunConfig, SystemRunner};

#[derive(Parser)]
#[command(
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Bootstrap a Django development environment with Docker, a dev container and CI",
    long_about = None
)]
struct Cli {
    /// Name of the Django project (directory, and postgres database name)
    project_name: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{} {err:#}", "✗".red().bold());
        std::process::exit(devenv::error::exit_code(&err));
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init()?;

    let config = RunConfig::from_env(cli.project_name)?;
    tracing::debug!(?config, "starting bootstrap");

    let summary = devenv::execute(&config, &SystemRunner)?;
    println!("\n🚀 Next: cd {}", summary.project_root.display());

    Ok(())
}
