mod cli;
mod logging;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cpu_schedule::export;
use cpu_schedule::scheduler::{Policy, RoundRobinMode, Simulator};

use crate::cli::{Cli, Commands, ExportArgs, OutputFormat, RunArgs};

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Export(args) => run_export(args),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let processes = export::read_file(&args.input)
        .with_context(|| format!("read process file {}", args.input.display()))?;

    let mut policy = Policy::from_selector(&args.policy, args.quantum)?;
    if let Policy::RoundRobin { quantum, .. } = policy {
        policy = Policy::round_robin_with_mode(quantum, RoundRobinMode::from(args.rr_mode))?;
    }
    tracing::info!("simulating {} processes with {}", processes.len(), policy);

    let report = Simulator::new(policy).run(&processes)?;

    match args.format {
        OutputFormat::Table => print!("{}", render::table(&report)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_export(args: ExportArgs) -> Result<()> {
    let processes = export::read_file(&args.input)
        .with_context(|| format!("read process file {}", args.input.display()))?;
    cpu_schedule::validation::ensure_valid(&processes)?;

    match args.output {
        Some(path) => {
            export::write_file(&path, &processes)
                .with_context(|| format!("write {}", path.display()))?;
            tracing::info!("exported {} processes to {}", processes.len(), path.display());
        }
        None => println!("{}", export::to_json(&processes)?),
    }
    Ok(())
}
