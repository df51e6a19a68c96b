use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use cpu_schedule::scheduler::RoundRobinMode;

#[derive(Parser)]
#[command(about = "Simulate CPU scheduling policies over a process list", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a scheduling simulation
    Run(RunArgs),
    /// Validate a process file and write it in canonical export form
    Export(ExportArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// JSON file holding the process list
    pub input: PathBuf,

    /// Policy: fcfs, sjf, priority, rr, ps
    #[arg(short, long, env = "CPU_SCHED_POLICY", default_value = "fcfs")]
    pub policy: String,

    /// Round-robin time quantum
    #[arg(short, long, env = "CPU_SCHED_QUANTUM")]
    pub quantum: Option<i64>,

    /// Round-robin arrival handling
    #[arg(long, value_enum, default_value_t = RrMode::Seeded)]
    pub rr_mode: RrMode,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args)]
pub struct ExportArgs {
    /// JSON file holding the process list
    pub input: PathBuf,

    /// Destination file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RrMode {
    Seeded,
    ArrivalOrdered,
}

impl From<RrMode> for RoundRobinMode {
    fn from(mode: RrMode) -> Self {
        match mode {
            RrMode::Seeded => RoundRobinMode::Seeded,
            RrMode::ArrivalOrdered => RoundRobinMode::ArrivalOrdered,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
