use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use prune_cli::commands::{failed_ops, group, independence, inspect, replica};
use prune_cli::config::{CausalConfig, GroupConfig, IndependenceConfig, ReplicaConfig};
use prune_cli::{report, telemetry};

#[derive(Parser)]
#[command(name = "prune")]
#[command(about = "Interleaving pruning passes for exhaustive protocol testing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ReportArgs {
    /// Print a summary table of the pass.
    #[arg(long)]
    summary: bool,

    /// Save pass statistics as JSON.
    #[arg(long)]
    report: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand sync-pair groups (events.dl + groups.dl -> GI.dl)
    Group {
        /// Directory holding the pass files.
        #[arg(long, short)]
        dir: Option<PathBuf>,

        /// Interleavings of 3-token events (overrides the `--dir` default)
        #[arg(long)]
        events: Option<PathBuf>,

        /// Declared groups, two events per line (overrides the `--dir` default)
        #[arg(long)]
        groups: Option<PathBuf>,

        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Stop expanding after this many interleavings
        #[arg(long)]
        max_interleavings: Option<usize>,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Remove orderings of independent events
    /// (interleavings.dl + independent_events.dl -> independent_interleavings.dl)
    Independence {
        #[arg(long, short)]
        dir: Option<PathBuf>,

        #[arg(long)]
        interleavings: Option<PathBuf>,

        #[arg(long)]
        independent_events: Option<PathBuf>,

        #[arg(long, short)]
        output: Option<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Keep only interleavings that break predecessor/successor order
    /// (interleavings.txt + predecessor_events.txt + successor_events.txt -> failed_ops.dl)
    FailedOps {
        #[arg(long, short)]
        dir: Option<PathBuf>,

        #[arg(long)]
        interleavings: Option<PathBuf>,

        #[arg(long)]
        predecessors: Option<PathBuf>,

        #[arg(long)]
        successors: Option<PathBuf>,

        #[arg(long, short)]
        output: Option<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Remove interleavings that repeat a replica's suffix (events.dl -> RI.dl)
    Replica {
        #[arg(long, short)]
        dir: Option<PathBuf>,

        #[arg(long)]
        events: Option<PathBuf>,

        /// Replica id. Read from stdin when omitted.
        #[arg(long, short)]
        replica: Option<i64>,

        #[arg(long, short)]
        output: Option<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },
    /// Show which pass files exist in a directory
    Inspect {
        #[arg(long, short)]
        dir: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    telemetry::init_logging();
    let cli = Cli::parse();

    let (stats, reporting) = match cli.command {
        Commands::Group {
            dir,
            events,
            groups,
            output,
            max_interleavings,
            report,
        } => {
            let mut cfg = GroupConfig::in_dir(&dir.unwrap_or_default());
            if let Some(p) = events {
                cfg.events = p;
            }
            if let Some(p) = groups {
                cfg.groups = p;
            }
            if let Some(p) = output {
                cfg.output = p;
            }
            if let Some(max) = max_interleavings {
                cfg.max_interleavings = max;
            }
            (group::run(&cfg)?, report)
        }
        Commands::Independence {
            dir,
            interleavings,
            independent_events,
            output,
            report,
        } => {
            let mut cfg = IndependenceConfig::in_dir(&dir.unwrap_or_default());
            if let Some(p) = interleavings {
                cfg.interleavings = p;
            }
            if let Some(p) = independent_events {
                cfg.independent_events = p;
            }
            if let Some(p) = output {
                cfg.output = p;
            }
            (independence::run(&cfg)?, report)
        }
        Commands::FailedOps {
            dir,
            interleavings,
            predecessors,
            successors,
            output,
            report,
        } => {
            let mut cfg = CausalConfig::in_dir(&dir.unwrap_or_default());
            if let Some(p) = interleavings {
                cfg.interleavings = p;
            }
            if let Some(p) = predecessors {
                cfg.predecessors = p;
            }
            if let Some(p) = successors {
                cfg.successors = p;
            }
            if let Some(p) = output {
                cfg.output = p;
            }
            (failed_ops::run(&cfg)?, report)
        }
        Commands::Replica {
            dir,
            events,
            replica: replica_id,
            output,
            report,
        } => {
            let mut cfg = ReplicaConfig::in_dir(&dir.unwrap_or_default());
            if let Some(p) = events {
                cfg.events = p;
            }
            if let Some(p) = output {
                cfg.output = p;
            }
            cfg.replica = replica_id;
            (replica::run(&cfg)?, report)
        }
        Commands::Inspect { dir } => return inspect::run(dir),
    };

    report::emit(&stats, reporting.summary, reporting.report.as_deref())
}
