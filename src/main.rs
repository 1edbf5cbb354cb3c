use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};

use u_timetable::models::{read_batch, SectionConfig};
use u_timetable::render::render_text;
use u_timetable::scheduler::{Scheduler, SectionSummary};
use u_timetable::validation::validate_batch;

#[derive(Parser)]
#[command(name = "u-timetable", version, about = "Generate academic timetables for a batch of sections")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate timetables and write them as JSON
    Generate {
        /// JSON file holding an array of section configurations
        input: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Generate timetables and print them as text tables
    Render {
        /// JSON file holding an array of section configurations
        input: PathBuf,
    },
    /// Check section configurations without generating
    Validate {
        /// JSON file holding an array of section configurations
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Command::Generate {
            input,
            output,
            pretty,
        } => {
            let configs = load_batch(&input)?;
            let results = Scheduler::new().generate_batch(&configs)?;
            let json = if pretty {
                serde_json::to_string_pretty(&results)?
            } else {
                serde_json::to_string(&results)?
            };
            match output {
                Some(path) => fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?,
                None => println!("{json}"),
            }
        }
        Command::Render { input } => {
            let configs = load_batch(&input)?;
            let scheduler = Scheduler::new();
            let results = scheduler.generate_batch(&configs)?;
            for result in &results {
                println!("{}", render_text(result));
                let summary = SectionSummary::calculate(result, scheduler.config());
                println!(
                    "Filled {}/{} cells, {} lab block(s), {} forced conflict(s)",
                    summary.filled_cells, summary.total_cells, summary.lab_blocks, summary.conflicts
                );
                for (faculty, periods) in &summary.periods_by_faculty {
                    println!("  {faculty}: {periods} period(s)");
                }
                println!();
            }
        }
        Command::Validate { input } => {
            let configs = load_batch(&input)?;
            if let Err(failures) = validate_batch(&configs) {
                for (section, errors) in &failures {
                    let label = configs[*section].occupant_label();
                    for e in errors {
                        eprintln!("section {section} ({label}): {e}");
                    }
                }
                bail!("{} invalid section(s)", failures.len());
            }
            println!("{} section(s) valid", configs.len());
        }
    }

    Ok(())
}

fn load_batch(path: &Path) -> Result<Vec<SectionConfig>> {
    read_batch(path).with_context(|| format!("failed to load {}", path.display()))
}
