use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, warn};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use lrusim::common::types::PageId;
use lrusim::input::{read_session, TokenReader};
use lrusim::sim::config::{DEFAULT_MAX_FRAMES, DEFAULT_MAX_PAGES};
use lrusim::sim::report::{format_step, write_summary, write_trace};
use lrusim::{AccessOutcome, PageReplacementSimulator, SimulationReport, SimulatorConfig};

const HISTORY_FILE: &str = ".lrusim_history";

#[derive(Parser)]
#[command(author, version, about = "lrusim - LRU page replacement simulator")]
struct Cli {
    /// Longest reference string accepted
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_PAGES)]
    max_pages: usize,

    /// Largest number of frames accepted
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_FRAMES)]
    max_frames: usize,

    /// Print hit statistics after the fault total
    #[arg(long, global = true)]
    stats: bool,

    /// Print the report as JSON instead of the frame table
    #[arg(long, global = true)]
    json: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for the reference string and frame count on stdin
    Interactive,

    /// Simulate a reference string given on the command line
    Run {
        /// Number of frames
        #[arg(short, long)]
        frames: usize,

        /// Page reference string
        #[arg(required = true, allow_negative_numbers = true)]
        pages: Vec<PageId>,
    },

    /// Feed page accesses one line at a time to a live simulator
    Shell {
        /// Number of frames
        #[arg(short, long, default_value_t = 3)]
        frames: usize,
    },
}

impl Cli {
    fn config(&self) -> SimulatorConfig {
        SimulatorConfig {
            max_pages: self.max_pages,
            max_frames: self.max_frames,
        }
    }
}

/// Print a finished run in the format chosen on the command line
fn print_report<W: Write>(out: &mut W, report: &SimulationReport, stats: bool, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report).context("Failed to serialize report")?;
        writeln!(out)?;
        return Ok(());
    }

    write_trace(out, report)?;
    if stats {
        write_summary(out, report)?;
    }
    Ok(())
}

fn run_interactive(config: &SimulatorConfig, stats: bool, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = TokenReader::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    // Keep stdout pure JSON when a report is requested in that form
    let input = if json {
        read_session(&mut reader, &mut io::stderr(), config)
    } else {
        read_session(&mut reader, &mut out, config)
    }
    .context("Failed to read simulation input")?;
    debug!("Read {} page references, {} frames", input.reference.len(), input.frames);

    let mut sim = PageReplacementSimulator::with_config(input.frames, config)?;
    let report = sim.run(&input.reference);
    print_report(&mut out, &report, stats, json)?;
    out.flush()?;
    Ok(())
}

fn run_batch(config: &SimulatorConfig, frames: usize, pages: &[PageId], stats: bool, json: bool) -> Result<()> {
    config.validate_pages(i64::try_from(pages.len()).unwrap_or(i64::MAX))?;
    let mut sim = PageReplacementSimulator::with_config(frames, config)?;
    let report = sim.run(pages);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_report(&mut out, &report, stats, json)
}

/// What the shell should do after a line has been handled
#[derive(Debug, PartialEq, Eq)]
enum ShellAction {
    Continue(Vec<String>),
    Exit,
}

fn describe_outcome(outcome: &AccessOutcome) -> String {
    match outcome {
        AccessOutcome::Hit { frame } => format!("hit (frame {})", frame),
        AccessOutcome::Fault { frame, evicted: None } => format!("fault (frame {})", frame),
        AccessOutcome::Fault { frame, evicted: Some(page) } => {
            format!("fault (frame {}, evicted {})", frame, page)
        }
    }
}

fn handle_shell_line(sim: &mut PageReplacementSimulator, line: &str) -> ShellAction {
    match line.to_lowercase().as_str() {
        "exit" | "quit" => return ShellAction::Exit,
        "help" => return ShellAction::Continue(help_lines()),
        "reset" => {
            sim.reset();
            return ShellAction::Continue(vec!["All frames emptied".to_string()]);
        }
        "frames" => {
            let rendered: Vec<String> = sim
                .frames()
                .iter()
                .map(|f| match f.page {
                    Some(page) => format!("  frame {}: page {} (t={})", f.frame_id, page, f.last_access),
                    None => format!("  frame {}: -", f.frame_id),
                })
                .collect();
            return ShellAction::Continue(rendered);
        }
        "stats" => {
            return ShellAction::Continue(vec![
                format!("Accesses: {}", sim.access_count()),
                format!("Total Page Faults: {}", sim.fault_count()),
                format!("Total Page Hits: {}", sim.hit_count()),
            ]);
        }
        _ => {}
    }

    // Anything else must be a list of page numbers
    let pages: Result<Vec<PageId>, _> = line.split_whitespace().map(str::parse::<PageId>).collect();
    match pages {
        Ok(pages) => ShellAction::Continue(
            pages
                .into_iter()
                .map(|page| {
                    let step = sim.step(page);
                    format!("{}  {}", format_step(&step), describe_outcome(&step.outcome))
                })
                .collect(),
        ),
        Err(err) => ShellAction::Continue(vec![format!("Error: {}", err)]),
    }
}

fn help_lines() -> Vec<String> {
    [
        "Available commands:",
        "  <page> [<page> ...]  - Access one or more pages",
        "  frames               - Show frame contents and recency",
        "  stats                - Show fault and hit totals",
        "  reset                - Empty all frames",
        "  help                 - Display this help message",
        "  exit                 - Exit the shell",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn run_shell(config: &SimulatorConfig, frames: usize) -> Result<()> {
    let mut sim = PageReplacementSimulator::with_config(frames, config)?;
    println!(
        "LRU simulator with {} frames. Type 'help' for assistance or 'exit' to quit.",
        sim.frame_count()
    );
    println!("Page\tFrames");

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        debug!("No history loaded: {}", err);
    }

    loop {
        match rl.readline("lrusim> ") {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                match handle_shell_line(&mut sim, line) {
                    ShellAction::Continue(lines) => {
                        for line in lines {
                            println!("{}", line);
                        }
                    }
                    ShellAction::Exit => {
                        println!("Goodbye!");
                        break;
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    println!("\nTotal Page Faults: {}", sim.fault_count());

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        warn!("Error saving history: {}", err);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = cli.config();

    match &cli.command {
        Some(Commands::Run { frames, pages }) => run_batch(&config, *frames, pages, cli.stats, cli.json),
        Some(Commands::Shell { frames }) => run_shell(&config, *frames),
        Some(Commands::Interactive) | None => run_interactive(&config, cli.stats, cli.json),
    }
}
