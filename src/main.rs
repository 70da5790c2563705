//! Heat-Loss Route Planner
//!
//! Reads a grid of single-digit entry costs and reports the cheapest
//! corner-to-corner route for an ordinary vehicle (runs of 1 to 3 cells) and a
//! long-haul vehicle (runs of 4 to 10 cells). Input is taken from `--input`
//! or from the first of `dayNN.inp.real`, `dayNN.inp`, `dayNN.inp.sample`
//! found in `--dir`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crucible::{
    format_field, format_route, input, Grid, HeatLossReport, HeuristicField, PathError, Vehicle,
};

/// Finds minimum heat-loss routes for run-constrained vehicles.
#[derive(Parser)]
#[command(name = "crucible")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use sample data even if real data is available.
    #[arg(short, long)]
    sample: bool,

    /// Run more verbosely (repeat for trace output).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Read the grid from this file instead of searching `--dir`.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Directory searched for day input files.
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Puzzle day used to name input files.
    #[arg(long, default_value_t = 17)]
    day: u32,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the minimum heat loss for both standard vehicles.
    Solve,
    /// Draw the cheapest route for custom run bounds.
    Route {
        /// Cells a run must cover before turning or stopping.
        #[arg(long, default_value_t = 1)]
        min_run: u32,
        /// Cells after which the vehicle must turn.
        #[arg(long, default_value_t = 3)]
        max_run: u32,
    },
    /// Print the lower-bound field toward the bottom-right corner.
    Bounds,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(grid) = load_grid(&cli) else {
        return ExitCode::FAILURE;
    };

    let output = match cli.command.unwrap_or(Command::Solve) {
        Command::Solve => run_solve(&grid),
        Command::Route { min_run, max_run } => run_route(&grid, Vehicle::new(min_run, max_run)),
        Command::Bounds => run_bounds(&grid),
    };

    match output {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to find a route: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr. `RUST_LOG` overrides the `-v` level.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolves and loads the input grid, reporting failures on stderr.
fn load_grid(cli: &Cli) -> Option<Grid> {
    let path = match &cli.input {
        Some(path) => path.clone(),
        None => match input::locate(&cli.dir, cli.day, cli.sample) {
            Some(path) => path,
            None => {
                eprintln!("No input data for day {} in {}", cli.day, cli.dir.display());
                return None;
            }
        },
    };

    match input::load(&path) {
        Ok(grid) => Some(grid),
        Err(e) => {
            eprintln!("{e}");
            None
        }
    }
}

/// Minimum heat loss for both standard vehicles.
fn run_solve(grid: &Grid) -> Result<String, PathError> {
    let report = HeatLossReport::compute(grid)?;
    Ok(format!(
        "Part 1: {}\nPart 2: {}\n",
        report.ordinary.cost, report.long_haul.cost
    ))
}

/// Cheapest corner-to-corner route for `vehicle`, drawn over the grid.
fn run_route(grid: &Grid, vehicle: Vehicle) -> Result<String, PathError> {
    let route = crucible::find_path(
        grid,
        grid.top_left(),
        grid.bottom_right(),
        vehicle.min_run,
        vehicle.max_run,
    )?;
    Ok(format!(
        "Heat loss: {}\n{}",
        route.cost,
        format_route(grid, &route.path)
    ))
}

/// The heuristic field toward the bottom-right corner.
fn run_bounds(grid: &Grid) -> Result<String, PathError> {
    let field = HeuristicField::build(grid, grid.bottom_right())?;
    Ok(format_field(&field))
}
