// src/main.rs
//
// reflowcell — rewrap text for fixed-width table cells
//
// CLI flags:
//   -w, --width N         : max characters per line (default 60)
//   --cell-width/--font-size [--scaling] [--units]
//                         : derive the width from a table cell instead of --width
//   --cleanup             : force-enable the HTML cleanup pre-pass
//   --no-cleanup          : force-disable it
// Default: cleanup is enabled iff input file extension is ".html" or ".htm" (case-insensitive).
// Input "-" or no input reads stdin; no output writes stdout.

use clap::{ArgAction, Parser, ValueEnum};
use reflowcell::{max_width_for_cell, Error, Reflower, Units, DEFAULT_SCALING};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_WIDTH: usize = 60;

/// CLI flags
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Maximum characters per line [default: 60]
    #[arg(short, long)]
    width: Option<usize>,

    /// Table cell width, in --units; derives --width
    #[arg(long, requires = "font_size", conflicts_with = "width")]
    cell_width: Option<f64>,

    /// Font size, in --units
    #[arg(long, requires = "cell_width")]
    font_size: Option<f64>,

    /// Calibration factor for --cell-width
    #[arg(long, default_value_t = DEFAULT_SCALING)]
    scaling: f64,

    /// Unit of --cell-width and --font-size
    #[arg(long, value_enum, default_value_t = UnitsArg::Emu)]
    units: UnitsArg,

    /// Force-enable the HTML cleanup pre-pass
    #[arg(long, action = ArgAction::SetTrue)]
    cleanup: bool,

    /// Force-disable the HTML cleanup pre-pass
    #[arg(long = "no-cleanup", action = ArgAction::SetTrue)]
    no_cleanup: bool,

    /// Log what the reflow is doing
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Input file (default: stdin)
    input: Option<PathBuf>,

    /// Output file (default: stdout)
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Emu,
    Points,
}

impl From<UnitsArg> for Units {
    fn from(u: UnitsArg) -> Self {
        match u {
            UnitsArg::Emu => Units::EMU,
            UnitsArg::Points => Units::POINTS,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("reflowcell: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let input = cli.input.as_ref().filter(|p| p.as_os_str() != "-");

    let src = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut s = String::new();
            io::stdin().read_to_string(&mut s)?;
            s
        }
    };

    // Default: clean up if input ends with ".html"/".htm"
    let default_cleanup = input
        .and_then(|p| p.extension())
        .map_or(false, |e| {
            let e = e.to_string_lossy();
            e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm")
        });

    // Precedence: explicit flags override default; --no-cleanup wins if both are present.
    let use_cleanup = if cli.no_cleanup {
        false
    } else if cli.cleanup {
        true
    } else {
        default_cleanup
    };

    let width = match (cli.cell_width, cli.font_size) {
        (Some(cell), Some(font)) => max_width_for_cell(cell, font, cli.scaling, cli.units.into())?,
        _ => cli.width.unwrap_or(DEFAULT_WIDTH),
    };
    debug!(width, cleanup = use_cleanup, "resolved options");

    let out = Reflower::new(width)?.cleanup(use_cleanup).run(&src)?;

    match &cli.output {
        Some(path) => fs::write(path, out)?,
        None => io::stdout().lock().write_all(out.as_bytes())?,
    }
    Ok(())
}
