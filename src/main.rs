// Main entry point for the Query Workshop CLI
// Lists the exercises, runs one or all of them, or opens an interactive shell

use anyhow::Result;
use clap::{Parser as ClapParser, ValueEnum};
use query_workshop::{DataLoader, DataSource, ExerciseOutput, Settings, Workshop};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, trace};

/// Query Workshop - query exercises over the sample customer/order dataset
#[derive(ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Load the dataset from this JSON file instead of the bundled sample
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Amount exercises 1 and 3 compare order totals against
    #[arg(short, long, default_value_t = query_workshop::query::DEFAULT_THRESHOLD)]
    threshold: f64,

    /// Run a single exercise (e.g. linq5 or 5) and exit
    #[arg(short, long)]
    execute: Option<String>,

    /// Run every exercise and exit
    #[arg(short, long, conflicts_with = "execute")]
    all: bool,

    /// List the exercises and exit
    #[arg(short, long, conflicts_with_all = ["execute", "all"])]
    list: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so they never mix with results on stdout
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(args.verbose >= 2)
        .with_line_number(args.verbose >= 3)
        .with_writer(io::stderr)
        .init();

    debug!("Query workshop started with verbosity level: {}", args.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    let data = match &args.data {
        Some(path) => DataLoader::from_path(path)?,
        None => DataLoader::sample()?,
    };
    let settings = Settings {
        threshold: args.threshold,
    };
    let workshop = Workshop::new();

    if args.list {
        println!("{}", workshop.format_list());
        return Ok(());
    }

    if let Some(id) = &args.execute {
        let output = workshop.run(id, &data, &settings)?;
        print_output(&output, args.format)?;
        return Ok(());
    }

    if args.all {
        run_all(&workshop, &data, &settings, args.format)?;
        return Ok(());
    }

    // Interactive shell
    println!("╔════════════════════════════════════════════╗");
    println!("║        Query Workshop Interactive Shell    ║");
    println!("╚════════════════════════════════════════════╝");
    println!();
    println!("Type an exercise id (e.g. linq1 or 1) or '.help' for help");
    println!("Type '.exit' to quit");
    println!();

    repl(|input| match input {
        ".list" => {
            println!("{}", workshop.format_list());
            Ok(())
        }
        ".all" => run_all(&workshop, &data, &settings, args.format),
        id => {
            let output = workshop.run(id, &data, &settings)?;
            print_output(&output, args.format)
        }
    })
}

/// REPL (Read-Eval-Print Loop) implementation
///
/// `.help` and `.exit`/`.quit` are handled here; every other line goes to
/// `execute_fn`. Errors are printed and the loop keeps going.
fn repl<F>(mut execute_fn: F) -> Result<()>
where
    F: FnMut(&str) -> Result<()>,
{
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("workshop> ");
        stdout.flush()?;

        let mut input = String::new();
        // End of input (Ctrl-D) ends the session
        if stdin.read_line(&mut input)? == 0 {
            println!();
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        match input {
            ".exit" | ".quit" => {
                println!("Goodbye!");
                break;
            }
            ".help" => {
                print_help();
                continue;
            }
            ".list" | ".all" => {}
            _ if input.starts_with('.') => {
                println!("Unknown command: {}", input);
                println!("Type '.help' for help");
                continue;
            }
            _ => {}
        }

        if let Err(e) = execute_fn(input) {
            eprintln!("Error: {}", e);
        }
    }

    Ok(())
}

fn run_all(
    workshop: &Workshop,
    data: &DataSource,
    settings: &Settings,
    format: OutputFormat,
) -> Result<()> {
    let outputs = workshop.run_all(data, settings)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outputs)?),
        OutputFormat::Text => {
            for output in &outputs {
                println!("{}\n", output.format());
            }
        }
    }

    Ok(())
}

fn print_output(output: &ExerciseOutput, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", output.to_json()?),
        OutputFormat::Text => println!("{}", output.format()),
    }
    Ok(())
}

/// Print help information
fn print_help() {
    println!("╔════════════════════════════════════════════╗");
    println!("║            Query Workshop Help             ║");
    println!("╚════════════════════════════════════════════╝");
    println!();
    println!("Special Commands:");
    println!("  .help              Show this help message");
    println!("  .list              List all exercises");
    println!("  .all               Run every exercise");
    println!("  .exit, .quit       Exit the shell");
    println!();
    println!("Exercises:");
    println!("  linq1 .. linq10    Run an exercise by id");
    println!("  1 .. 10            Same, without the prefix");
    println!();
    println!("Notes:");
    println!("  - Ids are case-insensitive");
    println!("  - Exercises 1 and 3 use the --threshold value (default 1000)");
    println!();
}
