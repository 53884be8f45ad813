//! intlist CLI
//!
//! Runs list command scripts from a command string or a script file.

use anyhow::Context;
use clap::{Arg, ArgAction, Command};
use intlist_script::{ErrorMode, Output, Session, parse_script};
use std::io::{self, IsTerminal, Write};
use std::process;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "INTLIST_LOG";

#[derive(Debug, Clone, Copy, Default)]
struct RunOptions {
    mode: ErrorMode,
    json: bool,
}

fn cli() -> Command {
    Command::new("intlist")
        .version("0.1.0")
        .about("Run integer list command scripts")
        .arg(
            Arg::new("command")
                .short('c')
                .long("command")
                .value_name("STRING")
                .help("Execute command string")
                .num_args(1)
                .conflicts_with("file"),
        )
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("Script file to execute")
                .index(1),
        )
        .arg(
            Arg::new("sentinel")
                .long("sentinel")
                .help("Print -1 for failed removals and lookups instead of stopping")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the final list as a JSON array")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (-v debug, -vv trace)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let options = RunOptions {
        mode: if matches.get_flag("sentinel") {
            ErrorMode::Sentinel
        } else {
            ErrorMode::Strict
        },
        json: matches.get_flag("json"),
    };

    let mut stdout = io::stdout().lock();
    let result = match (
        matches.get_one::<String>("command"),
        matches.get_one::<String>("file"),
    ) {
        (Some(command_str), _) => execute_string(command_str, options, &mut stdout),
        (None, Some(file_path)) => execute_file(file_path, options, &mut stdout),
        (None, None) => {
            eprintln!("intlist: expected a command string (-c) or a script file");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        if let Err(flush_err) = stdout.flush() {
            eprintln!("intlist: cannot flush output: {flush_err}");
        }
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn execute_string(
    command_str: &str,
    options: RunOptions,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    execute_source(command_str, "<command>", options, out)
}

fn execute_file(
    file_path: &str,
    options: RunOptions,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("intlist: cannot read {file_path}"))?;
    execute_source(&content, file_path, options, out)
}

fn execute_source(
    source: &str,
    filename: &str,
    options: RunOptions,
    out: &mut impl Write,
) -> Result<(), anyhow::Error> {
    let script = parse_script(source, filename)?;

    let mut session = Session::with_mode(options.mode);
    let mut output = Output::new();
    let result = session.run(&script, &mut output);

    // Lines printed before a failure are still shown
    out.write_all(output.text().as_bytes())?;
    result?;

    if options.json {
        let values = session.list().to_vec();
        writeln!(out, "{}", serde_json::to_string(&values)?)?;
    }
    out.flush()?;

    tracing::debug!(
        filename,
        final_len = session.list().len(),
        "script finished"
    );
    Ok(())
}
