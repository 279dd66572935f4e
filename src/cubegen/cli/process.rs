use std::env;
use std::path::Path;
use std::process::exit;

use anyhow::anyhow;
use anyhow::Context;
use anyhow::Result;
use clap::CommandFactory;
use clap::FromArgMatches;
use colog::default_builder;
use colog::formatter;
use cubegen_lib::constants::ERROR_STYLE;
use cubegen_lib::constants::OUTPUT_FILE;
use cubegen_lib::constants::PRIMARY_STYLE;
use cubegen_lib::ctx;
use cubegen_lib::file_system::FileOperations;
use cubegen_lib::file_system::FileSystemInteractor;
use cubegen_lib::scene;
use log::debug;
use log::trace;
use log::LevelFilter;

use super::log::LogTokens;
use super::printing::confirmation;
use super::printing::get_styles;
use crate::cli::def::Cli;

/// This function parses the command that cubegen was run with.
pub fn parse_command() {
    let styled = Cli::command().styles(get_styles()).get_matches();

    // This unwrap will print the error if the command is wrong.
    let command = Cli::from_arg_matches(&styled).unwrap();

    // https://github.com/rust-lang/rust/blob/master/library/std/src/backtrace.rs
    let backtrace_enabled = match env::var("RUST_LIB_BACKTRACE") {
        Ok(s) => s != "0",
        Err(_) => match env::var("RUST_BACKTRACE") {
            Ok(s) => s != "0",
            Err(_) => false,
        },
    };

    if backtrace_enabled {
        eprintln!("{:?}", process_command(&command));
    } else if let Err(e) = process_command(&command) {
        eprintln!("{}error:{:#} {}", ERROR_STYLE, ERROR_STYLE, e.root_cause());
        eprint!("{}", e);
        exit(1);
    }
}

/// CLAP has parsed the command, now we process it.
pub fn process_command(cmd: &Cli) -> Result<()> {
    setup_logging(cmd)?;

    let file_system = FileSystemInteractor { dry_run: cmd.dry };

    debug!("Generating a lattice with {} cubes per side", cmd.side);

    let cubes = scene::generate(cmd.side);

    trace!("Generated {} cubes", cubes.len());

    let document = scene::render(&cubes);

    file_system.write_utf8_truncate(Path::new(OUTPUT_FILE), &document)?;

    println!("{}", confirmation(OUTPUT_FILE, cubes.len() as u64));

    debug!("Load {PRIMARY_STYLE}{OUTPUT_FILE}{PRIMARY_STYLE:#} in the canvas to view the lattice");

    Ok(())
}

/// Prepare the log levels for the application.
fn setup_logging(cmd: &Cli) -> Result<()> {
    let mut log_build = default_builder();
    log_build.format(formatter(LogTokens));

    if cmd.verbose == 2 {
        log_build.filter(None, LevelFilter::Trace);
    } else if cmd.verbose == 1 {
        log_build.filter(None, LevelFilter::Debug);
    } else if cmd.verbose == 0 {
        log_build.filter(None, LevelFilter::Info);
    } else {
        return Err(anyhow!("Only two levels of verbosity supported (ie. -vv)")).context("");
    }

    log_build.try_init().with_context(ctx!(
        "Failed to initialize the command line interface", ;
        "Make sure you are using a supported terminal",
    ))?;

    Ok(())
}
