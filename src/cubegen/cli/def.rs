use clap::ArgAction;
use clap::Parser;

/// Structure of the main command (cubegen).
#[derive(Parser, Debug)]
#[command(
    about = "Cubegen, a cube lattice scene generator",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// The number of cubes per side of the lattice.
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub side: i64,

    /// Verbose mode, displays debug info. For even more try: -vv.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Dry run, generate but don't write the output file.
    #[arg(short, long)]
    pub dry: bool,
}

#[cfg(test)]
#[path = "tests/def.rs"]
mod tests;
