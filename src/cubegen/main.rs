//! Cubegen generates a cubic lattice of colored cubes as `shape_create` DSL
//! commands for the canvas renderer.

/// The command line interface and relevant structures.
pub mod cli;

/// The main CLI entry-point of the `cubegen` utility.
///
/// This function parses command-line arguments and runs the generation as
/// specified by the user.
fn main() {
    cli::process::parse_command();
}
