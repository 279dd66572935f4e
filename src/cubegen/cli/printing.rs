use anstyle::AnsiColor;
use cubegen_lib::constants::style_from_fg;
use cubegen_lib::constants::ERROR_STYLE;
use cubegen_lib::constants::HELP_STYLE;

/// Util function for getting the style for the CLI
pub fn get_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(style_from_fg(AnsiColor::Yellow).bold())
        .header(style_from_fg(AnsiColor::Green).bold().underline())
        .literal(style_from_fg(AnsiColor::Cyan).bold())
        .invalid(style_from_fg(AnsiColor::Blue).bold())
        .error(ERROR_STYLE)
        .valid(HELP_STYLE)
        .placeholder(style_from_fg(AnsiColor::White))
}

/// The confirmation line printed after a successful run.
pub fn confirmation(file: &str, cubes: u64) -> String {
    format!("Successfully generated {file} with {cubes} cubes.")
}

#[cfg(test)]
#[path = "tests/printing.rs"]
mod tests;
