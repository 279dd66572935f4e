use anstyle::AnsiColor;
use anstyle::Color;
use anstyle::Style;

/// The file to which the generated scene is written.
pub const OUTPUT_FILE: &str = "ai_cube.dsl";

/// The spacing between neighbouring cubes, and also the cube side length.
pub const CELL_STEP: i64 = 20;

/// The x coordinate of the lattice origin on the canvas.
pub const ORIGIN_X: i64 = 1000;

/// The y coordinate of the lattice origin on the canvas.
pub const ORIGIN_Y: i64 = 1000;

/// The lowest value a color channel can take.
pub const CHANNEL_FLOOR: u8 = 105;

/// The spread of a color channel above [CHANNEL_FLOOR].
pub const CHANNEL_SPAN: i64 = 150;

/// The stroke width of every generated cube.
pub const STROKE_WIDTH: u32 = 1;

/// The stroke color of every generated cube.
pub const STROKE_COLOR: &str = "#666666";

/// Create a style with a defined foreground color.
pub const fn style_from_fg(color: AnsiColor) -> Style {
    Style::new().fg_color(Some(Color::Ansi(color)))
}

/// The styling for the program name.
pub const PRIMARY_STYLE: Style = style_from_fg(AnsiColor::Green).bold();

/// The styling for error messages.
pub const ERROR_STYLE: Style = style_from_fg(AnsiColor::Red).bold().blink();

/// The styling for help messages.
pub const HELP_STYLE: Style = style_from_fg(AnsiColor::Green).bold().underline();
