use std::fmt::Display;

use crate::color::Rgb;
use crate::constants::CELL_STEP;
use crate::constants::ORIGIN_X;
use crate::constants::ORIGIN_Y;
use crate::constants::STROKE_COLOR;
use crate::constants::STROKE_WIDTH;
use crate::grid::GridCoord;
use crate::grid::Lattice;

/// One cube of the generated scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cube {
    /// The sequential, zero-based identifier of this cube.
    pub id: u64,

    /// The x position of this cube on the canvas.
    pub x: i64,

    /// The y position of this cube on the canvas.
    pub y: i64,

    /// The fill color of this cube.
    pub fill: Rgb,
}

impl Cube {
    /// Project the cube at `coord` onto the canvas.
    ///
    /// The `k` axis shears the cube by half a cell towards the origin, which
    /// gives the lattice its isometric look. The position is computed in
    /// floating point and truncated towards zero, matching what the
    /// downstream renderer expects.
    pub fn at(coord: GridCoord, side: i64, id: u64) -> Self {
        let step = CELL_STEP as f64;
        let x = ORIGIN_X as f64 + coord.i as f64 * step - coord.k as f64 * step * 0.5;
        let y = ORIGIN_Y as f64 + coord.j as f64 * step - coord.k as f64 * step * 0.5;

        Self {
            id,
            x: x as i64,
            y: y as i64,
            fill: Rgb::for_coord(coord, side),
        }
    }
}

impl Display for Cube {
    /// Render the `shape_create` DSL line for this cube.
    ///
    /// Field order and token spelling are a hard boundary with the canvas
    /// renderer and must stay exactly as they are.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "shape_create cube_{} cube \"\" ({},{}) ({},{}) filled true \
             bg {} stroke {} stroke_color {}",
            self.id, self.x, self.y, CELL_STEP, CELL_STEP, self.fill, STROKE_WIDTH, STROKE_COLOR
        )
    }
}

/// Generate the cubes of a lattice with the given side length.
///
/// Pure, total over all `side` values. A side of zero or less produces no
/// cubes.
pub fn generate(side: i64) -> Vec<Cube> {
    Lattice::new(side)
        .coords()
        .enumerate()
        .map(|(id, coord)| Cube::at(coord, side, id as u64))
        .collect()
}

/// Render the full scene document, one newline-terminated line per cube.
pub fn render(cubes: &[Cube]) -> String {
    use std::fmt::Write;

    let mut document = String::new();

    for cube in cubes {
        // Writing into a String cannot fail.
        let _ = writeln!(document, "{cube}");
    }

    document
}

#[cfg(test)]
#[path = "tests/scene.rs"]
mod tests;
