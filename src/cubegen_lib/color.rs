use std::fmt::Display;

use crate::constants::CHANNEL_FLOOR;
use crate::constants::CHANNEL_SPAN;
use crate::grid::GridCoord;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// The red channel.
    pub r: u8,

    /// The green channel.
    pub g: u8,

    /// The blue channel.
    pub b: u8,
}

impl Rgb {
    /// The color of the cube at `coord` in a lattice with the given side.
    ///
    /// Red follows `i`, green follows `j` and blue follows `k`.
    pub fn for_coord(coord: GridCoord, side: i64) -> Self {
        Self {
            r: channel(coord.i, side),
            g: channel(coord.j, side),
            b: channel(coord.k, side),
        }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Compute one color channel from its lattice index.
///
/// The channel ramps linearly from [CHANNEL_FLOOR] at index 0 up to 255 at
/// index `side - 1`. A lattice of side 1 would divide by zero here, its
/// single cube is white instead.
pub fn channel(index: i64, side: i64) -> u8 {
    if side > 1 {
        let ramp = (index as f64 / (side - 1) as f64 * CHANNEL_SPAN as f64) as u8;
        CHANNEL_FLOOR + ramp
    } else {
        u8::MAX
    }
}

#[cfg(test)]
#[path = "tests/color.rs"]
mod tests;
