/// A position in the cubic lattice.
///
/// Each component ranges over `[0, side)` of the [Lattice] that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCoord {
    /// The position along the x axis of the lattice.
    pub i: i64,

    /// The position along the y axis of the lattice.
    pub j: i64,

    /// The position along the depth axis of the lattice.
    pub k: i64,
}

/// A cubic lattice with `side` cubes along every axis.
///
/// The side length may be zero or negative, in which case the lattice is
/// empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lattice {
    /// The number of cubes along every axis.
    side: i64,
}

impl Lattice {
    /// Create a lattice with the given side length.
    pub fn new(side: i64) -> Self {
        Self { side }
    }

    /// The number of cubes along every axis.
    pub fn side(&self) -> i64 {
        self.side
    }

    /// The total number of cubes in the lattice.
    pub fn volume(&self) -> u64 {
        if self.side <= 0 {
            0
        } else {
            (self.side as u64).pow(3)
        }
    }

    /// Enumerate the lattice in row-major order.
    ///
    /// `i` is the outermost axis and `k` the innermost, so the `n`-th
    /// coordinate yielded is `(n / side², (n / side) % side, n % side)`.
    /// Downstream identifiers depend on this order, it must not change.
    pub fn coords(&self) -> impl Iterator<Item = GridCoord> {
        let side = self.side;

        (0..side).flat_map(move |i| {
            (0..side).flat_map(move |j| (0..side).map(move |k| GridCoord { i, j, k }))
        })
    }
}

#[cfg(test)]
#[path = "tests/grid.rs"]
mod tests;
