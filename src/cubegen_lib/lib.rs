//! The architecture of our codebase, shared between the generator library
//! and the CLI.

/// Enumeration of the cubic lattice of grid coordinates.
pub mod grid;

/// Per-channel color computation and hex formatting.
pub mod color;

/// Cube records and the `shape_create` DSL rendering.
pub mod scene;

/// Common file operations.
pub mod file_system;

/// The error handling for `cubegen`.
pub mod error;

/// Constant values.
pub mod constants;
