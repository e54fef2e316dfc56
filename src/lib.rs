//! Perfect maze generation over square, circular, triangular and polar layouts.
//!
//! ```
//! use shapemaze::{Shape, generate_maze};
//!
//! let maze = generate_maze(10, Shape::Polar, Some(7));
//! assert_eq!(maze.start(), shapemaze::Coord::ring(0, 0));
//! assert!(shapemaze::analysis::is_perfect(&maze));
//! ```

pub mod analysis;
pub mod config;
pub mod error;
pub mod generators;
pub mod geometry;
pub mod goal;
pub mod logging;
pub mod mask;
pub mod maze;
pub mod preview;
pub mod session;

pub use config::{MazeConfig, SizeBounds};
pub use error::{MazeError, Result};
pub use generators::{generate_maze, generate_with_rng};
pub use goal::{Difficulty, select_goal};
pub use maze::{Coord, Layout, MazeKind, MazeResult, Shape};
pub use session::{Session, restore_or_generate};
