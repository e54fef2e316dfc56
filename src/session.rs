//! Saved maze sessions.
//!
//! Storage belongs to the front end. This module decides whether a restored
//! session can be trusted, and regenerates when it cannot.

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    config::MazeConfig,
    error::{MazeError, Result},
    generators::generate_with_rng,
    goal::select_goal,
    maze::{Coord, Layout, MazeResult},
};

/// A maze together with the goal the player was given.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Size the maze was requested at.
    pub size: u16,
    pub maze: MazeResult,
    pub goal: Coord,
}

impl Session {
    /// Generates a fresh maze for `config` and places its goal.
    pub fn generate<R: Rng>(config: &MazeConfig, rng: &mut R) -> Self {
        let maze = generate_with_rng(config.size, config.shape, rng);
        let goal = select_goal(&maze, config.difficulty);
        Session {
            size: u16::try_from(maze.size()).unwrap_or(u16::MAX),
            maze,
            goal,
        }
    }

    /// Checks that a restored session is internally consistent.
    ///
    /// The layout must have `size` rows or rings, its cells must sit where they
    /// claim to, walls must agree across grid edges, rings must divide evenly,
    /// exactly one cell must carry each of the start and end markers at the
    /// recorded points, and the goal must be a cell of the maze.
    pub fn validate(&self) -> Result<()> {
        let layout = self.maze.layout();
        let found = layout.len();
        if found != self.size as usize {
            return Err(MazeError::SizeMismatch {
                expected: self.size as usize,
                found,
            });
        }
        if self.maze.shape().kind() != layout.kind() {
            return Err(MazeError::MalformedLayout(format!(
                "{} maze stored with a {:?} layout",
                self.maze.shape(),
                layout.kind()
            )));
        }

        match layout {
            Layout::Grid(grid) => {
                if !grid.is_well_formed() {
                    return Err(MazeError::MalformedLayout(
                        "grid cells do not match its size".to_string(),
                    ));
                }
                if !grid.has_symmetric_walls() {
                    return Err(MazeError::MalformedLayout(
                        "walls differ across a shared edge".to_string(),
                    ));
                }
            }
            Layout::Rings(rings) => {
                if !rings.is_well_formed() {
                    return Err(MazeError::MalformedLayout(
                        "rings do not divide evenly".to_string(),
                    ));
                }
            }
        }

        check_marker("start", &marked_cells(layout, Marker::Start), self.maze.start())?;
        check_marker("end", &marked_cells(layout, Marker::End), self.maze.end())?;
        if !layout.contains(self.maze.start()) {
            return Err(MazeError::InvalidPoint(format!(
                "start {} is not an active cell",
                self.maze.start()
            )));
        }
        if !layout.contains(self.goal) {
            return Err(MazeError::InvalidPoint(format!(
                "goal {} is not a cell of the maze",
                self.goal
            )));
        }
        Ok(())
    }

    /// Checks that the session holds the shape and size `config` asks for.
    pub fn matches(&self, config: &MazeConfig) -> Result<()> {
        let expected = (config.shape, config.size);
        let found = (self.maze.shape(), self.size);
        if expected == found {
            Ok(())
        } else {
            Err(MazeError::ConfigMismatch { expected, found })
        }
    }
}

#[derive(Clone, Copy)]
enum Marker {
    Start,
    End,
}

fn marked_cells(layout: &Layout, marker: Marker) -> Vec<Coord> {
    match layout {
        Layout::Grid(grid) => grid
            .cells()
            .iter()
            .filter(|cell| match marker {
                Marker::Start => cell.is_start,
                Marker::End => cell.is_end,
            })
            .map(|cell| Coord::grid(cell.x, cell.y))
            .collect(),
        Layout::Rings(rings) => rings
            .cells()
            .filter(|cell| match marker {
                Marker::Start => cell.is_start,
                Marker::End => cell.is_end,
            })
            .map(|cell| Coord::ring(cell.r, cell.i))
            .collect(),
    }
}

fn check_marker(name: &str, marked: &[Coord], expected: Coord) -> Result<()> {
    match marked {
        [only] if *only == expected => Ok(()),
        [] => Err(MazeError::InvalidPoint(format!("no {} cell", name))),
        [only] => Err(MazeError::InvalidPoint(format!(
            "{} marked at {} but recorded at {}",
            name, only, expected
        ))),
        _ => Err(MazeError::InvalidPoint(format!(
            "{} {} cells",
            marked.len(),
            name
        ))),
    }
}

/// Returns `saved` if it validates and holds the shape and size `config`
/// asks for, otherwise a freshly generated session.
///
/// A corrupt or mismatched session is treated like a missing one; the reason
/// is logged and never surfaced.
pub fn restore_or_generate<R: Rng>(
    saved: Option<Session>,
    config: &MazeConfig,
    rng: &mut R,
) -> Session {
    let checked = saved.map(|session| -> Result<Session> {
        session.validate()?;
        session.matches(config)?;
        Ok(session)
    });
    match checked {
        Some(Ok(session)) => {
            tracing::debug!(
                "[session] restored {} maze of size {}",
                session.maze.shape(),
                session.size
            );
            session
        }
        Some(Err(err)) => {
            tracing::warn!("[session] discarding saved maze: {}", err);
            Session::generate(config, rng)
        }
        None => Session::generate(config, rng),
    }
}
