//! Terminal preview of a generated maze.
//!
//! Grid mazes are drawn with their walls on a `(2n + 1)²` character canvas,
//! cells on odd coordinates and walls in between. Ring mazes are plotted cell
//! by cell through [`map_to_point`](crate::geometry::map_to_point).

use std::{fmt, io::Write};

use crossterm::{
    queue,
    style::{self, Color, Stylize},
    terminal,
};
use unicode_truncate::UnicodeTruncateStr;

use crate::{
    geometry::{Point2, map_to_point},
    maze::{Coord, Direction, Grid, Layout, MazeResult, Rings, Shape},
};

/// One slot of the preview canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Blank,
    Wall,
    Passage,
    /// A ring cell centre.
    Node,
    Start,
    Goal,
}

impl Glyph {
    /// The width of each glyph when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Glyph::Blank => "  ".with(Color::Reset),
            Glyph::Wall => "⬜".with(Color::White),
            Glyph::Passage => "  ".with(Color::Reset),
            Glyph::Node => "()".with(Color::DarkGrey),
            Glyph::Start => "🟩".with(Color::Green),
            Glyph::Goal => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Glyph::WIDTH as usize,
                "Each glyph must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Rows of glyphs, top to bottom.
pub type Canvas = Vec<Vec<Glyph>>;

/// Lays `maze` out on a canvas, marking `goal` instead of the generator's end.
pub fn canvas(maze: &MazeResult, goal: Coord) -> Canvas {
    match maze.layout() {
        Layout::Grid(grid) => grid_canvas(grid, maze.start(), goal),
        Layout::Rings(rings) => ring_canvas(rings, maze.shape(), maze.start(), goal),
    }
}

fn grid_canvas(grid: &Grid, start: Coord, goal: Coord) -> Canvas {
    let side = grid.size() as usize * 2 + 1;
    let mut canvas = vec![vec![Glyph::Blank; side]; side];
    for cell in grid.cells().iter().filter(|cell| cell.is_active) {
        let (cx, cy) = (cell.x as usize * 2 + 1, cell.y as usize * 2 + 1);
        let here = Coord::grid(cell.x, cell.y);
        canvas[cy][cx] = if here == goal {
            Glyph::Goal
        } else if here == start {
            Glyph::Start
        } else {
            Glyph::Passage
        };
        for (dx, dy) in [(-1isize, -1isize), (1, -1), (-1, 1), (1, 1)] {
            canvas[cy.wrapping_add_signed(dy)][cx.wrapping_add_signed(dx)] = Glyph::Wall;
        }
        for dir in Direction::ALL {
            let (x, y) = match dir {
                Direction::Up => (cx, cy - 1),
                Direction::Down => (cx, cy + 1),
                Direction::Left => (cx - 1, cy),
                Direction::Right => (cx + 1, cy),
            };
            canvas[y][x] = if cell.walls.get(dir) {
                Glyph::Wall
            } else {
                Glyph::Passage
            };
        }
    }
    canvas
}

fn ring_canvas(rings: &Rings, shape: Shape, start: Coord, goal: Coord) -> Canvas {
    let outer = rings.len().saturating_sub(1);
    let side = outer * 2 + 1;
    let mut canvas = vec![vec![Glyph::Blank; side]; side];
    let center = Point2::new(outer as f64, outer as f64);
    let mut plot = |r: usize, i: usize, glyph: Glyph| {
        let point = map_to_point(r as f64, i, rings.ring_len(r), center, shape);
        let x = (point.x.round().max(0.0) as usize).min(side - 1);
        let y = (point.y.round().max(0.0) as usize).min(side - 1);
        if canvas[y][x] == Glyph::Blank || glyph != Glyph::Node {
            canvas[y][x] = glyph;
        }
    };
    for cell in rings.cells() {
        plot(cell.r, cell.i, Glyph::Node);
    }
    // Markers go last so overlapping cells cannot hide them
    for (coord, glyph) in [(start, Glyph::Start), (goal, Glyph::Goal)] {
        if let Coord::Ring(p) = coord {
            plot(p.r, p.i, glyph);
        }
    }
    canvas
}

/// Writes the canvas for `maze` to `out`.
pub fn render<W: Write>(out: &mut W, maze: &MazeResult, goal: Coord) -> std::io::Result<()> {
    for row in canvas(maze, goal) {
        for glyph in row {
            queue!(out, style::Print(glyph))?;
        }
        queue!(out, style::Print("\r\n"))?;
    }
    out.flush()
}

/// One-line description of the maze, cut to fit the terminal.
pub fn summary_line(maze: &MazeResult, goal: Coord, goal_distance: Option<usize>) -> String {
    let line = format!(
        "{} maze, size {}: start {}, goal {}{}, farthest cell {} at depth {}",
        maze.shape(),
        maze.size(),
        maze.start(),
        goal,
        goal_distance.map_or(String::new(), |d| format!(" ({} steps)", d)),
        maze.end(),
        maze.max_distance()
    );
    let width = terminal::size().map_or(80, |(w, _)| w) as usize;
    line.unicode_truncate(width).0.to_string()
}
