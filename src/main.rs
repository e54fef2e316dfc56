use std::{io::Write, path::PathBuf};

use clap::Parser;
use crossterm::style::{Color, Stylize};

use shapemaze::{
    Difficulty, MazeConfig, Session, Shape, analysis::distances_from_start, logging::init_logging,
    preview,
};

/// Generate a perfect maze and preview it in the terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Cells per side for square and circle mazes, rings for triangle and polar
    #[arg(short, long, default_value_t = 30)]
    size: u16,

    /// square, circle, triangle or polar. Anything else is a square
    #[arg(long, default_value = "square")]
    shape: String,

    /// Put the goal on the cell farthest from the start
    #[arg(long)]
    hard: bool,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Only print the summary line
    #[arg(long)]
    no_preview: bool,
}

impl Args {
    fn config(&self) -> MazeConfig {
        MazeConfig {
            size: self.size,
            shape: Shape::from(self.shape.as_str()),
            difficulty: if self.hard {
                Difficulty::Hard
            } else {
                Difficulty::Easy
            },
            seed: self.seed,
        }
        .clamped()
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    let _guard = args.log_file.as_deref().and_then(init_logging);

    let config = args.config();
    if config.size != args.size {
        eprintln!(
            "Size {} is outside the {} range, using {}.",
            args.size, config.shape, config.size
        );
    }

    let session = Session::generate(&config, &mut config.rng());
    tracing::info!(
        "[main] generated {} maze of size {}, goal {}",
        session.maze.shape(),
        session.size,
        session.goal
    );

    let mut stdout = std::io::stdout();
    if !args.no_preview {
        preview::render(&mut stdout, &session.maze, session.goal)?;
    }

    let goal_distance = distances_from_start(&session.maze)
        .get(&session.goal)
        .copied();
    let summary = preview::summary_line(&session.maze, session.goal, goal_distance);
    writeln!(stdout, "{}", summary.with(Color::Yellow))?;
    Ok(())
}
