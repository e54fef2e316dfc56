use std::time::{Duration, Instant};

use shapemaze::{Shape, analysis::active_cells, generate_maze, logging::init_logging};

fn main() -> std::io::Result<()> {
    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(20)
        .max(1);
    // Optional second argument: file for generator debug logs
    let _guard = args
        .next()
        .and_then(|path| init_logging(std::path::Path::new(&path)));

    for shape in Shape::ALL {
        let size = shape.size_bounds().max;
        let mut elapsed = Duration::ZERO;
        let mut cells = 0;
        let mut depth = 0;
        for seed in 0..num_iters {
            let started = Instant::now();
            let maze = generate_maze(size, shape, Some(seed));
            elapsed += started.elapsed();
            cells = active_cells(&maze);
            depth += maze.max_distance();
        }
        println!(
            "{:>8} size {:>3}: {:>6} cells, mean {:?} per maze, mean depth {}",
            shape,
            size,
            cells,
            elapsed / num_iters as u32,
            depth / num_iters as usize
        );
    }
    Ok(())
}
