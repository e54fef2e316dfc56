use rand::{Rng, SeedableRng, rngs::StdRng};

mod carve;
mod radial;
mod rectilinear;

pub use radial::generate_radial;
pub use rectilinear::generate_grid;

use crate::maze::{MazeResult, Shape};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of `shape` using `rng`.
///
/// For square and circle mazes `size` is the number of cells per side; for
/// triangle and polar mazes it is the number of rings. The generator does not
/// enforce the caller-side bounds in [`crate::config`]. Ring counts above
/// `u16::MAX` need [`generate_radial`] directly.
pub fn generate_with_rng<R: Rng>(size: u16, shape: Shape, rng: &mut R) -> MazeResult {
    match shape.side_multiplier() {
        Some(multiplier) => generate_radial(size as usize, multiplier, shape, rng),
        None => generate_grid(size, shape, rng),
    }
}

/// Generates a perfect maze, seeded when `seed` is given.
pub fn generate_maze(size: u16, shape: Shape, seed: Option<u64>) -> MazeResult {
    let mut rng = get_rng(seed);
    generate_with_rng(size, shape, &mut rng)
}
