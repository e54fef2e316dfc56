//! Caller-side generation settings.
//!
//! The generators accept any size. These bounds are the range the bundled
//! front ends offer per shape, and requests are clamped into it before
//! generating.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use rand::rngs::StdRng;

use crate::{generators::get_rng, goal::Difficulty, maze::Shape};

/// Inclusive range of sizes offered for a shape.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBounds {
    pub min: u16,
    pub max: u16,
}

impl SizeBounds {
    pub fn clamp(self, size: u16) -> u16 {
        size.clamp(self.min, self.max)
    }

    pub fn contains(self, size: u16) -> bool {
        (self.min..=self.max).contains(&size)
    }
}

impl Shape {
    /// Sizes offered for this shape: cells per side for square and circle,
    /// rings for triangle and polar.
    pub fn size_bounds(self) -> SizeBounds {
        match self {
            Shape::Square | Shape::Circle => SizeBounds { min: 10, max: 100 },
            Shape::Triangle => SizeBounds { min: 15, max: 50 },
            Shape::Polar => SizeBounds { min: 5, max: 60 },
        }
    }
}

/// Everything needed to produce one maze.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub size: u16,
    pub shape: Shape,
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible mazes, OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            size: 30,
            shape: Shape::Square,
            difficulty: Difficulty::Easy,
            seed: None,
        }
    }
}

impl MazeConfig {
    /// The same config with `size` clamped into the shape's bounds.
    pub fn clamped(self) -> Self {
        let size = self.shape.size_bounds().clamp(self.size);
        if size != self.size {
            tracing::debug!(
                "[config] clamped {} size {} to {}",
                self.shape,
                self.size,
                size
            );
        }
        Self { size, ..self }
    }

    pub fn rng(&self) -> StdRng {
        get_rng(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_in_bounds() {
        let config = MazeConfig::default();
        assert!(config.shape.size_bounds().contains(config.size));
        assert_eq!(config.clamped(), config);
    }

    #[test]
    fn test_clamp_per_shape() {
        let clamp = |shape: Shape, size: u16| {
            let config = MazeConfig {
                size,
                shape,
                ..Default::default()
            };
            config.clamped().size
        };
        assert_eq!(clamp(Shape::Square, 3), 10);
        assert_eq!(clamp(Shape::Circle, 500), 100);
        assert_eq!(clamp(Shape::Triangle, 5), 15);
        assert_eq!(clamp(Shape::Triangle, 51), 50);
        assert_eq!(clamp(Shape::Polar, 0), 5);
        assert_eq!(clamp(Shape::Polar, 60), 60);
    }
}
