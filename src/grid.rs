//! In-memory heightmap grid.

/// A single-channel heightmap with 32-bit float samples.
///
/// Samples are stored in row-major order: `height` rows of `width` columns.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Height values stored in row-major order.
    pub samples: Vec<f32>,
}

impl HeightGrid {
    /// Creates a grid from row-major samples.
    ///
    /// # Panics
    /// Panics if `samples.len()` does not equal `width * height`.
    pub fn new(width: usize, height: usize, samples: Vec<f32>) -> Self {
        assert_eq!(
            samples.len(),
            width * height,
            "sample count {} does not match dimensions {}x{}",
            samples.len(),
            width,
            height
        );
        Self {
            width,
            height,
            samples,
        }
    }

    /// Total number of samples the dimensions call for.
    pub fn expected_len(&self) -> usize {
        self.width * self.height
    }

    /// Returns the sample at column `x`, row `y`.
    pub fn sample(&self, x: usize, y: usize) -> f32 {
        self.samples[y * self.width + x]
    }
}
