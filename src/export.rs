//! OpenEXR export (single-channel, float).
//!
//! Writes the heightmap as one full-frame `"R"` channel of 32-bit float
//! samples, so the values survive editing round-trips without quantization.

use std::path::Path;

use exr::image::{AnyChannel, AnyChannels, FlatSamples, Image, Layer};
use exr::meta::header::LayerAttributes;
use exr::prelude::{Encoding, WritableImage};
use thiserror::Error;

use crate::grid::HeightGrid;

/// Name of the single output channel.
pub const HEIGHT_CHANNEL: &str = "R";

/// Errors that can occur during EXR export.
#[derive(Error, Debug)]
pub enum ExrExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("IO / EXR error: {0}")]
    Exr(#[from] exr::error::Error),
    #[error("Invalid image dimensions: {width}x{height}")]
    EmptyImage { width: usize, height: usize },
    #[error("Invalid channel data length for '{name}': got {got}, expected {expected}")]
    InvalidChannelLength {
        name: &'static str,
        got: usize,
        expected: usize,
    },
}

/// Writes a heightmap grid to `path` as a single-channel float EXR.
///
/// The output has exactly one channel, [`HEIGHT_CHANNEL`], with the grid's
/// dimensions and the sample values unchanged, in row-major order.
pub fn export_grid_exr(grid: &HeightGrid, path: &Path) -> Result<(), ExrExportError> {
    if grid.width == 0 || grid.height == 0 {
        return Err(ExrExportError::EmptyImage {
            width: grid.width,
            height: grid.height,
        });
    }
    if grid.samples.len() != grid.expected_len() {
        return Err(ExrExportError::InvalidChannelLength {
            name: HEIGHT_CHANNEL,
            got: grid.samples.len(),
            expected: grid.expected_len(),
        });
    }

    let channel = AnyChannel::new(HEIGHT_CHANNEL, FlatSamples::F32(grid.samples.clone()));
    let channels = AnyChannels::sort(vec![channel].into());

    let layer = Layer::new(
        (grid.width, grid.height),
        LayerAttributes::named("heightmap"),
        Encoding::FAST_LOSSLESS,
        channels,
    );

    Image::from_layer(layer).write().to_file(path)?;
    Ok(())
}
