//! Godot `.tres` heightmap to OpenEXR converter.
//!
//! This crate extracts the RFLOAT image embedded in a Godot resource file
//! (`"width"`, `"height"`, and a `PackedByteArray` of little-endian float32
//! bytes) and writes it as a single-channel 32-bit float `.exr` image, so
//! the heightmap can be edited in an image editor like GIMP.

pub mod export;
pub mod extract;
pub mod grid;

pub use export::{export_grid_exr, ExrExportError, HEIGHT_CHANNEL};
pub use extract::{extract_height_grid, parse_resource_text, ExtractError};
pub use grid::HeightGrid;
