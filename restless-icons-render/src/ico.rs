//! Windows ICO assembly from previously written rasters.

use std::fs;
use std::path::PathBuf;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::{ExtendedColorType, ImageFormat};
use restless_icons_core::ExportLayout;
use tracing::debug;

use crate::error::ExportError;

/// Build the ICO file from the rasters at `layout.ico_sizes()`.
///
/// The rasters must already exist on disk. Each one is re-read, converted to
/// RGBA8, and stored as a PNG-compressed frame, in ICO size order.
pub fn assemble_ico(layout: &ExportLayout) -> crate::Result<PathBuf> {
    let mut frames = Vec::with_capacity(layout.ico_sizes().len());

    for &size in layout.ico_sizes() {
        let path = layout.raster_path(size);
        let bytes = fs::read(&path).map_err(|source| ExportError::MissingRaster {
            size,
            path: path.clone(),
            source,
        })?;

        let rgba = image::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .map_err(|source| ExportError::Image {
                path: path.clone(),
                source,
            })?
            .to_rgba8();

        let (width, height) = rgba.dimensions();
        if width != size || height != size {
            return Err(ExportError::UnexpectedDimensions {
                path,
                width,
                height,
                expected: size,
            });
        }

        let frame = IcoFrame::as_png(rgba.as_raw(), width, height, ExtendedColorType::Rgba8)
            .map_err(|source| ExportError::Image {
                path: path.clone(),
                source,
            })?;
        frames.push(frame);
    }

    let ico_path = layout.ico_path();
    let mut out = Vec::new();
    IcoEncoder::new(&mut out)
        .encode_images(&frames)
        .map_err(|source| ExportError::Image {
            path: ico_path.clone(),
            source,
        })?;
    fs::write(&ico_path, &out).map_err(|source| ExportError::Io {
        path: ico_path.clone(),
        source,
    })?;

    debug!(
        "Wrote {} ({} frames: {:?})",
        ico_path.display(),
        frames.len(),
        layout.ico_sizes()
    );
    Ok(ico_path)
}
