//! Populating the macOS `.iconset` directory.

use std::fs;
use std::path::PathBuf;

use restless_icons_core::{iconset_entries, ExportLayout, LayoutError};
use tracing::debug;

use crate::error::ExportError;

/// Copy rasters into the iconset directory under their `iconutil` names.
///
/// Files are copied byte-for-byte; nothing is re-encoded. Returns the written
/// paths in entry order.
pub fn populate_iconset(layout: &ExportLayout) -> crate::Result<Vec<PathBuf>> {
    let dir = layout.iconset_dir();
    let entries = iconset_entries(layout.iconset_base_sizes());
    let mut written = Vec::with_capacity(entries.len());

    for entry in entries {
        let size = entry.source_size().ok_or_else(|| LayoutError::SizeTooLarge {
            file_name: entry.file_name(),
            max: u32::MAX,
        })?;
        let src = layout.raster_path(size);
        let dst = dir.join(entry.file_name());

        fs::copy(&src, &dst).map_err(|source| {
            if src.is_file() {
                ExportError::Io {
                    path: dst.clone(),
                    source,
                }
            } else {
                ExportError::MissingRaster {
                    size,
                    path: src.clone(),
                    source,
                }
            }
        })?;

        debug!("Copied {} -> {}", src.display(), dst.display());
        written.push(dst);
    }

    Ok(written)
}
