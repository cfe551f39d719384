//! The end-to-end export: load, rasterize, ICO, iconset.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use rayon::prelude::*;
use restless_icons_core::ExportLayout;
use tracing::{debug, info};

use crate::error::ExportError;
use crate::export::export_png;
use crate::ico::assemble_ico;
use crate::iconset::populate_iconset;
use crate::svg::SvgSource;

/// What a successful export wrote.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub exports_dir: PathBuf,
    /// Raster paths in `layout.raster_sizes()` order.
    pub rasters: Vec<PathBuf>,
    pub ico: PathBuf,
    /// Iconset files in entry order.
    pub iconset: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Run the whole export for `layout`.
///
/// Fail-fast: the first error aborts the remaining steps and files written so
/// far stay in place. A missing or malformed source aborts before any output
/// directory is created.
pub fn export_icons(layout: &ExportLayout) -> crate::Result<ExportSummary> {
    let start = Instant::now();
    layout.validate()?;

    let source_path = layout.source_path();
    let source = SvgSource::load(&source_path)?;
    info!("Exporting {}", source_path.display());

    for dir in [layout.png_dir(), layout.ico_dir(), layout.iconset_dir()] {
        fs::create_dir_all(&dir).map_err(|source| ExportError::Io {
            path: dir.clone(),
            source,
        })?;
    }

    let rasters = rasterize_all(&source, layout)?;
    info!("Rasterized {} sizes {:?}", rasters.len(), layout.raster_sizes());

    // Both steps below read the rasters back from disk.
    let ico = assemble_ico(layout)?;
    info!("Assembled {}", ico.display());

    let iconset = populate_iconset(layout)?;
    info!(
        "Populated {} with {} files",
        layout.iconset_dir().display(),
        iconset.len()
    );

    let elapsed = start.elapsed();
    debug!("Export finished in {elapsed:.2?}");

    Ok(ExportSummary {
        exports_dir: layout.exports_dir(),
        rasters,
        ico,
        iconset,
        elapsed,
    })
}

/// Render and write every raster size. Sizes are independent, so they are
/// processed on the rayon pool; the call returns only once all are written.
fn rasterize_all(source: &SvgSource, layout: &ExportLayout) -> crate::Result<Vec<PathBuf>> {
    layout
        .raster_sizes()
        .par_iter()
        .map(|&size| -> crate::Result<PathBuf> {
            let buffer = source.rasterize(size)?;
            let path = layout.raster_path(size);
            export_png(&buffer, &path)?;
            Ok(path)
        })
        .collect()
}
