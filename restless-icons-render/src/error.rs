use std::io;
use std::path::PathBuf;

use resvg::usvg;
use thiserror::Error;

/// Errors originating from the export pipeline. All of them are fatal.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot read source SVG {}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed SVG document")]
    Svg(#[from] usvg::Error),

    #[error("invalid raster dimensions: {width}×{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("missing {size}×{size} raster {}", path.display())]
    MissingRaster {
        size: u32,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("raster {} is {width}×{height}, expected {expected}×{expected}", path.display())]
    UnexpectedDimensions {
        path: PathBuf,
        width: u32,
        height: u32,
        expected: u32,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("PNG encoding failed")]
    PngEncode(#[from] png::EncodingError),

    #[error("image codec error on {}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Layout(#[from] restless_icons_core::LayoutError),
}
