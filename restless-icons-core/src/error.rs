use thiserror::Error;

/// Errors raised when an export layout is internally inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("{list} size list is empty")]
    EmptySizeList { list: &'static str },

    #[error("{list} size list contains 0 (sizes must be > 0)")]
    ZeroSize { list: &'static str },

    #[error("{list} size list contains {size} more than once")]
    DuplicateSize { list: &'static str, size: u32 },

    #[error("ICO size {0}×{0} is not among the rasterized sizes")]
    IcoSizeNotRasterized(u32),

    #[error("ICO size {size}×{size} exceeds the format limit of {max}×{max}")]
    IcoSizeTooLarge { size: u32, max: u32 },

    #[error("iconset entry {file_name} needs a raster larger than {max}×{max}")]
    SizeTooLarge { file_name: String, max: u32 },

    #[error("iconset entry {file_name} needs a {size}×{size} raster, which is not rasterized")]
    IconsetSourceMissing { file_name: String, size: u32 },
}
