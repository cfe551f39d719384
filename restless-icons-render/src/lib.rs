pub mod buffer;
pub mod error;
pub mod export;
pub mod fit;
pub mod ico;
pub mod iconset;
pub mod pipeline;
pub mod svg;

pub use buffer::RasterBuffer;
pub use error::ExportError;
pub use export::{encode_png, export_png};
pub use fit::{Align, AspectRatio};
pub use ico::assemble_ico;
pub use iconset::populate_iconset;
pub use pipeline::{export_icons, ExportSummary};
pub use svg::SvgSource;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, ExportError>;
