pub mod error;
pub mod iconset;
pub mod layout;
pub mod sizes;

// Re-export primary types for convenience.
pub use error::LayoutError;
pub use iconset::{iconset_entries, IconsetEntry, Scale};
pub use layout::ExportLayout;
pub use sizes::{ICONSET_BASE_SIZES, ICO_MAX_SIZE, ICO_SIZES, RASTER_SIZES};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, LayoutError>;
