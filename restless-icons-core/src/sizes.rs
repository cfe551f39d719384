//! Fixed size tables for the brand icon export.

/// Every pixel size the logo is rasterized at.
pub const RASTER_SIZES: [u32; 8] = [16, 32, 48, 64, 128, 256, 512, 1024];

/// Sizes embedded in the Windows ICO container, in directory order.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Base sizes of the macOS iconset. Each base `b` also gets an `@2x` entry
/// backed by the `2b` raster.
pub const ICONSET_BASE_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// Largest edge an ICO directory entry can declare (stored as 0 in the header).
pub const ICO_MAX_SIZE: u32 = 256;
