//! PNG encoding for rendered rasters.

use std::path::Path;

use tracing::debug;

use crate::buffer::RasterBuffer;
use crate::error::ExportError;

/// Value of the `Software` tEXt chunk embedded in every raster.
const SOFTWARE: &str = "Restless";

/// Encode a raster as an 8-bit RGBA PNG.
///
/// Nothing time-dependent is written, so identical buffers always produce
/// identical bytes.
pub fn encode_png(buffer: &RasterBuffer) -> crate::Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, buffer.width, buffer.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        encoder.add_text_chunk("Software".to_string(), SOFTWARE.to_string())?;

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&buffer.pixels)?;
        writer.finish()?;
    }
    Ok(out)
}

/// Write a raster to `path` as a PNG, replacing any existing file.
pub fn export_png(buffer: &RasterBuffer, path: &Path) -> crate::Result<()> {
    let bytes = encode_png(buffer)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(
        "Exported PNG {}x{} to {}",
        buffer.width,
        buffer.height,
        path.display()
    );
    Ok(())
}
