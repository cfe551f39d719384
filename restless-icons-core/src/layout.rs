use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::LayoutError;
use crate::iconset::iconset_entries;
use crate::sizes::{ICONSET_BASE_SIZES, ICO_MAX_SIZE, ICO_SIZES, RASTER_SIZES};

/// Logo document, relative to the project root.
const SOURCE_SVG: &str = "assets/brand/logo/restless_logo_B.svg";
/// Root of every generated artifact, relative to the project root.
const EXPORTS_DIR: &str = "assets/brand/logo/exports";
/// File stem shared by all rasters: `<stem>_<size>.png`.
const RASTER_STEM: &str = "restless_logo_B";
const ICO_FILE_NAME: &str = "restless.ico";
const ICONSET_DIR_NAME: &str = "macos.iconset";

/// Every path the export reads or writes, anchored at a project root.
///
/// The filesystem layout is fixed; only the size tables can be overridden,
/// and only by library callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportLayout {
    root: PathBuf,
    raster_sizes: Vec<u32>,
    ico_sizes: Vec<u32>,
    iconset_base_sizes: Vec<u32>,
}

impl ExportLayout {
    /// The standard layout under `root` with the default size tables.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            raster_sizes: RASTER_SIZES.to_vec(),
            ico_sizes: ICO_SIZES.to_vec(),
            iconset_base_sizes: ICONSET_BASE_SIZES.to_vec(),
        }
    }

    pub fn with_raster_sizes(mut self, sizes: &[u32]) -> Self {
        self.raster_sizes = sizes.to_vec();
        self
    }

    pub fn with_ico_sizes(mut self, sizes: &[u32]) -> Self {
        self.ico_sizes = sizes.to_vec();
        self
    }

    pub fn with_iconset_base_sizes(mut self, sizes: &[u32]) -> Self {
        self.iconset_base_sizes = sizes.to_vec();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn source_path(&self) -> PathBuf {
        self.root.join(SOURCE_SVG)
    }

    pub fn exports_dir(&self) -> PathBuf {
        self.root.join(EXPORTS_DIR)
    }

    pub fn png_dir(&self) -> PathBuf {
        self.exports_dir().join("png")
    }

    pub fn ico_dir(&self) -> PathBuf {
        self.exports_dir().join("ico")
    }

    pub fn iconset_dir(&self) -> PathBuf {
        self.exports_dir().join(ICONSET_DIR_NAME)
    }

    pub fn ico_path(&self) -> PathBuf {
        self.ico_dir().join(ICO_FILE_NAME)
    }

    /// `restless_logo_B_<size>.png`
    pub fn raster_file_name(size: u32) -> String {
        format!("{RASTER_STEM}_{size}.png")
    }

    pub fn raster_path(&self, size: u32) -> PathBuf {
        self.png_dir().join(Self::raster_file_name(size))
    }

    pub fn raster_sizes(&self) -> &[u32] {
        &self.raster_sizes
    }

    pub fn ico_sizes(&self) -> &[u32] {
        &self.ico_sizes
    }

    pub fn iconset_base_sizes(&self) -> &[u32] {
        &self.iconset_base_sizes
    }

    /// Check that the ICO and iconset steps only consume rasters the
    /// rasterization step produces.
    pub fn validate(&self) -> crate::Result<()> {
        check_list("raster", &self.raster_sizes)?;
        check_list("ICO", &self.ico_sizes)?;
        check_list("iconset", &self.iconset_base_sizes)?;

        for &size in &self.ico_sizes {
            if size > ICO_MAX_SIZE {
                return Err(LayoutError::IcoSizeTooLarge {
                    size,
                    max: ICO_MAX_SIZE,
                });
            }
            if !self.raster_sizes.contains(&size) {
                return Err(LayoutError::IcoSizeNotRasterized(size));
            }
        }

        for entry in iconset_entries(&self.iconset_base_sizes) {
            let size = entry.source_size().ok_or_else(|| LayoutError::SizeTooLarge {
                file_name: entry.file_name(),
                max: u32::MAX,
            })?;
            if !self.raster_sizes.contains(&size) {
                return Err(LayoutError::IconsetSourceMissing {
                    file_name: entry.file_name(),
                    size,
                });
            }
        }

        debug!(
            "Layout OK: {} rasters, {} ICO frames, {} iconset bases under {}",
            self.raster_sizes.len(),
            self.ico_sizes.len(),
            self.iconset_base_sizes.len(),
            self.root.display()
        );
        Ok(())
    }
}

fn check_list(list: &'static str, sizes: &[u32]) -> crate::Result<()> {
    if sizes.is_empty() {
        return Err(LayoutError::EmptySizeList { list });
    }
    let mut seen = HashSet::with_capacity(sizes.len());
    for &size in sizes {
        if size == 0 {
            return Err(LayoutError::ZeroSize { list });
        }
        if !seen.insert(size) {
            return Err(LayoutError::DuplicateSize { list, size });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout_is_valid() {
        ExportLayout::new("/project").validate().unwrap();
    }

    #[test]
    fn paths_follow_fixed_layout() {
        let layout = ExportLayout::new("/project");
        assert_eq!(
            layout.source_path(),
            Path::new("/project/assets/brand/logo/restless_logo_B.svg")
        );
        assert_eq!(
            layout.raster_path(64),
            Path::new("/project/assets/brand/logo/exports/png/restless_logo_B_64.png")
        );
        assert_eq!(
            layout.ico_path(),
            Path::new("/project/assets/brand/logo/exports/ico/restless.ico")
        );
        assert_eq!(
            layout.iconset_dir(),
            Path::new("/project/assets/brand/logo/exports/macos.iconset")
        );
    }

    #[test]
    fn rejects_ico_size_without_raster() {
        let layout = ExportLayout::new("/p")
            .with_raster_sizes(&[16, 32, 64])
            .with_ico_sizes(&[16, 48])
            .with_iconset_base_sizes(&[16, 32]);
        assert_eq!(layout.validate(), Err(LayoutError::IcoSizeNotRasterized(48)));
    }

    #[test]
    fn rejects_ico_size_above_limit() {
        let layout = ExportLayout::new("/p").with_ico_sizes(&[16, 512]);
        assert_eq!(
            layout.validate(),
            Err(LayoutError::IcoSizeTooLarge { size: 512, max: 256 })
        );
    }

    #[test]
    fn rejects_iconset_without_retina_source() {
        let layout = ExportLayout::new("/p")
            .with_raster_sizes(&[16, 32])
            .with_ico_sizes(&[16])
            .with_iconset_base_sizes(&[32]);
        assert_eq!(
            layout.validate(),
            Err(LayoutError::IconsetSourceMissing {
                file_name: "icon_32x32@2x.png".into(),
                size: 64,
            })
        );
    }

    #[test]
    fn rejects_iconset_base_whose_retina_size_overflows() {
        let huge = u32::MAX / 2 + 1;
        let layout = ExportLayout::new("/p")
            .with_raster_sizes(&[16, huge])
            .with_ico_sizes(&[16])
            .with_iconset_base_sizes(&[huge]);
        assert_eq!(
            layout.validate(),
            Err(LayoutError::SizeTooLarge {
                file_name: format!("icon_{huge}x{huge}@2x.png"),
                max: u32::MAX,
            })
        );
    }

    #[test]
    fn rejects_degenerate_lists() {
        let empty = ExportLayout::new("/p").with_raster_sizes(&[]);
        assert_eq!(
            empty.validate(),
            Err(LayoutError::EmptySizeList { list: "raster" })
        );

        let zero = ExportLayout::new("/p").with_ico_sizes(&[0, 16]);
        assert_eq!(zero.validate(), Err(LayoutError::ZeroSize { list: "ICO" }));

        let dup = ExportLayout::new("/p").with_iconset_base_sizes(&[16, 16]);
        assert_eq!(
            dup.validate(),
            Err(LayoutError::DuplicateSize {
                list: "iconset",
                size: 16
            })
        );
    }
}
