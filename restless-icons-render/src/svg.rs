//! Loading and rasterizing the source logo.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use resvg::{tiny_skia, usvg};
use tracing::debug;

use crate::buffer::RasterBuffer;
use crate::error::ExportError;
use crate::fit::AspectRatio;

/// A parsed SVG document, ready to be rendered at any square size.
pub struct SvgSource {
    tree: usvg::Tree,
    aspect: AspectRatio,
}

impl SvgSource {
    /// Read and parse the SVG at `path`. Relative `href`s resolve against the
    /// file's directory.
    pub fn load(path: &Path) -> crate::Result<Self> {
        let data = fs::read(path).map_err(|source| ExportError::Source {
            path: path.to_path_buf(),
            source,
        })?;
        let resources_dir = fs::canonicalize(path)
            .ok()
            .and_then(|p| p.parent().map(Path::to_path_buf));

        let svg = Self::from_data(&data, resources_dir)?;
        let (w, h) = svg.intrinsic_size();
        debug!("Loaded {} ({w}×{h} user units)", path.display());
        Ok(svg)
    }

    /// Parse an in-memory SVG document. The data must be UTF-8 text;
    /// compressed (svgz) input is rejected.
    pub fn from_data(data: &[u8], resources_dir: Option<PathBuf>) -> crate::Result<Self> {
        let text = std::str::from_utf8(data).map_err(|_| usvg::Error::NotAnUtf8Str)?;
        let xml_opt = usvg::roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = usvg::roxmltree::Document::parse_with_options(text, xml_opt)
            .map_err(usvg::Error::ParsingFailed)?;

        // usvg resolves the viewBox internally but does not expose the root
        // alignment, which still governs the fit into the output square.
        let aspect = doc
            .root_element()
            .attribute("preserveAspectRatio")
            .map(AspectRatio::parse)
            .unwrap_or_default();

        let mut opt = usvg::Options::default();
        opt.resources_dir = resources_dir;
        // Text has to be converted to paths during parsing.
        Arc::make_mut(&mut opt.fontdb).load_system_fonts();

        let tree = usvg::Tree::from_xmltree(&doc, &opt)?;
        Ok(Self { tree, aspect })
    }

    /// Root `preserveAspectRatio`, defaulting to `xMidYMid meet`.
    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect
    }

    /// Document size in SVG user units.
    pub fn intrinsic_size(&self) -> (f32, f32) {
        let size = self.tree.size();
        (size.width(), size.height())
    }

    /// Render a `size`×`size` raster. A non-square document is letterboxed
    /// (or cropped, or stretched) as its root `preserveAspectRatio` says.
    pub fn rasterize(&self, size: u32) -> crate::Result<RasterBuffer> {
        let mut pixmap = tiny_skia::Pixmap::new(size, size).ok_or(
            ExportError::InvalidDimensions {
                width: size,
                height: size,
            },
        )?;

        let (w, h) = self.intrinsic_size();
        let transform = self.aspect.transform(w, h, size);
        resvg::render(&self.tree, transform, &mut pixmap.as_mut());

        Ok(RasterBuffer::from_pixmap(&pixmap))
    }
}
