//! Naming rules for the macOS `.iconset` directory consumed by `iconutil`.

/// Display scale of an iconset entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// 1× display: the raster matches the nominal size.
    Standard,
    /// 2× (Retina) display: the raster is twice the nominal size.
    Retina,
}

impl Scale {
    pub fn factor(self) -> u32 {
        match self {
            Self::Standard => 1,
            Self::Retina => 2,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Retina => "@2x",
        }
    }
}

/// One file inside the iconset directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconsetEntry {
    /// Nominal (point) size the entry is declared as.
    pub base: u32,
    pub scale: Scale,
}

impl IconsetEntry {
    pub fn new(base: u32, scale: Scale) -> Self {
        Self { base, scale }
    }

    /// Pixel size of the raster backing this entry, or `None` if it does
    /// not fit in a `u32`.
    pub fn source_size(&self) -> Option<u32> {
        self.base.checked_mul(self.scale.factor())
    }

    /// `icon_<b>x<b>.png` or `icon_<b>x<b>@2x.png`.
    pub fn file_name(&self) -> String {
        format!(
            "icon_{0}x{0}{1}.png",
            self.base,
            self.scale.suffix()
        )
    }
}

/// Expand base sizes into iconset entries: the standard entry, then the
/// retina one, for each base in order.
pub fn iconset_entries(bases: &[u32]) -> Vec<IconsetEntry> {
    bases
        .iter()
        .flat_map(|&base| {
            [
                IconsetEntry::new(base, Scale::Standard),
                IconsetEntry::new(base, Scale::Retina),
            ]
        })
        .collect()
}
