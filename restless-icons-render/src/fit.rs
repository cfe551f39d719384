//! Placing a document inside a square raster according to the root
//! element's `preserveAspectRatio`.

use resvg::tiny_skia::Transform;

/// Alignment along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Min,
    Mid,
    Max,
}

impl Align {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "Min" => Some(Self::Min),
            "Mid" => Some(Self::Mid),
            "Max" => Some(Self::Max),
            _ => None,
        }
    }

    /// Offset that places content inside `free` units of leftover space.
    fn offset(self, free: f32) -> f32 {
        match self {
            Self::Min => 0.0,
            Self::Mid => free / 2.0,
            Self::Max => free,
        }
    }
}

/// Parsed `preserveAspectRatio` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AspectRatio {
    /// `none`: each axis is scaled on its own.
    Stretch,
    /// One scale factor for both axes. `slice` covers the target and crops,
    /// otherwise the document is letterboxed.
    Uniform { x: Align, y: Align, slice: bool },
}

impl Default for AspectRatio {
    /// `xMidYMid meet`
    fn default() -> Self {
        Self::Uniform {
            x: Align::Mid,
            y: Align::Mid,
            slice: false,
        }
    }
}

impl AspectRatio {
    /// Parse an attribute value. Invalid values fall back to the default.
    pub fn parse(value: &str) -> Self {
        Self::try_parse(value).unwrap_or_default()
    }

    fn try_parse(value: &str) -> Option<Self> {
        let mut tokens = value.split_whitespace();
        let mut align = tokens.next()?;
        if align == "defer" {
            align = tokens.next()?;
        }

        let slice = match tokens.next() {
            None | Some("meet") => false,
            Some("slice") => true,
            Some(_) => return None,
        };
        if tokens.next().is_some() {
            return None;
        }

        if align == "none" {
            return Some(Self::Stretch);
        }
        let (x, y) = align.strip_prefix('x')?.split_once('Y')?;
        Some(Self::Uniform {
            x: Align::parse(x)?,
            y: Align::parse(y)?,
            slice,
        })
    }

    /// Transform mapping a `width`×`height` document onto a `size`×`size`
    /// raster.
    pub fn transform(self, width: f32, height: f32, size: u32) -> Transform {
        let size = size as f32;
        let (sx, sy) = (size / width, size / height);
        match self {
            Self::Stretch => Transform::from_scale(sx, sy),
            Self::Uniform { x, y, slice } => {
                let s = if slice { sx.max(sy) } else { sx.min(sy) };
                let tx = x.offset(size - width * s);
                let ty = y.offset(size - height * s);
                Transform::from_row(s, 0.0, 0.0, s, tx, ty)
            }
        }
    }
}
