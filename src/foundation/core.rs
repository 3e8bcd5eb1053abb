use crate::foundation::error::{CardError, CardResult};

pub use kurbo::{Affine, Rect, Vec2};

/// Three-channel 8-bit color, `[r, g, b]`.
pub type Rgb8 = [u8; 3];

/// Output raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 500,
            height: 707,
        }
    }
}

impl Canvas {
    /// Return `(width, height)` as `u16`, the surface size limit of the CPU rasterizer.
    pub fn surface_size(self) -> CardResult<(u16, u16)> {
        if self.width == 0 || self.height == 0 {
            return Err(CardError::validation("canvas width and height must be > 0"));
        }
        let w: u16 = self
            .width
            .try_into()
            .map_err(|_| CardError::validation("canvas width exceeds u16"))?;
        let h: u16 = self
            .height
            .try_into()
            .map_err(|_| CardError::validation("canvas height exceeds u16"))?;
        Ok((w, h))
    }

    /// Full-canvas rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Top-left anchor of a label's first line box: left edge and ascender line.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextOrigin {
    /// Horizontal offset from the canvas left edge.
    pub x: f32,
    /// Vertical offset from the canvas top edge.
    pub y: f32,
}

impl Default for TextOrigin {
    fn default() -> Self {
        Self { x: 10.0, y: 70.0 }
    }
}

impl TextOrigin {
    /// Translation that places a layout at this origin.
    pub fn to_affine(self) -> Affine {
        Affine::translate(Vec2::new(f64::from(self.x), f64::from(self.y)))
    }

    pub(crate) fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Half-open card index range `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IndexRange {
    /// Inclusive first index.
    pub start: u32,
    /// Exclusive end index.
    pub end: u32,
}

impl Default for IndexRange {
    fn default() -> Self {
        Self { start: 0, end: 33 }
    }
}

impl IndexRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: u32, end: u32) -> CardResult<Self> {
        if start > end {
            return Err(CardError::validation("IndexRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of indices in the range.
    pub fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Return `true` when the range has no indices.
    pub fn is_empty(self) -> bool {
        self.start >= self.end
    }

    /// Return `true` when `i` is inside `[start, end)`.
    pub fn contains(self, i: u32) -> bool {
        self.start <= i && i < self.end
    }

    /// Last index in the range, if any.
    pub fn last(self) -> Option<u32> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Ascending iterator over the indices.
    pub fn iter(self) -> std::ops::Range<u32> {
        self.start..self.end
    }
}

impl IntoIterator for IndexRange {
    type Item = u32;
    type IntoIter = std::ops::Range<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
