use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    foundation::core::Rgb8,
    foundation::error::{CardError, CardResult},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// RGBA8 brush color carried through Parley text layout.
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl TextBrushRgba8 {
    /// Fully opaque brush from a three-channel color.
    pub fn opaque(rgb: Rgb8) -> Self {
        Self {
            r: rgb[0],
            g: rgb[1],
            b: rgb[2],
            a: 255,
        }
    }
}

/// Font loaded from disk, validated, and ready for layout and rasterization.
///
/// The font is registered with Parley exactly once; renderers start from a copy of that
/// registered context.
#[derive(Clone)]
pub struct PreparedFont {
    source: PathBuf,
    bytes: Arc<Vec<u8>>,
    family_name: String,
    font_ctx: parley::FontContext,
    blob: vello_cpu::peniko::Blob<u8>,
}

impl std::fmt::Debug for PreparedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreparedFont")
            .field("source", &self.source)
            .field("bytes_len", &self.bytes.len())
            .field("family_name", &self.family_name)
            .finish()
    }
}

impl PreparedFont {
    /// Read a font file and resolve its primary family.
    ///
    /// There is no fallback: a missing file or one without a usable face is an error.
    #[tracing::instrument]
    pub fn load(path: &Path) -> CardResult<Self> {
        let bytes = std::fs::read(path)
            .map_err(|e| CardError::font(format!("read font '{}': {e}", path.display())))?;
        let font = Self::from_bytes(bytes)?;
        tracing::debug!(family = %font.family_name, "loaded font");
        Ok(Self {
            source: path.to_path_buf(),
            ..font
        })
    }

    /// Build from in-memory font bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> CardResult<Self> {
        if bytes.is_empty() {
            return Err(CardError::font("font data is empty"));
        }

        let mut engine = TextLayoutEngine::new();
        let family_name = engine.register_font(&bytes)?;

        let bytes = Arc::new(bytes);
        let blob = vello_cpu::peniko::Blob::from(bytes.as_ref().clone());
        Ok(Self {
            source: PathBuf::new(),
            bytes,
            family_name,
            font_ctx: engine.font_ctx,
            blob,
        })
    }

    /// Path the font was loaded from; empty for in-memory fonts.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Raw font file bytes.
    pub fn bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Primary family name declared by the font.
    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Rasterizer handle for face `index` of this font file (non-zero only for collections).
    pub(crate) fn raster_font(&self, index: u32) -> vello_cpu::peniko::FontData {
        vello_cpu::peniko::FontData::new(self.blob.clone(), index)
    }
}

/// Stateful helper for building Parley text layouts from raw font bytes.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl Default for TextLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TextLayoutEngine {
    /// Construct a new layout engine with fresh Parley contexts.
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Layout engine whose font context already holds `font`.
    pub fn for_font(font: &PreparedFont) -> Self {
        Self {
            font_ctx: font.font_ctx.clone(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Register font bytes and return the primary family name.
    pub fn register_font(&mut self, font_bytes: &[u8]) -> CardResult<String> {
        let families = self
            .font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| CardError::font("no font families registered from font bytes"))?;

        let family_name = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| CardError::font("registered font family has no name"))?
            .to_string();
        Ok(family_name)
    }

    /// Shape `text` as a single unwrapped line in the given registered family.
    pub fn layout_label(
        &mut self,
        text: &str,
        family_name: &str,
        size_px: f32,
        brush: TextBrushRgba8,
    ) -> CardResult<parley::Layout<TextBrushRgba8>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(CardError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family_name.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
