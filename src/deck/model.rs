use std::{fs::File, io::BufReader, path::Path};

use crate::{
    deck::label::{CardJob, INDEX_PLACEHOLDER, format_label},
    foundation::core::{Canvas, IndexRange, Rgb8, TextOrigin},
    foundation::error::{CardError, CardResult},
};

/// Font file used when no override is given, resolved against the working directory.
pub const DEFAULT_FONT_SOURCE: &str = "LeckerliOne-Regular.otf";

/// Widest label ever needed: the digit count of `u32::MAX`.
pub const MAX_LABEL_WIDTH: usize = 10;

/// File name template used when no override is given.
pub const DEFAULT_FILE_TEMPLATE: &str = "card_{index}.png";

/// Every parameter of a card deck.
///
/// [`DeckSpec::default`] is the stock 33-card deck: `card_00.png` through `card_32.png`,
/// 500x707, magenta background, teal 380px labels at `(10, 70)`.
///
/// In JSON every field is optional and falls back to its default.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeckSpec {
    /// Output raster size.
    pub canvas: Canvas,
    /// Solid fill behind the label.
    pub background: Rgb8,
    /// Label color.
    pub foreground: Rgb8,
    /// Path to the font file (`.ttf`/`.otf`).
    pub font_source: String,
    /// Font size in pixels.
    pub font_size_px: f32,
    /// Where the label's first line box starts.
    pub text_origin: TextOrigin,
    /// Indices to render, ascending.
    pub indices: IndexRange,
    /// Label width in characters; shorter indices are zero-padded.
    pub label_width: usize,
    /// Output file name template containing one `{index}` placeholder.
    pub file_template: String,
}

impl Default for DeckSpec {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: [250, 20, 150],
            foreground: [40, 180, 180],
            font_source: DEFAULT_FONT_SOURCE.to_string(),
            font_size_px: 380.0,
            text_origin: TextOrigin::default(),
            indices: IndexRange::default(),
            label_width: 2,
            file_template: DEFAULT_FILE_TEMPLATE.to_string(),
        }
    }
}

impl DeckSpec {
    /// Parse and validate a deck from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> CardResult<Self> {
        let spec: DeckSpec = serde_json::from_reader(r)
            .map_err(|e| CardError::serde(format!("parse deck JSON: {e}")))?;
        spec.validate()?;
        Ok(spec)
    }

    /// Parse and validate a deck from a JSON string.
    pub fn from_json_str(s: &str) -> CardResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse and validate a deck from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CardError::serde(format!("open deck JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check that the parameters describe a renderable deck.
    pub fn validate(&self) -> CardResult<()> {
        self.canvas.surface_size()?;

        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(CardError::validation(
                "font_size_px must be finite and > 0",
            ));
        }
        if !self.text_origin.is_finite() {
            return Err(CardError::validation("text_origin must be finite"));
        }
        if self.font_source.trim().is_empty() {
            return Err(CardError::validation("font_source must be non-empty"));
        }

        if self.label_width == 0 || self.label_width > MAX_LABEL_WIDTH {
            return Err(CardError::validation(format!(
                "label_width must be in 1..={MAX_LABEL_WIDTH}"
            )));
        }
        if self.indices.start > self.indices.end {
            return Err(CardError::validation("indices start must be <= end"));
        }
        // Indices are ascending, so the last one has the most digits.
        if let Some(last) = self.indices.last() {
            let widest = format_label(last, 0).len();
            if widest > self.label_width {
                return Err(CardError::validation(format!(
                    "index {last} needs {widest} digits but label_width is {}",
                    self.label_width
                )));
            }
        }

        validate_file_template(&self.file_template)
    }

    /// Number of cards in the deck.
    pub fn card_count(&self) -> usize {
        self.indices.len() as usize
    }

    /// Card jobs in render order.
    pub fn cards(&self) -> impl Iterator<Item = CardJob> + '_ {
        self.indices
            .iter()
            .map(|i| CardJob::new(i, self.label_width, &self.file_template))
    }
}

fn validate_file_template(template: &str) -> CardResult<()> {
    match template.matches(INDEX_PLACEHOLDER).count() {
        1 => {}
        0 => {
            return Err(CardError::validation(
                "file_template must contain an {index} placeholder",
            ));
        }
        _ => {
            return Err(CardError::validation(
                "file_template must contain exactly one {index} placeholder",
            ));
        }
    }
    if template.contains(['/', '\\']) {
        return Err(CardError::validation(
            "file_template must be a bare file name",
        ));
    }
    if !template.to_ascii_lowercase().ends_with(".png") {
        return Err(CardError::validation("file_template must end in .png"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
