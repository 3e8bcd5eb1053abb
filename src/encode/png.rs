use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    deck::label::CardJob,
    encode::sink::{CardSink, SinkConfig},
    foundation::error::{CardError, CardResult},
    render::cpu::CardRaster,
};

/// Write `card` to `path` as an 8-bit RGB PNG, replacing any existing file.
pub fn write_card_png(path: &Path, card: &CardRaster) -> CardResult<()> {
    let expected = card.width as usize * card.height as usize * 3;
    if card.rgb8.len() != expected {
        return Err(CardError::encode(format!(
            "card byte length {} does not match {}x{} RGB",
            card.rgb8.len(),
            card.width,
            card.height
        )));
    }

    image::save_buffer_with_format(
        path,
        &card.rgb8,
        card.width,
        card.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| CardError::encode(format!("write png '{}': {e}", path.display())))
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> CardResult<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

/// Sink that writes each card to `<out_dir>/<file_name>`.
///
/// The directory must already exist.
#[derive(Debug)]
pub struct PngDirSink {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    /// Sink writing into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    /// Output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Paths written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Consume the sink and return the written paths.
    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl CardSink for PngDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> CardResult<()> {
        self.written.clear();
        self.written.reserve(cfg.card_count);
        Ok(())
    }

    fn push_card(&mut self, job: &CardJob, card: &CardRaster) -> CardResult<()> {
        let path = self.out_dir.join(&job.file_name);
        write_card_png(&path, card)?;
        tracing::debug!(index = job.index, path = %path.display(), "wrote card");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> CardResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
