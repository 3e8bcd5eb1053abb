use std::path::{Path, PathBuf};

use crate::{
    assets::font::PreparedFont,
    deck::label::CardJob,
    deck::model::DeckSpec,
    encode::png::PngDirSink,
    encode::sink::{CardSink, SinkConfig},
    foundation::error::{CardError, CardResult},
    render::cpu::{CardRaster, CardRenderer},
};

/// Outcome of a completed deck run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckReport {
    /// Files written, in index order.
    pub written: Vec<PathBuf>,
    /// Family name of the font the labels were drawn with.
    pub font_family: String,
}

/// Counters from [`render_deck`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Cards the deck describes.
    pub cards_total: u64,
    /// Cards rendered and accepted by the sink.
    pub cards_written: u64,
}

/// Render the single card for `index` in memory.
///
/// `index` does not have to lie inside `spec.indices`.
#[tracing::instrument(skip(spec, font))]
pub fn render_card(spec: &DeckSpec, font: &PreparedFont, index: u32) -> CardResult<CardRaster> {
    spec.validate()?;
    let job = CardJob::new(index, spec.label_width, &spec.file_template);
    if job.label.len() != spec.label_width {
        return Err(CardError::validation(format!(
            "index {index} does not fit label_width {}",
            spec.label_width
        )));
    }
    let mut renderer = CardRenderer::new(spec, font)?;
    renderer.render_label(&job.label)
}

/// Render every card of `spec` in ascending index order and push each into `sink`.
///
/// The first failure aborts the run; cards pushed before it stay with the sink.
pub fn render_deck(
    spec: &DeckSpec,
    font: &PreparedFont,
    sink: &mut dyn CardSink,
) -> CardResult<RenderStats> {
    spec.validate()?;
    let mut renderer = CardRenderer::new(spec, font)?;

    let mut stats = RenderStats {
        cards_total: spec.card_count() as u64,
        cards_written: 0,
    };
    sink.begin(SinkConfig {
        canvas: spec.canvas,
        card_count: spec.card_count(),
    })?;
    for job in spec.cards() {
        let card = renderer.render_label(&job.label)?;
        sink.push_card(&job, &card)?;
        stats.cards_written += 1;
    }
    sink.end()?;

    Ok(stats)
}

/// Generate the full deck as PNG files in `out_dir`.
///
/// The font is loaded before anything is written, so a missing font leaves `out_dir` untouched.
/// Existing files with the same names are overwritten.
#[tracing::instrument(skip(spec), fields(font = %spec.font_source, cards = spec.card_count()))]
pub fn generate_deck(spec: &DeckSpec, out_dir: &Path) -> CardResult<DeckReport> {
    spec.validate()?;
    let font = PreparedFont::load(Path::new(&spec.font_source))?;
    write_deck(spec, &font, out_dir)
}

/// Write the full deck as PNG files in `out_dir` using an already loaded font.
pub fn write_deck(
    spec: &DeckSpec,
    font: &PreparedFont,
    out_dir: &Path,
) -> CardResult<DeckReport> {
    let mut sink = PngDirSink::new(out_dir);
    let stats = render_deck(spec, font, &mut sink)?;
    tracing::info!(
        written = stats.cards_written,
        family = font.family_name(),
        out_dir = %out_dir.display(),
        "deck complete"
    );

    Ok(DeckReport {
        written: sink.into_written(),
        font_family: font.family_name().to_string(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
