//! numcards renders a deck of numbered card images.
//!
//! Each card is a solid canvas with a zero-padded index (`00`, `01`, ... `32`) drawn on it in a
//! single font, saved as an RGB PNG whose file name carries the same index.
//!
//! # Pipeline overview
//!
//! 1. **Describe**: a [`DeckSpec`] holds every parameter; [`DeckSpec::default`] is the stock deck.
//! 2. **Load**: [`PreparedFont::load`] reads and validates the font before any output exists.
//! 3. **Render**: [`CardRenderer`] shapes the label with Parley and rasterizes with `vello_cpu`.
//! 4. **Write**: a [`CardSink`] receives cards in index order; [`PngDirSink`] writes PNG files.
//!
//! [`generate_deck`] runs all four steps for a directory.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod deck;
/// Card output sinks.
pub mod encode;
mod foundation;
mod render;

pub use assets::font::{PreparedFont, TextBrushRgba8, TextLayoutEngine};
pub use deck::label::{CardJob, INDEX_PLACEHOLDER, card_file_name, format_label};
pub use deck::model::{DEFAULT_FILE_TEMPLATE, DEFAULT_FONT_SOURCE, DeckSpec, MAX_LABEL_WIDTH};
pub use encode::png::{PngDirSink, ensure_dir, write_card_png};
pub use encode::sink::{CardSink, InMemorySink, SinkConfig};
pub use foundation::core::{Canvas, IndexRange, Rgb8, TextOrigin};
pub use foundation::error::{CardError, CardResult};
pub use render::cpu::{CardRaster, CardRenderer};
pub use render::pipeline::{
    DeckReport, RenderStats, generate_deck, render_card, render_deck, write_deck,
};
