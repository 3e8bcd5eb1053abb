use crate::deck::label::CardJob;
use crate::foundation::core::Canvas;
use crate::foundation::error::CardResult;
use crate::render::cpu::CardRaster;

/// Configuration provided to a [`CardSink`] before the first card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Raster size of every card in the deck.
    pub canvas: Canvas,
    /// Number of cards that will be pushed on success.
    pub card_count: usize,
}

/// Consumer of rendered cards.
///
/// Ordering contract: `push_card` is called in ascending index order. An error from any method
/// aborts the deck; cards already pushed are not revisited.
pub trait CardSink {
    /// Called once before any cards are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> CardResult<()>;
    /// Push one rendered card.
    fn push_card(&mut self, job: &CardJob, card: &CardRaster) -> CardResult<()>;
    /// Called once after the last card is pushed.
    fn end(&mut self) -> CardResult<()>;
}

/// In-memory sink for tests and previews.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    pub(crate) cards: Vec<(CardJob, CardRaster)>,
    finished: bool,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured cards in push order.
    pub fn cards(&self) -> &[(CardJob, CardRaster)] {
        &self.cards
    }

    /// Whether `end` has been called since the last `begin`.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl CardSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> CardResult<()> {
        self.cfg = Some(cfg);
        self.cards.clear();
        self.finished = false;
        Ok(())
    }

    fn push_card(&mut self, job: &CardJob, card: &CardRaster) -> CardResult<()> {
        self.cards.push((job.clone(), card.clone()));
        Ok(())
    }

    fn end(&mut self) -> CardResult<()> {
        self.finished = true;
        Ok(())
    }
}
