use crate::encode::sink::InMemorySink;

use super::*;

const TEST_FONT: &str = "tests/data/fonts/DejaVuSans.ttf";

fn small_spec(start: u32, end: u32) -> DeckSpec {
    DeckSpec {
        canvas: crate::foundation::core::Canvas {
            width: 120,
            height: 90,
        },
        font_size_px: 48.0,
        text_origin: crate::foundation::core::TextOrigin { x: 4.0, y: 8.0 },
        font_source: TEST_FONT.to_string(),
        indices: crate::foundation::core::IndexRange { start, end },
        ..DeckSpec::default()
    }
}

fn test_font() -> PreparedFont {
    PreparedFont::load(Path::new(TEST_FONT)).unwrap()
}

struct FailAt {
    inner: InMemorySink,
    fail_index: u32,
}

impl CardSink for FailAt {
    fn begin(&mut self, cfg: SinkConfig) -> CardResult<()> {
        self.inner.begin(cfg)
    }

    fn push_card(&mut self, job: &CardJob, card: &CardRaster) -> CardResult<()> {
        if job.index == self.fail_index {
            return Err(CardError::encode("disk full"));
        }
        self.inner.push_card(job, card)
    }

    fn end(&mut self) -> CardResult<()> {
        self.inner.end()
    }
}

#[test]
fn render_deck_pushes_every_card_in_order() {
    let spec = small_spec(0, 12);
    let mut sink = InMemorySink::new();
    let stats = render_deck(&spec, &test_font(), &mut sink).unwrap();

    assert_eq!(
        stats,
        RenderStats {
            cards_total: 12,
            cards_written: 12
        }
    );
    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().card_count, 12);

    let labels: Vec<&str> = sink.cards().iter().map(|(j, _)| j.label.as_str()).collect();
    assert_eq!(
        labels,
        ["00", "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11"]
    );
    for (_, card) in sink.cards() {
        assert_eq!((card.width, card.height), (120, 90));
        assert_eq!(card.pixel(119, 89), Some([250, 20, 150]));
    }
}

#[test]
fn sink_failure_aborts_remaining_cards() {
    let spec = small_spec(0, 8);
    let mut sink = FailAt {
        inner: InMemorySink::new(),
        fail_index: 5,
    };
    let err = render_deck(&spec, &test_font(), &mut sink).unwrap_err();
    assert!(matches!(err, CardError::Encode(_)));

    let indices: Vec<u32> = sink.inner.cards().iter().map(|(j, _)| j.index).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4]);
    assert!(!sink.inner.is_finished());
}

#[test]
fn render_card_matches_deck_output() {
    let spec = small_spec(0, 33);
    let font = test_font();
    let single = render_card(&spec, &font, 9).unwrap();

    let mut sink = InMemorySink::new();
    render_deck(&small_spec(9, 10), &font, &mut sink).unwrap();
    assert_eq!(sink.cards()[0].1, single);
}

#[test]
fn render_card_rejects_index_wider_than_label() {
    let spec = small_spec(0, 33);
    let err = render_card(&spec, &test_font(), 100).unwrap_err();
    assert!(matches!(err, CardError::Validation(_)));
}

#[test]
fn generate_deck_with_missing_font_writes_nothing() {
    let dir = PathBuf::from("target")
        .join("unit_pipeline")
        .join("missing_font");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();

    let spec = DeckSpec {
        font_source: "tests/data/fonts/Absent.otf".to_string(),
        ..small_spec(0, 3)
    };
    let err = generate_deck(&spec, &dir).unwrap_err();
    assert!(matches!(err, CardError::Font(_)));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn invalid_spec_is_rejected_before_rendering() {
    let spec = DeckSpec {
        file_template: "card.png".to_string(),
        ..small_spec(0, 3)
    };
    let mut sink = InMemorySink::new();
    assert!(render_deck(&spec, &test_font(), &mut sink).is_err());
    assert!(sink.config().is_none());
}
