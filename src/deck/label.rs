/// Placeholder replaced by the card label in file name templates.
pub const INDEX_PLACEHOLDER: &str = "{index}";

/// Decimal rendering of `index`, left-padded with `'0'` to `width` characters.
///
/// Indices with more digits than `width` are rendered in full; [`crate::DeckSpec::validate`]
/// rejects decks where that would happen.
pub fn format_label(index: u32, width: usize) -> String {
    format!("{index:0width$}")
}

/// Substitute `label` for the `{index}` placeholder in `template`.
pub fn card_file_name(template: &str, label: &str) -> String {
    template.replacen(INDEX_PLACEHOLDER, label, 1)
}

/// One unit of work in a deck: the index, its label, and the file it renders to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardJob {
    /// Card index.
    pub index: u32,
    /// Zero-padded label drawn on the card.
    pub label: String,
    /// Output file name (no directory component).
    pub file_name: String,
}

impl CardJob {
    /// Build the job for `index` using the given label width and file name template.
    pub fn new(index: u32, width: usize, template: &str) -> Self {
        let label = format_label(index, width);
        let file_name = card_file_name(template, &label);
        Self {
            index,
            label,
            file_name,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/label.rs"]
mod tests;
