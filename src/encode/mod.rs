//! Card output sinks.
//!
//! Sinks consume rendered cards in index order and are driven by [`crate::render_deck`].

/// PNG file output.
pub mod png;
/// Generic card sink trait and built-in sinks.
pub mod sink;
