/// Label formatting and per-card jobs.
pub mod label;
/// Deck parameters and their validation.
pub mod model;
