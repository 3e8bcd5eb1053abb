/// Font loading and text layout.
pub mod font;
