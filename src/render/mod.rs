/// CPU card rasterizer powered by `vello_cpu`.
pub mod cpu;
/// Deck-level rendering entry points.
pub mod pipeline;
