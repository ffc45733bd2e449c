// Adapters layer: concrete catalog sources and render sinks.

pub mod catalog;
pub mod render;
