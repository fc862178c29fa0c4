mod channel;
mod compressor;
mod graph;

pub use graph::CostGraph;
