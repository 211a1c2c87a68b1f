// Domain layer - Series data and the recency encodings derived from it
pub mod dataset;
pub mod encoding;
pub mod recency;
