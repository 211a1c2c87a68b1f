// Application layer - Encoding use cases
pub mod line_encoding_service;
pub mod scatter_encoding_service;
