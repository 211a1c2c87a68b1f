// Infrastructure layer - Configuration and the host's wire shapes
pub mod config;
pub mod payload;
pub mod response_mapper;
