// Application state shared by the encoding handlers
use crate::application::line_encoding_service::LineEncodingService;
use crate::application::scatter_encoding_service::ScatterEncodingService;
use crate::infrastructure::config::{EncodingConfig, LineOutput};

#[derive(Debug, Clone)]
pub struct AppState {
    pub line_service: LineEncodingService,
    pub scatter_service: ScatterEncodingService,
    pub line_output: LineOutput,
}

impl AppState {
    pub fn from_config(config: &EncodingConfig) -> Self {
        Self {
            line_service: LineEncodingService::new(config.line.clone(), config.steepness),
            scatter_service: ScatterEncodingService::new(config.scatter.clone(), config.steepness),
            line_output: config.line.output,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&EncodingConfig::default())
    }
}
