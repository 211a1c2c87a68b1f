// Encoding handlers - one call per data refresh of the host plot
use crate::infrastructure::payload::{CallbackPayload, PayloadError};
use crate::infrastructure::response_mapper::{line_to_response, scatter_to_response};
use crate::presentation::app_state::AppState;
use serde_json::Value;

/// Line widths, opacities and end-point labels for a multi-line plot.
pub fn encode_lines(state: &AppState, payload: Value) -> Result<Value, PayloadError> {
    let dataset = CallbackPayload::from_value(payload)
        .and_then(CallbackPayload::into_dataset)
        .inspect_err(|e| tracing::warn!("Rejected line payload: {}", e))?;

    let encoding = state.line_service.encode(&dataset);
    Ok(serde_json::to_value(line_to_response(encoding, state.line_output))?)
}

/// Flattened scatter points with recency-driven marker sizes.
pub fn encode_scatter(state: &AppState, payload: Value) -> Result<Value, PayloadError> {
    let dataset = CallbackPayload::from_value(payload)
        .and_then(CallbackPayload::into_dataset)
        .inspect_err(|e| tracing::warn!("Rejected scatter payload: {}", e))?;

    let encoding = state.scatter_service.encode(&dataset);
    Ok(serde_json::to_value(scatter_to_response(encoding))?)
}
