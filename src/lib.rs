//! Recency-driven visual encodings for multi-series plot data.
//!
//! The host visualization runtime hands over a `{ "data": { ... } }` payload
//! of parallel per-series arrays; the handlers return either per-series line
//! channels (`widths`, `alphas`, end-point labels) or a flattened scatter
//! stream with marker sizes. Newer series get the stronger encoding.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::dataset::{Dataset, Identifier, Series, Timestamp};
pub use domain::recency::{ResponseCurve, TimeNormalizer};
pub use infrastructure::config::{load_encoding_config, parse_encoding_config, EncodingConfig};
pub use infrastructure::payload::PayloadError;
pub use presentation::app_state::AppState;
pub use presentation::handlers::{encode_lines, encode_scatter};

#[cfg(test)]
pub(crate) mod test_support {
    /// Route service logs to the test writer; `RUST_LOG=debug` shows them.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
