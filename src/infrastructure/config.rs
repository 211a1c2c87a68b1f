use crate::domain::encoding::CurvePolicy;
use crate::domain::recency::DEFAULT_STEEPNESS;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EncodingConfig {
    /// `k` of the exponential response curve.
    pub steepness: f64,
    pub line: LineSettings,
    pub scatter: ScatterSettings,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            steepness: DEFAULT_STEEPNESS,
            line: LineSettings::default(),
            scatter: ScatterSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LineSettings {
    pub width: CurvePolicy,
    pub output: LineOutput,
    pub clamp_alpha: bool,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ScatterSettings {
    pub size: CurvePolicy,
}

/// Field set of the line response handed back to the renderer.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineOutput {
    /// `xs`, `ys`, `widths`
    Minimal,
    /// adds `x_end`, `y_end`, `label` and `alphas`
    #[default]
    Extended,
}

impl EncodingConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.steepness.is_finite() || self.steepness <= 0.0 {
            anyhow::bail!(
                "steepness must be a positive finite number, got {}",
                self.steepness
            );
        }
        Ok(())
    }
}

/// Optional `config/encoding.*` file, overridden by `RECENCY_*` variables
/// (e.g. `RECENCY_LINE__WIDTH=linear`).
pub fn load_encoding_config() -> anyhow::Result<EncodingConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/encoding").required(false))
        .add_source(
            config::Environment::with_prefix("RECENCY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    finish(settings)
}

pub fn parse_encoding_config(toml: &str) -> anyhow::Result<EncodingConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?;

    finish(settings)
}

fn finish(settings: config::Config) -> anyhow::Result<EncodingConfig> {
    let encoding: EncodingConfig = settings
        .try_deserialize()
        .context("Failed to read encoding configuration")?;
    encoding.validate()?;
    Ok(encoding)
}
