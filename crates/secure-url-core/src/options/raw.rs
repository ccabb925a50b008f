//! Loosely typed option bags, as read from JSON or TOML.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::mode::{Mode, MODE_EXPECTED};
use super::Options;
use crate::error::ValidationError;

/// An unvalidated option bag. Missing entries fall back to the defaults;
/// present entries must have the right type and value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value>,
    #[serde(
        default,
        rename = "keepPort",
        alias = "keep_port",
        skip_serializing_if = "Option::is_none"
    )]
    pub keep_port: Option<Value>,
}

impl RawOptions {
    /// Reads a bag from an arbitrary JSON value. Unknown keys are ignored.
    pub fn from_json(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn validate(&self) -> Result<Options, ValidationError> {
        let defaults = Options::default();

        let mode = match &self.mode {
            None => defaults.mode,
            Some(Value::String(s)) => s.parse::<Mode>()?,
            Some(other) => return Err(ValidationError::new("mode", MODE_EXPECTED, render(other))),
        };

        let keep_port = match &self.keep_port {
            None => defaults.keep_port,
            Some(Value::Bool(b)) => *b,
            Some(other) => return Err(ValidationError::new("keepPort", "boolean", render(other))),
        };

        Ok(Options { mode, keep_port })
    }
}

impl From<Options> for RawOptions {
    fn from(options: Options) -> Self {
        Self {
            mode: Some(Value::String(options.mode.as_str().to_owned())),
            keep_port: Some(Value::Bool(options.keep_port)),
        }
    }
}

impl TryFrom<&RawOptions> for Options {
    type Error = ValidationError;

    fn try_from(raw: &RawOptions) -> Result<Self, Self::Error> {
        raw.validate()
    }
}

/// Strings render bare; everything else as JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
