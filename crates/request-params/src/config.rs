//! Encoder configuration.
//!
//! These types are serde (de)serializable so they can sit inside a larger
//! client configuration file.

use crate::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// MIME type of a JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// MIME type of a form-encoded body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// How body parameters are serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EncodingMode {
    /// A flat JSON object of string values
    #[default]
    Json,
    /// `application/x-www-form-urlencoded` pairs
    #[serde(alias = "form")]
    FormUrlEncoded,
}

impl EncodingMode {
    /// Content type of the body this mode produces.
    ///
    /// The encoder never sets headers; callers use this for their own
    /// `Content-Type`.
    #[must_use]
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Json => JSON_CONTENT_TYPE,
            Self::FormUrlEncoded => FORM_CONTENT_TYPE,
        }
    }

    /// Stable string form of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::FormUrlEncoded => "form-url-encoded",
        }
    }
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncodingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" | JSON_CONTENT_TYPE => Ok(Self::Json),
            "form" | "form-url-encoded" | "form-urlencoded" | FORM_CONTENT_TYPE => {
                Ok(Self::FormUrlEncoded)
            }
            other => Err(Error::ConfigError(format!(
                "unknown encoding mode `{other}`"
            ))),
        }
    }
}

/// Layout of a JSON body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonStyle {
    /// No insignificant whitespace
    #[default]
    Compact,
    /// Indented, one member per line
    Pretty,
}

/// Configuration for a [`ParameterEncoder`](crate::ParameterEncoder).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Body encoding strategy
    #[serde(default)]
    pub mode: EncodingMode,

    /// JSON layout, ignored for form bodies
    #[serde(default)]
    pub json_style: JsonStyle,
}

impl EncoderConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            mode: EncodingMode::Json,
            json_style: JsonStyle::Compact,
        }
    }

    /// Set the body encoding mode.
    #[must_use]
    pub const fn with_mode(mut self, mode: EncodingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the JSON layout.
    #[must_use]
    pub const fn with_json_style(mut self, style: JsonStyle) -> Self {
        self.json_style = style;
        self
    }
}
