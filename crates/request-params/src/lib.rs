//! # request-params
//!
//! Encode logical key/value parameters onto an outgoing HTTP request.
//!
//! Query parameters are appended to the request URL; body parameters are
//! written either as a flat JSON object of string values or as
//! `application/x-www-form-urlencoded` data. Parameters without a value are
//! skipped. The crate builds requests only; sending them is left to the
//! caller's HTTP client.
//!
//! ## Modules
//!
//! - [`params`] - Named parameters and an ordered builder
//! - [`config`] - Encoding mode and JSON layout
//! - [`descriptor`] - The request abstraction the encoder mutates
//! - [`encoder`] - Query merge and body encoding
//! - [`error`] - Error types

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod descriptor;
pub mod encoder;
pub mod error;
pub mod params;

// Re-export commonly used types
pub use config::{EncoderConfig, EncodingMode, JsonStyle};
pub use descriptor::{HttpRequest, RequestDescriptor};
pub use encoder::{apply, ParameterEncoder};
pub use error::{Error, Result};
pub use params::{Param, Params};
