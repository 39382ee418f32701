//! Parameter encoding onto outgoing requests.
//!
//! Query parameters are appended to whatever query the request URL already
//! carries. Body parameters become either a flat JSON object of strings or an
//! `application/x-www-form-urlencoded` string. Absent parameters are dropped
//! on both paths.

use crate::config::{EncoderConfig, EncodingMode, JsonStyle};
use crate::descriptor::RequestDescriptor;
use crate::params::{present_pairs, Param, Params};
use crate::Result;
use std::collections::BTreeMap;
use tracing::{debug, error, warn};
use url::form_urlencoded;

/// Apply `query` and `body` parameters to `descriptor`.
///
/// The URL is only touched when `query` is non-empty and the body only when
/// `body` is non-empty; `mode` picks the body encoding.
///
/// # Panics
///
/// Panics if the JSON body cannot be serialized. Use
/// [`ParameterEncoder::try_apply`] to get the failure as an error instead.
pub fn apply<R>(descriptor: &mut R, query: &[Param], body: &[Param], mode: EncodingMode)
where
    R: RequestDescriptor + ?Sized,
{
    let config = EncoderConfig::new().with_mode(mode);
    if let Err(err) = encode(descriptor, query, body, config) {
        error!(error = %err, "request parameter encoding failed");
        panic!("request parameter encoding failed: {err}");
    }
}

/// Query and body parameters plus the configuration used to encode them.
///
/// ```
/// use request_params::{EncodingMode, HttpRequest, ParameterEncoder, Params};
///
/// let encoder = ParameterEncoder::new()
///     .with_query(Params::new().with("page", 2))
///     .with_body(Params::new().with("name", "Al").with_opt("age", None::<u8>))
///     .with_mode(EncodingMode::FormUrlEncoded);
///
/// let mut request = HttpRequest::post("https://api.example.com/users");
/// encoder.apply(&mut request);
///
/// assert_eq!(request.url_str(), "https://api.example.com/users?page=2");
/// assert_eq!(request.body(), Some(&b"name=Al"[..]));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterEncoder {
    query: Params,
    body: Params,
    config: EncoderConfig,
}

impl ParameterEncoder {
    /// Create an encoder with no parameters and the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query parameters.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<Params>) -> Self {
        self.query = query.into();
        self
    }

    /// Set the body parameters.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Params>) -> Self {
        self.body = body.into();
        self
    }

    /// Set the body encoding mode.
    #[must_use]
    pub fn with_mode(mut self, mode: EncodingMode) -> Self {
        self.config = self.config.with_mode(mode);
        self
    }

    /// Set the JSON layout.
    #[must_use]
    pub fn with_json_style(mut self, style: JsonStyle) -> Self {
        self.config = self.config.with_json_style(style);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn with_config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Query parameters.
    #[must_use]
    pub const fn query(&self) -> &Params {
        &self.query
    }

    /// Body parameters.
    #[must_use]
    pub const fn body(&self) -> &Params {
        &self.body
    }

    /// Encoder configuration.
    #[must_use]
    pub const fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Apply the parameters to `descriptor`.
    ///
    /// # Panics
    ///
    /// Panics if the JSON body cannot be serialized.
    pub fn apply<R>(&self, descriptor: &mut R)
    where
        R: RequestDescriptor + ?Sized,
    {
        if let Err(err) = self.try_apply(descriptor) {
            error!(error = %err, "request parameter encoding failed");
            panic!("request parameter encoding failed: {err}");
        }
    }

    /// Apply the parameters to `descriptor`, reporting serialization failure.
    ///
    /// The query merge may already have happened when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`](crate::Error::Serialization) if the
    /// JSON body cannot be serialized.
    pub fn try_apply<R>(&self, descriptor: &mut R) -> Result<()>
    where
        R: RequestDescriptor + ?Sized,
    {
        encode(
            descriptor,
            self.query.as_slice(),
            self.body.as_slice(),
            self.config,
        )
    }
}

fn encode<R>(
    descriptor: &mut R,
    query: &[Param],
    body: &[Param],
    config: EncoderConfig,
) -> Result<()>
where
    R: RequestDescriptor + ?Sized,
{
    if !query.is_empty() {
        merge_query(descriptor, query);
    }

    if !body.is_empty() {
        let encoded = match config.mode {
            EncodingMode::Json => encode_json(body, config.json_style)?,
            EncodingMode::FormUrlEncoded => encode_form(body),
        };

        match encoded {
            Some(bytes) => {
                debug!(mode = %config.mode, len = bytes.len(), "writing request body");
                descriptor.set_body(bytes);
            }
            None => debug!(mode = %config.mode, "no body parameters with values, body left as is"),
        }
    }

    Ok(())
}

fn merge_query<R>(descriptor: &mut R, query: &[Param])
where
    R: RequestDescriptor + ?Sized,
{
    let mut pairs = present_pairs(query).peekable();
    if pairs.peek().is_none() {
        return;
    }

    let Some(mut url) = descriptor.url() else {
        warn!("request URL could not be parsed, skipping query parameters");
        return;
    };

    let mut appended = 0usize;
    {
        let mut serializer = url.query_pairs_mut();
        for (key, value) in pairs {
            serializer.append_pair(key, value);
            appended += 1;
        }
    }

    debug!(appended, url = %url, "merged query parameters");
    descriptor.set_url(url);
}

/// Flat object of string values; a repeated key keeps its last value.
fn encode_json(body: &[Param], style: JsonStyle) -> Result<Option<Vec<u8>>> {
    let mut object = BTreeMap::new();
    for (key, value) in present_pairs(body) {
        object.insert(key, value);
    }

    if object.is_empty() {
        return Ok(None);
    }

    let bytes = match style {
        JsonStyle::Compact => serde_json::to_vec(&object)?,
        JsonStyle::Pretty => serde_json::to_vec_pretty(&object)?,
    };
    Ok(Some(bytes))
}

fn encode_form(body: &[Param]) -> Option<Vec<u8>> {
    let mut pairs = present_pairs(body).peekable();
    pairs.peek()?;

    let encoded = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();
    Some(encoded.into_bytes())
}
