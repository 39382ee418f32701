//! Outgoing request abstraction.
//!
//! The encoder only needs to read the URL and write the URL and body, so
//! that is all [`RequestDescriptor`] asks for. [`HttpRequest`] is an owned
//! implementation for callers that assemble requests before choosing a
//! client; `reqwest::Request` is supported directly.

use crate::Result;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Body, Method};
use url::Url;

/// Mutable view of an outgoing HTTP request.
#[cfg_attr(test, mockall::automock)]
pub trait RequestDescriptor {
    /// Structured form of the current URL, or `None` if it does not parse.
    fn url(&self) -> Option<Url>;

    /// Replace the request URL.
    fn set_url(&mut self, url: Url);

    /// Replace the request body.
    fn set_body(&mut self, body: Vec<u8>);
}

impl RequestDescriptor for reqwest::Request {
    fn url(&self) -> Option<Url> {
        Some(reqwest::Request::url(self).clone())
    }

    fn set_url(&mut self, url: Url) {
        *self.url_mut() = url;
    }

    fn set_body(&mut self, body: Vec<u8>) {
        *self.body_mut() = Some(Body::from(body));
    }
}

/// Owned request description: method, URL, headers and body.
///
/// The URL is kept as given and only parsed when needed, so a descriptor can
/// hold a URL that turns out to be malformed.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    method: Method,
    url: String,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// Create a request with an empty header map and no body.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Shorthand for a `GET` request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Shorthand for a `POST` request.
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Add a header.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Set an initial body.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// HTTP method.
    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// URL as currently stored.
    #[must_use]
    pub fn url_str(&self) -> &str {
        &self.url
    }

    /// Request headers.
    #[must_use]
    pub const fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Mutable request headers.
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Request body, if one has been set.
    #[must_use]
    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Convert into a `reqwest::Request` ready to be executed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`](crate::Error::InvalidUrl) if the URL
    /// cannot be parsed.
    pub fn into_reqwest(self) -> Result<reqwest::Request> {
        let url = Url::parse(&self.url)?;
        let mut request = reqwest::Request::new(self.method, url);
        *request.headers_mut() = self.headers;
        *request.body_mut() = self.body.map(Body::from);
        Ok(request)
    }
}

impl RequestDescriptor for HttpRequest {
    fn url(&self) -> Option<Url> {
        Url::parse(&self.url).ok()
    }

    fn set_url(&mut self, url: Url) {
        self.url = url.into();
    }

    fn set_body(&mut self, body: Vec<u8>) {
        self.body = Some(body);
    }
}
