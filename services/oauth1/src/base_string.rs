use oauthsign_core::Error;
use oauthsign_core::Result;

use crate::constants::*;
use crate::parameters::ParameterKind;
use crate::parameters::Parameters;
use crate::percent;

/// BaseStringBuilder builds the signature base string of a request.
///
/// - [RFC 5849 Section 3.4.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1)
///
/// The base URI must already be normalized: lowercase scheme and host, no
/// default port, no query or fragment. It is used as given.
///
/// ```
/// use oauthsign_oauth1::BaseStringBuilder;
///
/// let base_string = BaseStringBuilder::new()
///     .with_http_method("get")
///     .with_base_uri("http://example.com/request")
///     .with_query_parameter("a2", "r b")
///     .build()
///     .unwrap();
///
/// assert_eq!(base_string, "GET&http%3A%2F%2Fexample.com%2Frequest&a2%3Dr%2520b");
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaseStringBuilder {
    http_method: Option<String>,
    base_uri: Option<String>,
    parameters: Parameters,
}

impl BaseStringBuilder {
    /// Create a new builder without method, base URI or parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the HTTP method. It is uppercased when the base string is built.
    pub fn with_http_method(mut self, method: impl Into<String>) -> Self {
        self.http_method = Some(method.into());
        self
    }

    /// Set the normalized base URI.
    pub fn with_base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Replace all collected parameters.
    pub fn with_parameters(mut self, parameters: Parameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Append a protocol parameter.
    pub fn with_protocol_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.parameters.add(ParameterKind::Protocol, key, value);
        self
    }

    /// Append a query parameter.
    pub fn with_query_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.add(ParameterKind::Query, key, value);
        self
    }

    /// Append a form encoded body parameter.
    pub fn with_entity_parameter(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.parameters.add(ParameterKind::Entity, key, value);
        self
    }

    /// Set `oauth_consumer_key`.
    pub fn with_oauth_consumer_key(self, v: impl Into<String>) -> Self {
        self.with_single_protocol_parameter(OAUTH_CONSUMER_KEY, v)
    }

    /// Set `oauth_token`.
    pub fn with_oauth_token(self, v: impl Into<String>) -> Self {
        self.with_single_protocol_parameter(OAUTH_TOKEN, v)
    }

    /// Set `oauth_nonce`.
    pub fn with_oauth_nonce(self, v: impl Into<String>) -> Self {
        self.with_single_protocol_parameter(OAUTH_NONCE, v)
    }

    /// Set `oauth_timestamp`.
    pub fn with_oauth_timestamp(self, v: impl Into<String>) -> Self {
        self.with_single_protocol_parameter(OAUTH_TIMESTAMP, v)
    }

    /// Set `oauth_version`.
    pub fn with_oauth_version(self, v: impl Into<String>) -> Self {
        self.with_single_protocol_parameter(OAUTH_VERSION, v)
    }

    /// Set `oauth_callback`.
    pub fn with_oauth_callback(self, v: impl Into<String>) -> Self {
        self.with_single_protocol_parameter(OAUTH_CALLBACK, v)
    }

    /// Set `oauth_signature_method`.
    ///
    /// [`SignatureBuilder`](crate::SignatureBuilder) sets this to its own
    /// algorithm when it takes the builder over.
    pub fn with_oauth_signature_method(self, v: impl Into<String>) -> Self {
        self.with_single_protocol_parameter(OAUTH_SIGNATURE_METHOD, v)
    }

    fn with_single_protocol_parameter(mut self, key: &str, value: impl Into<String>) -> Self {
        self.parameters.set_protocol_parameter(key, value);
        self
    }

    /// Get the configured HTTP method.
    pub fn http_method(&self) -> Option<&str> {
        self.http_method.as_deref()
    }

    /// Get the configured base URI.
    pub fn base_uri(&self) -> Option<&str> {
        self.base_uri.as_deref()
    }

    /// Get the collected parameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Build the signature base string.
    pub fn build(&self) -> Result<String> {
        let method = self
            .http_method
            .as_deref()
            .ok_or_else(|| Error::config_invalid("no http method set"))?;
        let base_uri = self
            .base_uri
            .as_deref()
            .ok_or_else(|| Error::config_invalid("no base uri set"))?;

        let mut s = method.to_uppercase();
        s.push('&');
        s.push_str(&percent::encode(base_uri));
        s.push('&');
        s.push_str(&percent::encode(
            &self.parameters.normalized_parameter_string(),
        ));

        Ok(s)
    }
}
