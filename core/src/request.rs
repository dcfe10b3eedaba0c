use http::uri::Authority;
use http::uri::Scheme;
use http::Method;

use crate::Error;
use crate::Result;

/// Signing context for request.
///
/// Holds the parts of an HTTP request that take part in the OAuth signature
/// base string. Building it never mutates the source request.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, still percent encoded as it appears on the wire.
    pub path: String,
    /// HTTP query parameters, form decoded.
    pub query: Vec<(String, String)>,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &http::request::Parts) -> Result<Self> {
        let uri = &parts.uri;

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme().cloned().unwrap_or(Scheme::HTTP),
            authority: uri.authority().cloned().ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: match uri.path() {
                "" => "/".to_string(),
                v => v.to_string(),
            },
            query: uri
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),
        })
    }

    /// Get the base string URI of this request.
    ///
    /// Scheme and host are lowercased, the port is dropped when it is the
    /// default one for the scheme, and query and fragment are excluded.
    pub fn base_uri(&self) -> String {
        let scheme = self.scheme.as_str().to_ascii_lowercase();
        let host = self.authority.host().to_ascii_lowercase();

        let mut s = String::with_capacity(scheme.len() + host.len() + self.path.len() + 9);
        s.push_str(&scheme);
        s.push_str("://");
        s.push_str(&host);
        match (scheme.as_str(), self.authority.port_u16()) {
            (_, None) | ("http", Some(80)) | ("https", Some(443)) => {}
            (_, Some(port)) => {
                s.push(':');
                s.push_str(&port.to_string());
            }
        }
        s.push_str(&self.path);

        s
    }
}
