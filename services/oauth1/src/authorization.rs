use std::fmt::Write;

use log::debug;
use oauthsign_core::Error;
use oauthsign_core::Result;

use crate::constants::*;
use crate::parameters::ParameterKind;
use crate::percent;
use crate::signature::SignatureBuilder;

/// AuthorizationBuilder renders the `Authorization` header value.
///
/// - [RFC 5849 Section 3.5.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.5.1)
///
/// The header carries every protocol parameter of the base string builder plus
/// `oauth_signature`. Entries are sorted by their percent encoded key, then by
/// their percent encoded value, which is the same order the normalized
/// parameter string uses. The realm goes first and is written verbatim.
///
/// ```
/// use oauthsign_oauth1::{AuthorizationBuilder, BaseStringBuilder, SignatureBuilder, SigningKey};
///
/// let header = AuthorizationBuilder::new()
///     .with_realm("Example")
///     .with_signature_builder(
///         SignatureBuilder::new(SigningKey::plaintext("kd94hf93k423kf44", None))
///             .with_base_string_builder(
///                 BaseStringBuilder::new()
///                     .with_http_method("POST")
///                     .with_base_uri("https://photos.example.net/initiate")
///                     .with_oauth_consumer_key("dpf43f3p2l4k3l03"),
///             ),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     header,
///     r#"OAuth realm="Example", oauth_consumer_key="dpf43f3p2l4k3l03", oauth_signature="kd94hf93k423kf44%26", oauth_signature_method="PLAINTEXT""#
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct AuthorizationBuilder {
    realm: Option<String>,
    signature_builder: Option<SignatureBuilder>,
    prebuilt: Option<String>,
}

impl AuthorizationBuilder {
    /// Create a new authorization builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the realm.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Set the signature builder.
    pub fn with_signature_builder(mut self, builder: SignatureBuilder) -> Self {
        self.signature_builder = Some(builder);
        self
    }

    /// Return this header value from [`AuthorizationBuilder::build`] without computing anything.
    pub fn with_prebuilt(mut self, header: impl Into<String>) -> Self {
        self.prebuilt = Some(header.into());
        self
    }

    /// Get the configured realm.
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    /// Build the header value.
    pub fn build(&self) -> Result<String> {
        if let Some(header) = &self.prebuilt {
            return Ok(header.clone());
        }

        let signature_builder = self
            .signature_builder
            .as_ref()
            .ok_or_else(|| Error::config_invalid("no signature builder set"))?;
        let base_string_builder = signature_builder.base_string_builder().ok_or_else(|| {
            Error::config_invalid("no base string builder set on signature builder")
        })?;

        let signature = signature_builder.build()?;

        let mut params = base_string_builder
            .parameters()
            .pairs(ParameterKind::Protocol)
            .filter(|(k, _)| *k != OAUTH_SIGNATURE)
            .map(|(k, v)| (percent::encode(k), percent::encode(v)))
            .collect::<Vec<_>>();
        params.push((percent::encode(OAUTH_SIGNATURE), percent::encode(&signature)));
        params.sort_unstable();

        debug!(
            "authorization parameters: {:?}",
            params.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>()
        );

        let mut s = String::from(AUTH_SCHEME);
        let mut first = true;
        if let Some(realm) = &self.realm {
            write!(s, " {REALM}=\"{realm}\"")?;
            first = false;
        }
        for (k, v) in params {
            if !first {
                s.push(',');
            }
            first = false;
            write!(s, " {k}=\"{v}\"")?;
        }

        Ok(s)
    }
}
