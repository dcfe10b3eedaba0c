use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use log::debug;
use oauthsign_core::hash::base64_encode;
use oauthsign_core::hash::base64_hmac_sha1;
use oauthsign_core::hash::latin1_bytes;
use oauthsign_core::utils::Redact;
use oauthsign_core::Error;
use oauthsign_core::Result;
use rsa::pkcs1v15::SigningKey as RsaSigningKey;
use rsa::signature::SignatureEncoding;
use rsa::signature::Signer;
use rsa::RsaPrivateKey;
use sha1::Sha1;

use crate::base_string::BaseStringBuilder;
use crate::percent;

/// Signature methods defined by RFC 5849.
///
/// - [RFC 5849 Section 3.4](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureMethod {
    /// `PLAINTEXT`
    Plaintext,
    /// `HMAC-SHA1`
    HmacSha1,
    /// `RSA-SHA1`
    RsaSha1,
}

impl SignatureMethod {
    /// The value carried by `oauth_signature_method`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureMethod::Plaintext => "PLAINTEXT",
            SignatureMethod::HmacSha1 => "HMAC-SHA1",
            SignatureMethod::RsaSha1 => "RSA-SHA1",
        }
    }
}

impl Display for SignatureMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SignatureMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "PLAINTEXT" => Ok(SignatureMethod::Plaintext),
            "HMAC-SHA1" => Ok(SignatureMethod::HmacSha1),
            "RSA-SHA1" => Ok(SignatureMethod::RsaSha1),
            v => Err(Error::config_invalid(format!(
                "signature method {v} is not supported"
            ))),
        }
    }
}

/// Key material for one signature method.
///
/// Missing material is reported when signing, not when constructing.
#[derive(Clone)]
pub enum SigningKey {
    /// Key material for `PLAINTEXT`.
    Plaintext {
        /// The consumer secret.
        consumer_secret: Option<String>,
        /// The token secret, empty when absent.
        token_secret: Option<String>,
    },
    /// Key material for `HMAC-SHA1`.
    HmacSha1 {
        /// The consumer secret.
        consumer_secret: Option<String>,
        /// The token secret, empty when absent.
        token_secret: Option<String>,
    },
    /// Key material for `RSA-SHA1`.
    RsaSha1 {
        /// The client's private key. Loading and parsing it is up to the caller.
        private_key: Option<RsaPrivateKey>,
    },
}

impl SigningKey {
    /// Create a `PLAINTEXT` key.
    pub fn plaintext(consumer_secret: impl Into<String>, token_secret: Option<String>) -> Self {
        SigningKey::Plaintext {
            consumer_secret: Some(consumer_secret.into()),
            token_secret,
        }
    }

    /// Create a `HMAC-SHA1` key.
    pub fn hmac_sha1(consumer_secret: impl Into<String>, token_secret: Option<String>) -> Self {
        SigningKey::HmacSha1 {
            consumer_secret: Some(consumer_secret.into()),
            token_secret,
        }
    }

    /// Create a `RSA-SHA1` key.
    pub fn rsa_sha1(private_key: RsaPrivateKey) -> Self {
        SigningKey::RsaSha1 {
            private_key: Some(private_key),
        }
    }

    /// The signature method this key signs with.
    pub fn method(&self) -> SignatureMethod {
        match self {
            SigningKey::Plaintext { .. } => SignatureMethod::Plaintext,
            SigningKey::HmacSha1 { .. } => SignatureMethod::HmacSha1,
            SigningKey::RsaSha1 { .. } => SignatureMethod::RsaSha1,
        }
    }

    /// Sign the base string.
    ///
    /// `PLAINTEXT` ignores the base string. The returned value is not
    /// percent encoded.
    pub fn sign(&self, base_string: &str) -> Result<String> {
        match self {
            SigningKey::Plaintext {
                consumer_secret,
                token_secret,
            } => secrets_key(consumer_secret, token_secret),
            SigningKey::HmacSha1 {
                consumer_secret,
                token_secret,
            } => {
                let key = secrets_key(consumer_secret, token_secret)?;
                Ok(base64_hmac_sha1(
                    &latin1_bytes(&key),
                    &latin1_bytes(base_string),
                ))
            }
            SigningKey::RsaSha1 { private_key } => {
                let private_key = private_key
                    .as_ref()
                    .ok_or_else(|| Error::credential_invalid("no private key set"))?;

                let signing_key = RsaSigningKey::<Sha1>::new(private_key.clone());
                let signature = signing_key
                    .try_sign(&latin1_bytes(base_string))
                    .map_err(|e| Error::unexpected("rsa-sha1 signing failed").with_source(e))?;
                Ok(base64_encode(&signature.to_bytes()))
            }
        }
    }
}

/// `encode(consumer_secret) & encode(token_secret)`
fn secrets_key(consumer_secret: &Option<String>, token_secret: &Option<String>) -> Result<String> {
    let consumer_secret = consumer_secret
        .as_deref()
        .ok_or_else(|| Error::credential_invalid("no consumer secret set"))?;
    let token_secret = token_secret.as_deref().unwrap_or_default();

    let mut s = percent::encode(consumer_secret);
    s.push('&');
    s.push_str(&percent::encode(token_secret));
    Ok(s)
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SigningKey::Plaintext {
                consumer_secret,
                token_secret,
            }
            | SigningKey::HmacSha1 {
                consumer_secret,
                token_secret,
            } => f
                .debug_struct("SigningKey")
                .field("method", &self.method())
                .field("consumer_secret", &Redact::from(consumer_secret))
                .field("token_secret", &Redact::from(token_secret))
                .finish(),
            SigningKey::RsaSha1 { private_key } => f
                .debug_struct("SigningKey")
                .field("method", &self.method())
                .field("private_key", &private_key.as_ref().map(|_| "<redacted>"))
                .finish(),
        }
    }
}

/// Where a signature builder gets its base string from.
#[derive(Debug, Clone)]
pub enum BaseStringSource {
    /// Build the base string from request parts.
    Builder(BaseStringBuilder),
    /// Use a base string computed elsewhere.
    Literal(String),
}

/// SignatureBuilder computes `oauth_signature` for a base string.
///
/// Attaching a [`BaseStringBuilder`] hands it over to the signature builder,
/// which sets `oauth_signature_method` on it to the key's method. The base
/// string therefore always names the algorithm that signs it.
#[derive(Debug, Clone)]
pub struct SignatureBuilder {
    key: SigningKey,
    source: Option<BaseStringSource>,
    prebuilt: Option<String>,
}

impl SignatureBuilder {
    /// Create a new signature builder for the given key.
    pub fn new(key: SigningKey) -> Self {
        Self {
            key,
            source: None,
            prebuilt: None,
        }
    }

    /// Use a base string builder as the base string source.
    pub fn with_base_string_builder(mut self, builder: BaseStringBuilder) -> Self {
        let builder = builder.with_oauth_signature_method(self.key.method().as_str());
        self.source = Some(BaseStringSource::Builder(builder));
        self
    }

    /// Use a precomputed base string as the base string source.
    pub fn with_base_string(mut self, base_string: impl Into<String>) -> Self {
        self.source = Some(BaseStringSource::Literal(base_string.into()));
        self
    }

    /// Return this signature from [`SignatureBuilder::build`] without computing anything.
    pub fn with_prebuilt(mut self, signature: impl Into<String>) -> Self {
        self.prebuilt = Some(signature.into());
        self
    }

    /// The signature method of the configured key.
    pub fn method(&self) -> SignatureMethod {
        self.key.method()
    }

    /// The configured base string source.
    pub fn source(&self) -> Option<&BaseStringSource> {
        self.source.as_ref()
    }

    /// The configured base string builder, if the source is one.
    pub fn base_string_builder(&self) -> Option<&BaseStringBuilder> {
        match &self.source {
            Some(BaseStringSource::Builder(b)) => Some(b),
            _ => None,
        }
    }

    /// Compute the base string from the configured source.
    pub fn base_string(&self) -> Result<String> {
        match &self.source {
            Some(BaseStringSource::Builder(b)) => b.build(),
            Some(BaseStringSource::Literal(s)) => Ok(s.clone()),
            None => Err(Error::config_invalid("no base string source set")),
        }
    }

    /// Build the signature.
    pub fn build(&self) -> Result<String> {
        if let Some(signature) = &self.prebuilt {
            return Ok(signature.clone());
        }

        let base_string = self.base_string()?;
        debug!("base string to sign: {}", &base_string);

        self.key.sign(&base_string)
    }
}
