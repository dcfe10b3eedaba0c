use std::fmt::{Debug, Formatter};

use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::debug;
use oauthsign_core::time::{format_unix_timestamp, now, DateTime};
use oauthsign_core::{Error, Result, SigningCredential, SigningRequest};
use rsa::RsaPrivateKey;

use crate::constants::OAUTH_VERSION_1_0;
use crate::credential::Credential;
use crate::nonce::generate_nonce;
use crate::parameters::{ParameterKind, Parameters};
use crate::{AuthorizationBuilder, BaseStringBuilder, SignatureBuilder, SignatureMethod, SigningKey};

/// RequestSigner that signs http requests with an OAuth 1.0 `Authorization` header.
///
/// - [RFC 5849 Section 3](https://datatracker.ietf.org/doc/html/rfc5849#section-3)
#[derive(Clone)]
pub struct RequestSigner {
    method: SignatureMethod,
    realm: Option<String>,
    callback: Option<String>,
    private_key: Option<RsaPrivateKey>,

    time: Option<DateTime>,
    nonce: Option<String>,
}

impl Debug for RequestSigner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("method", &self.method)
            .field("realm", &self.realm)
            .field("callback", &self.callback)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("time", &self.time)
            .field("nonce", &self.nonce)
            .finish()
    }
}

impl Default for RequestSigner {
    fn default() -> Self {
        Self::new(SignatureMethod::HmacSha1)
    }
}

impl RequestSigner {
    /// Create a new signer with the given signature method.
    pub fn new(method: SignatureMethod) -> Self {
        Self {
            method,
            realm: None,
            callback: None,
            private_key: None,
            time: None,
            nonce: None,
        }
    }

    /// Set the realm of the `Authorization` header.
    pub fn with_realm(mut self, realm: impl Into<String>) -> Self {
        self.realm = Some(realm.into());
        self
    }

    /// Send `oauth_callback` with every request.
    ///
    /// Only needed when asking for temporary credentials.
    pub fn with_callback(mut self, callback: impl Into<String>) -> Self {
        self.callback = Some(callback.into());
        self
    }

    /// Set the private key used by `RSA-SHA1`.
    pub fn with_rsa_private_key(mut self, private_key: RsaPrivateKey) -> Self {
        self.private_key = Some(private_key);
        self
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// Nonces must never be reused across requests.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    fn signing_key(&self, cred: &Credential) -> SigningKey {
        match self.method {
            SignatureMethod::Plaintext => {
                SigningKey::plaintext(&cred.consumer_secret, cred.token_secret.clone())
            }
            SignatureMethod::HmacSha1 => {
                SigningKey::hmac_sha1(&cred.consumer_secret, cred.token_secret.clone())
            }
            SignatureMethod::RsaSha1 => SigningKey::RsaSha1 {
                private_key: self.private_key.clone(),
            },
        }
    }

    /// Build the `Authorization` header value for the request without touching it.
    ///
    /// `entity_parameters` are the decoded pairs of a form encoded body; pass
    /// an empty slice for any other body.
    pub fn build_authorization(
        &self,
        req: &http::request::Parts,
        cred: &Credential,
        entity_parameters: &[(String, String)],
    ) -> Result<String> {
        if !cred.is_valid() {
            return Err(Error::credential_invalid("consumer key is empty"));
        }

        let signing_req = SigningRequest::build(req)?;

        let mut params = Parameters::new();
        params.extend(ParameterKind::Query, signing_req.query.iter().cloned());
        params.extend(ParameterKind::Entity, entity_parameters.iter().cloned());

        let mut base_string_builder = BaseStringBuilder::new()
            .with_http_method(signing_req.method.as_str())
            .with_base_uri(signing_req.base_uri())
            .with_parameters(params)
            .with_oauth_consumer_key(&cred.consumer_key)
            .with_oauth_nonce(
                self.nonce
                    .clone()
                    .unwrap_or_else(|| generate_nonce(&mut rand::thread_rng())),
            )
            .with_oauth_timestamp(format_unix_timestamp(self.time.unwrap_or_else(now)))
            .with_oauth_version(OAUTH_VERSION_1_0);
        if let Some(token) = &cred.token {
            base_string_builder = base_string_builder.with_oauth_token(token);
        }
        if let Some(callback) = &self.callback {
            base_string_builder = base_string_builder.with_oauth_callback(callback);
        }

        let mut authorization = AuthorizationBuilder::new().with_signature_builder(
            SignatureBuilder::new(self.signing_key(cred))
                .with_base_string_builder(base_string_builder),
        );
        if let Some(realm) = &self.realm {
            authorization = authorization.with_realm(realm);
        }

        authorization.build()
    }

    /// Sign the request by inserting the `Authorization` header.
    pub fn sign_request(
        &self,
        req: &mut http::request::Parts,
        cred: &Credential,
        entity_parameters: &[(String, String)],
    ) -> Result<()> {
        let authorization = self.build_authorization(req, cred, entity_parameters)?;
        debug!(
            "signed {} {} with {} for consumer {}",
            req.method, req.uri, self.method, cred.consumer_key
        );

        let mut value: HeaderValue = authorization.parse()?;
        value.set_sensitive(true);
        req.headers.insert(AUTHORIZATION, value);

        Ok(())
    }
}

/// Parse a `application/x-www-form-urlencoded` body into decoded entity parameters.
pub fn parse_form_body(body: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(body)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}
