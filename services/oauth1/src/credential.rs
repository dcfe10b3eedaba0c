use oauthsign_core::utils::Redact;
use oauthsign_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the client and token credentials of an OAuth 1.0 client.
///
/// - [RFC 5849 Section 1.1](https://datatracker.ietf.org/doc/html/rfc5849#section-1.1)
#[derive(Default, Clone)]
pub struct Credential {
    /// Client identifier, sent as `oauth_consumer_key`.
    pub consumer_key: String,
    /// Client shared secret.
    pub consumer_secret: String,
    /// Token identifier, sent as `oauth_token` when present.
    pub token: Option<String>,
    /// Token shared secret.
    pub token_secret: Option<String>,
}

impl Credential {
    /// Create a credential with client credentials only.
    pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            ..Default::default()
        }
    }

    /// Attach token credentials.
    pub fn with_token(mut self, token: impl Into<String>, token_secret: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self.token_secret = Some(token_secret.into());
        self
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &Redact::from(&self.consumer_secret))
            .field("token", &self.token)
            .field("token_secret", &Redact::from(&self.token_secret))
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        !self.consumer_key.is_empty()
    }
}
