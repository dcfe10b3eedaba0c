//! OAuth 1.0 ([RFC 5849](https://datatracker.ietf.org/doc/html/rfc5849)) request signer
//!
//! The signing pipeline is a chain of immutable builders:
//!
//! - [`BaseStringBuilder`] turns method, base URI and parameters into the signature base string.
//! - [`SignatureBuilder`] signs it with a [`SigningKey`]: `PLAINTEXT`, `HMAC-SHA1` or `RSA-SHA1`.
//! - [`AuthorizationBuilder`] renders the `Authorization` header value.
//!
//! [`RequestSigner`] drives the whole chain for an `http::request::Parts`.
//!
//! ## Example
//!
//! ```
//! use oauthsign_oauth1::{AuthorizationBuilder, BaseStringBuilder, SignatureBuilder, SigningKey};
//!
//! # fn main() -> oauthsign_core::Result<()> {
//! let base_string_builder = BaseStringBuilder::new()
//!     .with_http_method("GET")
//!     .with_base_uri("http://photos.example.net/photos")
//!     .with_query_parameter("size", "original")
//!     .with_query_parameter("file", "vacation.jpg")
//!     .with_oauth_consumer_key("dpf43f3p2l4k3l03")
//!     .with_oauth_token("nnch734d00sl2jdk")
//!     .with_oauth_nonce("kllo9940pd9333jh")
//!     .with_oauth_timestamp("1191242096")
//!     .with_oauth_version("1.0");
//!
//! let key = SigningKey::hmac_sha1("kd94hf93k423kf44", Some("pfkkdhi9sl3r4s00".to_string()));
//! let header = AuthorizationBuilder::new()
//!     .with_realm("Photos")
//!     .with_signature_builder(
//!         SignatureBuilder::new(key).with_base_string_builder(base_string_builder),
//!     )
//!     .build()?;
//!
//! assert!(header.contains(r#"oauth_signature="tR3%2BTy81lMeYAr%2FFid0kMTYa%2FWM%3D""#));
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod percent;

mod parameters;
pub use parameters::{ParameterKind, ParameterSet, Parameters};

mod base_string;
pub use base_string::BaseStringBuilder;

mod signature;
pub use signature::{BaseStringSource, SignatureBuilder, SignatureMethod, SigningKey};

mod authorization;
pub use authorization::AuthorizationBuilder;

mod nonce;
pub use nonce::{generate_nonce, NONCE_LENGTH};

mod credential;
pub use credential::Credential;

mod sign_request;
pub use sign_request::{parse_form_body, RequestSigner};
