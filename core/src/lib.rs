//! Core components for signing OAuth 1.0 requests.
//!
//! This crate provides the foundational types shared by the oauthsign
//! ecosystem: the error type, hashing helpers, time helpers and the
//! request decomposition used before a request can be signed.
//!
//! ## Overview
//!
//! - **Error**: A single [`Error`] type carrying an [`ErrorKind`] so callers can tell
//!   configuration mistakes from invalid credentials.
//! - **SigningRequest**: Splits `http::request::Parts` into the pieces a signer needs:
//!   method, normalized base URI and decoded query parameters.
//! - **SigningCredential**: A trait for credentials that can tell whether they are usable.
//!
//! ## Example
//!
//! ```
//! use oauthsign_core::SigningRequest;
//!
//! # fn example() -> oauthsign_core::Result<()> {
//! let parts = http::Request::builder()
//!     .method("GET")
//!     .uri("HTTP://Photos.Example.NET:80/photos?size=original")
//!     .body(())
//!     .unwrap()
//!     .into_parts()
//!     .0;
//!
//! let req = SigningRequest::build(&parts)?;
//! assert_eq!(req.base_uri(), "http://photos.example.net/photos");
//! assert_eq!(req.query, vec![("size".to_string(), "original".to_string())]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Base64 and HMAC utilities
//! - [`time`]: Time utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::SigningCredential;
mod request;
pub use request::SigningRequest;
