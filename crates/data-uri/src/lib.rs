//! "data" URI (RFC 2397) construction, serialization, and parsing.
//!
//! A data URI embeds a payload directly in the URI text, tagged with a
//! media type and an encoding scheme (percent-encoded octets or base64).
//! This crate provides a convenient way to build and pick apart such URIs,
//! but does not enforce the RFC beyond its grammar. In particular it will
//! not:
//!
//! - validate the media type provided or parsed;
//! - validate that a payload supplied in encoded form actually matches its
//!   stated encoding (that only surfaces when decoding).
//!
//! # Overview
//!
//! - [`DataUri`] - the value type: media type, encoding tag, encoded payload
//! - [`Encoding`] - the two supported payload encodings
//! - [`percent`] - the RFC 3986 percent codec used for URL-encoded octets
//!
//! # Example
//!
//! ```
//! use data_uri::{DataUri, Encoding};
//!
//! let uri = DataUri::new("image/png", b"\x89PNG", Encoding::Base64);
//! assert_eq!(uri.to_string(), "data:image/png;base64,iVBORw==");
//!
//! let parsed = DataUri::try_parse("data:image/png;base64,iVBORw==").unwrap();
//! assert_eq!(parsed, uri);
//! assert_eq!(parsed.decode_data().unwrap(), b"\x89PNG");
//! ```

mod data_uri;
mod encoding;
mod error;
pub mod percent;

pub use data_uri::{DataUri, DEFAULT_TYPE};
pub use encoding::{Encoding, BASE64_KEYWORD};
pub use error::DataUriError;
