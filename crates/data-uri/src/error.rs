use thiserror::Error;

/// Errors produced by [`DataUri`](crate::DataUri) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataUriError {
    /// An encoding tag outside the supported set was supplied.
    #[error("unsupported encoding scheme")]
    UnsupportedEncoding,
    /// The stored payload is not valid base64.
    #[error("invalid base64 payload")]
    InvalidBase64(#[from] base64::DecodeError),
    /// The input text does not match the data URI grammar.
    #[error("not a parsable data URI")]
    Unparsable,
}
