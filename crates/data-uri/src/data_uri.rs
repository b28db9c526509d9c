//! The [`DataUri`] value type.

use std::fmt;
use std::str::FromStr;

use base64::Engine;

use crate::encoding::{Encoding, BASE64_KEYWORD};
use crate::error::DataUriError;
use crate::percent;

/// Media type substituted when none is set, per RFC 2397.
pub const DEFAULT_TYPE: &str = "text/plain;charset=US-ASCII";

/// An RFC 2397 data URI: a media type, an encoding scheme, and a payload
/// held in already-encoded form.
///
/// The media type is stored verbatim and never validated. The payload is
/// trusted to match its encoding tag at write time; a mismatch only
/// surfaces through [`DataUri::decode_data`].
///
/// # Example
///
/// ```
/// use data_uri::{DataUri, Encoding};
///
/// let mut uri = DataUri::default();
/// assert_eq!(uri.to_string(), "data:,");
///
/// uri.set_media_type("text/html");
/// uri.set_data(b"<p>hi</p>", Encoding::UrlEncodedOctets);
/// assert_eq!(uri.to_string(), "data:text/html,%3Cp%3Ehi%3C%2Fp%3E");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    media_type: String,
    encoding: Encoding,
    encoded_data: String,
}

impl Default for DataUri {
    /// The RFC 2397 defaults: `text/plain;charset=US-ASCII`, URL-encoded
    /// octets, empty payload.
    fn default() -> Self {
        DataUri {
            media_type: DEFAULT_TYPE.to_string(),
            encoding: Encoding::UrlEncodedOctets,
            encoded_data: String::new(),
        }
    }
}

impl DataUri {
    /// Creates a data URI from raw (unencoded) data, encoding it with the
    /// given scheme.
    pub fn new(media_type: impl Into<String>, data: &[u8], encoding: Encoding) -> Self {
        let mut uri = DataUri {
            media_type: media_type.into(),
            encoding,
            encoded_data: String::new(),
        };
        uri.set_data(data, encoding);
        uri
    }

    /// Returns the media type. If none was provided then in accordance with
    /// RFC 2397 this falls back to [`DEFAULT_TYPE`]; it never returns an
    /// empty string.
    pub fn media_type(&self) -> &str {
        if self.media_type.is_empty() {
            DEFAULT_TYPE
        } else {
            &self.media_type
        }
    }

    /// Sets the media type verbatim, including the empty string; emptiness
    /// is only resolved at read time by [`DataUri::media_type`].
    pub fn set_media_type(&mut self, media_type: impl Into<String>) {
        self.media_type = media_type.into();
    }

    /// Returns the scheme under which the payload is stored.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Returns the payload in its encoded form.
    pub fn encoded_data(&self) -> &str {
        &self.encoded_data
    }

    /// Encodes `data` with the given scheme and stores the result along
    /// with the scheme tag.
    pub fn set_data(&mut self, data: &[u8], encoding: Encoding) {
        self.encoding = encoding;
        self.encoded_data = match encoding {
            Encoding::UrlEncodedOctets => percent::encode(data),
            Encoding::Base64 => base64::engine::general_purpose::STANDARD.encode(data),
        };
    }

    /// Stores an already-encoded payload and its scheme tag as given, with
    /// no transformation. The data is not validated here, so supply the
    /// correct scheme or [`DataUri::decode_data`] will fail later.
    pub fn set_encoded_data(&mut self, encoding: Encoding, data: impl Into<String>) {
        self.encoding = encoding;
        self.encoded_data = data.into();
    }

    /// Decodes the payload using the scheme it was stored under.
    ///
    /// Percent-decoding is best-effort and always succeeds; base64 decoding
    /// is strict and fails on payloads that are not valid base64 (which can
    /// only arise via [`DataUri::set_encoded_data`] or parsing).
    pub fn decode_data(&self) -> Result<Vec<u8>, DataUriError> {
        match self.encoding {
            Encoding::UrlEncodedOctets => Ok(percent::decode(&self.encoded_data)),
            Encoding::Base64 => {
                let decoded = base64::engine::general_purpose::STANDARD.decode(&self.encoded_data)?;
                Ok(decoded)
            }
        }
    }

    /// Reports whether `input` matches the data URI grammar accepted by
    /// [`DataUri::try_parse`].
    pub fn is_parsable(input: &str) -> bool {
        split_data_uri(input).is_some()
    }

    /// Parses a data URI string.
    ///
    /// The payload is captured verbatim and not decoded; the media type is
    /// taken untrimmed, or set to [`DEFAULT_TYPE`] when absent, so parsing
    /// `"data:,"` yields a value equal to `DataUri::default()`. Returns
    /// `None` when `input` does not match the grammar.
    ///
    /// # Example
    ///
    /// ```
    /// use data_uri::{DataUri, Encoding};
    ///
    /// let uri = DataUri::try_parse("data:image/gif;base64,R0lGODdh").unwrap();
    /// assert_eq!(uri.media_type(), "image/gif");
    /// assert_eq!(uri.encoding(), Encoding::Base64);
    /// assert_eq!(uri.encoded_data(), "R0lGODdh");
    /// ```
    pub fn try_parse(input: &str) -> Option<DataUri> {
        let (media_type, encoding, payload) = split_data_uri(input)?;
        let mut uri = DataUri::default();
        uri.set_media_type(media_type.unwrap_or(DEFAULT_TYPE));
        uri.set_encoded_data(encoding, payload);
        Some(uri)
    }
}

impl fmt::Display for DataUri {
    /// Canonical textual form.
    ///
    /// The media type segment is omitted when it reads as the default and
    /// the encoding is the default, producing the minimal `data:,`. An
    /// explicitly set media type equal to [`DEFAULT_TYPE`] is therefore
    /// emitted as if unset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("data:")?;
        if self.media_type() != DEFAULT_TYPE || self.encoding != Encoding::UrlEncodedOctets {
            f.write_str(self.media_type())?;
            if self.encoding == Encoding::Base64 {
                write!(f, ";{BASE64_KEYWORD}")?;
            }
        }
        write!(f, ",{}", self.encoded_data)
    }
}

impl FromStr for DataUri {
    type Err = DataUriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataUri::try_parse(s).ok_or(DataUriError::Unparsable)
    }
}

/// Splits `data:<mediatype>?(;base64)?,<payload>?` into its parts: the raw
/// media type (`None` when absent), the selected encoding, and the
/// still-encoded payload.
///
/// The split happens at the first `,` after the `data:` prefix; any further
/// commas belong to the payload.
fn split_data_uri(input: &str) -> Option<(Option<&str>, Encoding, &str)> {
    let rest = input.strip_prefix("data:")?;
    let comma = rest.find(',')?;
    let head = &rest[..comma];
    let payload = &rest[comma + 1..];
    let (media_type, encoding) = match strip_base64_keyword(head) {
        Some(media_type) => (media_type, Encoding::Base64),
        None => (head, Encoding::UrlEncodedOctets),
    };
    let media_type = (!media_type.is_empty()).then_some(media_type);
    Some((media_type, encoding, payload))
}

/// Strips a trailing `;base64` marker (case-insensitive) from the segment
/// before the comma, returning the media type portion, or `None` when the
/// marker is absent.
fn strip_base64_keyword(head: &str) -> Option<&str> {
    let bytes = head.as_bytes();
    let marker_len = BASE64_KEYWORD.len() + 1;
    if bytes.len() < marker_len {
        return None;
    }
    let (media, marker) = bytes.split_at(bytes.len() - marker_len);
    if marker[0] == b';' && marker[1..].eq_ignore_ascii_case(BASE64_KEYWORD.as_bytes()) {
        // The marker is pure ASCII, so the split lands on a char boundary.
        Some(&head[..media.len()])
    } else {
        None
    }
}
