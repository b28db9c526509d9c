//! The closed set of payload encoding schemes defined by RFC 2397.

use crate::DataUriError;

/// Keyword used in the data URI to signify base64 encoding.
pub const BASE64_KEYWORD: &str = "base64";

/// Encoding scheme under which a data URI payload is stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Percent-encoded octets (the RFC 2397 default).
    #[default]
    UrlEncodedOctets,
    /// Standard base64 with padding.
    Base64,
}

impl Encoding {
    /// Numeric tag of the scheme: 0 for URL-encoded octets, 1 for base64.
    pub fn tag(self) -> u8 {
        match self {
            Encoding::UrlEncodedOctets => 0,
            Encoding::Base64 => 1,
        }
    }
}

impl TryFrom<u8> for Encoding {
    type Error = DataUriError;

    /// Validates an externally supplied numeric tag.
    fn try_from(tag: u8) -> Result<Self, DataUriError> {
        match tag {
            0 => Ok(Encoding::UrlEncodedOctets),
            1 => Ok(Encoding::Base64),
            _ => Err(DataUriError::UnsupportedEncoding),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_round_trip() {
        assert_eq!(Encoding::try_from(0).unwrap(), Encoding::UrlEncodedOctets);
        assert_eq!(Encoding::try_from(1).unwrap(), Encoding::Base64);
        assert_eq!(Encoding::UrlEncodedOctets.tag(), 0);
        assert_eq!(Encoding::Base64.tag(), 1);
    }

    #[test]
    fn out_of_range_tag_is_rejected() {
        for tag in [2u8, 3, 255] {
            assert_eq!(
                Encoding::try_from(tag),
                Err(DataUriError::UnsupportedEncoding)
            );
        }
    }

    #[test]
    fn default_is_url_encoded_octets() {
        assert_eq!(Encoding::default(), Encoding::UrlEncodedOctets);
    }
}
