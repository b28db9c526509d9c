use data_uri::{DataUri, Encoding};
use proptest::prelude::*;

proptest! {
    #[test]
    fn url_encoded_octets_round_trip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut uri = DataUri::default();
        uri.set_data(&data, Encoding::UrlEncodedOctets);
        prop_assert_eq!(uri.decode_data().unwrap(), data);
    }

    #[test]
    fn base64_round_trip(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let mut uri = DataUri::default();
        uri.set_data(&data, Encoding::Base64);
        prop_assert_eq!(uri.decode_data().unwrap(), data);
    }

    #[test]
    fn serialize_then_parse_round_trip(
        media_type in "[a-z]{1,8}/[a-z]{1,8}",
        data in proptest::collection::vec(any::<u8>(), 0..64),
        base64 in any::<bool>(),
    ) {
        let encoding = if base64 { Encoding::Base64 } else { Encoding::UrlEncodedOctets };
        let uri = DataUri::new(media_type, &data, encoding);
        let text = uri.to_string();
        prop_assert!(DataUri::is_parsable(&text));
        let parsed = DataUri::try_parse(&text).unwrap();
        prop_assert_eq!(&parsed, &uri);
        prop_assert_eq!(parsed.decode_data().unwrap(), data);
    }
}
