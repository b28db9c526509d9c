//! RFC 3986 percent codec for URL-encoded octet payloads.

/// Percent-encodes arbitrary bytes.
///
/// Unreserved characters (ALPHA / DIGIT / `-` / `.` / `_` / `~`) are left
/// as-is; every other byte becomes `%HH` with uppercase hex. Space encodes
/// to `%20`, never `+`.
///
/// # Example
///
/// ```
/// use data_uri::percent;
///
/// assert_eq!(percent::encode(b"Az09-._~"), "Az09-._~");
/// assert_eq!(percent::encode(b"a b\xFF"), "a%20b%FF");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    // Worst case every byte becomes "%XX".
    let mut out = String::with_capacity(bytes.len() * 3);
    for &b in bytes {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[(b >> 4) as usize] as char);
                out.push(HEX[(b & 0x0F) as usize] as char);
            }
        }
    }
    out
}

/// Percent-decodes a string into bytes, best-effort.
///
/// A `%` followed by two hex digits becomes the corresponding byte.
/// Malformed or truncated sequences pass through literally, so decoding
/// never fails.
///
/// # Example
///
/// ```
/// use data_uri::percent;
///
/// assert_eq!(percent::decode("a%20b"), b"a b");
/// assert_eq!(percent::decode("100%"), b"100%");
/// ```
pub fn decode(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    out
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
