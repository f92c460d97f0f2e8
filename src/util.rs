//! Byte decoding helpers for HTML input of unknown encoding.

use std::borrow::Cow;

/// Number of leading bytes scanned for a `<meta>` charset declaration.
const META_PRESCAN_LEN: usize = 1024;

/// Decode bytes to a string, handling various encodings.
///
/// 1. UTF-8 (a BOM is stripped by encoding_rs)
/// 2. The hint encoding, when UTF-8 is malformed
/// 3. Windows-1252, the usual encoding of legacy HTML
///
/// Borrows when the input is valid UTF-8.
pub fn decode_text<'a>(bytes: &'a [u8], hint_encoding: Option<&str>) -> Cow<'a, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);

    if !malformed {
        return result;
    }

    if let Some(name) = hint_encoding
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Extract the charset named by a `<meta>` tag near the start of a document.
///
/// Matches both `<meta charset="...">` and the
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">` form.
/// Quotes are optional.
pub fn extract_meta_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(META_PRESCAN_LEN)];

    let meta_start = prefix
        .windows(5)
        .position(|w| w.eq_ignore_ascii_case(b"<meta"))?;
    let after_meta = &prefix[meta_start..];

    let charset_pos = after_meta
        .windows(8)
        .position(|w| w.eq_ignore_ascii_case(b"charset="))?;
    let after_charset = &after_meta[charset_pos + 8..];

    let (value, quote) = match after_charset.first()? {
        &q @ (b'"' | b'\'') => (&after_charset[1..], Some(q)),
        _ => (after_charset, None),
    };

    let value_end = value
        .iter()
        .position(|&b| match quote {
            Some(q) => b == q,
            None => b.is_ascii_whitespace() || matches!(b, b'"' | b'\'' | b';' | b'>' | b'/'),
        })
        .unwrap_or(value.len());

    let name = std::str::from_utf8(&value[..value_end]).ok()?.trim();
    (!name.is_empty()).then_some(name)
}
