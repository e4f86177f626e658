//! Input decoding helpers.

use std::borrow::Cow;

use memchr::memmem;

/// Decode markup bytes to a string.
///
/// 1. UTF-8 (a BOM is handled by encoding_rs)
/// 2. The encoding declared in the markup (`<?xml encoding=...?>` or
///    `<meta charset=...>`), if UTF-8 decoding was lossy
/// 3. Windows-1252, the usual encoding of legacy HTML
pub fn decode_markup(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    if let Some(label) = declared_encoding(bytes)
        && let Some(encoding) = encoding_rs::Encoding::for_label(label)
    {
        log::debug!("decoding input as {}", encoding.name());
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    log::debug!("input is not UTF-8, falling back to windows-1252");
    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find an encoding label declared near the start of the markup.
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let head = &bytes[..bytes.len().min(1024)];

    if let Some(start) = memmem::find(head, b"<?xml")
        && let Some(label) = attribute_value(&head[start..], b"encoding=")
    {
        return Some(label);
    }

    let meta = memmem::find(&head.to_ascii_lowercase(), b"charset=")?;
    attribute_value(&head[meta..], b"charset=")
}

/// Value following `key`, quoted or bare.
fn attribute_value<'a>(haystack: &'a [u8], key: &[u8]) -> Option<&'a [u8]> {
    let pos = haystack
        .windows(key.len())
        .position(|w| w.eq_ignore_ascii_case(key))?;
    let rest = &haystack[pos + key.len()..];

    let (rest, terminators): (&[u8], &[u8]) = match rest.first()? {
        b'"' => (&rest[1..], b"\""),
        b'\'' => (&rest[1..], b"'"),
        _ => (rest, b" \t\r\n;\"'/>"),
    };
    let end = rest
        .iter()
        .position(|b| terminators.contains(b))
        .unwrap_or(rest.len());
    let value = &rest[..end];
    (!value.is_empty()).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let decoded = decode_markup("<p>héllo</p>".as_bytes());
        assert!(matches!(decoded, Cow::Borrowed(_)));
        assert_eq!(decoded, "<p>héllo</p>");
    }

    #[test]
    fn test_xml_declaration() {
        let bytes = b"<?xml version='1.0' encoding='iso-8859-2'?><p>\xb1</p>";
        assert_eq!(declared_encoding(bytes), Some(&b"iso-8859-2"[..]));
        assert_eq!(decode_markup(bytes), "<?xml version='1.0' encoding='iso-8859-2'?><p>\u{105}</p>");
    }

    #[test]
    fn test_meta_charset() {
        assert_eq!(
            declared_encoding(b"<meta charset=\"koi8-r\"><p>x</p>"),
            Some(&b"koi8-r"[..])
        );
        assert_eq!(
            declared_encoding(
                b"<meta http-equiv=\"Content-Type\" content=\"text/html; CHARSET=shift_jis\">"
            ),
            Some(&b"shift_jis"[..])
        );
    }

    #[test]
    fn test_windows_1252_fallback() {
        assert_eq!(decode_markup(b"<p>\x93quoted\x94</p>"), "<p>\u{201c}quoted\u{201d}</p>");
    }
}
