//! Byte-level helpers for loading pages.

use std::borrow::Cow;

/// Decode bytes to a string, handling various encodings.
///
/// This function:
/// 1. First tries UTF-8 (handles BOM automatically via encoding_rs)
/// 2. If malformed, tries the hint encoding (from `<meta charset>` or `<?xml encoding?>`)
/// 3. Falls back to Windows-1252, which is what browsers assume for unlabeled legacy pages
///
/// Uses `Cow<str>` to avoid allocation when the input is valid UTF-8.
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

/// Find a declared character encoding near the start of a page.
///
/// Looks at the first 1024 bytes (the window browsers pre-scan) for an XML
/// declaration `encoding="..."` or an HTML `<meta charset=...>`.
pub fn sniff_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(1024)];

    if let Some(pos) = find_ignore_case(prefix, b"<?xml")
        && let Some(value) = attr_value_after(&prefix[pos..], b"encoding=")
    {
        return Some(value);
    }

    let meta = find_ignore_case(prefix, b"<meta")?;
    attr_value_after(&prefix[meta..], b"charset=")
}

fn find_ignore_case(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

fn attr_value_after<'a>(bytes: &'a [u8], key: &[u8]) -> Option<&'a str> {
    let pos = find_ignore_case(bytes, key)?;
    let after = &bytes[pos + key.len()..];
    let first = *after.first()?;

    let value = if first == b'"' || first == b'\'' {
        let end = after[1..].iter().position(|&b| b == first)?;
        &after[1..1 + end]
    } else {
        let end = after
            .iter()
            .position(|&b| b.is_ascii_whitespace() || matches!(b, b'"' | b'\'' | b';' | b'>' | b'/'))
            .unwrap_or(after.len());
        &after[..end]
    };

    std::str::from_utf8(value).ok().filter(|v| !v.is_empty())
}
