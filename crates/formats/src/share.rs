use catalog::Catalog;
use scene::MarkerSet;

/// Query parameter carrying the encoded selection.
pub const QUERY_PARAM: &str = "cities";

/// Encodes the selection as the `cities` query value.
///
/// Names are percent-escaped and comma-joined in the registry's fixed sort
/// order. An empty selection encodes to `None` (the parameter is absent from
/// the URL), never to an empty string.
pub fn encode(markers: &MarkerSet) -> Option<String> {
    if markers.is_empty() {
        return None;
    }
    let joined = markers
        .all()
        .map(|p| escape(&p.name))
        .collect::<Vec<_>>()
        .join(",");
    Some(joined)
}

/// Decodes a `cities` query value against the catalog.
///
/// Tokens that fail percent-unescaping or name no catalog entry are silently
/// dropped, so a stale or hand-edited URL restores whatever subset still
/// resolves.
pub fn decode(value: &str, catalog: &Catalog) -> MarkerSet {
    let mut markers = MarkerSet::new();
    for token in value.split(',') {
        let Some(name) = unescape(token) else {
            continue;
        };
        if let Some(point) = catalog.lookup(&name) {
            markers.add(point.clone());
        }
    }
    markers
}

/// Extracts and decodes the selection from a full query string
/// (`a=1&cities=Berlin%2CHamburg` style). A missing parameter yields the
/// empty set.
pub fn decode_query(query: &str, catalog: &Catalog) -> MarkerSet {
    for pair in query.trim_start_matches('?').split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        if key == QUERY_PARAM {
            return decode(value, catalog);
        }
    }
    MarkerSet::new()
}

/// Builds the shareable URL for the current selection.
pub fn share_url(base: &str, markers: &MarkerSet) -> String {
    match encode(markers) {
        Some(value) => format!("{base}?{QUERY_PARAM}={value}"),
        None => base.to_string(),
    }
}

fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~')
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// Percent-unescapes one token. Returns `None` for malformed escapes or
/// invalid UTF-8, so the caller can drop the token instead of failing the
/// whole restore.
fn unescape(token: &str) -> Option<String> {
    let bytes = token.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes.get(i + 1..i + 3)?;
            let hex = std::str::from_utf8(hex).ok()?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else if bytes[i] == b'+' {
            out.push(b' ');
            i += 1;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}
