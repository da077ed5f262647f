//! Context-aware escaping for attribute values
//!
//! Each attribute is escaped for the context it lands in: plain attribute
//! text, a link target, or an inline event handler.

use crate::domain::value_objects::entity_len;

/// Escaping context for an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Plain attribute text
    Attr,
    /// `href` and other link targets
    Url,
    /// Inline script such as `onclick`
    Js,
}

/// Protocols a link may use. Anything else is rejected.
pub const ALLOWED_PROTOCOLS: &[&str] = &[
    "http", "https", "ftp", "ftps", "mailto", "news", "irc", "gopher", "nntp", "feed", "telnet",
    "mms", "rtsp", "svn", "tel", "fax", "xmpp", "webcal", "urn",
];

/// Escape text for an attribute value.
///
/// Encodes `& < > " '`, leaving already well-formed entities alone.
pub fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(ch) = rest.chars().next() {
        match ch {
            '&' => match entity_len(rest) {
                Some(len) => {
                    out.push_str(&rest[..len]);
                    rest = &rest[len..];
                    continue;
                }
                None => out.push_str("&amp;"),
            },
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            c => out.push(c),
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Clean a link target for an `href` attribute.
///
/// Strips characters that have no business in a URL, prefixes bare hosts
/// with `http://`, and returns an empty string for disallowed protocols.
pub fn escape_url(url: &str) -> String {
    let url = url.trim().replace(' ', "%20");
    let cleaned: String = url.chars().filter(|c| is_url_char(*c)).collect();
    if cleaned.is_empty() {
        return cleaned;
    }

    let cleaned = cleaned.replace(";//", "://");
    let cleaned = if !cleaned.contains(':')
        && !cleaned.starts_with(['/', '#', '?'])
        && !looks_like_script_path(&cleaned)
    {
        format!("http://{}", cleaned)
    } else {
        cleaned
    };

    if let Some(protocol) = protocol_of(&cleaned) {
        let protocol = protocol.to_ascii_lowercase();
        if !ALLOWED_PROTOCOLS.contains(&protocol.as_str()) {
            return String::new();
        }
    }

    cleaned.replace('&', "&#038;").replace('\'', "&#039;")
}

/// Escape inline script for an event handler attribute.
///
/// Double quotes and markup characters become entities, single quotes and
/// backslashes are backslash-escaped, newlines become `\n`.
pub fn escape_js(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(ch) = rest.chars().next() {
        match ch {
            '&' => match entity_len(rest) {
                Some(len) => {
                    let entity = &rest[..len];
                    if is_single_quote_entity(entity) {
                        out.push_str("\\'");
                    } else {
                        out.push_str(entity);
                    }
                    rest = &rest[len..];
                    continue;
                }
                None => out.push_str("&amp;"),
            },
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\r' => {}
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
        rest = &rest[ch.len_utf8()..];
    }
    out
}

/// Escape a value for the given context
pub fn escape_for(s: &str, escape: Escape) -> String {
    match escape {
        Escape::Attr => escape_attr(s),
        Escape::Url => escape_url(s),
        Escape::Js => escape_js(s),
    }
}

fn is_url_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || "-~+_.?#=!&;,/:%@$|*'()[]".contains(c)
        || !c.is_ascii()
}

fn looks_like_script_path(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    match lower.find(".php") {
        Some(pos) if pos > 0 => lower[..pos]
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-'),
        _ => false,
    }
}

/// Scheme of `url` when it has one ahead of any path, query or fragment.
fn protocol_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let scheme = &url[..colon];
    let is_scheme = !scheme.is_empty()
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    is_scheme.then_some(scheme)
}

fn is_single_quote_entity(entity: &str) -> bool {
    let body = entity.trim_start_matches('&').trim_end_matches(';');
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16) == Ok(0x27);
    }
    if let Some(dec) = body.strip_prefix('#') {
        return dec.parse::<u32>() == Ok(39);
    }
    false
}
