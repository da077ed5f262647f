//! Title slugs
//!
//! Legacy callers register nodes with a title but no id. The id is then
//! derived from the title: markup and entities removed, lowercased, runs of
//! whitespace and dots turned into single dashes, non-ASCII bytes kept as
//! lowercase percent escapes, and anything else dropped.

/// Derive a node id from a display title.
///
/// Returns an empty string when nothing usable survives.
pub fn slugify(title: &str) -> String {
    let text = strip_entities(&strip_tags(title.trim()));

    let mut slug = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'a'..='z' | '0'..='9' | '_' | '-' => slug.push(ch),
            'A'..='Z' => slug.push(ch.to_ascii_lowercase()),
            '.' => slug.push('-'),
            c if c.is_whitespace() => slug.push('-'),
            c if !c.is_ascii() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    slug.push_str(&format!("%{:02x}", byte));
                }
            }
            _ => {}
        }
    }

    collapse_dashes(&slug)
}

fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

fn strip_entities(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match entity_len(tail) {
            Some(len) => rest = &tail[len..],
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length of a `&name;` / `&#123;` / `&#x1f;` entity at the start of `s`.
pub(crate) fn entity_len(s: &str) -> Option<usize> {
    let body = s.strip_prefix('&')?;
    let end = body.find(';')?;
    let name = &body[..end];
    let valid = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        !hex.is_empty() && hex.chars().all(|c| c.is_ascii_hexdigit())
    } else if let Some(dec) = name.strip_prefix('#') {
        !dec.is_empty() && dec.chars().all(|c| c.is_ascii_digit())
    } else {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    };
    valid.then_some(end + 2)
}

fn collapse_dashes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '-' && out.ends_with('-') {
            continue;
        }
        out.push(ch);
    }
    out.trim_matches('-').to_string()
}
