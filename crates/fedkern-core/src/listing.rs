//! Parsing of Koji directory-listing pages.
//!
//! Listings are Apache-style index pages. Only two things are read from them:
//! version strings out of href attributes on the top-level page, and the text
//! of the last anchor on a per-version page.

use regex::Regex;
use std::sync::OnceLock;

fn version_href_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"href="(\d.\d+.\d+)"#).expect("valid regex"))
}

fn anchor_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<a\b([^>]*)>(.*?)</a\s*>").expect("valid regex"))
}

fn quoted_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""[^"]*"|'[^']*'"#).expect("valid regex"))
}

fn href_attr_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)(?:^|\s)href(?:\s*=|\s|$)").expect("valid regex"))
}

/// True if the tag's attribute text names an `href` attribute.
/// Quoted values are blanked first so words inside them don't count.
fn has_href_attr(attrs: &str) -> bool {
    href_attr_re().is_match(&quoted_value_re().replace_all(attrs, "\"\""))
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"))
}

/// Every version string referenced by an href, in page order.
///
/// Duplicates are kept. The pattern's `.` is a wildcard, so a match is only
/// a candidate until it parses as a version.
pub fn extract_versions(html: &str) -> Vec<String> {
    version_href_re()
        .captures_iter(html)
        .map(|c| c[1].to_string())
        .collect()
}

/// Text content of every `<a>` element carrying an href attribute, in page order.
pub fn anchor_texts(html: &str) -> Vec<String> {
    anchor_re()
        .captures_iter(html)
        .filter(|c| has_href_attr(&c[1]))
        .map(|c| decode_entities(&tag_re().replace_all(&c[2], "")))
        .collect()
}

/// Text of the last href anchor with its final character removed
/// (listings end directory names with `/`). `None` if the page has no anchors.
pub fn release_descriptor(html: &str) -> Option<String> {
    let mut text = anchor_texts(html).pop()?;
    text.pop();
    Some(text)
}

/// Decodes the character references that appear in index pages.
/// Unknown references are left as written.
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        let decoded = rest
            .find(';')
            .filter(|&end| end <= 10)
            .and_then(|end| decode_entity(&rest[1..end]).map(|c| (c, end)));
        match decoded {
            Some((c, end)) => {
                out.push(c);
                rest = &rest[end + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let num = name.strip_prefix('#')?;
            let code = match num.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => num.parse().ok()?,
            };
            char::from_u32(code)
        }
    }
}
