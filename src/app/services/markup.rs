//! Display-safe escaping for snippet text.
//!
//! `escape_html` / `unescape_html` are exact inverses, so code that is written
//! into markup can always be recovered byte for byte.

const ENTITIES: [(char, &str); 5] = [
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('"', "&quot;"),
    ('\'', "&#039;"),
];

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ENTITIES.iter().find(|(c, _)| *c == ch) {
            Some((_, entity)) => out.push_str(entity),
            None => out.push(ch),
        }
    }
    out
}

/// Reverse of `escape_html`. Unknown `&...;` sequences are left untouched.
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match ENTITIES.iter().find(|(_, entity)| rest.starts_with(entity)) {
            Some((ch, entity)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
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

/// FLTK treats `@` in labels as a symbol prefix; double it to show it literally.
pub fn escape_label(text: &str) -> String {
    text.replace('@', "@@")
}

/// Explanation text for the Help message box, which draws it as a label.
pub fn help_text(explanation: &str) -> String {
    escape_label(explanation)
}
