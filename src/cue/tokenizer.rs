use lazy_static::lazy_static;
use regex::Regex;

/// Marker that flags a cue sheet as UTF-8.
pub const UTF8_MARKER: [u8; 2] = [0xFE, 0xFF];

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r#""[^"]*"|\S+"#).unwrap();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeMode {
    Utf8,
    Latin1,
}

impl DecodeMode {
    pub fn detect(data: &[u8]) -> Self {
        if data.starts_with(&UTF8_MARKER) {
            DecodeMode::Utf8
        } else {
            DecodeMode::Latin1
        }
    }
}

/// Decodes a whole cue sheet. Never fails, bad UTF-8 sequences become U+FFFD.
pub fn decode(data: &[u8]) -> (DecodeMode, String) {
    let mode = DecodeMode::detect(data);
    let text = match mode {
        DecodeMode::Utf8 => String::from_utf8_lossy(&data[UTF8_MARKER.len()..]).into_owned(),
        DecodeMode::Latin1 => data.iter().map(|&b| b as char).collect(),
    };
    (mode, text)
}

pub fn tokenize(line: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(line)
        .map(|m| unquote(m.as_str()).to_string())
        .collect()
}

pub fn unquote(token: &str) -> &str {
    match token.strip_prefix('"') {
        Some(inner) => inner.strip_suffix('"').unwrap_or(inner),
        None => token,
    }
}

pub fn quote(token: &str) -> String {
    if token.is_empty() {
        return "\"\"".to_string();
    }
    if WHITESPACE_RE.is_match(token) {
        let value = token.replace('"', "'").replace(['\r', '\n'], " ");
        return format!("\"{value}\"");
    }
    token.to_string()
}
