//! Transient search over the editor buffer.
//!
//! The match set is rebuilt from scratch on every query change and is
//! never persisted.

/// Ordered match offsets for the active query, with a cyclic cursor.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    matches: Vec<usize>,
    cursor: usize,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the match set for `pattern` over `text` and reset the
    /// cursor to the first match. Returns the new offsets.
    pub fn set_query(&mut self, pattern: &str, text: &str) -> &[usize] {
        self.matches = find_matches(pattern, text);
        self.cursor = 0;
        &self.matches
    }

    pub fn clear(&mut self) {
        self.matches.clear();
        self.cursor = 0;
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Offset of the active match, if any.
    pub fn current(&self) -> Option<usize> {
        self.matches.get(self.cursor).copied()
    }

    /// 1-based position of the active match, for "n of m" display.
    pub fn position(&self) -> Option<(usize, usize)> {
        if self.matches.is_empty() {
            None
        } else {
            Some((self.cursor + 1, self.matches.len()))
        }
    }

    /// Advance to the next match, wrapping from last to first. No-op
    /// on an empty match set.
    pub fn next(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.matches.len();
        self.current()
    }

    /// Step to the previous match, wrapping from first to last. No-op
    /// on an empty match set.
    pub fn previous(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + self.matches.len() - 1) % self.matches.len();
        self.current()
    }
}

/// Byte offsets of every case-insensitive occurrence of `pattern` in
/// `text`, scanning left to right past each match (global match
/// semantics). An empty pattern matches nothing.
pub fn find_matches(pattern: &str, text: &str) -> Vec<usize> {
    if pattern.is_empty() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        match match_len_ignore_case(&text[pos..], pattern) {
            Some(len) => {
                matches.push(pos);
                pos += len;
            }
            None => {
                // Step one char forward, staying on a boundary
                pos += text[pos..]
                    .chars()
                    .next()
                    .map(char::len_utf8)
                    .unwrap_or(1);
            }
        }
    }
    matches
}

/// If `hay` starts with `needle` ignoring case, the byte length of the
/// matched prefix in `hay`.
fn match_len_ignore_case(hay: &str, needle: &str) -> Option<usize> {
    let mut hay_chars = hay.chars();
    let mut len = 0;
    for nc in needle.chars() {
        let hc = hay_chars.next()?;
        if hc != nc && !hc.to_lowercase().eq(nc.to_lowercase()) {
            return None;
        }
        len += hc.len_utf8();
    }
    Some(len)
}
