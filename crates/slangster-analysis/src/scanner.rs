//! Longest-match-first token scanning.
//!
//! Overlap policy: matching is non-overlapping and left-to-right per token,
//! and bytes claimed by a longer token are invisible to shorter tokens.
//! So with tokens `":("` and `">:("` both present, the text `">:("`
//! records exactly one `">:("` match, and `"aaa"` against token `"aa"`
//! counts one occurrence.

use crate::lexicon::Lexicon;

/// Extract every lexicon token present in `text`, one entry per occurrence.
///
/// Tokens are tried longest first; result order follows that key order, so
/// repeated calls on the same input produce identical output.
#[must_use]
pub fn scan(lexicon: &Lexicon, text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut claimed = vec![false; text.len()];
    let mut found = Vec::new();

    for token in lexicon.scan_keys() {
        if token.is_empty() || token.len() > text.len() {
            continue;
        }

        let mut start = 0;
        while start <= text.len() - token.len() {
            let Some(offset) = text[start..].find(token) else {
                break;
            };
            let begin = start + offset;
            let end = begin + token.len();

            if claimed[begin..end].iter().any(|&c| c) {
                // A longer token already owns part of this span; step past
                // the first char and keep looking.
                let step = text[begin..].chars().next().map_or(1, char::len_utf8);
                start = begin + step;
                continue;
            }

            claimed[begin..end].fill(true);
            found.push(token.to_string());
            start = end;
        }
    }

    found
}
