// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Word preparation: splitting display text and classifying highlights.

use kurbo::Rect;

/// Fallback word height when nothing has been measured yet.
const FALLBACK_WORD_HEIGHT: f64 = 50.0;

/// One display word, with its highlight classification.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WordSpan {
    /// The word as rendered.
    pub text: String,
    /// Whether the word matched a highlight token.
    pub highlighted: bool,
}

/// Split `text` on whitespace into [`WordSpan`]s.
///
/// A word is highlighted when it *starts with* any of the highlight tokens,
/// so `"Three.js"` matches the token `"Three"` and trailing punctuation does
/// not defeat a match.
pub fn split_words(text: &str, highlight: &[&str]) -> Vec<WordSpan> {
    text.split_whitespace()
        .map(|w| WordSpan {
            text: w.to_owned(),
            highlighted: highlight.iter().any(|h| !h.is_empty() && w.starts_with(h)),
        })
        .collect()
}

/// The tallest measured word height, with a fallback for the unmeasured
/// state so boundary construction always has something to work with.
pub fn tallest(rects: &[Rect]) -> f64 {
    let max = rects.iter().map(|r| r.height()).fold(0.0, f64::max);
    if max > 0.0 { max } else { FALLBACK_WORD_HEIGHT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_any_whitespace() {
        let spans = split_words("React  JavaScript\tThree.js", &[]);
        let texts: Vec<&str> = spans.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, ["React", "JavaScript", "Three.js"]);
    }

    // Prefix matching: the token highlights derived forms of the word.
    #[test]
    fn highlight_matches_by_prefix() {
        let spans = split_words("React Three.js Tailwind CSS", &["React", "Three"]);
        let flags: Vec<bool> = spans.iter().map(|s| s.highlighted).collect();
        assert_eq!(flags, [true, true, false, false]);
    }

    // Empty tokens never match; empty text splits to nothing.
    #[test]
    fn degenerate_inputs() {
        assert!(split_words("", &["x"]).is_empty());
        let spans = split_words("word", &[""]);
        assert!(!spans[0].highlighted);
    }

    #[test]
    fn tallest_falls_back_when_unmeasured() {
        assert_eq!(tallest(&[]), 50.0);
        assert_eq!(tallest(&[Rect::new(0.0, 0.0, 10.0, 0.0)]), 50.0);
        let rects = [
            Rect::new(0.0, 0.0, 40.0, 16.0),
            Rect::new(0.0, 0.0, 60.0, 22.0),
        ];
        assert_eq!(tallest(&rects), 22.0);
    }
}
