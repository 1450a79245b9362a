//! Lossy, locale-naive text normalization.
//!
//! Text is lowercased, digits and a fixed set of punctuation and symbol
//! characters are deleted outright (not replaced by a space), and what is left
//! is split on single space characters. No stemming is applied.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of digits, or runs of the stripped punctuation/symbol class.
/// Newlines are part of the class, so line breaks glue words together.
const STRIP_PATTERN: &str = r#"\d+|[!,.*\-–:;%&?€+#@£$∞§|/\[\](){}"„“'´«»\n]+"#;

static STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(STRIP_PATTERN).expect("strip pattern is a valid regex"));

/// Lowercase `text` and remove every digit and stripped symbol.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    STRIP.replace_all(&lowered, "").into_owned()
}

/// Split normalized text into tokens.
///
/// Splitting happens on every single `' '`, so consecutive, leading or
/// trailing spaces produce empty tokens. Callers decide what to do with them;
/// the vocabulary builder never admits the empty token.
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text).split(' ').map(str::to_owned).collect()
}

/// Same as [`tokenize`] with empty tokens dropped.
pub fn tokenize_non_empty(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}
