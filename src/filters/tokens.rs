//! Splits raw input text into the token list both filters work on.

/// The end-of-line comment marker recognized by `strip_comments`.
pub const COMMENT_MARKER: &str = "//";

/// Split on `,` and trim each element.
/// Empty elements are kept, so `""` yields `[""]` and a
/// trailing comma yields a trailing empty token.
pub fn split_tokens(text: &str) -> Vec<String> {
    text.split(',').map(|s| s.trim().to_owned()).collect()
}

/// Removes everything from the first `//` on each line, then joins
/// the surviving parts back together in order.
/// 
/// Lines without a comment keep their line terminator. A line that
/// carries a comment loses it along with the comment text.
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for line in text.split_inclusive('\n') {
        match line.find(COMMENT_MARKER) {
            Some(ix) => out.push_str(&line[..ix]),
            None => out.push_str(line),
        }
    }
    out
}
