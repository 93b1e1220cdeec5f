/// Returns `true` if a character separates tokens.
///
/// Matches the C locale `isspace` set.
pub fn is_whitespace(c: &char) -> bool {
    matches!(
        c,
        '\u{0020}'   // space
        | '\u{0009}' // \t
        | '\u{000A}' // \n
        | '\u{000B}' // vertical tab
        | '\u{000C}' // form feed
        | '\u{000D}' // \r
    )
}

/// Returns `true` if a character terminates a bare word.
pub fn is_word_delimiter(c: &char) -> bool {
    is_whitespace(c) || matches!(c, '|' | ';' | '>' | '\'' | '"')
}

/// Returns `true` if a character opens a quoted word.
pub fn is_quote(c: &char) -> bool {
    matches!(c, '\'' | '"')
}
