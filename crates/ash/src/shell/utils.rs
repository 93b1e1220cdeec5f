use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::Regex;

/// Strips all ANSI control sequences from some text.
pub fn strip_ansi_escapes(text: &str) -> Cow<str> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"\x1b\[[0-9;]*[a-zA-Z]").unwrap();
    }
    RE.replace_all(text, "")
}

#[cfg(test)]
mod tests {
    use ansi_term::Colour;

    use super::*;

    #[test]
    fn it_strips_colors() {
        let prompt = Colour::Cyan.bold().paint("ash> ").to_string();
        assert_eq!(strip_ansi_escapes(&prompt), "ash> ");
        assert_eq!(strip_ansi_escapes("plain"), "plain");
    }
}
