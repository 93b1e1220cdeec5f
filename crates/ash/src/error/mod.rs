use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};
use ash_parse::ParseError;

#[cfg(test)]
use mockall::automock;

/// Generalized error handler.
#[cfg_attr(test, automock)]
pub(crate) trait ErrorHandler {
    /// Displays an error that occurred while parsing a line of input.
    fn display_error(&self, line: &str, error: &ParseError);
}

/// A simple error handler, displaying errors on a single line.
pub(crate) struct SimpleErrorHandler;
impl ErrorHandler for SimpleErrorHandler {
    fn display_error(&self, _line: &str, error: &ParseError) {
        eprintln!("ash: {error}");
    }
}

/// A guiding error handler, displaying errors within their source line together with help.
pub(crate) struct GuidingErrorHandler;
impl ErrorHandler for GuidingErrorHandler {
    fn display_error(&self, line: &str, error: &ParseError) {
        eprintln!("{}", render_parse_error(line, error, true));
    }
}

/// Renders a parse error as an annotated snippet of the offending line.
fn render_parse_error(line: &str, error: &ParseError, color: bool) -> String {
    // Errors at the end of input point one past the last character, so a trailing space is
    // appended to give the annotation something to point at.
    let line = line.trim_end();
    let source = format!("{line} ");
    let max = line.chars().count() + 1;
    let start = char_offset(line, error.span().start);
    let end = char_offset(line, error.span().end).clamp(start + 1, max);

    let title = match error {
        ParseError::Lex(_) => "lexical error",
        _ => "syntax error",
    };
    let label = error.to_string();

    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(label.as_str()),
            id: None,
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![Annotation {
            label: Some(title),
            id: None,
            annotation_type: AnnotationType::Note,
        }],
        slices: vec![Slice {
            source: &source,
            line_start: 1,
            origin: None,
            fold: true,
            annotations: vec![SourceAnnotation {
                label: error.help(),
                annotation_type: AnnotationType::Error,
                range: (start, end),
            }],
        }],
        opt: FormatOptions {
            color,
            ..Default::default()
        },
    };

    DisplayList::from(snippet).to_string()
}

/// Converts a byte offset into a character offset, clamped to the end of the text.
fn char_offset(text: &str, byte_offset: usize) -> usize {
    match text.get(..byte_offset) {
        Some(prefix) => prefix.chars().count(),
        None if byte_offset >= text.len() => text.chars().count(),
        None => text.char_indices().take_while(|(i, _)| *i < byte_offset).count(),
    }
}

#[cfg(test)]
mod tests {
    use ash_parse::parse;

    use super::*;

    #[test]
    fn it_renders_help_for_syntax_errors() {
        let line = "a | | b\n";
        let error = parse(line).unwrap_err();

        let rendered = render_parse_error(line, &error, false);

        assert!(rendered.contains("expected a command before PIPE at position 4"));
        assert!(rendered.contains("a command is missing here"));
        assert!(rendered.contains("a | | b"));
    }

    #[test]
    fn it_renders_errors_at_end_of_input() {
        let line = "echo 'abc";
        let error = parse(line).unwrap_err();

        let rendered = render_parse_error(line, &error, false);

        assert!(rendered.contains("unterminated string starting at position 5"));
        assert!(rendered.contains("lexical error"));

        let error = parse("a |").unwrap_err();
        assert!(render_parse_error("a |", &error, false).contains("a command is missing here"));
    }

    #[test]
    fn it_converts_byte_offsets_to_char_offsets() {
        assert_eq!(char_offset("é|x", 2), 1);
        assert_eq!(char_offset("é|x", 3), 2);
        assert_eq!(char_offset("é|x", 10), 3);
        assert_eq!(char_offset("é|x", 1), 1);
    }
}
