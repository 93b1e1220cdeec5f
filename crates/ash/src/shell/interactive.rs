use std::{borrow::Cow, path::Path};

use log::{debug, warn};
use rustyline::{
    completion::{Completer, FilenameCompleter, Pair},
    error::ReadlineError,
    highlight::{Highlighter, MatchingBracketHighlighter},
    hint::{Hinter, HistoryHinter},
    history::DefaultHistory,
    validate::{self, ValidationResult, Validator},
    Config, Context, Editor,
};
use rustyline_derive::Helper;

use super::{utils::strip_ansi_escapes, Shell, ShellInput};

/// An interactive shell backed by a line editor with history and filename completion.
pub struct RustylineShell {
    editor: Editor<ShellHelper, DefaultHistory>,
    interactive: bool,
}

impl RustylineShell {
    /// Constructs a new interactive shell, loading history from `history_file` if it exists.
    pub fn new(history_file: Option<&Path>) -> rustyline::Result<Self> {
        let helper = ShellHelper {
            completer: FilenameCompleter::new(),
            highlighter: MatchingBracketHighlighter::new(),
            hinter: HistoryHinter {},
            colored_prompt: String::new(),
        };

        let config = Config::builder().auto_add_history(false).build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(helper));

        let interactive = atty::is(atty::Stream::Stdin);
        let mut shell = Self {
            editor,
            interactive,
        };

        if let Some(history_file) = history_file.filter(|_| interactive) {
            shell.load_history_file(history_file);
        }

        Ok(shell)
    }

    fn load_history_file(&mut self, history_file: &Path) {
        if !history_file.exists() {
            return;
        }

        match self.editor.load_history(history_file) {
            Ok(()) => debug!("loaded history from {}", history_file.display()),
            Err(error) => warn!("could not load history file: {}", error),
        }
    }
}

impl Shell for RustylineShell {
    fn prompt_line(&mut self, prompt: &str) -> ShellInput {
        if let Some(helper) = self.editor.helper_mut() {
            helper.colored_prompt = prompt.to_string();
        }

        // The editor measures the prompt to position the cursor, so ANSI escape sequences must
        // not contribute to its length.
        let prompt_text = strip_ansi_escapes(prompt);
        match self.editor.readline(&prompt_text) {
            Ok(mut line) => {
                line.push('\n');
                ShellInput::Line(line)
            }
            Err(ReadlineError::Interrupted) => ShellInput::Interrupt,
            Err(ReadlineError::Eof) => ShellInput::Logout,
            Err(error) => {
                eprintln!("ash: unhandled input: {}", error);
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn add_history_entry(&mut self, line: &str) {
        if let Err(error) = self.editor.add_history_entry(line) {
            warn!("could not add history entry: {error}");
        }
    }

    fn save_history(&mut self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(error) = std::fs::create_dir_all(parent) {
                eprintln!("ash: could not write history file: {error}");
                return;
            }
        }

        if let Err(error) = self.editor.append_history(path) {
            eprintln!("ash: could not write history file: {error}");
        }
    }
}

#[derive(Helper)]
struct ShellHelper {
    completer: FilenameCompleter,
    highlighter: MatchingBracketHighlighter,
    hinter: HistoryHinter,
    colored_prompt: String,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        self.completer.complete(line, pos, ctx)
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for ShellHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default && !self.colored_prompt.is_empty() {
            Cow::Borrowed(&self.colored_prompt)
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned("\x1b[2m".to_owned() + hint + "\x1b[m")
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        self.highlighter.highlight_char(line, pos)
    }
}

impl Validator for ShellHelper {
    fn validate(&self, _: &mut validate::ValidationContext) -> rustyline::Result<ValidationResult> {
        // Each line is complete on its own. Syntax errors are reported after parsing.
        Ok(ValidationResult::Valid(None))
    }

    fn validate_while_typing(&self) -> bool {
        false
    }
}
