use super::{Shell, ShellInput};

/// A non-interactive shell that yields a single line of input, as given by `ash -c`.
pub struct SingleCommandShell {
    it: Option<String>,
}

impl SingleCommandShell {
    pub fn new(line: String) -> Self {
        Self { it: Some(line) }
    }
}

impl Shell for SingleCommandShell {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        match self.it.take() {
            Some(line) => ShellInput::Line(line),
            None => ShellInput::None,
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn add_history_entry(&mut self, _line: &str) {}

    fn save_history(&mut self, _path: &std::path::Path) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_yields_one_line() {
        let mut shell = SingleCommandShell::new("echo hi".into());
        assert!(matches!(shell.prompt_line(""), ShellInput::Line(line) if line == "echo hi"));
        assert!(matches!(shell.prompt_line(""), ShellInput::None));
        assert!(!shell.is_interactive());
    }
}
