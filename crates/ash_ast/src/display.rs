use std::fmt::{self, Display, Formatter};

use crate::{Command, Pipeline, RedirectMode, Redirection, Sequence};

/// Number of spaces per nesting level.
const INDENT: usize = 2;

fn indent(f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
    write!(f, "{:width$}", "", width = depth * INDENT)
}

impl Display for RedirectMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RedirectMode::None => write!(f, "None"),
            RedirectMode::Truncate => write!(f, "Truncate"),
            RedirectMode::Append => write!(f, "Append"),
        }
    }
}

/// Writes a node and its children at a nesting depth.
trait Tree {
    fn write_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result;
}

impl Tree for Redirection {
    fn write_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        if !self.is_active() {
            return Ok(());
        }

        indent(f, depth)?;
        match &self.target {
            Some(target) => writeln!(f, "Redirect {} '{}'", self.mode, target),
            None => writeln!(f, "Redirect {}", self.mode),
        }
    }
}

impl Tree for Command {
    fn write_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        indent(f, depth)?;
        writeln!(f, "Command")?;
        for argument in &self.arguments {
            indent(f, depth + 1)?;
            writeln!(f, "Argument '{}'", argument)?;
        }
        self.redirection.write_tree(f, depth + 1)
    }
}

impl Tree for Pipeline {
    fn write_tree(&self, f: &mut Formatter<'_>, depth: usize) -> fmt::Result {
        indent(f, depth)?;
        writeln!(f, "Pipeline")?;
        for command in &self.commands {
            command.write_tree(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Renders the sequence as an indented tree, one node per line.
impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sequence")?;
        for pipeline in &self.pipelines {
            pipeline.write_tree(f, 1)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_prints_an_empty_sequence() {
        assert_eq!(Sequence::new().to_string(), "Sequence\n");
    }

    #[test]
    fn it_indents_nested_nodes() {
        let mut first = Command::new();
        first.arg("ls");
        first.arg("-l");
        let mut second = Command::new();
        second.arg("wc");
        second.set_redirection(RedirectMode::Append, Some("log.txt"));

        let mut pipeline = Pipeline::new();
        pipeline.command(first);
        pipeline.command(second);
        let mut sequence = Sequence::new();
        sequence.pipeline(pipeline);

        assert_eq!(
            sequence.to_string(),
            "Sequence\n\
             \x20 Pipeline\n\
             \x20   Command\n\
             \x20     Argument 'ls'\n\
             \x20     Argument '-l'\n\
             \x20   Command\n\
             \x20     Argument 'wc'\n\
             \x20     Redirect Append 'log.txt'\n"
        );
    }
}
