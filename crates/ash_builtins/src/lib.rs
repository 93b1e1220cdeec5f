mod cd;
mod command;
mod echo;
mod exit;
mod help;
mod introspect;
pub mod status;
mod utils;

pub use cd::Cd;
pub use command::{Builtin, Io};
pub use echo::Echo;
pub use exit::Exit;
pub use help::Help;
pub use introspect::{Ast, Tokens};

/// Process-wide table of built-in commands.
static BUILTINS: [&dyn Builtin; 6] = [&Cd, &Echo, &Help, &Exit, &Tokens, &Ast];

/// Returns all built-in commands.
pub fn all_builtins() -> &'static [&'static dyn Builtin] {
    &BUILTINS
}

/// Looks up a built-in command by its exact, case-sensitive name.
///
/// Returns [`None`] if `name` does not refer to a built-in command, in which case the caller
/// should look for an external program instead.
pub fn lookup(name: &str) -> Option<&'static dyn Builtin> {
    BUILTINS.iter().copied().find(|builtin| builtin.name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_finds_all_builtins_by_name() {
        for name in ["cd", "echo", "help", "exit", "tokens", "ast"] {
            let builtin = lookup(name).expect("builtin should exist");
            assert_eq!(builtin.name(), name);
        }
        assert_eq!(all_builtins().len(), 6);
    }

    #[test]
    fn it_matches_names_exactly() {
        assert!(lookup("Echo").is_none());
        assert!(lookup("ech").is_none());
        assert!(lookup("echo ").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("ls").is_none());
    }
}
