use anyhow::{Result, bail};
use boxscore_tree::PlayerDirectory;

/// One interactive session command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Remove { first: String, last: String },
    Print,
    Quit,
}

impl Command {
    /// Parse a session line: `remove <first> <last>`, `print` or `quit`.
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("quit") => Ok(Self::Quit),
            Some("print") => Ok(Self::Print),
            Some("remove") => {
                let (Some(first), Some(last), None) =
                    (tokens.next(), tokens.next(), tokens.next())
                else {
                    bail!("usage: remove <first> <last>");
                };
                Ok(Self::Remove {
                    first: first.to_string(),
                    last: last.to_string(),
                })
            }
            Some(other) => {
                bail!("<{other}> is not a valid command; use 'quit', 'remove', or 'print'")
            }
            None => bail!("empty command; use 'quit', 'remove', or 'print'"),
        }
    }
}

/// Outcome of applying one command to the directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// `remove`: whether a player matched.
    Removed(bool),
    /// `print`: the indented tree-shape dump.
    TreeShape(String),
    Quit,
}

/// Apply one parsed command to the directory.
pub fn apply_command(directory: &mut PlayerDirectory, command: &Command) -> CommandOutcome {
    match command {
        Command::Remove { first, last } => {
            CommandOutcome::Removed(directory.remove_by_name(first, last))
        }
        Command::Print => CommandOutcome::TreeShape(boxscore_render::render_tree_shape(directory)),
        Command::Quit => CommandOutcome::Quit,
    }
}
