//! Command model and the ordered script store
//!
//! A [`Command`] is one validated line of input: the command kind plus the raw
//! value string exactly as it appeared in the file. The interpreter re-parses
//! the value when the command executes; validation guarantees the parse
//! succeeds.
//!
//! [`Script`] is the append-only store of validated commands. Insertion order
//! is source line order, and that order is the replay order.

use std::fmt;

/// The six recognized command names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Draw,
    Move,
    Rotate,
    Fg,
    Bg,
    Pattern,
}

impl CommandKind {
    /// Case-insensitive lookup of a command name token.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "DRAW" => Some(CommandKind::Draw),
            "MOVE" => Some(CommandKind::Move),
            "ROTATE" => Some(CommandKind::Rotate),
            "FG" => Some(CommandKind::Fg),
            "BG" => Some(CommandKind::Bg),
            "PATTERN" => Some(CommandKind::Pattern),
            _ => None,
        }
    }

    /// Canonical upper-case name.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Draw => "DRAW",
            CommandKind::Move => "MOVE",
            CommandKind::Rotate => "ROTATE",
            CommandKind::Fg => "FG",
            CommandKind::Bg => "BG",
            CommandKind::Pattern => "PATTERN",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One validated command: kind plus the raw value token.
#[derive(Debug, Clone, PartialEq)]
pub struct Command {
    pub kind: CommandKind,
    pub value: String,
}

impl Command {
    pub fn new(kind: CommandKind, value: impl Into<String>) -> Self {
        Command {
            kind,
            value: value.into(),
        }
    }
}

/// Ordered, append-only sequence of validated commands.
///
/// Written once by the validator, read once by the interpreter. There are no
/// mutation primitives beyond `push`.
#[derive(Debug, Default)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new() -> Self {
        Script {
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Command> {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_lookup_case_insensitive() {
        assert_eq!(CommandKind::from_name("draw"), Some(CommandKind::Draw));
        assert_eq!(CommandKind::from_name("Draw"), Some(CommandKind::Draw));
        assert_eq!(CommandKind::from_name("PATTERN"), Some(CommandKind::Pattern));
        assert_eq!(CommandKind::from_name("pAtTeRn"), Some(CommandKind::Pattern));
        assert_eq!(CommandKind::from_name("DRAWN"), None);
        assert_eq!(CommandKind::from_name(""), None);
    }

    #[test]
    fn test_script_preserves_order() {
        let mut script = Script::new();
        assert!(script.is_empty());

        script.push(Command::new(CommandKind::Rotate, "90"));
        script.push(Command::new(CommandKind::Draw, "10"));
        script.push(Command::new(CommandKind::Move, "5"));

        assert_eq!(script.len(), 3);
        let kinds: Vec<CommandKind> = script.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            vec![CommandKind::Rotate, CommandKind::Draw, CommandKind::Move]
        );
    }
}
