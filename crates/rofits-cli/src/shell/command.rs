//! Parsing of lines typed at the shell prompt.

/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Blank line.
    Empty,
    /// Put text in the username field and submit it.
    Search(String),
    Refresh,
    /// Copy the ID of tile `n` (1-based).
    Copy(usize),
    /// Show the name of tile `n` (1-based).
    Name(usize),
    Cancel,
    /// Redraw the current view.
    Show,
    Info,
    Close,
    Help,
    Quit,
    /// Recognised command with bad arguments.
    Invalid(String),
}

impl ShellCommand {
    /// Parse a prompt line. Anything that is not a command is a username.
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (head, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(head, rest)| (head, rest.trim()));

        match head.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "search" | "s" => Self::Search(rest.to_string()),
            "refresh" | "r" if rest.is_empty() => Self::Refresh,
            "copy" | "c" => Self::tile(rest, Self::Copy, "copy"),
            "name" | "n" => Self::tile(rest, Self::Name, "name"),
            "cancel" if rest.is_empty() => Self::Cancel,
            "show" | "ls" if rest.is_empty() => Self::Show,
            "info" if rest.is_empty() => Self::Info,
            "close" if rest.is_empty() => Self::Close,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => Self::Search(line.to_string()),
        }
    }

    fn tile(arg: &str, make: fn(usize) -> Self, verb: &str) -> Self {
        match arg.parse::<usize>() {
            Ok(n) if n > 0 => make(n),
            _ => Self::Invalid(format!("Usage: {verb} <tile number>")),
        }
    }
}

/// Shell help text.
pub const HELP: &str = "\
Commands:
  <username>          search for a user's outfits (same as `search <username>`)
  search <username>   search for a user's outfits
  refresh             search the last username again
  copy <n>            copy the ID of outfit n to the clipboard
  name <n>            show the full name of outfit n
  show                redraw the current results
  cancel              stop the running search (or press Ctrl-C)
  info                about this application
  close               close the info dialog
  help                this message
  quit                leave the shell";
