//! Input-line tokenization: command name, flags, paths.

use crate::errors::ShellError;
use crate::flags::FlagSet;

/// Command families understood by the shell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CommandKind {
    Ls,
    Cd,
    Cat,
    Cp,
    Mv,
    Rm,
    Undo,
    History,
    Grep,
    Touch,
    Mkdir,
    Tar,
    Untar,
}

impl CommandKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ls" => Some(Self::Ls),
            "cd" => Some(Self::Cd),
            "cat" => Some(Self::Cat),
            "cp" => Some(Self::Cp),
            "mv" => Some(Self::Mv),
            "rm" => Some(Self::Rm),
            "undo" => Some(Self::Undo),
            "history" => Some(Self::History),
            "grep" => Some(Self::Grep),
            "touch" => Some(Self::Touch),
            "mkdir" => Some(Self::Mkdir),
            "tar" => Some(Self::Tar),
            "untar" => Some(Self::Untar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Cat => "cat",
            Self::Cp => "cp",
            Self::Mv => "mv",
            Self::Rm => "rm",
            Self::Undo => "undo",
            Self::History => "history",
            Self::Grep => "grep",
            Self::Touch => "touch",
            Self::Mkdir => "mkdir",
            Self::Tar => "tar",
            Self::Untar => "untar",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Splits a line into words, honoring single and double quotes so that
/// quoted names and patterns survive with their spaces intact.
fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_word = false;

    for ch in line.chars() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => current.push(ch),
            None if ch == '\'' || ch == '"' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }
    if in_word {
        words.push(current);
    }
    words
}

/// Tokenizes an input line into `(command, flags, paths)`.
///
/// Only the first argument is inspected for flags: `--name` contributes one
/// long flag, `-abc` contributes `{a, b, c}`; everything after is a path.
pub fn tokenize(line: &str) -> crate::Result<(CommandKind, FlagSet, Vec<String>)> {
    let words = split_words(line);
    let (name, args) = words
        .split_first()
        .ok_or_else(|| ShellError::argument_count("empty input line"))?;
    let command = CommandKind::from_name(name)
        .ok_or_else(|| ShellError::UnknownCommand(name.clone()))?;

    let mut flags = FlagSet::new();
    let mut paths: Vec<String> = args.to_vec();
    if let Some(first) = args.first() {
        if let Some(long) = first.strip_prefix("--") {
            flags.insert(long.to_string());
            paths = args[1..].to_vec();
        } else if let Some(short) = first.strip_prefix('-') {
            flags.extend(short.chars().map(|ch| ch.to_string()));
            paths = args[1..].to_vec();
        }
    }
    Ok((command, flags, paths))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_command_flags_and_paths() {
        let (command, flags, paths) = tokenize("cp -r src dest").unwrap();
        assert_eq!(command, CommandKind::Cp);
        assert!(flags.contains("r"));
        assert_eq!(paths, vec!["src", "dest"]);
    }

    #[test]
    fn long_flags_stay_whole() {
        let (_, flags, paths) = tokenize("rm --recursive old").unwrap();
        assert!(flags.contains("recursive"));
        assert!(!flags.contains("r"));
        assert_eq!(paths, vec!["old"]);
    }

    #[test]
    fn short_flag_groups_split_per_character() {
        let (_, flags, _) = tokenize("grep -ri pattern .").unwrap();
        assert!(flags.contains("r"));
        assert!(flags.contains("i"));
    }

    #[test]
    fn quoted_arguments_keep_their_spaces() {
        let (_, _, paths) = tokenize("cat 'a file.txt' \"b file.txt\"").unwrap();
        assert_eq!(paths, vec!["a file.txt", "b file.txt"]);
    }

    #[test]
    fn unknown_commands_are_rejected() {
        let err = tokenize("frobnicate x").unwrap_err();
        assert!(matches!(err, ShellError::UnknownCommand(name) if name == "frobnicate"));
    }

    #[test]
    fn flags_only_bind_in_leading_position() {
        let (_, flags, paths) = tokenize("mv a -r b").unwrap();
        assert!(flags.is_empty());
        assert_eq!(paths, vec!["a", "-r", "b"]);
    }
}
