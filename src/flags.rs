//! Flag validation shared by all commands.

use crate::errors::ShellError;
use std::collections::BTreeSet;

/// Flags supplied on an input line. Long (`recursive`) and short (`r`)
/// forms are distinct tokens; commands that alias them check both.
pub type FlagSet = BTreeSet<String>;

/// Fails with the first flag outside the command's allowed set.
pub fn validate(supplied: &FlagSet, allowed: &[&str]) -> crate::Result<()> {
    for flag in supplied {
        if !allowed.contains(&flag.as_str()) {
            return Err(ShellError::InvalidFlag(flag.clone()));
        }
    }
    Ok(())
}

/// True when either spelling of the recursive flag was supplied.
pub fn recursive(flags: &FlagSet) -> bool {
    flags.contains("r") || flags.contains("recursive")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(names: &[&str]) -> FlagSet {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn accepts_flags_from_the_allowed_set() {
        assert!(validate(&flags(&["r"]), &["r", "recursive"]).is_ok());
        assert!(validate(&flags(&[]), &[]).is_ok());
    }

    #[test]
    fn names_the_unrecognized_flag() {
        let err = validate(&flags(&["x"]), &["r", "recursive"]).unwrap_err();
        assert!(matches!(err, ShellError::InvalidFlag(flag) if flag == "x"));
    }

    #[test]
    fn long_and_short_forms_are_distinct_tokens() {
        let err = validate(&flags(&["recursive"]), &["r"]).unwrap_err();
        assert!(matches!(err, ShellError::InvalidFlag(flag) if flag == "recursive"));
    }
}
