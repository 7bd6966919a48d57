//! Command and option specifications: the registry accumulated by the
//! builder and frozen into a [`Cli`](crate::Cli).

use crate::error::{BuildError, BuildResult};

/// A named flag or key-value option recognized within a command's context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    pub takes_value: bool,
    pub required: bool,
}

impl OptionSpec {
    /// A plain flag: no value, not required.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            takes_value: false,
            required: false,
        }
    }

    pub fn takes_value(mut self, takes_value: bool) -> Self {
        self.takes_value = takes_value;
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }
}

impl From<&str> for OptionSpec {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for OptionSpec {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// A command node: its options and nested subcommands, in registration
/// order. Sibling commands and sibling options never share a name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    name: String,
    options: Vec<OptionSpec>,
    subcommands: Vec<CommandSpec>,
}

impl CommandSpec {
    /// The anonymous root of a specification tree. Its empty name is never
    /// validated and never matchable as a token.
    pub(crate) fn root() -> Self {
        Self::default()
    }

    fn named(name: &str) -> BuildResult<Self> {
        validate_name(name)?;
        Ok(Self {
            name: name.to_string(),
            ..Self::default()
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[OptionSpec] {
        &self.options
    }

    pub fn subcommands(&self) -> &[CommandSpec] {
        &self.subcommands
    }

    /// Register a nested command, enforcing sibling uniqueness.
    /// Returns the new node so sub-builders can descend into it.
    pub(crate) fn add_subcommand(&mut self, name: &str) -> BuildResult<&mut CommandSpec> {
        let child = CommandSpec::named(name)?;
        if self.subcommand(name).is_some() {
            return Err(BuildError::DuplicateName(name.to_string()));
        }
        self.subcommands.push(child);
        Ok(self.subcommands.last_mut().unwrap())
    }

    /// Register an option, enforcing uniqueness within this command.
    pub(crate) fn add_option(&mut self, option: OptionSpec) -> BuildResult<()> {
        validate_name(&option.name)?;
        if self.option(&option.name).is_some() {
            return Err(BuildError::DuplicateName(option.name));
        }
        self.options.push(option);
        Ok(())
    }

    pub(crate) fn subcommand(&self, name: &str) -> Option<&CommandSpec> {
        self.subcommands.iter().find(|c| c.name == name)
    }

    pub(crate) fn option(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.name == name)
    }
}

/// Names must be non-empty, contain no whitespace, and not begin with `-`
/// (a leading dash could never be matched under the `--` prefix convention).
fn validate_name(name: &str) -> BuildResult<()> {
    if name.is_empty() || name.contains(char::is_whitespace) || name.starts_with('-') {
        return Err(BuildError::InvalidName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_empty_name_when_validating_then_errors() {
        assert_eq!(validate_name(""), Err(BuildError::InvalidName(String::new())));
    }

    #[test]
    fn given_name_with_whitespace_when_validating_then_errors() {
        assert!(validate_name("two words").is_err());
        assert!(validate_name("tab\tseparated").is_err());
    }

    #[test]
    fn given_name_with_leading_dash_when_validating_then_errors() {
        assert!(validate_name("-v").is_err());
        assert!(validate_name("--verbose").is_err());
    }

    #[test]
    fn given_plain_name_when_validating_then_ok() {
        assert!(validate_name("setup").is_ok());
        assert!(validate_name("dry-run").is_ok());
    }

    #[test]
    fn given_duplicate_subcommand_when_registering_then_errors() {
        let mut root = CommandSpec::root();
        root.add_subcommand("setup").unwrap();

        let result = root.add_subcommand("setup");

        assert_eq!(result.unwrap_err(), BuildError::DuplicateName("setup".to_string()));
    }

    #[test]
    fn given_duplicate_option_when_registering_then_errors() {
        let mut root = CommandSpec::root();
        root.add_option(OptionSpec::new("verbose")).unwrap();

        let result = root.add_option(OptionSpec::new("verbose"));

        assert!(matches!(result, Err(BuildError::DuplicateName(_))));
    }

    #[test]
    fn given_same_option_name_on_different_commands_when_registering_then_ok() {
        let mut root = CommandSpec::root();
        root.add_option(OptionSpec::new("verbose")).unwrap();
        let sub = root.add_subcommand("setup").unwrap();

        // Uniqueness is scoped to a single command's option set.
        assert!(sub.add_option(OptionSpec::new("verbose")).is_ok());
    }
}
