//! The caller-owned outcome of a successful parse.

use std::collections::BTreeMap;

/// How an option was supplied: bare presence or with a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// The option is a flag and was present.
    Flag,
    /// The option carried this value.
    Value(String),
}

/// Everything a parse produced. Created fresh per `parse` call; the
/// parser keeps no reference to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseResult {
    /// Matched subcommand names, outermost first. Empty when no
    /// subcommand matched.
    pub matched_command_path: Vec<String>,
    /// Option values keyed by bare option name (no `--` prefix).
    pub option_values: BTreeMap<String, OptionValue>,
    /// Tokens that matched neither a command nor an option, in order.
    pub positional_args: Vec<String>,
}

impl ParseResult {
    /// Whether the named option was supplied (as a flag or with a value).
    pub fn is_set(&self, name: &str) -> bool {
        self.option_values.contains_key(name)
    }

    /// The value supplied for the named option, if it carried one.
    pub fn value(&self, name: &str) -> Option<&str> {
        match self.option_values.get(name) {
            Some(OptionValue::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// The innermost matched command, if any subcommand matched.
    pub fn command(&self) -> Option<&str> {
        self.matched_command_path.last().map(String::as_str)
    }
}
