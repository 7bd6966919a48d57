//! The frozen parser: matches a tokenized argument sequence against the
//! specification captured at build time.

use tracing::{debug, instrument, trace};

use crate::error::ParseError;
use crate::result::{OptionValue, ParseResult};
use crate::spec::{CommandSpec, OptionSpec};

/// Recognized option prefix. Single-dash tokens are positionals.
const OPTION_PREFIX: &str = "--";

/// An immutable snapshot of a command/option tree, produced by
/// [`CliBuilder::build`](crate::CliBuilder::build).
///
/// `Cli` is stateless across [`parse`](Self::parse) calls and safe to
/// share between threads for concurrent read-only parsing.
#[derive(Debug, Clone)]
pub struct Cli {
    root: CommandSpec,
}

impl Cli {
    pub(crate) fn new(root: CommandSpec) -> Self {
        Self { root }
    }

    /// The root of the frozen specification tree.
    pub fn root(&self) -> &CommandSpec {
        &self.root
    }

    /// Match `tokens` against the frozen specification.
    ///
    /// At each position a subcommand match is tried before an option
    /// match; anything else is a positional. A bare `--` ends matching
    /// and demotes every later token to a positional. At the end, every
    /// `required` option along the matched command path must have been
    /// supplied.
    #[instrument(level = "debug", skip(self, tokens))]
    pub fn parse<S: AsRef<str>>(&self, tokens: &[S]) -> Result<ParseResult, ParseError> {
        let mut path: Vec<&CommandSpec> = vec![&self.root];
        let mut result = ParseResult::default();
        let mut matching = true;

        let mut iter = tokens.iter().map(AsRef::as_ref);
        while let Some(token) = iter.next() {
            if !matching {
                result.positional_args.push(token.to_string());
                continue;
            }

            if token == OPTION_PREFIX {
                trace!("separator: remaining tokens are positional");
                matching = false;
                continue;
            }

            let current = *path.last().unwrap();
            if let Some(sub) = current.subcommand(token) {
                debug!(command = token, "descending into subcommand");
                path.push(sub);
                result.matched_command_path.push(token.to_string());
                continue;
            }

            if let Some(rest) = token.strip_prefix(OPTION_PREFIX) {
                let (name, inline) = match rest.split_once('=') {
                    Some((name, value)) => (name, Some(value)),
                    None => (rest, None),
                };

                let option = find_option(&path, name)
                    .ok_or_else(|| ParseError::UnknownOption(token.to_string()))?;

                let value = match (option.takes_value, inline) {
                    (true, Some(inline)) => OptionValue::Value(inline.to_string()),
                    (true, None) => {
                        let next = iter
                            .next()
                            .ok_or_else(|| ParseError::MissingOptionValue(name.to_string()))?;
                        OptionValue::Value(next.to_string())
                    }
                    (false, Some(_)) => {
                        return Err(ParseError::UnexpectedOptionValue(name.to_string()));
                    }
                    (false, None) => OptionValue::Flag,
                };

                trace!(option = name, "matched option");
                // Repeated options: last occurrence wins.
                result.option_values.insert(name.to_string(), value);
                continue;
            }

            result.positional_args.push(token.to_string());
        }

        let missing = missing_required(&path, &result);
        if !missing.is_empty() {
            return Err(ParseError::MissingRequiredOption(missing));
        }

        Ok(result)
    }
}

/// Look an option name up along the matched path, innermost command
/// first, so subcommands keep their ancestors' options usable.
fn find_option<'a>(path: &[&'a CommandSpec], name: &str) -> Option<&'a OptionSpec> {
    path.iter().rev().find_map(|command| command.option(name))
}

/// Required options of every command on the matched path that were not
/// supplied, in registration order.
fn missing_required(path: &[&CommandSpec], result: &ParseResult) -> Vec<String> {
    path.iter()
        .flat_map(|command| command.options())
        .filter(|option| option.required && !result.option_values.contains_key(&option.name))
        .map(|option| option.name.clone())
        .collect()
}
