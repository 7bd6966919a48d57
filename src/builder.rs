//! Fluent builder that accumulates a command/option tree and freezes it
//! into an immutable [`Cli`].
//!
//! The builder is the only mutable phase: once `build()` snapshots the
//! tree, the resulting [`Cli`] cannot change. `build()` may be called more
//! than once; each call yields an independent snapshot of the builder's
//! current state.

use crate::error::BuildResult;
use crate::parser::Cli;
use crate::spec::{CommandSpec, OptionSpec};

/// Accumulates the root-level specification.
///
/// `add_command` and `add_option` return `&mut Self` so registrations
/// chain with `?`:
///
/// ```
/// use argspec::{CliBuilder, OptionSpec};
///
/// # fn main() -> argspec::BuildResult<()> {
/// let mut builder = CliBuilder::new();
/// builder
///     .add_option("verbose")?
///     .add_command("setup")?;
/// builder
///     .command("run")?
///     .add_option(OptionSpec::new("config").takes_value(true).required(true))?;
/// let cli = builder.build();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct CliBuilder {
    root: CommandSpec,
}

impl Default for CliBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CliBuilder {
    pub fn new() -> Self {
        Self {
            root: CommandSpec::root(),
        }
    }

    /// Register a top-level command.
    pub fn add_command(&mut self, name: &str) -> BuildResult<&mut Self> {
        self.root.add_subcommand(name)?;
        Ok(self)
    }

    /// Register an option on the root context. Accepts a bare name for a
    /// plain flag or a full [`OptionSpec`].
    pub fn add_option(&mut self, option: impl Into<OptionSpec>) -> BuildResult<&mut Self> {
        self.root.add_option(option.into())?;
        Ok(self)
    }

    /// Register a command and descend into it: the returned sub-builder
    /// registers nested commands and options scoped to `name`.
    pub fn command(&mut self, name: &str) -> BuildResult<CommandBuilder<'_>> {
        let spec = self.root.add_subcommand(name)?;
        Ok(CommandBuilder { spec })
    }

    /// Freeze the accumulated tree into an immutable [`Cli`].
    pub fn build(&self) -> Cli {
        Cli::new(self.root.clone())
    }
}

/// Sub-builder scoped to one command node; created by
/// [`CliBuilder::command`] (or by nesting further via [`Self::command`]).
#[derive(Debug)]
pub struct CommandBuilder<'a> {
    spec: &'a mut CommandSpec,
}

impl CommandBuilder<'_> {
    /// Register a subcommand of this command.
    pub fn add_command(&mut self, name: &str) -> BuildResult<&mut Self> {
        self.spec.add_subcommand(name)?;
        Ok(self)
    }

    /// Register an option scoped to this command.
    pub fn add_option(&mut self, option: impl Into<OptionSpec>) -> BuildResult<&mut Self> {
        self.spec.add_option(option.into())?;
        Ok(self)
    }

    /// Register a subcommand and descend into it.
    pub fn command(&mut self, name: &str) -> BuildResult<CommandBuilder<'_>> {
        let spec = self.spec.add_subcommand(name)?;
        Ok(CommandBuilder { spec })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BuildError;

    #[test]
    fn given_default_builder_when_building_then_root_is_anonymous_and_empty() {
        let cli = CliBuilder::default().build();

        assert!(cli.root().name().is_empty());
        assert!(cli.root().options().is_empty());
        assert!(cli.root().subcommands().is_empty());
    }

    #[test]
    fn given_chained_registrations_when_building_then_tree_matches() {
        let mut builder = CliBuilder::new();
        builder
            .add_option("verbose")
            .unwrap()
            .add_command("setup")
            .unwrap();

        let cli = builder.build();

        assert_eq!(cli.root().options().len(), 1);
        assert_eq!(cli.root().subcommands().len(), 1);
        assert_eq!(cli.root().subcommands()[0].name(), "setup");
    }

    #[test]
    fn given_nested_sub_builders_when_building_then_tree_nests() {
        let mut builder = CliBuilder::new();
        let mut run = builder.command("run").unwrap();
        run.add_option(OptionSpec::new("config").takes_value(true))
            .unwrap();
        run.command("fast").unwrap().add_option("jobs").unwrap();

        let cli = builder.build();

        let run = cli
            .root()
            .subcommands()
            .iter()
            .find(|c| c.name() == "run")
            .unwrap();
        assert_eq!(run.options()[0].name, "config");
        let fast = run
            .subcommands()
            .iter()
            .find(|c| c.name() == "fast")
            .unwrap();
        assert_eq!(fast.options()[0].name, "jobs");
    }

    #[test]
    fn given_duplicate_top_level_commands_when_registering_then_errors() {
        let mut builder = CliBuilder::new();
        builder.add_command("setup").unwrap();

        let result = builder.add_command("setup");

        assert!(matches!(result, Err(BuildError::DuplicateName(_))));
    }

    #[test]
    fn given_builder_when_building_twice_then_snapshots_are_independent() {
        let mut builder = CliBuilder::new();
        builder.add_command("setup").unwrap();

        let first = builder.build();
        builder.add_command("compile").unwrap();
        let second = builder.build();

        assert_eq!(first.root().subcommands().len(), 1);
        assert_eq!(second.root().subcommands().len(), 2);
    }
}
