//! Declarative command-line specification and token parsing.
//!
//! The crate splits CLI handling into two phases with two types: a mutable
//! [`CliBuilder`] accumulates commands and options into a specification
//! tree, and `build()` freezes that tree into an immutable [`Cli`] that
//! matches already-tokenized argument sequences. Capturing `argv` from the
//! process and rendering help or error text are the caller's job; the core
//! only turns a token slice into a [`ParseResult`] or a structured error.
//!
//! ```
//! use argspec::{CliBuilder, OptionSpec};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = CliBuilder::new();
//! builder.add_option("verbose")?;
//! builder
//!     .command("run")?
//!     .add_option(OptionSpec::new("config").takes_value(true).required(true))?;
//!
//! let cli = builder.build();
//! let parsed = cli.parse(&["run", "--config", "a.yaml", "--verbose"])?;
//!
//! assert_eq!(parsed.command(), Some("run"));
//! assert_eq!(parsed.value("config"), Some("a.yaml"));
//! assert!(parsed.is_set("verbose"));
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod parser;
pub mod result;
pub mod spec;
pub mod util;

pub use builder::{CliBuilder, CommandBuilder};
pub use error::{BuildError, BuildResult, ParseError};
pub use parser::Cli;
pub use result::{OptionValue, ParseResult};
pub use spec::{CommandSpec, OptionSpec};
