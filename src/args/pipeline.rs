//! Pipeline from raw trailing args to a ready-to-run invocation.

use crate::args::argfile::{ArgfileExpander, ArgfileHandler};
use crate::args::error::ParseError;
use crate::args::handlers::RestOfArgumentsHandler;
use crate::args::parser::CmdLineParser;
use crate::args::registry::ArgumentDef;
use crate::config::ArgfileConfig;

/// Command and arguments to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program to run (first expanded token).
    pub command: String,
    /// Remaining expanded tokens.
    pub args: Vec<String>,
}

impl Invocation {
    /// Command followed by its arguments.
    pub fn into_argv(self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 1);
        argv.push(self.command);
        argv.extend(self.args);
        argv
    }
}

#[derive(Debug, Default)]
struct Argv(Vec<String>);

fn argv_parser(config: &ArgfileConfig) -> CmdLineParser<Argv> {
    let def = ArgumentDef::new("COMMAND")
        .description("Command to run, followed by its arguments")
        .required();
    if config.enabled {
        CmdLineParser::<Argv>::new().argument(
            def,
            ArgfileHandler::with_expander(
                RestOfArgumentsHandler::new(),
                ArgfileExpander::from(config),
            ),
            |a| &mut a.0,
        )
    } else {
        CmdLineParser::<Argv>::new().argument(def, RestOfArgumentsHandler::new(), |a| &mut a.0)
    }
}

/// Expand every argfile reference in `raw_args`.
///
/// All tokens are positional: option-looking tokens belong to the target
/// command and are passed through untouched. Fails with
/// [`ParseError::MissingRequired`] when nothing is left after expansion.
pub fn expand_args(raw_args: &[String], config: &ArgfileConfig) -> Result<Vec<String>, ParseError> {
    let tokens = std::iter::once("--".to_string()).chain(raw_args.iter().cloned());
    let Argv(argv) = argv_parser(config).parse(tokens)?;
    Ok(argv)
}

/// Build an [`Invocation`] from the trailing arguments of the command line.
pub fn build_invocation(
    raw_args: &[String],
    config: &ArgfileConfig,
) -> Result<Invocation, ParseError> {
    let mut argv = expand_args(raw_args, config)?.into_iter();
    let Some(command) = argv.next() else {
        return Err(ParseError::MissingRequired("COMMAND".to_string()));
    };
    let args: Vec<String> = argv.collect();

    tracing::debug!(command = %command, args = args.len(), "built invocation");

    Ok(Invocation { command, args })
}
