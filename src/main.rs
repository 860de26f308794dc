use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use argexpand::args::build_invocation;
use argexpand::config::{Config, ConfigError};
use argexpand::{exit, logging, runner};

/// Expand @argfile references and run a command.
#[derive(Parser, Debug)]
#[command(name = "argexpand", version)]
struct Cli {
    /// Config file (default: <config_dir>/argexpand/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the expanded command line, one argument per line, instead of running it
    #[arg(long)]
    print: bool,

    /// With --print, print a JSON array
    #[arg(long, requires = "print")]
    json: bool,

    /// Command followed by its arguments; `@path` tokens are replaced by the lines of `path`
    #[arg(
        value_name = "COMMAND",
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = anyhow::Error::from(e);
            exit::report(&err);
            return ExitCode::from(exit::exit_code_for(&err));
        }
    };

    logging::init_tracing(&config.logging.filter);

    match run(&cli, &config) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            exit::report(&err);
            ExitCode::from(exit::exit_code_for(&err))
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn run(cli: &Cli, config: &Config) -> anyhow::Result<u8> {
    let invocation =
        build_invocation(&cli.command, &config.argfile).context("Failed to expand arguments")?;

    if cli.print {
        print_argv(&invocation.into_argv(), cli.json)?;
        return Ok(0);
    }

    let status = runner::run(&invocation)?;
    Ok(exit::child_exit_code(status))
}

fn print_argv(argv: &[String], json: bool) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string(argv)?)?;
    } else {
        for arg in argv {
            writeln!(stdout, "{arg}")?;
        }
    }
    stdout.flush()?;
    Ok(())
}
