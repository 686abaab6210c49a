use anyhow::{anyhow, Result};
use clap::{command, Parser, Subcommand};
use log::debug;

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct CliParams {
    #[command(subcommand)]
    command: Command
}

#[derive(Clone, Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the first existing icon path for the class, or nothing
    Find {
        class_name: String
    },
    /// Print every candidate path in priority order, without probing
    Candidates {
        class_name: String
    }
}

pub(crate) trait CliHandler: Sized {
    type Output;

    fn find(class_name: String) -> Self::Output;

    fn candidates(class_name: String) -> Self::Output;
}

pub(crate) fn run_cli<T: CliHandler>() -> Result<T::Output> {
    let params = CliParams::try_parse()
        .map_err(|e| anyhow!(e))?;
    debug!("Given command: {params:?}");

    let result = match params.command {
        Command::Find { class_name } => T::find(class_name),
        Command::Candidates { class_name } => T::candidates(class_name),
    };

    Ok(result)
}
