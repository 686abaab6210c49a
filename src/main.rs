mod cli;
mod icon;

use std::{convert::identity, env};

use anyhow::{Context as _, Result};
use cli::{run_cli, CliHandler};
use icon::{candidate_paths, lookup_icon};

struct CliHandlerImpl {}

impl CliHandler for CliHandlerImpl {
    type Output = Result<()>;

    fn find(class_name: String) -> Self::Output {
        let home = home_dir()?;
        if let Some(path) = lookup_icon(&class_name, &home) {
            println!("{}", path.display());
        }
        Ok(())
    }

    fn candidates(class_name: String) -> Self::Output {
        let home = home_dir()?;
        for path in candidate_paths(&class_name, &home) {
            println!("{path}");
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::init();

    run_cli::<CliHandlerImpl>()
        .and_then(identity)
}

fn home_dir() -> Result<String> {
    env::var("HOME")
        .context("HOME is not set")
}
