#[macro_use]
extern crate tracing;

use clap::Parser;
use eyre::Result;
use std::{io, process::ExitCode};

mod args;
mod cmd;
mod handler;
mod stdin;
mod utils;

use args::Ensn;

fn main() -> Result<ExitCode> {
    handler::install()?;
    utils::subscriber();

    let args = Ensn::parse();
    let failed = cmd::run(args, &mut io::stdout().lock())?;
    Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
