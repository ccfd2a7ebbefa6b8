//! Reply demo entry-point: answer lookups from the process arguments and
//! print the resulting plan.

use std::io::{self, Write};

use klarg::{Args, Lookup};
use reply_demo::error::{DemoError, Result};
use reply_demo::{USAGE, VERSION, build_plan};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    run().map_err(color_eyre::eyre::Report::from)
}

fn run() -> Result<()> {
    let args = Args::from_env();
    let mut help_requested = false;
    args.on_help(|| help_requested = true);
    if help_requested {
        writeln!(io::stdout().lock(), "{USAGE}")?;
        return Ok(());
    }
    if args.wants_version() {
        args.on_version(VERSION)?;
        return Ok(());
    }
    match build_plan(&args) {
        Ok(plan) => {
            writeln!(io::stdout().lock(), "{plan}")?;
            Ok(())
        }
        Err(DemoError::Lookup(err)) => err.exit(),
        Err(DemoError::Usage(err)) => err.exit(),
        Err(other) => Err(other),
    }
}
