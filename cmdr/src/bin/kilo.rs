// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use kilo_cmdr::{CLIArg, run_app};
use kilo_tui::CommonResult;

/// Exit codes: 0 after a normal quit, or after printing help or the version. 1 for a
/// command line that can't be parsed, or any fatal error (reported by miette).
fn main() -> CommonResult<()> {
    let cli_arg = match CLIArg::try_parse() {
        Ok(it) => it,
        Err(error) => {
            // Help and version also arrive here, and they print to stdout.
            let exit_code = i32::from(error.use_stderr());
            _ = error.print();
            std::process::exit(exit_code);
        }
    };

    run_app(cli_arg)
}
