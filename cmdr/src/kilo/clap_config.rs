// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::Parser;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "kilo")]
#[command(about = "✍️ A small terminal text editor")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nProvide a file path to edit it in kilo. Or no arguments to edit a new file.\nUSAGE 📓:\n  kilo [\x1b[32mfile path\x1b[0m] [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CLIArg {
    #[arg(name = "file path")]
    pub maybe_file_path: Option<String>,
}

impl CLIArg {
    #[must_use]
    pub fn maybe_file_path(&self) -> Option<PathBuf> {
        self.maybe_file_path.as_ref().map(PathBuf::from)
    }
}
