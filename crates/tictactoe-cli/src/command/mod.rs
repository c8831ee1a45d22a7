use std::path::PathBuf;

use clap::{Parser, Subcommand};

use self::play::PlayArg;
use crate::logging;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// File to write logs to (filter with RUST_LOG)
    #[clap(long, global = true, default_value = "tictactoe.log")]
    log_file: PathBuf,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play a two-player match in the terminal (default)
    Play(#[clap(flatten)] PlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(&args.log_file)?;

    match args.mode.unwrap_or_else(|| Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
    }
    Ok(())
}
