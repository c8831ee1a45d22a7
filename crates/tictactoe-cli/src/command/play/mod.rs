use std::path::PathBuf;

use tracing::info;

use crate::{command::play::screen::PlayScreen, record::RecordingEngine, tui::Runtime};

mod action;
mod screen;

const DEFAULT_RECORD_DIR: &str = "./data/recordings/";
const DEFAULT_HISTORY_SIZE: usize = 1000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Save the match recording to a file on exit
    #[clap(long)]
    pub(super) save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = DEFAULT_RECORD_DIR)]
    pub(super) record_dir: PathBuf,
    /// Maximum number of rounds to keep in the recording (oldest are discarded)
    #[clap(long, default_value_t = DEFAULT_HISTORY_SIZE)]
    pub(super) history_size: usize,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            save_recording: false,
            record_dir: PathBuf::from(DEFAULT_RECORD_DIR),
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        save_recording,
        record_dir,
        history_size,
    } = arg;

    info!("starting match");
    let mut screen = PlayScreen::new(RecordingEngine::new(*history_size));
    Runtime::new().run(&mut screen)?;

    let engine = screen.into_engine();
    let score = *engine.score();
    info!(?score, "match closed");

    if *save_recording {
        let path = engine.into_history().save(record_dir)?;
        eprintln!("Saved recording to {}", path.display());
    }

    Ok(())
}
