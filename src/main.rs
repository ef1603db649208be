use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use reel::GapPolicy;
use reel::core::config::{self, CliOverrides};
use reel::core::frames::{load_frames, mirror_frames};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(name = "reel", version, about = "Step through numbered text frames in the terminal")]
struct Args {
    /// Frame name prefix; frames are read from <DIR>/<PREFIX>_1, _2, ... [default: addition]
    prefix: Option<String>,

    /// Directory holding the frame files [default: movie]
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// What to do when an index between 1 and the last frame has no file
    #[arg(long, value_enum)]
    gaps: Option<GapPolicy>,

    /// Copy every file in the frame directory here before loading
    #[arg(long, value_name = "DIR")]
    mirror: Option<PathBuf>,
}

impl Args {
    fn overrides(self) -> CliOverrides {
        CliOverrides {
            directory: self.dir,
            prefix: self.prefix,
            gap_policy: self.gaps,
            mirror_dir: self.mirror,
        }
    }
}

/// File logger at `~/.reel/reel.log`; stdout belongs to the viewer.
fn init_logging() {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    let Some(dir) = config::reel_home() else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    if let Ok(log_file) = File::create(dir.join("reel.log")) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
}

fn main() -> ExitCode {
    // Usage errors exit here (status 2) before anything is loaded
    let args = Args::parse();
    init_logging();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            error!("{}", e);
            eprintln!("reel: {e}");
            return ExitCode::FAILURE;
        }
    };
    let settings = config::resolve(&file_config, &args.overrides());
    info!("Reel starting up with {:?}", settings);

    if let Some(mirror_dir) = &settings.mirror_dir
        && let Err(e) = mirror_frames(&settings.directory, mirror_dir)
    {
        warn!("Mirroring to {} failed: {}", mirror_dir.display(), e);
    }

    let frames = match load_frames(&settings.directory, &settings.prefix, settings.gap_policy) {
        Ok(frames) => frames,
        Err(e) => {
            error!("{}", e);
            eprintln!("reel: {e}");
            return ExitCode::FAILURE;
        }
    };

    match reel::tui::run(&frames) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Terminal I/O failed: {}", e);
            eprintln!("reel: {e}");
            ExitCode::FAILURE
        }
    }
}
