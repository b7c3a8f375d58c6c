use anyhow::Context;
use std::path::Path;

use ar_picking_viewer::{load_config, run_viewer};

fn main() -> anyhow::Result<()> {
    let command = clap::Command::new("ar-picking-viewer")
        .arg(
            clap::Arg::new("config")
                .long("config")
                .help("Path to config.toml")
                .takes_value(true)
                .default_value("config.toml"),
        )
        .arg(
            clap::Arg::new("disable-vsync")
                .long("disable-vsync")
                .help("Disable v-sync to see accurate frame times"),
        )
        .arg(
            clap::Arg::new("video-config")
                .long("video-config")
                .help("Image to use as the dummy video frame, empty for a generated frame")
                .takes_value(true),
        )
        .arg(
            clap::Arg::new("tracker-mode")
                .long("tracker-mode")
                .help("Dummy tracker mode, 0 for a static pose or 1 for a swaying pose")
                .takes_value(true),
        );
    let matches = command.get_matches();

    let config_path = matches
        .value_of("config")
        .map(Path::new)
        .unwrap_or_else(|| Path::new("config.toml"));
    let mut config = load_config(config_path);

    if matches.is_present("disable-vsync") {
        config.graphics.disable_vsync = true;
    }

    if let Some(video_config) = matches.value_of("video-config") {
        config.video.config = video_config.to_string();
    }

    if let Some(tracker_mode) = matches.value_of("tracker-mode") {
        config.tracker.config = format!("mode={};", tracker_mode);
    }

    run_viewer(&config).context("Failed to run AR picking viewer")
}
