#![forbid(unsafe_code)]

//! Slot storyboard binary entry point.

use ftui_runtime::{Program, ProgramConfig, ScreenMode};
use storyboard_core::dataset;
use storyboard_showcase::app::{AppModel, ScreenId};
use storyboard_showcase::{cli, logging};
use tracing::info;

fn main() {
    let opts = cli::Opts::parse();

    if opts.dump_json {
        match dataset::to_json() {
            Ok(json) => {
                println!("{json}");
                return;
            }
            Err(e) => {
                eprintln!("Failed to encode datasets: {e}");
                std::process::exit(1);
            }
        }
    }

    if let Err(e) = logging::init(opts.log_file.as_deref()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let screen_mode = match opts.screen_mode.as_str() {
        "inline" => ScreenMode::Inline {
            ui_height: opts.ui_height,
        },
        _ => ScreenMode::AltScreen,
    };

    let start_screen = usize::from(opts.start_screen)
        .checked_sub(1)
        .and_then(|idx| ScreenId::ALL.get(idx).copied())
        .unwrap_or(ScreenId::Comparison);

    let mut model = AppModel::new();
    model.current_screen = start_screen;
    model.exit_after_ms = opts.exit_after_ms;
    model.autoplay = opts.autoplay;
    model.set_display_mode(opts.display_mode);

    info!(
        screen = ?start_screen,
        mode = %opts.display_mode,
        autoplay = opts.autoplay,
        mouse = opts.mouse,
        "Starting storyboard"
    );

    let config = ProgramConfig {
        screen_mode,
        mouse: opts.mouse,
        ..ProgramConfig::default()
    };
    match Program::with_config(model, config) {
        Ok(mut program) => {
            if let Err(e) = program.run() {
                eprintln!("Runtime error: {e}");
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    }
}
