#![forbid(unsafe_code)]

//! Command-line argument parsing for the storyboard.
//!
//! Arguments are parsed by hand. Every option can also be set through a
//! `STORYBOARD_*` environment variable; explicit flags win over the
//! environment, which wins over defaults. Malformed environment values are
//! ignored, malformed flags are an error.

use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process;

use storyboard_core::DisplayMode;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Slot Storyboard: deterministic reservations vs. the public mempool

USAGE:
    storyboard [OPTIONS]

OPTIONS:
    --screen-mode=MODE   Screen mode: 'alt' (default) or 'inline'
    --ui-height=N        UI height in rows for inline mode (default: 24)
    --screen=N           Start on screen N, 1-indexed (default: 1)
    --mode=MODE          Comparison view: split (default), deterministic, traditional
    --autoplay           Start timeline playback immediately
    --no-mouse           Disable mouse event capture
    --exit-after-ms=N    Quit automatically after N milliseconds
    --log-file=PATH      Write tracing output to PATH
    --dump-json          Print both datasets as JSON and exit
    --help, -h           Show this help message
    --version, -V        Show version

SCREENS:
    1  Comparison         Animated side-by-side execution timelines
    2  Impact             Headline metrics, comparison bars, benchmarks
    3  Architecture       Execution pipeline and capacity allocation
    4  MEV & Auctions     Front-running and the two auction flows
    5  Use Cases          Industry scenarios and integration examples
    6  Technical          Infrastructure components
    7  FAQ                Common questions about deterministic execution
    8  Roadmap            Upcoming milestones

KEYBINDINGS:
    F1-F8           Switch screen
    Tab / Shift-Tab Cycle screens
    ?               Toggle help overlay
    q / Ctrl+C      Quit

ENVIRONMENT VARIABLES:
    STORYBOARD_SCREEN_MODE    Override --screen-mode (alt|inline)
    STORYBOARD_UI_HEIGHT      Override --ui-height
    STORYBOARD_SCREEN         Override --screen
    STORYBOARD_MODE           Override --mode
    STORYBOARD_AUTOPLAY       Set to 1 to enable --autoplay
    STORYBOARD_EXIT_AFTER_MS  Override --exit-after-ms
    STORYBOARD_LOG_FILE       Override --log-file
    STORYBOARD_LOG            Log filter directives (falls back to RUST_LOG)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Screen mode: "alt" or "inline".
    pub screen_mode: String,
    /// UI height for inline mode.
    pub ui_height: u16,
    /// Starting screen (1-indexed).
    pub start_screen: u16,
    /// Initial display mode of the comparison screen.
    pub display_mode: DisplayMode,
    /// Start playback on launch.
    pub autoplay: bool,
    /// Whether mouse events are enabled.
    pub mouse: bool,
    /// Auto-exit after this many milliseconds (0 = disabled).
    pub exit_after_ms: u64,
    /// Tracing output file; logging is off when unset.
    pub log_file: Option<PathBuf>,
    /// Print datasets as JSON instead of running the UI.
    pub dump_json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            screen_mode: "alt".into(),
            ui_height: 24,
            start_screen: 1,
            display_mode: DisplayMode::default(),
            autoplay: false,
            mouse: true,
            exit_after_ms: 0,
            log_file: None,
            dump_json: false,
        }
    }
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Run(Opts),
    Help,
    Version,
}

/// A flag that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    InvalidValue { flag: &'static str, value: String },
    UnknownArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { flag, value } => write!(f, "Invalid {flag} value: {value}"),
            Self::UnknownArgument(arg) => write!(f, "Unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for CliError {}

fn parse_flag<T: std::str::FromStr>(flag: &'static str, value: &str) -> Result<T, CliError> {
    value.parse().map_err(|_| CliError::InvalidValue {
        flag,
        value: value.to_string(),
    })
}

fn parse_screen_mode(value: &str) -> Result<String, CliError> {
    match value {
        "alt" | "inline" => Ok(value.to_string()),
        _ => Err(CliError::InvalidValue {
            flag: "--screen-mode",
            value: value.to_string(),
        }),
    }
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Opts {
    /// Parse the process arguments and environment.
    ///
    /// Prints help or version and exits when asked to; prints the error and
    /// exits with status 1 on a malformed flag.
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().skip(1).collect();
        match Self::parse_from(args.as_slice(), |key| env::var(key).ok()) {
            Ok(Invocation::Run(opts)) => opts,
            Ok(Invocation::Help) => {
                println!("{HELP_TEXT}");
                process::exit(0);
            }
            Ok(Invocation::Version) => {
                println!("storyboard {VERSION}");
                process::exit(0);
            }
            Err(err) => {
                eprintln!("{err}");
                eprintln!("Run with --help for usage information.");
                process::exit(1);
            }
        }
    }

    /// Parse `args` (without the program name) with `env` as the variable lookup.
    pub fn parse_from<S, F>(args: &[S], env: F) -> Result<Invocation, CliError>
    where
        S: AsRef<str>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        // Environment first
        if let Some(val) = env("STORYBOARD_SCREEN_MODE")
            && let Ok(mode) = parse_screen_mode(&val)
        {
            opts.screen_mode = mode;
        }
        if let Some(val) = env("STORYBOARD_UI_HEIGHT")
            && let Ok(n) = val.parse()
        {
            opts.ui_height = n;
        }
        if let Some(val) = env("STORYBOARD_SCREEN")
            && let Ok(n) = val.parse()
        {
            opts.start_screen = n;
        }
        if let Some(val) = env("STORYBOARD_MODE")
            && let Ok(mode) = val.parse()
        {
            opts.display_mode = mode;
        }
        if let Some(val) = env("STORYBOARD_AUTOPLAY") {
            opts.autoplay = truthy(&val);
        }
        if let Some(val) = env("STORYBOARD_EXIT_AFTER_MS")
            && let Ok(n) = val.parse()
        {
            opts.exit_after_ms = n;
        }
        if let Some(val) = env("STORYBOARD_LOG_FILE")
            && !val.is_empty()
        {
            opts.log_file = Some(PathBuf::from(val));
        }

        // Then flags
        for arg in args {
            match arg.as_ref() {
                "--help" | "-h" => return Ok(Invocation::Help),
                "--version" | "-V" => return Ok(Invocation::Version),
                "--no-mouse" => opts.mouse = false,
                "--autoplay" => opts.autoplay = true,
                "--dump-json" => opts.dump_json = true,
                other => {
                    if let Some(val) = other.strip_prefix("--screen-mode=") {
                        opts.screen_mode = parse_screen_mode(val)?;
                    } else if let Some(val) = other.strip_prefix("--ui-height=") {
                        opts.ui_height = parse_flag("--ui-height", val)?;
                    } else if let Some(val) = other.strip_prefix("--screen=") {
                        opts.start_screen = parse_flag("--screen", val)?;
                    } else if let Some(val) = other.strip_prefix("--mode=") {
                        opts.display_mode = parse_flag("--mode", val)?;
                    } else if let Some(val) = other.strip_prefix("--exit-after-ms=") {
                        opts.exit_after_ms = parse_flag("--exit-after-ms", val)?;
                    } else if let Some(val) = other.strip_prefix("--log-file=") {
                        opts.log_file = Some(PathBuf::from(val));
                    } else {
                        return Err(CliError::UnknownArgument(other.to_string()));
                    }
                }
            }
        }

        Ok(Invocation::Run(opts))
    }
}
