use clap::Parser;

/// This is an interactive demonstration of divisive normalization in a
/// three-candidate preference model.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with named preset scenarios for the sliders.
    /// Presets are validated against the slider ranges at startup and cycled with the
    /// 's' key inside the interface.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, default normchoice.log) Location of the log file. The terminal is
    /// owned by the interface while the demo runs, so log output goes to a file
    /// instead of the standard streams.
    #[clap(long, value_parser)]
    pub log_file: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the log file.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
