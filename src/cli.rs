//! Command line arguments

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "freakyfetch", version, about = "A freaky system fetch")]
pub struct Cli {
    /// Use a custom config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the detected distribution name
    #[arg(short, long, value_name = "NAME")]
    pub distro: Option<String>,

    /// Show an image instead of the ascii logo, optionally a custom one
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub image: Option<Option<String>>,

    /// List the available ascii logos and exit
    #[arg(short, long)]
    pub list: bool,

    /// Read system info from the cache, probing and writing it if missing
    #[arg(short, long)]
    pub read_cache: bool,

    /// Write probed system info to the cache
    #[arg(short, long)]
    pub write_cache: bool,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
