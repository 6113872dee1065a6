#![deny(unsafe_code)]
pub mod commands;
mod version;

use std::path::PathBuf;

use anyhow::Result;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgGroup, Parser};
use commands::command::Command;
use commands::common::{IdentityOptions, ThreadingOptions};
use commands::directory::SortDirectory;
use commands::input_file::SortFile;
use commands::random::RandomNumbers;
use enum_dispatch::enum_dispatch;
use env_logger::Env;
use log::info;

/// Custom styles for CLI help output
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// Sort integers by sorting sqrt(n) chunks concurrently and merging them.
#[derive(Parser, Debug)]
#[command(
    name = "chunksort",
    version,
    styles = STYLES,
    group(ArgGroup::new("mode").required(true).multiple(false).args(["random", "input", "dir"])),
    after_help = r#"EXAMPLES:

  # Sort 20 random numbers and print every stage
  chunksort -r 20

  # Sort the numbers in a file (one integer per line)
  chunksort -i input.txt

  # Sort every .txt file in a directory into <dir>_sorted_<first>_<surname>_<id>
  chunksort -d incoming --first-name Ada --surname Lovelace --id 1815
"#
)]
struct Args {
    /// Generate N random integers in [0, 1000) and sort them (N >= 10).
    #[arg(short = 'r', long = "random", value_name = "N")]
    random: Option<usize>,

    /// Sort the integers in FILE, one per line.
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    input: Option<PathBuf>,

    /// Sort every .txt file in DIR into a sibling output directory.
    #[arg(short = 'd', long = "dir", value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Seed for random mode, for reproducible runs.
    #[arg(long = "seed", requires = "random")]
    seed: Option<u64>,

    #[command(flatten)]
    threading: ThreadingOptions,

    #[command(flatten)]
    identity: IdentityOptions,
}

#[enum_dispatch(Command)]
#[derive(Debug)]
enum Mode {
    Random(RandomNumbers),
    InputFile(SortFile),
    Directory(SortDirectory),
}

impl Args {
    /// Resolves the selected mode; clap guarantees exactly one is present.
    fn into_mode(self) -> Mode {
        let threading = self.threading;
        if let Some(count) = self.random {
            Mode::Random(RandomNumbers { count, seed: self.seed, threading })
        } else if let Some(input) = self.input {
            Mode::InputFile(SortFile { input, threading })
        } else {
            let input_dir = self.dir.unwrap_or_default();
            Mode::Directory(SortDirectory {
                input_dir,
                identity: (&self.identity).into(),
                threading,
            })
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Running chunksort version {}", version::VERSION);
    args.into_mode().execute()
}
