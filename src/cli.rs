use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

/// One-line usage printed when the positional arguments are wrong.
pub const USAGE: &str = "Usage: apkg2json <input.apkg> <output.json>";

/// Convert an Anki deck archive (.apkg) to a JSON array of flashcards
#[derive(Parser, Debug)]
#[command(name = "apkg2json", version, about)]
pub struct Cli {
    /// Path to the input .apkg archive
    pub input: PathBuf,

    /// Path of the JSON file to write
    pub output: PathBuf,

    /// Log debug detail (skipped notes, unresolved images)
    #[arg(short, long, default_value_t = false, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl Cli {
    /// Parse the process arguments. Help and version requests exit 0; any
    /// other argument error prints [`USAGE`] and exits 1.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    eprintln!("{}", USAGE);
                    std::process::exit(1);
                }
            },
        }
    }

    /// Default log filter for the selected verbosity.
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
