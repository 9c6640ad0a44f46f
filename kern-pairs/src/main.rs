//! List the kerning pairs of a font.
//!
//! Pairs are printed one per line as `/left /right value`, sorted by glyph
//! name.

use std::{io::Write, path::PathBuf, process::ExitCode};

use kern_pairs::{DuplicatePolicy, GlyphNames, Options};
use read_fonts::FontRef;

#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the font file
    font: PathBuf,
    /// Print the number of pairs instead of the pairs
    #[arg(long)]
    count: bool,
    /// Which value to keep when a glyph pair is listed more than once
    #[arg(long, value_enum, default_value_t)]
    duplicates: Duplicates,
    /// The index of the font in a font collection
    #[arg(long, default_value_t = 0)]
    index: u32,
    /// Log more (may be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Which value to keep when a glyph pair is listed more than once.
#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
enum Duplicates {
    /// The value from the last subtable.
    #[default]
    Last,
    /// The value from the first subtable.
    First,
}

impl From<Duplicates> for DuplicatePolicy {
    fn from(src: Duplicates) -> Self {
        match src {
            Duplicates::Last => DuplicatePolicy::Last,
            Duplicates::First => DuplicatePolicy::First,
        }
    }
}

impl Args {
    fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            return log::LevelFilter::Error;
        }
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let args = <Args as clap::Parser>::parse();
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error(msg)) => {
            eprintln!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if !args.font.is_file() {
        return Err(Error(format!(
            "No valid font provided: '{}'",
            args.font.display()
        )));
    }
    let bytes = std::fs::read(&args.font)
        .map_err(|e| Error(format!("Failed to read '{}': {e}", args.font.display())))?;
    let font = FontRef::from_index(&bytes, args.index)
        .map_err(|e| Error(format!("Failed to read font: '{e}'")))?;

    let options = Options {
        duplicate_policy: args.duplicates.into(),
    };
    let pairs = kern_pairs::analyze(&font, &options).map_err(|e| Error(e.to_string()))?;

    let mut stdout = std::io::stdout().lock();
    if args.count {
        writeln!(stdout, "{}", pairs.len())
    } else {
        kern_pairs::write_pairs(&mut stdout, &pairs, &GlyphNames::new(&font))
    }
    .map_err(|e| Error(format!("Failed to write output: {e}")))
}

/// A message for the user.
struct Error(String);
