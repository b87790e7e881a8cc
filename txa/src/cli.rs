// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{CommandFactory as _, Parser};
use std::env;
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{Config, OutputFormat, load_config, load_config_file};
use crate::core::analyser::analyse;
use crate::input::InputSource;
use crate::logging::LoggingOpts;
use crate::report::{ReportOptions, write_report};

/// Single-dash switches kept from the original command line, and the long
/// aliases clap knows them by.
const LEGACY_SWITCHES: [(&str, &str); 2] = [("-wf", "--wf"), ("-cf", "--cf")];

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Text to analyse; "-" reads it from stdin
    #[arg(conflicts_with = "file", allow_hyphen_values = true)]
    pub text: Option<String>,

    /// Read the text to analyse from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Print word frequencies after the summary (also -wf)
    #[arg(long = "word-frequencies", visible_alias = "wf")]
    pub word_frequencies: bool,

    /// Print character frequencies after the summary (also -cf)
    #[arg(long = "character-frequencies", visible_alias = "cf")]
    pub character_frequencies: bool,

    /// Number of rows to show in each frequency table
    #[arg(short = 't', long)]
    pub top: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Config file to use instead of the nearest txa.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingOpts,
}

impl Args {
    /// Parses the process arguments, accepting `-wf` and `-cf`.
    #[must_use]
    pub fn parse_env() -> Self {
        Self::parse_from(normalize_legacy_switches(env::args_os()))
    }

    #[must_use]
    pub fn input_source(&self) -> Option<InputSource> {
        if let Some(path) = &self.file {
            return Some(InputSource::File(path.clone()));
        }
        self.text.clone().map(InputSource::from_argument)
    }

    /// Command line switches add to the config; `--top` and `--format`
    /// replace it.
    #[must_use]
    pub fn report_options(&self, config: &Config) -> ReportOptions {
        ReportOptions {
            format: self.format.or(config.format).unwrap_or_default(),
            character_frequencies: self.character_frequencies || config.character_frequencies,
            word_frequencies: self.word_frequencies || config.word_frequencies,
            top: self.top.or(config.top),
        }
    }
}

/// Rewrites `-wf` / `-cf` to the long forms clap parses.
pub fn normalize_legacy_switches<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|arg| {
            let arg = arg.into();
            LEGACY_SWITCHES
                .iter()
                .find(|(legacy, _)| arg == *legacy)
                .map_or(arg, |(_, long)| OsString::from(*long))
        })
        .collect()
}

fn resolve_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => load_config_file(path),
        None => {
            let dir = env::current_dir().context("Failed to determine current directory")?;
            load_config(&dir)
        }
    }
}

/// Runs the analysis and prints the report to stdout.
///
/// # Errors
///
/// See [`run_with_writer`].
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_with_writer(args, &mut handle)
}

/// Runs the analysis and renders the report into `writer`.
///
/// Without any text the usage help is written instead.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The input file or stdin cannot be read
/// * Writing to `writer` fails
pub fn run_with_writer<W: Write>(args: Args, writer: &mut W) -> Result<()> {
    let Some(source) = args.input_source() else {
        writeln!(writer, "Nothing to analyse.")?;
        Args::command().write_help(writer)?;
        return Ok(());
    };

    let config = resolve_config(args.config.as_deref())?;
    let options = args.report_options(&config);
    debug!(source = source.kind(), ?options, "resolved input");

    let text = source.read()?;
    let analysis = analyse(&text);
    write_report(writer, &analysis, &options).context("Failed to write report")?;
    writer.flush()?;

    Ok(())
}
