// src/report.rs
use std::fmt::Display;
use std::hash::Hash;
use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::models::{Analysis, FrequencyTable, Metrics};

/// What to print after the summary, and how.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: OutputFormat,
    pub character_frequencies: bool,
    pub word_frequencies: bool,
    /// Row limit per frequency table; `None` prints every row.
    pub top: Option<usize>,
}

/// Renders `analysis` in the requested format.
///
/// Frequency switches and `top` only shape plain output; JSON always carries
/// the complete analysis.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    analysis: &Analysis,
    options: &ReportOptions,
) -> io::Result<()> {
    match options.format {
        OutputFormat::Plain => write_plain(writer, analysis, options),
        OutputFormat::Json => write_json(writer, analysis),
    }
}

/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_plain<W: Write>(
    writer: &mut W,
    analysis: &Analysis,
    options: &ReportOptions,
) -> io::Result<()> {
    write_summary(writer, &analysis.metrics)?;

    if options.character_frequencies {
        writeln!(writer)?;
        writeln!(writer, "Character frequencies:")?;
        write_frequencies(writer, &analysis.character_frequencies, options.top)?;
    }
    if options.word_frequencies {
        writeln!(writer)?;
        writeln!(writer, "Word frequencies:")?;
        write_frequencies(writer, &analysis.word_frequencies, options.top)?;
    }

    Ok(())
}

/// # Errors
///
/// Returns an error if serialisation or writing fails.
pub fn write_json<W: Write>(writer: &mut W, analysis: &Analysis) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, analysis)?;
    writeln!(writer)
}

fn write_summary<W: Write>(writer: &mut W, metrics: &Metrics) -> io::Result<()> {
    writeln!(
        writer,
        "Number of characters (with spaces): {}",
        metrics.characters_with_spaces
    )?;
    writeln!(
        writer,
        "Number of characters (no spaces): {}",
        metrics.characters_without_spaces
    )?;
    writeln!(writer, "Number of vowels: {}", metrics.vowels_count)?;
    writeln!(writer, "Number of consonants: {}", metrics.consonants_count)?;
    writeln!(writer, "Number of words: {}", metrics.words_count)?;
    writeln!(writer, "Number of unique words: {}", metrics.unique_words_count)?;
    writeln!(writer, "Number of sentences: {}", metrics.sentence_count)?;
    writeln!(
        writer,
        "Average sentence length: {:.2}",
        metrics.average_sentence_length
    )
}

fn write_frequencies<W, K>(
    writer: &mut W,
    table: &FrequencyTable<K>,
    top: Option<usize>,
) -> io::Result<()>
where
    W: Write,
    K: Eq + Hash + Ord + Clone + Display,
{
    for entry in table.sorted_by_count().iter().take(top.unwrap_or(usize::MAX)) {
        writeln!(writer, "{}: {}x", entry.value, entry.count)?;
    }
    Ok(())
}
