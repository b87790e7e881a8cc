// src/input.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Where the text to analyse comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Text(String),
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// A `-` argument means stdin; anything else is the text itself.
    #[must_use]
    pub fn from_argument(argument: String) -> Self {
        if argument == "-" {
            Self::Stdin
        } else {
            Self::Text(argument)
        }
    }

    /// Short label for logs; never the text itself.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "argument",
            Self::Stdin => "stdin",
            Self::File(_) => "file",
        }
    }

    /// Resolves the source to its text.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or stdin cannot be read as UTF-8.
    pub fn read(self) -> Result<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::Stdin => read_from(io::stdin().lock()).context("Failed to read text from stdin"),
            Self::File(path) => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file: {}", path.display())),
        }
    }
}

/// Reads everything from `reader`.
///
/// # Errors
///
/// Returns an error if reading fails or the bytes are not UTF-8.
pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}
