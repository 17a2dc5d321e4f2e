//! Word list loading utilities
//!
//! Dictionaries are plain text files with one word per line. Every source
//! goes through the same [`WordFilter`], so a game can ask for "five letter
//! words over A-Z, uppercased" regardless of where the words come from.

use crate::core::Alphabet;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;
use tracing::debug;

/// Errors from loading a dictionary
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    #[error("no words loaded")]
    NoWordsFound,

    #[error("invalid SCOWL option: {0}")]
    InvalidScowlOption(String),
}

/// Which words to keep from a raw list, and how to normalise them
///
/// Words are trimmed, optionally uppercased, then checked for length and
/// alphabet membership. Blank lines never survive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WordFilter {
    pub word_length: Option<usize>,
    pub uppercase: bool,
    pub alphabet: Option<Alphabet>,
}

impl WordFilter {
    /// Keep every non-blank word unchanged
    #[must_use]
    pub const fn new() -> Self {
        Self {
            word_length: None,
            uppercase: false,
            alphabet: None,
        }
    }

    #[must_use]
    pub const fn with_length(mut self, word_length: usize) -> Self {
        self.word_length = Some(word_length);
        self
    }

    #[must_use]
    pub const fn uppercase(mut self) -> Self {
        self.uppercase = true;
        self
    }

    #[must_use]
    pub const fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Normalise `raw`, or `None` if the word is filtered out
    #[must_use]
    pub fn apply(&self, raw: &str) -> Option<String> {
        let word = raw.trim();
        if word.is_empty() {
            return None;
        }

        let word = if self.uppercase {
            word.to_uppercase()
        } else {
            word.to_string()
        };

        if self
            .word_length
            .is_some_and(|length| word.chars().count() != length)
        {
            return None;
        }
        if self
            .alphabet
            .is_some_and(|alphabet| !alphabet.contains_word(&word))
        {
            return None;
        }

        Some(word)
    }

    /// Apply the filter to every line
    pub fn collect<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> FxHashSet<String> {
        lines.into_iter().filter_map(|line| self.apply(line)).collect()
    }
}

/// Text encoding of a dictionary file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Utf8,
    /// ISO 8859-1, as used by SCOWL
    Latin1,
}

impl Encoding {
    fn decode(self, bytes: Vec<u8>) -> Result<String, FromUtf8Error> {
        match self {
            Self::Utf8 => String::from_utf8(bytes),
            Self::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

/// Anything that can supply a set of words
pub trait WordSource: Send + Sync {
    /// Load the words that pass `filter`
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::NoWordsFound`] if nothing survives the filter,
    /// [`LoadError::Io`] if the underlying storage cannot be read, or
    /// [`LoadError::Decode`] if it is not in the expected encoding.
    fn word_dictionary(&self, filter: &WordFilter) -> Result<FxHashSet<String>, LoadError>;
}

fn non_empty(words: FxHashSet<String>) -> Result<FxHashSet<String>, LoadError> {
    if words.is_empty() {
        Err(LoadError::NoWordsFound)
    } else {
        Ok(words)
    }
}

/// Read one dictionary file and apply `filter` to it
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, or
/// [`LoadError::Decode`] if a UTF-8 file contains invalid bytes.
pub fn read_word_file(
    path: &Path,
    filter: &WordFilter,
    encoding: Encoding,
) -> Result<FxHashSet<String>, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = encoding.decode(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let words = filter.collect(content.lines());
    debug!(path = %path.display(), words = words.len(), "read word list");

    Ok(words)
}

/// Loads words from a single file
///
/// # Examples
/// ```no_run
/// use wordall::wordlists::{FileLoader, WordFilter, WordSource};
///
/// let words = FileLoader::new("dict.txt")
///     .word_dictionary(&WordFilter::new().with_length(5).uppercase())
///     .unwrap();
/// println!("Loaded {} words", words.len());
/// ```
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
    encoding: Encoding,
}

impl FileLoader {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            encoding: Encoding::default(),
        }
    }

    #[must_use]
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

impl WordSource for FileLoader {
    fn word_dictionary(&self, filter: &WordFilter) -> Result<FxHashSet<String>, LoadError> {
        non_empty(read_word_file(&self.path, filter, self.encoding)?)
    }
}

/// Loads the union of several files
///
/// Files are read in parallel; any unreadable file fails the whole load.
#[derive(Debug, Clone, Default)]
pub struct MultiFileLoader {
    paths: Vec<PathBuf>,
    encoding: Encoding,
}

impl MultiFileLoader {
    #[must_use]
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            encoding: Encoding::default(),
        }
    }

    #[must_use]
    pub const fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

impl WordSource for MultiFileLoader {
    fn word_dictionary(&self, filter: &WordFilter) -> Result<FxHashSet<String>, LoadError> {
        let per_file = self
            .paths
            .par_iter()
            .map(|path| read_word_file(path, filter, self.encoding))
            .collect::<Result<Vec<_>, _>>()?;

        let words = per_file
            .into_iter()
            .reduce(|mut all, words| {
                all.extend(words);
                all
            })
            .unwrap_or_default();

        non_empty(words)
    }
}

/// The dictionary compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedLoader;

impl WordSource for EmbeddedLoader {
    fn word_dictionary(&self, filter: &WordFilter) -> Result<FxHashSet<String>, LoadError> {
        non_empty(filter.collect(super::WORDS.iter().copied()))
    }
}

/// Words already held in memory
///
/// Used to load a large dictionary once and start many games from it.
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    words: FxHashSet<String>,
}

impl MemoryLoader {
    #[must_use]
    pub const fn new(words: FxHashSet<String>) -> Self {
        Self { words }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<String> for MemoryLoader {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl WordSource for MemoryLoader {
    fn word_dictionary(&self, filter: &WordFilter) -> Result<FxHashSet<String>, LoadError> {
        non_empty(filter.collect(self.words.iter().map(String::as_str)))
    }
}
