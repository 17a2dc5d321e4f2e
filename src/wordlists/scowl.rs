//! SCOWL word list selection
//!
//! SCOWL ships its lists as `final/<category>-<subcategory>.<size>`, e.g.
//! `british-words.35` or `english_variant_1-proper-names.50`. A selection is
//! the union of every list whose category, subcategory and size match the
//! options. Files are ISO 8859-1 encoded.

use super::loader::{Encoding, LoadError, MultiFileLoader, WordFilter, WordSource};
use rustc_hash::FxHashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Largest size class SCOWL publishes
pub const MAX_SIZE: u8 = 100;

/// Highest spelling variant level SCOWL publishes
pub const MAX_VARIANT: u8 = 3;

const COMMON_CATEGORY: &str = "english";

/// Regional spelling category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ScowlLanguage {
    American,
    Australian,
    #[default]
    British,
    Canadian,
}

impl ScowlLanguage {
    const fn category(self) -> &'static str {
        match self {
            Self::American => "american",
            Self::Australian => "australian",
            Self::British => "british",
            Self::Canadian => "canadian",
        }
    }
}

/// Kind of entries in a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScowlSubcategory {
    Words,
    Abbreviations,
    Contractions,
    ProperNames,
    Upper,
}

impl ScowlSubcategory {
    const fn file_tag(self) -> &'static str {
        match self {
            Self::Words => "words",
            Self::Abbreviations => "abbreviations",
            Self::Contractions => "contractions",
            Self::ProperNames => "proper-names",
            Self::Upper => "upper",
        }
    }
}

/// Which SCOWL lists to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScowlOptions {
    /// Largest size class to include (1..=100)
    pub max_size: u8,
    pub language: ScowlLanguage,
    /// Highest variant level to include (0..=3)
    pub max_variants: u8,
    pub subcategories: Vec<ScowlSubcategory>,
}

impl Default for ScowlOptions {
    fn default() -> Self {
        Self {
            max_size: 70,
            language: ScowlLanguage::default(),
            max_variants: 1,
            subcategories: vec![ScowlSubcategory::Words],
        }
    }
}

impl ScowlOptions {
    fn validate(&self) -> Result<(), LoadError> {
        if !(1..=MAX_SIZE).contains(&self.max_size) {
            return Err(LoadError::InvalidScowlOption(format!(
                "max size must be between 1 and {MAX_SIZE}, got {}",
                self.max_size
            )));
        }
        if self.max_variants > MAX_VARIANT {
            return Err(LoadError::InvalidScowlOption(format!(
                "max variant must be between 0 and {MAX_VARIANT}, got {}",
                self.max_variants
            )));
        }
        Ok(())
    }

    /// `<category>-<subcategory>` stems of the files this selection wants
    fn wanted_stems(&self) -> FxHashSet<String> {
        let mut stems = FxHashSet::default();

        for language in [None, Some(self.language)] {
            for variant in 0..=self.max_variants {
                let category = category_name(language, variant);
                for subcategory in &self.subcategories {
                    stems.insert(format!("{category}-{}", subcategory.file_tag()));
                }
            }
        }

        stems
    }
}

/// Category part of a file name; `None` is the spelling shared by all regions
fn category_name(language: Option<ScowlLanguage>, variant: u8) -> String {
    let base = language.map_or(COMMON_CATEGORY, ScowlLanguage::category);

    match (variant, language) {
        (0, _) => base.to_string(),
        // American variants are published without a language prefix
        (n, Some(ScowlLanguage::American)) => format!("variant_{n}"),
        (n, _) => format!("{base}_variant_{n}"),
    }
}

/// Loads a selection of lists from a SCOWL `final/` directory
#[derive(Debug, Clone)]
pub struct ScowlLoader {
    inner: MultiFileLoader,
}

impl ScowlLoader {
    /// Scan `final_dir` for the lists matching `options`
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::InvalidScowlOption`] for out-of-range options and
    /// [`LoadError::Io`] if the directory cannot be listed.
    pub fn new(final_dir: impl AsRef<Path>, options: &ScowlOptions) -> Result<Self, LoadError> {
        options.validate()?;

        let final_dir = final_dir.as_ref();
        let wanted = options.wanted_stems();
        let io_error = |source| LoadError::Io {
            path: final_dir.to_path_buf(),
            source,
        };

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in fs::read_dir(final_dir).map_err(io_error)? {
            let entry = entry.map_err(io_error)?;
            let path = entry.path();
            // Follows symlinks
            if !path.is_file() {
                continue;
            }

            let name = entry.file_name();
            let name = name.to_string_lossy();
            if let Some((stem, size)) = name.rsplit_once('.')
                && let Ok(size) = size.parse::<u8>()
                && size <= options.max_size
                && wanted.contains(stem)
            {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            warn!(dir = %final_dir.display(), "no SCOWL lists matched");
        } else {
            debug!(dir = %final_dir.display(), lists = paths.len(), "selected SCOWL lists");
        }

        Ok(Self {
            inner: MultiFileLoader::new(paths).with_encoding(Encoding::Latin1),
        })
    }

    /// Files this loader will read, sorted
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        self.inner.paths()
    }
}

impl WordSource for ScowlLoader {
    fn word_dictionary(&self, filter: &WordFilter) -> Result<FxHashSet<String>, LoadError> {
        self.inner.word_dictionary(filter)
    }
}
