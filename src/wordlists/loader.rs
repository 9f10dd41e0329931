//! Dictionary loading
//!
//! Parses a word list from either a newline-delimited file or a bracketed
//! literal list (`['aback', 'abase', ...]`) and builds the `CandidateStore`.

use super::WORDS;
use crate::core::Word;
use crate::error::EngineError;
use log::{debug, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Where the dictionary comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionarySource {
    /// The word list compiled into the binary
    Embedded,
    /// A word list file on disk
    File(PathBuf),
}

impl DictionarySource {
    /// Interpret a `--wordlist` argument: `embedded` or a path
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "embedded" | "default" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for DictionarySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => write!(f, "embedded"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The full, validated dictionary a session narrows down from
///
/// Never mutated after loading: narrowing produces new sequences.
#[derive(Debug, Clone)]
pub struct CandidateStore {
    words: Vec<Word>,
}

impl CandidateStore {
    /// Load and validate the dictionary
    ///
    /// Entries that are not five ASCII letters are skipped with a warning and
    /// duplicates are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DictionaryUnavailable` if the file cannot be read
    /// or no valid word remains.
    ///
    /// # Examples
    /// ```
    /// use wordle_clue_solver::wordlists::{CandidateStore, DictionarySource};
    ///
    /// let store = CandidateStore::load(&DictionarySource::Embedded).unwrap();
    /// assert!(!store.is_empty());
    /// ```
    pub fn load(source: &DictionarySource) -> Result<Self, EngineError> {
        match source {
            DictionarySource::Embedded => {
                Self::from_words(&source.to_string(), WORDS.iter().copied())
            }
            DictionarySource::File(path) => {
                let content =
                    fs::read_to_string(path).map_err(|e| EngineError::DictionaryUnavailable {
                        source_name: source.to_string(),
                        reason: e.to_string(),
                    })?;
                Self::from_words(&source.to_string(), tokenize(&content))
            }
        }
    }

    /// Parse dictionary text already in memory
    ///
    /// # Errors
    ///
    /// Returns `EngineError::DictionaryUnavailable` if no valid word is found.
    pub fn parse(content: &str) -> Result<Self, EngineError> {
        Self::from_words("inline", tokenize(content))
    }

    fn from_words<'a>(
        source: &str,
        entries: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, EngineError> {
        let mut seen = FxHashSet::default();
        let mut words = Vec::new();
        let mut skipped = 0usize;

        for entry in entries {
            match Word::new(entry) {
                Ok(word) => {
                    if seen.insert(word.clone()) {
                        words.push(word);
                    }
                }
                Err(e) => {
                    debug!("Skipping dictionary entry {entry:?}: {e}");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!("Skipped {skipped} invalid entries in {source} dictionary");
        }

        if words.is_empty() {
            return Err(EngineError::DictionaryUnavailable {
                source_name: source.to_string(),
                reason: "no valid five-letter words".to_string(),
            });
        }

        debug!("Loaded {} words from {source} dictionary", words.len());
        Ok(Self { words })
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Uniformly random word from the full dictionary
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }
}

/// Split dictionary text into raw entries
///
/// Handles one word per line as well as quoted, comma separated literal lists.
/// Lines starting with `#` are comments.
fn tokenize(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| {
            line.split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']' | '\'' | '"'))
        })
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    fn texts(store: &CandidateStore) -> Vec<&str> {
        store.words().iter().map(Word::text).collect()
    }

    #[test]
    fn parse_line_format() {
        let store = CandidateStore::parse("crane\nSLATE\n  irate  \n").unwrap();
        assert_eq!(texts(&store), ["crane", "slate", "irate"]);
    }

    #[test]
    fn parse_literal_list_format() {
        let store = CandidateStore::parse("['aback', \"abase\",\n 'abate']").unwrap();
        assert_eq!(texts(&store), ["aback", "abase", "abate"]);
    }

    #[test]
    fn parse_skips_invalid_and_duplicates() {
        let store =
            CandidateStore::parse("crane\ntoolong\ncr4ne\nabc\nCRANE\nslate\n# note\n").unwrap();
        assert_eq!(texts(&store), ["crane", "slate"]);
    }

    #[test]
    fn parse_empty_is_unavailable() {
        let result = CandidateStore::parse("\n\n# nothing here\n");
        assert!(matches!(
            result,
            Err(EngineError::DictionaryUnavailable { .. })
        ));
    }

    #[test]
    fn load_missing_file_is_unavailable() {
        let source = DictionarySource::File(PathBuf::from("/definitely/not/here/words.txt"));
        let err = CandidateStore::load(&source).unwrap_err();
        assert!(matches!(err, EngineError::DictionaryUnavailable { .. }));
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "apple\ngrape\nlemon").unwrap();

        let source = DictionarySource::File(file.path().to_path_buf());
        let store = CandidateStore::load(&source).unwrap();
        assert_eq!(store.len(), 3);
        assert!(store.contains(&Word::new("grape").unwrap()));
    }

    #[test]
    fn load_embedded() {
        let store = CandidateStore::load(&DictionarySource::Embedded).unwrap();
        assert_eq!(store.len(), WORDS.len());
    }

    #[test]
    fn choose_returns_dictionary_word() {
        let store = CandidateStore::parse("crane slate irate").unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let word = store.choose(&mut rng).unwrap();
        assert!(store.contains(word));
    }

    #[test]
    fn source_from_arg() {
        assert_eq!(DictionarySource::from_arg("embedded"), DictionarySource::Embedded);
        assert_eq!(
            DictionarySource::from_arg("words.txt"),
            DictionarySource::File(PathBuf::from("words.txt"))
        );
    }
}
