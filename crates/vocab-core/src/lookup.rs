use std::path::PathBuf;

use vocab_config::data::DataConfig;
use vocab_types::{RankLookupResult, WordRecord};

use crate::book::{WordBook, file_label};
use crate::error::{LookupError, Result};
use crate::paths::{BaseDir, list_word_files};
use crate::random::{RandomSource, ThreadRandom};

pub const UNKNOWN_WORD: &str = "unknown word";
pub const UNKNOWN_RANK: &str = "unknown rank";
pub const UNKNOWN_POS: &str = "unknown part of speech";
pub const NO_POS_INFO: &str = "no part-of-speech info";
pub const NO_DEFINITION: &str = "no definition info";
pub const NO_EXAMPLE: &str = "no example sentence";

/// Where the books directory comes from
#[derive(Debug, Clone)]
enum BooksLocation {
    Base(BaseDir),
    Direct(PathBuf),
}

/// Random and rank lookups over a directory of word books.
///
/// Every call lists and reads the files again; nothing is cached.
pub struct WordLookup<R = ThreadRandom> {
    location: BooksLocation,
    rng: R,
}

impl WordLookup<ThreadRandom> {
    pub fn new(base: BaseDir) -> Self {
        Self::with_random(base, ThreadRandom)
    }

    /// Base directory from config, falling back to detection
    pub fn from_config(config: &DataConfig) -> std::io::Result<Self> {
        let base = match &config.data_dir {
            Some(dir) => BaseDir::explicit(dir),
            None => BaseDir::detect(config.bundle_dir.as_ref().map(PathBuf::from))?,
        };
        Ok(Self::new(base))
    }
}

impl<R: RandomSource> WordLookup<R> {
    pub fn with_random(base: BaseDir, rng: R) -> Self {
        Self {
            location: BooksLocation::Base(base),
            rng,
        }
    }

    /// Read books straight from `dir` instead of `<base>/books`
    pub fn with_books_dir(dir: impl Into<PathBuf>, rng: R) -> Self {
        Self {
            location: BooksLocation::Direct(dir.into()),
            rng,
        }
    }

    /// Swap the random source, keeping the location
    pub fn random_source<S: RandomSource>(self, rng: S) -> WordLookup<S> {
        WordLookup {
            location: self.location,
            rng,
        }
    }

    pub fn books_dir(&self) -> PathBuf {
        match &self.location {
            BooksLocation::Base(base) => base.books_dir(),
            BooksLocation::Direct(dir) => std::path::absolute(dir).unwrap_or_else(|_| dir.clone()),
        }
    }

    /// Pick a random book and flatten it into a quiz record
    pub fn random_word(&mut self) -> Result<WordRecord> {
        let dir = self.books_dir();
        let files = list_word_files(&dir)?;

        let path = &files[self.rng.pick(files.len())];
        tracing::debug!("Selected word file {}", file_label(path));

        let book = WordBook::load(path)?;
        Ok(build_record(&book, &mut self.rng))
    }

    /// First book, in listing order, whose rank text equals `target_rank`.
    ///
    /// Files that cannot be read or parsed are skipped.
    pub fn word_by_rank(&self, target_rank: &str) -> Result<RankLookupResult> {
        let dir = self.books_dir();
        let files = list_word_files(&dir)?;

        for path in &files {
            let book = match WordBook::load(path) {
                Ok(book) => book,
                Err(e) => {
                    tracing::debug!("Skipping unreadable word file: {e}");
                    continue;
                }
            };

            if book.rank_string().unwrap_or_default() == target_rank {
                tracing::debug!("wordRank {target_rank} found in {}", file_label(path));
                return Ok(RankLookupResult {
                    word: book.head_word().unwrap_or_else(|| UNKNOWN_WORD.to_string()),
                    raw_sentences: book.sentences(),
                });
            }
        }

        Err(LookupError::RankNotFound {
            rank: target_rank.to_string(),
        })
    }
}

fn build_record(book: &WordBook, rng: &mut impl RandomSource) -> WordRecord {
    let translations = book.translations();
    let mut pos_tags: Vec<&str> = Vec::new();
    let mut definitions = Vec::new();

    for item in &translations {
        let pos = item.pos.as_deref().unwrap_or(UNKNOWN_POS);
        if !pos_tags.contains(&pos) {
            pos_tags.push(pos);
        }

        let cn = item.tran_cn.as_deref().unwrap_or_default().trim();
        let other = item.tran_other.as_deref().unwrap_or_default().trim();
        let mut definition = format!("{pos}：{cn}");
        if !other.is_empty() {
            definition.push('\n');
            definition.push_str(other);
        }
        definitions.push(definition);
    }

    let parts_of_speech = if pos_tags.is_empty() {
        NO_POS_INFO.to_string()
    } else {
        pos_tags.join(", ")
    };

    let definition = if definitions.is_empty() {
        NO_DEFINITION.to_string()
    } else {
        definitions.join("\n\n")
    };

    let sentences = book.sentences();
    let example = if sentences.is_empty() {
        NO_EXAMPLE.to_string()
    } else {
        sentences[rng.pick(sentences.len())].two_line()
    };

    WordRecord {
        word: book.head_word().unwrap_or_else(|| UNKNOWN_WORD.to_string()),
        word_rank: book.rank_string().unwrap_or_else(|| UNKNOWN_RANK.to_string()),
        parts_of_speech,
        definition,
        example,
        raw_sentences: sentences,
    }
}
