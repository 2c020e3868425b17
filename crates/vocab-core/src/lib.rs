pub mod book;
pub mod error;
pub mod lookup;
pub mod paths;
pub mod random;

pub use error::{ErrorKind, LookupError, Result};
pub use lookup::WordLookup;
pub use paths::{BaseDir, list_word_files};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
