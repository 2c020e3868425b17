pub mod types;

pub use types::{RankLookupResult, SentenceRecord, WordRecord};
