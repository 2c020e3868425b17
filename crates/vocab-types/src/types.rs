use serde::{Deserialize, Serialize};

/// Example sentence paired with its translation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceRecord {
    #[serde(rename = "sContent", default)]
    pub s_content: String,
    #[serde(rename = "sCn", default)]
    pub s_cn: String,
}

impl SentenceRecord {
    /// Source text and translation on two lines
    pub fn two_line(&self) -> String {
        format!("{}\n{}", self.s_content, self.s_cn)
    }
}

/// Flattened word shown as a quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub word: String,
    pub word_rank: String,
    pub parts_of_speech: String,
    pub definition: String,
    pub example: String,
    /// Every sentence attached to the word, kept for dictation
    pub raw_sentences: Vec<SentenceRecord>,
}

/// Word found by its rank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankLookupResult {
    pub word: String,
    pub raw_sentences: Vec<SentenceRecord>,
}
