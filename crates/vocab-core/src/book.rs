use std::fs;
use std::path::Path;

use serde_json::Value;
use vocab_types::SentenceRecord;

use crate::error::{LookupError, Result};

/// One word book file.
///
/// Only JSON syntax is checked on load. Fields are read from the parsed value
/// on access, so a missing, null or oddly typed level never fails the file.
#[derive(Debug, Clone, Default)]
pub struct WordBook {
    root: Value,
}

/// One part-of-speech tagged definition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Translation {
    pub pos: Option<String>,
    pub tran_cn: Option<String>,
    pub tran_other: Option<String>,
}

impl WordBook {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self {
            root: serde_json::from_str(json)?,
        })
    }

    /// Read and parse a book file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| LookupError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&json).map_err(|source| LookupError::MalformedData {
            file: file_label(path),
            source,
        })
    }

    // content.word.content
    fn word_content(&self) -> Option<&Value> {
        self.root.get("content")?.get("word")?.get("content")
    }

    pub fn head_word(&self) -> Option<String> {
        self.root.get("headWord").and_then(scalar_text)
    }

    /// `wordRank` as text: strings verbatim, other values by their JSON form
    pub fn rank_string(&self) -> Option<String> {
        self.root.get("wordRank").and_then(scalar_text)
    }

    pub fn translations(&self) -> Vec<Translation> {
        let Some(items) = self
            .word_content()
            .and_then(|c| c.get("trans"))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        items
            .iter()
            .map(|item| Translation {
                pos: field_text(item, "pos"),
                tran_cn: field_text(item, "tranCn"),
                tran_other: field_text(item, "tranOther"),
            })
            .collect()
    }

    pub fn sentences(&self) -> Vec<SentenceRecord> {
        let Some(items) = self
            .word_content()
            .and_then(|c| c.get("sentence"))
            .and_then(|s| s.get("sentences"))
            .and_then(Value::as_array)
        else {
            return Vec::new();
        };

        items
            .iter()
            .map(|item| SentenceRecord {
                s_content: field_text(item, "sContent").unwrap_or_default(),
                s_cn: field_text(item, "sCn").unwrap_or_default(),
            })
            .collect()
    }
}

/// Text of a scalar; null counts as absent
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn field_text(object: &Value, key: &str) -> Option<String> {
    object.get(key).and_then(scalar_text)
}

/// File name used in error messages
pub(crate) fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_levels_give_empty_collections() {
        for json in [
            r#"{}"#,
            r#"[]"#,
            r#"{"content":{}}"#,
            r#"{"content":null}"#,
            r#"{"content":"text"}"#,
            r#"{"content":{"word":{}}}"#,
            r#"{"content":{"word":{"content":{"sentence":{}}}}}"#,
            r#"{"content":{"word":{"content":{"trans":null,"sentence":null}}}}"#,
            r#"{"content":{"word":{"content":{"trans":"n.","sentence":{"sentences":7}}}}}"#,
        ] {
            let book = WordBook::from_json(json).unwrap();
            assert!(book.translations().is_empty(), "{json}");
            assert!(book.sentences().is_empty(), "{json}");
        }
    }

    #[test]
    fn test_full_book_parses() {
        let json = r#"{
            "wordRank": 12,
            "headWord": "abandon",
            "content": {"word": {"wordHead": "abandon", "content": {
                "trans": [{"pos": "v.", "tranCn": "放弃", "tranOther": "to leave"}],
                "sentence": {"sentences": [{"sContent": "They abandoned the car.", "sCn": "他们弃车了。"}]}
            }}}
        }"#;
        let book = WordBook::from_json(json).unwrap();
        assert_eq!(book.head_word().as_deref(), Some("abandon"));
        assert_eq!(book.rank_string().as_deref(), Some("12"));
        assert_eq!(book.translations().len(), 1);
        assert_eq!(book.translations()[0].pos.as_deref(), Some("v."));
        assert_eq!(book.sentences()[0].s_cn, "他们弃车了。");
    }

    #[test]
    fn test_string_rank_kept_verbatim() {
        let book = WordBook::from_json(r#"{"wordRank":"007"}"#).unwrap();
        assert_eq!(book.rank_string().as_deref(), Some("007"));
        assert!(WordBook::from_json("{}").unwrap().rank_string().is_none());
        assert!(WordBook::from_json(r#"{"wordRank":null}"#).unwrap().rank_string().is_none());
    }

    #[test]
    fn test_bool_rank_uses_json_text() {
        let book = WordBook::from_json(r#"{"wordRank":true}"#).unwrap();
        assert_eq!(book.rank_string().as_deref(), Some("true"));
    }

    #[test]
    fn test_null_and_numeric_fields_tolerated() {
        let json = r#"{"headWord":42,"content":{"word":{"content":{
            "trans":[{"pos":null,"tranCn":null,"tranOther":3}],
            "sentence":{"sentences":[{"sContent":"s1","sCn":null},{}]}
        }}}}"#;
        let book = WordBook::from_json(json).unwrap();
        assert_eq!(book.head_word().as_deref(), Some("42"));

        let trans = book.translations();
        assert_eq!(trans[0].pos, None);
        assert_eq!(trans[0].tran_cn, None);
        assert_eq!(trans[0].tran_other.as_deref(), Some("3"));

        let sentences = book.sentences();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].s_content, "s1");
        assert_eq!(sentences[0].s_cn, "");
        assert_eq!(sentences[1], SentenceRecord::default());
    }

    #[test]
    fn test_load_reports_file_name_on_bad_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = WordBook::load(&path).unwrap_err();
        assert!(matches!(err, LookupError::MalformedData { .. }));
        assert!(err.to_string().contains("broken.json"));
    }
}
