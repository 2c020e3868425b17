use vocab_types::{RankLookupResult, WordRecord};

pub fn word_record(record: &WordRecord) -> String {
    format!(
        "{} (#{})\n{}\n\n{}\n\n{}",
        record.word, record.word_rank, record.parts_of_speech, record.definition, record.example
    )
}

pub fn rank_result(found: &RankLookupResult) -> String {
    format!("{} ({} sentences)", found.word, found.raw_sentences.len())
}

/// Numbered sentences, source text above translation
pub fn dictation(found: &RankLookupResult) -> String {
    if found.raw_sentences.is_empty() {
        return format!("{}\nno example sentence", found.word);
    }

    let mut lines = vec![found.word.clone()];
    for (i, sentence) in found.raw_sentences.iter().enumerate() {
        lines.push(format!("{}. {}", i + 1, sentence.s_content));
        lines.push(format!("   {}", sentence.s_cn));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_types::SentenceRecord;

    #[test]
    fn test_dictation_numbers_sentences() {
        let found = RankLookupResult {
            word: "run".to_string(),
            raw_sentences: vec![
                SentenceRecord {
                    s_content: "I run.".to_string(),
                    s_cn: "我跑。".to_string(),
                },
                SentenceRecord {
                    s_content: "She ran.".to_string(),
                    s_cn: "她跑了。".to_string(),
                },
            ],
        };
        assert_eq!(
            dictation(&found),
            "run\n1. I run.\n   我跑。\n2. She ran.\n   她跑了。"
        );
    }

    #[test]
    fn test_dictation_without_sentences() {
        let found = RankLookupResult {
            word: "zero".to_string(),
            raw_sentences: vec![],
        };
        assert_eq!(dictation(&found), "zero\nno example sentence");
    }
}
