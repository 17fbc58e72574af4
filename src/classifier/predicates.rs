//! Relevance predicates: keyword containment and tabular-structure detection.
//!
//! Both operate on lemmatized text, which is why keyword phrases look
//! grammatically odd ("бюджетный ассигнование") - every word is in
//! dictionary base form.

use std::sync::LazyLock;

use regex::Regex;

/// A table row: arbitrary label followed by a number that may contain
/// internal thousands separators, e.g. "Ивановская область   1 234,56".
static TABLE_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(.*?)\s+(\d+[\d\s,.]*)\s*$").unwrap());

/// Header cell naming the subject column ("наименование субъекта ...").
static SUBJECT_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)наименование.*субъекта").unwrap());

/// Header cell naming the amount column ("размер", "сумма", "тыс. руб").
static SUM_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(размер|сумма|тыс.*руб)").unwrap());

/// Case-insensitive substring containment for any of the given phrases.
///
/// Deliberately permissive: no tokenization or word boundaries, so a phrase
/// may match inside a longer word. Lemmatized text makes this precise enough
/// in practice.
pub fn contains_keywords(text: &str, keywords: &[String]) -> bool {
    let haystack = text.to_lowercase();
    keywords
        .iter()
        .any(|keyword| haystack.contains(&keyword.to_lowercase()))
}

/// Detect a "subject name / amount" tabular layout.
///
/// Requires a subject-name header, an amount header, and more than 3 lines
/// shaped like `<label> <number>`. The row threshold keeps a single
/// incidental numeric line from triggering a match; a genuine allocation
/// table lists multiple subjects.
pub fn contains_table_data(text: &str) -> bool {
    let has_subject_header = SUBJECT_HEADER.is_match(text);
    let has_sum_header = SUM_HEADER.is_match(text);
    let row_count = TABLE_ROW.find_iter(text).count();
    has_subject_header && has_sum_header && row_count > 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_keywords_case_insensitive() {
        let kw = keywords(&["субсидия"]);
        assert!(contains_keywords("выделить СУБСИДИЯ бюджету", &kw));
        assert!(contains_keywords("выделить СуБсИдИя бюджету", &kw));
        assert!(!contains_keywords("выделить грант бюджету", &kw));
    }

    #[test]
    fn test_keywords_substring_semantics() {
        // No word boundaries: a phrase may match inside a longer word.
        let kw = keywords(&["дотация"]);
        assert!(contains_keywords("недотация", &kw));
    }

    #[test]
    fn test_keywords_empty_text() {
        assert!(!contains_keywords("", &keywords(&["субсидия"])));
    }

    fn table_text(rows: usize) -> String {
        let mut text = String::from("Наименование субъекта Российской Федерации\n");
        text.push_str("Размер дотации, тыс. руб\n");
        for i in 0..rows {
            text.push_str(&format!("область номер {}   1 23{},5\n", i, i));
        }
        text
    }

    #[test]
    fn test_table_threshold_is_strict() {
        // Header lines themselves do not match the row pattern (no trailing
        // number), so row count equals the generated rows.
        assert!(!contains_table_data(&table_text(3)));
        assert!(contains_table_data(&table_text(4)));
        assert!(contains_table_data(&table_text(9)));
    }

    #[test]
    fn test_table_requires_both_headers() {
        let mut no_subject = String::from("Размер дотации, тыс. руб\n");
        for i in 0..6 {
            no_subject.push_str(&format!("строка {}   100{}\n", i, i));
        }
        assert!(!contains_table_data(&no_subject));

        let mut no_sum = String::from("Наименование субъекта\n");
        for i in 0..6 {
            no_sum.push_str(&format!("строка {}   100{}\n", i, i));
        }
        assert!(!contains_table_data(&no_sum));
    }

    #[test]
    fn test_table_rows_with_separators() {
        let text = "наименование субъекта\nсумма\n\
                    Белгородская область 12 345,67\n\
                    Брянская область 1.234\n\
                    Владимирская область 999\n\
                    Воронежская область 10 000\n";
        assert!(contains_table_data(text));
    }

    #[test]
    fn test_headers_match_case_insensitively() {
        let mut text = String::from("НАИМЕНОВАНИЕ СУБЪЕКТА\nСУММА\n");
        for i in 0..5 {
            text.push_str(&format!("строка {}   42{}\n", i, i));
        }
        assert!(contains_table_data(&text));
    }
}
