//! Word list loading.
//!
//! Two source formats are understood:
//!
//! - a plain word list, one word per line;
//! - a frequency table, one `word count` pair per line (whitespace separated,
//!   extra columns ignored), filtered by a minimum count.
//!
//! In both formats blank lines and lines starting with `#` are skipped, and
//! words are normalized with [`normalize_word`](crate::normalize_word).

use std::{fs, path::Path};

use crate::{Dictionary, DictionaryBuilder, DictionaryError};

fn content_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Parses a newline-delimited word list.
///
/// # Examples
///
/// ```
/// use balda_dictionary::loader::parse_word_list;
///
/// let dict = parse_word_list("Кот\r\nпёс\n\n# comment\nиз-за\n");
/// assert_eq!(dict.len(), 2);
/// assert!(dict.contains("кот"));
/// ```
#[must_use]
pub fn parse_word_list(text: &str) -> Dictionary {
    let mut builder = DictionaryBuilder::new();
    builder.extend(content_lines(text).map(|(_, line)| line));
    log::info!(
        "loaded {} words from word list ({} rejected)",
        builder.len(),
        builder.rejected()
    );
    builder.build()
}

/// Parses a frequency table, keeping words whose count is at least `min_count`.
///
/// # Errors
///
/// Returns [`DictionaryError::MissingCount`] or [`DictionaryError::InvalidCount`]
/// for malformed lines.
///
/// # Examples
///
/// ```
/// use balda_dictionary::loader::parse_frequency_table;
///
/// let table = "кот 120\nпёс\t80\nёж 3\n";
/// let dict = parse_frequency_table(table, 10).unwrap();
/// assert!(dict.contains("пёс"));
/// assert!(!dict.contains("ёж"));
///
/// assert!(parse_frequency_table("кот много\n", 1).is_err());
/// ```
pub fn parse_frequency_table(text: &str, min_count: u64) -> Result<Dictionary, DictionaryError> {
    let mut builder = DictionaryBuilder::new();
    let mut below_threshold = 0;
    for (line_no, line) in content_lines(text) {
        let mut columns = line.split_whitespace();
        let (Some(word), Some(count)) = (columns.next(), columns.next()) else {
            return Err(DictionaryError::MissingCount { line: line_no });
        };
        let count: u64 = count.parse().map_err(|_| DictionaryError::InvalidCount {
            line: line_no,
            count: count.to_owned(),
        })?;
        if count < min_count {
            below_threshold += 1;
            continue;
        }
        builder.insert(word);
    }
    log::info!(
        "loaded {} words from frequency table ({} rejected, {} below count {})",
        builder.len(),
        builder.rejected(),
        below_threshold,
        min_count
    );
    Ok(builder.build())
}

/// Reads and parses a newline-delimited word list file.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read.
pub fn load_word_list(path: impl AsRef<Path>) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    log::debug!("reading word list from {}", path.display());
    let text = fs::read_to_string(path)?;
    Ok(parse_word_list(&text))
}

/// Reads and parses a frequency table file.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be read, and the errors of
/// [`parse_frequency_table`] for malformed content.
pub fn load_frequency_table(
    path: impl AsRef<Path>,
    min_count: u64,
) -> Result<Dictionary, DictionaryError> {
    let path = path.as_ref();
    log::debug!("reading frequency table from {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_frequency_table(&text, min_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_list_trims_and_lowercases() {
        let dict = parse_word_list("  ЛАМПА  \r\nлампа\nЛама\n");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words_of_len(5), ["лампа"]);
    }

    #[test]
    fn test_word_list_skips_comments_and_numerals() {
        let dict = parse_word_list("# header\n42\nсто\n3д\n");
        assert_eq!(dict.words().collect::<Vec<_>>(), ["сто"]);
    }

    #[test]
    fn test_frequency_table_errors_carry_line_numbers() {
        let err = parse_frequency_table("кот 1\n\nпёс\n", 0).unwrap_err();
        assert!(matches!(err, DictionaryError::MissingCount { line: 3 }));

        let err = parse_frequency_table("кот -1\n", 0).unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::InvalidCount { line: 1, ref count } if count == "-1"
        ));
    }

    #[test]
    fn test_frequency_table_ignores_extra_columns() {
        let dict = parse_frequency_table("кот 5 noun\nпёс 5 noun\n", 5).unwrap();
        assert_eq!(dict.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_word_list("/nonexistent/balda/words.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io(_)));
    }
}
