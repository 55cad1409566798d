//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::SecretWord;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, one per line
///
/// Blank lines and lines starting with `#` are skipped. Invalid entries are
/// skipped with a warning.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<SecretWord>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_lines(&content);
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

fn parse_lines(content: &str) -> Vec<SecretWord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            match SecretWord::new(trimmed) {
                Ok(word) => Some(word),
                Err(e) => {
                    warn!(line = index + 1, entry = trimmed, error = %e, "skipping word list entry");
                    None
                }
            }
        })
        .collect()
}

/// Convert embedded string slice to `SecretWord` vector
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
/// use hangman::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<SecretWord> {
    slice
        .iter()
        .filter_map(|&s| SecretWord::new(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["react", "API", "Json"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "REACT");
        assert_eq!(words[1].text(), "API");
        assert_eq!(words[2].text(), "JSON");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["REACT", "NEXT.JS", "", "C++", "CSS"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "REACT");
        assert_eq!(words[1].text(), "CSS");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn parse_lines_skips_blanks_comments_and_invalid() {
        let content = "# languages\nrust\n\n  go  \nc#\nzig\n";
        let words = parse_lines(content);

        let texts: Vec<&str> = words.iter().map(SecretWord::text).collect();
        assert_eq!(texts, ["RUST", "GO", "ZIG"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        let result = load_from_file("definitely/not/a/real/word/list.txt");
        assert!(result.is_err());
    }

    #[test]
    fn load_from_written_file() {
        let path = std::env::temp_dir().join(format!("hangman-words-{}.txt", std::process::id()));
        fs::write(&path, "alpha\nbeta\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "BETA");
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
