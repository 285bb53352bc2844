//! Word list loading utilities
//!
//! Provides functions to load the dictionary from a file or fall back to the
//! embedded default list.

use super::{DEFAULT_WORDS, WordList};
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file
///
/// Lines are trimmed and lowercased. Empty lines, multi-word lines and words longer
/// than eight characters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use word_chain::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content))
}

/// Parse newline-delimited words into a dictionary
#[must_use]
pub fn parse_words(content: &str) -> WordList {
    WordList::new(content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    }))
}

/// The embedded fallback dictionary
#[must_use]
pub fn default_words() -> WordList {
    WordList::from_strs(DEFAULT_WORDS)
}

/// Load the dictionary from `path`, falling back to the embedded default list
///
/// The fallback is used when no path is given, when the file cannot be read, or
/// when it contains no usable words.
pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> WordList {
    let Some(path) = path else {
        info!("No dictionary file configured, using built-in word list");
        return default_words();
    };
    let path = path.as_ref();

    match load_from_file(path) {
        Ok(list) if !list.is_empty() => {
            info!("Loaded {} words from {}", list.len(), path.display());
            list
        }
        Ok(_) => {
            warn!(
                "Dictionary {} has no usable words, using built-in word list",
                path.display()
            );
            default_words()
        }
        Err(e) => {
            warn!(
                "Could not read dictionary {}: {e}; using built-in word list",
                path.display()
            );
            default_words()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::DEFAULT_WORDS_COUNT;

    #[test]
    fn parse_words_normalizes_lines() {
        let list = parse_words("Start\n  tar \n\nrats\r\nice cream\n");
        let texts: Vec<&str> = list.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["start", "tar", "rats"]);
    }

    #[test]
    fn parse_words_skips_long_words() {
        let list = parse_words("absolute\nabsolutely\n");
        assert_eq!(list.len(), 1);
        assert!(list.contains("absolute"));
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").is_empty());
    }

    #[test]
    fn default_words_loads_all_embedded() {
        assert_eq!(default_words().len(), DEFAULT_WORDS_COUNT);
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let list = load_or_default(Some("/definitely/not/here/dictionary.txt"));
        assert_eq!(list.len(), DEFAULT_WORDS_COUNT);
        assert!(list.contains("puzzle"));
    }

    #[test]
    fn no_path_uses_default() {
        let list = load_or_default(None::<&str>);
        assert!(list.contains("letter"));
    }

    #[test]
    fn loads_from_real_file() {
        let path = std::env::temp_dir().join(format!("word_chain_dict_{}.txt", std::process::id()));
        fs::write(&path, "listen\nsilent\nline\n").unwrap();

        let list = load_or_default(Some(&path));
        fs::remove_file(&path).ok();

        assert_eq!(list.len(), 3);
        assert!(list.contains("silent"));
        assert!(!list.contains("puzzle"));
    }
}
