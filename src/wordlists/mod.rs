//! Dictionaries for word ladders
//!
//! Provides the embedded word list and the file loader.

mod embedded;
pub mod loader;

pub use embedded::{EMBEDDED, EMBEDDED_COUNT};
pub use loader::{Dictionary, load_from_file};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_count_matches_const() {
        assert_eq!(EMBEDDED.len(), EMBEDDED_COUNT);
    }

    #[test]
    fn embedded_words_are_lowercase_letters() {
        for &word in EMBEDDED {
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = EMBEDDED.iter().collect();
        assert_eq!(unique.len(), EMBEDDED.len());
    }
}
