//! The curated dictionary
//!
//! An immutable uppercase word set plus a health flag. The flag tells the
//! scorer whether the set is large enough to trust for filtering; it is
//! data, not an error, so a bad load can never take the game down.

use rustc_hash::FxHashSet;

/// Entry count a curated set must exceed to be trusted for filtering
///
/// Sits comfortably above the injected two-letter whitelist floor, so a
/// dictionary built from nothing but the coverage guarantee still reads as
/// unhealthy.
pub const MIN_TRUSTED_SIZE: usize = 150;

/// Immutable word set with a trust flag
///
/// Built once by the curator (or by a caller with its own list), then shared
/// freely: lookups take `&self` and never mutate.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
    healthy: bool,
}

impl Dictionary {
    /// Build a dictionary, deriving health from its size
    ///
    /// Words are trimmed and uppercased. Health is purely a size check
    /// here; the curator overrides it when the seed fallback was used.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: FxHashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_ascii_uppercase())
            .filter(|w| !w.is_empty())
            .collect();
        let healthy = words.len() > MIN_TRUSTED_SIZE;
        Self { words, healthy }
    }

    /// Build a caller-vouched healthy dictionary
    ///
    /// For game setups that bring their own list and want filtering against
    /// it regardless of size.
    ///
    /// # Examples
    /// ```
    /// use wordgrid::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::trusted(["CAT", "AT"]);
    /// assert!(dictionary.healthy());
    /// assert!(dictionary.contains("cat"));
    /// ```
    pub fn trusted<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::from_words(words);
        dictionary.healthy = true;
        dictionary
    }

    /// Mark this dictionary as too small or too degraded to trust
    pub(crate) fn mark_unhealthy(&mut self) {
        self.healthy = false;
    }

    /// Whether the scorer should trust dictionary filtering
    #[must_use]
    #[inline]
    pub const fn healthy(&self) -> bool {
        self.healthy
    }

    /// Case-normalized membership test
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().all(|b| b.is_ascii_uppercase()) {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_ascii_uppercase())
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
