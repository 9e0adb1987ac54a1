//! Process-lifetime dictionary cache
//!
//! Curation reads sources, so it runs once: the first caller pays for the
//! load, concurrent callers block on the same initialization and share the
//! result. Owned by the composition root and passed down by reference, not
//! a global.

use super::curated::Dictionary;
use super::curator::Curator;
use super::source::WordSource;
use std::sync::OnceLock;

/// Lazily curates once and hands out the shared result
pub struct DictionaryCache {
    curator: Curator,
    sources: Vec<Box<dyn WordSource>>,
    slot: OnceLock<Dictionary>,
}

impl DictionaryCache {
    #[must_use]
    pub fn new(curator: Curator, sources: Vec<Box<dyn WordSource>>) -> Self {
        Self {
            curator,
            sources,
            slot: OnceLock::new(),
        }
    }

    /// The curated dictionary, loading it on first call
    ///
    /// Safe to call from any number of threads; exactly one curation run
    /// happens and everyone gets a reference to the same dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        self.slot.get_or_init(|| self.curator.curate(&self.sources))
    }

    /// Whether curation has already run
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.slot.get().is_some()
    }

    #[must_use]
    pub fn curator(&self) -> &Curator {
        &self.curator
    }

    #[must_use]
    pub fn sources(&self) -> &[Box<dyn WordSource>] {
        &self.sources
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::source::StaticSource;
    use std::io;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingSource {
        loads: Arc<AtomicUsize>,
    }

    impl WordSource for CountingSource {
        fn label(&self) -> String {
            "counting".to_string()
        }

        fn load(&self) -> io::Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok("APPLE\nBANANA\nCHERRY".to_string())
        }
    }

    #[test]
    fn loads_lazily() {
        let cache = DictionaryCache::new(Curator::default(), Vec::new());
        assert!(!cache.is_loaded());
        let _ = cache.dictionary();
        assert!(cache.is_loaded());
    }

    #[test]
    fn repeated_calls_share_one_dictionary() {
        let loads = Arc::new(AtomicUsize::new(0));
        let cache = DictionaryCache::new(
            Curator::default(),
            vec![Box::new(CountingSource {
                loads: Arc::clone(&loads),
            })],
        );

        let first = cache.dictionary();
        let second = cache.dictionary();
        assert!(std::ptr::eq(first, second));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn concurrent_callers_trigger_one_load() {
        let loads = Arc::new(AtomicUsize::new(0));
        let cache = DictionaryCache::new(
            Curator::default(),
            vec![Box::new(CountingSource {
                loads: Arc::clone(&loads),
            })],
        );

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let dictionary = cache.dictionary();
                    assert!(dictionary.contains("APPLE"));
                });
            }
        });

        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cache_result_matches_direct_curation() {
        let source = StaticSource::from_words("pair", &["APPLE", "BANANA"]);
        let cache = DictionaryCache::new(Curator::default(), vec![Box::new(source.clone())]);

        let direct: Vec<Box<dyn WordSource>> = vec![Box::new(source)];
        let expected = Curator::default().curate(&direct);

        assert_eq!(cache.dictionary().len(), expected.len());
        assert_eq!(cache.dictionary().healthy(), expected.healthy());
    }
}
