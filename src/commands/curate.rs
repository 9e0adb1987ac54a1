//! Curation inspection command
//!
//! Runs the curator over the configured sources and packages the report
//! with a sample of the resulting dictionary.

use crate::dictionary::{CurationReport, Curator, WordSource};

/// Curation outcome plus a peek at the dictionary
pub struct CurateSummary {
    pub report: CurationReport,
    pub dictionary_size: usize,
    pub healthy: bool,
    /// Alphabetical sample of curated words
    pub sample: Vec<String>,
}

/// Curate and summarize for display
#[must_use]
pub fn run_curate(
    curator: &Curator,
    sources: &[Box<dyn WordSource>],
    sample_size: usize,
) -> CurateSummary {
    let (dictionary, report) = curator.curate_with_report(sources);

    let mut sample: Vec<String> = dictionary.iter().map(str::to_string).collect();
    sample.sort_unstable();
    sample.truncate(sample_size);

    CurateSummary {
        report,
        dictionary_size: dictionary.len(),
        healthy: dictionary.healthy(),
        sample,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::StaticSource;

    fn sources(words: &[&str]) -> Vec<Box<dyn WordSource>> {
        vec![Box::new(StaticSource::from_words("test", words))]
    }

    #[test]
    fn summary_reflects_dictionary() {
        let summary = run_curate(&Curator::default(), &sources(&["APPLE", "BANANA"]), 10);

        assert!(!summary.report.used_seed_fallback);
        assert_eq!(summary.sample.len(), 10);
        assert!(summary.dictionary_size > 2); // whitelist injection
    }

    #[test]
    fn sample_is_sorted_and_bounded() {
        let summary = run_curate(&Curator::default(), &sources(&["CHERRY", "APPLE"]), 5);

        assert!(summary.sample.len() <= 5);
        let mut sorted = summary.sample.clone();
        sorted.sort_unstable();
        assert_eq!(summary.sample, sorted);
    }

    #[test]
    fn fallback_summary_is_marked_unhealthy() {
        let summary = run_curate(&Curator::default(), &[], 3);

        assert!(summary.report.used_seed_fallback);
        assert!(!summary.healthy);
        assert!(summary.dictionary_size > 0);
    }
}
