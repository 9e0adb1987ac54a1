//! Dictionary curation
//!
//! Turns noisy raw word lists into one bounded, trustworthy dictionary.
//! Curation never fails: unreadable sources are skipped, and if nothing
//! loads at all the embedded seed list keeps the game playable (marked
//! unhealthy so the scorer knows not to trust it).

use super::curated::Dictionary;
use super::embedded::{BLOCKED_ABBREVIATIONS, SEED_WORDS, THREE_LETTER_WORDS, TWO_LETTER_WORDS};
use super::source::WordSource;
use rustc_hash::FxHashSet;

/// Shortest word the curator will consider
pub const MIN_WORD_LEN: usize = 2;
/// Longest word the curator will consider
pub const MAX_WORD_LEN: usize = 24;

/// Suffix patterns that mark scraped company names
///
/// Matched with `ends_with`, so ZINC is known collateral; the allow-list
/// is the escape hatch for any word a deployment wants back.
const CORPORATE_SUFFIXES: [&str; 5] = ["INC", "LLC", "CORP", "LTD", "PLC"];

/// Letter pairs that almost never occur doubled in English
const RARE_DOUBLES: [&str; 3] = ["QQ", "XX", "JJ"];

/// Why the curator rejected a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Not `[A-Z]{2,24}` after normalization
    Malformed,
    Blocked,
    Abbreviation,
    CorporateSuffix,
    Junk,
    /// Two letters but not in the two-letter whitelist
    UnlistedTwoLetter,
    /// Three letters, unlisted, and no vowel to vouch for it
    NoVowel,
}

/// Rejection counts by reason, for the curation report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionTally {
    pub malformed: usize,
    pub blocked: usize,
    pub abbreviation: usize,
    pub corporate_suffix: usize,
    pub junk: usize,
    pub unlisted_two_letter: usize,
    pub no_vowel: usize,
}

impl RejectionTally {
    fn bump(&mut self, reason: RejectReason) {
        match reason {
            RejectReason::Malformed => self.malformed += 1,
            RejectReason::Blocked => self.blocked += 1,
            RejectReason::Abbreviation => self.abbreviation += 1,
            RejectReason::CorporateSuffix => self.corporate_suffix += 1,
            RejectReason::Junk => self.junk += 1,
            RejectReason::UnlistedTwoLetter => self.unlisted_two_letter += 1,
            RejectReason::NoVowel => self.no_vowel += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.malformed
            + self.blocked
            + self.abbreviation
            + self.corporate_suffix
            + self.junk
            + self.unlisted_two_letter
            + self.no_vowel
    }
}

/// How one source fared during curation
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    pub label: String,
    /// Usable (non-empty) lines contributed
    pub lines: usize,
    /// Load error, if the source could not be read
    pub error: Option<String>,
}

/// What happened during one curation run
#[derive(Debug, Clone, Default)]
pub struct CurationReport {
    pub sources: Vec<SourceOutcome>,
    /// Candidates judged, duplicates included
    pub candidates: usize,
    pub accepted: usize,
    pub rejections: RejectionTally,
    /// Two-letter whitelist entries added beyond the judged stream
    pub whitelist_injected: usize,
    pub used_seed_fallback: bool,
}

/// Filters raw word lists into a curated dictionary
///
/// Holds the operator-supplied allow/block lists alongside the embedded
/// whitelists and abbreviation set. Stateless across runs; `curate` may be
/// called any number of times.
#[derive(Debug, Clone)]
pub struct Curator {
    allow: FxHashSet<String>,
    block: FxHashSet<String>,
    two_letter: FxHashSet<&'static str>,
    three_letter: FxHashSet<&'static str>,
    abbreviations: FxHashSet<&'static str>,
}

impl Curator {
    /// Build a curator with the given allow and block lists
    ///
    /// Entries are trimmed and uppercased. The block-list always wins over
    /// the allow-list, so an operator can kill a word no matter where it
    /// comes from.
    pub fn new<A, B, S, T>(allow: A, block: B) -> Self
    where
        A: IntoIterator<Item = S>,
        S: AsRef<str>,
        B: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let normalize = |w: &str| w.trim().to_ascii_uppercase();
        Self {
            allow: allow
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
            block: block
                .into_iter()
                .map(|w| normalize(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect(),
            two_letter: TWO_LETTER_WORDS.iter().copied().collect(),
            three_letter: THREE_LETTER_WORDS.iter().copied().collect(),
            abbreviations: BLOCKED_ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Curate the given sources into a dictionary
    ///
    /// Never fails: unreadable sources are treated as empty, and if no
    /// source yields any usable line the embedded seed list is curated
    /// instead and the result marked unhealthy.
    #[must_use]
    pub fn curate(&self, sources: &[Box<dyn WordSource>]) -> Dictionary {
        self.curate_with_report(sources).0
    }

    /// Curate and also report what happened
    #[must_use]
    pub fn curate_with_report(
        &self,
        sources: &[Box<dyn WordSource>],
    ) -> (Dictionary, CurationReport) {
        let mut report = CurationReport::default();
        let mut raw_lines: Vec<String> = Vec::new();

        for source in sources {
            match source.load() {
                Ok(text) => {
                    let before = raw_lines.len();
                    raw_lines.extend(
                        text.lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_string),
                    );
                    report.sources.push(SourceOutcome {
                        label: source.label(),
                        lines: raw_lines.len() - before,
                        error: None,
                    });
                }
                Err(err) => report.sources.push(SourceOutcome {
                    label: source.label(),
                    lines: 0,
                    error: Some(err.to_string()),
                }),
            }
        }

        report.used_seed_fallback = raw_lines.is_empty();
        if report.used_seed_fallback {
            raw_lines.extend(SEED_WORDS.iter().map(|w| (*w).to_string()));
        }

        let mut accepted: FxHashSet<String> = FxHashSet::default();
        let candidates = raw_lines
            .iter()
            .map(|line| line.to_ascii_uppercase())
            .chain(self.allow.iter().cloned());

        for candidate in candidates {
            report.candidates += 1;
            match self.judge(&candidate) {
                None => {
                    report.accepted += 1;
                    accepted.insert(candidate);
                }
                Some(reason) => report.rejections.bump(reason),
            }
        }

        // Coverage guarantee: common two-letter words are always playable,
        // whatever the sources contained. Block still wins.
        for &word in &self.two_letter {
            if !self.block.contains(word) && accepted.insert(word.to_string()) {
                report.whitelist_injected += 1;
            }
        }

        let mut dictionary = Dictionary::from_words(accepted);
        if report.used_seed_fallback {
            dictionary.mark_unhealthy();
        }
        (dictionary, report)
    }

    /// Judge one normalized candidate; `None` means accepted
    fn judge(&self, word: &str) -> Option<RejectReason> {
        if !is_well_formed(word) {
            return Some(RejectReason::Malformed);
        }
        if self.block.contains(word) {
            return Some(RejectReason::Blocked);
        }
        if self.allow.contains(word) {
            return None;
        }
        if self.abbreviations.contains(word) {
            return Some(RejectReason::Abbreviation);
        }
        if CORPORATE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return Some(RejectReason::CorporateSuffix);
        }
        if is_junk(word) {
            return Some(RejectReason::Junk);
        }
        match word.len() {
            2 => {
                if self.two_letter.contains(word) {
                    None
                } else {
                    Some(RejectReason::UnlistedTwoLetter)
                }
            }
            3 => {
                if self.three_letter.contains(word) || contains_vowel(word) {
                    None
                } else {
                    Some(RejectReason::NoVowel)
                }
            }
            _ => {
                // A vowelless word this long always has a 4-consonant run,
                // so the junk check above has already caught it.
                None
            }
        }
    }
}

impl Default for Curator {
    fn default() -> Self {
        Self::new(std::iter::empty::<&str>(), std::iter::empty::<&str>())
    }
}

/// Y counts: it carries the vowel sound in words like RHYTHM
const fn is_vowel(b: u8) -> bool {
    matches!(b, b'A' | b'E' | b'I' | b'O' | b'U' | b'Y')
}

fn contains_vowel(word: &str) -> bool {
    word.bytes().any(is_vowel)
}

fn is_well_formed(word: &str) -> bool {
    word.len() >= MIN_WORD_LEN
        && word.len() <= MAX_WORD_LEN
        && word.bytes().all(|b| b.is_ascii_uppercase())
}

fn is_junk(word: &str) -> bool {
    has_consonant_run(word, 4)
        || RARE_DOUBLES.iter().any(|pair| word.contains(pair))
        || has_identical_run(word, 3)
}

fn has_consonant_run(word: &str, limit: usize) -> bool {
    let mut run = 0;
    for b in word.bytes() {
        if is_vowel(b) {
            run = 0;
        } else {
            run += 1;
            if run >= limit {
                return true;
            }
        }
    }
    false
}

fn has_identical_run(word: &str, limit: usize) -> bool {
    word.as_bytes().windows(limit).any(|w| w.iter().all(|&b| b == w[0]))
}
