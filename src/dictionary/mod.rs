//! Dictionary curation and storage
//!
//! Raw word lists go in, one immutable curated dictionary comes out. The
//! curator absorbs every load failure; the scorer consults the dictionary's
//! health flag instead of handling errors.

mod cache;
mod curated;
mod curator;
mod embedded;
pub mod source;

pub use cache::DictionaryCache;
pub use curated::{Dictionary, MIN_TRUSTED_SIZE};
pub use curator::{CurationReport, Curator, RejectReason, RejectionTally, SourceOutcome};
pub use embedded::{
    BLOCKED_ABBREVIATIONS, BLOCKED_ABBREVIATIONS_COUNT, SEED_WORDS, SEED_WORDS_COUNT,
    THREE_LETTER_WORDS, THREE_LETTER_WORDS_COUNT, TWO_LETTER_WORDS, TWO_LETTER_WORDS_COUNT,
};
pub use source::{FileSource, StaticSource, WordSource};
