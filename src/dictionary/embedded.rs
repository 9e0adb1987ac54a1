//! Embedded curation lists
//!
//! Whitelists, the abbreviation set and the seed fallback, compiled into
//! the binary at build time.

// Include generated lists from build script
include!(concat!(env!("OUT_DIR"), "/two_letter.rs"));
include!(concat!(env!("OUT_DIR"), "/three_letter.rs"));
include!(concat!(env!("OUT_DIR"), "/seed.rs"));
include!(concat!(env!("OUT_DIR"), "/abbreviations.rs"));
