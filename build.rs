//! Build script to generate embedded curation lists
//!
//! Reads the word list files under data/ and generates Rust source with
//! const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/two_letter.txt",
        &Path::new(&out_dir).join("two_letter.rs"),
        "TWO_LETTER_WORDS",
        "Common two-letter words, always playable",
    );

    generate_word_list(
        "data/three_letter.txt",
        &Path::new(&out_dir).join("three_letter.rs"),
        "THREE_LETTER_WORDS",
        "Curated three-letter words accepted without the vowel check",
    );

    generate_word_list(
        "data/seed.txt",
        &Path::new(&out_dir).join("seed.rs"),
        "SEED_WORDS",
        "Fallback word list used when no source loads",
    );

    generate_word_list(
        "data/abbreviations.txt",
        &Path::new(&out_dir).join("abbreviations.rs"),
        "BLOCKED_ABBREVIATIONS",
        "Abbreviations and acronyms the curator rejects",
    );

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed=data/two_letter.txt");
    println!("cargo:rerun-if-changed=data/three_letter.txt");
    println!("cargo:rerun-if-changed=data/seed.txt");
    println!("cargo:rerun-if-changed=data/abbreviations.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
