//! Build script to generate the embedded word bank
//!
//! Reads one word list per difficulty tier and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

/// (file stem, const name, description)
const TIERS: &[(&str, &str, &str)] = &[
    ("beginner", "BEGINNER", "Beginner tier: four-letter words"),
    ("intermediate", "INTERMEDIATE", "Intermediate tier: five-letter words"),
    ("advanced", "ADVANCED", "Advanced tier: seven-letter words"),
    ("expert", "EXPERT", "Expert tier: seven-letter words"),
    ("master", "MASTER", "Master tier: eight-letter words"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("word_bank.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word bank").unwrap();
    writeln!(output).unwrap();

    for &(stem, const_name, doc_comment) in TIERS {
        let input_path = format!("data/tiers/{stem}.txt");
        let words = read_tier(&input_path);

        writeln!(output, "/// {doc_comment} ({} words)", words.len()).unwrap();
        writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();
        for word in &words {
            writeln!(output, "    \"{word}\",").unwrap();
        }
        writeln!(output, "];").unwrap();
        writeln!(output).unwrap();

        println!("cargo:rerun-if-changed={input_path}");
    }
}

/// Read a tier file, rejecting lists the game could never lay out
fn read_tier(input_path: &str) -> Vec<String> {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_uppercase)
        .collect();

    assert!(!words.is_empty(), "{input_path} has no words");

    let length = words[0].len();
    for word in &words {
        assert!(
            word.chars().all(|c| c.is_ascii_uppercase()),
            "{input_path}: '{word}' must contain only ASCII letters"
        );
        assert!(
            word.len() == length,
            "{input_path}: '{word}' is not {length} letters long"
        );
    }

    words
}
