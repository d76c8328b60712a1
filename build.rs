//! Build script to embed the default vocabulary
//!
//! Turns `data/words.txt` (one word per line) into `OUT_DIR/words.rs`.

use std::env;
use std::fs;
use std::path::Path;

const SOURCE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let dest = Path::new(&out_dir).join("words.rs");

    let content =
        fs::read_to_string(SOURCE).unwrap_or_else(|e| panic!("Failed to read {SOURCE}: {e}"));
    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let entries: String = words.iter().map(|word| format!("    {word:?},\n")).collect();
    let source = format!(
        "/// Default Boggle vocabulary ({count} words)\n\
         pub const WORDS: &[&str] = &[\n{entries}];\n\n\
         /// Number of words in [`WORDS`]\n\
         pub const WORDS_COUNT: usize = {count};\n",
        count = words.len(),
    );

    fs::write(&dest, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", dest.display()));

    println!("cargo:rerun-if-changed={SOURCE}");
}
