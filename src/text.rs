// src/text.rs

//! String helpers for search boxes and throwaway identifiers.

use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::RngCore;
use regex::RegexBuilder;

/// Filter `haystack` down to entries fuzzily matching `query`: every
/// whitespace-separated fragment of the query must appear in the entry, in
/// order, case-insensitively. A blank query keeps everything.
pub fn fuzzy_filter<S: AsRef<str>>(query: &str, haystack: &[S]) -> Vec<String> {
    let query = query.trim();
    if query.is_empty() {
        return haystack.iter().map(|s| s.as_ref().to_string()).collect();
    }

    let fragments: Vec<String> = query.split_whitespace().map(regex::escape).collect();
    let pattern = format!(".*{}.*", fragments.join(".*"));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("escaped pattern should compile");

    haystack
        .iter()
        .map(|s| s.as_ref())
        .filter(|s| re.is_match(s))
        .map(str::to_string)
        .collect()
}

/// A random 16-byte token in URL-safe base64. Handy for throwaway file
/// names and cache-busting query params.
pub fn random_token() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE.encode(bytes)
}
