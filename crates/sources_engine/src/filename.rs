use sha2::{Digest, Sha256};

const MAX_STEM_LEN: usize = 64;

/// Filesystem-safe, deterministic file name for a storage key:
/// `{sanitized_key}--{short_hash(key)}.json`.
///
/// The hash keeps keys that sanitize to the same stem apart.
pub fn key_filename(key: &str) -> String {
    format!("{}--{}.json", sanitize_key(key), short_hash(key))
}

fn sanitize_key(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    let mut prev_underscore = false;
    for c in key.chars() {
        let c = if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
            c
        } else {
            '_'
        };
        if c == '_' && prev_underscore {
            continue;
        }
        prev_underscore = c == '_';
        stem.push(c);
    }
    let mut stem = stem.trim_matches(['_', '.']).to_string();
    if stem.is_empty() {
        stem.push_str("store");
    }
    stem.truncate(MAX_STEM_LEN);
    stem
}

fn short_hash(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::key_filename;

    #[test]
    fn filename_is_deterministic_and_safe() {
        let name = key_filename("suna_sources_data_../../etc");
        assert!(name.starts_with("suna_sources_data_"));
        assert!(!name.contains('/'));
        assert!(name.ends_with(".json"));
        assert_eq!(name, key_filename("suna_sources_data_../../etc"));
    }

    #[test]
    fn colliding_stems_get_distinct_hashes() {
        assert_ne!(key_filename("a/b"), key_filename("a:b"));
    }

    #[test]
    fn empty_key_still_has_a_stem() {
        assert!(key_filename("").starts_with("store--"));
    }
}
