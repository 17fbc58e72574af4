//! Text file reading with legacy-encoding fallback.
//!
//! OCR output in the corpus is not reliably UTF-8: some upstream tools emit
//! Windows-1251, and the occasional file is plain Latin-1. Decoding tries a
//! fixed ordered codec list and the first clean decode wins.

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_8, WINDOWS_1251, WINDOWS_1252};

/// Candidate codecs, tried in order. UTF-8 first so well-formed modern
/// output never round-trips through a legacy table; WINDOWS_1252 covers the
/// ISO-8859-1 label and accepts any byte sequence, so it is the tolerant
/// tail of the chain.
fn candidate_codecs() -> [&'static Encoding; 3] {
    [UTF_8, WINDOWS_1251, WINDOWS_1252]
}

/// Decode bytes with the first codec that produces no replacement errors.
fn decode_first_clean(bytes: &[u8], codecs: &[&'static Encoding]) -> Option<String> {
    for codec in codecs {
        let (text, _, had_errors) = codec.decode(bytes);
        if !had_errors {
            return Some(text.into_owned());
        }
    }
    None
}

/// Read a text file, tolerating unknown encodings.
///
/// Returns an empty string when the file cannot be read or no candidate
/// codec decodes it cleanly. A garbled or unreadable document is classified
/// as non-matching rather than aborting the run.
pub fn read_text_lossy(path: &Path) -> String {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read text file");
            return String::new();
        }
    };
    decode_first_clean(&bytes, &candidate_codecs()).unwrap_or_default()
}
