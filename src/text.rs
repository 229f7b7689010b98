//! Text standardization shared by the matcher and its callers
//!
//! Queries and stored text must standardize identically, or the mask
//! table gets compiled against characters the scan never sees. The
//! matcher runs every input through [`standardize`] before compiling,
//! which is what makes it case- and accent-agnostic by construction.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Standardize text for matching.
///
/// - NFKD decomposition, then combining marks dropped (accent folding)
/// - lowercased with full mappings
/// - whitespace runs collapsed to a single ASCII space, ends trimmed
pub fn standardize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.nfkd().filter(|c| !is_combining_mark(*c)) {
        if c.is_whitespace() {
            // only flush a separator once a non-space character follows
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for lower in c.to_lowercase() {
            out.push(lower);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(standardize("Hello WORLD"), "hello world");
    }

    #[test]
    fn test_strips_accents() {
        assert_eq!(standardize("Café"), "cafe");
        // precomposed and combining forms standardize the same
        assert_eq!(standardize("re\u{0301}sume\u{0301}"), standardize("résumé"));
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(standardize("  a \t b\n\nc  "), "a b c");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(standardize(""), "");
        assert_eq!(standardize("   \t\n"), "");
    }

    #[test]
    fn test_idempotent() {
        for s in ["MiXeD CaSe", " héllo   wörld ", "plain", ""] {
            let once = standardize(s);
            assert_eq!(standardize(&once), once);
        }
    }

    #[test]
    fn test_compatibility_forms() {
        // NFKD maps the ligature to its letters
        assert_eq!(standardize("ﬁle"), "file");
    }
}
