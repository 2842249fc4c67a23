//! Post-OCR text cleanup.

/// Strip recognized text down to the allowed character set: ASCII letters,
/// digits, `-` `/` `.` `,` `;` `:` `'` and whitespace.
///
/// This is a lossy, irreversible transform; non-Latin scripts are destroyed.
/// Known limitation: downstream translation depends on readable Latin source
/// text and the provider's own language detection, so anything OCR produces
/// outside this set is treated as noise.
pub fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| {
            c.is_ascii_alphanumeric()
                || c.is_whitespace()
                || matches!(c, '-' | '/' | '.' | ',' | ';' | ':' | '\'')
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_allowed_punctuation_and_alphanumerics() {
        assert_eq!(clean("a-b/c.d,e;f:g'h 1"), "a-b/c.d,e;f:g'h 1");
    }

    #[test]
    fn strips_non_ascii_letters_and_symbols() {
        assert_eq!(clean("Hello, Wörld! 123"), "Hello, Wrld 123");
        assert_eq!(clean("€$%&*()[]{}"), "");
    }

    #[test]
    fn preserves_newlines_between_pages() {
        assert_eq!(clean("page one\npage two"), "page one\npage two");
    }

    #[test]
    fn is_idempotent() {
        for input in ["Hello, Wörld! 123", "", "über-straße", "plain text."] {
            let once = clean(input);
            assert_eq!(clean(&once), once);
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean(""), "");
    }
}
