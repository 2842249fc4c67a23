//! Host locale detection and normalization.
//!
//! Detection runs exactly one OS-specific probe and treats every failure as
//! "unknown"; callers handle `None` the same way as an unrecognized locale.

/// Probe the host operating system for its preferred locale.
///
/// - macOS: first entry of `defaults read -g AppleLanguages`
/// - Linux: `$LANG` with the encoding suffix stripped (`de_DE.UTF-8` → `de_DE`)
/// - anything else: `None`
///
/// Never panics; a failed probe yields `None`.
pub fn detect() -> Option<String> {
    detect_impl()
}

#[cfg(target_os = "macos")]
fn detect_impl() -> Option<String> {
    let output = std::process::Command::new("defaults")
        .args(["read", "-g", "AppleLanguages"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let listing = String::from_utf8(output.stdout).ok()?;
    // Output looks like: (\n    "en-US",\n    "de-DE"\n)
    parse_apple_languages(&listing)
}

#[cfg(target_os = "linux")]
fn detect_impl() -> Option<String> {
    let lang = std::env::var("LANG").ok()?;
    let trimmed = lang.split('.').next().unwrap_or("").trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn detect_impl() -> Option<String> {
    None
}

#[cfg(any(target_os = "macos", test))]
fn parse_apple_languages(listing: &str) -> Option<String> {
    let first = listing
        .trim()
        .trim_start_matches('(')
        .trim_end_matches(')')
        .split(',')
        .next()?
        .trim()
        .trim_matches('"');
    if first.is_empty() {
        None
    } else {
        Some(first.to_string())
    }
}

/// Fixed code-to-name table for the locales the catalogs can display.
const KNOWN_LOCALES: [(&str, &str); 7] = [
    ("en", "English"),
    ("de", "German"),
    ("fr", "French"),
    ("it", "Italian"),
    ("es", "Spanish"),
    ("uk", "Ukrainian"),
    ("ru", "Russian"),
];

/// Normalize a raw locale string into a `(code, name)` pair.
///
/// Splits on the first `-` or `_`, lowercases the language segment, and maps
/// it through the fixed table above. Unknown codes and absent input both
/// yield `("en", "English")`. Pure and total; never fails.
pub fn normalize(raw: Option<&str>) -> (String, String) {
    let code = raw
        .map(|s| {
            s.split(['-', '_'])
                .next()
                .unwrap_or("")
                .to_ascii_lowercase()
        })
        .unwrap_or_default();

    KNOWN_LOCALES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or_else(
            || ("en".to_string(), "English".to_string()),
            |(c, n)| ((*c).to_string(), (*n).to_string()),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_splits_on_dash_and_underscore() {
        assert_eq!(normalize(Some("de-DE")), ("de".into(), "German".into()));
        assert_eq!(normalize(Some("fr_FR")), ("fr".into(), "French".into()));
        assert_eq!(normalize(Some("uk")), ("uk".into(), "Ukrainian".into()));
    }

    #[test]
    fn normalize_lowercases_the_language_segment() {
        assert_eq!(normalize(Some("DE_de")), ("de".into(), "German".into()));
    }

    #[test]
    fn normalize_is_total() {
        for input in [
            None,
            Some(""),
            Some("-"),
            Some("_"),
            Some("zz-ZZ"),
            Some("C"),
            Some("no_separator"),
            Some("日本語"),
        ] {
            let (code, name) = normalize(input);
            assert!(!code.is_empty());
            assert!(!name.is_empty());
        }
    }

    #[test]
    fn normalize_unknown_defaults_to_english() {
        assert_eq!(normalize(Some("ja-JP")), ("en".into(), "English".into()));
        assert_eq!(normalize(None), ("en".into(), "English".into()));
    }

    #[test]
    fn apple_languages_listing_parses_first_entry() {
        let listing = "(\n    \"en-US\",\n    \"de-DE\"\n)\n";
        assert_eq!(parse_apple_languages(listing), Some("en-US".to_string()));
        assert_eq!(parse_apple_languages("()"), None);
    }
}
