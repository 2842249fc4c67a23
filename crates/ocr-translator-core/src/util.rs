//! Utility functions shared across the crate.

use std::path::PathBuf;

/// Get the user's data directory following XDG conventions.
///
/// Returns `$XDG_DATA_HOME` if set, otherwise `$HOME/.local/share`.
pub fn data_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
}

/// Default per-user profile directory for preferences and credentials.
pub fn profile_dir() -> PathBuf {
    data_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("ocr-translator")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_dir_ends_with_app_name() {
        assert!(profile_dir().ends_with("ocr-translator"));
    }
}
