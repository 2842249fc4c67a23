//! Language catalogs: per-display-locale mappings from human-readable
//! language names to canonical translation codes.
//!
//! Codes follow ISO 639-1 with one regional variant: English targets `EN-US`.
//! Note that for Chinese the code `ZH` is used, which is a macro language
//! encompassing Mandarin, Cantonese, and other dialects. For Norwegian the
//! code `NO` is used, which does not distinguish between Bokmål and Nynorsk.

use serde::{Deserialize, Serialize};

/// Language codes following ISO 639-1 with regional variants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangCode(pub String);

impl LangCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LangCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LangCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LangCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Display locale used when nothing else is known.
pub const DEFAULT_DISPLAY_LOCALE: &str = "EN";

/// Canonical code of the default translation target.
pub const DEFAULT_TARGET_CODE: &str = "EN-US";

/// Display name of the default translation target in the default locale.
pub const DEFAULT_TARGET_NAME: &str = "English";

/// The canonical code set shared by every catalog. Only the display names
/// differ per locale; the codes are identical everywhere.
pub const CANONICAL_CODES: [&str; 29] = [
    "EN-US", "DE", "FR", "ES", "BG", "ZH", "CS", "DA", "NL", "ET", "FI", "EL", "HU", "ID", "IT",
    "JA", "KO", "LV", "LT", "NO", "PL", "PT", "RO", "RU", "SK", "SL", "SV", "TR", "UK",
];

/// One language entry in a catalog: display name plus canonical code.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// Language name in the catalog's display locale
    pub name: &'static str,
    /// Canonical translation code
    pub code: &'static str,
}

/// Name-to-code mapping for one display locale.
///
/// Catalogs are small (29 entries), so both lookup directions are linear
/// scans; no map structure is warranted. Codes are unique within a catalog,
/// so first-match and last-match policies coincide.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    /// Display-locale code this catalog renders names in
    pub locale: &'static str,
    entries: &'static [CatalogEntry],
}

impl Catalog {
    /// All entries in declaration order.
    pub const fn entries(&self) -> &'static [CatalogEntry] {
        self.entries
    }

    /// Display names in declaration order, for selection lists.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|e| e.name)
    }

    /// Canonical code for a display name, if the name exists in this catalog.
    pub fn code_for_name(&self, name: &str) -> Option<&'static str> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.code)
    }

    /// Display name for a canonical code.
    ///
    /// Absent codes fall back to this catalog's entry for the default
    /// translation target, so the result is always a name the catalog can
    /// show. Linear scan over the fixed entry table.
    pub fn name_for_code(&self, code: &str) -> &'static str {
        self.entries
            .iter()
            .find(|e| e.code.eq_ignore_ascii_case(code))
            .or_else(|| self.entries.iter().find(|e| e.code == DEFAULT_TARGET_CODE))
            .map_or(DEFAULT_TARGET_NAME, |e| e.name)
    }

    /// Whether the canonical code is a member of this catalog.
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.code.eq_ignore_ascii_case(code))
    }
}

macro_rules! entries {
    ($(($name:literal, $code:literal)),* $(,)?) => {
        &[$(CatalogEntry { name: $name, code: $code }),*]
    };
}

static EN_CATALOG: Catalog = Catalog {
    locale: "EN",
    entries: entries![
        ("English", "EN-US"),
        ("German", "DE"),
        ("French", "FR"),
        ("Spanish", "ES"),
        ("Bulgarian", "BG"),
        ("Chinese", "ZH"),
        ("Czech", "CS"),
        ("Danish", "DA"),
        ("Dutch", "NL"),
        ("Estonian", "ET"),
        ("Finnish", "FI"),
        ("Greek", "EL"),
        ("Hungarian", "HU"),
        ("Indonesian", "ID"),
        ("Italian", "IT"),
        ("Japanese", "JA"),
        ("Korean", "KO"),
        ("Latvian", "LV"),
        ("Lithuanian", "LT"),
        ("Norwegian", "NO"),
        ("Polish", "PL"),
        ("Portuguese", "PT"),
        ("Romanian", "RO"),
        ("Russian", "RU"),
        ("Slovak", "SK"),
        ("Slovenian", "SL"),
        ("Swedish", "SV"),
        ("Turkish", "TR"),
        ("Ukrainian", "UK"),
    ],
};

static DE_CATALOG: Catalog = Catalog {
    locale: "DE",
    entries: entries![
        ("Englisch", "EN-US"),
        ("Deutsch", "DE"),
        ("Französisch", "FR"),
        ("Spanisch", "ES"),
        ("Bulgarisch", "BG"),
        ("Chinesisch", "ZH"),
        ("Tschechisch", "CS"),
        ("Dänisch", "DA"),
        ("Niederländisch", "NL"),
        ("Estnisch", "ET"),
        ("Finnisch", "FI"),
        ("Griechisch", "EL"),
        ("Ungarisch", "HU"),
        ("Indonesisch", "ID"),
        ("Italienisch", "IT"),
        ("Japanisch", "JA"),
        ("Koreanisch", "KO"),
        ("Lettisch", "LV"),
        ("Litauisch", "LT"),
        ("Norwegisch", "NO"),
        ("Polnisch", "PL"),
        ("Portugiesisch", "PT"),
        ("Rumänisch", "RO"),
        ("Russisch", "RU"),
        ("Slowakisch", "SK"),
        ("Slowenisch", "SL"),
        ("Schwedisch", "SV"),
        ("Türkisch", "TR"),
        ("Ukrainisch", "UK"),
    ],
};

static FR_CATALOG: Catalog = Catalog {
    locale: "FR",
    entries: entries![
        ("Anglais", "EN-US"),
        ("Allemand", "DE"),
        ("Français", "FR"),
        ("Espagnol", "ES"),
        ("Bulgare", "BG"),
        ("Chinois", "ZH"),
        ("Tchèque", "CS"),
        ("Danois", "DA"),
        ("Néerlandais", "NL"),
        ("Estonien", "ET"),
        ("Finnois", "FI"),
        ("Grec", "EL"),
        ("Hongrois", "HU"),
        ("Indonésien", "ID"),
        ("Italien", "IT"),
        ("Japonais", "JA"),
        ("Coréen", "KO"),
        ("Letton", "LV"),
        ("Lituanien", "LT"),
        ("Norvégien", "NO"),
        ("Polonais", "PL"),
        ("Portugais", "PT"),
        ("Roumain", "RO"),
        ("Russe", "RU"),
        ("Slovaque", "SK"),
        ("Slovène", "SL"),
        ("Suédois", "SV"),
        ("Turc", "TR"),
        ("Ukrainien", "UK"),
    ],
};

static IT_CATALOG: Catalog = Catalog {
    locale: "IT",
    entries: entries![
        ("Inglese", "EN-US"),
        ("Tedesco", "DE"),
        ("Francese", "FR"),
        ("Spagnolo", "ES"),
        ("Bulgaro", "BG"),
        ("Cinese", "ZH"),
        ("Ceco", "CS"),
        ("Danese", "DA"),
        ("Olandese", "NL"),
        ("Estone", "ET"),
        ("Finlandese", "FI"),
        ("Greco", "EL"),
        ("Ungherese", "HU"),
        ("Indonesiano", "ID"),
        ("Italiano", "IT"),
        ("Giapponese", "JA"),
        ("Coreano", "KO"),
        ("Lettone", "LV"),
        ("Lituano", "LT"),
        ("Norvegese", "NO"),
        ("Polacco", "PL"),
        ("Portoghese", "PT"),
        ("Rumeno", "RO"),
        ("Russo", "RU"),
        ("Slovacco", "SK"),
        ("Sloveno", "SL"),
        ("Svedese", "SV"),
        ("Turco", "TR"),
        ("Ucraino", "UK"),
    ],
};

static ES_CATALOG: Catalog = Catalog {
    locale: "ES",
    entries: entries![
        ("Inglés", "EN-US"),
        ("Alemán", "DE"),
        ("Francés", "FR"),
        ("Español", "ES"),
        ("Búlgaro", "BG"),
        ("Chino", "ZH"),
        ("Checo", "CS"),
        ("Danés", "DA"),
        ("Holandés", "NL"),
        ("Estonio", "ET"),
        ("Finlandés", "FI"),
        ("Griego", "EL"),
        ("Húngaro", "HU"),
        ("Indonesio", "ID"),
        ("Italiano", "IT"),
        ("Japonés", "JA"),
        ("Coreano", "KO"),
        ("Letón", "LV"),
        ("Lituano", "LT"),
        ("Noruego", "NO"),
        ("Polaco", "PL"),
        ("Portugués", "PT"),
        ("Rumano", "RO"),
        ("Ruso", "RU"),
        ("Eslovaco", "SK"),
        ("Esloveno", "SL"),
        ("Sueco", "SV"),
        ("Turco", "TR"),
        ("Ucraniano", "UK"),
    ],
};

static UK_CATALOG: Catalog = Catalog {
    locale: "UK",
    entries: entries![
        ("Англійська", "EN-US"),
        ("Німецька", "DE"),
        ("Французька", "FR"),
        ("Іспанська", "ES"),
        ("Болгарська", "BG"),
        ("Китайська", "ZH"),
        ("Чеська", "CS"),
        ("Данська", "DA"),
        ("Голландська", "NL"),
        ("Естонська", "ET"),
        ("Фінська", "FI"),
        ("Грецька", "EL"),
        ("Угорська", "HU"),
        ("Індонезійська", "ID"),
        ("Італійська", "IT"),
        ("Японська", "JA"),
        ("Корейська", "KO"),
        ("Латвійська", "LV"),
        ("Литовська", "LT"),
        ("Норвезька", "NO"),
        ("Польська", "PL"),
        ("Португальська", "PT"),
        ("Румунська", "RO"),
        ("Російська", "RU"),
        ("Словацька", "SK"),
        ("Словенська", "SL"),
        ("Шведська", "SV"),
        ("Турецька", "TR"),
        ("Українська", "UK"),
    ],
};

static RU_CATALOG: Catalog = Catalog {
    locale: "RU",
    entries: entries![
        ("Английский", "EN-US"),
        ("Немецкий", "DE"),
        ("Французский", "FR"),
        ("Испанский", "ES"),
        ("Болгарский", "BG"),
        ("Китайский", "ZH"),
        ("Чешский", "CS"),
        ("Датский", "DA"),
        ("Голландский", "NL"),
        ("Эстонский", "ET"),
        ("Финский", "FI"),
        ("Греческий", "EL"),
        ("Венгерский", "HU"),
        ("Индонезийский", "ID"),
        ("Итальянский", "IT"),
        ("Японский", "JA"),
        ("Корейский", "KO"),
        ("Латвийский", "LV"),
        ("Литовский", "LT"),
        ("Норвежский", "NO"),
        ("Польский", "PL"),
        ("Португальский", "PT"),
        ("Румынский", "RO"),
        ("Русский", "RU"),
        ("Словацкий", "SK"),
        ("Словенский", "SL"),
        ("Шведский", "SV"),
        ("Турецкий", "TR"),
        ("Украинский", "UK"),
    ],
};

/// All known display-locale catalogs.
pub static CATALOGS: [&Catalog; 7] = [
    &EN_CATALOG,
    &DE_CATALOG,
    &FR_CATALOG,
    &IT_CATALOG,
    &ES_CATALOG,
    &UK_CATALOG,
    &RU_CATALOG,
];

/// Get the catalog for a display-locale code.
///
/// Lookup is case-insensitive. Unknown codes fall back to the English
/// catalog, so a usable mapping always exists; this never fails.
pub fn catalog_for(display_code: &str) -> &'static Catalog {
    CATALOGS
        .iter()
        .find(|c| c.locale.eq_ignore_ascii_case(display_code))
        .copied()
        .unwrap_or(&EN_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_catalog_covers_the_canonical_code_set() {
        let canonical: HashSet<&str> = CANONICAL_CODES.into_iter().collect();
        for catalog in CATALOGS {
            let codes: HashSet<&str> = catalog.entries().iter().map(|e| e.code).collect();
            assert_eq!(
                codes, canonical,
                "catalog {} diverges from the canonical code set",
                catalog.locale
            );
            assert_eq!(catalog.entries().len(), CANONICAL_CODES.len());
        }
    }

    #[test]
    fn name_for_code_inverts_code_for_name() {
        for catalog in CATALOGS {
            for entry in catalog.entries() {
                assert_eq!(catalog.name_for_code(entry.code), entry.name);
                assert_eq!(catalog.code_for_name(entry.name), Some(entry.code));
            }
        }
    }

    #[test]
    fn name_for_code_falls_back_to_default_target() {
        assert_eq!(EN_CATALOG.name_for_code("XX"), "English");
        assert_eq!(DE_CATALOG.name_for_code("XX"), "Englisch");
        assert_eq!(FR_CATALOG.name_for_code(""), "Anglais");
    }

    #[test]
    fn name_for_code_is_case_insensitive() {
        assert_eq!(EN_CATALOG.name_for_code("de"), "German");
        assert_eq!(EN_CATALOG.name_for_code("en-us"), "English");
    }

    #[test]
    fn catalog_for_unknown_locale_is_english() {
        assert_eq!(catalog_for("ZZ").locale, "EN");
        assert_eq!(catalog_for("").locale, "EN");
    }

    #[test]
    fn catalog_for_is_case_insensitive() {
        assert_eq!(catalog_for("de").locale, "DE");
        assert_eq!(catalog_for("Ru").locale, "RU");
    }

    #[test]
    fn only_english_uses_a_regional_variant() {
        for catalog in CATALOGS {
            for entry in catalog.entries() {
                if entry.code == "EN-US" {
                    assert_eq!(entry.code.len(), 5);
                } else {
                    assert_eq!(entry.code.len(), 2, "unexpected variant: {}", entry.code);
                }
            }
        }
    }
}
