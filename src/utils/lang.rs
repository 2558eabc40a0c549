//! Caption language detection table.
//!
//! Maps lowercase language names and common short forms found in caption
//! filenames to ISO-639-2 codes.

/// Language name -> ISO-639-2 code.
const LANGUAGES: &[(&str, &str)] = &[
    ("english", "eng"),
    ("eng", "eng"),
    ("french", "fre"),
    ("fre", "fre"),
    ("spanish", "spa"),
    ("spa", "spa"),
    ("german", "ger"),
    ("ger", "ger"),
    ("italian", "ita"),
    ("ita", "ita"),
    ("portuguese", "por"),
    ("por", "por"),
    ("dutch", "dut"),
    ("russian", "rus"),
    ("rus", "rus"),
    ("japanese", "jpn"),
    ("jpn", "jpn"),
    ("korean", "kor"),
    ("kor", "kor"),
    ("chinese", "chi"),
    ("chi", "chi"),
    ("arabic", "ara"),
    ("swedish", "swe"),
    ("norwegian", "nor"),
    ("danish", "dan"),
    ("finnish", "fin"),
    ("polish", "pol"),
    ("czech", "cze"),
    ("turkish", "tur"),
    ("greek", "gre"),
    ("hebrew", "heb"),
    ("hindi", "hin"),
    ("hungarian", "hun"),
];

/// Look up a filename token in the language table.
pub fn code_for_token(token: &str) -> Option<&'static str> {
    let token = token.to_lowercase();
    LANGUAGES
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, code)| *code)
}

/// Whether `code` is a known ISO-639-2 code in the table.
pub fn is_known_code(code: &str) -> bool {
    let code = code.to_lowercase();
    LANGUAGES.iter().any(|(_, c)| *c == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_for_token() {
        assert_eq!(code_for_token("French"), Some("fre"));
        assert_eq!(code_for_token("english"), Some("eng"));
        assert_eq!(code_for_token("eng"), Some("eng"));
        assert_eq!(code_for_token("1080p"), None);
    }

    #[test]
    fn test_is_known_code() {
        assert!(is_known_code("fre"));
        assert!(is_known_code("ENG"));
        assert!(!is_known_code("xx"));
    }
}
