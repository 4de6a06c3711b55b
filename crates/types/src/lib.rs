/// Errors that can occur when creating validated correspondence code types.
#[derive(Debug, thiserror::Error)]
pub enum CodeError {
    /// The input code was empty or contained only whitespace
    #[error("Correspondence code cannot be empty")]
    Empty,
    /// The input code exceeded the maximum permitted length
    #[error("Correspondence code exceeds maximum length of {0} characters")]
    TooLong(usize),
    /// The input code contained characters outside the permitted set
    #[error("Correspondence code contains invalid characters (only alphanumeric, '.', '_', '-', ' ' allowed)")]
    InvalidCharacters,
}

/// Maximum permitted length for a correspondence code token.
const MAX_CODE_LEN: usize = 32;

/// A classification code token: a top-level or part code from a
/// correspondence selection.
///
/// This type wraps a `String` and guarantees it is a trimmed, non-empty,
/// ASCII token suitable for embedding in template filenames and flag field
/// names. The input is trimmed of leading and trailing whitespace during
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrespondenceCode(String);

impl CorrespondenceCode {
    /// Creates a new `CorrespondenceCode` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. The trimmed
    /// result must be non-empty, at most 32 characters, and restricted to a
    /// conservative ASCII set safe for filename and field-name embedding.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Errors
    ///
    /// Returns `CodeError::Empty` for empty/whitespace-only input,
    /// `CodeError::TooLong` past the length bound, and
    /// `CodeError::InvalidCharacters` for anything outside the permitted set.
    pub fn new(input: impl AsRef<str>) -> Result<Self, CodeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CodeError::Empty);
        }
        if trimmed.len() > MAX_CODE_LEN {
            return Err(CodeError::TooLong(MAX_CODE_LEN));
        }
        let ok = trimmed
            .bytes()
            .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'.' | b'-' | b'_' | b' '));
        if !ok {
            return Err(CodeError::InvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CorrespondenceCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CorrespondenceCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for CorrespondenceCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CorrespondenceCode::new(s)
    }
}

impl serde::Serialize for CorrespondenceCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for CorrespondenceCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CorrespondenceCode::new(&s).map_err(serde::de::Error::custom)
    }
}

/// The jurisdiction a correspondence selection is made under.
///
/// Exactly one jurisdiction is populated per request; the two classification
/// tables are independent and the same part code may map to unrelated
/// templates under each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Jurisdiction {
    /// England & Wales correspondence table.
    #[serde(rename = "englandWales")]
    EnglandWales,
    /// Scotland correspondence table.
    #[serde(rename = "scotland")]
    Scotland,
}

impl Jurisdiction {
    /// Stable lowercase token used in logs and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Jurisdiction::EnglandWales => "englandWales",
            Jurisdiction::Scotland => "scotland",
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Jurisdiction {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "englandWales" | "england-wales" | "ew" => Ok(Jurisdiction::EnglandWales),
            "scotland" | "scot" => Ok(Jurisdiction::Scotland),
            _ => Err(CodeError::InvalidCharacters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_trims_and_accepts_tokens() {
        let code = CorrespondenceCode::new("  4.2 ").expect("valid code");
        assert_eq!(code.as_str(), "4.2");

        let scot = CorrespondenceCode::new("Scot_32").expect("valid code");
        assert_eq!(scot.to_string(), "Scot_32");
    }

    #[test]
    fn code_rejects_empty_and_whitespace() {
        assert!(matches!(CorrespondenceCode::new(""), Err(CodeError::Empty)));
        assert!(matches!(
            CorrespondenceCode::new("   "),
            Err(CodeError::Empty)
        ));
    }

    #[test]
    fn code_rejects_invalid_characters() {
        assert!(matches!(
            CorrespondenceCode::new("4/2"),
            Err(CodeError::InvalidCharacters)
        ));
        assert!(matches!(
            CorrespondenceCode::new("a\nb"),
            Err(CodeError::InvalidCharacters)
        ));
    }

    #[test]
    fn code_rejects_overlong_input() {
        let long = "x".repeat(33);
        assert!(matches!(
            CorrespondenceCode::new(long),
            Err(CodeError::TooLong(32))
        ));
    }

    #[test]
    fn code_serde_round_trips_as_plain_string() {
        let code = CorrespondenceCode::new("7_1").expect("valid code");
        let json = serde_json::to_string(&code).expect("serialize");
        assert_eq!(json, "\"7_1\"");

        let back: CorrespondenceCode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, code);
    }

    #[test]
    fn code_deserialize_revalidates() {
        let err = serde_json::from_str::<CorrespondenceCode>("\"  \"");
        assert!(err.is_err());
    }

    #[test]
    fn jurisdiction_parses_cli_tokens() {
        assert_eq!(
            "ew".parse::<Jurisdiction>().expect("parse"),
            Jurisdiction::EnglandWales
        );
        assert_eq!(
            "scotland".parse::<Jurisdiction>().expect("parse"),
            Jurisdiction::Scotland
        );
        assert!("narnia".parse::<Jurisdiction>().is_err());
    }

    #[test]
    fn jurisdiction_serde_uses_camel_case_tags() {
        let json = serde_json::to_string(&Jurisdiction::EnglandWales).expect("serialize");
        assert_eq!(json, "\"englandWales\"");
        let back: Jurisdiction = serde_json::from_str("\"scotland\"").expect("deserialize");
        assert_eq!(back, Jurisdiction::Scotland);
    }
}
