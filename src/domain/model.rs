use std::fmt;

/// Film identifier exactly as given on the command line. It is not checked to be numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmId(String);

impl FilmId {
    /// Returns `None` for an absent or empty argument.
    pub fn from_arg(arg: Option<&str>) -> Option<Self> {
        match arg {
            Some(value) if !value.is_empty() => Some(Self(value.to_string())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// URL of a character resource. Never dereferenced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRef(pub String);

impl fmt::Display for CharacterRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The part of a film resource this tool consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Film {
    pub characters: Vec<CharacterRef>,
}

/// Status code and body text as returned by the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn film_id_treats_empty_as_missing() {
        assert_eq!(FilmId::from_arg(None), None);
        assert_eq!(FilmId::from_arg(Some("")), None);
        assert_eq!(FilmId::from_arg(Some("4")).unwrap().as_str(), "4");
        // 不做數字檢查，原樣保留
        assert_eq!(FilmId::from_arg(Some("abc")).unwrap().to_string(), "abc");
    }

    #[test]
    fn raw_response_success_range() {
        let ok = RawResponse { status: 204, body: String::new() };
        let not_found = RawResponse { status: 404, body: String::new() };
        assert!(ok.is_success());
        assert!(!not_found.is_success());
    }
}
