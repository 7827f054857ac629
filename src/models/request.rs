use std::fmt;
use std::str::FromStr;
use crate::error::Error;

/// Numeric store identifier of an app listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AppId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidArgument(format!(
                "app id must contain digits only, got {s:?}"
            )));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Two-letter storefront code, stored lower case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country(String);

impl Country {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Country {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 || !s.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(Error::InvalidArgument(format!(
                "country must be a two-letter code, got {s:?}"
            )));
        }
        Ok(Self(s.to_ascii_lowercase()))
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated command line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub app_id: AppId,
    pub country: Country,
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_accepts_digits() {
        let id: AppId = "1234567890".parse().unwrap();
        assert_eq!(id.as_str(), "1234567890");
    }

    #[test]
    fn app_id_rejects_other_input() {
        for bad in ["", "id123", "12 34", "-5", "１２３"] {
            assert!(
                matches!(bad.parse::<AppId>(), Err(Error::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn country_is_case_insensitive() {
        let country: Country = "GB".parse().unwrap();
        assert_eq!(country.as_str(), "gb");
        assert_eq!(country.to_string(), "gb");
    }

    #[test]
    fn country_rejects_bad_shapes() {
        for bad in ["", "u", "usa", "u1", "ü"] {
            assert!(
                matches!(bad.parse::<Country>(), Err(Error::InvalidArgument(_))),
                "{bad:?} should be rejected"
            );
        }
    }
}
