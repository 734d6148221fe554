//! Gender enumeration

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Gender of a user record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    /// All accepted values, in display order.
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    /// Returns the lowercase wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Maps a remote gender string, falling back to [`Gender::Other`] for
    /// anything unrecognised.
    pub fn from_remote(value: &str) -> Self {
        value.parse().unwrap_or(Self::Other)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown gender value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender '{0}'")]
pub struct ParseGenderError(pub String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Female".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!(" other ".parse::<Gender>(), Ok(Gender::Other));
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_from_remote_falls_back_to_other() {
        assert_eq!(Gender::from_remote("male"), Gender::Male);
        assert_eq!(Gender::from_remote("nonbinary"), Gender::Other);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"female\"");
        let parsed: Gender = serde_json::from_str("\"other\"").unwrap();
        assert_eq!(parsed, Gender::Other);
    }
}
