use crate::{Error, Result};

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static STEAM_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^STEAM_[0-1]:[0-1]:[0-9]+$").unwrap());

/// A textual SteamID such as `STEAM_1:0:12345`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SteamId(String);

impl SteamId {
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if Self::is_valid(&value) {
            Ok(Self(value))
        } else {
            Err(Error::invalid_input(
                "SteamId::new",
                format!("`{}` is not a valid SteamID.", value),
            ))
        }
    }

    pub fn is_valid(input: &str) -> bool {
        STEAM_ID.is_match(input)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SteamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Selects a map either by (partial) name or by its registry id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapIdentifier {
    Name(String),
    Id(u32),
}

impl From<u32> for MapIdentifier {
    fn from(id: u32) -> Self {
        MapIdentifier::Id(id)
    }
}

impl From<&str> for MapIdentifier {
    fn from(name: &str) -> Self {
        MapIdentifier::Name(name.to_owned())
    }
}

/// Selects a player either by name or by SteamID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerIdentifier {
    Name(String),
    SteamId(SteamId),
}

impl PlayerIdentifier {
    /// Anything that looks like a SteamID is treated as one, the rest as a player name.
    pub fn parse(input: &str) -> Self {
        match SteamId::new(input) {
            Ok(steam_id) => PlayerIdentifier::SteamId(steam_id),
            Err(_) => PlayerIdentifier::Name(input.to_owned()),
        }
    }
}

impl From<SteamId> for PlayerIdentifier {
    fn from(steam_id: SteamId) -> Self {
        PlayerIdentifier::SteamId(steam_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn steam_id_validation() {
        assert!(SteamId::is_valid("STEAM_1:0:135486492"));
        assert!(SteamId::is_valid("STEAM_0:1:1"));
        assert!(!SteamId::is_valid("STEAM_2:0:1"));
        assert!(!SteamId::is_valid("STEAM_1:0:"));
        assert!(!SteamId::is_valid("AlphaKeks"));
        assert!(!SteamId::is_valid("xSTEAM_1:0:1"));

        assert_eq!(SteamId::new("STEAM_1:1:42").unwrap().as_str(), "STEAM_1:1:42");
        assert_eq!(
            SteamId::new("76561198282622073").unwrap_err().kind,
            ErrorKind::InvalidInput
        );
    }

    #[test]
    fn player_identifier_from_input() {
        assert_eq!(
            PlayerIdentifier::parse("STEAM_1:0:135486492"),
            PlayerIdentifier::SteamId(SteamId("STEAM_1:0:135486492".to_owned()))
        );
        assert_eq!(
            PlayerIdentifier::parse("AlphaKeks"),
            PlayerIdentifier::Name("AlphaKeks".to_owned())
        );
    }
}
