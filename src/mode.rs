use crate::{Error, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three movement rule sets the registry tracks runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    #[serde(rename = "kz_timer")]
    KZTimer,
    #[serde(rename = "kz_simple")]
    SimpleKZ,
    #[serde(rename = "kz_vanilla")]
    Vanilla,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::KZTimer, Mode::SimpleKZ, Mode::Vanilla];

    pub fn from_id(id: u32) -> Result<Self> {
        match id {
            200 => Ok(Mode::KZTimer),
            201 => Ok(Mode::SimpleKZ),
            202 => Ok(Mode::Vanilla),
            _ => Err(Error::invalid_input(
                "Mode::from_id",
                format!("Failed to convert from ID to Mode. {} is not a valid ID.", id),
            )),
        }
    }

    pub fn as_id(self) -> u32 {
        match self {
            Mode::KZTimer => 200,
            Mode::SimpleKZ => 201,
            Mode::Vanilla => 202,
        }
    }

    /// Key the registry uses in `modes_list_string` and record payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::KZTimer => "kz_timer",
            Mode::SimpleKZ => "kz_simple",
            Mode::Vanilla => "kz_vanilla",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Mode::KZTimer => "KZTimer",
            Mode::SimpleKZ => "SimpleKZ",
            Mode::Vanilla => "Vanilla",
        }
    }

    pub fn short_code(self) -> &'static str {
        match self {
            Mode::KZTimer => "KZT",
            Mode::SimpleKZ => "SKZ",
            Mode::Vanilla => "VNL",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Accepts the canonical key, the display name and the short code of each mode, ignoring case.
    fn from_str(s: &str) -> Result<Self, Error> {
        match s.to_lowercase().as_str() {
            "kz_timer" | "kztimer" | "kzt" => Ok(Mode::KZTimer),
            "kz_simple" | "simplekz" | "skz" => Ok(Mode::SimpleKZ),
            "kz_vanilla" | "vanilla" | "vnl" => Ok(Mode::Vanilla),
            _ => Err(Error::invalid_input(
                "Mode::from_str",
                format!(
                    "Failed to convert from string to Mode. {} is not a valid identifier.",
                    s
                ),
            )),
        }
    }
}

/// Whether a run used checkpoints and teleports ("TP") or not ("PRO").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunType {
    Tp,
    Pro,
}

impl RunType {
    pub const ALL: [RunType; 2] = [RunType::Tp, RunType::Pro];

    pub fn has_teleports(self) -> bool {
        self == RunType::Tp
    }
}

impl From<bool> for RunType {
    fn from(has_teleports: bool) -> Self {
        if has_teleports {
            RunType::Tp
        } else {
            RunType::Pro
        }
    }
}

impl fmt::Display for RunType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RunType::Tp => "TP",
            RunType::Pro => "PRO",
        })
    }
}
