use crate::PlayerIdentifier;

use serde::{Deserialize, Serialize};

pub const ROUTE: &str = "players";

#[derive(Debug, Default, Clone, Serialize)]
pub struct Params {
    pub name: Option<String>,
    pub steam_id: Option<String>,
    pub is_banned: Option<bool>,
    pub total_records: Option<u32>,
    pub ip: Option<String>,
    pub steamid64_list: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl Params {
    pub fn player(mut self, player: &PlayerIdentifier) -> Self {
        match player {
            PlayerIdentifier::Name(name) => self.name = Some(name.clone()),
            PlayerIdentifier::SteamId(steam_id) => self.steam_id = Some(steam_id.to_string()),
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub steamid64: String,
    pub steam_id: String,
    pub is_banned: bool,
    pub total_records: u32,
    pub name: String,
}
