use serde::{Deserialize, Serialize};

pub const ROUTE: &str = "bans";

#[derive(Debug, Default, Clone, Serialize)]
pub struct Params {
    pub ban_types: Option<String>,
    pub ban_types_list: Option<String>,
    pub is_expired: Option<bool>,
    pub ip: Option<String>,
    pub steamid64: Option<String>,
    pub steam_id: Option<String>,
    pub notes_contains: Option<String>,
    pub stats_contains: Option<String>,
    pub server_id: Option<u32>,
    pub created_since: Option<String>,
    pub updated_since: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ban {
    pub id: u32,
    pub ban_type: String,
    pub expires_on: String,
    pub steamid64: String,
    pub player_name: String,
    pub steam_id: String,
    pub notes: String,
    pub stats: String,
    pub server_id: u32,
    pub updated_by_id: String,
    pub created_on: String,
    pub updated_on: String,
}
