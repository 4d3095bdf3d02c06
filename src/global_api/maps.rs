use serde::{Deserialize, Serialize};

pub const ROUTE: &str = "maps";

#[derive(Debug, Default, Clone, Serialize)]
pub struct Params {
    pub id: Option<u32>,
    pub name: Option<String>,
    pub larger_than_filesize: Option<u64>,
    pub smaller_than_filesize: Option<u64>,
    pub is_validated: Option<bool>,
    pub difficulty: Option<u8>,
    pub created_since: Option<String>,
    pub updated_since: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// A map as the GlobalAPI knows it. `difficulty` is the map's tier (1-7).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub id: u32,
    pub name: String,
    pub filesize: u64,
    pub validated: bool,
    pub difficulty: u8,
    pub created_on: String,
    pub updated_on: String,
    pub approved_by_steamid64: String,
    pub workshop_url: String,
    pub download_url: Option<String>,
}
