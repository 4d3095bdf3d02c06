use crate::Mode;

use serde::{Deserialize, Serialize};

pub const ROUTE: &str = "modes";

pub fn by_id_route(mode: Mode) -> String {
    format!("modes/id/{}", mode.as_id())
}

pub fn by_name_route(mode: Mode) -> String {
    format!("modes/name/{}", mode)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeInfo {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub latest_version: u32,
    pub latest_version_description: String,
    pub website: String,
    pub repo: String,
    pub contact_steamid64: String,
    // always null in practice
    #[serde(default)]
    pub supported_tickrates: Option<serde_json::Value>,
    pub created_on: String,
    pub updated_on: String,
    pub updated_by_id: String,
}
