//! `records/*` routes: personal bests, recent records, world record counts, places and replays.

use crate::{MapIdentifier, Mode, PlayerIdentifier};

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

pub const TOP_ROUTE: &str = "records/top";
pub const RECENT_ROUTE: &str = "records/top/recent";
pub const WORLD_RECORDS_ROUTE: &str = "records/top/world_records";
pub const REPLAY_LIST_ROUTE: &str = "records/replay/list";

pub fn place_route(record_id: u32) -> String {
    format!("records/place/{}", record_id)
}

pub fn replay_route(replay_id: u32) -> String {
    format!("records/replay/{}", replay_id)
}

/// Query for `records/top` and `records/top/recent`.
#[derive(Debug, Default, Clone, Serialize)]
pub struct Params {
    pub steam_id: Option<String>,
    pub server_id: Option<u32>,
    pub steamid64: Option<u64>,
    pub map_id: Option<u32>,
    pub map_name: Option<String>,
    pub tickrate: Option<u8>,
    pub overall: Option<bool>,
    pub stage: Option<u8>,
    pub modes_list_string: Option<Mode>,
    pub modes_list: Option<String>,
    pub has_teleports: Option<bool>,
    pub player_name: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl Params {
    pub fn map(mut self, map: &MapIdentifier) -> Self {
        match map {
            MapIdentifier::Name(name) => self.map_name = Some(name.clone()),
            MapIdentifier::Id(id) => self.map_id = Some(*id),
        }
        self
    }

    pub fn player(mut self, player: &PlayerIdentifier) -> Self {
        match player {
            PlayerIdentifier::Name(name) => self.player_name = Some(name.clone()),
            PlayerIdentifier::SteamId(steam_id) => self.steam_id = Some(steam_id.to_string()),
        }
        self
    }
}

/// A single timed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub steamid64: String,
    pub player_name: String,
    pub steam_id: String,
    pub server_id: u32,
    pub map_id: u32,
    pub stage: u8,
    pub mode: Mode,
    pub tickrate: u8,
    /// Seconds.
    pub time: f64,
    pub teleports: u32,
    pub created_on: String,
    pub updated_on: String,
    pub updated_by: u64,
    pub record_filter_id: u32,
    pub server_name: String,
    pub map_name: String,
    pub points: u32,
    pub replay_id: u32,
}

impl Record {
    /// `created_on` as a timestamp. The registry sends it without a zone, so it is taken as UTC.
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_on)
    }
}

pub(crate) fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    s.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
}

/// Entry of `records/top/recent`, which additionally carries the run's placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentRecord {
    pub id: u32,
    pub steamid64: String,
    pub player_name: String,
    pub steam_id: String,
    pub server_id: u32,
    pub map_id: u32,
    pub stage: u8,
    pub mode: Mode,
    pub tickrate: u8,
    pub time: f64,
    pub teleports: u32,
    pub created_on: String,
    pub updated_on: String,
    pub updated_by: u64,
    pub place: u32,
    pub top_100: u32,
    pub top_100_overall: u32,
    pub server_name: String,
    pub map_name: String,
    pub points: u32,
    pub record_filter_id: u32,
    pub replay_id: u32,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct WorldRecordParams {
    pub ids: Option<u32>,
    pub map_ids: Option<u32>,
    /// Sent as one `stages=` pair per entry.
    pub stages: Vec<u8>,
    pub mode_ids: Option<u32>,
    pub tickrates: Option<u8>,
    pub has_teleports: Option<bool>,
    #[serde(rename = "mapTag")]
    pub map_tag: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// A player and how many world records they hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldRecordHolder {
    pub steamid64: String,
    pub steam_id: String,
    pub count: u32,
    pub player_name: String,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct ReplayListParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub id: u32,
    pub steamid64: String,
    pub server_id: u32,
    pub record_filter_id: u32,
    pub time: f64,
    pub teleports: u32,
    pub created_on: String,
    pub updated_on: String,
    pub updated_by: u64,
    pub points: u32,
    pub replay_id: u32,
}
