use crate::Mode;

use serde::{Deserialize, Serialize};

pub const ROUTE: &str = "player_ranks";

#[derive(Debug, Default, Clone, Serialize)]
pub struct Params {
    pub points_greater_than: Option<u32>,
    pub average_greater_than: Option<f64>,
    pub rating_greater_than: Option<f64>,
    pub finishes_greater_than: Option<u32>,
    pub steamid64s: Option<u64>,
    pub record_filter_ids: Option<u32>,
    pub map_ids: Option<u32>,
    pub stages: Option<u8>,
    pub mode_ids: Option<u32>,
    pub tickrates: Option<u8>,
    pub has_teleports: Option<bool>,
    #[serde(rename = "mapTag")]
    pub map_tag: Option<String>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRank {
    pub points: i64,
    pub average: f64,
    pub rating: f64,
    pub finishes: u32,
    pub steamid64: String,
    pub steamid: String,
    pub player_name: String,
}

impl PlayerRank {
    pub fn rank(&self, mode: Mode) -> crate::Rank {
        crate::Rank::from_points(self.points, mode)
    }
}
