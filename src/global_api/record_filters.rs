use crate::Mode;

use serde::{Deserialize, Serialize};

pub const ROUTE: &str = "record_filters";

#[derive(Debug, Default, Clone, Serialize)]
pub struct Params {
    pub ids: Option<u32>,
    pub map_ids: Option<u32>,
    pub stages: Option<u8>,
    pub mode_ids: Option<u32>,
    pub tickrates: Option<u8>,
    pub has_teleports: Option<bool>,
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

/// One (map, stage, mode, tickrate, run type) combination the registry accepts records for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    pub id: u32,
    pub map_id: u32,
    pub stage: u8,
    pub mode_id: u32,
    pub tickrate: u8,
    pub has_teleports: bool,
    pub created_on: String,
    #[serde(default)]
    pub updated_on: Option<String>,
    pub updated_by_id: String,
}

/// Which of the three modes have at least one filter in `filters`, in [`Mode::ALL`] order.
pub fn supported_modes(filters: &[RecordFilter]) -> [(Mode, bool); 3] {
    Mode::ALL.map(|mode| {
        let supported = filters.iter().any(|filter| filter.mode_id == mode.as_id());
        (mode, supported)
    })
}
