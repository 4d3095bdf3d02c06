//! KZ:GO, a community mirror of map metadata. Used where the GlobalAPI lacks information, such
//! as the number of bonuses on a map or who made it.

use crate::{global_api::parse_json, Error, ErrorKind, GlobalApi, Result, Transport};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KzgoMap {
    pub name: String,
    pub id: u32,
    pub tier: u8,
    pub workshop_id: String,
    pub bonuses: u8,
    /// Has a skill (TP) filter.
    pub sp: bool,
    /// Has a pro filter.
    pub vp: bool,
    pub mapper_names: Vec<String>,
    pub mapper_ids: Vec<String>,
    pub date: String,
}

/// Whether `course` exists on `map`. Course 0 is the main course.
pub fn validate_course(map: &KzgoMap, course: u8) -> bool {
    map.bonuses >= course
}

impl<T: Transport> GlobalApi<T> {
    async fn kzgo_request<R: DeserializeOwned>(&self, route: &str) -> Result<R> {
        let url = format!("{}{}", self.config.kzgo_url, route);
        log::debug!("GET {}", url);

        let body = self.transport.fetch(&url, &[]).await.map_err(|e| {
            log::warn!("GET {} failed: {}", url, e);
            Error::new(
                ErrorKind::SecondaryServiceFailure,
                "kzgo_request",
                "KZ:GO request failed.",
            )
            .with_raw(e.to_string())
        })?;

        let body = parse_json(body, "kzgo_request", "Failed to parse KZ:GO response.")?;
        R::deserialize(&body).map_err(|_| {
            Error::new(
                ErrorKind::ParseFailure,
                "kzgo_request",
                "Failed to parse KZ:GO response.",
            )
            .with_raw(body.clone())
        })
    }

    pub async fn get_kzgo_maps(&self) -> Result<Vec<KzgoMap>> {
        let maps: Vec<KzgoMap> = self
            .kzgo_request("maps")
            .await
            .map_err(|e| e.within("get_kzgo_maps"))?;
        if maps.is_empty() {
            return Err(Error::no_data("get_kzgo_maps", "No maps found."));
        }
        Ok(maps)
    }

    pub async fn get_kzgo_map(&self, name: &str) -> Result<KzgoMap> {
        self.kzgo_request(&format!("maps/{}", name))
            .await
            .map_err(|e| e.within("get_kzgo_map"))
    }
}
