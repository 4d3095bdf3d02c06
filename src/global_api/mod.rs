//! Typed access to the GOKZ GlobalAPI.
//!
//! Every resource has a descriptor module (route, query parameters, response shape). [`GlobalApi`]
//! issues the requests through a [`Transport`] and adds the single-call wrappers on top; the
//! multi-request queries live in [`composite`].

pub mod bans;
pub mod composite;
pub mod health;
pub mod maps;
pub mod modes;
pub mod player_ranks;
pub mod players;
pub mod record_filters;
pub mod records;
#[cfg(test)]
pub(crate) mod testing;

use crate::{
    Config, Error, ErrorKind, MapIdentifier, Mode, PlayerIdentifier, Result, RunType, SteamId,
    Transport,
};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

/// A successfully decoded response. The registry answers with either a bare object or an array
/// depending on the route, and the shape is kept as received.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> Payload<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Payload::One(item) => vec![item],
            Payload::Many(items) => items,
        }
    }

    pub fn into_first(self) -> Option<T> {
        self.into_vec().into_iter().next()
    }
}

/// Client for the GlobalAPI. Cheap to share; holds no state besides the transport.
pub struct GlobalApi<T = reqwest::Client> {
    pub(crate) transport: T,
    pub(crate) config: Config,
}

impl GlobalApi {
    /// Builds a client on top of `reqwest` using the timeout and user agent from `config`.
    pub fn new(config: Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                Error::new(ErrorKind::Other, "GlobalApi::new", "Failed to build HTTP client.")
                    .with_raw(e.to_string())
            })?;
        Ok(Self::with_transport(http, config))
    }
}

impl<T: Transport> GlobalApi<T> {
    pub fn with_transport(transport: T, config: Config) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, route: &str) -> String {
        format!("{}{}", self.config.base_url, route)
    }

    /// Issues one GET against `url` and checks the body against the shape `R`, accepting either
    /// a single `R` or a list of them.
    ///
    /// Fails with [`ErrorKind::TransportFailure`] if the request itself fails or the status is not
    /// 2xx, [`ErrorKind::NoData`] if the registry answered with an empty list and
    /// [`ErrorKind::ParseFailure`] if the body is not JSON or has any other shape.
    pub async fn execute<R, P>(&self, url: &str, params: &P) -> Result<Payload<R>>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let query = query_pairs(params)?;
        log::debug!("GET {} {:?}", url, query);

        let body = self.transport.fetch(url, &query).await.map_err(|e| {
            log::warn!("GET {} failed: {}", url, e);
            Error::new(
                ErrorKind::TransportFailure,
                "execute",
                "GlobalAPI request failed.",
            )
            .with_raw(e.to_string())
        })?;

        let body = parse_json(body, "execute", "Failed to parse GlobalAPI response.")?;
        decode(body).map_err(|e| {
            if e.kind == ErrorKind::ParseFailure {
                log::warn!("unexpected response shape from {}", url);
            }
            e
        })
    }

    pub async fn get_bans(&self, steam_id: &SteamId) -> Result<Vec<bans::Ban>> {
        let params = bans::Params {
            steam_id: Some(steam_id.to_string()),
            ..Default::default()
        };
        let response = self
            .execute(&self.url(bans::ROUTE), &params)
            .await
            .map_err(|e| e.within("get_bans"))?;
        non_empty(response, "get_bans", "No bans found.")
    }

    /// The full catalog of validated maps.
    pub async fn get_maps(&self) -> Result<Vec<maps::Map>> {
        let params = maps::Params {
            is_validated: Some(true),
            limit: Some(9999),
            ..Default::default()
        };
        let response = self
            .execute(&self.url(maps::ROUTE), &params)
            .await
            .map_err(|e| e.within("get_maps"))?;
        non_empty(response, "get_maps", "No maps found.")
    }

    pub async fn get_map(&self, map: &MapIdentifier) -> Result<maps::Map> {
        let mut params = maps::Params {
            is_validated: Some(true),
            limit: Some(1),
            ..Default::default()
        };
        match map {
            MapIdentifier::Name(name) => params.name = Some(name.clone()),
            MapIdentifier::Id(id) => params.id = Some(*id),
        }
        let response = self
            .execute(&self.url(maps::ROUTE), &params)
            .await
            .map_err(|e| e.within("get_map"))?;
        first(response, "get_map", "No map found.")
    }

    pub async fn get_modes(&self) -> Result<Vec<modes::ModeInfo>> {
        let response = self
            .execute(&self.url(modes::ROUTE), &())
            .await
            .map_err(|e| e.within("get_modes"))?;
        non_empty(response, "get_modes", "No modes found.")
    }

    pub async fn get_mode(&self, mode: Mode) -> Result<modes::ModeInfo> {
        let response = self
            .execute(&self.url(&modes::by_id_route(mode)), &())
            .await
            .map_err(|e| e.within("get_mode"))?;
        first(response, "get_mode", "No mode found.")
    }

    pub async fn get_mode_by_name(&self, mode: Mode) -> Result<modes::ModeInfo> {
        let response = self
            .execute(&self.url(&modes::by_name_route(mode)), &())
            .await
            .map_err(|e| e.within("get_mode_by_name"))?;
        first(response, "get_mode_by_name", "No mode found.")
    }

    pub async fn get_player(&self, player: &PlayerIdentifier) -> Result<players::Player> {
        let params = players::Params::default().player(player);
        let response = self
            .execute(&self.url(players::ROUTE), &params)
            .await
            .map_err(|e| e.within("get_player"))?;
        first(response, "get_player", "No player found.")
    }

    /// Record filters of a single map. Filters can only be looked up by map id.
    pub async fn get_filters(
        &self,
        map: &MapIdentifier,
    ) -> Result<Vec<record_filters::RecordFilter>> {
        let map_id = match map {
            MapIdentifier::Name(_) => {
                return Err(Error::invalid_input(
                    "get_filters",
                    "You can only use an ID for this function.",
                ))
            }
            MapIdentifier::Id(id) => *id,
        };
        let params = record_filters::Params {
            map_ids: Some(map_id),
            ..Default::default()
        };
        let response = self
            .execute(&self.url(record_filters::ROUTE), &params)
            .await
            .map_err(|e| e.within("get_filters"))?;
        non_empty(response, "get_filters", "No filters found.")
    }

    /// Main-course filters of every map under `mode` and `run_type`.
    pub async fn get_filter_dist(
        &self,
        mode: Mode,
        run_type: RunType,
    ) -> Result<Vec<record_filters::RecordFilter>> {
        let params = record_filters::Params {
            mode_ids: Some(mode.as_id()),
            has_teleports: Some(run_type.has_teleports()),
            stages: Some(0),
            limit: Some(9999),
            ..Default::default()
        };
        let response = self
            .execute(&self.url(record_filters::ROUTE), &params)
            .await
            .map_err(|e| e.within("get_filter_dist"))?;
        non_empty(response, "get_filter_dist", "No filters found.")
    }

    /// Every personal best of `player` on `course` under `mode` and `run_type`.
    pub async fn get_times(
        &self,
        player: &PlayerIdentifier,
        mode: Mode,
        run_type: RunType,
        course: u8,
    ) -> Result<Vec<records::Record>> {
        let params = records::Params {
            modes_list_string: Some(mode),
            has_teleports: Some(run_type.has_teleports()),
            stage: Some(course),
            limit: Some(9999),
            ..Default::default()
        }
        .player(player);
        let response = self
            .execute(&self.url(records::TOP_ROUTE), &params)
            .await
            .map_err(|e| e.within("get_times"))?;
        non_empty(response, "get_times", "No records found.")
    }

    pub async fn get_world_record(
        &self,
        map: &MapIdentifier,
        mode: Mode,
        run_type: RunType,
        course: u8,
    ) -> Result<records::Record> {
        let params = records::Params {
            modes_list_string: Some(mode),
            has_teleports: Some(run_type.has_teleports()),
            stage: Some(course),
            ..Default::default()
        }
        .map(map);
        let response = self
            .execute(&self.url(records::TOP_ROUTE), &params)
            .await
            .map_err(|e| e.within("get_world_record"))?;
        first(response, "get_world_record", "No WR found.")
    }

    pub async fn get_personal_best(
        &self,
        player: &PlayerIdentifier,
        map: &MapIdentifier,
        mode: Mode,
        run_type: RunType,
        course: u8,
    ) -> Result<records::Record> {
        let params = records::Params {
            modes_list_string: Some(mode),
            has_teleports: Some(run_type.has_teleports()),
            stage: Some(course),
            ..Default::default()
        }
        .player(player)
        .map(map);
        let response = self
            .execute(&self.url(records::TOP_ROUTE), &params)
            .await
            .map_err(|e| e.within("get_personal_best"))?;
        first(response, "get_personal_best", "No PB found.")
    }

    /// The 100 best runs on a map.
    pub async fn get_map_top(
        &self,
        map: &MapIdentifier,
        mode: Mode,
        run_type: RunType,
        course: u8,
    ) -> Result<Vec<records::Record>> {
        let params = records::Params {
            modes_list_string: Some(mode),
            has_teleports: Some(run_type.has_teleports()),
            stage: Some(course),
            limit: Some(100),
            ..Default::default()
        }
        .map(map);
        let response = self
            .execute(&self.url(records::TOP_ROUTE), &params)
            .await
            .map_err(|e| e.within("get_map_top"))?;
        non_empty(response, "get_map_top", "Map has 0 completions.")
    }

    pub async fn get_recent_records(
        &self,
        params: &records::Params,
    ) -> Result<Vec<records::RecentRecord>> {
        let response = self
            .execute(&self.url(records::RECENT_ROUTE), params)
            .await
            .map_err(|e| e.within("get_recent_records"))?;
        non_empty(response, "get_recent_records", "No recent records found.")
    }

    /// Players ranked by how many world records they hold on the given courses.
    pub async fn get_wr_leaderboard(
        &self,
        mode: Mode,
        stages: &[u8],
        run_type: RunType,
    ) -> Result<Vec<records::WorldRecordHolder>> {
        let params = records::WorldRecordParams {
            stages: stages.to_vec(),
            mode_ids: Some(mode.as_id()),
            tickrates: Some(128),
            has_teleports: Some(run_type.has_teleports()),
            limit: Some(100),
            ..Default::default()
        };
        let response = self
            .execute(&self.url(records::WORLD_RECORDS_ROUTE), &params)
            .await
            .map_err(|e| e.within("get_wr_leaderboard"))?;
        non_empty(response, "get_wr_leaderboard", "No world records found.")
    }

    /// Where the record with `record_id` currently places on its leaderboard.
    pub async fn get_place(&self, record_id: u32) -> Result<u32> {
        let response = self
            .execute(&self.url(&records::place_route(record_id)), &())
            .await
            .map_err(|e| e.within("get_place"))?;
        first(response, "get_place", "No place found.")
    }

    pub async fn get_replays(
        &self,
        params: &records::ReplayListParams,
    ) -> Result<Vec<records::Replay>> {
        let response = self
            .execute(&self.url(records::REPLAY_LIST_ROUTE), params)
            .await
            .map_err(|e| e.within("get_replays"))?;
        non_empty(response, "get_replays", "No replays found.")
    }

    pub async fn get_replay(&self, replay_id: u32) -> Result<String> {
        let response = self
            .execute(&self.url(&records::replay_route(replay_id)), &())
            .await
            .map_err(|e| e.within("get_replay"))?;
        first(response, "get_replay", "No replay found.")
    }

    pub async fn get_player_ranks(
        &self,
        params: &player_ranks::Params,
    ) -> Result<Vec<player_ranks::PlayerRank>> {
        let response = self
            .execute(&self.url(player_ranks::ROUTE), params)
            .await
            .map_err(|e| e.within("get_player_ranks"))?;
        non_empty(response, "get_player_ranks", "No player ranks found.")
    }
}

fn non_empty<R>(response: Payload<R>, origin: &'static str, summary: &str) -> Result<Vec<R>> {
    let items = response.into_vec();
    if items.is_empty() {
        return Err(Error::no_data(origin, summary));
    }
    Ok(items)
}

fn first<R>(response: Payload<R>, origin: &'static str, summary: &str) -> Result<R> {
    response
        .into_first()
        .ok_or_else(|| Error::no_data(origin, summary))
}

/// Reads a 2xx body as JSON. A body that isn't JSON at all is a parse failure carrying the text
/// as received.
pub(crate) fn parse_json(body: String, origin: &'static str, summary: &str) -> Result<Value> {
    serde_json::from_str(&body).map_err(|e| {
        log::warn!("response is not JSON: {}", e);
        Error::new(ErrorKind::ParseFailure, origin, summary).with_raw(body)
    })
}

/// The validation step of [`GlobalApi::execute`].
pub(crate) fn decode<R: DeserializeOwned>(body: Value) -> Result<Payload<R>> {
    if body.as_array().map_or(false, Vec::is_empty) {
        return Err(Error::no_data("execute", "No data found."));
    }
    if let Ok(item) = R::deserialize(&body) {
        return Ok(Payload::One(item));
    }
    if let Ok(items) = Vec::<R>::deserialize(&body) {
        return Ok(Payload::Many(items));
    }
    Err(Error::new(
        ErrorKind::ParseFailure,
        "execute",
        "Failed to parse GlobalAPI response.",
    )
    .with_raw(body))
}

/// Flattens `params` into query pairs. `None` fields are left out and lists repeat their key.
pub(crate) fn query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<Vec<(String, String)>> {
    let invalid = |summary: String| Error::invalid_input("execute", summary);

    let mut pairs = Vec::new();
    match serde_json::to_value(params).map_err(|e| invalid(e.to_string()))? {
        Value::Null => {}
        Value::Object(fields) => {
            for (key, value) in fields {
                push_pair(&mut pairs, &key, value);
            }
        }
        other => {
            return Err(invalid(format!(
                "Query parameters must be a struct, got `{}`.",
                other
            )))
        }
    }
    Ok(pairs)
}

fn push_pair(pairs: &mut Vec<(String, String)>, key: &str, value: Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key.to_owned(), s)),
        Value::Array(items) => {
            for item in items {
                push_pair(pairs, key, item);
            }
        }
        other => pairs.push((key.to_owned(), other.to_string())),
    }
}
