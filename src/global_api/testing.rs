//! Scripted transport for exercising the client without a network. Responses are written as
//! JSON values and served as their text.

use super::GlobalApi;
use crate::{error::BoxError, transport::Query, Config, Transport};

use async_trait::async_trait;
use serde_json::{json, Value};

pub struct FakeTransport<F> {
    respond: F,
}

impl<F> FakeTransport<F> {
    pub fn new(respond: F) -> Self
    where
        F: Fn(&str, &Query) -> Result<Value, BoxError> + Send + Sync,
    {
        let _ = env_logger::builder().is_test(true).try_init();
        Self { respond }
    }
}

#[async_trait]
impl<F> Transport for FakeTransport<F>
where
    F: Fn(&str, &Query) -> Result<Value, BoxError> + Send + Sync,
{
    async fn fetch(&self, url: &str, query: &Query) -> Result<String, BoxError> {
        (self.respond)(url, query).map(|body| body.to_string())
    }
}

pub fn fake_api<F>(transport: FakeTransport<F>) -> GlobalApi<FakeTransport<F>>
where
    F: Fn(&str, &Query) -> Result<Value, BoxError> + Send + Sync,
{
    let config = Config {
        base_url: "http://registry.test/".to_owned(),
        health_url: "http://health.test/statuses".to_owned(),
        kzgo_url: "http://kzgo.test/".to_owned(),
        status_url: "http://status.test/summary.json".to_owned(),
        mapcycle_url: "http://mapcycle.test/gokz.txt".to_owned(),
        ..Config::default()
    };
    GlobalApi::with_transport(transport, config)
}

/// First value of `key` in `query`.
pub fn param<'a>(query: &'a Query, key: &str) -> Option<&'a str> {
    query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub fn map(id: u32, name: &str, tier: u8) -> Value {
    json!({
        "id": id,
        "name": name,
        "filesize": 190_335_000u64,
        "validated": true,
        "difficulty": tier,
        "created_on": "2018-01-09T10:45:48",
        "updated_on": "2018-12-22T15:44:43",
        "approved_by_steamid64": "76561198143205331",
        "workshop_url": "",
        "download_url": null,
    })
}

pub fn filter(map_id: u32, mode_id: u32, has_teleports: bool) -> Value {
    json!({
        "id": map_id * 10 + mode_id % 10,
        "map_id": map_id,
        "stage": 0,
        "mode_id": mode_id,
        "tickrate": 128,
        "has_teleports": has_teleports,
        "created_on": "2019-07-14T20:47:40",
        "updated_by_id": "76561198143205331",
    })
}

pub fn record(id: u32, map_id: u32, created_on: &str) -> Value {
    json!({
        "id": id,
        "steamid64": "76561198282622073",
        "player_name": "AlphaKeks",
        "steam_id": "STEAM_1:1:161178172",
        "server_id": 1683,
        "map_id": map_id,
        "stage": 0,
        "mode": "kz_timer",
        "tickrate": 128,
        "time": 61.5,
        "teleports": 0,
        "created_on": created_on,
        "updated_on": created_on,
        "updated_by": 0,
        "record_filter_id": 0,
        "server_name": "Hikari KZ",
        "map_name": format!("kz_map_{}", map_id),
        "points": 900,
        "replay_id": 0,
    })
}
