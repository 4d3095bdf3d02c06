//! Queries that combine several GlobalAPI requests into one answer.

use super::{health, maps::Map, records::Record, GlobalApi};
use crate::{Error, MapIdentifier, Mode, PlayerIdentifier, Result, RunType, Transport};

use std::collections::HashSet;

/// Prefix of the pro-only map variants, which are left out of unfinished lists for pro runs.
pub const PRO_MAP_PREFIX: &str = "kzpro_";

impl<T: Transport> GlobalApi<T> {
    /// Names of all maps `player` has not finished under `mode` and `run_type`, in catalog
    /// order. With `tier` set, only maps of exactly that tier are listed.
    pub async fn get_unfinished_maps(
        &self,
        player: &PlayerIdentifier,
        mode: Mode,
        run_type: RunType,
        tier: Option<u8>,
    ) -> Result<Vec<String>> {
        let (doable, completed, catalog) = tokio::join!(
            self.get_filter_dist(mode, run_type),
            self.get_times(player, mode, run_type, 0),
            self.get_maps(),
        );
        let doable = doable.map_err(|e| e.within("get_unfinished_maps"))?;
        let completed = completed.map_err(|e| e.within("get_unfinished_maps"))?;
        let catalog = catalog.map_err(|e| e.within("get_unfinished_maps"))?;

        Ok(unfinished_maps(&doable_ids(&doable), &completed, &catalog, run_type, tier))
    }

    /// The newest run of `player` across every mode and run type.
    ///
    /// Unlike the other queries this one tolerates failed sub-requests: a mode the player never
    /// touched simply contributes no records.
    pub async fn get_most_recent_run(&self, player: &PlayerIdentifier) -> Result<Record> {
        let [kzt, skz, vnl] = Mode::ALL;
        let [tp, pro] = RunType::ALL;

        let results = tokio::join!(
            self.get_times(player, kzt, tp, 0),
            self.get_times(player, kzt, pro, 0),
            self.get_times(player, skz, tp, 0),
            self.get_times(player, skz, pro, 0),
            self.get_times(player, vnl, tp, 0),
            self.get_times(player, vnl, pro, 0),
        );

        let records = [results.0, results.1, results.2, results.3, results.4, results.5]
            .into_iter()
            .filter_map(|result| match result {
                Ok(records) => Some(records),
                Err(e) => {
                    log::debug!("skipping run history: {}", e);
                    None
                }
            })
            .flatten()
            .collect::<Vec<_>>();

        most_recent(records).ok_or_else(|| {
            Error::no_data("get_most_recent_run", "No recent record found.")
        })
    }

    /// Tallies the latest health monitor entries.
    pub async fn health_check(&self) -> Result<health::HealthSummary> {
        let response = self
            .execute::<health::HealthReport, _>(&self.config.health_url, &())
            .await
            .map_err(|e| e.within("health_check"))?;
        let report = response
            .into_first()
            .ok_or_else(|| Error::no_data("health_check", "No health report found."))?;

        Ok(health::HealthSummary::from_report(&report))
    }

    pub async fn get_status_page(&self) -> Result<health::StatusPage> {
        let response = self
            .execute::<health::StatusPage, _>(&self.config.status_url, &())
            .await
            .map_err(|e| e.within("get_status_page"))?;
        response
            .into_first()
            .ok_or_else(|| Error::no_data("get_status_page", "No status found."))
    }

    /// Current state of the GlobalAPI from its public status page. Never fails: if the page
    /// can't be fetched every field reads [`health::UNAVAILABLE`].
    pub async fn api_status(&self) -> health::ServiceStatus {
        match self.get_status_page().await {
            Ok(page) => health::ServiceStatus::from_page(&page),
            Err(e) => {
                log::warn!("status page unavailable: {}", e);
                health::ServiceStatus::unavailable()
            }
        }
    }
}

fn doable_ids(filters: &[super::record_filters::RecordFilter]) -> Vec<u32> {
    filters.iter().map(|filter| filter.map_id).collect()
}

/// Catalog entries whose id is doable but not completed, filtered by tier and, for pro runs,
/// without the pro-only variants.
pub fn unfinished_maps(
    doable: &[u32],
    completed: &[Record],
    catalog: &[Map],
    run_type: RunType,
    tier: Option<u8>,
) -> Vec<String> {
    let completed = completed
        .iter()
        .map(|record| record.map_id)
        .collect::<HashSet<_>>();
    let unfinished = doable
        .iter()
        .copied()
        .filter(|id| !completed.contains(id))
        .collect::<HashSet<_>>();

    catalog
        .iter()
        .filter(|map| unfinished.contains(&map.id))
        .filter(|map| tier.map_or(true, |tier| map.difficulty == tier))
        .filter(|map| run_type == RunType::Tp || !map.name.starts_with(PRO_MAP_PREFIX))
        .map(|map| map.name.clone())
        .collect()
}

/// The record with the latest `created_on`. Ties go to the earlier record; unparseable
/// timestamps lose against any valid one.
pub fn most_recent(records: Vec<Record>) -> Option<Record> {
    let mut newest: Option<(Option<chrono::NaiveDateTime>, Record)> = None;
    for record in records {
        let created_at = record.created_at();
        let is_newer = match &newest {
            Some((best, _)) => created_at > *best,
            None => true,
        };
        if is_newer {
            newest = Some((created_at, record));
        }
    }
    newest.map(|(_, record)| record)
}

/// Looks `map` up in an already fetched catalog. Names match on a case-insensitive substring,
/// ids exactly.
pub fn is_global_map<'a>(map: &MapIdentifier, catalog: &'a [Map]) -> Result<&'a Map> {
    let found = match map {
        MapIdentifier::Name(name) => {
            let name = name.to_lowercase();
            catalog.iter().find(|map| map.name.contains(&name))
        }
        MapIdentifier::Id(id) => catalog.iter().find(|map| map.id == *id),
    };
    found.ok_or_else(|| Error::no_data("is_global_map", "This map is not global."))
}

/// Tier of the first catalog entry matching `map_name`, with the same matching rules as
/// [`is_global_map`].
pub fn map_tier(map_name: &str, catalog: &[Map]) -> Result<u8> {
    is_global_map(&MapIdentifier::Name(map_name.to_owned()), catalog)
        .map(|map| map.difficulty)
        .map_err(|e| e.within("map_tier"))
}

#[cfg(test)]
mod tests {
    use super::super::testing::{fake_api, filter, map, param, record, FakeTransport};
    use super::*;
    use crate::ErrorKind;

    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn catalog() -> Value {
        json!([
            map(1, "kz_beginnerblock_go", 1),
            map(2, "kz_lionharder", 3),
            map(3, "kz_erratum_v2", 5),
            map(4, "kzpro_concrete_c02", 4),
            map(5, "kz_tangent", 7),
        ])
    }

    fn registry(url: &str, query: &[(String, String)]) -> Result<Value, crate::error::BoxError> {
        match url {
            "http://registry.test/record_filters" => Ok(json!([
                filter(1, 200, false),
                filter(2, 200, false),
                filter(3, 200, false),
                filter(4, 200, false),
            ])),
            "http://registry.test/records/top" => {
                assert_eq!(param(query, "player_name"), Some("AlphaKeks"));
                Ok(json!([
                    record(10, 1, "2022-01-01T00:00:00"),
                    record(11, 3, "2022-01-02T00:00:00"),
                ]))
            }
            "http://registry.test/maps" => Ok(catalog()),
            other => panic!("unexpected request to {}", other),
        }
    }

    fn alphakeks() -> PlayerIdentifier {
        PlayerIdentifier::Name("AlphaKeks".to_owned())
    }

    #[tokio::test]
    async fn unfinished_is_doable_minus_completed() {
        let api = fake_api(FakeTransport::new(registry));

        let tp = api
            .get_unfinished_maps(&alphakeks(), Mode::KZTimer, RunType::Tp, None)
            .await
            .unwrap();
        assert_eq!(tp, vec!["kz_lionharder", "kzpro_concrete_c02"]);

        let tier_3 = api
            .get_unfinished_maps(&alphakeks(), Mode::KZTimer, RunType::Tp, Some(3))
            .await
            .unwrap();
        assert_eq!(tier_3, vec!["kz_lionharder"]);
    }

    #[tokio::test]
    async fn unfinished_pro_skips_pro_variants() {
        let api = fake_api(FakeTransport::new(registry));

        let pro = api
            .get_unfinished_maps(&alphakeks(), Mode::KZTimer, RunType::Pro, None)
            .await
            .unwrap();
        assert_eq!(pro, vec!["kz_lionharder"]);
    }

    #[tokio::test]
    async fn unfinished_fails_fast_with_origin() {
        let api = fake_api(FakeTransport::new(|url, query| {
            if url.ends_with("/maps") {
                Err("502 Bad Gateway".into())
            } else {
                registry(url, query)
            }
        }));

        let err = api
            .get_unfinished_maps(&alphakeks(), Mode::KZTimer, RunType::Tp, None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::TransportFailure);
        assert_eq!(err.origin(), "execute > get_maps > get_unfinished_maps");
    }

    #[test]
    fn origin_is_appended_not_replaced() {
        let inner = Error::no_data("fetch_maps", "No maps found.");
        let outer = inner.within("get_unfinished_maps");
        assert_eq!(outer.origin(), "fetch_maps > get_unfinished_maps");
        assert_eq!(outer.summary, "No maps found.");
    }

    #[tokio::test]
    async fn most_recent_run_across_modes() {
        let calls = AtomicUsize::new(0);
        let api = fake_api(FakeTransport::new(|_, query| {
            calls.fetch_add(1, Ordering::SeqCst);
            let mode = param(query, "modes_list_string");
            let tp = param(query, "has_teleports");
            match (mode, tp) {
                (Some("kz_simple"), Some("false")) => {
                    Ok(json!([record(1, 1, "2021-05-01T10:00:00")]))
                }
                (Some("kz_vanilla"), Some("true")) => Ok(json!([
                    record(2, 2, "2020-01-01T10:00:00"),
                    record(3, 3, "2021-05-02T09:00:00"),
                ])),
                (Some("kz_timer"), _) => Err("timed out".into()),
                _ => Ok(json!([])),
            }
        }));

        let run = api.get_most_recent_run(&alphakeks()).await.unwrap();
        assert_eq!(run.id, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 6);
    }

    #[tokio::test]
    async fn most_recent_run_without_any_records() {
        let api = fake_api(FakeTransport::new(|_, query| {
            if param(query, "has_teleports") == Some("true") {
                Err("timed out".into())
            } else {
                Ok(json!([]))
            }
        }));

        let err = api.get_most_recent_run(&alphakeks()).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::NoData);
        assert_eq!(err.origin(), "get_most_recent_run");
    }

    #[test]
    fn most_recent_prefers_first_on_ties() {
        let records = vec![
            record(1, 1, "not a date"),
            record(2, 1, "2021-01-01T00:00:00"),
            record(3, 1, "2021-01-01T00:00:00"),
        ]
        .into_iter()
        .map(|value| serde_json::from_value::<Record>(value).unwrap())
        .collect();

        assert_eq!(most_recent(records).unwrap().id, 2);
        assert!(most_recent(Vec::new()).is_none());
    }

    #[tokio::test]
    async fn health_tally() {
        let results = (0..12)
            .map(|i| {
                json!({
                    "status": 200,
                    "hostname": "kztimerglobal.com",
                    "duration": 120_000_000u64,
                    "conditionResults": [
                        { "condition": "[STATUS] == 200", "success": i < 7 },
                        { "condition": "[RESPONSE_TIME] < 1000", "success": i % 3 == 0 },
                    ],
                    "success": i < 7,
                    "timestamp": "2022-08-03T17:45:12Z",
                })
            })
            .collect::<Vec<_>>();

        let api = fake_api(FakeTransport::new(move |url, _| {
            assert_eq!(url, "http://health.test/statuses");
            Ok(json!({
                "name": "globalapi",
                "key": "_globalapi",
                "results": results,
                "events": [{ "type": "HEALTHY", "timestamp": "2022-08-01T00:00:00Z" }],
            }))
        }));

        let summary = api.health_check().await.unwrap();
        // i in 0..10: successes 0..7, fast 0, 3, 6, 9
        assert_eq!(summary.successful_responses, 7);
        assert_eq!(summary.fast_responses, 4);
    }

    #[test]
    fn global_map_lookup() {
        let catalog: Vec<Map> = serde_json::from_value(catalog()).unwrap();

        let by_name = is_global_map(&MapIdentifier::Name("LionHard".to_owned()), &catalog);
        assert_eq!(by_name.unwrap().id, 2);

        let by_id = is_global_map(&MapIdentifier::Id(5), &catalog);
        assert_eq!(by_id.unwrap().name, "kz_tangent");

        let err = is_global_map(&MapIdentifier::Id(99), &catalog).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NoData);
        assert_eq!(err.origin(), "is_global_map");
    }

    #[test]
    fn tier_lookup() {
        let catalog: Vec<Map> = serde_json::from_value(catalog()).unwrap();

        assert_eq!(map_tier("erratum", &catalog).unwrap(), 5);
        assert_eq!(map_tier("KZPRO_Concrete", &catalog).unwrap(), 4);

        let err = map_tier("kz_nonexistent", &catalog).unwrap_err();
        assert_eq!(err.kind, ErrorKind::NoData);
        assert_eq!(err.origin(), "is_global_map > map_tier");
    }

    #[tokio::test]
    async fn status_page_summary() {
        let api = fake_api(FakeTransport::new(|url, _| {
            assert_eq!(url, "http://status.test/summary.json");
            Ok(json!({
                "page": { "id": "x", "name": "GlobalAPI" },
                "status": { "indicator": "minor", "description": "Partially Degraded Service" },
                "components": [
                    { "name": "Website", "status": "operational" },
                    { "name": "API", "status": "degraded_performance" },
                ],
            }))
        }));

        let status = api.api_status().await;
        assert_eq!(status.status, "Partially Degraded Service");
        assert_eq!(status.front_end, "operational");
        assert_eq!(status.back_end, "degraded_performance");
    }

    #[tokio::test]
    async fn status_page_unreachable() {
        let api = fake_api(FakeTransport::new(|_, _| Err("connection reset".into())));

        let err = api.get_status_page().await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::TransportFailure);
        assert_eq!(err.origin(), "execute > get_status_page");
        assert_eq!(api.api_status().await, health::ServiceStatus::unavailable());
    }
}
