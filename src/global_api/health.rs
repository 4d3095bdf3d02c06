use serde::{Deserialize, Serialize};

/// How many of the latest status entries [`HealthSummary`] looks at.
pub const SAMPLE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionResult {
    pub condition: String,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResult {
    pub status: u16,
    pub hostname: String,
    pub duration: u64,
    #[serde(rename = "conditionResults")]
    pub condition_results: Vec<ConditionResult>,
    pub success: bool,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: String,
}

/// Status history of the GlobalAPI as reported by the health monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub name: String,
    pub key: String,
    pub results: Vec<StatusResult>,
    pub events: Vec<StatusEvent>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HealthSummary {
    pub successful_responses: usize,
    pub fast_responses: usize,
}

impl HealthSummary {
    /// Tallies the first [`SAMPLE_SIZE`] results. The monitor reports the "responded
    /// successfully" condition first and the "responded fast" condition second; a missing
    /// condition counts as failed.
    pub fn from_report(report: &HealthReport) -> Self {
        let condition = |result: &StatusResult, index: usize| {
            result
                .condition_results
                .get(index)
                .map_or(false, |condition| condition.success)
        };

        let sample = &report.results[..report.results.len().min(SAMPLE_SIZE)];
        HealthSummary {
            successful_responses: sample.iter().filter(|r| condition(*r, 0)).count(),
            fast_responses: sample.iter().filter(|r| condition(*r, 1)).count(),
        }
    }
}

/// What the public status page reports when it can't be reached.
pub const UNAVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageIndicator {
    pub indicator: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageComponent {
    pub name: String,
    pub status: String,
}

/// Summary document of the public status page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPage {
    pub status: PageIndicator,
    pub components: Vec<PageComponent>,
}

/// Overall status plus the state of the front end and back end, the first two components of
/// the status page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub status: String,
    pub front_end: String,
    pub back_end: String,
}

impl ServiceStatus {
    pub fn unavailable() -> Self {
        Self {
            status: UNAVAILABLE.to_owned(),
            front_end: UNAVAILABLE.to_owned(),
            back_end: UNAVAILABLE.to_owned(),
        }
    }

    pub fn from_page(page: &StatusPage) -> Self {
        let component = |index: usize| {
            page.components
                .get(index)
                .map_or_else(|| UNAVAILABLE.to_owned(), |c| c.status.clone())
        };
        Self {
            status: page.status.description.clone(),
            front_end: component(0),
            back_end: component(1),
        }
    }
}
