//! Live usage-statistics feed for the admin view.

use serde::{Deserialize, Serialize};

/// One aggregate usage record, keyed by date. Field names follow the wire
/// payload of the stats channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub date: String,
    #[serde(rename = "Guest")]
    pub guests: u64,
    #[serde(rename = "Logged in")]
    pub logged_in: u64,
    #[serde(rename = "Manager")]
    pub managers: u64,
    #[serde(rename = "Owner")]
    pub owners: u64,
    #[serde(rename = "System Manager")]
    pub system_managers: u64,
}

/// Ordered stats records as delivered by the channel.
///
/// The server re-emits the current day's aggregate as it grows, so an
/// incoming record whose date equals the trailing record's replaces it
/// instead of appending.
#[derive(Debug, Default)]
pub struct StatsFeed {
    records: Vec<StatsRecord>,
}

impl StatsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: StatsRecord) {
        if self
            .records
            .last()
            .is_some_and(|last| last.date == record.date)
        {
            self.records.pop();
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[StatsRecord] {
        &self.records
    }
}
