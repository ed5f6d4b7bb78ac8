//! Usage statistics ledger.
//!
//! Three append-by-increment mappings keyed by calendar day, month and year.
//! Each running tick records exactly one unit (one elapsed second) into all
//! three mappings, using keys derived from the same instant. Entries are
//! never removed; unbounded growth is accepted for a personal-use timer.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::buckets;

/// Time-bucketed usage accounting, in seconds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageLedger {
    #[serde(default)]
    pub daily: BTreeMap<String, u64>,
    #[serde(default)]
    pub monthly: BTreeMap<String, u64>,
    #[serde(default)]
    pub yearly: BTreeMap<String, u64>,
}

impl UsageLedger {
    /// Record one elapsed second at `at`.
    ///
    /// Increments the day, month and year buckets derived from the same
    /// instant by exactly 1, creating absent entries at 0 first.
    pub fn record_one_unit(&mut self, at: DateTime<Utc>) {
        *self.daily.entry(buckets::day_key(at)).or_insert(0) += 1;
        *self.monthly.entry(buckets::month_key(at)).or_insert(0) += 1;
        *self.yearly.entry(buckets::year_key(at)).or_insert(0) += 1;
    }

    /// Seconds recorded for a specific day key.
    pub fn daily_seconds(&self, key: &str) -> u64 {
        self.daily.get(key).copied().unwrap_or(0)
    }

    /// Seconds recorded for a specific month key.
    pub fn monthly_seconds(&self, key: &str) -> u64 {
        self.monthly.get(key).copied().unwrap_or(0)
    }

    /// Seconds recorded for a specific year key.
    pub fn yearly_seconds(&self, key: &str) -> u64 {
        self.yearly.get(key).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn record_increments_all_three_buckets() {
        let mut ledger = UsageLedger::default();
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();

        for _ in 0..90 {
            ledger.record_one_unit(at);
        }

        assert_eq!(ledger.daily_seconds("2024-06-15"), 90);
        assert_eq!(ledger.monthly_seconds("2024-06"), 90);
        assert_eq!(ledger.yearly_seconds("2024"), 90);
    }

    #[test]
    fn buckets_split_across_day_boundary() {
        let mut ledger = UsageLedger::default();
        let before = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2024, 6, 16, 0, 0, 0).unwrap();

        ledger.record_one_unit(before);
        ledger.record_one_unit(after);

        assert_eq!(ledger.daily_seconds("2024-06-15"), 1);
        assert_eq!(ledger.daily_seconds("2024-06-16"), 1);
        assert_eq!(ledger.monthly_seconds("2024-06"), 2);
        assert_eq!(ledger.yearly_seconds("2024"), 2);
    }

    #[test]
    fn missing_keys_read_as_zero() {
        let ledger = UsageLedger::default();
        assert_eq!(ledger.daily_seconds("1999-01-01"), 0);
    }

    #[test]
    fn serializes_to_the_persisted_layout() {
        let mut ledger = UsageLedger::default();
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap();
        ledger.record_one_unit(at);

        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(json["daily"]["2024-06-15"], 1);
        assert_eq!(json["monthly"]["2024-06"], 1);
        assert_eq!(json["yearly"]["2024"], 1);
    }
}
