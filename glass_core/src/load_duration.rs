//! # Load Duration Cases
//!
//! Load-duration cases and their k_mod factors. Glass loses strength under
//! sustained load (static fatigue), so every design strength is evaluated
//! once per duration case.
//!
//! k_mod follows EN 16612 Annex C, `k_mod = 0.663 t^(-1/16)` with t in
//! hours, rounded to two places and capped at 1.0.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Load-duration case.
///
/// # Example
/// ```
/// use glass_core::load_duration::LoadDuration;
///
/// let wind = LoadDuration::MultipleGust;
/// assert_eq!(wind.kmod(), 0.74);
/// assert_eq!(wind.label(), "10 minutes – Multiple gust / Wind");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadDuration {
    /// 5 seconds: single gust
    SingleGust,
    /// 30 seconds: domestic balustrade
    DomesticBalustrade,
    /// 5 minutes: workplace/public balustrade
    PublicBalustrade,
    /// 10 minutes: multiple gust / wind
    MultipleGust,
    /// 30 minutes: maintenance access
    MaintenanceAccess,
    /// 5 hours: pedestrian access
    PedestrianAccess,
    /// 1 week: snow, short term
    SnowShortTerm,
    /// 1 month: snow, medium term
    SnowMediumTerm,
    /// 3 months: snow, long term
    SnowLongTerm,
    /// 50 years: permanent
    Permanent,
}

impl LoadDuration {
    /// All load-duration cases, shortest first (display order)
    pub const ALL: [LoadDuration; 10] = [
        LoadDuration::SingleGust,
        LoadDuration::DomesticBalustrade,
        LoadDuration::PublicBalustrade,
        LoadDuration::MultipleGust,
        LoadDuration::MaintenanceAccess,
        LoadDuration::PedestrianAccess,
        LoadDuration::SnowShortTerm,
        LoadDuration::SnowMediumTerm,
        LoadDuration::SnowLongTerm,
        LoadDuration::Permanent,
    ];

    /// Load duration factor k_mod
    pub fn kmod(&self) -> f64 {
        match self {
            LoadDuration::SingleGust => 1.00,
            LoadDuration::DomesticBalustrade => 0.89,
            LoadDuration::PublicBalustrade => 0.77,
            LoadDuration::MultipleGust => 0.74,
            LoadDuration::MaintenanceAccess => 0.69,
            LoadDuration::PedestrianAccess => 0.60,
            LoadDuration::SnowShortTerm => 0.48,
            LoadDuration::SnowMediumTerm => 0.44,
            LoadDuration::SnowLongTerm => 0.41,
            LoadDuration::Permanent => 0.29,
        }
    }

    /// Table label (duration – typical action)
    pub fn label(&self) -> &'static str {
        match self {
            LoadDuration::SingleGust => "5 seconds – Single gust",
            LoadDuration::DomesticBalustrade => "30 seconds – Domestic balustrade",
            LoadDuration::PublicBalustrade => "5 minutes – Workplace/public balustrade",
            LoadDuration::MultipleGust => "10 minutes – Multiple gust / Wind",
            LoadDuration::MaintenanceAccess => "30 minutes – Maintenance access",
            LoadDuration::PedestrianAccess => "5 hours – Pedestrian access",
            LoadDuration::SnowShortTerm => "1 week – Snow short term",
            LoadDuration::SnowMediumTerm => "1 month – Snow medium term",
            LoadDuration::SnowLongTerm => "3 months – Snow long term",
            LoadDuration::Permanent => "50 years – Permanent",
        }
    }

    /// Short code for command-line selection
    pub fn code(&self) -> &'static str {
        match self {
            LoadDuration::SingleGust => "single-gust",
            LoadDuration::DomesticBalustrade => "domestic-balustrade",
            LoadDuration::PublicBalustrade => "public-balustrade",
            LoadDuration::MultipleGust => "wind",
            LoadDuration::MaintenanceAccess => "maintenance",
            LoadDuration::PedestrianAccess => "pedestrian",
            LoadDuration::SnowShortTerm => "snow-short",
            LoadDuration::SnowMediumTerm => "snow-medium",
            LoadDuration::SnowLongTerm => "snow-long",
            LoadDuration::Permanent => "permanent",
        }
    }

    /// Parse a comma-separated list of codes (e.g. `"wind,snow-short"`).
    ///
    /// Blank entries are skipped; duplicates are kept once, in first-seen order.
    pub fn parse_list(s: &str) -> CalcResult<Vec<LoadDuration>> {
        let mut durations = Vec::new();
        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let duration: LoadDuration = part.parse()?;
            if !durations.contains(&duration) {
                durations.push(duration);
            }
        }
        Ok(durations)
    }
}

impl fmt::Display for LoadDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LoadDuration {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        LoadDuration::ALL
            .iter()
            .find(|d| d.code() == wanted)
            .copied()
            .ok_or_else(|| CalcError::option_not_found("load duration", s.trim()))
    }
}

/// One row of the load-duration table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadDurationEntry {
    /// Duration case
    pub duration: LoadDuration,
    /// Modification factor k_mod applied for this case
    pub kmod: f64,
}

/// Ordered load-duration table driving one evaluation.
///
/// Row order is kept for display; the arithmetic does not depend on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadDurationTable {
    entries: Vec<LoadDurationEntry>,
}

impl Default for LoadDurationTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl LoadDurationTable {
    /// The fixed ten-case table, shortest duration first.
    pub fn standard() -> Self {
        Self::from_durations(&LoadDuration::ALL)
    }

    /// Table containing only the given cases, with their standard k_mod.
    pub fn from_durations(durations: &[LoadDuration]) -> Self {
        Self {
            entries: durations
                .iter()
                .map(|&duration| LoadDurationEntry {
                    duration,
                    kmod: duration.kmod(),
                })
                .collect(),
        }
    }

    /// Table from explicit entries (k_mod may differ from the standard value).
    pub fn new(entries: Vec<LoadDurationEntry>) -> Self {
        Self { entries }
    }

    /// Entries in table order
    pub fn entries(&self) -> &[LoadDurationEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// k_mod for a duration, if the table has it
    pub fn kmod_for(&self, duration: LoadDuration) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.duration == duration)
            .map(|e| e.kmod)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmod_values() {
        assert_eq!(LoadDuration::SingleGust.kmod(), 1.00);
        assert_eq!(LoadDuration::DomesticBalustrade.kmod(), 0.89);
        assert_eq!(LoadDuration::MultipleGust.kmod(), 0.74);
        assert_eq!(LoadDuration::SnowShortTerm.kmod(), 0.48);
        assert_eq!(LoadDuration::Permanent.kmod(), 0.29);
    }

    #[test]
    fn test_kmod_in_unit_interval_and_decreasing() {
        let factors: Vec<f64> = LoadDuration::ALL.iter().map(|d| d.kmod()).collect();
        for pair in factors.windows(2) {
            assert!(pair[0] > pair[1]);
        }
        assert!(factors.iter().all(|&k| k > 0.0 && k <= 1.0));
    }

    #[test]
    fn test_kmod_follows_annex_c_curve() {
        // k_mod = 0.663 t^(-1/16), t in hours, capped at 1.0
        let hours = [
            (LoadDuration::DomesticBalustrade, 30.0 / 3600.0),
            (LoadDuration::MultipleGust, 10.0 / 60.0),
            (LoadDuration::PedestrianAccess, 5.0),
            (LoadDuration::Permanent, 50.0 * 365.0 * 24.0),
        ];
        for (duration, t) in hours {
            let expected = (0.663 * f64::powf(t, -1.0 / 16.0)).min(1.0);
            assert!((duration.kmod() - expected).abs() < 0.01, "{:?}", duration);
        }
    }

    #[test]
    fn test_standard_table_order() {
        let table = LoadDurationTable::standard();
        assert_eq!(table.len(), 10);
        assert_eq!(table.entries()[0].duration, LoadDuration::SingleGust);
        assert_eq!(table.entries()[9].duration, LoadDuration::Permanent);
        assert_eq!(table.kmod_for(LoadDuration::SnowLongTerm), Some(0.41));
    }

    #[test]
    fn test_partial_table() {
        let table = LoadDurationTable::from_durations(&[LoadDuration::Permanent]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.kmod_for(LoadDuration::SingleGust), None);
        assert!(LoadDurationTable::new(Vec::new()).is_empty());
    }

    #[test]
    fn test_parse_list() {
        let list = LoadDuration::parse_list("wind, snow-short,,wind").unwrap();
        assert_eq!(list, vec![LoadDuration::MultipleGust, LoadDuration::SnowShortTerm]);
        assert!(LoadDuration::parse_list("hurricane").is_err());
        assert!(LoadDuration::parse_list("").unwrap().is_empty());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&LoadDuration::SnowMediumTerm).unwrap();
        assert_eq!(json, "\"SnowMediumTerm\"");

        let table = LoadDurationTable::standard();
        let roundtrip: LoadDurationTable = serde_json::from_str(&serde_json::to_string(&table).unwrap()).unwrap();
        assert_eq!(roundtrip, table);
    }
}
