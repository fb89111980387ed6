use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// One region × time observation from a panel dataset.
///
/// The source file carries treatment as a numeric 0/1 flag; the loader
/// converts it to `treated` before a record is constructed, so downstream
/// code never re-parses column text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    /// Unit of analysis (kept as text, e.g. a country or province name).
    pub region: String,
    /// Observation period marker.
    pub time: f64,
    /// Whether this observation belongs to the treated group.
    pub treated: bool,
    /// Observed outcome value.
    pub outcome: f64,
}

/// An immutable, ordered panel of observations.
///
/// Construction rejects duplicate `(region, time)` pairs so estimators can
/// rely on at most one observation per region per period. Estimators consume
/// the panel read-only.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    records: Vec<PanelRecord>,
}

fn check_unique(records: &[PanelRecord]) -> Result<()> {
    let mut seen: BTreeSet<(&str, u64)> = BTreeSet::new();
    for record in records {
        if !seen.insert((record.region.as_str(), record.time.to_bits())) {
            return Err(ModelError::DuplicateObservation {
                region: record.region.clone(),
                time: record.time,
            });
        }
    }
    Ok(())
}

impl Panel {
    /// Build a panel, enforcing `(region, time)` uniqueness.
    pub fn new(records: Vec<PanelRecord>) -> Result<Self> {
        check_unique(&records)?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PanelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All region names, sorted.
    pub fn regions(&self) -> BTreeSet<&str> {
        self.records
            .iter()
            .map(|record| record.region.as_str())
            .collect()
    }

    /// Regions with a treated observation at `time`, sorted.
    ///
    /// The report driver takes the first entry when it has to pick a single
    /// treated unit, so the lexicographic ordering here is load-bearing.
    pub fn treated_regions_at(&self, time: f64) -> BTreeSet<&str> {
        self.records
            .iter()
            .filter(|record| record.treated && record.time == time)
            .map(|record| record.region.as_str())
            .collect()
    }

    /// Outcomes for one treatment group in one period, in record order.
    pub fn outcomes(&self, treated: bool, time: f64) -> Vec<f64> {
        self.records
            .iter()
            .filter(|record| record.treated == treated && record.time == time)
            .map(|record| record.outcome)
            .collect()
    }

    /// Region → outcome map for one period.
    pub fn outcomes_by_region(&self, time: f64) -> BTreeMap<&str, f64> {
        self.records
            .iter()
            .filter(|record| record.time == time)
            .map(|record| (record.region.as_str(), record.outcome))
            .collect()
    }
}
