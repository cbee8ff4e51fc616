//! File-backed store for saved calculation results
//!
//! The engine itself never persists anything; callers that want to keep
//! results for later comparison (the CLI's `--save` flag) own a
//! `CalculationStore`, which maps ids to stored results in a JSON file
//! with load-on-open, append, and delete.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::projection::{ScenarioResult, StrategyComparison};

/// Default location of the saved-calculation file
pub const DEFAULT_STORE_PATH: &str = "data/saved_calculations.json";

/// A result worth keeping, in any of the engine's output shapes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SavedResult {
    /// A single EMI figure with the inputs that produced it
    Emi {
        principal: f64,
        annual_rate_percent: f64,
        tenure_months: u32,
        emi: f64,
    },
    /// A growth or lump-sum projection
    Growth(ScenarioResult),
    /// A prepay-vs-invest comparison
    Comparison(StrategyComparison),
}

/// One saved entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedCalculation {
    /// Store-assigned identifier, unique within the file
    pub id: u32,

    /// Caller-supplied label
    pub label: String,

    /// When the entry was saved
    pub saved_at: DateTime<Utc>,

    /// The stored result
    pub result: SavedResult,
}

/// JSON-file-backed calculation store
#[derive(Debug)]
pub struct CalculationStore {
    path: PathBuf,
    entries: Vec<SavedCalculation>,
}

impl CalculationStore {
    /// Open a store, loading existing entries if the file is present
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            Vec::new()
        };
        log::debug!("opened store {:?} with {} entries", path, entries.len());
        Ok(Self { path, entries })
    }

    /// All saved entries, in insertion order
    pub fn entries(&self) -> &[SavedCalculation] {
        &self.entries
    }

    /// Look up a single entry by id
    pub fn get(&self, id: u32) -> Option<&SavedCalculation> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Append a result and persist. Returns the assigned id.
    pub fn save(&mut self, label: &str, result: SavedResult) -> Result<u32, Box<dyn Error>> {
        let id = self.entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        self.entries.push(SavedCalculation {
            id,
            label: label.to_string(),
            saved_at: Utc::now(),
            result,
        });
        self.persist()?;
        Ok(id)
    }

    /// Delete an entry by id and persist. Returns whether it existed.
    pub fn delete(&mut self, id: u32) -> Result<bool, Box<dyn Error>> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() != before;
        if removed {
            self.persist()?;
        }
        Ok(removed)
    }

    fn persist(&self) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.entries)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::Frequency;
    use crate::projection::project_contribution_growth;

    fn temp_store_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fincalc_store_{}_{}.json", std::process::id(), name))
    }

    #[test]
    fn test_save_and_reload() {
        let path = temp_store_path("roundtrip");
        std::fs::remove_file(&path).ok();

        let growth =
            project_contribution_growth(12_500.0, 7.1, 180, Frequency::Monthly).unwrap();

        let mut store = CalculationStore::open(&path).unwrap();
        assert!(store.entries().is_empty());
        let id = store.save("ppf 15y", SavedResult::Growth(growth)).unwrap();
        assert_eq!(id, 1);

        // Reopen from disk
        let store = CalculationStore::open(&path).unwrap();
        assert_eq!(store.entries().len(), 1);
        let entry = store.get(1).unwrap();
        assert_eq!(entry.label, "ppf 15y");
        match &entry.result {
            SavedResult::Growth(result) => assert_eq!(result.snapshots.len(), 15),
            other => panic!("unexpected saved kind: {:?}", other),
        }

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_delete_and_id_assignment() {
        let path = temp_store_path("delete");
        std::fs::remove_file(&path).ok();

        let mut store = CalculationStore::open(&path).unwrap();
        let first = store
            .save(
                "emi",
                SavedResult::Emi {
                    principal: 5_000_000.0,
                    annual_rate_percent: 8.5,
                    tenure_months: 120,
                    emi: 61_997.0,
                },
            )
            .unwrap();
        let second = store
            .save(
                "emi again",
                SavedResult::Emi {
                    principal: 1_000_000.0,
                    annual_rate_percent: 9.0,
                    tenure_months: 60,
                    emi: 20_758.0,
                },
            )
            .unwrap();
        assert_eq!((first, second), (1, 2));

        assert!(store.delete(1).unwrap());
        assert!(!store.delete(1).unwrap());
        assert_eq!(store.entries().len(), 1);

        // Ids never reuse a live maximum
        let third = store
            .save(
                "fd",
                SavedResult::Emi {
                    principal: 0.0,
                    annual_rate_percent: 0.0,
                    tenure_months: 1,
                    emi: 0.0,
                },
            )
            .unwrap();
        assert_eq!(third, 3);

        std::fs::remove_file(&path).ok();
    }
}
