use serde::{Deserialize, Serialize};

use crate::domain::a003_lot::Lot;

/// Row rejected by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowError {
    pub row: usize,
    pub error: String,
}

/// Row created with a caveat (e.g. unknown park, lot left unassigned)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowWarning {
    pub row: usize,
    #[serde(alias = "message")]
    pub warning: String,
}

/// Structured result of a bulk import
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BulkImportResponse {
    #[serde(default)]
    pub successful: Vec<Lot>,
    #[serde(default)]
    pub failed: Vec<RowError>,
    /// Older servers do not send warnings
    #[serde(default)]
    pub warnings: Vec<RowWarning>,
}

impl BulkImportResponse {
    pub fn total(&self) -> usize {
        self.successful.len() + self.failed.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// Lines for the results screen: `Row 4: Park "X" not found`
    pub fn failure_lines(&self) -> Vec<String> {
        self.failed
            .iter()
            .map(|f| format!("Row {}: {}", f.row, f.error))
            .collect()
    }

    pub fn warning_lines(&self) -> Vec<String> {
        self.warnings
            .iter()
            .map(|w| format!("Row {}: {}", w.row, w.warning))
            .collect()
    }
}
