use serde::{Deserialize, Serialize};

use crate::domain::a002_park::ParkId;
use crate::domain::common::AggregateRoot;

crate::define_id!(
    /// Special status id
    SpecialStatusId
);

/// Default badge color for new special statuses
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Park-scoped tag (e.g. "Featured") that can be attached to a lot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecialStatus {
    pub id: SpecialStatusId,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    pub park_id: ParkId,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_true() -> bool {
    true
}

/// Short reference embedded in lots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpecialStatusSummary {
    pub id: SpecialStatusId,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

impl From<&SpecialStatus> for SpecialStatusSummary {
    fn from(s: &SpecialStatus) -> Self {
        Self {
            id: s.id,
            name: s.name.clone(),
            color: s.color.clone(),
        }
    }
}

impl AggregateRoot for SpecialStatus {
    type Id = SpecialStatusId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "special-statuses"
    }

    fn element_name() -> &'static str {
        "Special Status"
    }

    fn list_name() -> &'static str {
        "Special Statuses"
    }
}

/// DTO for creating/updating a special status
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialStatusDto {
    pub name: String,
    pub color: String,
    pub park_id: ParkId,
}

impl SpecialStatusDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Status name is required".into());
        }
        if !is_hex_color(&self.color) {
            return Err("Color must be a hex value like #3B82F6".into());
        }
        Ok(())
    }
}

/// `#RGB` or `#RRGGBB`
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.trim().strip_prefix('#') else {
        return false;
    };
    (hex.len() == 3 || hex.len() == 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}
