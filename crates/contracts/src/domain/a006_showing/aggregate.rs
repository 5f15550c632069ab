use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::a003_lot::LotId;
use crate::domain::a005_tenant::LotSummary;
use crate::domain::common::wire::opt_non_empty;
use crate::domain::common::AggregateRoot;
use crate::enums::ShowingStatus;

crate::define_id!(
    /// Showing id
    ShowingId
);

/// Scheduled viewing of a lot by a prospective tenant or buyer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Showing {
    pub id: ShowingId,
    pub lot_id: LotId,
    #[serde(default)]
    pub lot: Option<LotSummary>,
    pub client_name: String,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub client_email: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub client_phone: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    #[serde(default)]
    pub status: ShowingStatus,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub notes: Option<String>,
}

impl Showing {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.scheduled_at > now && !self.status.is_final()
    }
}

impl AggregateRoot for Showing {
    type Id = ShowingId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> String {
        format!("{} {}", self.client_name, self.scheduled_at.format("%Y-%m-%d %H:%M"))
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "showings"
    }

    fn element_name() -> &'static str {
        "Showing"
    }

    fn list_name() -> &'static str {
        "Showings"
    }
}

/// Body of the showing status update endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowingStatusUpdate {
    pub status: ShowingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
