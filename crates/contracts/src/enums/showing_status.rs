use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShowingStatus {
    #[default]
    Scheduled,
    Confirmed,
    Completed,
    Cancelled,
    NoShow,
}

impl ShowingStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ShowingStatus::Scheduled => "SCHEDULED",
            ShowingStatus::Confirmed => "CONFIRMED",
            ShowingStatus::Completed => "COMPLETED",
            ShowingStatus::Cancelled => "CANCELLED",
            ShowingStatus::NoShow => "NO_SHOW",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShowingStatus::Scheduled => "Scheduled",
            ShowingStatus::Confirmed => "Confirmed",
            ShowingStatus::Completed => "Completed",
            ShowingStatus::Cancelled => "Cancelled",
            ShowingStatus::NoShow => "No Show",
        }
    }

    /// Finished showings can no longer be rescheduled or cancelled
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            ShowingStatus::Completed | ShowingStatus::Cancelled | ShowingStatus::NoShow
        )
    }
}
