use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenantStatus {
    #[default]
    Active,
    Pending,
    Inactive,
}

impl TenantStatus {
    pub fn code(&self) -> &'static str {
        match self {
            TenantStatus::Active => "ACTIVE",
            TenantStatus::Pending => "PENDING",
            TenantStatus::Inactive => "INACTIVE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TenantStatus::Active => "Active",
            TenantStatus::Pending => "Pending",
            TenantStatus::Inactive => "Inactive",
        }
    }
}
