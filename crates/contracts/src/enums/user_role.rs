use serde::{Deserialize, Serialize};

/// Role of the signed-in user; selects which dashboard they see
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Platform administrator
    Admin,
    /// Manages every park of one company
    CompanyManager,
    /// Manages a single park
    Manager,
    Tenant,
    Owner,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::CompanyManager => "COMPANY_MANAGER",
            UserRole::Manager => "MANAGER",
            UserRole::Tenant => "TENANT",
            UserRole::Owner => "OWNER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrator",
            UserRole::CompanyManager => "Company Manager",
            UserRole::Manager => "Park Manager",
            UserRole::Tenant => "Tenant",
            UserRole::Owner => "Owner",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::CompanyManager,
            UserRole::Manager,
            UserRole::Tenant,
            UserRole::Owner,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(code.trim()))
    }
}
