use serde::{Deserialize, Serialize};

use crate::domain::common::wire::opt_non_empty;
use crate::domain::common::AggregateRoot;

crate::define_id!(
    /// Company id
    CompanyId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Operator company owning one or more parks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub contact_phone: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// Short company reference embedded in other records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: CompanyId,
    pub name: String,
}

impl AggregateRoot for Company {
    type Id = CompanyId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "companies"
    }

    fn element_name() -> &'static str {
        "Company"
    }

    fn list_name() -> &'static str {
        "Companies"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO for creating/updating a company
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CompanyDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Company name is required".into());
        }
        if let Some(email) = &self.contact_email {
            if !email.trim().is_empty() && !email.contains('@') {
                return Err("Contact email is not a valid address".into());
            }
        }
        Ok(())
    }
}

impl From<&Company> for CompanyDto {
    fn from(c: &Company) -> Self {
        Self {
            name: c.name.clone(),
            contact_email: c.contact_email.clone(),
            contact_phone: c.contact_phone.clone(),
            address: c.address.clone(),
        }
    }
}
