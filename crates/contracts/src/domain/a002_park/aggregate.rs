use serde::{Deserialize, Serialize};

use crate::domain::a001_company::{CompanyId, CompanySummary};
use crate::domain::common::wire::opt_non_empty;
use crate::domain::common::AggregateRoot;

crate::define_id!(
    /// Park id
    ParkId
);

/// Mobile-home park
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Park {
    pub id: ParkId,
    pub name: String,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "opt_non_empty")]
    pub zip: Option<String>,
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    #[serde(default)]
    pub company: Option<CompanySummary>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Park {
    /// Company id from either the flat field or the embedded summary
    pub fn effective_company_id(&self) -> Option<CompanyId> {
        self.company_id.or_else(|| self.company.as_ref().map(|c| c.id))
    }

    /// "City, ST" for list rows
    pub fn location(&self) -> String {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => format!("{}, {}", city, state),
            (Some(city), None) => city.clone(),
            (None, Some(state)) => state.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Short park reference embedded in lots
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParkSummary {
    pub id: ParkId,
    pub name: String,
    #[serde(default)]
    pub company_id: Option<CompanyId>,
    #[serde(default)]
    pub company: Option<CompanySummary>,
}

impl ParkSummary {
    pub fn effective_company_id(&self) -> Option<CompanyId> {
        self.company_id.or_else(|| self.company.as_ref().map(|c| c.id))
    }
}

impl From<&Park> for ParkSummary {
    fn from(p: &Park) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            company_id: p.company_id,
            company: p.company.clone(),
        }
    }
}

impl AggregateRoot for Park {
    type Id = ParkId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "parks"
    }

    fn element_name() -> &'static str {
        "Park"
    }

    fn list_name() -> &'static str {
        "Parks"
    }
}

/// DTO for creating/updating a park
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParkDto {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<CompanyId>,
}

impl ParkDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Park name is required".into());
        }
        if let Some(state) = &self.state {
            let state = state.trim();
            if !state.is_empty() && state.len() != 2 {
                return Err("State must be a two-letter code".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_id_from_embedded_summary() {
        let company = CompanyId::new_v4();
        let json = serde_json::json!({
            "id": ParkId::new_v4(),
            "name": "Oakwood",
            "company": { "id": company, "name": "Acme" }
        });
        let park: Park = serde_json::from_value(json).unwrap();
        assert_eq!(park.effective_company_id(), Some(company));
        assert!(park.is_active);
    }

    #[test]
    fn test_location() {
        let json = serde_json::json!({
            "id": ParkId::new_v4(),
            "name": "Oakwood",
            "city": "Tulsa",
            "state": "OK"
        });
        let park: Park = serde_json::from_value(json).unwrap();
        assert_eq!(park.location(), "Tulsa, OK");
    }

    #[test]
    fn test_validate_state() {
        let dto = ParkDto {
            name: "Oakwood".into(),
            state: Some("Oklahoma".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
