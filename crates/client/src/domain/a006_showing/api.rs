use contracts::domain::a006_showing::{Showing, ShowingId, ShowingStatusUpdate};
use contracts::domain::common::AggregateId;
use contracts::enums::{ShowingStatus, UserRole};

use crate::shared::api::api_utils::{item_path, ListEnvelope};
use crate::shared::api::{ApiClient, ApiError, HttpMethod};

/// Which showing-management endpoints the signed-in user works against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowingScope {
    /// Showings of the manager's park
    Manager,
    /// Showings across every park of the company
    CompanyManager,
}

impl ShowingScope {
    pub fn for_role(role: UserRole) -> Option<Self> {
        match role {
            UserRole::Manager => Some(ShowingScope::Manager),
            UserRole::CompanyManager => Some(ShowingScope::CompanyManager),
            _ => None,
        }
    }

    pub fn base_path(&self) -> &'static str {
        match self {
            ShowingScope::Manager => "/api/manager/showings",
            ShowingScope::CompanyManager => "/api/company-manager/showings",
        }
    }

    fn status_path(&self, id: &ShowingId) -> String {
        format!("{}/status", item_path(self.base_path(), &id.as_string()))
    }
}

pub async fn fetch_showings(api: &ApiClient, scope: ShowingScope) -> Result<Vec<Showing>, ApiError> {
    let envelope: ListEnvelope<Showing> = api.query(scope.base_path(), None).await?;
    Ok(envelope.into_vec())
}

/// `PATCH <scope>/showings/:id/status`
pub async fn update_showing_status(
    api: &ApiClient,
    scope: ShowingScope,
    id: &ShowingId,
    update: &ShowingStatusUpdate,
) -> Result<Showing, ApiError> {
    let showing: Showing = api
        .send_json(
            HttpMethod::Patch,
            &scope.status_path(id),
            update,
            &[scope.base_path()],
        )
        .await?;
    tracing::info!(
        "Showing {} for {} is now {}",
        showing.id.as_string(),
        showing.client_name,
        showing.status.display_name()
    );
    Ok(showing)
}

pub async fn cancel_showing(
    api: &ApiClient,
    scope: ShowingScope,
    id: &ShowingId,
    reason: Option<String>,
) -> Result<Showing, ApiError> {
    let update = ShowingStatusUpdate {
        status: ShowingStatus::Cancelled,
        notes: reason,
    };
    update_showing_status(api, scope, id, &update).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_paths() {
        assert_eq!(
            ShowingScope::for_role(UserRole::CompanyManager).map(|s| s.base_path()),
            Some("/api/company-manager/showings")
        );
        assert_eq!(ShowingScope::for_role(UserRole::Tenant), None);
        let id = ShowingId::new(uuid::Uuid::nil());
        assert_eq!(
            ShowingScope::Manager.status_path(&id),
            "/api/manager/showings/00000000-0000-0000-0000-000000000000/status"
        );
    }
}
