//! Application routes and the role-based route guard.
//!
//! The guard is a pure decision: callers perform the navigation.

use contracts::enums::UserRole;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Public listings
    Home,
    Login,
    /// Public lot page
    LotDetail(String),
    AdminDashboard,
    AdminCompanies,
    AdminParks,
    AdminLots,
    AdminBulkUpload,
    AdminLotPhotos(String),
    AdminTenants,
    CompanyManagerDashboard,
    CompanyManagerShowings,
    ManagerDashboard,
    ManagerShowings,
    TenantDashboard,
    OwnerDashboard,
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

const ADMIN: &[UserRole] = &[UserRole::Admin];
const COMPANY_MANAGER: &[UserRole] = &[UserRole::CompanyManager];
const MANAGER: &[UserRole] = &[UserRole::Manager];
const TENANT: &[UserRole] = &[UserRole::Tenant];
const OWNER: &[UserRole] = &[UserRole::Owner];

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::Login => "/login".into(),
            Route::LotDetail(id) => format!("/lots/{}", id),
            Route::AdminDashboard => "/admin".into(),
            Route::AdminCompanies => "/admin/companies".into(),
            Route::AdminParks => "/admin/parks".into(),
            Route::AdminLots => "/admin/lots".into(),
            Route::AdminBulkUpload => "/admin/lots/bulk-upload".into(),
            Route::AdminLotPhotos(id) => format!("/admin/lots/{}/photos", id),
            Route::AdminTenants => "/admin/tenants".into(),
            Route::CompanyManagerDashboard => "/company-manager".into(),
            Route::CompanyManagerShowings => "/company-manager/showings".into(),
            Route::ManagerDashboard => "/manager".into(),
            Route::ManagerShowings => "/manager/showings".into(),
            Route::TenantDashboard => "/tenant".into(),
            Route::OwnerDashboard => "/owner".into(),
        }
    }

    /// Parse a path; query string and trailing slash are ignored
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        let route = match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["lots", id] if !id.is_empty() => Route::LotDetail(id.to_string()),
            ["admin"] => Route::AdminDashboard,
            ["admin", "companies"] => Route::AdminCompanies,
            ["admin", "parks"] => Route::AdminParks,
            ["admin", "lots"] => Route::AdminLots,
            ["admin", "lots", "bulk-upload"] => Route::AdminBulkUpload,
            ["admin", "lots", id, "photos"] => Route::AdminLotPhotos(id.to_string()),
            ["admin", "tenants"] => Route::AdminTenants,
            ["company-manager"] => Route::CompanyManagerDashboard,
            ["company-manager", "showings"] => Route::CompanyManagerShowings,
            ["manager"] => Route::ManagerDashboard,
            ["manager", "showings"] => Route::ManagerShowings,
            ["tenant"] => Route::TenantDashboard,
            ["owner"] => Route::OwnerDashboard,
            _ => return None,
        };
        Some(route)
    }

    /// Roles allowed to open the route; `None` means public
    pub fn allowed_roles(&self) -> Option<&'static [UserRole]> {
        match self {
            Route::Home | Route::Login | Route::LotDetail(_) => None,
            Route::AdminDashboard
            | Route::AdminCompanies
            | Route::AdminParks
            | Route::AdminLots
            | Route::AdminBulkUpload
            | Route::AdminLotPhotos(_)
            | Route::AdminTenants => Some(ADMIN),
            Route::CompanyManagerDashboard | Route::CompanyManagerShowings => Some(COMPANY_MANAGER),
            Route::ManagerDashboard | Route::ManagerShowings => Some(MANAGER),
            Route::TenantDashboard => Some(TENANT),
            Route::OwnerDashboard => Some(OWNER),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Landing page of each role
pub fn home_for(role: UserRole) -> Route {
    match role {
        UserRole::Admin => Route::AdminDashboard,
        UserRole::CompanyManager => Route::CompanyManagerDashboard,
        UserRole::Manager => Route::ManagerDashboard,
        UserRole::Tenant => Route::TenantDashboard,
        UserRole::Owner => Route::OwnerDashboard,
    }
}

/// Decide whether `role` (or an anonymous visitor) may open `route`.
///
/// Anonymous visitors of protected routes go to login; signed-in users on a
/// route of another role, or on the login page, go to their own home.
pub fn guard(route: &Route, role: Option<UserRole>) -> RouteDecision {
    match (route, role) {
        (Route::Login, Some(role)) => RouteDecision::Redirect(home_for(role)),
        _ => match (route.allowed_roles(), role) {
            (None, _) => RouteDecision::Allow,
            (Some(_), None) => RouteDecision::Redirect(Route::Login),
            (Some(allowed), Some(role)) if allowed.contains(&role) => RouteDecision::Allow,
            (Some(_), Some(role)) => {
                tracing::debug!("{} may not open {}", role.code(), route);
                RouteDecision::Redirect(home_for(role))
            }
        },
    }
}
