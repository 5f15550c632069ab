use contracts::domain::a005_tenant::{Tenant, TenantDto, TenantId};

use crate::shared::api::{crud, ApiClient, ApiError};

/// Tenant self-service: the signed-in tenant's own record
pub const MY_TENANCY_PATH: &str = "/api/tenant/me";

pub async fn fetch_tenants(api: &ApiClient) -> Result<Vec<Tenant>, ApiError> {
    crud::list::<Tenant>(api, None).await
}

pub async fn fetch_tenant(api: &ApiClient, id: &TenantId) -> Result<Tenant, ApiError> {
    crud::get::<Tenant>(api, id).await
}

pub async fn create_tenant(api: &ApiClient, dto: &TenantDto) -> Result<Tenant, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    let tenant = crud::create::<Tenant, _>(api, dto).await?;
    api.cache().invalidate_prefix("/api/lots");
    Ok(tenant)
}

pub async fn update_tenant(
    api: &ApiClient,
    id: &TenantId,
    dto: &TenantDto,
) -> Result<Tenant, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    let tenant = crud::update::<Tenant, _>(api, id, dto).await?;
    api.cache().invalidate_prefix("/api/lots");
    Ok(tenant)
}

pub async fn delete_tenant(api: &ApiClient, id: &TenantId) -> Result<(), ApiError> {
    crud::delete::<Tenant>(api, id).await?;
    api.cache().invalidate_prefix("/api/lots");
    Ok(())
}

pub async fn fetch_my_tenancy(api: &ApiClient) -> Result<Tenant, ApiError> {
    api.query(MY_TENANCY_PATH, None).await
}
