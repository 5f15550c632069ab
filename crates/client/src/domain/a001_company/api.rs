use contracts::domain::a001_company::{Company, CompanyDto, CompanyId};

use crate::shared::api::{crud, ApiClient, ApiError};

pub async fn fetch_companies(api: &ApiClient) -> Result<Vec<Company>, ApiError> {
    crud::list::<Company>(api, None).await
}

pub async fn fetch_company(api: &ApiClient, id: &CompanyId) -> Result<Company, ApiError> {
    crud::get::<Company>(api, id).await
}

pub async fn create_company(api: &ApiClient, dto: &CompanyDto) -> Result<Company, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    crud::create::<Company, _>(api, dto).await
}

pub async fn update_company(
    api: &ApiClient,
    id: &CompanyId,
    dto: &CompanyDto,
) -> Result<Company, ApiError> {
    dto.validate().map_err(ApiError::Validation)?;
    crud::update::<Company, _>(api, id, dto).await
}

/// Parks of a deleted company become unassigned server-side, so park lists go too
pub async fn delete_company(api: &ApiClient, id: &CompanyId) -> Result<(), ApiError> {
    crud::delete::<Company>(api, id).await?;
    api.cache().invalidate_prefix("/api/parks");
    Ok(())
}
