use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::time::MissedTickBehavior;

use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_bulk_import_lots::{BulkImportLots, BulkImportResponse};

use crate::domain::a003_lot::api::bulk_create_lots;
use crate::shared::api::{ApiClient, ApiError};
use crate::shared::config::ImportConfig;
use crate::shared::excel_importer::{ImportError, ImportWizard};

#[derive(Debug, Error)]
pub enum ImportRunError {
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl ImportRunError {
    /// Message for the error toast
    pub fn user_message(&self) -> String {
        match self {
            ImportRunError::Import(e) => e.to_string(),
            ImportRunError::Api(e) => e.user_message(),
        }
    }
}

/// Executor for the bulk lot import
#[derive(Clone)]
pub struct ImportExecutor {
    api: Arc<ApiClient>,
    tick: Duration,
}

impl ImportExecutor {
    pub fn new(api: Arc<ApiClient>, config: &ImportConfig) -> Self {
        Self {
            api,
            tick: Duration::from_millis(config.progress_tick_ms.max(1)),
        }
    }

    /// Submit the previewed rows as one batch.
    ///
    /// While the request is in flight the wizard's simulated progress advances
    /// on every tick and `on_progress` sees each value. On success the created
    /// lots are merged into cached lot lists and the wizard shows results; on
    /// failure it returns to preview with the extracted error message.
    pub async fn run_import<F>(
        &self,
        wizard: &mut ImportWizard,
        mut on_progress: F,
    ) -> Result<BulkImportResponse, ImportRunError>
    where
        F: FnMut(u8),
    {
        let request = wizard.begin_import()?;
        tracing::info!(
            "{} ({}): {} rows to {}",
            BulkImportLots::full_name(),
            BulkImportLots::display_name(),
            request.len(),
            BulkImportLots::endpoint()
        );
        on_progress(wizard.progress());

        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately
        ticker.tick().await;

        let submit = bulk_create_lots(&self.api, &request);
        tokio::pin!(submit);

        let outcome = loop {
            tokio::select! {
                result = &mut submit => break result,
                _ = ticker.tick() => on_progress(wizard.tick_progress()),
            }
        };

        match outcome {
            Ok(response) => {
                self.api.cache().merge_created_lots(&response.successful);
                wizard.finish_import(response.clone())?;
                on_progress(wizard.progress());
                Ok(response)
            }
            Err(e) => {
                wizard.fail_import(e.user_message())?;
                Err(e.into())
            }
        }
    }
}
