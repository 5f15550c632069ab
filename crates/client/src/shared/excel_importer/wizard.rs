use contracts::shared::pricing::{display_price, PriceContext};
use contracts::usecases::u501_bulk_import_lots::{BulkImportRequest, BulkImportResponse, RowWarning};

use super::error::ImportError;
use super::parser::{parse_file, ParsedFile};
use super::transform::{transform_row, transform_rows};
use super::types::{ColumnMapping, ImportField, MappedRow};
use crate::shared::config::ImportConfig;

/// Simulated progress never passes this until the server answers
const PROGRESS_CAP: u8 = 90;
const PROGRESS_STEP: u8 = 10;

/// Bulk import wizard steps, in order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Upload,
    Mapping,
    Preview,
    Importing,
    Results,
}

impl WizardStep {
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Upload => "upload",
            WizardStep::Mapping => "mapping",
            WizardStep::Preview => "preview",
            WizardStep::Importing => "importing",
            WizardStep::Results => "results",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Preview table row: mapped values plus the price the lot would display
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRow {
    pub mapped: MappedRow,
    pub display_price: String,
}

/// State of one bulk import attempt.
///
/// Transitions are only allowed from the step they belong to; anything else
/// returns `ImportError::InvalidStep` and leaves the state unchanged.
#[derive(Debug, Clone)]
pub struct ImportWizard {
    step: WizardStep,
    file: Option<ParsedFile>,
    mapping: ColumnMapping,
    require_park_name: bool,
    max_upload_bytes: u64,
    progress: u8,
    error: Option<String>,
    local_warnings: Vec<RowWarning>,
    result: Option<BulkImportResponse>,
}

impl ImportWizard {
    pub fn new(config: &ImportConfig) -> Self {
        Self {
            step: WizardStep::Upload,
            file: None,
            mapping: ColumnMapping::new(),
            require_park_name: config.require_park_name,
            max_upload_bytes: config.max_upload_bytes,
            progress: 0,
            error: None,
            local_warnings: Vec::new(),
            result: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Last error shown inline for the current step
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn file(&self) -> Option<&ParsedFile> {
        self.file.as_ref()
    }

    pub fn mapping(&self) -> &ColumnMapping {
        &self.mapping
    }

    pub fn result(&self) -> Option<&BulkImportResponse> {
        self.result.as_ref()
    }

    fn expect_step(&self, step: WizardStep, action: &'static str) -> Result<(), ImportError> {
        if self.step == step {
            Ok(())
        } else {
            Err(ImportError::InvalidStep {
                step: self.step,
                action,
            })
        }
    }

    fn record<T>(&mut self, result: Result<T, ImportError>) -> Result<T, ImportError> {
        if let Err(e) = &result {
            self.error = Some(e.to_string());
        }
        result
    }

    /// Parse an upload and move to column mapping with suggested columns
    pub fn load_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), ImportError> {
        self.expect_step(WizardStep::Upload, "load a file")?;
        let parsed = parse_file(file_name, bytes, self.max_upload_bytes);
        let parsed = self.record(parsed)?;
        self.load_parsed(parsed)
    }

    /// Accept an already parsed file
    pub fn load_parsed(&mut self, parsed: ParsedFile) -> Result<(), ImportError> {
        self.expect_step(WizardStep::Upload, "load a file")?;
        if parsed.rows.is_empty() {
            return self.record(Err(ImportError::NoRows));
        }

        self.mapping = ColumnMapping::suggest(&parsed.headers);
        tracing::debug!(
            "Suggested mapping for {}: {:?}",
            parsed.file_name,
            self.mapping
        );
        self.file = Some(parsed);
        self.error = None;
        self.step = WizardStep::Mapping;
        Ok(())
    }

    /// Assign a source column to a field, or skip it with `None`
    pub fn set_mapping(
        &mut self,
        field: ImportField,
        column: Option<String>,
    ) -> Result<(), ImportError> {
        self.expect_step(WizardStep::Mapping, "change the mapping")?;
        if let Some(column) = column.as_deref() {
            let known = self
                .file
                .as_ref()
                .is_some_and(|f| f.headers.iter().any(|h| h == column));
            if !known {
                return self.record(Err(ImportError::UnknownColumn(column.to_string())));
            }
        }
        self.mapping.set(field, column);
        Ok(())
    }

    /// Required fields still set to skip
    pub fn validate_mapping(&self) -> Vec<ImportField> {
        self.mapping.missing_required(self.require_park_name)
    }

    pub fn confirm_mapping(&mut self) -> Result<(), ImportError> {
        self.expect_step(WizardStep::Mapping, "confirm the mapping")?;
        let missing = self.validate_mapping();
        if !missing.is_empty() {
            let titles = missing.iter().map(|f| f.title().to_string()).collect();
            return self.record(Err(ImportError::MissingMappings(titles)));
        }
        self.error = None;
        self.step = WizardStep::Preview;
        Ok(())
    }

    /// Preview → Mapping
    pub fn back_to_mapping(&mut self) -> Result<(), ImportError> {
        self.expect_step(WizardStep::Preview, "go back to mapping")?;
        self.error = None;
        self.step = WizardStep::Mapping;
        Ok(())
    }

    /// Every parsed row with the mapping applied; rows numbered from 1
    pub fn mapped_rows(&self) -> Vec<MappedRow> {
        self.file
            .iter()
            .flat_map(|f| f.rows.iter())
            .map(|row| self.mapping.apply(row.number, &row.cells))
            .collect()
    }

    /// First `limit` mapped rows with their display price
    pub fn preview(&self, limit: usize) -> Vec<PreviewRow> {
        self.mapped_rows()
            .into_iter()
            .take(limit)
            .map(|mapped| {
                let lot = transform_row(&mapped).lot;
                PreviewRow {
                    display_price: display_price(&lot.price_fields(), PriceContext::Listing),
                    mapped,
                }
            })
            .collect()
    }

    /// Build the batch request and enter the importing step
    pub fn begin_import(&mut self) -> Result<BulkImportRequest, ImportError> {
        self.expect_step(WizardStep::Preview, "start the import")?;
        let (request, warnings) = transform_rows(&self.mapped_rows());
        if request.is_empty() {
            return self.record(Err(ImportError::NoRows));
        }

        for warning in &warnings {
            tracing::warn!("Row {}: {}", warning.row, warning.warning);
        }
        self.local_warnings = warnings;
        self.error = None;
        self.progress = 0;
        self.step = WizardStep::Importing;
        Ok(request)
    }

    /// Advance the simulated progress bar; stays below 100 until the server answers
    pub fn tick_progress(&mut self) -> u8 {
        if self.step == WizardStep::Importing {
            self.progress = (self.progress + PROGRESS_STEP).min(PROGRESS_CAP);
        }
        self.progress
    }

    pub fn finish_import(&mut self, response: BulkImportResponse) -> Result<(), ImportError> {
        self.expect_step(WizardStep::Importing, "finish the import")?;
        tracing::info!(
            "Bulk import finished: {} successful, {} failed, {} warnings",
            response.successful.len(),
            response.failed.len(),
            response.warnings.len()
        );
        self.progress = 100;
        self.result = Some(response);
        self.step = WizardStep::Results;
        Ok(())
    }

    /// Request failed as a whole; back to preview so it can be retried
    pub fn fail_import(&mut self, message: impl Into<String>) -> Result<(), ImportError> {
        self.expect_step(WizardStep::Importing, "fail the import")?;
        let message = message.into();
        tracing::error!("Bulk import failed: {}", message);
        self.error = Some(message);
        self.progress = 0;
        self.step = WizardStep::Preview;
        Ok(())
    }

    /// Local coercion warnings followed by server warnings, ordered by row
    pub fn warnings(&self) -> Vec<RowWarning> {
        let mut all = self.local_warnings.clone();
        if let Some(result) = &self.result {
            all.extend(result.warnings.iter().cloned());
        }
        all.sort_by_key(|w| w.row);
        all
    }

    /// Start over from upload
    pub fn reset(&mut self) {
        let require_park_name = self.require_park_name;
        let max_upload_bytes = self.max_upload_bytes;
        *self = Self {
            require_park_name,
            max_upload_bytes,
            ..Self::new(&ImportConfig::default())
        };
    }
}
