use thiserror::Error;

use super::wizard::WizardStep;

/// Errors raised on the client side of the bulk import, before or instead of
/// the server call
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ImportError {
    #[error("Unsupported file type \"{0}\". Please upload a .csv, .xlsx or .xls file")]
    UnsupportedFormat(String),

    #[error("File is too large ({size} bytes); the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("The file has no header row")]
    EmptyFile,

    #[error("Column \"{0}\" appears more than once in the header row")]
    DuplicateHeader(String),

    #[error("Failed to parse file: {0}")]
    Parse(String),

    #[error("Missing required mappings: {}", .0.join(", "))]
    MissingMappings(Vec<String>),

    #[error("Column \"{0}\" does not exist in the uploaded file")]
    UnknownColumn(String),

    #[error("The file contains no data rows")]
    NoRows,

    #[error("Cannot {action} during the {step} step")]
    InvalidStep {
        step: WizardStep,
        action: &'static str,
    },
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Parse(e.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(e: calamine::Error) -> Self {
        ImportError::Parse(e.to_string())
    }
}
