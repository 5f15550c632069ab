//! Spreadsheet/CSV bulk import of lots: parsing, column mapping, row
//! transformation and the step-by-step wizard state.

pub mod error;
pub mod parser;
pub mod transform;
pub mod types;
pub mod wizard;

pub use error::ImportError;
pub use parser::{parse_file, parse_path, FileFormat, ParsedFile, ParsedRow, RawRow};
pub use transform::{transform_row, transform_rows, TransformOutcome};
pub use types::{ColumnMapping, DataType, ImportField, MappedRow};
pub use wizard::{ImportWizard, PreviewRow, WizardStep};
