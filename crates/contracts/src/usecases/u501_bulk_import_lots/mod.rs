pub mod request;
pub mod response;

pub use request::{BulkImportRequest, BulkLotRow};
pub use response::{BulkImportResponse, RowError, RowWarning};

use crate::usecases::common::UseCaseMetadata;

/// Endpoint accepting the whole batch in one request
pub const BULK_IMPORT_PATH: &str = "/api/admin/lots/bulk";

pub struct BulkImportLots;

impl UseCaseMetadata for BulkImportLots {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "bulk_import_lots"
    }

    fn display_name() -> &'static str {
        "Bulk Upload Lots"
    }

    fn endpoint() -> &'static str {
        BULK_IMPORT_PATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata() {
        assert_eq!(BulkImportLots::full_name(), "u501_bulk_import_lots");
        assert_eq!(BulkImportLots::endpoint(), "/api/admin/lots/bulk");
    }
}
