/// Identity of a usecase, used in logs and on the import screens
pub trait UseCaseMetadata {
    /// `u501`
    fn usecase_index() -> &'static str;

    /// `bulk_import_lots`
    fn usecase_name() -> &'static str;

    /// Title shown to the user, e.g. "Bulk Upload Lots"
    fn display_name() -> &'static str;

    /// Endpoint the usecase submits to
    fn endpoint() -> &'static str;

    /// `u501_bulk_import_lots`
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
