/// Trait for aggregate roots exposed by the REST backend
///
/// Instance data comes from the server as-is; the static metadata drives
/// endpoint paths and UI labels.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance methods
    // ============================================================================

    /// Record id
    fn id(&self) -> Self::Id;

    /// Human readable name of the record (lot number, park name, ...)
    fn display_name(&self) -> String;

    // ============================================================================
    // Static aggregate metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a003")
    fn aggregate_index() -> &'static str;

    /// REST collection segment (e.g. "lots" for `/api/lots`)
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Lot")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Lots")
    fn list_name() -> &'static str;

    // ============================================================================
    // Default methods
    // ============================================================================

    /// Full system name (e.g. "a003_lots")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Collection endpoint (e.g. "/api/lots")
    fn api_path() -> String {
        format!("/api/{}", Self::collection_name())
    }
}
