use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// Value type expected in a mapped column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    String,
    Number,
    Integer,
    Status,
    Date,
}

/// Lot field a spreadsheet column can be mapped onto
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ImportField {
    NameOrNumber,
    ParkName,
    ParkId,
    Status,
    Price,
    PriceForRent,
    PriceForSale,
    PriceRentToOwn,
    PriceContractForDeed,
    DepositForRent,
    DepositForSale,
    DepositRentToOwn,
    DepositContractForDeed,
    Description,
    Bedrooms,
    Bathrooms,
    SqFt,
    HouseManufacturer,
    HouseModel,
    AvailableDate,
}

impl ImportField {
    pub const ALL: [ImportField; 20] = [
        ImportField::NameOrNumber,
        ImportField::ParkName,
        ImportField::ParkId,
        ImportField::Status,
        ImportField::Price,
        ImportField::PriceForRent,
        ImportField::PriceForSale,
        ImportField::PriceRentToOwn,
        ImportField::PriceContractForDeed,
        ImportField::DepositForRent,
        ImportField::DepositForSale,
        ImportField::DepositRentToOwn,
        ImportField::DepositContractForDeed,
        ImportField::Description,
        ImportField::Bedrooms,
        ImportField::Bathrooms,
        ImportField::SqFt,
        ImportField::HouseManufacturer,
        ImportField::HouseModel,
        ImportField::AvailableDate,
    ];

    /// Wire name used in mapped records and the bulk request
    pub fn key(&self) -> &'static str {
        match self {
            ImportField::NameOrNumber => "nameOrNumber",
            ImportField::ParkName => "parkName",
            ImportField::ParkId => "parkId",
            ImportField::Status => "status",
            ImportField::Price => "price",
            ImportField::PriceForRent => "priceForRent",
            ImportField::PriceForSale => "priceForSale",
            ImportField::PriceRentToOwn => "priceRentToOwn",
            ImportField::PriceContractForDeed => "priceContractForDeed",
            ImportField::DepositForRent => "depositForRent",
            ImportField::DepositForSale => "depositForSale",
            ImportField::DepositRentToOwn => "depositRentToOwn",
            ImportField::DepositContractForDeed => "depositContractForDeed",
            ImportField::Description => "description",
            ImportField::Bedrooms => "bedrooms",
            ImportField::Bathrooms => "bathrooms",
            ImportField::SqFt => "sqFt",
            ImportField::HouseManufacturer => "houseManufacturer",
            ImportField::HouseModel => "houseModel",
            ImportField::AvailableDate => "availableDate",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ImportField::NameOrNumber => "Lot Name/Number",
            ImportField::ParkName => "Park Name",
            ImportField::ParkId => "Park ID",
            ImportField::Status => "Status",
            ImportField::Price => "Price (Legacy)",
            ImportField::PriceForRent => "Price For Rent",
            ImportField::PriceForSale => "Price For Sale",
            ImportField::PriceRentToOwn => "Price Rent To Own",
            ImportField::PriceContractForDeed => "Price Contract For Deed",
            ImportField::DepositForRent => "Deposit For Rent",
            ImportField::DepositForSale => "Deposit For Sale",
            ImportField::DepositRentToOwn => "Deposit Rent To Own",
            ImportField::DepositContractForDeed => "Deposit Contract For Deed",
            ImportField::Description => "Description",
            ImportField::Bedrooms => "Bedrooms",
            ImportField::Bathrooms => "Bathrooms",
            ImportField::SqFt => "Square Feet",
            ImportField::HouseManufacturer => "House Manufacturer",
            ImportField::HouseModel => "House Model",
            ImportField::AvailableDate => "Available Date",
        }
    }

    /// Common spreadsheet headers for this field
    fn aliases(&self) -> &'static [&'static str] {
        match self {
            ImportField::NameOrNumber => &["lot", "lot number", "lot #", "name", "number"],
            ImportField::ParkName => &["park"],
            ImportField::Price => &["price"],
            ImportField::PriceForRent => &["rent", "monthly rent"],
            ImportField::PriceForSale => &["sale price"],
            ImportField::SqFt => &["sqft", "sq ft", "square footage"],
            ImportField::Bedrooms => &["beds"],
            ImportField::Bathrooms => &["baths"],
            ImportField::HouseManufacturer => &["manufacturer"],
            ImportField::HouseModel => &["model"],
            _ => &[],
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            ImportField::Status => DataType::Status,
            ImportField::Bedrooms | ImportField::SqFt => DataType::Integer,
            ImportField::Price
            | ImportField::PriceForRent
            | ImportField::PriceForSale
            | ImportField::PriceRentToOwn
            | ImportField::PriceContractForDeed
            | ImportField::DepositForRent
            | ImportField::DepositForSale
            | ImportField::DepositRentToOwn
            | ImportField::DepositContractForDeed
            | ImportField::Bathrooms => DataType::Number,
            ImportField::AvailableDate => DataType::Date,
            _ => DataType::String,
        }
    }

    /// The park column is only mandatory when unassigned lots are not allowed
    pub fn is_required(&self, require_park_name: bool) -> bool {
        match self {
            ImportField::NameOrNumber => true,
            ImportField::ParkName => require_park_name,
            _ => false,
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }

    fn exact_names(&self) -> impl Iterator<Item = String> + '_ {
        [self.key(), self.title()]
            .into_iter()
            .chain(self.aliases().iter().copied())
            .map(|s| s.to_lowercase())
    }
}

impl std::fmt::Display for ImportField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Field → source column assignment; an absent entry means "skip"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    columns: BTreeMap<ImportField, String>,
}

impl ColumnMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suggest a mapping from file headers: exact (case-insensitive) matches on
    /// key/title/alias first, then substring matches among unclaimed headers
    pub fn suggest(headers: &[String]) -> Self {
        let mut mapping = Self::new();
        let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
        let mut claimed = vec![false; headers.len()];

        for field in ImportField::ALL {
            let names: Vec<String> = field.exact_names().collect();
            if let Some(idx) = (0..headers.len())
                .find(|&i| !claimed[i] && names.iter().any(|n| *n == normalized[i]))
            {
                claimed[idx] = true;
                mapping.set(field, Some(headers[idx].trim().to_string()));
            }
        }

        for field in ImportField::ALL {
            if mapping.column(field).is_some() {
                continue;
            }
            let title = field.title().to_lowercase();
            let similar = (0..headers.len()).find(|&i| {
                let h = &normalized[i];
                !claimed[i] && !h.is_empty() && (h.contains(&title) || title.contains(h.as_str()))
            });
            if let Some(idx) = similar {
                claimed[idx] = true;
                mapping.set(field, Some(headers[idx].trim().to_string()));
            }
        }

        mapping
    }

    /// `None` marks the field as skipped
    pub fn set(&mut self, field: ImportField, column: Option<String>) {
        match column.filter(|c| !c.trim().is_empty()) {
            Some(column) => {
                self.columns.insert(field, column);
            }
            None => {
                self.columns.remove(&field);
            }
        }
    }

    pub fn column(&self, field: ImportField) -> Option<&str> {
        self.columns.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ImportField, &str)> {
        self.columns.iter().map(|(f, c)| (*f, c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Required fields that are currently skipped
    pub fn missing_required(&self, require_park_name: bool) -> Vec<ImportField> {
        ImportField::ALL
            .into_iter()
            .filter(|f| f.is_required(require_park_name) && self.column(*f).is_none())
            .collect()
    }

    /// Rename source columns to field keys; values are carried over as-is
    pub fn apply(&self, row_number: usize, raw: &HashMap<String, String>) -> MappedRow {
        let values = self
            .columns
            .iter()
            .map(|(field, column)| {
                let value = raw.get(column).cloned().unwrap_or_default();
                (*field, value)
            })
            .collect();
        MappedRow {
            row: row_number,
            values,
        }
    }
}

/// One source row after column renaming, before any type coercion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedRow {
    /// 1-based data row number
    pub row: usize,
    values: BTreeMap<ImportField, String>,
}

impl MappedRow {
    pub fn new(row: usize) -> Self {
        Self {
            row,
            values: BTreeMap::new(),
        }
    }

    pub fn with(mut self, field: ImportField, value: impl Into<String>) -> Self {
        self.values.insert(field, value.into());
        self
    }

    pub fn get(&self, field: ImportField) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// Trimmed, non-empty value
    pub fn value(&self, field: ImportField) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Mapped record keyed by wire name, as shown in the preview table
    pub fn to_record(&self) -> BTreeMap<&'static str, &str> {
        self.values
            .iter()
            .map(|(f, v)| (f.key(), v.as_str()))
            .collect()
    }
}

impl Serialize for MappedRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_suggest_exact_and_alias() {
        let mapping = ColumnMapping::suggest(&headers(&["Lot", "Park Name", "Status", "Rent"]));
        assert_eq!(mapping.column(ImportField::NameOrNumber), Some("Lot"));
        assert_eq!(mapping.column(ImportField::ParkName), Some("Park Name"));
        assert_eq!(mapping.column(ImportField::Status), Some("Status"));
        assert_eq!(mapping.column(ImportField::PriceForRent), Some("Rent"));
        assert_eq!(mapping.column(ImportField::ParkId), None);
    }

    #[test]
    fn test_suggest_does_not_reuse_columns() {
        let mapping = ColumnMapping::suggest(&headers(&["Price"]));
        assert_eq!(mapping.column(ImportField::Price), Some("Price"));
        assert_eq!(mapping.column(ImportField::PriceForRent), None);
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_suggest_substring_match() {
        let mapping = ColumnMapping::suggest(&headers(&["House Model Name"]));
        assert_eq!(mapping.column(ImportField::HouseModel), Some("House Model Name"));
    }

    #[test]
    fn test_missing_required() {
        let mut mapping = ColumnMapping::new();
        assert_eq!(
            mapping.missing_required(false),
            vec![ImportField::NameOrNumber]
        );
        assert_eq!(
            mapping.missing_required(true),
            vec![ImportField::NameOrNumber, ImportField::ParkName]
        );
        mapping.set(ImportField::NameOrNumber, Some("Lot".into()));
        assert!(mapping.missing_required(false).is_empty());
        mapping.set(ImportField::NameOrNumber, None);
        assert_eq!(mapping.missing_required(false).len(), 1);
    }

    #[test]
    fn test_apply_is_plain_rename() {
        let mut mapping = ColumnMapping::new();
        mapping.set(ImportField::NameOrNumber, Some("Lot".into()));
        mapping.set(ImportField::Bedrooms, Some("Beds".into()));
        let raw = HashMap::from([
            ("Lot".to_string(), "12A".to_string()),
            ("Beds".to_string(), "three".to_string()),
            ("Ignored".to_string(), "x".to_string()),
        ]);
        let mapped = mapping.apply(1, &raw);
        let record = mapped.to_record();
        assert_eq!(record.len(), 2);
        assert_eq!(record["nameOrNumber"], "12A");
        assert_eq!(record["bedrooms"], "three");
    }

    #[test]
    fn test_from_key() {
        assert_eq!(ImportField::from_key("sqFt"), Some(ImportField::SqFt));
        assert_eq!(ImportField::from_key("PARKNAME"), Some(ImportField::ParkName));
        assert_eq!(ImportField::from_key("unknown"), None);
    }
}
