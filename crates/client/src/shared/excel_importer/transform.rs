//! Mapped spreadsheet rows → typed bulk-create rows.
//!
//! Coercion is forgiving: a value that cannot be read is dropped and the
//! row still goes to the server, with a local warning naming the cell.

use contracts::domain::a002_park::ParkId;
use contracts::domain::common::wire::parse_number;
use contracts::domain::common::AggregateId;
use contracts::enums::LotStatusSet;
use contracts::usecases::u501_bulk_import_lots::{BulkImportRequest, BulkLotRow, RowWarning};

use super::types::{ImportField, MappedRow};
use crate::shared::date_utils::normalize_date;

/// Result of transforming one row
#[derive(Debug, Clone, PartialEq)]
pub struct TransformOutcome {
    pub lot: BulkLotRow,
    pub warnings: Vec<RowWarning>,
}

struct RowReader<'a> {
    row: &'a MappedRow,
    warnings: Vec<RowWarning>,
}

impl<'a> RowReader<'a> {
    fn warn(&mut self, field: ImportField, raw: &str, expected: &str) {
        self.warnings.push(RowWarning {
            row: self.row.row,
            warning: format!(
                "{}: \"{}\" is not a valid {}, value ignored",
                field.title(),
                raw,
                expected
            ),
        });
    }

    fn text(&self, field: ImportField) -> Option<String> {
        self.row.value(field).map(str::to_string)
    }

    fn number(&mut self, field: ImportField) -> Option<f64> {
        let raw = self.row.value(field)?;
        match parse_number(raw) {
            Some(v) if v >= 0.0 => Some(v),
            _ => {
                self.warn(field, raw, "non-negative number");
                None
            }
        }
    }

    fn integer(&mut self, field: ImportField) -> Option<u32> {
        let raw = self.row.value(field)?;
        match parse_number(raw) {
            Some(v) if v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => Some(v as u32),
            _ => {
                self.warn(field, raw, "whole number");
                None
            }
        }
    }

    fn date(&mut self, field: ImportField) -> Option<String> {
        let raw = self.row.value(field)?;
        let normalized = normalize_date(raw);
        if normalized.is_none() {
            self.warn(field, raw, "date");
        }
        normalized
    }

    fn status(&mut self) -> LotStatusSet {
        let Some(raw) = self.row.value(ImportField::Status) else {
            return LotStatusSet::new();
        };
        let (set, unknown) = LotStatusSet::parse_delimited(raw);
        for part in unknown {
            self.warn(ImportField::Status, &part, "status");
        }
        set
    }

    fn park_id(&mut self) -> Option<ParkId> {
        let raw = self.row.value(ImportField::ParkId)?;
        match ParkId::from_string(raw) {
            Ok(id) => Some(id),
            Err(_) => {
                self.warn(ImportField::ParkId, raw, "park id");
                None
            }
        }
    }
}

/// Coerce one mapped row into a bulk-create row
pub fn transform_row(row: &MappedRow) -> TransformOutcome {
    let mut r = RowReader {
        row,
        warnings: Vec::new(),
    };

    let lot = BulkLotRow {
        row: row.row,
        name_or_number: r.text(ImportField::NameOrNumber).unwrap_or_default(),
        park_name: r.text(ImportField::ParkName),
        park_id: r.park_id(),
        status: r.status(),
        price: r.number(ImportField::Price),
        price_for_rent: r.number(ImportField::PriceForRent),
        price_for_sale: r.number(ImportField::PriceForSale),
        price_rent_to_own: r.number(ImportField::PriceRentToOwn),
        price_contract_for_deed: r.number(ImportField::PriceContractForDeed),
        deposit_for_rent: r.number(ImportField::DepositForRent),
        deposit_for_sale: r.number(ImportField::DepositForSale),
        deposit_rent_to_own: r.number(ImportField::DepositRentToOwn),
        deposit_contract_for_deed: r.number(ImportField::DepositContractForDeed),
        description: r.text(ImportField::Description),
        bedrooms: r.integer(ImportField::Bedrooms),
        bathrooms: r.number(ImportField::Bathrooms),
        sq_ft: r.integer(ImportField::SqFt),
        house_manufacturer: r.text(ImportField::HouseManufacturer),
        house_model: r.text(ImportField::HouseModel),
        available_date: r.date(ImportField::AvailableDate),
    };

    TransformOutcome {
        lot,
        warnings: r.warnings,
    }
}

/// Coerce every row; the request keeps source order
pub fn transform_rows(rows: &[MappedRow]) -> (BulkImportRequest, Vec<RowWarning>) {
    let mut lots = Vec::with_capacity(rows.len());
    let mut warnings = Vec::new();
    for row in rows {
        let outcome = transform_row(row);
        lots.push(outcome.lot);
        warnings.extend(outcome.warnings);
    }
    (BulkImportRequest { lots }, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::LotStatus;

    #[test]
    fn test_transform_full_row() {
        let row = MappedRow::new(3)
            .with(ImportField::NameOrNumber, " 12A ")
            .with(ImportField::ParkName, "Oakwood")
            .with(ImportField::Status, "For Rent; rent_to_own")
            .with(ImportField::PriceForRent, "$1,200")
            .with(ImportField::Bedrooms, "3")
            .with(ImportField::Bathrooms, "1.5")
            .with(ImportField::SqFt, "1,040")
            .with(ImportField::AvailableDate, "03/15/2025")
            .with(ImportField::Description, "   ");

        let outcome = transform_row(&row);
        assert!(outcome.warnings.is_empty());
        let lot = outcome.lot;
        assert_eq!(lot.row, 3);
        assert_eq!(lot.name_or_number, "12A");
        assert_eq!(lot.park_name.as_deref(), Some("Oakwood"));
        assert!(lot.status.contains(LotStatus::ForRent));
        assert!(lot.status.contains(LotStatus::RentToOwn));
        assert_eq!(lot.price_for_rent, Some(1200.0));
        assert_eq!(lot.bedrooms, Some(3));
        assert_eq!(lot.bathrooms, Some(1.5));
        assert_eq!(lot.sq_ft, Some(1040));
        assert_eq!(lot.available_date.as_deref(), Some("2025-03-15"));
        assert_eq!(lot.description, None);
    }

    #[test]
    fn test_bad_values_warn_and_drop() {
        let row = MappedRow::new(7)
            .with(ImportField::NameOrNumber, "7")
            .with(ImportField::Status, "FOR_RENT,LEASED")
            .with(ImportField::Bedrooms, "two")
            .with(ImportField::Price, "-5")
            .with(ImportField::AvailableDate, "soon")
            .with(ImportField::ParkId, "not-a-uuid");

        let outcome = transform_row(&row);
        assert_eq!(outcome.lot.bedrooms, None);
        assert_eq!(outcome.lot.price, None);
        assert_eq!(outcome.lot.available_date, None);
        assert_eq!(outcome.lot.park_id, None);
        assert_eq!(outcome.lot.status.len(), 1);
        assert_eq!(outcome.warnings.len(), 5);
        assert!(outcome.warnings.iter().all(|w| w.row == 7));
        assert!(outcome.warnings.iter().any(|w| w.warning.contains("LEASED")));
    }

    #[test]
    fn test_transform_rows_keeps_order() {
        let rows: Vec<MappedRow> = (1..=3)
            .map(|i| MappedRow::new(i).with(ImportField::NameOrNumber, format!("L{i}")))
            .collect();
        let (request, warnings) = transform_rows(&rows);
        assert!(warnings.is_empty());
        let names: Vec<_> = request.lots.iter().map(|l| l.name_or_number.as_str()).collect();
        assert_eq!(names, vec!["L1", "L2", "L3"]);
    }
}
