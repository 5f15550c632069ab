//! Display price derivation for lots and import preview rows.
//!
//! A lot can be listed under several statuses at once, each with its own
//! price, plus a legacy single `price` from before per-status pricing.
//! The shown price is the first active status (in `LotStatus::ALL` order)
//! that has a price, then the legacy price, then a placeholder.

use crate::enums::{LotStatus, LotStatusSet};

/// Placeholder shown on listing cards when nothing is priced
pub const PRICE_TBD: &str = "Price TBD";
/// Placeholder shown in admin tables when nothing is priced
pub const PRICE_NA: &str = "N/A";

/// Where the price is rendered; only affects the placeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceContext {
    Listing,
    Table,
}

impl PriceContext {
    pub fn placeholder(&self) -> &'static str {
        match self {
            PriceContext::Listing => PRICE_TBD,
            PriceContext::Table => PRICE_NA,
        }
    }
}

/// Price-relevant fields of a lot, decoupled from where they came from
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceFields {
    pub statuses: LotStatusSet,
    pub for_rent: Option<f64>,
    pub for_sale: Option<f64>,
    pub rent_to_own: Option<f64>,
    pub contract_for_deed: Option<f64>,
    pub legacy: Option<f64>,
}

impl PriceFields {
    fn price_for(&self, status: LotStatus) -> Option<f64> {
        match status {
            LotStatus::ForRent => self.for_rent,
            LotStatus::ForSale => self.for_sale,
            LotStatus::RentToOwn => self.rent_to_own,
            LotStatus::ContractForDeed => self.contract_for_deed,
        }
    }

    /// Winning `(status, price)`; status is `None` when the legacy price is used
    pub fn effective_price(&self) -> Option<(Option<LotStatus>, f64)> {
        LotStatus::ALL
            .into_iter()
            .filter(|s| self.statuses.contains(*s))
            .find_map(|s| self.price_for(s).map(|p| (Some(s), p)))
            .or_else(|| self.legacy.map(|p| (None, p)))
    }
}

/// Formatted display price, e.g. `$950/mo`, `$45,000`, `Price TBD`
pub fn display_price(fields: &PriceFields, context: PriceContext) -> String {
    match fields.effective_price() {
        Some((Some(status), amount)) if status.is_recurring() => {
            format!("{}/mo", format_currency(amount))
        }
        Some((_, amount)) => format_currency(amount),
        None => context.placeholder().to_string(),
    }
}

/// `$1,234` for whole amounts, `$1,234.50` otherwise
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(statuses: &[LotStatus]) -> PriceFields {
        PriceFields {
            statuses: statuses.iter().copied().collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_highest_priority_priced_status_wins() {
        let mut f = fields(&[LotStatus::ForSale, LotStatus::ForRent]);
        f.for_rent = Some(950.0);
        f.for_sale = Some(45000.0);
        assert_eq!(display_price(&f, PriceContext::Listing), "$950/mo");
    }

    #[test]
    fn test_skips_status_without_price() {
        let mut f = fields(&[LotStatus::ForRent, LotStatus::ForSale]);
        f.for_sale = Some(45000.0);
        assert_eq!(display_price(&f, PriceContext::Listing), "$45,000");
    }

    #[test]
    fn test_inactive_status_price_is_ignored() {
        let mut f = fields(&[LotStatus::ForSale]);
        f.for_rent = Some(950.0);
        f.legacy = Some(800.0);
        assert_eq!(display_price(&f, PriceContext::Listing), "$800");
    }

    #[test]
    fn test_rent_to_own_is_monthly() {
        let mut f = fields(&[LotStatus::RentToOwn]);
        f.rent_to_own = Some(1100.0);
        assert_eq!(display_price(&f, PriceContext::Table), "$1,100/mo");
    }

    #[test]
    fn test_contract_for_deed_has_no_suffix() {
        let mut f = fields(&[LotStatus::ContractForDeed]);
        f.contract_for_deed = Some(32000.0);
        assert_eq!(display_price(&f, PriceContext::Table), "$32,000");
    }

    #[test]
    fn test_placeholders() {
        let f = fields(&[LotStatus::ForRent]);
        assert_eq!(display_price(&f, PriceContext::Listing), PRICE_TBD);
        assert_eq!(display_price(&f, PriceContext::Table), PRICE_NA);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(999.0), "$999");
        assert_eq!(format_currency(1234567.0), "$1,234,567");
        assert_eq!(format_currency(1200.5), "$1,200.50");
    }
}
