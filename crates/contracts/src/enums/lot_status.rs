use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeSet;

/// Listing mode of a lot. Declaration order is the display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LotStatus {
    ForRent,
    ForSale,
    RentToOwn,
    ContractForDeed,
}

impl LotStatus {
    /// All statuses in priority order
    pub const ALL: [LotStatus; 4] = [
        LotStatus::ForRent,
        LotStatus::ForSale,
        LotStatus::RentToOwn,
        LotStatus::ContractForDeed,
    ];

    /// Wire code
    pub fn code(&self) -> &'static str {
        match self {
            LotStatus::ForRent => "FOR_RENT",
            LotStatus::ForSale => "FOR_SALE",
            LotStatus::RentToOwn => "RENT_TO_OWN",
            LotStatus::ContractForDeed => "CONTRACT_FOR_DEED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LotStatus::ForRent => "For Rent",
            LotStatus::ForSale => "For Sale",
            LotStatus::RentToOwn => "Rent to Own",
            LotStatus::ContractForDeed => "Contract for Deed",
        }
    }

    /// Statuses priced per month
    pub fn is_recurring(&self) -> bool {
        matches!(self, LotStatus::ForRent | LotStatus::RentToOwn)
    }

    /// Exact wire code lookup
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Accepts spreadsheet spellings: `FOR_RENT`, `for rent`, `For-Rent`, `rent to own`
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_uppercase(),
            })
            .collect();
        match normalized.as_str() {
            "RENT" | "RENTAL" => Some(LotStatus::ForRent),
            "SALE" => Some(LotStatus::ForSale),
            "RTO" => Some(LotStatus::RentToOwn),
            "CFD" => Some(LotStatus::ContractForDeed),
            other => Self::from_code(other),
        }
    }
}

impl std::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Set of active statuses of a lot.
///
/// The backend has stored `status` both as a single string and as an
/// array over time; this type accepts either (or null) and always
/// serializes as an array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LotStatusSet(BTreeSet<LotStatus>);

impl LotStatusSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn single(status: LotStatus) -> Self {
        Self(BTreeSet::from([status]))
    }

    /// Parse a delimited cell such as `"FOR_RENT, For Sale"`; unknown parts are returned separately
    pub fn parse_delimited(raw: &str) -> (Self, Vec<String>) {
        let mut set = Self::new();
        let mut unknown = Vec::new();
        for part in raw.split([',', ';', '|']) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match LotStatus::parse_lenient(part) {
                Some(status) => set.insert(status),
                None => unknown.push(part.to_string()),
            }
        }
        (set, unknown)
    }

    pub fn insert(&mut self, status: LotStatus) {
        self.0.insert(status);
    }

    pub fn remove(&mut self, status: LotStatus) {
        self.0.remove(&status);
    }

    pub fn contains(&self, status: LotStatus) -> bool {
        self.0.contains(&status)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Statuses in priority order
    pub fn iter(&self) -> impl Iterator<Item = LotStatus> + '_ {
        self.0.iter().copied()
    }

    pub fn codes(&self) -> Vec<String> {
        self.iter().map(|s| s.code().to_string()).collect()
    }
}

impl FromIterator<LotStatus> for LotStatusSet {
    fn from_iter<I: IntoIterator<Item = LotStatus>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for LotStatusSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

impl<'de> Deserialize<'de> for LotStatusSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Option::<Value>::deserialize(deserializer)?;
        let set = match value {
            Some(Value::String(s)) => LotStatusSet::parse_delimited(&s).0,
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(LotStatus::parse_lenient)
                .collect(),
            _ => LotStatusSet::new(),
        };
        Ok(set)
    }
}
