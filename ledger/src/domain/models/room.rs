// ledger/src/domain/models/room.rs

use serde::{Deserialize, Serialize};

use super::rent_record::RentRecord;

/// Domain model representing a rentable room.
/// The room owns its payment history; records are appended in insertion
/// order and never mutated or removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub tenant: String,
    pub monthly_rent: f64,
    pub records: Vec<RentRecord>,
}

impl Room {
    /// Most recent record by payment date, if any.
    pub fn latest_record(&self) -> Option<&RentRecord> {
        self.records.iter().max_by_key(|record| record.date)
    }

    /// Sum of `total_amount` across the room's records.
    pub fn total_collected(&self) -> f64 {
        self.records.iter().map(|record| record.total_amount).sum()
    }
}
