//! Domain model for a rent record.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Price charged per electricity-meter unit.
pub const ELECTRICITY_RATE: f64 = 9.0;

/// One rent payment for a room. Immutable once created; the derived fields
/// are computed at creation time and stored alongside the inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentRecord {
    pub id: String,
    pub room_id: u32,
    pub date: NaiveDate,
    pub amount: f64,
    pub previous_meter_reading: f64,
    pub current_meter_reading: f64,
    pub electricity_units: f64,
    pub electricity_bill: f64,
    pub total_amount: f64,
}

impl RentRecord {
    /// Generate a unique record ID based on the creation timestamp.
    /// Format: record-<timestamp_ms>-<random_suffix>
    /// Example: record-1625846400123-af3c
    pub fn generate_id(timestamp_ms: u64) -> String {
        let random_suffix = Self::generate_random_suffix(4);
        format!("record-{}-{}", timestamp_ms, random_suffix)
    }

    /// Parse a record ID to extract its creation timestamp.
    pub fn parse_id(id: &str) -> Result<u64, String> {
        let parts: Vec<&str> = id.split('-').collect();
        if parts.len() != 3 || parts[0] != "record" {
            return Err(format!("Invalid record ID format: {}", id));
        }
        parts[1]
            .parse::<u64>()
            .map_err(|_| format!("Invalid timestamp in ID: {}", parts[1]))
    }

    /// Generate a random hex suffix for record IDs.
    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RecordValidationError {
    #[error("Amount and meter readings must be finite numbers")]
    NonFiniteInput,
    #[error("Amount cannot be negative")]
    NegativeAmount,
    #[error("Meter readings cannot be negative")]
    NegativeMeterReading,
    #[error("Current meter reading cannot be below the previous reading")]
    MeterReadingWentBackwards,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_and_parse_id() {
        let id = RentRecord::generate_id(1702516122000);
        assert!(id.starts_with("record-1702516122000-"));
        assert_eq!(RentRecord::parse_id(&id).unwrap(), 1702516122000);
    }

    #[test]
    fn test_parse_id_rejects_bad_formats() {
        assert!(RentRecord::parse_id("record-123").is_err());
        assert!(RentRecord::parse_id("invalid-123-abcd").is_err());
        assert!(RentRecord::parse_id("record-not_a_number-abcd").is_err());
    }
}
