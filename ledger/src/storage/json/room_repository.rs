use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;

use super::connection::JsonConnection;
use crate::domain::models::rent_record::RentRecord;
use crate::domain::models::room::Room;
use crate::storage::traits::RoomStorage;

/// Intermediate struct for JSON serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRoom {
    id: u32,
    name: String,
    tenant: String,
    monthly_rent: f64,
    records: Vec<StoredRecord>,
}

/// Intermediate struct for JSON serialization with a string date field
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    id: String,
    room_id: u32,
    date: String, // String representation for JSON
    amount: f64,
    previous_meter_reading: f64,
    current_meter_reading: f64,
    electricity_units: f64,
    electricity_bill: f64,
    total_amount: f64,
}

/// JSON-file room repository persisting the whole collection as one document
#[derive(Clone)]
pub struct RoomRepository {
    connection: JsonConnection,
}

impl RoomRepository {
    /// Create a new JSON room repository
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Map a stored room to the domain model, re-parsing every record date.
    /// The stored form loses type information, so this conversion is
    /// mandatory for every record in every room.
    fn room_to_domain(stored: StoredRoom) -> Result<Room> {
        let records = stored
            .records
            .into_iter()
            .map(Self::record_to_domain)
            .collect::<Result<Vec<_>>>()?;

        Ok(Room {
            id: stored.id,
            name: stored.name,
            tenant: stored.tenant,
            monthly_rent: stored.monthly_rent,
            records,
        })
    }

    fn record_to_domain(stored: StoredRecord) -> Result<RentRecord> {
        let date = NaiveDate::parse_from_str(&stored.date, "%Y-%m-%d")
            .with_context(|| format!("Failed to parse record date '{}'", stored.date))?;

        Ok(RentRecord {
            id: stored.id,
            room_id: stored.room_id,
            date,
            amount: stored.amount,
            previous_meter_reading: stored.previous_meter_reading,
            current_meter_reading: stored.current_meter_reading,
            electricity_units: stored.electricity_units,
            electricity_bill: stored.electricity_bill,
            total_amount: stored.total_amount,
        })
    }

    fn room_to_stored(room: &Room) -> StoredRoom {
        StoredRoom {
            id: room.id,
            name: room.name.clone(),
            tenant: room.tenant.clone(),
            monthly_rent: room.monthly_rent,
            records: room.records.iter().map(Self::record_to_stored).collect(),
        }
    }

    fn record_to_stored(record: &RentRecord) -> StoredRecord {
        StoredRecord {
            id: record.id.clone(),
            room_id: record.room_id,
            date: record.date.format("%Y-%m-%d").to_string(),
            amount: record.amount,
            previous_meter_reading: record.previous_meter_reading,
            current_meter_reading: record.current_meter_reading,
            electricity_units: record.electricity_units,
            electricity_bill: record.electricity_bill,
            total_amount: record.total_amount,
        }
    }
}

impl RoomStorage for RoomRepository {
    /// Load the persisted room collection, or `None` on first run
    fn load_rooms(&self) -> Result<Option<Vec<Room>>> {
        let file_path = self.connection.get_ledger_file_path();

        if !file_path.exists() {
            debug!("Ledger file doesn't exist yet, no persisted state");
            return Ok(None);
        }

        let json_content = fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read ledger file {}", file_path.display()))?;
        let stored: Vec<StoredRoom> = serde_json::from_str(&json_content)
            .context("Ledger file does not match the expected shape")?;

        let rooms = stored
            .into_iter()
            .map(Self::room_to_domain)
            .collect::<Result<Vec<_>>>()?;

        debug!("Loaded {} rooms from {}", rooms.len(), file_path.display());
        Ok(Some(rooms))
    }

    /// Persist the complete room collection
    fn save_rooms(&self, rooms: &[Room]) -> Result<()> {
        let stored: Vec<StoredRoom> = rooms.iter().map(Self::room_to_stored).collect();
        let json_content = serde_json::to_string_pretty(&stored)?;

        let file_path = self.connection.get_ledger_file_path();

        // Atomic write using temp file
        let temp_path = file_path.with_extension("tmp");
        fs::write(&temp_path, json_content)?;
        fs::rename(&temp_path, &file_path)?;

        info!("Saved {} rooms to {}", rooms.len(), file_path.display());
        Ok(())
    }
}
