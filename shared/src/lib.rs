use serde::{Deserialize, Serialize};

/// A rentable room with its tenant and full payment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: u32,
    pub name: String,
    pub tenant: String,
    /// Default rent amount offered when adding a new record
    pub monthly_rent: f64,
    /// Payment history in insertion order
    pub records: Vec<RentRecord>,
}

/// One rent payment for a room, including the electricity charge derived
/// from the two meter readings covering the billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentRecord {
    pub id: String,
    /// ID of the room this record belongs to
    pub room_id: u32,
    /// Payment date (ISO 8601: YYYY-MM-DD)
    pub date: String,
    /// Base rent portion paid
    pub amount: f64,
    pub previous_meter_reading: f64,
    pub current_meter_reading: f64,
    /// Units consumed over the billing period
    pub electricity_units: f64,
    pub electricity_bill: f64,
    /// Rent plus electricity
    pub total_amount: f64,
}

/// Request to record a rent payment against a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRentRecordRequest {
    pub room_id: u32,
    /// Payment date (ISO 8601: YYYY-MM-DD)
    pub date: String,
    pub amount: f64,
    pub previous_meter_reading: f64,
    pub current_meter_reading: f64,
}

/// Response after recording a rent payment.
///
/// `record` is `None` when the target room does not exist; the collection
/// is left untouched in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRentRecordResponse {
    pub record: Option<RentRecord>,
    pub success_message: Option<String>,
}

/// Request to update room details. Only the provided fields change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    pub room_id: u32,
    pub name: Option<String>,
    pub tenant: Option<String>,
    pub monthly_rent: Option<f64>,
}

/// Response after updating a room. `room` is `None` when no room matched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRoomResponse {
    pub room: Option<Room>,
    pub success_message: Option<String>,
}

/// Response listing the full room collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomListResponse {
    pub rooms: Vec<Room>,
}

/// Response listing a room's records, most recent payment first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordListResponse {
    pub records: Vec<RentRecord>,
}

/// Per-room projection for the summary view: aggregate figures plus the
/// most recent payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub room_id: u32,
    pub name: String,
    pub tenant: String,
    pub monthly_rent: f64,
    /// Sum of `total_amount` across all of the room's records
    pub total_collected: f64,
    pub latest_record: Option<RentRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> RentRecord {
        RentRecord {
            id: "record-1702516122000-af3c".to_string(),
            room_id: 1,
            date: "2024-01-05".to_string(),
            amount: 5000.0,
            previous_meter_reading: 100.0,
            current_meter_reading: 150.0,
            electricity_units: 50.0,
            electricity_bill: 450.0,
            total_amount: 5450.0,
        }
    }

    #[test]
    fn test_room_serde_round_trip() {
        let room = Room {
            id: 1,
            name: "Room 1".to_string(),
            tenant: "John Doe".to_string(),
            monthly_rent: 5000.0,
            records: vec![sample_record()],
        };

        let json = serde_json::to_string(&room).unwrap();
        let parsed: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, room);
    }

    #[test]
    fn test_record_date_serializes_as_plain_string() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["total_amount"], 5450.0);
    }
}
