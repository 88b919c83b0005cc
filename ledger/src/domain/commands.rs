// ledger/src/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The presentation boundary is responsible for
//! mapping the public DTOs defined in the `shared` crate to these internal
//! types.

pub mod records {
    use chrono::NaiveDate;

    use crate::domain::models::rent_record::RentRecord;

    /// Input for recording a rent payment.
    #[derive(Debug, Clone)]
    pub struct AddRentRecordCommand {
        pub room_id: u32,
        pub date: NaiveDate,
        pub amount: f64,
        pub previous_meter_reading: f64,
        pub current_meter_reading: f64,
    }

    /// Result of recording a rent payment.
    ///
    /// `record` is `None` when the target room does not exist; the
    /// collection is left untouched in that case.
    #[derive(Debug, Clone)]
    pub struct AddRentRecordResult {
        pub record: Option<RentRecord>,
        pub success_message: Option<String>,
    }

    /// Result of listing a room's records, most recent payment first.
    #[derive(Debug, Clone)]
    pub struct RecordListResult {
        pub records: Vec<RentRecord>,
    }
}

pub mod rooms {
    use crate::domain::models::rent_record::RentRecord;
    use crate::domain::models::room::Room;

    /// Input for updating room details. Only the provided fields change.
    #[derive(Debug, Clone)]
    pub struct UpdateRoomCommand {
        pub room_id: u32,
        pub name: Option<String>,
        pub tenant: Option<String>,
        pub monthly_rent: Option<f64>,
    }

    /// Result of updating a room. `room` is `None` when no room matched.
    #[derive(Debug, Clone)]
    pub struct UpdateRoomResult {
        pub room: Option<Room>,
        pub success_message: Option<String>,
    }

    /// Per-room aggregate for the summary view.
    #[derive(Debug, Clone)]
    pub struct RoomSummary {
        pub room_id: u32,
        pub name: String,
        pub tenant: String,
        pub monthly_rent: f64,
        pub total_collected: f64,
        pub latest_record: Option<RentRecord>,
    }
}
