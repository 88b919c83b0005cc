use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::storage::traits::Connection;

/// JsonConnection manages the data directory holding the ledger file
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: Arc<Mutex<PathBuf>>,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: Arc::new(Mutex::new(base_path)),
        })
    }

    /// Create a new JSON connection in the default data directory
    /// (~/Documents/Rent Ledger)
    pub fn new_default() -> Result<Self> {
        // Get the user's home directory and construct the Documents path
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let documents_dir = PathBuf::from(home_dir).join("Documents");
        let data_dir = documents_dir.join("Rent Ledger");

        info!("Using data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> PathBuf {
        let base_dir = self.base_directory.lock().unwrap();
        base_dir.clone()
    }

    /// Get the path of the ledger file holding the room collection
    pub fn get_ledger_file_path(&self) -> PathBuf {
        self.base_directory().join("rooms.json")
    }
}

impl Connection for JsonConnection {
    type RoomRepository = super::room_repository::RoomRepository;

    fn create_room_repository(&self) -> Self::RoomRepository {
        super::room_repository::RoomRepository::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_creates_base_directory() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("nested").join("ledger_data");

        let connection = JsonConnection::new(&data_dir).unwrap();

        assert!(data_dir.exists());
        assert_eq!(connection.base_directory(), data_dir);
    }

    #[test]
    fn test_ledger_file_path_is_fixed() {
        let temp_dir = TempDir::new().unwrap();
        let connection = JsonConnection::new(temp_dir.path()).unwrap();

        assert_eq!(
            connection.get_ledger_file_path(),
            temp_dir.path().join("rooms.json")
        );
    }
}
