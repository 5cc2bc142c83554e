use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// A named, durable collection of equipment entries accumulated by
/// barcode scanning across page loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSession {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Insertion order is scan order.
    pub items: Vec<ScanItem>,
}

/// One equipment entry inside a scan session.
///
/// Descriptive fields are a snapshot taken at add time and are never
/// re-synced against the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanItem {
    pub equipment_id: i64,
    pub name: String,
    pub barcode: String,
    /// Present for serialized equipment. A serialized item is a unique
    /// physical asset: its quantity stays 1 and re-scans are rejected.
    pub serial_number: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    /// Only meaningful for non-serialized (bulk) items.
    pub quantity: u32,
}

/// Input shape for adding equipment to a session, as produced by a
/// barcode scan or a manual add.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRef {
    pub equipment_id: i64,
    pub name: String,
    pub barcode: String,
    pub serial_number: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
}

impl EquipmentRef {
    #[must_use]
    pub fn new(equipment_id: i64, name: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            equipment_id,
            name: name.into(),
            barcode: barcode.into(),
            serial_number: None,
            category_id: None,
            category_name: None,
        }
    }

    #[must_use]
    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, id: i64, name: impl Into<String>) -> Self {
        self.category_id = Some(id);
        self.category_name = Some(name.into());
        self
    }
}

impl From<EquipmentRef> for ScanItem {
    fn from(re: EquipmentRef) -> Self {
        Self {
            equipment_id: re.equipment_id,
            name: re.name,
            barcode: re.barcode,
            serial_number: re.serial_number,
            category_id: re.category_id,
            category_name: re.category_name,
            quantity: 1,
        }
    }
}

/// Outcome of adding equipment to a session. Each case is messaged
/// distinctly by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was appended.
    ItemAdded,
    /// An existing bulk entry's quantity was bumped.
    QuantityIncremented {
        /// Quantity after the increment.
        quantity: u32,
    },
    /// A serialized item with this equipment id and serial already
    /// exists; nothing was mutated.
    DuplicateSerial,
}

impl AddOutcome {
    /// Whether the session was mutated by the add.
    #[must_use]
    pub const fn mutated(&self) -> bool {
        !matches!(*self, Self::DuplicateSerial)
    }
}

impl ScanSession {
    /// Create a session with a fresh id. The name is trimmed and must
    /// not be empty.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_owned(),
            created_at: Utc::now(),
            items: Vec::new(),
        })
    }

    /// Add equipment, deduplicating by `(equipment_id, serial_number)`.
    ///
    /// Serialized refs collide with an existing entry carrying the same
    /// serial and are rejected without mutation. Bulk refs increment the
    /// quantity of the existing entry for the same equipment id, or
    /// append a new entry with quantity 1.
    pub fn add_equipment(&mut self, re: EquipmentRef) -> AddOutcome {
        match re.serial_number {
            Some(ref serial) => {
                let exists = self.items.iter().any(|item| {
                    item.equipment_id == re.equipment_id
                        && item.serial_number.as_deref() == Some(serial.as_str())
                });
                if exists {
                    return AddOutcome::DuplicateSerial;
                }
                self.items.push(re.into());
                AddOutcome::ItemAdded
            },
            None => {
                if let Some(item) = self
                    .items
                    .iter_mut()
                    .find(|item| item.equipment_id == re.equipment_id && item.serial_number.is_none())
                {
                    item.quantity += 1;
                    return AddOutcome::QuantityIncremented { quantity: item.quantity };
                }
                self.items.push(re.into());
                AddOutcome::ItemAdded
            },
        }
    }

    /// Number of distinct entries (not summed quantities).
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Summed quantity across all entries.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
