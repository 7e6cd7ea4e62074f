use chrono::{DateTime, Utc};

use crate::common::{Machine, Unit};

/// A stored machine. Only the foreign key is kept, the unit is resolved on read.
#[derive(Debug, Clone, serde::Deserialize)]
pub(super) struct MachineRow {
    pub name: String,
    pub unit_uuid: String,
    pub uuid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MachineRow {
    pub fn resolve(&self, unit: Unit) -> Machine {
        Machine {
            name: self.name.clone(),
            unit_uuid: self.unit_uuid.clone(),
            uuid: self.uuid.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            unit,
        }
    }
}

impl From<Machine> for MachineRow {
    fn from(value: Machine) -> Self {
        Self {
            name: value.name,
            unit_uuid: value.unit_uuid,
            uuid: value.uuid,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Default, serde::Deserialize)]
pub(super) struct Fixture {
    #[serde(default)]
    pub units: Vec<Unit>,
    #[serde(default)]
    pub machines: Vec<MachineRow>,
}
