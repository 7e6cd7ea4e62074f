use chrono::{DateTime, Utc};

use super::{Result, ValidationSnafu};

pub const KIND_UNIT: &str = "Unit";
pub const KIND_MACHINE: &str = "Machine";

/// The owning collection a machine is registered under.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Unit {
    pub uuid: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnitCreate {
    pub name: String,
}

impl UnitCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(KIND_UNIT, &self.name)
    }
}

/// A registered machine, with its owning unit resolved and embedded.
///
/// `unit.uuid` always equals `unit_uuid` for values built through
/// [`Machine::assemble`] or returned by a [`Store`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Machine {
    pub name: String,
    pub unit_uuid: String,
    pub uuid: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub unit: Unit,
}

impl Machine {
    /// Build a freshly created machine from its payload, the identifier and
    /// timestamp assigned by the store, and the resolved unit.
    pub fn assemble(
        create: MachineCreate,
        uuid: String,
        timestamp: DateTime<Utc>,
        unit: Unit,
    ) -> Result<Self> {
        if unit.uuid != create.unit_uuid {
            return ValidationSnafu {
                message: format!(
                    "Machine {} references unit {} but was given unit {}",
                    create.name, create.unit_uuid, unit.uuid
                ),
            }
            .fail();
        }

        Ok(Self {
            name: create.name,
            unit_uuid: create.unit_uuid,
            uuid,
            created_at: timestamp,
            updated_at: timestamp,
            unit,
        })
    }

    pub fn is_consistent(&self) -> bool {
        return self.unit.uuid == self.unit_uuid;
    }
}

/// Payload for registering a new machine. Identity, timestamps and the
/// embedded unit are filled in by the store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MachineCreate {
    pub name: String,
    pub unit_uuid: String,
}

impl MachineCreate {
    pub fn new(name: impl Into<String>, unit_uuid: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unit_uuid: unit_uuid.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_name(KIND_MACHINE, &self.name)?;
        if self.unit_uuid.trim().is_empty() {
            return ValidationSnafu {
                message: format!("Machine {} has no unit_uuid", self.name),
            }
            .fail();
        }
        Ok(())
    }
}

fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return ValidationSnafu {
            message: format!("{kind} name must not be empty"),
        }
        .fail();
    }
    Ok(())
}

pub trait Store {
    fn create_unit(&mut self, unit: UnitCreate) -> super::Result<Unit>;
    fn get_unit(&self, uuid: &str) -> super::Result<Unit>;
    fn list_units(&self) -> super::Result<Vec<Unit>>;

    fn create_machine(&mut self, machine: MachineCreate) -> super::Result<Machine>;
    fn get_machine(&self, uuid: &str) -> super::Result<Machine>;
    /// Machines owned by `unit_uuid`, in creation order.
    fn list_machines(&self, unit_uuid: &str) -> super::Result<Vec<Machine>>;
}
