use std::{fs::File, io::BufReader, path::Path};

use chrono::Utc;
use snafu::{OptionExt, ResultExt};
use uuid::Uuid;

use super::models::{Fixture, MachineRow};
use crate::common::{
    ConflictSnafu, Error, Machine, MachineCreate, NotFoundSnafu, Result, Store, StoreSnafu, Unit,
    UnitCreate, ValidationSnafu, KIND_MACHINE, KIND_UNIT,
};

pub const STORE_NAME: &str = "Memory";

/// Keeps units and machines in insertion order. Nothing is written back to
/// disk, a fixture is only ever read.
#[derive(Debug, Default)]
pub struct MemoryStore {
    units: Vec<Unit>,
    machines: Vec<MachineRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store from a JSON file holding `units` and `machines` arrays.
    pub fn from_fixture(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).boxed_local().context(StoreSnafu {
            store: STORE_NAME,
            message: format!("Failed to open fixture {}", path.display()),
        })?;

        let reader = BufReader::new(file);
        let fixture: Fixture =
            serde_json::from_reader(reader)
                .boxed_local()
                .context(StoreSnafu {
                    store: STORE_NAME,
                    message: format!("Failed to read records from fixture {}", path.display()),
                })?;

        let store = Self::seed(fixture)?;

        tracing::info!(
            store = STORE_NAME,
            units = store.units.len(),
            machines = store.machines.len(),
            "Fixture loaded",
        );
        Ok(store)
    }

    fn seed(fixture: Fixture) -> Result<Self> {
        let mut store = Self::new();

        for unit in fixture.units {
            UnitCreate::new(unit.name.clone()).validate()?;
            if store.find_unit(&unit.uuid).is_some() {
                return ValidationSnafu {
                    message: format!("Duplicate unit {} in fixture", unit.uuid),
                }
                .fail();
            }
            if store.units.iter().any(|existing| existing.name == unit.name) {
                return ValidationSnafu {
                    message: format!("Duplicate unit name {} in fixture", unit.name),
                }
                .fail();
            }
            store.units.push(unit);
        }

        for row in fixture.machines {
            MachineCreate::new(row.name.clone(), row.unit_uuid.clone()).validate()?;
            if store
                .machines
                .iter()
                .any(|existing| existing.unit_uuid == row.unit_uuid && existing.name == row.name)
            {
                return ValidationSnafu {
                    message: format!(
                        "Duplicate machine name {} in unit {} in fixture",
                        row.name, row.unit_uuid
                    ),
                }
                .fail();
            }
            if store.find_row(&row.uuid).is_some() {
                return ValidationSnafu {
                    message: format!("Duplicate machine {} in fixture", row.uuid),
                }
                .fail();
            }
            if store.find_unit(&row.unit_uuid).is_none() {
                return ValidationSnafu {
                    message: format!(
                        "Machine {} references unknown unit {}",
                        row.uuid, row.unit_uuid
                    ),
                }
                .fail();
            }
            store.machines.push(row);
        }

        Ok(store)
    }

    fn find_unit(&self, uuid: &str) -> Option<&Unit> {
        self.units.iter().find(|unit| unit.uuid == uuid)
    }

    fn find_row(&self, uuid: &str) -> Option<&MachineRow> {
        self.machines.iter().find(|row| row.uuid == uuid)
    }
}

impl Store for MemoryStore {
    fn create_unit(&mut self, unit: UnitCreate) -> Result<Unit> {
        unit.validate()?;

        if self.units.iter().any(|existing| existing.name == unit.name) {
            return ConflictSnafu {
                kind: KIND_UNIT,
                name: unit.name,
            }
            .fail();
        }

        let now = Utc::now();
        let unit = Unit {
            uuid: Uuid::new_v4().to_string(),
            name: unit.name,
            created_at: now,
            updated_at: now,
        };
        self.units.push(unit.clone());

        tracing::info!(
            store = STORE_NAME,
            unit = unit.uuid,
            name = unit.name,
            "Created unit",
        );
        Ok(unit)
    }

    fn get_unit(&self, uuid: &str) -> Result<Unit> {
        self.find_unit(uuid).cloned().context(NotFoundSnafu {
            kind: KIND_UNIT,
            uuid,
        })
    }

    fn list_units(&self) -> Result<Vec<Unit>> {
        tracing::debug!(store = STORE_NAME, units = self.units.len(), "Listed units");
        Ok(self.units.clone())
    }

    fn create_machine(&mut self, machine: MachineCreate) -> Result<Machine> {
        machine.validate()?;

        let unit = self.get_unit(&machine.unit_uuid)?;

        // Names only need to be unique within their unit
        if self
            .machines
            .iter()
            .any(|row| row.unit_uuid == machine.unit_uuid && row.name == machine.name)
        {
            return ConflictSnafu {
                kind: KIND_MACHINE,
                name: machine.name,
            }
            .fail();
        }

        let machine = Machine::assemble(machine, Uuid::new_v4().to_string(), Utc::now(), unit)?;
        self.machines.push(MachineRow::from(machine.clone()));

        tracing::info!(
            store = STORE_NAME,
            machine = machine.uuid,
            unit = machine.unit_uuid,
            name = machine.name,
            "Created machine",
        );
        Ok(machine)
    }

    fn get_machine(&self, uuid: &str) -> Result<Machine> {
        let row = self.find_row(uuid).context(NotFoundSnafu {
            kind: KIND_MACHINE,
            uuid,
        })?;
        let unit = self.get_unit(&row.unit_uuid)?;

        tracing::debug!(store = STORE_NAME, machine = uuid, "Read completed");
        Ok(row.resolve(unit))
    }

    fn list_machines(&self, unit_uuid: &str) -> Result<Vec<Machine>> {
        let unit = self.get_unit(unit_uuid)?;
        let machines: Vec<Machine> = self
            .machines
            .iter()
            .filter(|row| row.unit_uuid == unit_uuid)
            .map(|row| row.resolve(unit.clone()))
            .collect();

        tracing::debug!(
            store = STORE_NAME,
            unit = unit_uuid,
            machines = machines.len(),
            "Listed machines",
        );
        Ok(machines)
    }
}

impl TryFrom<super::Config> for MemoryStore {
    type Error = Error;

    fn try_from(value: super::Config) -> Result<Self> {
        match value.fixture {
            Some(path) => Self::from_fixture(path),
            None => Ok(Self::new()),
        }
    }
}
