pub mod common;
pub mod config;
pub mod memory;

pub use common::{Error, Machine, MachineCreate, Result, Store, Unit, UnitCreate};
pub use self::config::*;
