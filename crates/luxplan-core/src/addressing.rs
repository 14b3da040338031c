//! Driver/cabinet addressing
//!
//! Drivers are numbered 1..N in creation order across one allocation run.
//! Cabinets hold a fixed number of drivers; a driver's physical address is
//! derived from its id by wrapping into successive cabinets ("CAB1",
//! "CAB2", ...), each address 1-based within its cabinet.

use serde::{Deserialize, Serialize};

use crate::{AllocError, Result};

/// Default number of drivers a cabinet can hold.
pub const DEFAULT_DRIVERS_PER_CABINET: u32 = 16;

/// Cabinet capacity configuration for one allocation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinetLayout {
    max_drivers_per_cabinet: u32,
}

impl Default for CabinetLayout {
    fn default() -> Self {
        Self {
            max_drivers_per_cabinet: DEFAULT_DRIVERS_PER_CABINET,
        }
    }
}

impl CabinetLayout {
    /// Create a layout with the given per-cabinet driver capacity.
    ///
    /// A capacity of zero is rejected: addressing divides by the capacity.
    pub fn new(max_drivers_per_cabinet: u32) -> Result<Self> {
        if max_drivers_per_cabinet == 0 {
            return Err(AllocError::InvalidCabinetCapacity(max_drivers_per_cabinet));
        }
        Ok(Self {
            max_drivers_per_cabinet,
        })
    }

    /// Per-cabinet driver capacity.
    pub fn max_drivers_per_cabinet(&self) -> u32 {
        self.max_drivers_per_cabinet
    }

    /// Derive the physical address of a driver from its 1-based id.
    pub fn address_for(&self, driver_id: u32) -> CabinetAddress {
        let cap = self.max_drivers_per_cabinet;
        let cabinet = driver_id.div_ceil(cap);
        CabinetAddress {
            cabinet_id: format!("CAB{}", cabinet),
            address: ((driver_id - 1) % cap) + 1,
        }
    }
}

/// Physical location of a driver: cabinet plus position within it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CabinetAddress {
    /// Cabinet identifier ("CAB1", "CAB2", ...)
    pub cabinet_id: String,
    /// 1-based position within the cabinet
    pub address: u32,
}
