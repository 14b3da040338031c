//! Driver allocator - first-fit fixture packing
//!
//! The allocator consumes an ordered sequence of layers and places each
//! fixture onto a dimming engine driver, respecting the per-driver channel
//! and wattage budgets. Placement is a single deterministic forward pass:
//!
//! - Drivers are scanned in creation order and the first one with room for
//!   both the channel and wattage demand is selected (first-fit, never
//!   best-fit - downstream hardware wiring depends on the exact packing).
//! - A fixture that cannot fit any driver at all (more than 6 channels or
//!   more than 96 W) is skipped with a warning, never split across drivers.
//! - Exceeding the cabinet capacity only warns; fixtures are still placed.
//!
//! All bookkeeping is local to one call and discarded on return.

use serde::{Deserialize, Serialize};

use crate::addressing::CabinetLayout;
use crate::fixture::LayerInfo;

/// Output channels available on one driver.
pub const MAX_SLOTS_PER_DRIVER: usize = 6;

/// Power budget of one driver in watts.
pub const MAX_WATTS_PER_DRIVER: f32 = 96.0;

/// Record of one fixture's placement on a driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixturePlacement {
    /// Layer the fixture belongs to
    pub layer_id: String,
    /// Zone the fixture belongs to
    pub zone_id: String,
    /// Lighting mix label
    pub mix_id: String,
    /// External fixture identifier
    pub fixture_id: String,
    /// 0-based output slot indices claimed on the driver, ascending
    pub slots: Vec<u32>,
}

/// Power budget and estimated load of one driver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverPower {
    /// Fixed power budget in watts
    pub budget_w: f32,
    /// Sum of placed fixture loads in watts
    pub estimated_load_w: f32,
}

/// A populated dimming engine driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// 1-based id, monotonic in creation order across one allocation run
    pub id: u32,
    /// 1-based position within the cabinet
    pub address: u32,
    /// Cabinet identifier ("CAB1", "CAB2", ...)
    pub cabinet_id: String,
    /// Power budget and load
    pub power: DriverPower,
    /// Fixture placements in placement order
    pub assignments: Vec<FixturePlacement>,
}

/// Result of one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Populated drivers in creation order
    pub drivers: Vec<Driver>,
    /// Capacity warnings in placement order
    pub warnings: Vec<String>,
    /// True when more drivers were created than one cabinet holds
    pub requires_multiple_cabinets: bool,
}

/// Mutable per-driver bookkeeping for one allocation run.
struct DriverState {
    claimed: [bool; MAX_SLOTS_PER_DRIVER],
    load_w: f32,
    placements: Vec<FixturePlacement>,
}

impl DriverState {
    fn new() -> Self {
        Self {
            claimed: [false; MAX_SLOTS_PER_DRIVER],
            load_w: 0.0,
            placements: Vec::new(),
        }
    }

    fn slots_free(&self) -> usize {
        self.claimed.iter().filter(|c| !**c).count()
    }

    fn fits(&self, slots_needed: usize, watts_needed: f32) -> bool {
        self.slots_free() >= slots_needed && self.load_w + watts_needed <= MAX_WATTS_PER_DRIVER
    }

    /// Claim the lowest `slots_needed` unclaimed slot indices, ascending.
    fn claim_slots(&mut self, slots_needed: usize) -> Vec<u32> {
        let mut slots = Vec::with_capacity(slots_needed);
        for index in 0..MAX_SLOTS_PER_DRIVER {
            if slots.len() == slots_needed {
                break;
            }
            if !self.claimed[index] {
                self.claimed[index] = true;
                slots.push(index as u32);
            }
        }
        slots
    }
}

/// Pack the given layers' fixtures onto drivers.
///
/// Layers and their fixtures are processed strictly in input order;
/// reordering the input changes the packing. The call never fails:
/// constraint violations are reported through the returned warnings.
pub fn allocate(layers: &[LayerInfo], layout: &CabinetLayout) -> AllocationResult {
    let cabinet_capacity = layout.max_drivers_per_cabinet();
    let mut states: Vec<DriverState> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    for layer in layers {
        for fixture in &layer.fixtures {
            let slots_needed = fixture.channel_count as usize;
            let watts_needed = fixture.watt_power;

            // A fixture no single driver could ever hold is dropped whole,
            // never split. The warning is the only trace of it.
            if slots_needed > MAX_SLOTS_PER_DRIVER {
                let warning = format!(
                    "Fixture '{}' needs {} channels but a driver has {} outputs; fixture skipped",
                    fixture.id, slots_needed, MAX_SLOTS_PER_DRIVER
                );
                tracing::warn!("{}", warning);
                warnings.push(warning);
                continue;
            }
            if watts_needed > MAX_WATTS_PER_DRIVER {
                let warning = format!(
                    "Fixture '{}' draws {} W but a driver's budget is {} W; fixture skipped",
                    fixture.id, watts_needed, MAX_WATTS_PER_DRIVER
                );
                tracing::warn!("{}", warning);
                warnings.push(warning);
                continue;
            }

            // First-fit: scan drivers in creation order.
            let found = states
                .iter()
                .position(|state| state.fits(slots_needed, watts_needed));
            let driver_index = match found {
                Some(index) => index,
                None => {
                    states.push(DriverState::new());
                    let id = states.len() as u32;
                    if id > cabinet_capacity {
                        let warning = format!(
                            "Driver {} exceeds the cabinet capacity of {} drivers; an additional cabinet is required",
                            id, cabinet_capacity
                        );
                        tracing::warn!("{}", warning);
                        warnings.push(warning);
                    }
                    states.len() - 1
                }
            };

            let state = &mut states[driver_index];
            let slots = state.claim_slots(slots_needed);
            state.load_w += watts_needed;
            tracing::debug!(
                fixture = %fixture.id,
                driver = driver_index + 1,
                slots = ?slots,
                "placed fixture"
            );
            state.placements.push(FixturePlacement {
                layer_id: layer.layer_id.clone(),
                zone_id: layer.zone_id.clone(),
                mix_id: layer.mix_id.clone(),
                fixture_id: fixture.id.clone(),
                slots,
            });
        }
    }

    let driver_count = states.len();
    let drivers = states
        .into_iter()
        .enumerate()
        .map(|(index, state)| {
            let id = index as u32 + 1;
            let location = layout.address_for(id);
            Driver {
                id,
                address: location.address,
                cabinet_id: location.cabinet_id,
                power: DriverPower {
                    budget_w: MAX_WATTS_PER_DRIVER,
                    estimated_load_w: state.load_w,
                },
                assignments: state.placements,
            }
        })
        .collect();

    AllocationResult {
        drivers,
        warnings,
        requires_multiple_cabinets: driver_count > cabinet_capacity as usize,
    }
}
