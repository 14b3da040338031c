//! LuxPlan Core - Dimming Engine Driver Allocation
//!
//! This crate contains the hardware-allocation engine for LuxPlan, including:
//! - Fixture and layer descriptors (per-fixture resource demands)
//! - First-fit driver allocation under slot and wattage budgets
//! - Driver/cabinet addressing
//! - Multi-zone allocation orchestration
//!
//! The engine is a pure function library: each allocation call owns its own
//! bookkeeping and returns a fresh result. Capacity violations are reported
//! as ordered warning strings alongside a best-effort placement, so callers
//! can decide whether to block export or proceed.

#![warn(missing_docs)]

use thiserror::Error;

pub mod addressing;
pub mod allocator;
pub mod fixture;
pub mod zone;

// Descriptors & collaborator seam
pub use fixture::{FixtureInfo, FixtureSource, LayerInfo, DEFAULT_CHANNEL_COUNT};

// Allocation engine
pub use allocator::{
    allocate, AllocationResult, Driver, DriverPower, FixturePlacement, MAX_SLOTS_PER_DRIVER,
    MAX_WATTS_PER_DRIVER,
};

// Hardware addressing
pub use addressing::{CabinetAddress, CabinetLayout, DEFAULT_DRIVERS_PER_CABINET};

// Zone orchestration
pub use zone::{allocate_across_zones, LayerPlan, ZoneAllocation, ZonePlan};

/// Allocation engine error types
#[derive(Error, Debug)]
pub enum AllocError {
    /// Cabinet capacity must be at least one driver
    #[error("Invalid cabinet capacity: {0} (must be at least 1 driver per cabinet)")]
    InvalidCabinetCapacity(u32),
}

/// Result type for allocation engine operations
pub type Result<T> = std::result::Result<T, AllocError>;
