//! Zone allocation orchestration
//!
//! A design contains multiple zones (rooms), each holding one or more
//! layers of canvas object ids. The orchestrator resolves those ids to
//! fixture descriptors through a [`FixtureSource`], runs the driver
//! allocator once per zone, and merges the per-zone driver lists and
//! warnings into a single report.
//!
//! Object ids that fail to resolve are excluded from their layer (the
//! lookup crosses the canvas/allocator boundary and is best effort); the
//! exclusion is logged but does not produce a warning. Layers left with no
//! fixtures are dropped, and zones left with no layers are omitted from
//! the report entirely.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::addressing::CabinetLayout;
use crate::allocator::{allocate, Driver};
use crate::fixture::{FixtureSource, LayerInfo};

/// One layer of a zone, as canvas object ids in placement order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerPlan {
    /// Layer identifier
    pub layer_id: String,
    /// Canvas object ids belonging to the layer, in placement order
    pub object_ids: Vec<String>,
}

impl LayerPlan {
    /// Create a layer plan.
    pub fn new(layer_id: impl Into<String>, object_ids: Vec<String>) -> Self {
        Self {
            layer_id: layer_id.into(),
            object_ids,
        }
    }
}

/// One zone with its layers, in allocation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZonePlan {
    /// Zone identifier
    pub zone_id: String,
    /// Layers in allocation order
    pub layers: Vec<LayerPlan>,
}

impl ZonePlan {
    /// Create a zone plan.
    pub fn new(zone_id: impl Into<String>, layers: Vec<LayerPlan>) -> Self {
        Self {
            zone_id: zone_id.into(),
            layers,
        }
    }
}

/// Merged result of allocating every zone of a design.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneAllocation {
    /// Per-zone driver lists; zones with no placeable fixtures are absent
    pub drivers_by_zone: HashMap<String, Vec<Driver>>,
    /// Warnings from all zones, in zone input order
    pub warnings: Vec<String>,
}

/// Allocate drivers for every zone and merge the results.
///
/// Zones are processed sequentially in input order, so the concatenated
/// warning list is deterministic: zone order, then layer order, then
/// fixture order. `mix_map` labels each zone's placements with its mix id;
/// zones missing from the map get an empty label.
pub fn allocate_across_zones(
    zones: &[ZonePlan],
    mix_map: &HashMap<String, String>,
    source: &impl FixtureSource,
    layout: &CabinetLayout,
) -> ZoneAllocation {
    let mut drivers_by_zone = HashMap::new();
    let mut warnings = Vec::new();

    for zone in zones {
        let mix_id = mix_map.get(&zone.zone_id).cloned().unwrap_or_default();
        let mut layers: Vec<LayerInfo> = Vec::new();

        for layer in &zone.layers {
            let mut fixtures = Vec::with_capacity(layer.object_ids.len());
            for object_id in &layer.object_ids {
                match source.fixture(object_id) {
                    Some(fixture) => fixtures.push(fixture),
                    None => {
                        tracing::warn!(
                            zone = %zone.zone_id,
                            layer = %layer.layer_id,
                            object = %object_id,
                            "object id did not resolve to a fixture; excluded from allocation"
                        );
                    }
                }
            }
            // Empty layers never reach the allocator.
            if !fixtures.is_empty() {
                layers.push(LayerInfo::new(
                    &layer.layer_id,
                    &zone.zone_id,
                    &mix_id,
                    fixtures,
                ));
            }
        }

        if layers.is_empty() {
            continue;
        }

        let result = allocate(&layers, layout);
        warnings.extend(result.warnings);
        drivers_by_zone.insert(zone.zone_id.clone(), result.drivers);
    }

    ZoneAllocation {
        drivers_by_zone,
        warnings,
    }
}
