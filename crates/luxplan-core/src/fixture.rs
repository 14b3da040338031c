//! Fixture and layer descriptors
//!
//! These types describe what the allocator packs: each fixture's resource
//! demand (output channels, wattage) and the layer grouping that determines
//! placement order. They are built by the caller from canvas/object state
//! and are immutable once constructed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Channel count assumed for fixtures whose object data does not specify one.
pub const DEFAULT_CHANNEL_COUNT: u32 = 3;

/// Resource demand of a single lighting fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureInfo {
    /// Opaque external identifier, unique within a layer
    pub id: String,
    /// Number of driver output channels the fixture occupies (>= 1)
    pub channel_count: u32,
    /// Nominal load in watts (>= 0)
    pub watt_power: f32,
}

impl FixtureInfo {
    /// Create a fixture descriptor.
    pub fn new(id: impl Into<String>, channel_count: u32, watt_power: f32) -> Self {
        Self {
            id: id.into(),
            channel_count,
            watt_power,
        }
    }

    /// Create a fixture descriptor from possibly-missing object data,
    /// applying the collaborator defaults (3 channels, 0 W).
    pub fn from_partial(
        id: impl Into<String>,
        channel_count: Option<u32>,
        watt_power: Option<f32>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_count: channel_count.unwrap_or(DEFAULT_CHANNEL_COUNT),
            watt_power: watt_power.unwrap_or(0.0),
        }
    }
}

/// A named group of fixtures sharing a zone and a lighting mix.
///
/// Fixture order is semantic: the allocator places fixtures in this order,
/// and first-fit packing is order-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerInfo {
    /// Layer identifier
    pub layer_id: String,
    /// Zone the layer belongs to
    pub zone_id: String,
    /// Lighting mix label shared by the layer's fixtures
    pub mix_id: String,
    /// Fixtures in placement order
    pub fixtures: Vec<FixtureInfo>,
}

impl LayerInfo {
    /// Create a layer descriptor.
    pub fn new(
        layer_id: impl Into<String>,
        zone_id: impl Into<String>,
        mix_id: impl Into<String>,
        fixtures: Vec<FixtureInfo>,
    ) -> Self {
        Self {
            layer_id: layer_id.into(),
            zone_id: zone_id.into(),
            mix_id: mix_id.into(),
            fixtures,
        }
    }
}

/// Read-only lookup from canvas object ids to fixture descriptors.
///
/// This is the boundary to the (out-of-scope) canvas/object model. Ids that
/// fail to resolve are excluded from allocation by the zone orchestrator.
pub trait FixtureSource {
    /// Resolve one object id to its fixture descriptor, if known.
    fn fixture(&self, object_id: &str) -> Option<FixtureInfo>;
}

impl FixtureSource for HashMap<String, FixtureInfo> {
    fn fixture(&self, object_id: &str) -> Option<FixtureInfo> {
        self.get(object_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_partial_applies_defaults() {
        let f = FixtureInfo::from_partial("obj-1", None, None);
        assert_eq!(f.channel_count, DEFAULT_CHANNEL_COUNT);
        assert_eq!(f.watt_power, 0.0);

        let g = FixtureInfo::from_partial("obj-2", Some(6), Some(42.5));
        assert_eq!(g.channel_count, 6);
        assert_eq!(g.watt_power, 42.5);
    }

    #[test]
    fn test_hashmap_fixture_source() {
        let mut source = HashMap::new();
        source.insert("a".to_string(), FixtureInfo::new("a", 3, 40.0));

        assert_eq!(source.fixture("a").unwrap().channel_count, 3);
        assert!(source.fixture("missing").is_none());
    }
}
