use luxplan_core::{allocate_across_zones, CabinetLayout, FixtureInfo, LayerPlan, ZonePlan};
use std::collections::HashMap;

fn source_of(fixtures: &[(&str, u32, f32)]) -> HashMap<String, FixtureInfo> {
    fixtures
        .iter()
        .map(|(id, channels, watts)| (id.to_string(), FixtureInfo::new(*id, *channels, *watts)))
        .collect()
}

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

#[test]
fn test_two_zones_allocate_independently() {
    let source = source_of(&[("a", 3, 20.0), ("b", 3, 20.0)]);
    let zones = vec![
        ZonePlan::new("kitchen", vec![LayerPlan::new("task", ids(&["a"]))]),
        ZonePlan::new("hallway", vec![LayerPlan::new("ambient", ids(&["b"]))]),
    ];

    let result = allocate_across_zones(&zones, &HashMap::new(), &source, &CabinetLayout::default());

    assert_eq!(result.drivers_by_zone.len(), 2);
    assert!(result.warnings.is_empty());
    assert_eq!(result.drivers_by_zone["kitchen"].len(), 1);
    assert_eq!(result.drivers_by_zone["hallway"].len(), 1);
    assert_eq!(result.drivers_by_zone["kitchen"][0].assignments[0].fixture_id, "a");
    assert_eq!(result.drivers_by_zone["hallway"][0].assignments[0].fixture_id, "b");
}

#[test]
fn test_fully_unresolved_zone_is_absent() {
    let source = source_of(&[("a", 3, 20.0)]);
    let zones = vec![
        ZonePlan::new("kitchen", vec![LayerPlan::new("task", ids(&["a"]))]),
        ZonePlan::new("attic", vec![LayerPlan::new("ghost", ids(&["x", "y"]))]),
    ];

    let result = allocate_across_zones(&zones, &HashMap::new(), &source, &CabinetLayout::default());

    assert_eq!(result.drivers_by_zone.len(), 1);
    assert!(result.drivers_by_zone.contains_key("kitchen"));
    assert!(!result.drivers_by_zone.contains_key("attic"));
    assert!(result.warnings.is_empty());
}

#[test]
fn test_empty_layer_is_dropped_but_zone_survives() {
    let source = source_of(&[("a", 3, 20.0)]);
    let zones = vec![ZonePlan::new(
        "kitchen",
        vec![
            LayerPlan::new("ghost", ids(&["missing"])),
            LayerPlan::new("task", ids(&["a"])),
        ],
    )];

    let result = allocate_across_zones(&zones, &HashMap::new(), &source, &CabinetLayout::default());

    let drivers = &result.drivers_by_zone["kitchen"];
    assert_eq!(drivers.len(), 1);
    assert_eq!(drivers[0].assignments.len(), 1);
    assert_eq!(drivers[0].assignments[0].layer_id, "task");
}

#[test]
fn test_warnings_concatenate_in_zone_order() {
    let source = source_of(&[("big-a", 8, 10.0), ("big-b", 9, 10.0), ("ok", 3, 20.0)]);
    let zones = vec![
        ZonePlan::new("z1", vec![LayerPlan::new("l1", ids(&["big-a", "ok"]))]),
        ZonePlan::new("z2", vec![LayerPlan::new("l2", ids(&["big-b", "ok"]))]),
    ];

    let result = allocate_across_zones(&zones, &HashMap::new(), &source, &CabinetLayout::default());

    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings[0].contains("big-a"));
    assert!(result.warnings[1].contains("big-b"));
}

#[test]
fn test_mix_map_and_layout_flow_through() {
    let source = source_of(&[("a", 6, 20.0), ("b", 6, 20.0), ("c", 6, 20.0)]);
    let zones = vec![ZonePlan::new(
        "lounge",
        vec![LayerPlan::new("wash", ids(&["a", "b", "c"]))],
    )];
    let mut mix_map = HashMap::new();
    mix_map.insert("lounge".to_string(), "dusk".to_string());
    let layout = CabinetLayout::new(2).unwrap();

    let result = allocate_across_zones(&zones, &mix_map, &source, &layout);

    let drivers = &result.drivers_by_zone["lounge"];
    assert_eq!(drivers.len(), 3);
    assert_eq!(drivers[0].assignments[0].mix_id, "dusk");
    assert_eq!(drivers[2].cabinet_id, "CAB2");
    // Driver 3 spilled past the two-driver cabinet.
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("Driver 3"));
}
