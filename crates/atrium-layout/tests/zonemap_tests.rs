use atrium_geom::Vec2;
use atrium_layout::{LayoutConfig, RegionKind, WingDir, ZoneMap};

/// Reference layout from the shipped defaults: navigable hub half-extent 9,
/// corridors spanning 9..23 from the hub center, rooms of half-extent 6
/// centered 29 out along each wing.
fn reference_map() -> ZoneMap {
    ZoneMap::from_config(&LayoutConfig::default())
}

#[test]
fn reference_dimensions() {
    let map = reference_map();
    let hub = map.hub();
    assert_eq!(hub.kind, RegionKind::Hub);
    assert!((hub.half.x - 9.0).abs() < 1e-5);
    let room = map.room_center(WingDir::PosX).expect("pos_x room");
    assert!((room.x - 29.0).abs() < 1e-5);
    assert!(room.z.abs() < 1e-5);
}

#[test]
fn classify_prefers_hub_at_doorway() {
    let map = reference_map();
    // The hub edge point also satisfies the corridor's near end.
    let p = Vec2::new(9.0, 0.0);
    let r = map.classify(p).expect("contained");
    assert_eq!(r.kind, RegionKind::Hub);
}

#[test]
fn classify_corridor_and_room() {
    let map = reference_map();
    assert_eq!(
        map.classify(Vec2::new(16.0, 0.2)).map(|r| r.kind),
        Some(RegionKind::Corridor)
    );
    assert_eq!(
        map.classify(Vec2::new(29.0, 4.0)).map(|r| r.kind),
        Some(RegionKind::Room)
    );
    assert!(map.classify(Vec2::new(50.0, 50.0)).is_none());
}

#[test]
fn clamp_is_identity_inside_any_region() {
    let map = reference_map();
    for p in [
        Vec2::new(0.0, 0.0),
        Vec2::new(-8.0, 8.0),
        Vec2::new(12.0, 0.5),
        Vec2::new(29.0, -5.5),
        Vec2::new(0.3, -27.0),
    ] {
        let c = map.clamp(p);
        assert!((c.x - p.x).abs() < 1e-6 && (c.z - p.z).abs() < 1e-6, "{p:?}");
    }
}

#[test]
fn clamp_overshoot_lands_on_room_far_edge() {
    // Raw hit beyond the +X room clamps to the room's far navigable edge,
    // not back into the corridor.
    let map = reference_map();
    let c = map.clamp(Vec2::new(40.0, 0.0));
    assert!((c.x - 35.0).abs() < 1e-5, "got {c:?}");
    assert!(c.z.abs() < 1e-5);
}

#[test]
fn clamp_routes_into_negative_wings() {
    let map = reference_map();
    let c = map.clamp(Vec2::new(-40.0, 0.5));
    assert!((c.x + 35.0).abs() < 1e-5, "got {c:?}");
    assert!((c.z - 0.5).abs() < 1e-5);

    let c = map.clamp(Vec2::new(0.4, -41.0));
    assert!((c.z + 35.0).abs() < 1e-5, "got {c:?}");
    assert!((c.x - 0.4).abs() < 1e-5);
}

#[test]
fn clamp_off_strip_corridor_point_returns_to_hub() {
    let map = reference_map();
    // Alongside the corridor but laterally outside its strip: no region and
    // no strip match, so the fail-safe pulls the point back into the hub.
    let c = map.clamp(Vec2::new(16.0, 1.4));
    assert!((c.x - 9.0).abs() < 1e-5, "got {c:?}");
    assert!((c.z - 1.4).abs() < 1e-5);
}

#[test]
fn clamp_fail_safe_returns_to_hub() {
    let map = reference_map();
    // Diagonal no-man's-land between two wings.
    let c = map.clamp(Vec2::new(30.0, 30.0));
    assert!((c.x - 9.0).abs() < 1e-5 && (c.z - 9.0).abs() < 1e-5, "got {c:?}");
}

#[test]
fn clamp_malformed_point_recovers_to_hub_center() {
    let map = reference_map();
    let c = map.clamp(Vec2::new(f32::NAN, 3.0));
    assert!(c.x.abs() < 1e-6 && c.z.abs() < 1e-6);
    let c = map.clamp(Vec2::new(1.0, f32::INFINITY));
    assert!(c.x.abs() < 1e-6 && c.z.abs() < 1e-6);
}

#[test]
fn layout_without_wings_clamps_everything_to_hub() {
    let mut cfg = LayoutConfig::default();
    cfg.wings.clear();
    let map = ZoneMap::from_config(&cfg);
    let c = map.clamp(Vec2::new(100.0, -3.0));
    assert!((c.x - 9.0).abs() < 1e-5 && (c.z + 3.0).abs() < 1e-5);
    assert!(map.room_center(WingDir::PosX).is_none());
}
