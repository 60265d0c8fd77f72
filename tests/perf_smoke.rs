use grapple_engine::{Arena, FrameOutcome};

#[test]
fn perf_smoke_frames() {
    let Ok(mut arena) = Arena::new(1280.0, 720.0) else {
        panic!("arena should build");
    };
    arena.enable_perf_metrics(true);
    arena.key_event("d", true);
    arena.key_event("j", true);

    assert_eq!(arena.advance(0.0), FrameOutcome::Primed);
    for i in 1..=120 {
        assert_eq!(arena.advance(i as f64 * 16.0), FrameOutcome::Stepped);
    }

    let stats = arena.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.body_count(), arena.body_count());
    assert_eq!(arena.frame(), 120);
    assert_eq!(arena.collectible_count(), 3);
}

#[test]
fn snapshot_json_is_well_formed() {
    let Ok(mut arena) = Arena::new(800.0, 600.0) else {
        panic!("arena should build");
    };
    arena.step(1.6);

    let json: serde_json::Value = serde_json::from_str(&arena.snapshot_json()).unwrap();
    assert_eq!(json["frame"], 1);
    assert_eq!(json["players"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        json["anchors"].as_array().map(Vec::len),
        Some(arena.anchors_flat().len() / 2)
    );
}
