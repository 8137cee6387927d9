//! Integration tests for the Crescendo automation engine.
//!
//! Exercises the full lifecycle the way a playback driver and a UI layer
//! would together: lane CRUD, per-tick applies against live mixer state,
//! live recording, looped playback, and session export/import.
//!
//! Run with:
//! ```bash
//! cargo test -p crescendo --test automation_integration
//! ```

use approx::assert_relative_eq;
use crescendo::prelude::*;
use crescendo::LaneColor;

/// A small session: one track with a volume fade and a pan sweep, one
/// effect with a filter-cutoff lane, ticked across a timeline.
#[test]
fn test_session_playback_workflow() {
    let mut engine = AutomationEngine::new();
    let track_id = TrackId::fresh();
    let effect_id = EffectId::fresh();

    let volume = engine.create_lane(track_id, "volume");
    let pan = engine.create_lane(track_id, "pan");
    let cutoff = engine.create_lane(track_id, &format!("effect.{effect_id}.cutoff"));

    // Fade in over 8 beats, sweep pan left to right over 16.
    let _ = engine.add_point(volume, 0.0, 0.0, CurveKind::Smooth);
    let _ = engine.add_point(volume, 8.0, 1.0, CurveKind::Linear);
    let _ = engine.add_point(pan, 0.0, -1.0, CurveKind::Linear);
    let _ = engine.add_point(pan, 16.0, 1.0, CurveKind::Linear);
    let _ = engine.add_point(cutoff, 0.0, 0.1, CurveKind::Exponential);
    let _ = engine.add_point(cutoff, 16.0, 0.9, CurveKind::Linear);

    let mut track = TrackState::new(track_id);
    let mut effect = EffectState::new(effect_id);
    effect.insert_param("cutoff", 0.5);

    // Tick through the timeline; every tick applies deterministically.
    for tick in 0..=32 {
        let time = tick as f64 * 0.5;
        engine.apply_track_automation(&mut track, time);
        engine.apply_effect_automation(&mut effect, time);

        assert!((0.0..=1.0).contains(&track.volume), "volume left its range");
        assert!((-1.0..=1.0).contains(&track.pan), "pan left its range");
        let cutoff_value = effect.param("cutoff").unwrap();
        assert!(cutoff_value.is_finite());
    }

    // Halfway through the sweep the pan crosses center.
    engine.apply_track_automation(&mut track, 8.0);
    assert_relative_eq!(track.pan, 0.0);

    // Past the last point everything holds its final value.
    engine.apply_track_automation(&mut track, 100.0);
    assert_eq!(track.volume, 1.0);
    assert_eq!(track.pan, 1.0);
    engine.apply_effect_automation(&mut effect, 100.0);
    assert_eq!(effect.param("cutoff"), Some(0.9));
}

#[test]
fn test_edit_during_playback_is_immediately_visible() {
    let mut engine = AutomationEngine::new();
    let track_id = TrackId::fresh();
    let lane = engine.create_lane(track_id, "volume");
    let _ = engine.add_point(lane, 0.0, 0.0, CurveKind::Linear);
    let _ = engine.add_point(lane, 10.0, 1.0, CurveKind::Linear);

    let mut track = TrackState::new(track_id);
    engine.apply_track_automation(&mut track, 5.0);
    assert_eq!(track.volume, 0.5);

    // A UI edit between ticks: the rebuilt curve is visible on the very
    // next apply, no async gap.
    let _ = engine.update_point(lane, 1, 10.0, 0.5);
    engine.apply_track_automation(&mut track, 5.0);
    assert_eq!(track.volume, 0.25);
}

#[test]
fn test_ui_teardown_race_is_harmless() {
    let mut engine = AutomationEngine::new();
    let track_id = TrackId::fresh();
    let lane = engine.create_lane(track_id, "volume");
    let _ = engine.set_record_state(lane, RecordState::Latch);

    // The UI deletes the track's lanes while a recording pass is mid-flight.
    assert_eq!(engine.delete_lanes_for_track(track_id), 1);

    // Late-arriving writes from the recorder are skipped, never a crash.
    let outcome = engine.record_point(lane, 3.0, 0.7);
    assert_eq!(outcome.skip_reason(), Some(SkipReason::UnknownLane));
    assert_eq!(engine.value_at(lane, 3.0), 0.0);
}

#[test]
fn test_live_recording_then_playback() {
    let mut engine = AutomationEngine::new();
    let track_id = TrackId::fresh();
    let lane = engine.create_lane(track_id, "pan");
    let _ = engine.set_record_state(lane, RecordState::Write);

    // Record a sweep from a control surface, out of order.
    for (time, value) in [(2.0, 0.5), (0.0, -1.0), (1.0, 0.0), (3.0, 1.0)] {
        assert!(engine.record_point(lane, time, value).applied());
    }

    // Write state records but does not read; flip to Play for playback.
    let mut track = TrackState::new(track_id);
    assert_eq!(engine.apply_track_automation(&mut track, 1.5), 0);
    let _ = engine.set_record_state(lane, RecordState::Play);

    engine.apply_track_automation(&mut track, 1.5);
    assert_eq!(track.pan, 0.25);
}

#[test]
fn test_looped_playback_wraps_automation() {
    let mut engine = AutomationEngine::new();
    let track_id = TrackId::fresh();
    let lane = engine.create_lane(track_id, "volume");
    let _ = engine.add_point(lane, 0.0, 0.0, CurveKind::Linear);
    let _ = engine.add_point(lane, 4.0, 1.0, CurveKind::Linear);
    let _ = engine.add_point(lane, 8.0, 0.5, CurveKind::Linear);

    // Loop beats [4, 8): beat 10 reads as beat 6.
    let wrapped = engine.value_at_looped(lane, 10.0, 4.0, 8.0).unwrap();
    assert_eq!(wrapped, engine.value_at(lane, 6.0));

    // A degenerate loop range is an error, not a wrong value.
    assert!(engine.value_at_looped(lane, 10.0, 8.0, 4.0).is_err());
}

#[test]
fn test_session_export_import_restores_playback() {
    let mut engine = AutomationEngine::new();
    let track_id = TrackId::fresh();
    let effect_id = EffectId::fresh();

    let volume = engine.create_lane(track_id, "volume");
    let cutoff = engine.create_lane(track_id, &format!("effect.{effect_id}.drive"));
    let _ = engine.add_point(volume, 0.0, 0.3, CurveKind::Smooth);
    let _ = engine.add_point(volume, 6.0, 0.9, CurveKind::Linear);
    let _ = engine.add_point(cutoff, 0.0, 0.2, CurveKind::Linear);
    let _ = engine.set_visible(cutoff, false);

    let json = engine.export_all().to_json().unwrap();

    // A new session restores the same observable behavior.
    let mut restored = AutomationEngine::new();
    restored.import_all(AutomationSnapshot::from_json(&json).unwrap());

    assert_eq!(restored.lane_count(), 2);
    let mut track = TrackState::new(track_id);
    restored.apply_track_automation(&mut track, 3.0);
    let mut reference = TrackState::new(track_id);
    engine.apply_track_automation(&mut reference, 3.0);
    assert_eq!(track.volume, reference.volume);

    let lane = restored.lane(cutoff).expect("lane id survives the round trip");
    assert!(!lane.visible);
    assert!(lane.enabled);
}

/// Foreign payloads may omit ids, flags, and colors; import fills them in.
#[test]
fn test_import_foreign_payload() {
    let track_id = TrackId::fresh();
    let payload = serde_json::json!({
        "lanes": [{
            "trackId": track_id,
            "parameter": "volume",
            "points": [
                { "time": 0.0, "value": 0.25 },
                { "time": 4.0, "value": 0.75, "curve": "Smooth" }
            ]
        }]
    });

    let mut engine = AutomationEngine::new();
    engine.import_all(AutomationSnapshot::from_json(&payload.to_string()).unwrap());

    let lane = engine.all_lanes().next().expect("one lane imported");
    assert!(lane.enabled);
    assert!(lane.visible);
    assert_eq!(lane.color, LaneColor::for_target(&ParamTarget::parse("volume")));

    let mut track = TrackState::new(track_id);
    engine.apply_track_automation(&mut track, 0.0);
    assert_eq!(track.volume, 0.25);
}

#[test]
fn test_track_teardown_then_session_reset() {
    let mut engine = AutomationEngine::new();
    let keep = TrackId::fresh();
    let doomed = TrackId::fresh();

    engine.create_lane(keep, "volume");
    engine.create_lane(doomed, "volume");
    engine.create_lane(doomed, "pan");
    assert_eq!(engine.lane_count(), 3);

    assert_eq!(engine.delete_lanes_for_track(doomed), 2);
    assert_eq!(engine.lanes_for_track(keep).len(), 1);

    engine.clear_all();
    assert_eq!(engine.lane_count(), 0);
    assert!(engine.all_lanes().next().is_none());
}
